//! Markup attribute and element tables (React prop spelling).
//!
//! Anything an element accepts as a real DOM attribute must stay on the
//! element; everything else a glamorous element received is a style.

/// Attributes valid on every element.
const GLOBAL_ATTRIBUTES: &[&str] = &[
    "about", "acceptCharset", "accessKey", "allowFullScreen", "allowTransparency",
    "autoCapitalize", "autoComplete", "autoCorrect", "autoFocus", "autoPlay", "autoSave",
    "capture", "cellPadding", "cellSpacing", "charSet", "children", "classID", "className",
    "colSpan", "contentEditable", "contextMenu", "crossOrigin", "dangerouslySetInnerHTML",
    "datatype", "dateTime", "dir", "draggable", "encType", "enterKeyHint", "formAction",
    "formEncType", "formMethod", "formNoValidate", "formTarget", "frameBorder", "hidden",
    "hrefLang", "htmlFor", "httpEquiv", "icon", "id", "inlist", "inputMode", "is", "itemID",
    "itemProp", "itemRef", "itemScope", "itemType", "key", "keyParams", "keyType", "lang",
    "marginHeight", "marginWidth", "maxLength", "mediaGroup", "minLength", "nonce",
    "noValidate", "prefix", "property", "radioGroup", "readOnly", "ref", "resource", "results",
    "role", "rowSpan", "scoped", "seamless", "security", "slot", "spellCheck", "srcDoc",
    "srcLang", "srcSet", "style", "suppressContentEditableWarning",
    "suppressHydrationWarning", "tabIndex", "title", "translate", "typeof", "unselectable",
    "useMap", "vocab", "wmode",
];

/// Attributes shared by all SVG elements.
const SVG_ATTRIBUTES: &[&str] = &[
    "clipPath", "clipPathUnits", "clipRule", "cx", "cy", "d", "dominantBaseline", "dx", "dy",
    "fill", "fillOpacity", "fillRule", "filter", "fx", "fy", "gradientTransform",
    "gradientUnits", "height", "href", "markerEnd", "markerMid", "markerStart", "mask",
    "offset", "opacity", "pathLength", "patternContentUnits", "patternTransform",
    "patternUnits", "points", "preserveAspectRatio", "r", "rx", "ry", "spreadMethod",
    "stopColor", "stopOpacity", "stroke", "strokeDasharray", "strokeDashoffset",
    "strokeLinecap", "strokeLinejoin", "strokeMiterlimit", "strokeOpacity", "strokeWidth",
    "textAnchor", "transform", "version", "viewBox", "width", "x", "x1", "x2", "xlinkHref",
    "xmlns", "xmlnsXlink", "y", "y1", "y2",
];

const HTML_ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
    "colgroup", "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt",
    "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input",
    "ins", "kbd", "keygen", "label", "legend", "li", "link", "main", "map", "mark", "menu",
    "menuitem", "meta", "meter", "nav", "noscript", "object", "ol", "optgroup", "option",
    "output", "p", "param", "picture", "pre", "progress", "q", "rp", "rt", "ruby", "s", "samp",
    "script", "section", "select", "small", "source", "span", "strong", "style", "sub",
    "summary", "sup", "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead",
    "time", "title", "tr", "track", "u", "ul", "var", "video", "wbr",
];

const SVG_ELEMENTS: &[&str] = &[
    "circle", "clipPath", "defs", "desc", "ellipse", "feBlend", "feColorMatrix",
    "feComponentTransfer", "feComposite", "feConvolveMatrix", "feDiffuseLighting",
    "feDisplacementMap", "feDistantLight", "feFlood", "feFuncA", "feFuncB", "feFuncG",
    "feFuncR", "feGaussianBlur", "feImage", "feMerge", "feMergeNode", "feMorphology",
    "feOffset", "fePointLight", "feSpecularLighting", "feSpotLight", "feTile", "feTurbulence",
    "filter", "foreignObject", "g", "image", "line", "linearGradient", "marker", "mask",
    "metadata", "path", "pattern", "polygon", "polyline", "radialGradient", "rect", "stop",
    "svg", "switch", "symbol", "text", "textPath", "tspan", "use", "view",
];

fn tag_attributes(tag: &str) -> &'static [&'static str] {
    match tag {
        "a" => &[
            "download", "href", "hrefLang", "media", "ping", "referrerPolicy", "rel", "target",
            "type",
        ],
        "area" => &[
            "alt", "coords", "download", "href", "hrefLang", "media", "rel", "shape", "target",
            "type",
        ],
        "audio" | "video" => &[
            "autoPlay", "controls", "crossOrigin", "height", "loop", "muted", "playsInline",
            "poster", "preload", "src", "width",
        ],
        "base" => &["href", "target"],
        "blockquote" | "q" => &["cite"],
        "button" => &[
            "autoFocus", "disabled", "form", "formAction", "formEncType", "formMethod",
            "formNoValidate", "formTarget", "name", "type", "value",
        ],
        "canvas" => &["height", "width"],
        "col" | "colgroup" => &["span", "width"],
        "data" | "li" => &["value"],
        "del" | "ins" => &["cite", "dateTime"],
        "details" | "dialog" => &["open"],
        "embed" => &["height", "src", "type", "width"],
        "fieldset" => &["disabled", "form", "name"],
        "form" => &[
            "acceptCharset", "action", "autoComplete", "encType", "method", "name", "noValidate",
            "target",
        ],
        "iframe" => &[
            "allow", "allowFullScreen", "frameBorder", "height", "loading", "name",
            "referrerPolicy", "sandbox", "scrolling", "seamless", "src", "srcDoc", "width",
        ],
        "img" => &[
            "alt", "crossOrigin", "decoding", "height", "loading", "sizes", "src", "srcSet",
            "useMap", "width",
        ],
        "input" => &[
            "accept", "alt", "autoComplete", "autoFocus", "capture", "checked", "defaultChecked",
            "defaultValue", "disabled", "form", "formAction", "formEncType", "formMethod",
            "formNoValidate", "formTarget", "height", "list", "max", "maxLength", "min",
            "minLength", "multiple", "name", "pattern", "placeholder", "readOnly", "required",
            "size", "src", "step", "type", "value", "width",
        ],
        "keygen" => &["autoFocus", "challenge", "disabled", "form", "keyType", "name"],
        "label" => &["form", "htmlFor"],
        "link" => &[
            "as", "crossOrigin", "href", "hrefLang", "integrity", "media", "rel", "sizes", "type",
        ],
        "map" | "param" => &["name", "value"],
        "menu" => &["type"],
        "meta" => &["charSet", "content", "httpEquiv", "name"],
        "meter" => &["form", "high", "low", "max", "min", "optimum", "value"],
        "object" => &["data", "form", "height", "name", "type", "useMap", "width"],
        "ol" => &["reversed", "start", "type"],
        "optgroup" => &["disabled", "label"],
        "option" => &["disabled", "label", "selected", "value"],
        "output" => &["form", "htmlFor", "name"],
        "progress" => &["max", "value"],
        "script" => &[
            "async", "charSet", "crossOrigin", "defer", "integrity", "nonce", "src", "type",
        ],
        "select" => &[
            "autoComplete", "autoFocus", "defaultValue", "disabled", "form", "multiple", "name",
            "required", "size", "value",
        ],
        "source" => &["media", "sizes", "src", "srcSet", "type"],
        "style" => &["media", "nonce", "scoped", "type"],
        "table" => &["cellPadding", "cellSpacing", "summary"],
        "td" => &["colSpan", "headers", "rowSpan"],
        "textarea" => &[
            "autoComplete", "autoFocus", "cols", "defaultValue", "disabled", "form", "maxLength",
            "minLength", "name", "placeholder", "readOnly", "required", "rows", "value", "wrap",
        ],
        "th" => &["abbr", "colSpan", "headers", "rowSpan", "scope"],
        "time" => &["dateTime"],
        "track" => &["default", "kind", "label", "src", "srcLang"],
        tag if is_svg_element(tag) => SVG_ATTRIBUTES,
        _ => &[],
    }
}

fn is_svg_element(tag: &str) -> bool {
    SVG_ELEMENTS.iter().any(|element| element.eq_ignore_ascii_case(tag))
}

/// Whether `name` is a DOM attribute of `tag` rather than a style.
pub fn is_markup_attribute(tag: &str, name: &str) -> bool {
    GLOBAL_ATTRIBUTES.contains(&name) || tag_attributes(tag).contains(&name)
}

/// Canonical spelling of a host element, looked up case-insensitively
/// (`Div` -> `div`, `ClipPath` -> `clipPath`).
pub fn element_name(name: &str) -> Option<&'static str> {
    HTML_ELEMENTS
        .iter()
        .chain(SVG_ELEMENTS)
        .copied()
        .find(|element| element.eq_ignore_ascii_case(name))
}

/// Host tag for a glamorous component name: `ClipPath` -> `clippath`.
pub fn host_tag(component: &str) -> String {
    component.to_lowercase()
}
