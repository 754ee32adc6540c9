//! Minimal `<img>` tag rendering for a built URL.

/// An HTML attribute value: text, or a boolean flag that renders as a bare
/// attribute name when true and disappears when false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
}

impl AttrValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn flag(on: bool) -> Self {
        Self::Flag(on)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Render an `<img>` tag for `url`.
///
/// Defaults are `alt="Google Map"` and `loading="lazy"`; caller attributes
/// override defaults by name and otherwise append in order. The URL and all
/// text values are escaped for embedding.
pub fn img_tag(url: &str, attrs: &[(&str, AttrValue)]) -> String {
    let defaults = [
        ("alt", AttrValue::text("Google Map")),
        ("loading", AttrValue::text("lazy")),
    ];
    let mut merged: Vec<(&str, &AttrValue)> =
        defaults.iter().map(|(name, value)| (*name, value)).collect();
    for (name, value) in attrs {
        match merged.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => merged.push((*name, value)),
        }
    }

    let mut tag = format!("<img src=\"{}\"", escape(url));
    for (name, value) in merged {
        match value {
            AttrValue::Text(text) => {
                tag.push_str(&format!(" {}=\"{}\"", name, escape(text)));
            }
            AttrValue::Flag(true) => {
                tag.push(' ');
                tag.push_str(name);
            }
            AttrValue::Flag(false) => {}
        }
    }
    tag.push_str(" />");
    tag
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
