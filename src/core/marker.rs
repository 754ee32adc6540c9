//! Marker styling and placement.
//!
//! Each [`MarkerSpec`] serializes into one value of the repeated `markers`
//! query parameter: its style pairs first, then its locations, all
//! pipe-separated.

use serde::{Deserialize, Serialize};

/// Visual styling applied to one group of markers. All fields are free-text
/// and unset by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size: Option<String>,
    pub color: Option<String>,
    pub label: Option<String>,
    pub scale: Option<String>,
    pub anchor: Option<String>,
    pub icon: Option<String>,
}

impl MarkerStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Overlay `other`'s set fields onto this style in place.
    pub fn apply(&mut self, other: &MarkerStyle) {
        let merged = self.merged_with(other);
        *self = merged;
    }

    /// Returns a copy of this style with `other`'s set fields winning.
    pub fn merged_with(&self, other: &MarkerStyle) -> MarkerStyle {
        MarkerStyle {
            size: other.size.clone().or_else(|| self.size.clone()),
            color: other.color.clone().or_else(|| self.color.clone()),
            label: other.label.clone().or_else(|| self.label.clone()),
            scale: other.scale.clone().or_else(|| self.scale.clone()),
            anchor: other.anchor.clone().or_else(|| self.anchor.clone()),
            icon: other.icon.clone().or_else(|| self.icon.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_none()
            && self.color.is_none()
            && self.label.is_none()
            && self.scale.is_none()
            && self.anchor.is_none()
            && self.icon.is_none()
    }

    /// Set fields as `key:value` segments, in the wire order the API
    /// documents them.
    pub(crate) fn segments(&self) -> Vec<String> {
        let ordered = [
            ("size", &self.size),
            ("color", &self.color),
            ("label", &self.label),
            ("scale", &self.scale),
            ("anchor", &self.anchor),
            ("icon", &self.icon),
        ];
        ordered
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}:{v}")))
            .collect()
    }
}

/// One `markers` parameter value: a style plus the locations it applies to.
/// Locations are addresses or `"lat,lng"` strings, passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub style: MarkerStyle,
    pub locations: Vec<String>,
}

impl MarkerSpec {
    /// Create an unstyled spec for a single location.
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            style: MarkerStyle::default(),
            locations: vec![location.into()],
        }
    }

    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            style: MarkerStyle::default(),
            locations: locations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_location(&mut self, location: impl Into<String>) -> &mut Self {
        self.locations.push(location.into());
        self
    }

    /// Render to the wire value, merging `defaults` under this spec's own
    /// style. A spec with no locations renders to nothing.
    pub(crate) fn render(&self, defaults: &MarkerStyle) -> Option<String> {
        if self.locations.is_empty() {
            return None;
        }
        let style = defaults.merged_with(&self.style);
        let mut segments = style.segments();
        segments.extend(self.locations.iter().cloned());
        Some(segments.join("|"))
    }
}
