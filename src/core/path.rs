//! Path styling and point sequences.
//!
//! A request carries at most one path, serialized as a single `path`
//! parameter value: style pairs first, then the points, pipe-separated.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Stroke and fill styling for the path line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStyle {
    weight: Option<u32>,
    color: Option<String>,
    fillcolor: Option<String>,
    geodesic: Option<bool>,
}

impl PathStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke weight. Must be positive.
    pub fn with_weight(mut self, weight: u32) -> Result<Self> {
        if weight == 0 {
            return Err(Error::Validation {
                field: "weight",
                value: weight.to_string(),
                expected: "a positive stroke weight".to_string(),
            });
        }
        self.weight = Some(weight);
        Ok(self)
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_fillcolor(mut self, fillcolor: impl Into<String>) -> Self {
        self.fillcolor = Some(fillcolor.into());
        self
    }

    /// Draw the line along the Earth's curvature instead of the projection.
    pub fn with_geodesic(mut self, geodesic: bool) -> Self {
        self.geodesic = Some(geodesic);
        self
    }

    pub fn weight(&self) -> Option<u32> {
        self.weight
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn fillcolor(&self) -> Option<&str> {
        self.fillcolor.as_deref()
    }

    pub fn geodesic(&self) -> Option<bool> {
        self.geodesic
    }

    /// Overlay `other`'s set fields onto this style in place.
    pub fn apply(&mut self, other: &PathStyle) {
        if let Some(weight) = other.weight {
            self.weight = Some(weight);
        }
        if let Some(color) = &other.color {
            self.color = Some(color.clone());
        }
        if let Some(fillcolor) = &other.fillcolor {
            self.fillcolor = Some(fillcolor.clone());
        }
        if let Some(geodesic) = other.geodesic {
            self.geodesic = Some(geodesic);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weight.is_none()
            && self.color.is_none()
            && self.fillcolor.is_none()
            && self.geodesic.is_none()
    }

    /// Set fields as `key:value` segments, in wire order.
    pub(crate) fn segments(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(weight) = self.weight {
            out.push(format!("weight:{weight}"));
        }
        if let Some(color) = &self.color {
            out.push(format!("color:{color}"));
        }
        if let Some(fillcolor) = &self.fillcolor {
            out.push(format!("fillcolor:{fillcolor}"));
        }
        if let Some(geodesic) = self.geodesic {
            out.push(format!("geodesic:{geodesic}"));
        }
        out
    }
}

/// A styled sequence of path points. Points are addresses or coordinate
/// strings, passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSpec {
    pub style: PathStyle,
    pub points: Vec<String>,
}

impl PathSpec {
    pub fn new<I, S>(points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            style: PathStyle::default(),
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Render to the `path` wire value. A spec with neither style nor
    /// points renders to nothing.
    pub(crate) fn render(&self) -> Option<String> {
        let mut segments = self.style.segments();
        segments.extend(self.points.iter().cloned());
        if segments.is_empty() {
            None
        } else {
            Some(segments.join("|"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_style_then_points() {
        let spec = PathSpec::new(["Seattle, WA", "Tacoma, WA"]).with_style(
            PathStyle::new()
                .with_weight(5)
                .unwrap()
                .with_color("0xff0000ff")
                .with_geodesic(true),
        );
        assert_eq!(
            spec.render().unwrap(),
            "weight:5|color:0xff0000ff|geodesic:true|Seattle, WA|Tacoma, WA"
        );
    }

    #[test]
    fn test_weight_must_be_positive() {
        let err = PathStyle::new().with_weight(0).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "weight", .. }));
    }

    #[test]
    fn test_empty_spec_renders_nothing() {
        assert!(PathSpec::default().render().is_none());
    }

    #[test]
    fn test_apply_overlays_set_fields() {
        let mut style = PathStyle::new().with_color("red");
        style.apply(&PathStyle::new().with_weight(3).unwrap());
        assert_eq!(style.weight(), Some(3));
        assert_eq!(style.color(), Some("red"));
    }
}
