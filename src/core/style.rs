//! Styled-map rules.
//!
//! Each [`StyleRule`] becomes one indexed `style[n]` parameter:
//! `feature:F|element:E|rule:value|…`, with feature and element as optional
//! leading segments. Rules keep their submission order; a map keyed by rule
//! name would reorder them on the wire.

use serde::{Deserialize, Serialize};

/// One entry in the `style[n]` parameter family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    feature: Option<String>,
    element: Option<String>,
    rules: Vec<(String, String)>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the map feature this rule applies to (e.g. `water`).
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Select the feature element this rule applies to (e.g. `geometry`).
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Append one styling rule, preserving submission order.
    pub fn with_rule(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.rules.push((name.into(), value.into()));
        self
    }

    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn rules(&self) -> &[(String, String)] {
        &self.rules
    }

    /// Render to the wire value. A rule with nothing set renders to nothing
    /// and is skipped without consuming an index.
    pub(crate) fn render(&self) -> Option<String> {
        let mut segments = Vec::new();
        if let Some(feature) = &self.feature {
            segments.push(format!("feature:{feature}"));
        }
        if let Some(element) = &self.element {
            segments.push(format!("element:{element}"));
        }
        for (name, value) in &self.rules {
            segments.push(format!("{name}:{value}"));
        }
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
    fn test_full_rule() {
        let rule = StyleRule::new()
            .with_feature("water")
            .with_element("geometry")
            .with_rule("color", "0x2c4d58");
        assert_eq!(
            rule.render().unwrap(),
            "feature:water|element:geometry|color:0x2c4d58"
        );
    }

    #[test]
    fn test_feature_and_element_are_optional() {
        let rule = StyleRule::new()
            .with_feature("landscape")
            .with_rule("color", "0xeaead9");
        assert_eq!(rule.render().unwrap(), "feature:landscape|color:0xeaead9");

        let bare = StyleRule::new().with_rule("visibility", "off");
        assert_eq!(bare.render().unwrap(), "visibility:off");
    }

    #[test]
    fn test_rules_keep_submission_order() {
        let rule = StyleRule::new()
            .with_rule("visibility", "on")
            .with_rule("color", "0x111111")
            .with_rule("weight", "2");
        assert_eq!(
            rule.render().unwrap(),
            "visibility:on|color:0x111111|weight:2"
        );
    }

    #[test]
    fn test_empty_rule_renders_nothing() {
        assert!(StyleRule::new().render().is_none());
    }
}
