//! Flattened query parameters for a single request.
//!
//! A [`RequestParams`] is built fresh per call and consumed by
//! [`RequestParams::into_url`]; it is never persisted or reused. Scalar
//! pairs keep insertion order. The two collection conventions the upstream
//! API accepts are both supported and deliberately distinct: `markers`
//! repeats its key once per value, `style` suffixes the key with `[index]`.

use url::form_urlencoded;

use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one scalar pair. Pairs with an empty value are dropped
    /// entirely, which is how unset optional fields stay out of the URL.
    pub fn push(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    /// Repeated-key expansion: `key=a&key=b`.
    pub fn push_repeated<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = String>,
    {
        for value in values {
            self.push(key, value);
        }
        self
    }

    /// Indexed expansion: `key[0]=a&key[1]=b`, indexes in submission order.
    pub fn push_indexed<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = String>,
    {
        for (index, value) in values.into_iter().enumerate() {
            self.push(&format!("{key}[{index}]"), value);
        }
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Serialize to `{endpoint}?{query}` with the API key appended last.
    ///
    /// The mandatory `size` parameter is enforced here so that no build
    /// path can skip the check; an upstream request without it would be
    /// rejected anyway.
    pub fn into_url(mut self, endpoint: &str, api_key: &str) -> Result<String> {
        if !self.contains("size") {
            return Err(Error::MissingParameter("size"));
        }
        self.pairs.push(("key".to_string(), api_key.to_string()));

        let query: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect();
        Ok(format!("{endpoint}?{}", query.join("&")))
    }
}

/// Form-urlencode one component (space becomes `+`).
fn encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_dropped() {
        let mut params = RequestParams::new();
        params.push("language", "").push("region", "us");
        assert!(!params.contains("language"));
        assert!(params.contains("region"));
    }

    #[test]
    fn test_repeated_expansion() {
        let mut params = RequestParams::new();
        params.push("size", "600x300");
        params.push_repeated("markers", vec!["a".to_string(), "b".to_string()]);
        let url = params.into_url("https://example.test/map", "K").unwrap();
        assert!(url.contains("markers=a&markers=b"));
    }

    #[test]
    fn test_indexed_expansion() {
        let mut params = RequestParams::new();
        params.push("size", "600x300");
        params.push_indexed("style", vec!["x".to_string(), "y".to_string()]);
        let url = params.into_url("https://example.test/map", "K").unwrap();
        assert!(url.contains("style%5B0%5D=x&style%5B1%5D=y"));
    }

    #[test]
    fn test_missing_size_is_rejected() {
        let mut params = RequestParams::new();
        params.push("zoom", "14");
        let err = params.into_url("https://example.test/map", "K").unwrap_err();
        assert!(matches!(err, Error::MissingParameter("size")));
    }

    #[test]
    fn test_key_is_appended_last() {
        let mut params = RequestParams::new();
        params.push("size", "600x300").push("zoom", "14");
        let url = params.into_url("https://example.test/map", "SECRET").unwrap();
        assert!(url.ends_with("&key=SECRET"));
    }

    #[test]
    fn test_form_encoding() {
        let mut params = RequestParams::new();
        params
            .push("size", "600x300")
            .push("center", "Seattle, WA")
            .push("markers", "color:red|label:A|Seattle, WA");
        let url = params.into_url("https://example.test/map", "K").unwrap();
        assert!(url.contains("center=Seattle%2C+WA"));
        assert!(url.contains("markers=color%3Ared%7Clabel%3AA%7CSeattle%2C+WA"));
    }
}
