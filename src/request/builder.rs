//! URL construction from a store snapshot plus call-specific data.
//!
//! Every build operation is a pure function of the current snapshot and its
//! inputs; nothing here mutates the store. Merge precedence, lowest to
//! highest: built-in defaults, stored options, call overrides, computed
//! call fields, API key.

use log::debug;

use crate::core::{
    constants::STATIC_MAP_ENDPOINT,
    marker::MarkerSpec,
    options::{self, ImageFormat, MapType, Scale, Size},
    store::{OptionStore, Snapshot},
    style::StyleRule,
};
use crate::request::params::RequestParams;
use crate::{Error, Result};

/// Call-specific overrides layered on top of the stored map options.
/// Unset fields fall through to the store.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    size: Option<Size>,
    zoom: Option<u8>,
    scale: Option<Scale>,
    format: Option<ImageFormat>,
    maptype: Option<MapType>,
    language: Option<String>,
    region: Option<String>,
    heading: Option<f64>,
    pitch: Option<f64>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: u32, height: u32) -> Result<Self> {
        self.size = Some(Size::new(width, height)?);
        Ok(self)
    }

    pub fn zoom(mut self, zoom: u8) -> Result<Self> {
        self.zoom = Some(options::validate_zoom(zoom)?);
        Ok(self)
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn map_type(mut self, maptype: MapType) -> Self {
        self.maptype = Some(maptype);
        self
    }

    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    pub fn region(mut self, code: impl Into<String>) -> Self {
        self.region = Some(code.into());
        self
    }

    pub fn heading(mut self, degrees: f64) -> Result<Self> {
        self.heading = Some(options::validate_heading(degrees)?);
        Ok(self)
    }

    pub fn pitch(mut self, degrees: f64) -> Result<Self> {
        self.pitch = Some(options::validate_pitch(degrees)?);
        Ok(self)
    }
}

/// Builds request URLs from an [`OptionStore`] plus call-specific data.
pub struct UrlBuilder<'a> {
    store: &'a OptionStore,
    endpoint: &'a str,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(store: &'a OptionStore) -> Self {
        Self {
            store,
            endpoint: STATIC_MAP_ENDPOINT,
        }
    }

    /// Point the builder at a different endpoint, e.g. a test stub.
    pub fn with_endpoint(mut self, endpoint: &'a str) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Build a URL centered on a location. The location is an address or a
    /// `"lat,lng"` string, passed through verbatim.
    pub fn location(&self, center: &str, overrides: Option<&Overrides>) -> Result<String> {
        let key = self.api_key()?;
        debug!("building location url for {center}");
        let params = self.scalar_params(Some(center), overrides);
        params.into_url(self.endpoint, key)
    }

    /// Build a URL with one `markers` parameter value per non-empty spec.
    /// Each spec's style is merged over the stored default marker style.
    pub fn markers(&self, specs: &[MarkerSpec], overrides: Option<&Overrides>) -> Result<String> {
        let key = self.api_key()?;
        let snapshot = self.store.params();
        debug!("building markers url with {} specs", specs.len());
        let mut params = self.scalar_params(None, overrides);
        let rendered: Vec<String> = specs
            .iter()
            .filter_map(|spec| spec.render(snapshot.marker))
            .collect();
        params.push_repeated("markers", rendered);
        params.into_url(self.endpoint, key)
    }

    /// Build a URL with a single `path` parameter: stored path style, then
    /// stored points, then call points, pipe-joined.
    pub fn path<S: AsRef<str>>(&self, points: &[S], overrides: Option<&Overrides>) -> Result<String> {
        let key = self.api_key()?;
        let snapshot = self.store.params();
        debug!(
            "building path url with {} call points over {} stored",
            points.len(),
            snapshot.path_points.len()
        );
        let mut params = self.scalar_params(None, overrides);
        let mut segments = snapshot.path_style.segments();
        segments.extend(snapshot.path_points.iter().cloned());
        segments.extend(points.iter().map(|p| p.as_ref().to_string()));
        params.push("path", segments.join("|"));
        params.into_url(self.endpoint, key)
    }

    /// Build a URL with indexed `style[n]` parameters: stored rules first,
    /// then call rules. Rules rendering empty are skipped without consuming
    /// an index.
    pub fn styled(&self, rules: &[StyleRule], overrides: Option<&Overrides>) -> Result<String> {
        let key = self.api_key()?;
        let snapshot = self.store.params();
        debug!(
            "building styled url with {} call rules over {} stored",
            rules.len(),
            snapshot.styles.len()
        );
        let mut params = self.scalar_params(None, overrides);
        let rendered: Vec<String> = snapshot
            .styles
            .iter()
            .chain(rules.iter())
            .filter_map(|rule| rule.render())
            .collect();
        params.push_indexed("style", rendered);
        params.into_url(self.endpoint, key)
    }

    fn api_key(&self) -> Result<&str> {
        match self.store.api_key() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(Error::MissingApiKey),
        }
    }

    /// Scalar map parameters in wire order, with overrides layered over the
    /// stored options.
    fn scalar_params(&self, center: Option<&str>, overrides: Option<&Overrides>) -> RequestParams {
        let Snapshot { map, .. } = self.store.params();
        let o = overrides;

        let mut params = RequestParams::new();
        if let Some(center) = center {
            params.push("center", center);
        }

        let zoom = o.and_then(|o| o.zoom).unwrap_or_else(|| map.zoom());
        params.push("zoom", zoom.to_string());

        let size = o.and_then(|o| o.size).unwrap_or_else(|| map.size());
        params.push("size", size.to_string());

        let scale = o.and_then(|o| o.scale).unwrap_or_else(|| map.scale());
        params.push("scale", scale.to_string());

        let format = o.and_then(|o| o.format).unwrap_or_else(|| map.format());
        params.push("format", format.to_string());

        let maptype = o.and_then(|o| o.maptype).unwrap_or_else(|| map.map_type());
        params.push("maptype", maptype.to_string());

        if let Some(language) = o.and_then(|o| o.language.as_deref()).or_else(|| map.language()) {
            params.push("language", language);
        }
        if let Some(region) = o.and_then(|o| o.region.as_deref()).or_else(|| map.region()) {
            params.push("region", region);
        }
        if let Some(heading) = o.and_then(|o| o.heading).or_else(|| map.heading()) {
            params.push("heading", heading.to_string());
        }
        if let Some(pitch) = o.and_then(|o| o.pitch).or_else(|| map.pitch()) {
            params.push("pitch", pitch.to_string());
        }

        params
    }
}
