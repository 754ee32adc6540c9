//! Central store for the four option groups plus the API key.
//!
//! Setters validate at the point of mutation; a rejected value leaves the
//! previous state untouched. Validating setters return `Result<&mut Self>`
//! so configuration chains with `?`; infallible setters return `&mut Self`
//! directly.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{
    marker::MarkerStyle,
    options::{ImageFormat, MapOptions, MapType, Scale},
    path::PathStyle,
    style::StyleRule,
};
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionStore {
    map: MapOptions,
    marker_style: MarkerStyle,
    path_style: PathStyle,
    path_points: Vec<String>,
    styles: Vec<StyleRule>,
    api_key: Option<String>,
}

impl OptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the API key already configured.
    pub fn with_api_key(key: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.set_api_key(key);
        store
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Set the image dimensions. Both must be positive.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<&mut Self> {
        self.map.set_size(width, height)?;
        Ok(self)
    }

    /// Set the zoom level, rejecting values above the API maximum.
    pub fn set_zoom(&mut self, zoom: u8) -> Result<&mut Self> {
        self.map.set_zoom(zoom)?;
        Ok(self)
    }

    pub fn set_scale(&mut self, scale: Scale) -> &mut Self {
        self.map.set_scale(scale);
        self
    }

    pub fn set_format(&mut self, format: ImageFormat) -> &mut Self {
        self.map.set_format(format);
        self
    }

    pub fn set_map_type(&mut self, maptype: MapType) -> &mut Self {
        self.map.set_map_type(maptype);
        self
    }

    pub fn set_language(&mut self, code: impl Into<String>) -> &mut Self {
        self.map.set_language(code);
        self
    }

    pub fn set_region(&mut self, code: impl Into<String>) -> &mut Self {
        self.map.set_region(code);
        self
    }

    pub fn set_heading(&mut self, degrees: f64) -> Result<&mut Self> {
        self.map.set_heading(degrees)?;
        Ok(self)
    }

    pub fn set_pitch(&mut self, degrees: f64) -> Result<&mut Self> {
        self.map.set_pitch(degrees)?;
        Ok(self)
    }

    /// Merge the set fields of `style` into the stored default marker style.
    pub fn set_marker_style(&mut self, style: &MarkerStyle) -> &mut Self {
        self.marker_style.apply(style);
        self
    }

    /// Merge the set fields of `style` into the stored path style.
    pub fn set_path_style(&mut self, style: &PathStyle) -> &mut Self {
        self.path_style.apply(style);
        self
    }

    /// Append points to the stored path sequence.
    pub fn add_path_points<I, S>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path_points.extend(points.into_iter().map(Into::into));
        self
    }

    /// Append one style rule to the stored sequence.
    pub fn add_style(&mut self, rule: StyleRule) -> &mut Self {
        self.styles.push(rule);
        self
    }

    /// Restore the map option group to built-in defaults.
    pub fn reset_map(&mut self) -> &mut Self {
        self.map = MapOptions::default();
        self
    }

    /// Restore the default marker style.
    pub fn reset_marker(&mut self) -> &mut Self {
        self.marker_style = MarkerStyle::default();
        self
    }

    /// Restore the path style and clear the stored points.
    pub fn reset_path(&mut self) -> &mut Self {
        self.path_style = PathStyle::default();
        self.path_points.clear();
        self
    }

    /// Clear the stored style rules.
    pub fn reset_styles(&mut self) -> &mut Self {
        self.styles.clear();
        self
    }

    /// Restore every option group to built-in defaults. The API key is a
    /// credential, not map state, and survives the reset.
    pub fn reset_all(&mut self) -> &mut Self {
        debug!("resetting all option groups to defaults");
        self.reset_map();
        self.reset_marker();
        self.reset_path();
        self.reset_styles();
        self
    }

    pub fn map(&self) -> &MapOptions {
        &self.map
    }

    pub fn marker_style(&self) -> &MarkerStyle {
        &self.marker_style
    }

    pub fn path_style(&self) -> &PathStyle {
        &self.path_style
    }

    pub fn path_points(&self) -> &[String] {
        &self.path_points
    }

    pub fn styles(&self) -> &[StyleRule] {
        &self.styles
    }

    /// Live view over the current state for the URL builder. Borrows the
    /// store, so it always reflects the latest mutation.
    pub fn params(&self) -> Snapshot<'_> {
        Snapshot {
            map: &self.map,
            marker: &self.marker_style,
            path_style: &self.path_style,
            path_points: &self.path_points,
            styles: &self.styles,
        }
    }
}

/// Borrowed view over one store's option groups.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub map: &'a MapOptions,
    pub marker: &'a MarkerStyle,
    pub path_style: &'a PathStyle,
    pub path_points: &'a [String],
    pub styles: &'a [StyleRule],
}
