//! Map-level options: image size, camera, and output format.
//!
//! Every field has a built-in default and every bounded field is validated
//! at the point of mutation. A rejected value leaves the previous state
//! untouched; the error names the field, the offending value, and the
//! accepted domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::constants;
use crate::{Error, Result};

/// Image dimensions in pixels, rendered on the wire as `{width}x{height}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    /// Creates a new size. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Validation {
                field: "size",
                value: format!("{width}x{height}"),
                expected: "positive width and height".to_string(),
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_WIDTH,
            height: constants::DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resolution multiplier for the returned image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    #[default]
    One,
    Two,
    Four,
}

impl Scale {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            "4" => Ok(Self::Four),
            other => Err(Error::Validation {
                field: "scale",
                value: other.to_string(),
                expected: "one of 1, 2, 4".to_string(),
            }),
        }
    }
}

/// Output image format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFormat {
    #[default]
    Png,
    Png8,
    Png32,
    Gif,
    Jpg,
    JpgBaseline,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Png8 => "png8",
            Self::Png32 => "png32",
            Self::Gif => "gif",
            Self::Jpg => "jpg",
            Self::JpgBaseline => "jpg-baseline",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "png" => Ok(Self::Png),
            "png8" => Ok(Self::Png8),
            "png32" => Ok(Self::Png32),
            "gif" => Ok(Self::Gif),
            "jpg" => Ok(Self::Jpg),
            "jpg-baseline" => Ok(Self::JpgBaseline),
            other => Err(Error::Validation {
                field: "format",
                value: other.to_string(),
                expected: "one of png, png8, png32, gif, jpg, jpg-baseline".to_string(),
            }),
        }
    }
}

/// Base map imagery type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    #[default]
    Roadmap,
    Satellite,
    Terrain,
    Hybrid,
}

impl MapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roadmap => "roadmap",
            Self::Satellite => "satellite",
            Self::Terrain => "terrain",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "roadmap" => Ok(Self::Roadmap),
            "satellite" => Ok(Self::Satellite),
            "terrain" => Ok(Self::Terrain),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(Error::Validation {
                field: "maptype",
                value: other.to_string(),
                expected: "one of roadmap, satellite, terrain, hybrid".to_string(),
            }),
        }
    }
}

pub(crate) fn validate_zoom(zoom: u8) -> Result<u8> {
    if zoom > constants::MAX_ZOOM {
        return Err(Error::Validation {
            field: "zoom",
            value: zoom.to_string(),
            expected: format!("0..={}", constants::MAX_ZOOM),
        });
    }
    Ok(zoom)
}

pub(crate) fn validate_heading(degrees: f64) -> Result<f64> {
    let (lo, hi) = constants::HEADING_RANGE;
    if !(lo..=hi).contains(&degrees) {
        return Err(Error::Validation {
            field: "heading",
            value: degrees.to_string(),
            expected: format!("{lo}..={hi} degrees"),
        });
    }
    Ok(degrees)
}

pub(crate) fn validate_pitch(degrees: f64) -> Result<f64> {
    let (lo, hi) = constants::PITCH_RANGE;
    if !(lo..=hi).contains(&degrees) {
        return Err(Error::Validation {
            field: "pitch",
            value: degrees.to_string(),
            expected: format!("{lo}..={hi} degrees"),
        });
    }
    Ok(degrees)
}

/// The map option group.
///
/// `language`, `region`, `heading`, and `pitch` are unset by default and
/// stay out of the generated URL until given a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    size: Size,
    zoom: u8,
    scale: Scale,
    format: ImageFormat,
    maptype: MapType,
    language: Option<String>,
    region: Option<String>,
    heading: Option<f64>,
    pitch: Option<f64>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            size: Size::default(),
            zoom: constants::DEFAULT_ZOOM,
            scale: Scale::default(),
            format: ImageFormat::default(),
            maptype: MapType::default(),
            language: None,
            region: None,
            heading: None,
            pitch: None,
        }
    }
}

impl MapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image dimensions. Both must be positive.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<&mut Self> {
        self.size = Size::new(width, height)?;
        Ok(self)
    }

    /// Set the zoom level. Values above the API maximum are rejected.
    pub fn set_zoom(&mut self, zoom: u8) -> Result<&mut Self> {
        self.zoom = validate_zoom(zoom)?;
        Ok(self)
    }

    pub fn set_scale(&mut self, scale: Scale) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_format(&mut self, format: ImageFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn set_map_type(&mut self, maptype: MapType) -> &mut Self {
        self.maptype = maptype;
        self
    }

    /// Set the label language. Free text, passed through to the API.
    pub fn set_language(&mut self, code: impl Into<String>) -> &mut Self {
        self.language = Some(code.into());
        self
    }

    /// Set the region bias. Free text, passed through to the API.
    pub fn set_region(&mut self, code: impl Into<String>) -> &mut Self {
        self.region = Some(code.into());
        self
    }

    /// Set the camera heading in degrees.
    pub fn set_heading(&mut self, degrees: f64) -> Result<&mut Self> {
        self.heading = Some(validate_heading(degrees)?);
        Ok(self)
    }

    /// Set the camera pitch in degrees.
    pub fn set_pitch(&mut self, degrees: f64) -> Result<&mut Self> {
        self.pitch = Some(validate_pitch(degrees)?);
        Ok(self)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn map_type(&self) -> MapType {
        self.maptype
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn heading(&self) -> Option<f64> {
        self.heading
    }

    pub fn pitch(&self) -> Option<f64> {
        self.pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MapOptions::default();
        assert_eq!(options.size().to_string(), "600x300");
        assert_eq!(options.zoom(), 14);
        assert_eq!(options.scale(), Scale::One);
        assert_eq!(options.format(), ImageFormat::Png);
        assert_eq!(options.map_type(), MapType::Roadmap);
        assert!(options.language().is_none());
        assert!(options.region().is_none());
        assert!(options.heading().is_none());
        assert!(options.pitch().is_none());
    }

    #[test]
    fn test_size_rejects_zero_dimension() {
        let mut options = MapOptions::default();
        assert!(options.set_size(0, 300).is_err());
        assert!(options.set_size(600, 0).is_err());
        // Prior value is untouched after a rejection
        assert_eq!(options.size().to_string(), "600x300");

        options.set_size(1024, 768).unwrap();
        assert_eq!(options.size().to_string(), "1024x768");
    }

    #[test]
    fn test_zoom_bounds() {
        let mut options = MapOptions::default();
        options.set_zoom(0).unwrap();
        assert_eq!(options.zoom(), 0);
        options.set_zoom(21).unwrap();
        assert_eq!(options.zoom(), 21);

        let err = options.set_zoom(25).unwrap_err();
        assert!(matches!(err, crate::Error::Validation { field: "zoom", .. }));
        assert_eq!(options.zoom(), 21);
    }

    #[test]
    fn test_heading_and_pitch_ranges() {
        let mut options = MapOptions::default();
        options.set_heading(0.0).unwrap();
        options.set_heading(360.0).unwrap();
        assert!(options.set_heading(361.0).is_err());
        assert!(options.set_heading(-0.1).is_err());
        assert_eq!(options.heading(), Some(360.0));

        options.set_pitch(-90.0).unwrap();
        options.set_pitch(90.0).unwrap();
        assert!(options.set_pitch(90.5).is_err());
        assert!(options.set_pitch(f64::NAN).is_err());
        assert_eq!(options.pitch(), Some(90.0));
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("jpg-baseline".parse::<ImageFormat>().unwrap(), ImageFormat::JpgBaseline);
        assert_eq!("hybrid".parse::<MapType>().unwrap(), MapType::Hybrid);
        assert_eq!("4".parse::<Scale>().unwrap(), Scale::Four);

        let err = "webp".parse::<ImageFormat>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("webp"));
        assert!(message.contains("png8"));
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(Scale::Two.to_string(), "2");
        assert_eq!(ImageFormat::JpgBaseline.to_string(), "jpg-baseline");
        assert_eq!(MapType::Satellite.to_string(), "satellite");
        assert_eq!(Size::new(640, 480).unwrap().to_string(), "640x480");
    }
}
