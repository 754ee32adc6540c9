//! Endpoint and default values shared across the crate.
//! Keeping them in a single place makes it easier to track the upstream API.

/// Base endpoint every generated URL points at.
pub const STATIC_MAP_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 600;

/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 300;

/// Default zoom level.
pub const DEFAULT_ZOOM: u8 = 14;

/// Highest zoom level the API accepts.
pub const MAX_ZOOM: u8 = 21;

/// Camera heading range in degrees.
pub const HEADING_RANGE: (f64, f64) = (0.0, 360.0);

/// Camera pitch range in degrees.
pub const PITCH_RANGE: (f64, f64) = (-90.0, 90.0);
