//! # staticmap-url
//!
//! Typed option management and URL construction for the Google Maps
//! Static API.
//!
//! The library is split into a validating [`OptionStore`] that holds the
//! current map, marker, path, and style configuration, and a [`UrlBuilder`]
//! that merges the store with call-specific data and serializes the result
//! into a request URL. Optional blocking collaborators for fetching the
//! image and persisting it live behind the `fetch` feature.

pub mod core;
pub mod html;
pub mod prelude;
pub mod request;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    marker::{MarkerSpec, MarkerStyle},
    options::{ImageFormat, MapOptions, MapType, Scale, Size},
    path::{PathSpec, PathStyle},
    store::{OptionStore, Snapshot},
    style::StyleRule,
};

pub use crate::request::{builder::UrlBuilder, params::RequestParams, Overrides};

pub use crate::html::{img_tag, AttrValue};

#[cfg(feature = "fetch")]
pub use crate::fetch::{
    client::{fetch_image, FetchedImage},
    media::{FsMediaStore, MediaMetadata, MediaStore},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("invalid {field} `{value}`: expected {expected}")]
    Validation {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("fetched content is not a recognized image: {0}")]
    InvalidImage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "fetch")]
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[cfg(feature = "fetch")]
    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),
}
