//! Prelude module for common staticmap-url types
//!
//! Re-exports the most commonly used types and functions for easy importing
//! with `use staticmap_url::prelude::*;`

pub use crate::core::{
    constants::STATIC_MAP_ENDPOINT,
    marker::{MarkerSpec, MarkerStyle},
    options::{ImageFormat, MapOptions, MapType, Scale, Size},
    path::{PathSpec, PathStyle},
    store::{OptionStore, Snapshot},
    style::StyleRule,
};

pub use crate::request::{builder::{Overrides, UrlBuilder}, params::RequestParams};

pub use crate::html::{img_tag, AttrValue};

#[cfg(feature = "fetch")]
pub use crate::fetch::{
    client::{fetch_image, FetchedImage},
    media::{FsMediaStore, MediaMetadata, MediaStore},
};

pub use crate::{Error, Result};
