//! Request assembly: parameter flattening and URL construction.

pub mod builder;
pub mod params;

// Re-exports for convenience
pub use builder::{Overrides, UrlBuilder};
pub use params::RequestParams;
