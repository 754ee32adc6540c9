//! Blocking collaborators that consume a built URL: image fetch and media
//! persistence. The core never performs network or file I/O itself; these
//! modules sit on the other side of that boundary and carry no retry or
//! backoff logic, so callers add their own resilience layer.

pub mod client;
pub mod media;

// Re-exports for convenience
pub use client::{fetch_image, FetchedImage};
pub use media::{FsMediaStore, MediaMetadata, MediaStore};
