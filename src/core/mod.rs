pub mod constants;
pub mod marker;
pub mod options;
pub mod path;
pub mod store;
pub mod style;

// Re-exports for convenience
pub use options::{ImageFormat, MapOptions, MapType, Scale, Size};
pub use store::{OptionStore, Snapshot};
