//! Crepecake - Layer Cache Metadata
//!
//! Records which source files produced a cached image layer and when it
//! was last built, so a build can decide whether the layer is reusable.

pub mod cache;
pub mod error;

pub use cache::{source_file_strings, LayerMetadata};
pub use error::{CrepecakeError, CrepecakeResult};
