//! Metadata for a single cached application layer
//!
//! Pairs the source files a layer was constructed from with the instant
//! it was constructed. Part of the cache metadata kept per layer.

use crate::error::{CrepecakeError, CrepecakeResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const EMPTY_SOURCE_FILES: &str = "Source files for application layer cannot be empty";

/// Convert source file paths to the string form stored in [`LayerMetadata`]
///
/// Output order follows the iteration order of `paths`. For a `HashSet`
/// that order is unspecified; pass a `BTreeSet` or a `Vec` when the
/// recorded order must be reproducible.
pub fn source_file_strings<I, P>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|path| path.as_ref().to_string_lossy().into_owned())
        .collect()
}

/// Metadata about an application layer stored in the cache
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLayerMetadata")]
pub struct LayerMetadata {
    /// Paths to the source files the layer was constructed from
    source_files: Vec<String>,

    /// When the layer was last constructed
    last_modified_time: DateTime<Utc>,
}

/// Unvalidated shape read back from persisted metadata
#[derive(Deserialize)]
struct RawLayerMetadata {
    source_files: Vec<String>,
    last_modified_time: DateTime<Utc>,
}

impl TryFrom<RawLayerMetadata> for LayerMetadata {
    type Error = CrepecakeError;

    fn try_from(raw: RawLayerMetadata) -> CrepecakeResult<Self> {
        Self::new(raw.source_files, raw.last_modified_time)
    }
}

impl LayerMetadata {
    /// Create metadata for a layer built from `source_files` at `last_modified_time`
    ///
    /// Order and duplicates in `source_files` are kept exactly as given.
    /// Fails with [`CrepecakeError::InvalidArgument`] if `source_files` is empty.
    pub fn new(
        source_files: Vec<String>,
        last_modified_time: DateTime<Utc>,
    ) -> CrepecakeResult<Self> {
        if source_files.is_empty() {
            debug!("Rejected layer metadata with no source files");
            return Err(CrepecakeError::invalid_argument(EMPTY_SOURCE_FILES));
        }

        debug!(
            "Recorded layer metadata for {} source files built at {}",
            source_files.len(),
            last_modified_time.to_rfc3339()
        );

        Ok(Self {
            source_files,
            last_modified_time,
        })
    }

    /// Create metadata from a set of source file paths
    ///
    /// See [`source_file_strings`] for how the recorded order is derived.
    pub fn from_path_set<I, P>(
        source_files: I,
        last_modified_time: DateTime<Utc>,
    ) -> CrepecakeResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::new(source_file_strings(source_files), last_modified_time)
    }

    pub fn source_files(&self) -> &[String] {
        &self.source_files
    }

    pub fn last_modified_time(&self) -> DateTime<Utc> {
        self.last_modified_time
    }

    /// Whether the layer was built strictly after `modified`
    ///
    /// A source file whose modification time is not before the build time
    /// may have changed since the layer was constructed.
    pub fn is_built_after(&self, modified: DateTime<Utc>) -> bool {
        self.last_modified_time > modified
    }
}

#[cfg(any(test, feature = "test-support"))]
impl LayerMetadata {
    /// Build an entry without checking that `source_files` is non-empty
    pub fn from_parts_unchecked(
        source_files: Vec<String>,
        last_modified_time: DateTime<Utc>,
    ) -> Self {
        Self {
            source_files,
            last_modified_time,
        }
    }

    /// Replace the recorded source files, keeping the build time
    pub fn replace_source_files(&mut self, source_files: Vec<String>) {
        self.source_files = source_files;
    }
}
