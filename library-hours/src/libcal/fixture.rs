//! Static hours source for running without network access.
//!
//! Serves a feed loaded once from JSON, as if it were the live API.

use std::path::{Path, PathBuf};

use crate::domain::LibraryStatusIndex;

use super::convert::build_index;
use super::error::FetchError;
use super::source::HoursSource;
use super::types::HoursResponse;

/// Errors loading a fixture feed.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture feed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Hours source backed by a fixed feed.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    response: HoursResponse,
}

impl FixtureSource {
    /// Parse a fixture from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(Self {
            response: serde_json::from_str(json)?,
        })
    }

    /// Load a fixture from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl HoursSource for FixtureSource {
    async fn fetch(&self) -> Result<LibraryStatusIndex, FetchError> {
        Ok(build_index(&self.response))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::LibraryIdentity;
    use crate::test_support::SAMPLE_FEED;

    #[tokio::test]
    async fn from_json_serves_feed() {
        let source = FixtureSource::from_json(SAMPLE_FEED).unwrap();
        let index = source.fetch().await.unwrap();
        assert_eq!(index.len(), 4);

        // Every fetch builds a fresh, identical index
        assert_eq!(source.fetch().await.unwrap(), index);
    }

    #[tokio::test]
    async fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_FEED.as_bytes()).unwrap();

        let source = FixtureSource::from_path(file.path()).unwrap();
        let index = source.fetch().await.unwrap();
        assert!(index.contains(LibraryIdentity::Lemmen));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = FixtureSource::from_path(&path).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = FixtureSource::from_json(r#"{"locations": "no"}"#).unwrap_err();
        assert!(matches!(err, FixtureError::Json(_)));
    }
}
