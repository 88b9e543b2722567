//! Data transfer objects for web responses.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::BoardView;
use crate::domain::{LibraryIdentity, LibraryStatusIndex};
use crate::status::{StatusView, resolve};

/// Status of one library.
#[derive(Debug, Serialize)]
pub struct LibraryStatusResult {
    /// Library slug (e.g. "steelcase")
    pub library: LibraryIdentity,

    /// Library display name
    pub name: &'static str,

    /// Status text (e.g. "Open until 6:00pm")
    pub display_text: String,

    /// Whether the library is open right now
    pub is_open: bool,

    /// Feed's rendered hours, if the library was in the last fetch
    pub summary: Option<String>,
}

impl LibraryStatusResult {
    /// Resolve one library against an index (or against nothing, before
    /// the first successful fetch).
    pub fn resolve(index: Option<&LibraryStatusIndex>, library: LibraryIdentity) -> Self {
        let (view, summary) = match index {
            Some(index) => (
                resolve(index, library),
                index
                    .get(library)
                    .map(|record| record.rendered_summary.clone()),
            ),
            None => (StatusView::unknown(), None),
        };

        Self {
            library,
            name: library.display_name(),
            display_text: view.display_text,
            is_open: view.is_open,
            summary,
        }
    }
}

/// Status of every library.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// When the displayed data was fetched
    pub fetched_at: Option<DateTime<Utc>>,

    /// Message from the most recent failed refresh
    pub last_error: Option<String>,

    pub libraries: Vec<LibraryStatusResult>,
}

impl From<&BoardView> for StatusResponse {
    fn from(view: &BoardView) -> Self {
        let index = view.snapshot.as_ref().map(|s| &s.index);

        Self {
            fetched_at: view.snapshot.as_ref().map(|s| s.fetched_at),
            last_error: view.last_error.as_ref().map(|e| e.message.clone()),
            libraries: LibraryIdentity::ALL
                .into_iter()
                .map(|lib| LibraryStatusResult::resolve(index, lib))
                .collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
