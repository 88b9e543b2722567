//! Askama templates for the status page.

use askama::Template;
use chrono::Local;

use crate::board::BoardView;
use crate::domain::LibraryIdentity;
use crate::status::{StatusView, resolve};

/// Status page listing every library.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusPageTemplate {
    pub libraries: Vec<LibraryRow>,
    /// Local time of the displayed fetch, if any.
    pub updated: Option<String>,
    pub last_error: Option<String>,
}

/// One library on the status page.
#[derive(Debug, Clone)]
pub struct LibraryRow {
    pub name: &'static str,
    pub slug: &'static str,
    pub display_text: String,
    pub is_open: bool,
    pub summary: String,
}

impl LibraryRow {
    fn new(library: LibraryIdentity, view: StatusView, summary: String) -> Self {
        Self {
            name: library.display_name(),
            slug: library.slug(),
            display_text: view.display_text,
            is_open: view.is_open,
            summary,
        }
    }
}

impl From<&BoardView> for StatusPageTemplate {
    fn from(view: &BoardView) -> Self {
        let libraries = match &view.snapshot {
            Some(snapshot) => LibraryIdentity::ALL
                .into_iter()
                .map(|lib| {
                    let summary = snapshot
                        .index
                        .get(lib)
                        .map(|record| record.rendered_summary.clone())
                        .unwrap_or_default();
                    LibraryRow::new(lib, resolve(&snapshot.index, lib), summary)
                })
                .collect(),
            // Nothing fetched yet, so nothing is known
            None => LibraryIdentity::ALL
                .into_iter()
                .map(|lib| LibraryRow::new(lib, StatusView::unknown(), String::new()))
                .collect(),
        };

        Self {
            libraries,
            updated: view.snapshot.as_ref().map(|s| {
                s.fetched_at
                    .with_timezone(&Local)
                    .format("%-I:%M%P, %a %-d %b")
                    .to_string()
            }),
            last_error: view.last_error.as_ref().map(|e| e.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::board::{RefreshFailure, Snapshot};
    use crate::libcal::{FetchErrorKind, parse_feed};
    use crate::status::UNKNOWN_TEXT;
    use crate::test_support::SAMPLE_FEED;
    use crate::web::StatusResponse;

    #[test]
    fn unknown_before_first_fetch() {
        let page = StatusPageTemplate::from(&BoardView::default());

        assert_eq!(page.libraries.len(), 4);
        assert!(page.updated.is_none());
        for row in &page.libraries {
            assert_eq!(row.display_text, UNKNOWN_TEXT);
            assert!(!row.is_open);
            assert!(row.summary.is_empty());
        }
    }

    #[test]
    fn failed_first_fetch_matches_api() {
        let view = BoardView {
            snapshot: None,
            last_error: Some(RefreshFailure {
                message: "API error 503: down".into(),
                kind: FetchErrorKind::NetworkFailure,
                at: Utc::now(),
            }),
        };
        let page = StatusPageTemplate::from(&view);
        let api = StatusResponse::from(&view);

        assert_eq!(page.last_error.as_deref(), Some("API error 503: down"));
        assert_eq!(page.libraries.len(), api.libraries.len());
        for (row, result) in page.libraries.iter().zip(&api.libraries) {
            assert_eq!(row.display_text, result.display_text);
            assert_eq!(row.is_open, result.is_open);
            assert!(result.summary.is_none());
            assert!(row.summary.is_empty());
        }

        let html = page.render().unwrap();
        assert!(html.contains(UNKNOWN_TEXT));
        assert!(!html.contains("6:00am - 6:00pm"));
    }

    #[test]
    fn rows_follow_snapshot() {
        let view = BoardView {
            snapshot: Some(Snapshot {
                index: parse_feed(SAMPLE_FEED).unwrap(),
                fetched_at: Utc::now(),
            }),
            last_error: Some(RefreshFailure {
                message: "request timed out".into(),
                kind: FetchErrorKind::NetworkFailure,
                at: Utc::now(),
            }),
        };
        let page = StatusPageTemplate::from(&view);

        assert!(page.updated.is_some());
        assert_eq!(page.last_error.as_deref(), Some("request timed out"));

        let steelcase = &page.libraries[1];
        assert_eq!(steelcase.slug, "steelcase");
        assert_eq!(steelcase.display_text, "Open until 6:00pm");
        assert_eq!(steelcase.summary, "8:00am - 6:00pm");

        let lemmen = &page.libraries[3];
        assert_eq!(lemmen.display_text, "Closed until 9:00am");
    }

    #[test]
    fn renders_html() {
        let page = StatusPageTemplate::from(&BoardView::default());
        let html = page.render().unwrap();

        assert!(html.contains("Mary Idema Pew Library"));
        // Askama escapes the ampersand
        assert!(html.contains("Lemmen Library &amp; Archives"));
        assert!(html.contains(UNKNOWN_TEXT));
        assert!(html.contains("Waiting for the first update"));
    }
}
