//! Open/closed status derivation.
//!
//! Turns a location's [`OpenState`] into the short string shown to users.
//! Only the first interval of the day is consulted: a library that reopens
//! later in the day still reads "Closed until" its first opening time.

use serde::Serialize;

use crate::domain::{LibraryIdentity, LibraryStatusIndex, OpenState};

/// Display text shown when a library is missing from the index.
pub const UNKNOWN_TEXT: &str = "Unknown";

/// Resolved, renderable status for one library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub display_text: String,
    pub is_open: bool,
}

impl StatusView {
    /// Fallback for a library that the index does not contain.
    pub fn unknown() -> Self {
        Self {
            display_text: UNKNOWN_TEXT.to_string(),
            is_open: false,
        }
    }
}

impl From<&OpenState> for StatusView {
    fn from(state: &OpenState) -> Self {
        let first = state.ranges.first();

        let display_text = match (state.currently_open, first) {
            (true, Some(range)) => format!("Open until {}", range.to),
            (true, None) => "Open".to_string(),
            (false, Some(range)) => format!("Closed until {}", range.from),
            (false, None) => "Closed".to_string(),
        };

        Self {
            display_text,
            is_open: state.currently_open,
        }
    }
}

/// Resolve the status of one library.
///
/// Never fails: a library absent from the index resolves to
/// [`StatusView::unknown`].
pub fn resolve(index: &LibraryStatusIndex, library: LibraryIdentity) -> StatusView {
    index
        .get(library)
        .map(|record| record.open_state.status())
        .unwrap_or_else(StatusView::unknown)
}

/// Resolve every known library, in [`LibraryIdentity::ALL`] order.
pub fn resolve_all(index: &LibraryStatusIndex) -> Vec<(LibraryIdentity, StatusView)> {
    LibraryIdentity::ALL
        .into_iter()
        .map(|lib| (lib, resolve(index, lib)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationRecord, TimeRange};

    fn steelcase(currently_open: bool, ranges: Vec<TimeRange>) -> LibraryStatusIndex {
        let mut index = LibraryStatusIndex::new();
        index.insert(
            LibraryIdentity::Steelcase,
            LocationRecord {
                name: "Steelcase Library".into(),
                category: "library".into(),
                open_state: OpenState::new(currently_open, ranges),
                rendered_summary: "8:00am - 6:00pm".into(),
            },
        );
        index
    }

    fn view(text: &str, is_open: bool) -> StatusView {
        StatusView {
            display_text: text.into(),
            is_open,
        }
    }

    #[test]
    fn open_with_hours() {
        let index = steelcase(true, vec![TimeRange::new("8:00am", "6:00pm")]);
        assert_eq!(
            resolve(&index, LibraryIdentity::Steelcase),
            view("Open until 6:00pm", true)
        );
    }

    #[test]
    fn closed_with_hours() {
        let index = steelcase(false, vec![TimeRange::new("8:00am", "6:00pm")]);
        assert_eq!(
            resolve(&index, LibraryIdentity::Steelcase),
            view("Closed until 8:00am", false)
        );
    }

    #[test]
    fn open_without_hours() {
        let index = steelcase(true, vec![]);
        assert_eq!(
            resolve(&index, LibraryIdentity::Steelcase),
            view("Open", true)
        );
    }

    #[test]
    fn closed_without_hours() {
        let index = steelcase(false, vec![]);
        assert_eq!(
            resolve(&index, LibraryIdentity::Steelcase),
            view("Closed", false)
        );
    }

    #[test]
    fn only_first_interval_is_used() {
        let ranges = vec![
            TimeRange::new("7:00am", "11:00am"),
            TimeRange::new("1:00pm", "10:00pm"),
        ];

        let open = steelcase(true, ranges.clone());
        assert_eq!(
            resolve(&open, LibraryIdentity::Steelcase).display_text,
            "Open until 11:00am"
        );

        // Closed between the two intervals still points at the first opening
        let closed = steelcase(false, ranges);
        assert_eq!(
            resolve(&closed, LibraryIdentity::Steelcase).display_text,
            "Closed until 7:00am"
        );
    }

    #[test]
    fn missing_library_is_unknown() {
        let index = steelcase(true, vec![]);
        assert_eq!(
            resolve(&index, LibraryIdentity::Lemmen),
            view("Unknown", false)
        );
        assert_eq!(
            resolve(&LibraryStatusIndex::new(), LibraryIdentity::Steelcase),
            StatusView::unknown()
        );
    }

    #[test]
    fn resolve_all_covers_every_library() {
        let index = steelcase(true, vec![TimeRange::new("8:00am", "6:00pm")]);
        let all = resolve_all(&index);

        assert_eq!(all.len(), 4);
        assert_eq!(all[0], (LibraryIdentity::MaryIdemaPew, StatusView::unknown()));
        assert_eq!(
            all[1],
            (LibraryIdentity::Steelcase, view("Open until 6:00pm", true))
        );
        assert_eq!(all[2].1, StatusView::unknown());
        assert_eq!(all[3].1, StatusView::unknown());
    }

    #[test]
    fn serializes_as_snake_case_fields() {
        let json = serde_json::to_value(view("Open", true)).unwrap();
        assert_eq!(json["display_text"], "Open");
        assert_eq!(json["is_open"], true);
    }
}
