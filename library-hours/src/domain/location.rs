//! Location schedule records.
//!
//! These are the validated form of a feed entry. Times are kept as the
//! feed's own display strings ("6:00am"); nothing here interprets them.

use serde::Serialize;

use crate::status::StatusView;

/// One open interval within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Whether a location is open right now, plus today's intervals.
///
/// `ranges` may be empty: the open/closed flag is still meaningful, there is
/// just no interval detail to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenState {
    pub currently_open: bool,
    pub ranges: Vec<TimeRange>,
}

impl OpenState {
    pub fn new(currently_open: bool, ranges: Vec<TimeRange>) -> Self {
        Self {
            currently_open,
            ranges,
        }
    }

    /// Derive the display status for this state.
    pub fn status(&self) -> StatusView {
        StatusView::from(self)
    }
}

/// A location from the hours feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRecord {
    /// Feed name, matched against library display names.
    pub name: String,
    /// Feed category. Only `"library"` records are indexed.
    pub category: String,
    pub open_state: OpenState,
    /// Pre-formatted hours string from the feed (e.g. "8:00am - 6:00pm").
    pub rendered_summary: String,
}

impl LocationRecord {
    /// Category value for records that describe a library.
    pub const LIBRARY_CATEGORY: &'static str = "library";

    /// Whether this record is a library rather than some other venue.
    pub fn is_library(&self) -> bool {
        self.category == Self::LIBRARY_CATEGORY
    }
}
