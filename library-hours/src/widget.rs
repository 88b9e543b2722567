//! Hourly widget timeline.
//!
//! A widget host asks for a batch of future entries up front and reloads
//! once the last one is reached. Every entry carries the status resolved at
//! fetch time; the feed only describes "now", so there is nothing better to
//! project forward.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::{LibraryIdentity, LibraryStatusIndex};
use crate::status::{StatusView, resolve};

/// Number of hourly entries in a standard timeline.
pub const TIMELINE_HOURS: u32 = 24;

/// One scheduled widget render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub at: DateTime<Utc>,
    pub library: LibraryIdentity,
    pub view: StatusView,
    /// The feed's rendered hours, when the library was present.
    pub summary: Option<String>,
}

/// A batch of entries plus when the host should ask again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub reload_at: DateTime<Utc>,
}

/// Build `hours` hourly entries for `library`, starting at `start`.
///
/// The host should reload at the last entry's time (or at `start` if there
/// are no entries). Entries that would fall past the latest representable
/// time are left out.
pub fn timeline(
    index: &LibraryStatusIndex,
    library: LibraryIdentity,
    start: DateTime<Utc>,
    hours: u32,
) -> Timeline {
    let view = resolve(index, library);
    let summary = index
        .get(library)
        .map(|record| record.rendered_summary.clone());

    let entries: Vec<_> = (0..hours)
        .map_while(|offset| start.checked_add_signed(Duration::hours(i64::from(offset))))
        .map(|at| TimelineEntry {
            at,
            library,
            view: view.clone(),
            summary: summary.clone(),
        })
        .collect();

    let reload_at = entries.last().map_or(start, |entry| entry.at);

    Timeline { entries, reload_at }
}
