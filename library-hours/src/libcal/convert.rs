//! Conversion from feed DTOs to domain types.

use tracing::{debug, warn};

use crate::domain::{LibraryIdentity, LibraryStatusIndex, LocationRecord, OpenState, TimeRange};

use super::error::{FetchError, MAX_ERROR_BODY_CHARS};
use super::types::{HoursResponse, LocationDto};

/// Decode a raw feed body and index it.
pub fn parse_feed(body: &str) -> Result<LibraryStatusIndex, FetchError> {
    let response: HoursResponse = serde_json::from_str(body).map_err(|e| FetchError::Decode {
        message: e.to_string(),
        body: Some(body.chars().take(MAX_ERROR_BODY_CHARS).collect()),
    })?;

    Ok(build_index(&response))
}

/// Build the library index from a decoded feed.
///
/// Non-library locations are dropped. Library locations whose name is not a
/// known library are skipped with a warning. If the feed lists the same
/// library twice, the later entry wins and the earlier one is reported.
pub fn build_index(response: &HoursResponse) -> LibraryStatusIndex {
    let mut index = LibraryStatusIndex::new();

    for location in &response.locations {
        if location.category != LocationRecord::LIBRARY_CATEGORY {
            continue;
        }

        let Some(library) = LibraryIdentity::from_display_name(&location.name) else {
            warn!(name = %location.name, "skipping unrecognised library in hours feed");
            continue;
        };

        if let Some(previous) = index.insert(library, convert_location(location)) {
            warn!(
                library = library.slug(),
                displaced = %previous.rendered_summary,
                "duplicate library in hours feed, keeping the later entry"
            );
        }
    }

    debug!(
        locations = response.locations.len(),
        libraries = index.len(),
        "indexed hours feed"
    );

    index
}

/// Convert one feed location to a domain record.
pub fn convert_location(dto: &LocationDto) -> LocationRecord {
    let ranges = dto
        .times
        .hours
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|h| TimeRange::new(h.from.as_str(), h.to.as_str()))
        .collect();

    LocationRecord {
        name: dto.name.clone(),
        category: dto.category.clone(),
        open_state: OpenState::new(dto.times.currently_open, ranges),
        rendered_summary: dto.rendered.clone(),
    }
}
