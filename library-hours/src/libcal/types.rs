//! LibCal hours feed DTOs.
//!
//! These map directly to the `api_hours_today.php` JSON response. The real
//! feed carries many more fields per location (`lid`, `url`, `color`, ...);
//! serde ignores them.

use serde::Deserialize;

/// Top-level feed response.
#[derive(Debug, Clone, Deserialize)]
pub struct HoursResponse {
    pub locations: Vec<LocationDto>,
}

/// One location in the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationDto {
    /// Location display name (e.g. "Steelcase Library").
    pub name: String,

    /// Location category. Libraries use `"library"`.
    pub category: String,

    /// Today's opening state.
    pub times: TimesDto,

    /// Pre-formatted hours string.
    pub rendered: String,
}

/// Opening state for today.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesDto {
    pub currently_open: bool,

    /// Today's intervals. Omitted (or null) when the location has none.
    pub hours: Option<Vec<HoursDto>>,
}

/// A single open interval.
#[derive(Debug, Clone, Deserialize)]
pub struct HoursDto {
    pub from: String,
    pub to: String,
}
