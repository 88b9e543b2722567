//! LibCal hours feed client.
//!
//! Fetches the "hours today" feed and indexes it by library.
//!
//! Key characteristics of the feed:
//! - One flat list of every location in the institution, libraries and
//!   otherwise; only `category == "library"` entries matter here
//! - Times are display strings ("6:00am"), already in local time
//! - `times.hours` is omitted for locations with no intervals today

mod client;
mod convert;
mod error;
mod fixture;
mod source;
mod types;

pub use client::{DEFAULT_URL, HoursClient, HoursConfig};
pub use convert::{build_index, convert_location, parse_feed};
pub use error::{FetchError, FetchErrorKind};
pub use fixture::{FixtureError, FixtureSource};
pub use source::HoursSource;
pub use types::{HoursDto, HoursResponse, LocationDto, TimesDto};
