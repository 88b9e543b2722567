//! Web layer for library hours.
//!
//! Serves the status page, a JSON API, and widget timelines from whatever
//! the refresh loop last published.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
