//! Library hours.
//!
//! Answers "is the library open, and until when?" for a fixed set of
//! university library branches, from the LibCal hours feed.
//!
//! The core is two calls: [`libcal::HoursSource::fetch`] produces a
//! [`domain::LibraryStatusIndex`], and [`status::resolve`] turns an entry of
//! it into a display string. Everything else here is host plumbing for the
//! bundled web server.

pub mod board;
pub mod config;
pub mod domain;
pub mod libcal;
pub mod refresh;
pub mod status;
pub mod web;
pub mod widget;

#[cfg(test)]
mod test_support;
