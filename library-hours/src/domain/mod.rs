//! Domain types for library hours.
//!
//! Feed data is converted into these types once, at the fetch boundary.
//! Everything downstream (status derivation, the host views) works on them.

mod index;
mod library;
mod location;

pub use index::LibraryStatusIndex;
pub use library::{LibraryIdentity, UnknownLibrary};
pub use location::{LocationRecord, OpenState, TimeRange};
