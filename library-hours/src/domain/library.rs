//! Library identity type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a string does not name a known library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown library: {input}")]
pub struct UnknownLibrary {
    input: String,
}

impl UnknownLibrary {
    /// The input that failed to resolve.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// One of the library branches tracked by this crate.
///
/// The set is closed: feed entries are matched against [`display_name`]
/// exactly, and anything else is not a library we know about.
///
/// # Examples
///
/// ```
/// use library_hours::domain::LibraryIdentity;
///
/// let lib = LibraryIdentity::from_display_name("Steelcase Library").unwrap();
/// assert_eq!(lib, LibraryIdentity::Steelcase);
/// assert_eq!(lib.slug(), "steelcase");
///
/// // Matching is exact
/// assert!(LibraryIdentity::from_display_name("steelcase library").is_none());
/// ```
///
/// [`display_name`]: LibraryIdentity::display_name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LibraryIdentity {
    MaryIdemaPew,
    Steelcase,
    FreyFoundation,
    Lemmen,
}

impl LibraryIdentity {
    /// Every library, in display order.
    pub const ALL: [LibraryIdentity; 4] = [
        LibraryIdentity::MaryIdemaPew,
        LibraryIdentity::Steelcase,
        LibraryIdentity::FreyFoundation,
        LibraryIdentity::Lemmen,
    ];

    /// The name the hours feed uses for this library.
    pub fn display_name(self) -> &'static str {
        match self {
            LibraryIdentity::MaryIdemaPew => "Mary Idema Pew Library",
            LibraryIdentity::Steelcase => "Steelcase Library",
            LibraryIdentity::FreyFoundation => "Frey Foundation Learning Commons",
            LibraryIdentity::Lemmen => "Lemmen Library & Archives",
        }
    }

    /// URL-safe key, used in routes and JSON.
    pub fn slug(self) -> &'static str {
        match self {
            LibraryIdentity::MaryIdemaPew => "mary-idema-pew",
            LibraryIdentity::Steelcase => "steelcase",
            LibraryIdentity::FreyFoundation => "frey-foundation",
            LibraryIdentity::Lemmen => "lemmen",
        }
    }

    /// Resolve a feed `name` to a library.
    ///
    /// Returns `None` for anything that is not exactly one of the known
    /// display names.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lib| lib.display_name() == name)
    }

    /// Resolve a slug to a library.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lib| lib.slug() == slug)
    }
}

impl fmt::Display for LibraryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LibraryIdentity {
    type Err = UnknownLibrary;

    /// Accepts either a slug or an exact display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s)
            .or_else(|| Self::from_display_name(s))
            .ok_or_else(|| UnknownLibrary {
                input: s.to_string(),
            })
    }
}

impl Serialize for LibraryIdentity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for LibraryIdentity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
