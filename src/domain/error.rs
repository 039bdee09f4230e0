//! Domain errors for location lookup and snapshot loading.
//!
//! These are the failures a command can hit while turning snippets and
//! snapshot files into commodity tables. All of them are fatal to the
//! current command; callers branch on the variant, never on the message.
//!
//! # Examples
//!
//! ```
//! use eddep::domain::{DomainError, Location, LocationResolver};
//! use eddep::port::NullReporter;
//!
//! let locations = vec![Location::from("Sol.Galileo")];
//! let result = LocationResolver::new(&NullReporter).resolve("Lave", &locations);
//!
//! assert!(matches!(result, Err(DomainError::LocationNotFound { .. })));
//! ```

use thiserror::Error;

use super::commodity::RecordError;
use super::location::Location;

/// Errors raised by the core components.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// No known location contains the supplied snippet.
    #[error("no visited location matches {snippet:?}")]
    LocationNotFound {
        /// The snippet as supplied by the user.
        snippet: String,
    },

    /// A snapshot line could not be parsed into a commodity record.
    #[error("malformed record in {file}: {source}")]
    MalformedRecord {
        /// Snapshot file the record was read from.
        file: String,
        #[source]
        source: RecordError,
    },

    /// More than one snapshot remains for a location; retention has not run.
    #[error("{location} has {} snapshots ({}); run `eddep clean` first", files.len(), files.join(", "))]
    MultipleSnapshots {
        location: Location,
        /// Competing snapshot files, sorted by name.
        files: Vec<String>,
    },

    /// A known location has no snapshot of the family tables are read from.
    #[error("no market snapshot found for {location}")]
    MissingSnapshot { location: Location },
}
