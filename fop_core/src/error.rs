//! Errors of loading and combining calendar data.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalendarError>;

#[derive(Debug, Error)]
pub enum CalendarError {
    /// A calendar document could not be read.
    #[error("calendar data unavailable at {}: {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A calendar document could not be decoded.
    #[error("calendar data malformed in {}: {source}", path.display())]
    DataMalformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A deadline date is not in `DD.MM.YYYY` format or is no calendar date.
    #[error("invalid deadline date {value:?}, expected DD.MM.YYYY")]
    InvalidDate {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}
