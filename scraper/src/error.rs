use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which extraction shape a candidate group came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateShape {
    /// The year is itself a hyperlink; the person is the second link.
    YearIsLink,
    /// The year is plain text (or on an enclosing item); the person is the first link.
    YearIsNotLink,
}

impl fmt::Display for CandidateShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateShape::YearIsLink => write!(f, "year-is-link"),
            CandidateShape::YearIsNotLink => write!(f, "year-is-not-link"),
        }
    }
}

#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Length of data retrieved is offset for {day} ({shape}): {names} names vs {links} links")]
    Alignment {
        day: String,
        shape: CandidateShape,
        names: usize,
        links: usize,
    },

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Invalid day identifier: {0}")]
    InvalidDay(String),

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl HarvestError {
    /// True for the one error a batch may choose to skip past.
    pub fn is_alignment(&self) -> bool {
        matches!(self, HarvestError::Alignment { .. })
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
