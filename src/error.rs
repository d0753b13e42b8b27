use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

use serde_json::Error as JsonError;

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// features and labels do not have the same number of rows
    ShapeMismatch { features: usize, labels: usize },

    /// fold count (or leave-out block size) is zero or exceeds the number of samples
    InvalidFoldCount { folds: usize, n_samples: usize },

    /// there are no samples to split
    EmptyDataset,

    /// a row position lies outside the data set
    PositionOutOfRange { position: usize, n_samples: usize },

    JsonError(JsonError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ShapeMismatch { features, labels } => write!(
                f,
                "shape mismatch: {} feature rows but {} labels",
                features, labels
            ),
            Error::InvalidFoldCount { folds, n_samples } => write!(
                f,
                "invalid fold count {} for a dataset of {} samples",
                folds, n_samples
            ),
            Error::EmptyDataset => write!(f, "cannot split an empty dataset"),
            Error::PositionOutOfRange {
                position,
                n_samples,
            } => write!(
                f,
                "position {} is out of range for a dataset of {} samples",
                position, n_samples
            ),
            Error::JsonError(ref e) => write!(f, "invalid procedure configuration: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::JsonError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Self {
        Error::JsonError(e)
    }
}

#[test]
fn messages_name_the_sizes() {
    let e = Error::ShapeMismatch {
        features: 10,
        labels: 9,
    };
    assert_eq!(e.to_string(), "shape mismatch: 10 feature rows but 9 labels");

    let e = Error::InvalidFoldCount {
        folds: 11,
        n_samples: 10,
    };
    assert_eq!(e.to_string(), "invalid fold count 11 for a dataset of 10 samples");
    assert!(e.source().is_none());
}

#[test]
fn json_errors_are_wrapped() {
    let e: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(e, Error::JsonError(_)));
    assert!(e.source().is_some());
}
