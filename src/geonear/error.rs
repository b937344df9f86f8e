use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Job failures
    #[error("SourceUnavailable: could not read `{path}`: {reason}")]
    SourceUnavailable { path: String, reason: String },
    #[error("FieldMissing: `{field}` is absent from {origin}")]
    FieldMissing { field: String, origin: String },
    #[error("EmptyReferenceSet: no reference points to measure against")]
    EmptyReferenceSet,
    #[error("DestinationUnwritable: {0}")]
    DestinationUnwritable(String),
    #[error("DuplicateKey: observed key `{0}` appears more than once")]
    DuplicateKey(String),
    #[error("InvalidFieldValue: `{field}` {reason}")]
    InvalidFieldValue { field: String, reason: String },
    #[error("UnsupportedGeometry: expected {expected}, found {found}")]
    UnsupportedGeometry {
        expected: &'static str,
        found: &'static str,
    },
    #[error("InvalidSpacing: {reason}, got {spacing}")]
    InvalidSpacing { spacing: f64, reason: &'static str },

    // Input parsing
    #[error("InvalidWkt: {0}")]
    InvalidWkt(String),
    #[error("InvalidGeoJSON: {0}")]
    InvalidGeoJSON(String),
    #[error("UnknownEntityFormat: {0}")]
    UnknownEntityFormat(String),
    #[error("InvalidNumberFormat: {0}")]
    InvalidNumberFormat(String),

    // Command line
    #[error("MissingArgument: {0}")]
    MissingArgument(&'static str),
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
    #[error("UnknownCommand")]
    UnknownCommand,

    #[error(transparent)]
    IOError(#[from] io::Error),
    #[error(transparent)]
    JSONParseError(#[from] serde_json::Error),
}

impl Error {
    pub fn unavailable<P: ToString, R: ToString>(path: P, reason: R) -> Self {
        Error::SourceUnavailable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn field_missing<F: ToString, O: ToString>(field: F, origin: O) -> Self {
        Error::FieldMissing {
            field: field.to_string(),
            origin: origin.to_string(),
        }
    }
}
