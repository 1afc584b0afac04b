//! Error types for TRN construction, parsing, and decoding.

use std::fmt;

/// Errors that can occur when constructing or parsing a TRN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrnError {
    /// Input is empty
    Empty,
    /// A caller-supplied field contains the `:` field separator
    FieldContainsSeparator {
        /// Name of the offending field
        field: &'static str,
        /// Byte position of the separator within the field value
        position: usize,
    },
    /// Splitting did not produce the required number of fields
    WrongFieldCount {
        /// Required field count
        expected: usize,
        /// Fields actually found
        actual: usize,
    },
    /// The first field is not the `trn` scheme tag
    BadTag {
        /// The tag that was found
        found: String,
    },
}

impl fmt::Display for TrnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "TRN cannot be empty"),
            Self::FieldContainsSeparator { field, position } => {
                write!(
                    f,
                    "field '{field}' contains ':' at position {position}; field values must be colon-free"
                )
            }
            Self::WrongFieldCount { expected, actual } => {
                write!(f, "expected {expected} colon-delimited fields, found {actual}")
            }
            Self::BadTag { found } => {
                write!(f, "expected scheme tag 'trn', found '{found}'")
            }
        }
    }
}

impl std::error::Error for TrnError {}

/// Errors that can occur when decoding the base32 wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not valid RFC 4648 base32
    Base32(data_encoding::DecodeError),
    /// Decoded bytes are not valid UTF-8
    NotUtf8(std::str::Utf8Error),
    /// Decoded text is not a structurally valid TRN
    Malformed(TrnError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base32(e) => write!(f, "invalid base32: {e}"),
            Self::NotUtf8(e) => write!(f, "decoded bytes are not UTF-8: {e}"),
            Self::Malformed(e) => write!(f, "decoded text is not a valid TRN: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base32(e) => Some(e),
            Self::NotUtf8(e) => Some(e),
            Self::Malformed(e) => Some(e),
        }
    }
}

/// Errors from the service-name registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The token is not a registered service name
    Unknown {
        /// The token that failed to resolve
        name: String,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "unknown service name '{name}'"),
        }
    }
}

impl std::error::Error for ServiceError {}
