//! Constants for TRN structure and validation.

/// The scheme tag; the first field of every TRN.
pub const SCHEME: &str = "trn";

/// Number of top-level colon-delimited fields in a TRN.
pub const FIELD_COUNT: usize = 6;

/// Separator between top-level fields.
pub const FIELD_SEPARATOR: char = ':';

/// Separator between the resource prefix and the generated suffix.
pub const RESOURCE_SEPARATOR: char = '/';

/// Length of the digit suffix produced by [`crate::Trn::new_numeric`].
pub const NUMERIC_SUFFIX_LENGTH: usize = 10;
