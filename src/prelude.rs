//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use trn::prelude::*;
//!
//! let id = Trn::new("topple", "content", "us-west", "1234", "prefix").unwrap();
//! assert!(Trn::is_valid(id.as_str()));
//! ```

pub use crate::{
    // Core types
    Service, Trn,
    // Errors
    DecodeError, ServiceError, TrnError,
    // Constants
    FIELD_COUNT, FIELD_SEPARATOR, NUMERIC_SUFFIX_LENGTH, RESOURCE_SEPARATOR, SCHEME,
};
