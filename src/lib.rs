//! Structured TRN resource identifiers.
//!
//! This crate implements construction, validation, decomposition, and wire
//! encoding of TRNs: globally-unique resource names in the style of URNs and
//! AWS ARNs, used to name resources across partitions, services, regions,
//! and accounts.
//!
//! # Format
//!
//! ```text
//! trn:<partition>:<service>:<region>:<account>:<prefix>/<suffix>
//! ```
//!
//! Six colon-delimited fields. The first is the constant `trn` tag; the last
//! is a caller-supplied prefix joined to a generated unique suffix. Any of
//! the middle fields may be empty, but none may contain a colon.
//!
//! # Quick Start
//!
//! ```rust
//! use trn::{Service, Trn};
//!
//! // Construct with a fresh `UUIDv4` suffix
//! let id = Trn::new("topple", "content", "us-west", "1234", "prefix").unwrap();
//! assert_eq!(id.partition(), "topple");
//! assert_eq!(id.account(), "1234");
//! assert!(id.resource().starts_with("prefix/"));
//!
//! // Transport as opaque base32 and back
//! let wire = id.encode();
//! let back = Trn::decode(&wire).unwrap();
//! assert_eq!(back, id);
//!
//! // Validate the service field against the registry
//! let service: Service = id.service().parse().unwrap();
//! assert_eq!(service, Service::Content);
//! ```
//!
//! # Suffix strategies
//!
//! | Constructor | Suffix | Collision resistance |
//! |-------------|--------|----------------------|
//! | [`Trn::new`] | hyphenated `UUIDv4` (36 chars) | UUID-grade |
//! | [`Trn::new_numeric`] | 10 ASCII digits from a caller-seeded RNG | weak; check externally |
//!
//! # Features
//!
//! - `serde` — string-backed `Serialize`/`Deserialize` for [`Trn`] and
//!   [`Service`].
//! - `sqlx` — read/write [`Trn`] as a Postgres `TEXT` column holding the
//!   encoded wire form.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
pub mod prelude;
mod service;
#[cfg(feature = "sqlx")]
mod storage;
mod trn;

pub use constants::{
    FIELD_COUNT, FIELD_SEPARATOR, NUMERIC_SUFFIX_LENGTH, RESOURCE_SEPARATOR, SCHEME,
};
pub use error::{DecodeError, ServiceError, TrnError};
pub use service::Service;
pub use trn::Trn;
