//! The TRN resource identifier type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use data_encoding::BASE32;
use rand::Rng;
use uuid::Uuid;

use crate::constants::{
    FIELD_COUNT, FIELD_SEPARATOR, NUMERIC_SUFFIX_LENGTH, RESOURCE_SEPARATOR, SCHEME,
};
use crate::error::{DecodeError, TrnError};

/// A structured, globally-unique resource name.
///
/// TRNs follow the style of URNs and AWS ARNs: six colon-delimited fields
/// encoding ownership and location metadata, with the last field holding a
/// caller-supplied prefix and a generated unique suffix:
///
/// ```text
/// trn:<partition>:<service>:<region>:<account>:<prefix>/<suffix>
/// ```
///
/// A `Trn` is an immutable string value. It stores no parsed representation;
/// field accessors re-split the string on demand. Construction, parsing, and
/// decoding all guarantee the six-field shape, so a `Trn` in hand is always
/// structurally valid.
///
/// # Examples
///
/// ```
/// use trn::Trn;
///
/// let id = Trn::new("topple", "content", "us-west", "1234", "prefix").unwrap();
/// assert_eq!(id.partition(), "topple");
/// assert_eq!(id.service(), "content");
/// assert!(id.resource().starts_with("prefix/"));
///
/// // Wire round-trip
/// let wire = id.encode();
/// assert_eq!(Trn::decode(&wire).unwrap(), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trn(String);

/// The five caller-supplied fields, in template order. Used to name the
/// offending field in errors.
const FIELD_NAMES: [&str; 5] = ["partition", "service", "region", "account", "prefix"];

impl Trn {
    /// Creates a TRN with a freshly generated `UUIDv4` suffix.
    ///
    /// This is the fast path: the suffix is drawn from the operating system's
    /// cryptographically strong random source, which makes collisions between
    /// independently generated TRNs negligible. If the entropy source itself
    /// fails the process aborts; callers cannot meaningfully recover from
    /// system-wide entropy exhaustion.
    ///
    /// Any of the five fields may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`TrnError::FieldContainsSeparator`] if any field contains a
    /// colon, which would break the six-field structure.
    pub fn new(
        partition: &str,
        service: &str,
        region: &str,
        account: &str,
        prefix: &str,
    ) -> Result<Self, TrnError> {
        let suffix = Uuid::new_v4().to_string();
        Self::with_suffix(partition, service, region, account, prefix, &suffix)
    }

    /// Creates a TRN with a short numeric suffix drawn from `rng`.
    ///
    /// This is the slow path for contexts that need short, human-typable
    /// identifiers such as invite codes. The suffix is exactly
    /// [`NUMERIC_SUFFIX_LENGTH`] ASCII digits, so collision resistance is
    /// materially weaker than [`Trn::new`]; callers must apply an external
    /// uniqueness check if duplicates matter.
    ///
    /// The generator is caller-supplied: give each calling context its own
    /// seeded instance rather than sharing one across threads.
    ///
    /// # Errors
    ///
    /// Returns [`TrnError::FieldContainsSeparator`] if any field contains a
    /// colon.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use trn::Trn;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let id = Trn::new_numeric("", "account", "", "", "invite", &mut rng).unwrap();
    /// let suffix = id.resource_suffix().unwrap();
    /// assert_eq!(suffix.len(), 10);
    /// assert!(suffix.bytes().all(|b| b.is_ascii_digit()));
    /// ```
    pub fn new_numeric<R: Rng + ?Sized>(
        partition: &str,
        service: &str,
        region: &str,
        account: &str,
        prefix: &str,
        rng: &mut R,
    ) -> Result<Self, TrnError> {
        let mut suffix = String::with_capacity(NUMERIC_SUFFIX_LENGTH);
        for _ in 0..NUMERIC_SUFFIX_LENGTH {
            suffix.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }
        Self::with_suffix(partition, service, region, account, prefix, &suffix)
    }

    fn with_suffix(
        partition: &str,
        service: &str,
        region: &str,
        account: &str,
        prefix: &str,
        suffix: &str,
    ) -> Result<Self, TrnError> {
        let values = [partition, service, region, account, prefix];
        for (field, value) in FIELD_NAMES.into_iter().zip(values) {
            if let Some(position) = value.find(FIELD_SEPARATOR) {
                return Err(TrnError::FieldContainsSeparator { field, position });
            }
        }

        Ok(Self(format!(
            "{SCHEME}:{partition}:{service}:{region}:{account}:{prefix}{RESOURCE_SEPARATOR}{suffix}"
        )))
    }

    /// Parses a raw (non-encoded) TRN string.
    ///
    /// Validation is structural only: the input must split into exactly
    /// [`FIELD_COUNT`] fields on `:` (the last field may itself contain
    /// colons) and the first field must be the `trn` tag. Field contents are
    /// not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`TrnError::Empty`], [`TrnError::WrongFieldCount`], or
    /// [`TrnError::BadTag`].
    pub fn parse(input: &str) -> Result<Self, TrnError> {
        Self::check_structure(input)?;
        Ok(Self(input.to_owned()))
    }

    /// Returns true if `input` is a structurally valid TRN.
    ///
    /// Same check as [`Trn::parse`]: exactly six fields, first field `trn`.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        Self::check_structure(input).is_ok()
    }

    fn check_structure(input: &str) -> Result<(), TrnError> {
        if input.is_empty() {
            return Err(TrnError::Empty);
        }

        let fields: Vec<&str> = input.splitn(FIELD_COUNT, FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return Err(TrnError::WrongFieldCount {
                expected: FIELD_COUNT,
                actual: fields.len(),
            });
        }

        if fields[0] != SCHEME {
            return Err(TrnError::BadTag {
                found: fields[0].to_owned(),
            });
        }

        Ok(())
    }

    /// Encodes the TRN into its wire form: RFC 4648 base32 with padding.
    ///
    /// Encoding never fails and is injective, so two TRNs are equal exactly
    /// when their encodings are equal.
    #[must_use]
    pub fn encode(&self) -> String {
        BASE32.encode(self.0.as_bytes())
    }

    /// Decodes a base32 wire-form string back into a TRN.
    ///
    /// Inverts [`Trn::encode`]. The decoded payload must itself pass the
    /// structural check used by [`Trn::is_valid`]; base32 that decodes to
    /// something other than a TRN is rejected rather than silently accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Base32`] for malformed base32 (wrong length,
    /// invalid symbols), [`DecodeError::NotUtf8`] when the payload is not
    /// text, and [`DecodeError::Malformed`] when it is not a valid TRN.
    pub fn decode(input: &str) -> Result<Self, DecodeError> {
        let bytes = BASE32.decode(input.as_bytes()).map_err(DecodeError::Base32)?;
        let raw = std::str::from_utf8(&bytes).map_err(DecodeError::NotUtf8)?;
        Self::parse(raw).map_err(DecodeError::Malformed)
    }

    /// Returns the scheme tag field (always `"trn"`).
    #[must_use]
    pub fn id(&self) -> &str {
        self.fields()[0]
    }

    /// Returns the deployment/environment partition.
    #[must_use]
    pub fn partition(&self) -> &str {
        self.fields()[1]
    }

    /// Returns the owning service name.
    ///
    /// By convention this is one of the [`crate::Service`] registry tokens,
    /// but it is stored as free text; validate with
    /// `trn.service().parse::<Service>()` where the convention matters.
    #[must_use]
    pub fn service(&self) -> &str {
        self.fields()[2]
    }

    /// Returns the region placement tag.
    #[must_use]
    pub fn region(&self) -> &str {
        self.fields()[3]
    }

    /// Returns the tenant/owner account tag.
    #[must_use]
    pub fn account(&self) -> &str {
        self.fields()[4]
    }

    /// Returns the resource field: the `prefix/suffix` composite.
    #[must_use]
    pub fn resource(&self) -> &str {
        self.fields()[5]
    }

    /// Returns the prefix half of the resource field, if a `/` is present.
    ///
    /// Always `Some` for TRNs built by [`Trn::new`] or [`Trn::new_numeric`];
    /// hand-parsed values may lack the separator.
    #[must_use]
    pub fn resource_prefix(&self) -> Option<&str> {
        self.resource()
            .split_once(RESOURCE_SEPARATOR)
            .map(|(prefix, _)| prefix)
    }

    /// Returns the generated suffix half of the resource field, if a `/` is
    /// present.
    #[must_use]
    pub fn resource_suffix(&self) -> Option<&str> {
        self.resource()
            .split_once(RESOURCE_SEPARATOR)
            .map(|(_, suffix)| suffix)
    }

    /// Returns the raw TRN string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits into the six top-level fields.
    ///
    /// Every constructor validates the shape, so failure here is a broken
    /// invariant, not bad input.
    fn fields(&self) -> [&str; FIELD_COUNT] {
        let mut parts = self.0.splitn(FIELD_COUNT, FIELD_SEPARATOR);
        std::array::from_fn(|_| {
            parts
                .next()
                .expect("TRN invariant violated: fewer than six colon-delimited fields")
        })
    }
}

impl fmt::Display for Trn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Trn {
    type Err = TrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Trn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Trn {
    type Error = TrnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Trn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Trn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Trn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Trn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn new_formats_fields_in_template_order() {
        let cases = [
            (("", "", "", "", ""), "trn:::::/"),
            (("topple", "", "", "", ""), "trn:topple::::/"),
            (("", "content", "", "", ""), "trn::content:::/"),
            (("", "", "us-west", "", ""), "trn:::us-west::/"),
            (("", "", "", "1234", ""), "trn::::1234:/"),
            (("", "", "", "", "prefix"), "trn:::::prefix/"),
            (
                ("topple", "content", "us-west", "1234", "prefix"),
                "trn:topple:content:us-west:1234:prefix/",
            ),
        ];

        for ((p, s, r, a, pre), want) in cases {
            let id = Trn::new(p, s, r, a, pre).unwrap();
            assert!(
                id.as_str().starts_with(want),
                "Trn for ({p:?}, {s:?}, {r:?}, {a:?}, {pre:?}) was {id}, wanted prefix {want}"
            );
        }
    }

    #[test]
    fn new_decomposes_into_its_inputs() {
        let id = Trn::new("topple", "content", "us-west", "1234", "prefix").unwrap();

        assert_eq!(id.id(), "trn");
        assert_eq!(id.partition(), "topple");
        assert_eq!(id.service(), "content");
        assert_eq!(id.region(), "us-west");
        assert_eq!(id.account(), "1234");
        assert_eq!(id.resource_prefix(), Some("prefix"));
    }

    #[test]
    fn new_suffix_is_uuid_shaped() {
        let id = Trn::new("topple", "content", "us-west", "1234", "prefix").unwrap();
        let suffix = id.resource_suffix().unwrap();

        assert_eq!(suffix.len(), 36);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
        assert!(Uuid::parse_str(suffix).is_ok());
    }

    #[test]
    fn new_generates_fresh_suffixes() {
        let a = Trn::new("p", "s", "r", "a", "pre").unwrap();
        let b = Trn::new("p", "s", "r", "a", "pre").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn new_rejects_colon_in_field() {
        let result = Trn::new("top:ple", "content", "us-west", "1234", "prefix");
        assert_eq!(
            result,
            Err(TrnError::FieldContainsSeparator {
                field: "partition",
                position: 3,
            })
        );

        let result = Trn::new("topple", "content", "us-west", "1234", "pre:fix");
        assert!(matches!(
            result,
            Err(TrnError::FieldContainsSeparator { field: "prefix", .. })
        ));
    }

    #[test]
    fn empty_fields_stay_structurally_valid() {
        let id = Trn::new("", "", "", "", "").unwrap();
        assert!(id.as_str().starts_with("trn:::::/"));
        assert!(Trn::is_valid(id.as_str()));
        assert_eq!(id.partition(), "");
        assert_eq!(id.resource_prefix(), Some(""));
    }

    #[test]
    fn new_numeric_suffix_is_ten_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let id = Trn::new_numeric("topple", "content", "us-west", "1234", "prefix", &mut rng)
            .unwrap();
        let suffix = id.resource_suffix().unwrap();

        assert_eq!(suffix.len(), NUMERIC_SUFFIX_LENGTH);
        assert!(suffix.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn new_numeric_is_deterministic_for_a_seed() {
        let make = || {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            Trn::new_numeric("p", "s", "r", "a", "pre", &mut rng).unwrap()
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn parse_accepts_constructed_trns() {
        let id = Trn::new("topple", "content", "us-west", "1234", "prefix").unwrap();
        let reparsed = Trn::parse(id.as_str()).unwrap();
        assert_eq!(reparsed, id);
    }

    #[test]
    fn parse_empty_fails() {
        assert_eq!(Trn::parse(""), Err(TrnError::Empty));
    }

    #[test]
    fn parse_too_few_fields_fails() {
        assert_eq!(
            Trn::parse("trn:a:b"),
            Err(TrnError::WrongFieldCount {
                expected: FIELD_COUNT,
                actual: 3,
            })
        );
    }

    #[test]
    fn parse_wrong_tag_fails() {
        let result = Trn::parse("arn:aws:s3:us-east-1:1234:bucket/thing");
        assert_eq!(
            result,
            Err(TrnError::BadTag {
                found: "arn".to_owned(),
            })
        );
    }

    #[test]
    fn resource_keeps_trailing_colons_intact() {
        // Max-split of six: colons in the sixth field must not over-split.
        let id = Trn::parse("trn:p:s:r:a:prefix/suf:fix").unwrap();
        assert_eq!(id.resource(), "prefix/suf:fix");
        assert_eq!(id.resource_suffix(), Some("suf:fix"));
    }

    #[test]
    fn encode_decode_round_trips() {
        let id = Trn::new("topple", "content", "us-west", "1234", "prefix").unwrap();
        let wire = id.encode();
        assert_eq!(Trn::decode(&wire).unwrap(), id);
    }

    #[test]
    fn encode_matches_known_vector() {
        let id = Trn::parse("trn:p:s:r:a:x/y").unwrap();
        assert_eq!(id.encode(), "ORZG4OTQHJZTU4R2ME5HQL3Z");
        assert_eq!(Trn::decode("ORZG4OTQHJZTU4R2ME5HQL3Z").unwrap(), id);
    }

    #[test]
    fn decode_rejects_garbage() {
        let result = Trn::decode("not a b32 string");
        assert!(matches!(result, Err(DecodeError::Base32(_))));
    }

    #[test]
    fn decode_rejects_valid_base32_of_non_trn() {
        // base32("hello") is well-formed base32 but not a TRN
        let wire = BASE32.encode(b"hello");
        let result = Trn::decode(&wire);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn is_valid_checks_tag_and_field_count() {
        assert!(Trn::is_valid("trn:::::x/y"));
        assert!(Trn::is_valid("trn:::::"));
        assert!(!Trn::is_valid(""));
        assert!(!Trn::is_valid("trn:a:b:c:d"));
        assert!(!Trn::is_valid("urn:a:b:c:d:e"));
    }

    #[test]
    fn display_and_from_str_round_trip() {
        let id = Trn::new("p", "s", "r", "a", "pre").unwrap();
        let reparsed: Trn = id.to_string().parse().unwrap();
        assert_eq!(reparsed, id);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips_as_raw_string() {
        let id = Trn::new("topple", "content", "us-west", "1234", "prefix").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_str()));
        let back: Trn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
