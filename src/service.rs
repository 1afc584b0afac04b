//! The service-name registry.

use std::fmt;
use std::str::FromStr;

use crate::error::ServiceError;

/// A registered service name.
///
/// The registry is the closed set of logical services that may own a TRN.
/// Each variant maps to exactly one lowercase token and one ordinal position;
/// token and ordinal lookups are mutual inverses. The table is fixed at
/// compile time and never mutated.
///
/// The `service` field of a [`crate::Trn`] is stored as free text; callers
/// that care about the convention validate it against this registry:
///
/// ```
/// use trn::Service;
///
/// let service: Service = "content".parse().unwrap();
/// assert_eq!(service, Service::Content);
/// assert_eq!(service.as_str(), "content");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Resource metadata catalogue
    Metadata,
    /// Edge ingress
    Ingress,
    /// Content storage and delivery
    Content,
    /// Broadcast fan-out
    Broadcast,
    /// Account management
    Account,
    /// Workspace management
    Workspace,
}

impl Service {
    /// Every registered service, in ordinal order.
    pub const ALL: [Self; 6] = [
        Self::Metadata,
        Self::Ingress,
        Self::Content,
        Self::Broadcast,
        Self::Account,
        Self::Workspace,
    ];

    /// Returns the registry token for this service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Ingress => "ingress",
            Self::Content => "content",
            Self::Broadcast => "broadcast",
            Self::Account => "account",
            Self::Workspace => "workspace",
        }
    }

    /// Returns this service's position in [`Service::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the service at the given registry position.
    ///
    /// # Panics
    ///
    /// Panics if `ordinal >= Service::ALL.len()`. Ordinals are only meant to
    /// originate from this table, so an out-of-range value is a programming
    /// error, not a recoverable condition.
    #[must_use]
    pub const fn from_ordinal(ordinal: usize) -> Self {
        Self::ALL[ordinal]
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Service {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metadata" => Ok(Self::Metadata),
            "ingress" => Ok(Self::Ingress),
            "content" => Ok(Self::Content),
            "broadcast" => Ok(Self::Broadcast),
            "account" => Ok(Self::Account),
            "workspace" => Ok(Self::Workspace),
            other => Err(ServiceError::Unknown {
                name: other.to_owned(),
            }),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Service {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Service {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tokens() {
        assert_eq!("metadata".parse::<Service>().unwrap(), Service::Metadata);
        assert_eq!("ingress".parse::<Service>().unwrap(), Service::Ingress);
        assert_eq!("content".parse::<Service>().unwrap(), Service::Content);
        assert_eq!("broadcast".parse::<Service>().unwrap(), Service::Broadcast);
        assert_eq!("account".parse::<Service>().unwrap(), Service::Account);
        assert_eq!("workspace".parse::<Service>().unwrap(), Service::Workspace);
    }

    #[test]
    fn parse_unknown_token_fails() {
        let result = "billing".parse::<Service>();
        assert_eq!(
            result,
            Err(ServiceError::Unknown {
                name: "billing".to_owned(),
            })
        );
    }

    #[test]
    fn parse_empty_fails() {
        assert!("".parse::<Service>().is_err());
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Metadata".parse::<Service>().is_err());
    }

    #[test]
    fn ordinal_and_token_are_mutual_inverses() {
        for (k, service) in Service::ALL.into_iter().enumerate() {
            assert_eq!(service.ordinal(), k);
            assert_eq!(Service::from_ordinal(k), service);
            assert_eq!(service.as_str().parse::<Service>().unwrap(), service);
        }
    }

    #[test]
    fn tokens_are_unique() {
        let tokens: std::collections::HashSet<_> =
            Service::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(tokens.len(), Service::ALL.len());
    }

    #[test]
    fn display_matches_token() {
        assert_eq!(Service::Content.to_string(), "content");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips_as_token() {
        let json = serde_json::to_string(&Service::Broadcast).unwrap();
        assert_eq!(json, "\"broadcast\"");
        let back: Service = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Service::Broadcast);
    }
}
