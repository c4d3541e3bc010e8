//! Host name type for server settings.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::hostname::is_legal_host_name;

/// A validated host name, such as the address of an IMAP or SMTP server.
///
/// Unlike [`EmailDomain`](crate::EmailDomain) this accepts a trailing root
/// dot and keeps case significant in comparisons.
///
/// # Examples
///
/// ```
/// use mail_address::Domain;
///
/// let domain = Domain::parse("imap.example.com").unwrap();
/// assert_eq!(domain.as_str(), "imap.example.com");
///
/// assert!(Domain::parse("not a host").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Domain(String);

impl Domain {
    /// Parses a host name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHostName` if the input is not a legal host name.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        is_legal_host_name(input).map(Self).ok_or_else(|| {
            tracing::debug!(length = input.len(), "rejected host name");
            DomainError::InvalidHostName {
                value: input.to_string(),
            }
        })
    }

    /// Returns the host name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Converts `input` to a [`Domain`], discarding the reason for a rejection.
///
/// ```
/// use mail_address::to_domain_or_none;
///
/// assert!(to_domain_or_none("example.com").is_some());
/// assert!(to_domain_or_none("example..com").is_none());
/// ```
#[must_use]
pub fn to_domain_or_none(input: &str) -> Option<Domain> {
    Domain::parse(input).ok()
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Domain {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Domain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Domain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
