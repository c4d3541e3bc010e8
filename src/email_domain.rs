//! Domain part of an email address.
//!
//! # Grammar Reference
//!
//! RFC 5321, section 4.1.2:
//!
//! ```abnf
//! Domain     = sub-domain *("." sub-domain)
//! sub-domain = Let-dig [Ldh-str]
//! Ldh-str    = *( ALPHA / DIGIT / "-" ) Let-dig
//! ```
//!
//! Labels are limited to 63 characters and the domain to 253 characters.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::chars::{DOT, HYPHEN, is_let_dig};
use crate::constants::{MAX_DNS_LABEL_LENGTH, MAX_DOMAIN_LENGTH};
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};

const LET_DIG: &str = "Let-dig";

/// A syntactically valid RFC 5321 domain.
///
/// The spelling as written is kept for display. Comparison and hashing use the
/// lowercased form, so two domains differing only in case are equal.
///
/// # Examples
///
/// ```
/// use mail_address::EmailDomain;
///
/// let domain = EmailDomain::parse("Example.COM").unwrap();
/// assert_eq!(domain.as_str(), "Example.COM");
/// assert_eq!(domain.normalized(), "example.com");
/// assert_eq!(domain, EmailDomain::parse("example.com").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct EmailDomain {
    value: String,
    normalized: String,
}

impl EmailDomain {
    /// Parses a domain, requiring the whole input to be consumed.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - A label does not start or end with a letter or digit
    /// - A label contains characters other than letters, digits and hyphens
    /// - A label exceeds 63 characters
    /// - The domain exceeds 253 characters
    /// - Characters follow the domain (`ExpectedEndOfInput`)
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(input);
        let result = read_domain(&mut cursor).and_then(|domain| {
            if cursor.end_reached() {
                Ok(domain)
            } else {
                Err(cursor.parser_error(ParseErrorKind::ExpectedEndOfInput))
            }
        });

        if let Err(e) = &result {
            tracing::debug!(kind = %e.kind(), position = e.position(), "rejected domain");
        }

        result
    }

    fn from_validated(value: &str) -> Self {
        Self {
            value: value.to_string(),
            normalized: value.to_ascii_lowercase(),
        }
    }

    /// Returns the domain as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the lowercased domain.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Returns an iterator over the labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.value.split(DOT)
    }
}

/// Reads `Domain` at the cursor, leaving any trailing input unconsumed.
pub(crate) fn read_domain(cursor: &mut Cursor<'_>) -> Result<EmailDomain, ParseError> {
    let domain = cursor.read_string(|c| {
        expect_sub_domain(c)?;
        while c.next_is(DOT) {
            c.expect(DOT)?;
            expect_sub_domain(c)?;
        }
        Ok(())
    })?;

    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(cursor.parser_error(ParseErrorKind::DomainLengthExceeded));
    }

    Ok(EmailDomain::from_validated(domain))
}

fn expect_sub_domain(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    let start = cursor.offset();
    cursor.expect_matching(LET_DIG, is_let_dig)?;

    let mut requires_let_dig = false;
    while !cursor.end_reached() {
        let c = cursor.peek()?;
        if c == HYPHEN {
            requires_let_dig = true;
            cursor.expect(HYPHEN)?;
        } else if is_let_dig(c) {
            requires_let_dig = false;
            cursor.expect_matching(LET_DIG, is_let_dig)?;
        } else {
            break;
        }
    }

    // A label may not end with a hyphen
    if requires_let_dig {
        cursor.expect_matching(LET_DIG, is_let_dig)?;
    }

    // Labels are ASCII, so bytes and characters agree
    if cursor.offset() - start > MAX_DNS_LABEL_LENGTH {
        return Err(cursor.parser_error(ParseErrorKind::DnsLabelLengthExceeded));
    }

    Ok(())
}

impl PartialEq for EmailDomain {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for EmailDomain {}

impl Hash for EmailDomain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl PartialOrd for EmailDomain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EmailDomain {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

impl fmt::Display for EmailDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for EmailDomain {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EmailDomain {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for EmailDomain {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
