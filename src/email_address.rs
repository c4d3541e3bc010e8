//! Email address type and parser.
//!
//! # Grammar Reference
//!
//! RFC 5321, section 4.1.2:
//!
//! ```abnf
//! Mailbox       = Local-part "@" ( Domain / address-literal )
//! Local-part    = Dot-string / Quoted-string
//! Dot-string    = Atom *("."  Atom)
//! Atom          = 1*atext
//! Quoted-string = DQUOTE *QcontentSMTP DQUOTE
//! QcontentSMTP  = qtextSMTP / quoted-pairSMTP
//! ```
//!
//! Address literals are recognized but rejected. The obsolete local-part
//! syntax of RFC 5322 (mixing quoted strings and atoms) is not supported.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::chars::{
    AT, BACKSLASH, DOT, DQUOTE, LEFT_BRACKET, is_atext, is_dot_string, is_let_dig, is_qtext,
    is_quoted_char,
};
use crate::config::EmailAddressParserConfig;
use crate::constants::{MAX_EMAIL_ADDRESS_LENGTH, MAX_LOCAL_PART_LENGTH};
use crate::cursor::Cursor;
use crate::email_domain::{EmailDomain, read_domain};
use crate::error::{ParseError, ParseErrorKind};

/// An irregularity the parser tolerated because the config allowed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Warning {
    /// The local part was written as a quoted string
    QuotedStringInLocalPart,
    /// The local part can only be written as a quoted string
    LocalPartRequiresQuotedString,
    /// The local part is empty (`""`)
    EmptyLocalPart,
    /// The local part is longer than 64 characters
    LocalPartExceedsLengthLimit,
    /// The address is longer than 254 characters
    EmailAddressExceedsLengthLimit,
}

/// A parsed and validated email address.
///
/// The address is kept in canonical form: a local part that is a valid
/// Dot-string is written without quotes, any other local part is quoted and
/// escaped. Equality and hashing use this canonical form, which preserves the
/// case of both parts.
///
/// # Examples
///
/// ```
/// use mail_address::{EmailAddress, EmailAddressParserConfig};
///
/// let address = EmailAddress::parse("alice@domain.example", &EmailAddressParserConfig::DEFAULT).unwrap();
/// assert_eq!(address.local_part(), "alice");
/// assert_eq!(address.domain().as_str(), "domain.example");
/// assert_eq!(address.address(), "alice@domain.example");
///
/// // Unnecessary quotes are dropped
/// let address: EmailAddress = "\"alice\"@domain.example".parse().unwrap();
/// assert_eq!(address.address(), "alice@domain.example");
/// ```
#[derive(Debug, Clone)]
pub struct EmailAddress {
    local_part: String,
    domain: EmailDomain,
    warnings: Vec<Warning>,
    encoded_local_part: String,
    address: String,
}

impl EmailAddress {
    /// Parses an email address using the given policy.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` on the first violation of the grammar, of a
    /// length limit, or of the policy in `config`.
    pub fn parse(input: &str, config: &EmailAddressParserConfig) -> Result<Self, ParseError> {
        let result = EmailAddressParser::new(input, config).parse();

        match &result {
            Ok(address) if !address.warnings.is_empty() => {
                tracing::trace!(warnings = ?address.warnings, "accepted email address with warnings");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(kind = %e.kind(), position = e.position(), "rejected email address");
            }
        }

        result
    }

    /// Returns the unescaped local part.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Returns the local part as written in the address, quoted if necessary.
    #[must_use]
    pub fn encoded_local_part(&self) -> &str {
        &self.encoded_local_part
    }

    /// Returns the domain part.
    #[must_use]
    pub const fn domain(&self) -> &EmailDomain {
        &self.domain
    }

    /// Returns the irregularities the parser tolerated.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns the canonical address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the address with the domain part lowercased.
    ///
    /// The local part keeps its case; only the receiving host may interpret it.
    #[must_use]
    pub fn normalized_address(&self) -> String {
        format!("{}@{}", self.encoded_local_part, self.domain.normalized())
    }
}

/// Parses an email address with [`EmailAddressParserConfig::DEFAULT`].
///
/// # Errors
///
/// Returns `ParseError` if the input is not a valid address.
///
/// # Examples
///
/// ```
/// use mail_address::parse_email_address;
///
/// let address = parse_email_address("test@domain.example").unwrap();
/// assert_eq!(address.address(), "test@domain.example");
/// ```
pub fn parse_email_address(input: &str) -> Result<EmailAddress, ParseError> {
    EmailAddress::parse(input, &EmailAddressParserConfig::DEFAULT)
}

struct EmailAddressParser<'a> {
    cursor: Cursor<'a>,
    config: EmailAddressParserConfig,
    warnings: Vec<Warning>,
}

impl<'a> EmailAddressParser<'a> {
    fn new(input: &'a str, config: &EmailAddressParserConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config: *config,
            warnings: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<EmailAddress, ParseError> {
        let local_part = self.read_local_part()?;
        self.cursor.expect(AT)?;
        let domain = self.read_domain_part()?;

        if !self.cursor.end_reached() {
            return Err(self.cursor.parser_error(ParseErrorKind::ExpectedEndOfInput));
        }

        let encoded_local_part = encode_local_part(&local_part);
        let address = format!("{encoded_local_part}@{domain}");

        if address.chars().count() > MAX_EMAIL_ADDRESS_LENGTH {
            if self.config.is_email_address_length_check_enabled {
                return Err(self.cursor.parser_error(ParseErrorKind::TotalLengthExceeded));
            }
            self.warn(Warning::EmailAddressExceedsLengthLimit);
        }

        Ok(EmailAddress {
            local_part,
            domain,
            warnings: self.warnings,
            encoded_local_part,
            address,
        })
    }

    fn read_local_part(&mut self) -> Result<String, ParseError> {
        let start = self.cursor.position();
        let c = self.cursor.peek()?;

        let local_part = if is_atext(c) {
            self.cursor.read_string(expect_dot_string)?.to_string()
        } else if c == DQUOTE {
            let quoted = self.read_quoted_string()?;
            self.check_quoted_local_part(&quoted, start)?;
            quoted
        } else {
            return Err(self.cursor.parser_error(ParseErrorKind::InvalidLocalPart));
        };

        if local_part.chars().count() > MAX_LOCAL_PART_LENGTH {
            if self.config.is_local_part_length_check_enabled {
                return Err(self.cursor.parser_error(ParseErrorKind::LocalPartLengthExceeded));
            }
            self.warn(Warning::LocalPartExceedsLengthLimit);
        }

        Ok(local_part)
    }

    /// Reads a quoted string and returns its unescaped content.
    fn read_quoted_string(&mut self) -> Result<String, ParseError> {
        self.cursor.expect(DQUOTE)?;

        let mut content = String::new();
        while !self.cursor.end_reached() {
            let c = self.cursor.peek()?;
            if is_qtext(c) {
                self.cursor.read()?;
                content.push(c);
            } else if c == BACKSLASH {
                self.cursor.read()?;
                let escaped = self.cursor.read()?;
                if !is_quoted_char(escaped) {
                    return Err(self.cursor.parser_error(ParseErrorKind::InvalidQuotedString));
                }
                content.push(escaped);
            } else if c == DQUOTE {
                break;
            } else {
                return Err(self.cursor.parser_error(ParseErrorKind::InvalidQuotedString));
            }
        }

        let closing_quote = self.cursor.position();
        self.cursor.expect(DQUOTE)?;

        if content.is_empty() {
            if !self.config.allow_empty_local_part {
                return Err(self
                    .cursor
                    .parser_error_at(ParseErrorKind::EmptyLocalPart, closing_quote));
            }
            self.warn(Warning::EmptyLocalPart);
        }

        Ok(content)
    }

    fn check_quoted_local_part(&mut self, content: &str, start: usize) -> Result<(), ParseError> {
        if !self.config.allow_quoted_local_part {
            return Err(self
                .cursor
                .parser_error_at(ParseErrorKind::QuotedStringInLocalPart, start));
        }
        self.warn(Warning::QuotedStringInLocalPart);

        if !is_dot_string(content) {
            if !self.config.allow_local_part_requiring_quoted_string {
                return Err(self
                    .cursor
                    .parser_error_at(ParseErrorKind::LocalPartRequiresQuotedString, start));
            }
            self.warn(Warning::LocalPartRequiresQuotedString);
        }

        Ok(())
    }

    fn read_domain_part(&mut self) -> Result<EmailDomain, ParseError> {
        let c = self.cursor.peek()?;
        if is_let_dig(c) {
            read_domain(&mut self.cursor)
        } else if c == LEFT_BRACKET {
            Err(self
                .cursor
                .parser_error(ParseErrorKind::AddressLiteralsNotSupported))
        } else {
            Err(self.cursor.parser_error(ParseErrorKind::InvalidDomainPart))
        }
    }

    fn warn(&mut self, warning: Warning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }
}

fn expect_dot_string(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    expect_atom(cursor)?;
    while cursor.next_is(DOT) {
        cursor.expect(DOT)?;
        expect_atom(cursor)?;
    }
    Ok(())
}

fn expect_atom(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    let start = cursor.offset();
    cursor.skip_while(is_atext);
    if cursor.offset() == start {
        return Err(cursor.parser_error(ParseErrorKind::InvalidDotString));
    }
    Ok(())
}

fn encode_local_part(local_part: &str) -> String {
    if is_dot_string(local_part) {
        return local_part.to_string();
    }

    let mut encoded = String::with_capacity(local_part.len() + 2);
    encoded.push(DQUOTE);
    for c in local_part.chars() {
        if c == DQUOTE || c == BACKSLASH {
            encoded.push(BACKSLASH);
        }
        encoded.push(c);
    }
    encoded.push(DQUOTE);
    encoded
}

impl PartialEq for EmailAddress {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for EmailAddress {}

impl Hash for EmailAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for EmailAddress {
    type Err = ParseError;

    /// Parses with [`EmailAddressParserConfig::DEFAULT`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_email_address(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_email_address(s)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.address)
    }
}

// Stored addresses were validated when they were entered, possibly under a
// more permissive config than DEFAULT.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s, &EmailAddressParserConfig::RELAXED).map_err(serde::de::Error::custom)
    }
}
