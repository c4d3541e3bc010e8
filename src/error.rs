//! Error types for address, domain and port parsing.

use std::fmt;

use crate::constants::{
    MAX_DNS_LABEL_LENGTH, MAX_DOMAIN_LENGTH, MAX_EMAIL_ADDRESS_LENGTH, MAX_LOCAL_PART_LENGTH,
    MAX_PORT, MIN_PORT,
};

/// Error produced by the email address and domain grammar parsers.
///
/// Carries the full input and the character position of the failure, which
/// is enough to point at the offending character (see [`ParseError::diagnostic`]).
///
/// # Examples
///
/// ```
/// use mail_address::{EmailDomain, ParseErrorKind};
///
/// let err = EmailDomain::parse("metacode..biz").unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::UnexpectedCharacter);
/// assert_eq!(err.position(), 9);
/// assert_eq!(err.message(), "Expected 'Let-dig'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    input: String,
    position: usize,
}

impl ParseError {
    /// Creates an error using the default message of `kind`.
    pub(crate) fn new(kind: ParseErrorKind, input: &str, position: usize) -> Self {
        Self::with_message(kind, kind.default_message(), input, position)
    }

    pub(crate) fn with_message(
        kind: ParseErrorKind,
        message: impl Into<String>,
        input: &str,
        position: usize,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            input: input.to_string(),
            position,
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the human readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the character index at which parsing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Renders the input with a caret under the failing position.
    ///
    /// ```
    /// use mail_address::parse_email_address;
    ///
    /// let err = parse_email_address("test@domain.example#").unwrap_err();
    /// assert_eq!(
    ///     err.diagnostic(),
    ///     "test@domain.example#\n                   ^ Expected end of input"
    /// );
    /// ```
    #[must_use]
    pub fn diagnostic(&self) -> String {
        format!(
            "{}\n{}^ {}",
            self.input,
            " ".repeat(self.position),
            self.message
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}

/// Specific parsing error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    // Structural
    /// Input ended while more characters were required
    UnexpectedEndOfInput,
    /// Input continues after a complete address or domain
    ExpectedEndOfInput,
    /// Local part is neither a Dot-string nor a Quoted-string
    InvalidLocalPart,
    /// Dot-string contains an empty atom
    InvalidDotString,
    /// Quoted-string contains a character that is neither qtext nor a quoted pair
    InvalidQuotedString,
    /// Domain part is neither a domain nor an address literal
    InvalidDomainPart,
    /// Domain part is an address literal such as `[192.0.2.1]`
    AddressLiteralsNotSupported,
    /// A specific character or character class was expected
    UnexpectedCharacter,

    // Length
    /// Local part is longer than 64 characters
    LocalPartLengthExceeded,
    /// A domain label is longer than 63 characters
    DnsLabelLengthExceeded,
    /// Domain is longer than 253 characters
    DomainLengthExceeded,
    /// Address is longer than 254 characters
    TotalLengthExceeded,

    // Policy
    /// Local part is quoted but the config does not allow quoting
    QuotedStringInLocalPart,
    /// Local part can only be written quoted but the config does not allow that
    LocalPartRequiresQuotedString,
    /// Local part is `""` but the config does not allow an empty local part
    EmptyLocalPart,
}

impl ParseErrorKind {
    /// Returns the message used when the parser has nothing more specific to say.
    #[must_use]
    pub fn default_message(self) -> String {
        match self {
            Self::UnexpectedEndOfInput => "End of input reached unexpectedly".to_string(),
            Self::ExpectedEndOfInput => "Expected end of input".to_string(),
            Self::InvalidLocalPart => "Expected 'Dot-string' or 'Quoted-string'".to_string(),
            Self::InvalidDotString => "Expected 'Dot-string'".to_string(),
            Self::InvalidQuotedString => "Expected 'Quoted-string'".to_string(),
            Self::InvalidDomainPart => "Expected 'Domain' or 'address-literal'".to_string(),
            Self::AddressLiteralsNotSupported => "Address literals are not supported".to_string(),
            Self::UnexpectedCharacter => "Unexpected character".to_string(),
            Self::LocalPartLengthExceeded => format!(
                "Local part exceeds maximum length of {MAX_LOCAL_PART_LENGTH} characters"
            ),
            Self::DnsLabelLengthExceeded => {
                format!("DNS label exceeds maximum length of {MAX_DNS_LABEL_LENGTH} characters")
            }
            Self::DomainLengthExceeded => {
                format!("Domain exceeds maximum length of {MAX_DOMAIN_LENGTH} characters")
            }
            Self::TotalLengthExceeded => format!(
                "The email address exceeds the maximum length of {MAX_EMAIL_ADDRESS_LENGTH} characters"
            ),
            Self::QuotedStringInLocalPart => {
                "Quoted string in local part is not allowed by config".to_string()
            }
            Self::LocalPartRequiresQuotedString => {
                "Local part requiring the use of a quoted string is not allowed by config"
                    .to_string()
            }
            Self::EmptyLocalPart => "Empty local part is not allowed by config".to_string(),
        }
    }

    /// Returns true for errors caused by input that breaks the grammar.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            Self::UnexpectedEndOfInput
                | Self::ExpectedEndOfInput
                | Self::InvalidLocalPart
                | Self::InvalidDotString
                | Self::InvalidQuotedString
                | Self::InvalidDomainPart
                | Self::AddressLiteralsNotSupported
                | Self::UnexpectedCharacter
        )
    }

    /// Returns true for errors caused by exceeding a length limit.
    #[must_use]
    pub const fn is_length(self) -> bool {
        matches!(
            self,
            Self::LocalPartLengthExceeded
                | Self::DnsLabelLengthExceeded
                | Self::DomainLengthExceeded
                | Self::TotalLengthExceeded
        )
    }

    /// Returns true for errors that a more permissive config would have accepted.
    #[must_use]
    pub const fn is_policy(self) -> bool {
        matches!(
            self,
            Self::QuotedStringInLocalPart | Self::LocalPartRequiresQuotedString | Self::EmptyLocalPart
        )
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Errors for standalone host name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Value is not a legal host name
    InvalidHostName {
        /// The rejected value
        value: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHostName { value } => write!(f, "'{value}' is not a valid host name"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Errors for port validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    /// Number is outside of 1-65535
    OutOfRange {
        /// The rejected value
        value: u64,
    },
    /// Text is not a decimal number
    NotANumber {
        /// The rejected text
        value: String,
    },
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(f, "port {value} is out of range; must be {MIN_PORT}-{MAX_PORT}")
            }
            Self::NotANumber { value } => write!(f, "port '{value}' is not a number"),
        }
    }
}

impl std::error::Error for PortError {}
