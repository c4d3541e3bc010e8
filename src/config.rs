//! Policy for the email address parser.

/// Controls which RFC 5321 constructs the email address parser accepts.
///
/// Constructs that are tolerated instead of rejected are recorded as
/// [`Warning`](crate::Warning)s on the parsed address.
///
/// # Examples
///
/// ```
/// use mail_address::{EmailAddress, EmailAddressParserConfig, ParseErrorKind};
///
/// let config = EmailAddressParserConfig {
///     allow_quoted_local_part: false,
///     ..EmailAddressParserConfig::DEFAULT
/// };
///
/// let err = EmailAddress::parse("\"foo bar\"@domain.example", &config).unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::QuotedStringInLocalPart);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmailAddressParserConfig {
    /// Reject local parts longer than 64 characters
    pub is_local_part_length_check_enabled: bool,
    /// Reject addresses longer than 254 characters
    pub is_email_address_length_check_enabled: bool,
    /// Accept a local part written as a quoted string, e.g. `"user"@domain.example`
    pub allow_quoted_local_part: bool,
    /// Accept a local part that can only be written quoted, e.g. `"one two"@domain.example`
    ///
    /// Only relevant when `allow_quoted_local_part` is set.
    pub allow_local_part_requiring_quoted_string: bool,
    /// Accept the empty local part `""`
    ///
    /// Only relevant when quoted local parts are allowed.
    pub allow_empty_local_part: bool,
}

impl EmailAddressParserConfig {
    /// Length limits enforced, quoting allowed, empty local part rejected.
    pub const DEFAULT: Self = Self {
        is_local_part_length_check_enabled: true,
        is_email_address_length_check_enabled: true,
        allow_quoted_local_part: true,
        allow_local_part_requiring_quoted_string: true,
        allow_empty_local_part: false,
    };

    /// Accepts everything the grammar allows; violations become warnings.
    pub const RELAXED: Self = Self {
        is_local_part_length_check_enabled: false,
        is_email_address_length_check_enabled: false,
        allow_quoted_local_part: true,
        allow_local_part_requiring_quoted_string: true,
        allow_empty_local_part: true,
    };

    /// Only accepts addresses whose local part is a plain Dot-string.
    pub const LIMITED: Self = Self {
        is_local_part_length_check_enabled: true,
        is_email_address_length_check_enabled: true,
        allow_quoted_local_part: false,
        allow_local_part_requiring_quoted_string: false,
        allow_empty_local_part: false,
    };
}

impl Default for EmailAddressParserConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_default_preset() {
        assert_eq!(EmailAddressParserConfig::default(), EmailAddressParserConfig::DEFAULT);
    }

    #[test]
    fn default_preset_flags() {
        let config = EmailAddressParserConfig::DEFAULT;
        assert!(config.allow_quoted_local_part);
        assert!(config.allow_local_part_requiring_quoted_string);
        assert!(!config.allow_empty_local_part);
    }
}
