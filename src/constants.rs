//! Length limits from RFC 5321 and RFC 1035.

/// Maximum length of the local part of an email address (RFC 5321, 4.5.3.1.1).
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Maximum length of a single DNS label.
pub const MAX_DNS_LABEL_LENGTH: usize = 63;

/// Maximum length of a domain name in an email address.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum length of an email address.
///
/// The path limit of 256 octets minus the surrounding angle brackets.
pub const MAX_EMAIL_ADDRESS_LENGTH: usize = 254;

/// Maximum length accepted by the standalone hostname check.
pub const MAX_HOST_NAME_LENGTH: usize = 255;

/// Smallest valid port number.
pub const MIN_PORT: u16 = 1;

/// Largest valid port number.
pub const MAX_PORT: u16 = 65535;
