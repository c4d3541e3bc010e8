//! Parser and validator for email addresses, host names and ports.
//!
//! This crate implements the syntax checks a mail client runs on user input
//! before it is used to configure an account: email addresses following
//! RFC 5321, host names following RFC 952/1123, IPv4 and IPv6 addresses, and
//! TCP port numbers. Everything is offline and lexical; nothing is resolved.
//!
//! # Quick Start
//!
//! ```rust
//! use mail_address::{parse_email_address, Domain, EmailDomain, Port};
//!
//! // Parse an email address
//! let address = parse_email_address("alice@Domain.Example").unwrap();
//! assert_eq!(address.local_part(), "alice");
//! assert_eq!(address.domain().normalized(), "domain.example");
//!
//! // Domains compare case-insensitively
//! assert_eq!(address.domain(), &EmailDomain::parse("domain.example").unwrap());
//!
//! // Server settings
//! let host = Domain::parse("imap.domain.example").unwrap();
//! let port = Port::new(993).unwrap();
//! assert_eq!(format!("{host}:{port}"), "imap.domain.example:993");
//! ```
//!
//! # Diagnostics
//!
//! Email address and domain parsing stop at the first problem and report its
//! position:
//!
//! ```rust
//! use mail_address::{parse_email_address, ParseErrorKind};
//!
//! let err = parse_email_address("invalid.@domain.example").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::InvalidDotString);
//! assert_eq!(err.position(), 8);
//! ```
//!
//! Host name and IP checks instead return `None` for illegal input and the
//! canonical form otherwise, see [`hostname`].
//!
//! # Length Constraints
//!
//! | Component | Max Length |
//! |-----------|------------|
//! | Email address | 254 chars |
//! | Local part | 64 chars |
//! | Email domain | 253 chars |
//! | DNS label | 63 chars |
//! | Host name | 255 chars |
//!
//! The two email limits can be relaxed through [`EmailAddressParserConfig`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod chars;
mod config;
mod constants;
mod cursor;
mod domain;
mod email_address;
mod email_domain;
mod error;
pub mod hostname;
#[cfg(kani)]
mod kani_impls;
mod port;
pub mod prelude;

pub use chars::{
    is_alpha, is_atext, is_digit, is_dot_string, is_let_dig, is_qtext, is_quoted_char,
};
pub use config::EmailAddressParserConfig;
pub use constants::{
    MAX_DNS_LABEL_LENGTH, MAX_DOMAIN_LENGTH, MAX_EMAIL_ADDRESS_LENGTH, MAX_HOST_NAME_LENGTH,
    MAX_LOCAL_PART_LENGTH, MAX_PORT, MIN_PORT,
};
pub use domain::{Domain, to_domain_or_none};
pub use email_address::{EmailAddress, Warning, parse_email_address};
pub use email_domain::EmailDomain;
pub use error::{DomainError, ParseError, ParseErrorKind, PortError};
pub use hostname::{
    clean_up_host_name, is_legal_host_name, is_legal_host_name_or_ip, is_legal_ipv4_address,
    is_legal_ipv6_address,
};
pub use port::Port;

/// Parses a domain, requiring the whole input to be consumed.
///
/// Shorthand for [`EmailDomain::parse`].
///
/// # Errors
///
/// Returns `ParseError` if the input is not a valid RFC 5321 domain.
pub fn parse_domain(input: &str) -> Result<EmailDomain, ParseError> {
    EmailDomain::parse(input)
}
