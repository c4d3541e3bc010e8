//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use mail_address::prelude::*;
//!
//! let address = parse_email_address("alice@domain.example").unwrap();
//! let port = Port::new(587).unwrap();
//! ```
//!
//! Character class predicates are intentionally excluded; import them from
//! the crate root when needed.

pub use crate::{
    // Core types
    Domain, EmailAddress, EmailAddressParserConfig, EmailDomain, Port, Warning,
    // Parsing
    parse_domain, parse_email_address, to_domain_or_none,
    // Host name checks
    clean_up_host_name, is_legal_host_name, is_legal_host_name_or_ip, is_legal_ipv4_address,
    is_legal_ipv6_address,
    // Errors
    DomainError, ParseError, ParseErrorKind, PortError,
    // Constants
    MAX_DNS_LABEL_LENGTH, MAX_DOMAIN_LENGTH, MAX_EMAIL_ADDRESS_LENGTH, MAX_HOST_NAME_LENGTH,
    MAX_LOCAL_PART_LENGTH, MAX_PORT, MIN_PORT,
};
