//! Integration tests for the account setup checks.
//!
//! These walk through the values a mail client collects when an account is
//! configured: the email address, the incoming and outgoing server hosts and
//! their ports.

use mail_address::prelude::*;
use mail_address::{is_atext, is_qtext};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Several tests race to install the subscriber; only the first one wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Email addresses
// ============================================================================

#[test]
fn account_address_is_accepted() {
    init_tracing();

    let address = parse_email_address("test@domain.example").unwrap();
    assert_eq!(address.local_part(), "test");
    assert_eq!(address.domain().as_str(), "domain.example");
    assert_eq!(address.to_string(), "test@domain.example");
}

#[test]
fn quoted_local_part_follows_policy() {
    init_tracing();

    let input = "\"foo bar\"@domain.example";

    let address = EmailAddress::parse(input, &EmailAddressParserConfig::DEFAULT).unwrap();
    assert_eq!(address.local_part(), "foo bar");
    assert_eq!(address.encoded_local_part(), "\"foo bar\"");
    assert_eq!(
        address.warnings(),
        &[
            Warning::QuotedStringInLocalPart,
            Warning::LocalPartRequiresQuotedString
        ]
    );

    let err = EmailAddress::parse(input, &EmailAddressParserConfig::LIMITED).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::QuotedStringInLocalPart);
    assert_eq!(err.position(), 0);
    assert!(err.kind().is_policy());
}

#[test]
fn relaxed_config_tolerates_everything_with_warnings() {
    init_tracing();

    let long_local = "a".repeat(MAX_LOCAL_PART_LENGTH + 1);
    let input = format!("{long_local}@domain.example");

    assert_eq!(
        parse_email_address(&input).unwrap_err().kind(),
        ParseErrorKind::LocalPartLengthExceeded
    );

    let address = EmailAddress::parse(&input, &EmailAddressParserConfig::RELAXED).unwrap();
    assert_eq!(address.warnings(), &[Warning::LocalPartExceedsLengthLimit]);

    let empty = EmailAddress::parse("\"\"@domain.example", &EmailAddressParserConfig::RELAXED)
        .unwrap();
    assert_eq!(empty.local_part(), "");
    assert!(empty.warnings().contains(&Warning::EmptyLocalPart));
}

#[test]
fn custom_config_switches_single_checks() {
    let config = EmailAddressParserConfig {
        allow_local_part_requiring_quoted_string: false,
        ..EmailAddressParserConfig::default()
    };

    // Unnecessary quoting is still fine
    let address = EmailAddress::parse("\"user\"@domain.example", &config).unwrap();
    assert_eq!(address.address(), "user@domain.example");

    let err = EmailAddress::parse("\"us er\"@domain.example", &config).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::LocalPartRequiresQuotedString);
}

#[test]
fn diagnostic_points_at_the_problem() {
    let err = parse_email_address("user@metacode..biz").unwrap_err();
    assert_eq!(err.position(), 14);
    assert_eq!(err.message(), "Expected 'Let-dig'");
    assert_eq!(
        err.diagnostic(),
        "user@metacode..biz\n              ^ Expected 'Let-dig'"
    );
}

#[test]
fn structural_errors_are_classified() {
    let cases = [
        ("", ParseErrorKind::UnexpectedEndOfInput),
        ("user", ParseErrorKind::UnexpectedCharacter),
        (".user@domain.example", ParseErrorKind::InvalidLocalPart),
        ("user.@domain.example", ParseErrorKind::InvalidDotString),
        ("user@-domain.example", ParseErrorKind::InvalidDomainPart),
        ("user@domain.example ", ParseErrorKind::ExpectedEndOfInput),
        ("user@[127.0.0.1]", ParseErrorKind::AddressLiteralsNotSupported),
    ];

    for (input, kind) in cases {
        let err = parse_email_address(input).unwrap_err();
        assert_eq!(err.kind(), kind, "input: {input:?}");
        assert_eq!(err.input(), input);
    }
}

#[test]
fn addresses_work_as_map_keys() {
    use std::collections::HashMap;

    let mut accounts = HashMap::new();
    accounts.insert(parse_email_address("alice@domain.example").unwrap(), "Work");
    accounts.insert(parse_email_address("\"alice\"@domain.example").unwrap(), "Duplicate");

    assert_eq!(accounts.len(), 1);
}

#[test]
fn character_classes_agree_with_parser() {
    for c in ['!', '#', '~', 'a', 'Z', '9'] {
        assert!(is_atext(c));
        let input = format!("{c}@domain.example");
        assert!(parse_email_address(&input).is_ok(), "input: {input:?}");
    }
    for c in ['(', ')', ',', ':', ';', '<', '>', '[', ']', ' '] {
        assert!(!is_atext(c));
        assert!(is_qtext(c) || c == ' ');
    }
}

// ============================================================================
// Domains
// ============================================================================

#[test]
fn email_domain_rejects_double_dot() {
    let err = parse_domain("metacode..biz").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedCharacter);
    assert_eq!(err.position(), 9);
}

#[test]
fn email_domain_normalizes_case() {
    let domain = parse_domain("Mail.Domain.EXAMPLE").unwrap();
    assert_eq!(domain.normalized(), "mail.domain.example");
    assert_eq!(domain, "mail.domain.example".parse::<EmailDomain>().unwrap());
}

#[test]
fn server_domain_accepts_host_names_only() {
    init_tracing();

    assert_eq!(Domain::parse("example.com.").unwrap().as_str(), "example.com.");
    // Numeric labels are legal host names
    assert_eq!(Domain::parse("192.0.2.1").unwrap().as_str(), "192.0.2.1");
    assert!(Domain::parse("2001:db8::1").is_err());

    assert_eq!(
        Domain::parse("mail server"),
        Err(DomainError::InvalidHostName {
            value: "mail server".to_string()
        })
    );
    assert!(to_domain_or_none("").is_none());
}

// ============================================================================
// Host names and IP addresses
// ============================================================================

#[test]
fn host_name_with_trailing_dot() {
    assert_eq!(is_legal_host_name("example.com.").as_deref(), Some("example.com."));
}

#[test]
fn ipv6_short_forms_expand() {
    assert_eq!(
        is_legal_ipv6_address("::1").as_deref(),
        Some("0000:0000:0000:0000:0000:0000:0000:0001")
    );
    assert_eq!(
        is_legal_ipv6_address("2001:db8::1").as_deref(),
        Some("2001:0db8:0000:0000:0000:0000:0000:0001")
    );
}

#[test]
fn ipv6_unspecified_address_is_not_a_host() {
    assert_eq!(is_legal_ipv6_address("0:0:0:0:0:0:0:0"), None);
    assert_eq!(is_legal_host_name_or_ip("0:0:0:0:0:0:0:0"), None);
}

#[test]
fn user_input_is_cleaned_before_checking() {
    let raw = "  smtp.domain.example\n";
    assert_eq!(is_legal_host_name_or_ip(raw), None);

    let cleaned = clean_up_host_name(raw);
    assert_eq!(
        is_legal_host_name_or_ip(&cleaned).as_deref(),
        Some("smtp.domain.example")
    );
}

// ============================================================================
// Ports
// ============================================================================

#[test]
fn port_range_boundaries() {
    assert!(Port::new(0).is_err());
    assert!(Port::new(65536).is_err());
    assert_eq!(Port::new(u32::from(MIN_PORT)).unwrap().get(), MIN_PORT);
    assert_eq!(Port::new(u32::from(MAX_PORT)).unwrap().get(), MAX_PORT);
}

#[test]
fn port_error_messages() {
    assert_eq!(
        Port::new(65536).unwrap_err().to_string(),
        "port 65536 is out of range; must be 1-65535"
    );
    assert!(matches!("imaps".parse::<Port>(), Err(PortError::NotANumber { .. })));
}

#[test]
fn server_settings_format() {
    let host = Domain::parse("imap.domain.example").unwrap();
    let port: Port = "993".parse().unwrap();
    assert_eq!(format!("{host}:{port}"), "imap.domain.example:993");
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn account_settings_roundtrip() {
        let address = parse_email_address("\"foo bar\"@domain.example").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, r#""\"foo bar\"@domain.example""#);
        let back: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);

        let port = Port::new(465).unwrap();
        assert_eq!(serde_json::to_string(&port).unwrap(), "465");
        assert_eq!(serde_json::from_str::<Port>("465").unwrap(), port);

        let domain = Domain::parse("smtp.domain.example").unwrap();
        let back: Domain = serde_json::from_str(&serde_json::to_string(&domain).unwrap()).unwrap();
        assert_eq!(back, domain);
    }

    #[test]
    fn invalid_values_fail_to_deserialize() {
        assert!(serde_json::from_str::<Port>("0").is_err());
        assert!(serde_json::from_str::<EmailDomain>(r#""metacode..biz""#).is_err());
        assert!(serde_json::from_str::<EmailAddress>(r#""not an address""#).is_err());
    }

    #[test]
    fn stored_addresses_load_under_relaxed_policy() {
        let long_local = "a".repeat(MAX_LOCAL_PART_LENGTH + 1);
        let json = format!("\"{long_local}@domain.example\"");
        let address: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(address.local_part(), long_local);
    }

    #[test]
    fn config_roundtrip() {
        let json = serde_json::to_string(&EmailAddressParserConfig::LIMITED).unwrap();
        let back: EmailAddressParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EmailAddressParserConfig::LIMITED);
    }
}
