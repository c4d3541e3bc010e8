//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::chars::{is_atext, is_dot_string, is_let_dig, is_qtext, is_quoted_char};
use crate::hostname::is_legal_ipv4_address;
use crate::{EmailDomain, Port};

/// Valid characters for domain labels: alphanumeric and hyphen
const DOMAIN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-";

/// Generate a valid domain character (for non-leading/trailing positions)
fn arbitrary_domain_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % DOMAIN_CHARS.len();
    DOMAIN_CHARS[idx] as char
}

/// Generate a valid domain label start/end character (letters and digits only)
fn arbitrary_domain_boundary_char() -> char {
    let chars = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let idx: usize = kani::any();
    let idx = idx % chars.len();
    chars[idx] as char
}

fn arbitrary_label(max_len: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);
    (0..len)
        .map(|i| {
            if i == 0 || i == len - 1 {
                arbitrary_domain_boundary_char()
            } else {
                arbitrary_domain_char()
            }
        })
        .collect()
}

impl kani::Arbitrary for EmailDomain {
    fn any() -> Self {
        // Labels of 1-6 chars for tractability
        let domain = format!("{}.{}", arbitrary_label(6), arbitrary_label(6));
        EmailDomain::parse(&domain).expect("valid domain by construction")
    }
}

impl kani::Arbitrary for Port {
    fn any() -> Self {
        let value: u16 = kani::any();
        kani::assume(value > 0);
        Port::new(u32::from(value)).expect("valid port by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: qtext and the escape characters partition printable ASCII
#[kani::proof]
fn proof_qtext_is_quoted_char_without_delimiters() {
    let c: char = kani::any();
    assert_eq!(is_qtext(c), is_quoted_char(c) && c != '"' && c != '\\');
}

/// Proof: every Let-dig is atext
#[kani::proof]
fn proof_let_dig_is_atext() {
    let c: char = kani::any();
    kani::assume(is_let_dig(c));
    assert!(is_atext(c));
}

/// Proof: a single atext character is a Dot-string
#[kani::proof]
#[kani::unwind(3)]
fn proof_single_atext_is_dot_string() {
    let c: char = kani::any();
    kani::assume(is_atext(c));
    assert!(is_dot_string(&c.to_string()));
}

/// Proof: Port::new accepts exactly 1-65535
#[kani::proof]
fn proof_port_range() {
    let value: u32 = kani::any();
    assert_eq!(Port::new(value).is_ok(), (1..=65535).contains(&value));
}

/// Proof: every port round-trips through its number
#[kani::proof]
fn proof_port_roundtrip() {
    let port: Port = kani::any();
    assert_eq!(Port::new(u32::from(port.get())), Ok(port));
}

/// Proof: a parsed domain reparses to an equal domain
#[kani::proof]
#[kani::unwind(16)]
fn proof_domain_roundtrip() {
    let domain: EmailDomain = kani::any();
    let reparsed = EmailDomain::parse(domain.as_str()).expect("display form should parse");
    assert_eq!(reparsed, domain);
}

/// Proof: IPv4 addresses with a zero first component are rejected
#[kani::proof]
#[kani::unwind(16)]
fn proof_ipv4_zero_network_rejected() {
    let (b, c, d): (u8, u8, u8) = kani::any();
    assert!(is_legal_ipv4_address(&format!("0.{b}.{c}.{d}")).is_none());
}
