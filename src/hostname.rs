//! Host name and IP address checks for server settings.
//!
//! Unlike the email parsers these functions do not diagnose errors. Each one
//! answers whether the input is legal and, if so, returns its canonical form.
//!
//! ```abnf
//! host-name = *( ldh-label "." ) ldh-label [ "." ]
//! ldh-label = let-dig [ *61( let-dig / "-" ) let-dig ]
//! ```

use crate::constants::{MAX_DNS_LABEL_LENGTH, MAX_HOST_NAME_LENGTH};

const IPV6_GROUPS: usize = 8;

/// Returns the canonical form of an IPv4 address, IPv6 address or host name.
///
/// The forms are tried in that order and the first match wins.
///
/// # Examples
///
/// ```
/// use mail_address::hostname::is_legal_host_name_or_ip;
///
/// assert_eq!(is_legal_host_name_or_ip("192.168.1.1").as_deref(), Some("192.168.1.1"));
/// assert_eq!(
///     is_legal_host_name_or_ip("::1").as_deref(),
///     Some("0000:0000:0000:0000:0000:0000:0000:0001")
/// );
/// assert_eq!(is_legal_host_name_or_ip("imap.example.com").as_deref(), Some("imap.example.com"));
/// assert_eq!(is_legal_host_name_or_ip("not a host"), None);
/// ```
#[must_use]
pub fn is_legal_host_name_or_ip(input: &str) -> Option<String> {
    if let Some(ip) = is_legal_ipv4_address(input) {
        tracing::trace!("host is an IPv4 address");
        return Some(ip);
    }
    if let Some(ip) = is_legal_ipv6_address(input) {
        tracing::trace!("host is an IPv6 address");
        return Some(ip);
    }
    let host_name = is_legal_host_name(input);
    if host_name.is_none() {
        tracing::trace!(length = input.len(), "host is neither an IP address nor a host name");
    }
    host_name
}

/// Returns `input` unchanged if it is a dotted-quad IPv4 address.
///
/// Components are decimal without leading zeros. An address whose first
/// component is 0 is rejected.
///
/// # Examples
///
/// ```
/// use mail_address::hostname::is_legal_ipv4_address;
///
/// assert_eq!(is_legal_ipv4_address("192.168.1.1").as_deref(), Some("192.168.1.1"));
/// assert_eq!(is_legal_ipv4_address("256.1.1.1"), None);
/// assert_eq!(is_legal_ipv4_address("0.1.1.1"), None);
/// ```
#[must_use]
pub fn is_legal_ipv4_address(input: &str) -> Option<String> {
    parse_ipv4_octets(input).map(|_| input.to_string())
}

/// Returns the fully expanded form of an IPv6 address.
///
/// Every group is zero-padded to four lowercase hex digits. A trailing
/// embedded IPv4 address is converted to two groups. The unspecified
/// address (all zeros) is rejected.
///
/// # Examples
///
/// ```
/// use mail_address::hostname::is_legal_ipv6_address;
///
/// assert_eq!(
///     is_legal_ipv6_address("2001:DB8::1").as_deref(),
///     Some("2001:0db8:0000:0000:0000:0000:0000:0001")
/// );
/// assert_eq!(
///     is_legal_ipv6_address("::ffff:192.168.1.1").as_deref(),
///     Some("0000:0000:0000:0000:0000:ffff:c0a8:0101")
/// );
/// assert_eq!(is_legal_ipv6_address("::"), None);
/// ```
#[must_use]
pub fn is_legal_ipv6_address(input: &str) -> Option<String> {
    let lower = input.to_ascii_lowercase();
    let mut parts: Vec<&str> = lower.split(':').collect();
    if parts.len() < 3 {
        return None;
    }

    let embedded_ipv4 = parts.last().and_then(|last| parse_ipv4_octets(last));
    if embedded_ipv4.is_some() {
        parts.pop();
    }

    // `None` marks the empty string that `::` leaves behind
    let mut groups = parts
        .iter()
        .map(|part| {
            if part.is_empty() {
                Some(None)
            } else {
                parse_hex_group(part).map(Some)
            }
        })
        .collect::<Option<Vec<Option<u16>>>>()?;

    if let Some([a, b, c, d]) = embedded_ipv4 {
        groups.push(Some(u16::from_be_bytes([a, b])));
        groups.push(Some(u16::from_be_bytes([c, d])));
    }

    // A leading or trailing `::` splits into two empty strings
    if groups.first() == Some(&None) {
        if groups.get(1) != Some(&None) {
            return None;
        }
        groups.remove(0);
    }
    if groups.last() == Some(&None) {
        if groups.len() < 2 || groups[groups.len() - 2].is_some() {
            return None;
        }
        groups.pop();
    }

    let expanded = expand_elision(&groups)?;
    if expanded.iter().all(|&group| group == 0) {
        return None;
    }

    Some(
        expanded
            .iter()
            .map(|group| format!("{group:04x}"))
            .collect::<Vec<_>>()
            .join(":"),
    )
}

/// Returns `input` unchanged if it is a legal RFC 952/1123 host name.
///
/// A single trailing dot (the root label) is allowed.
///
/// # Examples
///
/// ```
/// use mail_address::hostname::is_legal_host_name;
///
/// assert_eq!(is_legal_host_name("example.com.").as_deref(), Some("example.com."));
/// assert_eq!(is_legal_host_name("-example.com"), None);
/// ```
#[must_use]
pub fn is_legal_host_name(input: &str) -> Option<String> {
    if input.len() > MAX_HOST_NAME_LENGTH {
        return None;
    }

    let name = input.strip_suffix('.').unwrap_or(input);
    if name.split('.').all(is_ldh_label) {
        Some(input.to_string())
    } else {
        None
    }
}

/// Removes surrounding whitespace from user-entered host names.
#[must_use]
pub fn clean_up_host_name(input: &str) -> String {
    input.trim().to_string()
}

fn parse_ipv4_octets(input: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = input.split('.');
    for octet in &mut octets {
        *octet = parse_ipv4_component(parts.next()?)?;
    }
    if parts.next().is_some() || octets[0] == 0 {
        return None;
    }
    Some(octets)
}

/// Parses `0 | [1-9][0-9]{0,2}` with a value of at most 255.
fn parse_ipv4_component(part: &str) -> Option<u8> {
    let well_formed = match part.as_bytes() {
        [b'0'] => true,
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.len() <= 2 && rest.iter().all(u8::is_ascii_digit)
        }
        [] => false,
    };
    if !well_formed {
        return None;
    }
    part.parse().ok()
}

fn parse_hex_group(part: &str) -> Option<u16> {
    if part.len() > 4 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(part, 16).ok()
}

/// Replaces the single elision marker with as many zero groups as needed.
fn expand_elision(groups: &[Option<u16>]) -> Option<[u16; IPV6_GROUPS]> {
    let elisions = groups.iter().filter(|group| group.is_none()).count();
    let explicit = groups.len() - elisions;

    let zeros = match elisions {
        0 if explicit == IPV6_GROUPS => 0,
        // `::` stands for at least one group
        1 if explicit < IPV6_GROUPS => IPV6_GROUPS - explicit,
        _ => return None,
    };

    let mut expanded = [0u16; IPV6_GROUPS];
    let mut index = 0;
    for group in groups {
        match group {
            Some(value) => {
                expanded[index] = *value;
                index += 1;
            }
            None => index += zeros,
        }
    }
    Some(expanded)
}

fn is_ldh_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_DNS_LABEL_LENGTH
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}
