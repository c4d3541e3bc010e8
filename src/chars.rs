//! Character classes from RFC 5321 and RFC 5322.
//!
//! ```abnf
//! ALPHA      = %x41-5A / %x61-7A
//! DIGIT      = %x30-39
//! Let-dig    = ALPHA / DIGIT
//! atext      = ALPHA / DIGIT / "!" / "#" / "$" / "%" / "&" / "'" / "*" /
//!              "+" / "-" / "/" / "=" / "?" / "^" / "_" / "`" / "{" /
//!              "|" / "}" / "~"
//! qtextSMTP  = %d32-33 / %d35-91 / %d93-126
//! quoted-pair = %d92 %d32-126
//! Dot-string = Atom *("." Atom)
//! ```

/// Full stop, the separator of atoms and DNS labels.
pub(crate) const DOT: char = '.';

/// Separator between local part and domain.
pub(crate) const AT: char = '@';

/// Delimiter of a quoted local part.
pub(crate) const DQUOTE: char = '"';

/// Escape character inside a quoted string.
pub(crate) const BACKSLASH: char = '\\';

/// Hyphen, allowed inside but not at the edges of a DNS label.
pub(crate) const HYPHEN: char = '-';

/// Opening bracket of an address literal.
pub(crate) const LEFT_BRACKET: char = '[';

/// Returns true for `ALPHA`.
#[must_use]
pub const fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true for `DIGIT`.
#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for `Let-dig`.
#[must_use]
pub const fn is_let_dig(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Returns true for `atext`, the characters of an unquoted atom.
#[must_use]
pub const fn is_atext(c: char) -> bool {
    is_let_dig(c)
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

/// Returns true for `qtextSMTP`: printable ASCII except `"` and `\`.
#[must_use]
pub const fn is_qtext(c: char) -> bool {
    matches!(c as u32, 32..=33 | 35..=91 | 93..=126)
}

/// Returns true for a character that may follow a backslash in a quoted string.
#[must_use]
pub const fn is_quoted_char(c: char) -> bool {
    matches!(c as u32, 32..=126)
}

/// Returns true if `s` is a well-formed `Dot-string`.
///
/// Such a local part can be written without quoting.
#[must_use]
pub fn is_dot_string(s: &str) -> bool {
    if s.is_empty() || s.starts_with(DOT) || s.ends_with(DOT) || s.contains("..") {
        return false;
    }

    s.chars().all(|c| c == DOT || is_atext(c))
}
