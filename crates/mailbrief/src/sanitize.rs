//! Text sanitizing helpers.
//!
//! [`sanitize_text`] makes email content safe for the remote analyzer, whose
//! transport rejects non-ASCII payloads. The redaction helpers keep sender
//! addresses and oversized error bodies out of tracing span attributes.

/// Maximum length for error bodies echoed into logs and error messages.
const MAX_LOGGED_BODY_LENGTH: usize = 200;

/// Reduces text to single-spaced ASCII.
///
/// Typographic punctuation is folded to its ASCII look-alike first (curly
/// quotes, en/em dashes, ellipsis); every other non-ASCII code point becomes a
/// space. Whitespace runs collapse to one space and the result is trimmed.
/// Applying it twice yields the same output as applying it once.
pub fn sanitize_text(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' => folded.push('\''),
            '\u{201C}' | '\u{201D}' => folded.push('"'),
            '\u{2013}' | '\u{2014}' => folded.push('-'),
            '\u{2026}' => folded.push_str("..."),
            c if c.is_ascii() => folded.push(c),
            _ => folded.push(' '),
        }
    }

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Masks the local part of an email address for span fields.
///
/// - `sarah.johnson@techcorp.com` → `s***@techcorp.com`
/// - `not-an-address` → `***`
pub fn redact_email(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

/// Truncates a response body so error messages stay readable.
pub fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(MAX_LOGGED_BODY_LENGTH) {
        Some((cut, _)) => format!("{}... (truncated)", &body[..cut]),
        None => body.to_string(),
    }
}
