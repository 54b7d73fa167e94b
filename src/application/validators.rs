/// Returns the value only when it was supplied and is not the empty string.
///
/// Whitespace-only strings count as supplied.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Minimal `local@domain.tld` shape check, not an RFC 5322 validator.
///
/// Rules:
/// - exactly one `@`, with a non-empty local part before it
/// - no whitespace anywhere, using the ECMAScript `\s` set (see `is_form_whitespace`)
/// - the domain contains a `.` with at least one character on each side
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.chars().any(is_form_whitespace) {
        return false;
    }

    if domain.chars().any(|c| is_form_whitespace(c) || c == '@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Whitespace as the browser form's `\s` class defines it. Differs from
/// `char::is_whitespace`: includes U+FEFF, excludes U+0085.
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
