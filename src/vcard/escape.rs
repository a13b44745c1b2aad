//! Escaping for values and `TYPE` parameters of a 3.0 card.

/// Escapes a CSV cell for use as a value, or as one `;`/`,` separated
/// component of `N`, `ADR`, `ORG` or `CATEGORIES`.
///
/// A multi-line cell keeps its line breaks as `\n`, whether the export used
/// LF or CRLF.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {}
            _ => result.push(c),
        }
    }

    result
}

/// Cleans a slot type such as `Mobile` or `Home, Work` for `;TYPE=`.
///
/// 3.0 has no escape for `"` inside a parameter, so quotes and control
/// characters are removed. The flag is set when the value holds `:`, `;` or
/// `,` and must be written quoted.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '"' => {}
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            _ if c.is_control() => {}
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}
