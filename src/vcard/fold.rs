//! Wrapping of long card lines.

/// Octets allowed on one physical line, not counting CRLF. Continuation
/// lines spend one of them on the leading space.
const MAX_LINE_OCTETS: usize = 75;

/// Wraps `line` so no physical line exceeds [`MAX_LINE_OCTETS`].
///
/// Breaks fall between characters, so a long note in Cyrillic or CJK is
/// never cut inside a multi-byte sequence. The caller adds the final CRLF.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > MAX_LINE_OCTETS {
            result.push_str("\r\n ");
            current_len = 1;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}
