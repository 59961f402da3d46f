//! RFC 5545 text handling: value escaping and content-line folding.

/// Longest content line allowed before folding, in octets (line break excluded).
pub const MAX_LINE_OCTETS: usize = 75;

pub const CRLF: &str = "\r\n";

const FOLD_BREAK: &str = "\r\n ";

/// Escape a TEXT value so it stays on one logical line.
///
/// Commas become `\,` and every line break (LF, CRLF or a lone CR) becomes the
/// two characters `\n`.
pub fn escape_text(value: &str) -> String {
    escape(value, true)
}

/// Escape line breaks only, for list values where a comma separates entries.
pub fn escape_line_breaks(value: &str) -> String {
    escape(value, false)
}

fn escape(value: &str, commas: bool) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ',' if commas => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            c => escaped.push(c),
        }
    }

    escaped
}

/// Fold a content line to at most 75 octets per physical line.
///
/// The first segment keeps up to 75 octets; every continuation starts with CRLF and a
/// single space followed by up to 74 octets. A segment is cut short rather than
/// splitting a multi-byte character.
pub fn fold(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + (line.len() / (MAX_LINE_OCTETS - 1) + 1) * 3);
    let (first, mut rest) = line.split_at(boundary_at_most(line, MAX_LINE_OCTETS));
    folded.push_str(first);

    while !rest.is_empty() {
        let (chunk, remaining) = rest.split_at(boundary_at_most(rest, MAX_LINE_OCTETS - 1));
        folded.push_str(FOLD_BREAK);
        folded.push_str(chunk);
        rest = remaining;
    }

    folded
}

/// Undo [`fold`]: drop every CRLF that is immediately followed by one space.
pub fn unfold(text: &str) -> String {
    text.replace(FOLD_BREAK, "")
}

/// Largest char boundary in `s` that is `<= limit`.
fn boundary_at_most(s: &str, limit: usize) -> usize {
    if s.len() <= limit {
        return s.len();
    }
    let mut idx = limit;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
