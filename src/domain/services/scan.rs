//! Minimal JavaScript/TypeScript source scanning
//!
//! Just enough lexing to reason about module structure without a parser:
//! skipping comments, whitespace and string/template literals, and splitting
//! the remainder into identifiers and punctuation.

/// Skip whitespace and comments starting at `pos`.
///
/// Returns the position of the next significant byte and whether a line
/// terminator was crossed on the way.
pub(crate) fn skip_trivia(bytes: &[u8], mut pos: usize) -> (usize, bool) {
    let mut newline = false;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' | b'\r' => {
                newline = true;
                pos += 1;
            }
            b' ' | b'\t' | 0x0B | 0x0C => pos += 1,
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                pos = line_end(bytes, pos);
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                let body_start = pos + 2;
                match find(bytes, body_start, b"*/") {
                    Some(end) => {
                        if bytes[body_start..end].iter().any(|b| *b == b'\n' || *b == b'\r') {
                            newline = true;
                        }
                        pos = end + 2;
                    }
                    None => return (bytes.len(), newline),
                }
            }
            // NBSP and other multi-byte spaces
            0xC2 if bytes.get(pos + 1) == Some(&0xA0) => pos += 2,
            _ => break,
        }
    }
    (pos, newline)
}

/// Index of the first line terminator at or after `pos` (or end of input)
pub(crate) fn line_end(bytes: &[u8], pos: usize) -> usize {
    bytes[pos..]
        .iter()
        .position(|b| *b == b'\n' || *b == b'\r')
        .map(|i| pos + i)
        .unwrap_or(bytes.len())
}

/// Index of the closing quote of the string literal opening at `start`.
///
/// Returns `None` for unterminated literals or ones broken by a raw newline.
pub(crate) fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' | b'\r' => return None,
            c if c == quote => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Index just past the template literal opening at `start`
fn template_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return i + 1,
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                let mut depth = 1;
                i += 2;
                while i < bytes.len() && depth > 0 {
                    match bytes[i] {
                        b'{' => depth += 1,
                        b'}' => depth -= 1,
                        b'\'' | b'"' => {
                            i = string_end(bytes, i).unwrap_or(i);
                        }
                        b'`' => {
                            i = template_end(bytes, i) - 1;
                        }
                        _ => {}
                    }
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
    bytes.len()
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from > bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| from + i)
}

pub(crate) fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

/// Significant token of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Ident(&'a str),
    Punct(u8),
}

/// Split `source` into identifiers and punctuation, dropping comments,
/// whitespace and string/template literal contents.
pub(crate) fn tokens(source: &str) -> Vec<Token<'_>> {
    let bytes = source.as_bytes();
    let mut out = Vec::new();
    let mut pos = 0;

    loop {
        let (next, _) = skip_trivia(bytes, pos);
        pos = next;
        let Some(&b) = bytes.get(pos) else { break };

        match b {
            b'\'' | b'"' => {
                pos = string_end(bytes, pos).map(|end| end + 1).unwrap_or_else(|| line_end(bytes, pos));
            }
            b'`' => pos = template_end(bytes, pos),
            _ if is_ident_byte(b) => {
                let start = pos;
                while pos < bytes.len() && is_ident_byte(bytes[pos]) {
                    pos += 1;
                }
                out.push(Token::Ident(&source[start..pos]));
            }
            _ => {
                out.push(Token::Punct(b));
                pos += 1;
            }
        }
    }

    out
}
