//! Client directive detection
//!
//! A component opts into hydration with a `"use client"` directive. The check
//! is structural: the marker must be part of the module's directive prologue
//! (the run of string-literal expression statements at the very top of the
//! file). Mentions in comments, in other strings, or after the first real
//! statement do not count.

use super::scan::{is_ident_byte, line_end, skip_trivia, string_end};

/// The hydration marker
pub const CLIENT_DIRECTIVE: &str = "use client";

/// Raw text of every directive in the module prologue, in order.
///
/// Directive text is compared unescaped-as-written, matching how JavaScript
/// engines recognize `"use strict"`.
pub fn directive_prologue(source: &str) -> Vec<&str> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let bytes = source.as_bytes();
    let mut pos = 0;

    if source.starts_with("#!") {
        pos = line_end(bytes, 0);
    }

    let mut directives = Vec::new();
    loop {
        let (next, _) = skip_trivia(bytes, pos);
        pos = next;

        let Some(&quote) = bytes.get(pos) else { break };
        if quote != b'"' && quote != b'\'' {
            break;
        }
        let Some(end) = string_end(bytes, pos) else {
            break;
        };
        let text = &source[pos + 1..end];

        let (after, newline) = skip_trivia(bytes, end + 1);
        match bytes.get(after) {
            None => {
                directives.push(text);
                break;
            }
            Some(b';') => {
                directives.push(text);
                pos = after + 1;
            }
            Some(_) if newline && !continues_expression(bytes, after) => {
                directives.push(text);
                pos = after;
            }
            // `"use client".length`, `"a" + b`: an expression, not a directive
            Some(_) => break,
        }
    }

    directives
}

/// Whether the module is marked for client-side hydration
pub fn has_client_directive(source: &str) -> bool {
    directive_prologue(source)
        .iter()
        .any(|d| *d == CLIENT_DIRECTIVE)
}

/// Whether the token at `pos` would continue the preceding string expression
/// across a line break (so no semicolon is inserted).
fn continues_expression(bytes: &[u8], pos: usize) -> bool {
    match bytes[pos] {
        b'(' | b'[' | b'.' | b'+' | b'-' | b'*' | b'/' | b'%' | b',' | b'?' | b'=' | b'<'
        | b'>' | b'&' | b'|' | b'^' | b'`' => true,
        b'!' => bytes.get(pos + 1) == Some(&b'='),
        b'i' => starts_with_keyword(bytes, pos, b"in") || starts_with_keyword(bytes, pos, b"instanceof"),
        _ => false,
    }
}

fn starts_with_keyword(bytes: &[u8], pos: usize, keyword: &[u8]) -> bool {
    bytes[pos..].starts_with(keyword)
        && bytes
            .get(pos + keyword.len())
            .map_or(true, |b| !is_ident_byte(*b))
}
