//! Export name extraction
//!
//! Lists the runtime names a component module exports so the manifest can
//! tell the SSR runtime what the bundle provides. Type-only exports are
//! skipped.

use super::scan::{tokens, Token};

/// Exported names in order of first appearance, without duplicates.
pub fn exported_names(source: &str) -> Vec<String> {
    let toks = tokens(source);
    let mut names: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    };

    let mut i = 0;
    while i < toks.len() {
        let is_export = toks[i] == Token::Ident("export")
            && (i == 0 || toks[i - 1] != Token::Punct(b'.'));
        if !is_export {
            i += 1;
            continue;
        }

        i += 1;
        match toks.get(i) {
            Some(Token::Ident("default")) => push("default"),
            Some(Token::Ident("async" | "abstract")) => {
                if let Some(name) = declared_name(&toks, i + 1) {
                    push(name);
                }
            }
            Some(Token::Ident("function" | "class")) => {
                if let Some(name) = declared_name(&toks, i) {
                    push(name);
                }
            }
            Some(Token::Ident("const" | "let" | "var" | "enum")) => {
                if let Some(&Token::Ident(name)) = toks.get(i + 1) {
                    push(name);
                }
            }
            Some(Token::Punct(b'{')) => {
                i = export_list(&toks, i + 1, &mut push);
            }
            Some(Token::Punct(b'*')) => {
                if let (Some(Token::Ident("as")), Some(&Token::Ident(name))) =
                    (toks.get(i + 1), toks.get(i + 2))
                {
                    push(name);
                }
            }
            // export type / interface / declare: compile-time only
            _ => {}
        }
    }

    names
}

/// Name after `function`/`class` at `pos`, skipping a generator `*`
fn declared_name<'a>(toks: &[Token<'a>], pos: usize) -> Option<&'a str> {
    match toks.get(pos)? {
        Token::Ident("function" | "class") => {}
        _ => return None,
    }
    let mut next = pos + 1;
    if toks.get(next) == Some(&Token::Punct(b'*')) {
        next += 1;
    }
    match *toks.get(next)? {
        Token::Ident(name) if name != "extends" && name != "implements" => Some(name),
        _ => None,
    }
}

/// Parse `a, b as c, type T }` starting after `{`; returns the index after `}`
fn export_list(toks: &[Token<'_>], mut pos: usize, push: &mut impl FnMut(&str)) -> usize {
    let mut item: Vec<&str> = Vec::new();

    while let Some(&tok) = toks.get(pos) {
        pos += 1;
        match tok {
            Token::Punct(b'}') => {
                flush_item(&mut item, push);
                return pos;
            }
            Token::Punct(b',') => flush_item(&mut item, push),
            Token::Ident(word) => item.push(word),
            Token::Punct(_) => {}
        }
    }
    pos
}

fn flush_item(item: &mut Vec<&str>, push: &mut impl FnMut(&str)) {
    match item.as_slice() {
        ["type", _, ..] => {}
        [.., "as", alias] => push(*alias),
        [name] => push(*name),
        _ => {}
    }
    item.clear();
}
