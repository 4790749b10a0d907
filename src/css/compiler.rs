//! Template compiler: nested template tree to flat, scoped, minified CSS.
//!
//! Output follows the stylis conventions: a block's own declarations come out
//! as one rule ahead of its nested rules, `&` stands for the parent selector,
//! nested selectors without `&` become descendants, and conditional at-rules
//! wrap the scoped rules they contain.

use crate::css::model::{AtRuleKind, Node};
use crate::css::parser::{collapse_whitespace, parse_template, CompileError};

/// Compile `template` into CSS scoped under the selector `scope`
/// (for example `.root_abc`).
pub fn compile(scope: &str, template: &str) -> Result<String, CompileError> {
    let nodes = parse_template(template)?;
    let mut out = String::new();
    emit_scoped(&[scope.to_owned()], &nodes, &mut out);
    Ok(out)
}

/// Compile `template` without a scope: nested selectors are used as written
/// and top-level declarations, having no selector to attach to, are dropped.
pub fn compile_global(template: &str) -> Result<String, CompileError> {
    let nodes = parse_template(template)?;
    let mut out = String::new();
    emit_scoped(&[], &nodes, &mut out);
    Ok(out)
}

fn emit_scoped(parents: &[String], nodes: &[Node], out: &mut String) {
    for node in nodes {
        if let Node::Statement(text) = node {
            out.push_str(text);
            out.push(';');
        }
    }

    let declarations = declarations_of(nodes);
    if !declarations.is_empty() {
        if parents.is_empty() {
            tracing::trace!("dropping declarations without a selector");
        } else {
            out.push_str(&parents.join(","));
            out.push('{');
            out.push_str(&declarations);
            out.push('}');
        }
    }

    for node in nodes {
        let Node::Block { prelude, children } = node else {
            continue;
        };
        match AtRuleKind::of(prelude) {
            Some(AtRuleKind::Conditional) => {
                let mut inner = String::new();
                emit_scoped(parents, children, &mut inner);
                if !inner.is_empty() {
                    out.push_str(prelude);
                    out.push('{');
                    out.push_str(&inner);
                    out.push('}');
                }
            }
            Some(AtRuleKind::Verbatim) => emit_verbatim(prelude, children, out),
            None => emit_scoped(&resolve_selectors(parents, prelude), children, out),
        }
    }
}

/// Emit a block as written, with nested blocks kept inside it.
fn emit_verbatim(prelude: &str, children: &[Node], out: &mut String) {
    out.push_str(prelude);
    out.push('{');
    out.push_str(&declarations_of(children));
    for child in children {
        if let Node::Block { prelude, children } = child {
            emit_verbatim(prelude, children, out);
        }
    }
    out.push('}');
}

fn declarations_of(nodes: &[Node]) -> String {
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Declaration { property, value } => Some(format!("{property}:{value};")),
            _ => None,
        })
        .collect()
}

/// Combine the parent selector list with a nested selector list.
fn resolve_selectors(parents: &[String], prelude: &str) -> Vec<String> {
    let parts: Vec<String> = split_top_level(prelude, ',')
        .into_iter()
        .map(|part| normalize_selector(&part))
        .filter(|part| !part.is_empty())
        .collect();

    if parents.is_empty() {
        return parts
            .iter()
            .map(|part| {
                substitute_parent(part, "")
                    .unwrap_or_else(|| part.clone())
                    .trim()
                    .to_owned()
            })
            .collect();
    }

    let mut resolved = Vec::with_capacity(parents.len() * parts.len());
    for parent in parents {
        for part in &parts {
            match substitute_parent(part, parent) {
                Some(selector) => resolved.push(selector),
                None => resolved.push(format!("{parent} {part}")),
            }
        }
    }
    resolved
}

/// Replace every `&` outside quotes with `parent`. `None` when the selector
/// has no such `&`.
fn substitute_parent(selector: &str, parent: &str) -> Option<String> {
    let mut out = String::with_capacity(selector.len() + parent.len());
    let mut quote: Option<char> = None;
    let mut found = false;

    for ch in selector.chars() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
                out.push(ch);
            }
            None if ch == '&' => {
                found = true;
                out.push_str(parent);
            }
            None => {
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                }
                out.push(ch);
            }
        }
    }
    found.then_some(out)
}

/// Split on `separator` where it is not inside parentheses, brackets or quotes.
fn split_top_level(input: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in input.chars() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => quote = Some(ch),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    parts.push(current);
    parts
}

/// Collapse whitespace and remove it around the `>`, `+` and `~` combinators.
fn normalize_selector(selector: &str) -> String {
    let collapsed = collapse_whitespace(selector);
    let mut out = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '>' | '+' | '~' => {
                if out.ends_with(' ') {
                    out.pop();
                }
                out.push(ch);
                if chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            _ => out.push(ch),
        }
    }
    out
}
