//! Template AST: declarations, nested blocks, bare at-rule statements.

/// One node of a parsed style template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `property: value`, both trimmed and whitespace-collapsed.
    Declaration { property: String, value: String },
    /// `prelude { children }`, where the prelude is a selector list or an
    /// at-rule such as `@media (max-width: 600px)`.
    Block { prelude: String, children: Vec<Node> },
    /// A block-less at-rule such as `@import url(x.css)`.
    Statement(String),
}

impl Node {
    /// Create a declaration node.
    pub fn declaration(property: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Declaration {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Create a block node.
    pub fn block(prelude: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Block {
            prelude: prelude.into(),
            children,
        }
    }
}

/// Kind of block an at-rule prelude opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtRuleKind {
    /// Conditional group (`@media`, `@supports`, `@container`, `@layer`):
    /// contents are scoped to the enclosing selector.
    Conditional,
    /// Rule whose body is not selector-scoped (`@keyframes`, `@font-face`,
    /// `@page`, `@property`, `@counter-style`).
    Verbatim,
}

impl AtRuleKind {
    /// Classify an at-rule prelude. Returns `None` if it is not an at-rule.
    pub fn of(prelude: &str) -> Option<Self> {
        let name = prelude.strip_prefix('@')?;
        let name: String = name
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let bare = name
            .strip_prefix("-webkit-")
            .or_else(|| name.strip_prefix("-moz-"))
            .unwrap_or(&name);
        Some(match bare {
            "keyframes" | "font-face" | "page" | "property" | "counter-style" => {
                AtRuleKind::Verbatim
            }
            _ => AtRuleKind::Conditional,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(
            Node::declaration("color", "red"),
            Node::Declaration {
                property: "color".into(),
                value: "red".into()
            }
        );
        let block = Node::block("&:hover", vec![Node::declaration("a", "b")]);
        assert!(matches!(block, Node::Block { ref children, .. } if children.len() == 1));
    }

    #[test]
    fn classify_at_rules() {
        assert_eq!(AtRuleKind::of("@media (min-width: 1px)"), Some(AtRuleKind::Conditional));
        assert_eq!(AtRuleKind::of("@supports (display: grid)"), Some(AtRuleKind::Conditional));
        assert_eq!(AtRuleKind::of("@keyframes spin"), Some(AtRuleKind::Verbatim));
        assert_eq!(AtRuleKind::of("@-webkit-keyframes spin"), Some(AtRuleKind::Verbatim));
        assert_eq!(AtRuleKind::of("@font-face"), Some(AtRuleKind::Verbatim));
        assert_eq!(AtRuleKind::of("&:hover"), None);
    }
}
