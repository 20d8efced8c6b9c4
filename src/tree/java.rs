//! Java front-end: converts a tree-sitter-java parse into an arena [`SyntaxTree`].

use std::collections::HashMap;

use tracing::debug;
use tree_sitter::Node;

use super::{NodeId, NodeKind, Span, SyntaxTree};
use crate::error::{BindingError, Result};

/// Identifier leaves whose text is kept in the arena.
const NAME_TYPES: &[&str] = &["identifier", "type_identifier"];

/// Parser wrapper. Not `Sync`: give each worker thread its own instance.
pub struct JavaFrontend {
    parser: tree_sitter::Parser,
}

impl JavaFrontend {
    pub fn new() -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&tree_sitter_java::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<SyntaxTree> {
        self.parse_named(source, "<input>")
    }

    /// Parse `source`, using `path` only for error messages.
    ///
    /// Syntax errors do not fail the parse: tree-sitter recovers and the
    /// `ERROR` nodes end up as [`NodeKind::Other`].
    pub fn parse_named(&mut self, source: &str, path: &str) -> Result<SyntaxTree> {
        let ts_tree = self.parser.parse(source, None).ok_or_else(|| BindingError::Parse {
            path: path.to_string(),
        })?;
        let tree = convert(ts_tree.root_node(), source.as_bytes());
        debug!(path, nodes = tree.len(), "Converted Java syntax tree");
        Ok(tree)
    }
}

// ─── Conversion ──────────────────────────────────────────────────────

fn span_of(node: Node) -> Span {
    let pos = node.start_position();
    Span {
        line: pos.row as u32 + 1,
        column: pos.column as u32 + 1,
    }
}

fn convert(root: Node, source: &[u8]) -> SyntaxTree {
    let mut tree = SyntaxTree::new(root.kind());
    let mut ids: HashMap<usize, NodeId> = HashMap::new();
    ids.insert(root.id(), tree.root());

    // Declarations and invocations reference their own children, so their
    // kinds are assigned after the whole tree exists.
    let mut pending: Vec<(NodeId, Node)> = Vec::new();

    let mut stack = vec![(root, tree.root())];
    while let Some((ts_node, id)) = stack.pop() {
        let mut cursor = ts_node.walk();
        let children: Vec<Node> = ts_node.named_children(&mut cursor).collect();
        for child in children {
            let span = span_of(child);
            let child_id = if NAME_TYPES.contains(&child.kind()) {
                let text = child.utf8_text(source).unwrap_or_default();
                tree.add_name(id, child.kind(), text, span)
            } else {
                tree.add_child(id, child.kind(), span)
            };
            ids.insert(child.id(), child_id);
            if is_structural(child.kind()) {
                pending.push((child_id, child));
            }
            stack.push((child, child_id));
        }
    }

    for (id, ts_node) in pending {
        if let Some(kind) = structural_kind(ts_node, &ids) {
            tree.set_kind(id, kind);
        }
    }
    tree
}

fn is_structural(ast_type: &str) -> bool {
    matches!(
        ast_type,
        "method_invocation"
            | "method_declaration"
            | "constructor_declaration"
            | "class_declaration"
            | "interface_declaration"
    )
}

/// `None` leaves the node as [`NodeKind::Other`]: missing name after error
/// recovery, or a `super.m()` / `Outer.super.m()` call.
fn structural_kind(node: Node, ids: &HashMap<usize, NodeId>) -> Option<NodeKind> {
    let name = ids.get(&node.child_by_field_name("name")?.id()).copied()?;
    match node.kind() {
        "method_invocation" => {
            // Super-method invocations dispatch statically. The qualified form
            // keeps `Outer` in `object` and `super` as a sibling child.
            if is_super_invocation(node) {
                return None;
            }
            let arguments = node
                .child_by_field_name("arguments")
                .map(|args| {
                    let mut cursor = args.walk();
                    args.named_children(&mut cursor)
                        .filter(|a| !a.is_extra())
                        .filter_map(|a| ids.get(&a.id()).copied())
                        .collect()
                })
                .unwrap_or_default();
            Some(NodeKind::MethodInvocation { name, arguments })
        }
        "method_declaration" | "constructor_declaration" => Some(NodeKind::MethodDeclaration { name }),
        "class_declaration" | "interface_declaration" => Some(NodeKind::TypeDeclaration { name }),
        _ => None,
    }
}

fn is_super_invocation(node: Node) -> bool {
    let mut cursor = node.walk();
    let direct = node.children(&mut cursor).any(|c| c.kind() == "super");
    direct || node.child_by_field_name("object").is_some_and(|o| o.kind() == "super")
}

#[cfg(test)]
#[path = "java_tests.rs"]
mod tests;
