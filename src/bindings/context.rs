//! Generic contextual features, injected into extractors as a capability.

use crate::tree::{NodeId, SyntaxTree};

/// Source of syntactic context labels for an arbitrary node.
///
/// Implementations must not emit labels in the `nArgs:` or `inName:`
/// namespaces, which belong to the method-invocation extractor.
pub trait ContextualFeatures {
    fn contextual_features(&self, tree: &SyntaxTree, node: NodeId) -> Vec<String>;
}

impl<F> ContextualFeatures for F
where
    F: Fn(&SyntaxTree, NodeId) -> Vec<String>,
{
    fn contextual_features(&self, tree: &SyntaxTree, node: NodeId) -> Vec<String> {
        self(tree, node)
    }
}

/// Grammar types of the node, its parent and grandparent, plus the enclosing
/// statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstContextFeatures;

fn is_statement(ast_type: &str) -> bool {
    ast_type.ends_with("_statement")
        || ast_type == "local_variable_declaration"
        || ast_type == "field_declaration"
}

impl ContextualFeatures for AstContextFeatures {
    fn contextual_features(&self, tree: &SyntaxTree, node: NodeId) -> Vec<String> {
        let Some(current) = tree.get(node) else {
            return Vec::new();
        };
        let mut features = vec![format!("astType:{}", current.ast_type)];

        let mut ancestors = tree.ancestors(node);
        if let Some(parent) = ancestors.next() {
            features.push(format!("parentAstType:{}", tree.node(parent).ast_type));
        }
        if let Some(grandparent) = ancestors.next() {
            features.push(format!("grandparentAstType:{}", tree.node(grandparent).ast_type));
        }

        if let Some(stmt) = tree.ancestors(node).find(|&id| is_statement(&tree.node(id).ast_type)) {
            features.push(format!("stmt:{}", tree.node(stmt).ast_type));
        }
        features
    }
}
