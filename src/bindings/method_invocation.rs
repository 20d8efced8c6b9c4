//! Method-invocation bindings.
//!
//! Syntax alone cannot tell which declaration a call resolves to (overloads,
//! overrides, unrelated receivers), so same-named calls are never merged:
//! every invocation is its own binding.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::context::{AstContextFeatures, ContextualFeatures};
use super::{BindingGroup, FeatureSet, NameBindingsExtractor};
use crate::error::{BindingError, Result};
use crate::tokenize_identifier;
use crate::tree::{NodeId, NodeKind, SyntaxTree};

// ─── Occurrence collection ───────────────────────────────────────────

/// Map every invocation name text in the subtree to the name nodes bearing
/// it. One pass, every node visited once.
pub fn collect_invocation_names(tree: &SyntaxTree, root: NodeId) -> HashMap<String, Vec<NodeId>> {
    let mut positions: HashMap<String, Vec<NodeId>> = HashMap::new();
    for id in tree.descendants(root) {
        if let NodeKind::MethodInvocation { name, .. } = tree.node(id).kind {
            let text = tree.text(name).unwrap_or_default().to_string();
            positions.entry(text).or_default().push(name);
        }
    }
    positions
}

/// One singleton group per occurrence. The by-text keys are ignored.
pub fn singleton_groups(positions: HashMap<String, Vec<NodeId>>) -> BTreeSet<BindingGroup> {
    positions
        .into_values()
        .flatten()
        .map(BindingGroup::singleton)
        .collect()
}

// ─── Implementor vocabulary ──────────────────────────────────────────

/// Word parts of the name of the nearest enclosing method or type
/// declaration, whichever is reached first walking up from `invocation`.
pub fn implementor_vocabulary(tree: &SyntaxTree, invocation: NodeId) -> Vec<String> {
    tree.ancestors(invocation)
        .find_map(|id| match tree.node(id).kind {
            NodeKind::MethodDeclaration { name } | NodeKind::TypeDeclaration { name } => Some(name),
            _ => None,
        })
        .and_then(|name| tree.text(name))
        .map(tokenize_identifier)
        .unwrap_or_default()
}

// ─── Extractor ───────────────────────────────────────────────────────

pub struct MethodInvocationBindings<C = AstContextFeatures> {
    context: C,
}

impl MethodInvocationBindings {
    pub fn new() -> Self {
        Self { context: AstContextFeatures }
    }
}

impl Default for MethodInvocationBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ContextualFeatures> MethodInvocationBindings<C> {
    pub fn with_context(context: C) -> Self {
        Self { context }
    }
}

impl<C: ContextualFeatures> NameBindingsExtractor for MethodInvocationBindings<C> {
    fn name_bindings(&self, tree: &SyntaxTree, root: NodeId) -> BTreeSet<BindingGroup> {
        let groups = singleton_groups(collect_invocation_names(tree, root));
        debug!(root = %root, bindings = groups.len(), "Collected method invocation bindings");
        groups
    }

    fn features(&self, tree: &SyntaxTree, group: &BindingGroup) -> Result<FeatureSet> {
        let member = match (group.len(), group.first()) {
            (1, Some(member)) => member,
            (actual, _) => return Err(BindingError::GroupSize { actual }),
        };
        let parent = tree.parent(member).and_then(|p| tree.get(p).map(|n| (p, n)));
        let (invocation, arg_count) = match parent {
            Some((id, node)) => match &node.kind {
                NodeKind::MethodInvocation { arguments, .. } => (id, arguments.len()),
                _ => {
                    return Err(BindingError::NotAnInvocation {
                        node: member,
                        ast_type: node.ast_type.clone(),
                    });
                }
            },
            None => {
                return Err(BindingError::NotAnInvocation {
                    node: member,
                    ast_type: "<none>".to_string(),
                });
            }
        };

        let mut features = FeatureSet::new();
        features.insert(format!("nArgs:{}", arg_count));
        for word in implementor_vocabulary(tree, invocation) {
            features.insert(format!("inName:{}", word));
        }
        features.extend(self.context.contextual_features(tree, invocation));
        Ok(features)
    }
}

#[cfg(test)]
#[path = "method_invocation_tests.rs"]
mod tests;
