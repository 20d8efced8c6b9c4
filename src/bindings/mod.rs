//! Name-binding extraction: group occurrences into bindings, then featurize
//! each binding.

mod context;
mod method_invocation;

pub use context::{AstContextFeatures, ContextualFeatures};
pub use method_invocation::{
    collect_invocation_names, implementor_vocabulary, singleton_groups, MethodInvocationBindings,
};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tree::{NodeId, Span, SyntaxTree};

// ─── Core types ──────────────────────────────────────────────────────

/// Nodes considered "the same binding". Membership is by node id, never by
/// text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BindingGroup {
    members: BTreeSet<NodeId>,
}

impl BindingGroup {
    pub fn singleton(node: NodeId) -> Self {
        Self { members: BTreeSet::from([node]) }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members.iter().copied()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.members.first().copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }
}

impl FromIterator<NodeId> for BindingGroup {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self { members: iter.into_iter().collect() }
    }
}

/// Deduplicated bag of feature labels. Ordering is deterministic but
/// meaningless.
pub type FeatureSet = BTreeSet<String>;

/// One featurized binding, ready to be serialized by a consumer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BindingRecord {
    pub members: Vec<NodeId>,
    /// Text of the first member
    pub name: String,
    pub span: Span,
    pub features: FeatureSet,
}

// ─── Extractor contract ──────────────────────────────────────────────

/// Two-phase contract shared by all binding extractors.
pub trait NameBindingsExtractor {
    /// Collect the binding groups of the subtree rooted at `root`.
    fn name_bindings(&self, tree: &SyntaxTree, root: NodeId) -> BTreeSet<BindingGroup>;

    /// Features of one group previously returned by [`Self::name_bindings`].
    fn features(&self, tree: &SyntaxTree, group: &BindingGroup) -> Result<FeatureSet>;

    /// Run both phases. The first contract violation aborts the whole call.
    fn extract(&self, tree: &SyntaxTree, root: NodeId) -> Result<Vec<BindingRecord>> {
        self.name_bindings(tree, root)
            .into_iter()
            .map(|group| {
                let features = self.features(tree, &group)?;
                let first = group.first();
                Ok(BindingRecord {
                    name: first.and_then(|id| tree.text(id)).unwrap_or_default().to_string(),
                    span: first.and_then(|id| tree.get(id)).map(|n| n.span).unwrap_or_default(),
                    members: group.members().collect(),
                    features,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "bindings_tests.rs"]
mod tests;
