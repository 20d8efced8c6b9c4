//! Arena syntax tree: nodes addressed by stable integer ids.
//!
//! Front-ends (see [`java`]) build a [`SyntaxTree`] once per source file; the
//! extractors only ever read it.

pub mod java;

use serde::{Deserialize, Serialize};

// ─── Node identity ───────────────────────────────────────────────────

/// Index of a node inside its [`SyntaxTree`]. Two occurrences with identical
/// surface text are still distinct nodes with distinct ids.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ─── Node kinds ──────────────────────────────────────────────────────

/// Structural role of a node, with the kind-specific accessors the
/// extractors need.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `receiver.name(arguments)` or `name(arguments)`
    MethodInvocation { name: NodeId, arguments: Vec<NodeId> },
    /// Method or constructor declaration
    MethodDeclaration { name: NodeId },
    /// Class or interface declaration
    TypeDeclaration { name: NodeId },
    /// Identifier leaf carrying source text
    Name,
    Other,
}

/// 1-based source position of a node's first character.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Grammar node type, e.g. "method_invocation"
    pub ast_type: String,
    pub text: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub span: Span,
}

// ─── Tree ────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    /// Create a tree holding only a root node of the given grammar type.
    pub fn new(root_ast_type: &str) -> Self {
        Self {
            nodes: vec![SyntaxNode {
                kind: NodeKind::Other,
                ast_type: root_ast_type.to_string(),
                text: None,
                parent: None,
                children: Vec::new(),
                span: Span { line: 1, column: 1 },
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child of `parent` with kind [`NodeKind::Other`]. The kind can
    /// be assigned later with [`SyntaxTree::set_kind`] once the node's own
    /// children exist.
    pub fn add_child(&mut self, parent: NodeId, ast_type: &str, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SyntaxNode {
            kind: NodeKind::Other,
            ast_type: ast_type.to_string(),
            text: None,
            parent: Some(parent),
            children: Vec::new(),
            span,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Append an identifier leaf under `parent`.
    pub fn add_name(&mut self, parent: NodeId, ast_type: &str, text: &str, span: Span) -> NodeId {
        let id = self.add_child(parent, ast_type, span);
        let node = &mut self.nodes[id.index()];
        node.kind = NodeKind::Name;
        node.text = Some(text.to_string());
        id
    }

    pub fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
        self.nodes[id.index()].kind = kind;
    }

    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Source text of an identifier leaf; `None` for inner nodes.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| n.text.as_deref())
    }

    /// Parent chain of `id`, nearest first. Does not include `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors { tree: self, next: self.parent(id) }
    }

    /// Pre-order walk of the subtree rooted at `id`, including `id`.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = if self.get(id).is_some() { vec![id] } else { Vec::new() };
        Descendants { tree: self, stack }
    }
}

pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

pub struct Descendants<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        // Reverse so the first child is visited first
        self.stack.extend(self.tree.children(current).iter().rev());
        Some(current)
    }
}
