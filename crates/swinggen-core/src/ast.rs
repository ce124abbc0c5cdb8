//! The parsed description tree.
//!
//! Nodes live in an arena owned by [`Forest`] and refer to their children by
//! [`NodeId`] index. The parser keeps a separate stack of indices into the
//! arena while building, so no node is ever aliased and the finished tree is
//! trivially inspectable.

use indexmap::IndexMap;

/// Index of a node in a [`Forest`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

/// One parsed structural unit: a kind tag, ordered properties, and children.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Canonical upper-cased kind tag (`FRAME`, `PANEL`, `BUTTON`,
    /// `COMMENT`, ...). Never empty for a structural node.
    pub tag: String,
    /// Ordered property table. A `None` value marks a value-less flag such
    /// as `PACK`. Re-declaring a key replaces the value but keeps the key's
    /// original position.
    pub properties: IndexMap<String, Option<String>>,
    /// Children in declaration order.
    pub children: Vec<NodeId>,
    /// 1-based source line of the opening directive.
    pub line: u32,
}

impl Node {
    /// Create a node with no properties or children.
    pub fn new(tag: impl Into<String>, line: u32) -> Self {
        Self {
            tag: tag.into(),
            properties: IndexMap::new(),
            children: Vec::new(),
            line,
        }
    }

    /// Look up a property value, flattening the "flag present" marker.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|v| v.as_deref())
    }

    /// Check whether a property key was declared, with or without a value.
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}

/// A parse result: an arena of nodes plus the ordered list of roots.
///
/// Multiple roots occur when a description declares several independent
/// top-level containers, or when a comment line appears outside any open
/// block.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forest {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Forest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a node into the arena, returning its index.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append a node to the root list.
    pub fn add_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    /// Append `child` to `parent`'s child list.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Get a node by index.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by index.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// The root nodes, in declaration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Maximum tree depth over all roots (a lone root has depth 1).
    pub fn max_depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&id| self.depth_of(id))
            .max()
            .unwrap_or(0)
    }

    fn depth_of(&self, id: NodeId) -> usize {
        let Some(node) = self.get(id) else {
            return 0;
        };
        1 + node
            .children
            .iter()
            .map(|&child| self.depth_of(child))
            .max()
            .unwrap_or(0)
    }
}
