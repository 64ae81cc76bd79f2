//! [Arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! tree for callers that do not bring their own structure.
//!
//! Nodes live in a flat vector and reference each other by [ArenaIndex], so the
//! handles handed to the traversal iterators are plain `Copy` indices. The tree is
//! mutable: nodes can be added under any existing parent, addressed either by index
//! or by a caller-chosen id.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::{ArborError, TreeTraversable};

/// Position of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaIndex(pub usize);

/// A node owned by an [ArenaTree].
#[derive(Debug)]
pub struct ArenaNode<T, Id> {
    /// The user-defined value the node owns
    value: T,
    /// Index in the arena allocation
    index: ArenaIndex,
    /// Identifier for lookups
    id: Id,
    /// References to child nodes, in insertion order
    children: Vec<ArenaIndex>,
    /// Distance to the root node
    depth: usize,
    parent: Option<ArenaIndex>,
}

impl<T, Id> ArenaNode<T, Id> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn index(&self) -> ArenaIndex {
        self.index
    }

    pub fn children(&self) -> &[ArenaIndex] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<ArenaIndex> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T, Id> fmt::Display for ArenaNode<T, Id>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arena index {}, depth {}, children {:?}, value: {}",
            self.index.0, self.depth, self.children, self.value
        )
    }
}

/// Mutable tree with arena allocation. Implements [TreeTraversable] over
/// [ArenaIndex] handles, so any of the traversal orders can be requested on it.
pub struct ArenaTree<T, Id> {
    nodes: Vec<ArenaNode<T, Id>>,
    /// Resolves caller-chosen ids to arena indices
    lookup: HashMap<Id, ArenaIndex>,
}

impl<T, Id> ArenaTree<T, Id>
where
    Id: Eq + Clone + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        ArenaTree {
            nodes: vec![],
            lookup: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ArenaTree {
            nodes: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity(capacity),
        }
    }

    /// Deletes all nodes and sets a new root.
    pub fn set_root(&mut self, value: T, id: Id) -> ArenaIndex {
        debug!(?id, "setting root node");
        self.nodes.clear();
        self.lookup.clear();
        let index = ArenaIndex(0);
        self.lookup.insert(id.clone(), index);
        self.nodes.push(ArenaNode {
            value,
            index,
            id,
            children: vec![],
            depth: 0,
            parent: None,
        });
        index
    }

    /// Adds a new node under an existing parent. The id must not be in use yet.
    pub fn add(&mut self, value: T, id: Id, parent: &Id) -> Result<ArenaIndex, ArborError<Id>> {
        let parent_index = *self
            .lookup
            .get(parent)
            .ok_or_else(|| ArborError::UnknownNode(parent.clone()))?;
        if self.lookup.contains_key(&id) {
            return Err(ArborError::NotUnique(id));
        }

        let index = ArenaIndex(self.nodes.len());
        let parent_node = self
            .nodes
            .get_mut(parent_index.0)
            .ok_or(ArborError::ReferenceOutOfBound(parent_index.0))?;
        parent_node.children.push(index);
        let depth = parent_node.depth + 1;

        debug!(?id, index = index.0, "adding node");
        self.lookup.insert(id.clone(), index);
        self.nodes.push(ArenaNode {
            value,
            index,
            id,
            children: vec![],
            depth,
            parent: Some(parent_index),
        });
        Ok(index)
    }

    pub fn root(&self) -> Result<&ArenaNode<T, Id>, ArborError<Id>> {
        self.nodes.first().ok_or(ArborError::RootNotSet)
    }

    pub fn node(&self, index: ArenaIndex) -> Result<&ArenaNode<T, Id>, ArborError<Id>> {
        self.nodes
            .get(index.0)
            .ok_or(ArborError::ReferenceOutOfBound(index.0))
    }

    pub fn node_by_id(&self, id: &Id) -> Option<&ArenaNode<T, Id>> {
        let index = self.lookup.get(id)?;
        self.nodes.get(index.0)
    }

    pub fn value(&self, index: ArenaIndex) -> Option<&T> {
        self.nodes.get(index.0).map(|node| &node.value)
    }

    pub fn nodes(&self) -> &[ArenaNode<T, Id>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T, Id> Default for ArenaTree<T, Id>
where
    Id: Eq + Clone + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Id> TreeTraversable for ArenaTree<T, Id> {
    type Node = ArenaIndex;

    fn children(&self, node: &ArenaIndex) -> Vec<ArenaIndex> {
        self.nodes
            .get(node.0)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn sample() -> ArenaTree<usize, &'static str> {
        //     0
        //    / \
        //   1   4
        //  / \   \
        // 2   3   5
        let mut tree = ArenaTree::new();
        let root = "root";
        tree.set_root(0, root);
        tree.add(1, "first", &root).unwrap();
        tree.add(4, "second", &root).unwrap();
        tree.add(2, "third", &"first").unwrap();
        tree.add(3, "fourth", &"first").unwrap();
        tree.add(5, "fifth", &"second").unwrap();
        tree
    }

    #[test_log::test]
    fn records_structure_on_insertion() {
        let tree = sample();

        assert_eq!(tree.len(), 6);
        assert_eq!(tree.nodes().iter().map(|n| *n.value()).collect_vec(), [0, 1, 4, 2, 3, 5]);
        assert_eq!(tree.root().unwrap().children(), [ArenaIndex(1), ArenaIndex(2)]);
        assert_eq!(tree.nodes().iter().map(|n| n.depth()).collect_vec(), [0, 1, 1, 2, 2, 2]);

        let third = tree.node_by_id(&"third").unwrap();
        assert!(third.is_leaf());
        assert_eq!(third.parent(), Some(ArenaIndex(1)));
        assert_eq!(tree.node(third.index()).unwrap().id(), &"third");
    }

    #[test_log::test]
    fn set_root_resets_previous_content() {
        let mut tree = sample();
        let root = tree.set_root(7, "fresh");

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.value(root), Some(&7));
        assert!(tree.node_by_id(&"first").is_none());
    }
}
