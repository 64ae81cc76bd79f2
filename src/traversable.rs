//! Definition of the interfaces for tree traversal.

use std::marker::PhantomData;

use crate::traversal::{BreadthFirstIterator, PostOrderIterator, PreOrderIterator};

/// Order of iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    PreOrder,
    PostOrder,
    BreadthFirst,
}

/// Capability of viewing values of a type as nodes in a tree.
///
/// Implementors only supply [children](TreeTraversable::children); the traversal
/// methods are provided. The trait takes no ownership of the tree: traversal state
/// lives in the returned iterators and is discarded when they are dropped.
///
/// Node handles are passed by value and should be cheap — indices, small copyable
/// keys, `Rc`s. `Clone` is required only where an iterator must retain a node it has
/// already yielded (pre-order keeps the path on its stack for [PreOrderIterator::parent]
/// and [PreOrderIterator::ancestors]).
pub trait TreeTraversable {
    type Node;

    /// Children of `node`, in left-to-right order. Must be deterministic for the
    /// duration of a single traversal; no guarantees are made if the underlying
    /// structure mutates while an iteration is in progress.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Lazy depth-first iteration that yields a node before any of its descendants.
    fn pre_order(&self, root: Self::Node) -> PreOrderIterator<'_, Self>
    where
        Self: Sized,
        Self::Node: Clone,
    {
        PreOrderIterator::new(self, std::iter::once(root))
    }

    /// Pre-order over an ordered forest. The roots are visited in their given order,
    /// each followed by its entire subtree.
    fn pre_order_forest<I>(&self, roots: I) -> PreOrderIterator<'_, Self>
    where
        Self: Sized,
        Self::Node: Clone,
        I: IntoIterator<Item = Self::Node>,
    {
        PreOrderIterator::new(self, roots)
    }

    /// Lazy depth-first iteration that yields a node only after all of its descendants.
    fn post_order(&self, root: Self::Node) -> PostOrderIterator<'_, Self>
    where
        Self: Sized,
    {
        PostOrderIterator::new(self, root)
    }

    /// Lazy level-order iteration: all nodes of depth 0, then depth 1, and so on.
    fn breadth_first(&self, root: Self::Node) -> BreadthFirstIterator<'_, Self>
    where
        Self: Sized,
    {
        BreadthFirstIterator::new(self, root)
    }

    /// Traversal with the order selected at runtime.
    fn traverse<'a>(&'a self, order: Order, root: Self::Node) -> Box<dyn Iterator<Item = Self::Node> + 'a>
    where
        Self: Sized,
        Self::Node: Clone + 'a,
    {
        match order {
            Order::PreOrder => Box::new(self.pre_order(root)),
            Order::PostOrder => Box::new(self.post_order(root)),
            Order::BreadthFirst => Box::new(self.breadth_first(root)),
        }
    }
}

/// Traverser backed by a plain children function, for callers whose tree shape is
/// expressed more naturally as a closure than as a dedicated type.
pub struct FnTraverser<T, F> {
    children: F,
    node: PhantomData<fn() -> T>,
}

impl<T, F> FnTraverser<T, F>
where
    F: Fn(&T) -> Vec<T>,
{
    pub fn new(children: F) -> Self {
        FnTraverser {
            children,
            node: PhantomData,
        }
    }
}

impl<T, F> TreeTraversable for FnTraverser<T, F>
where
    F: Fn(&T) -> Vec<T>,
{
    type Node = T;

    fn children(&self, node: &T) -> Vec<T> {
        (self.children)(node)
    }
}
