//! ## About
//!
//! This crate views values of an arbitrary, caller-defined type as nodes in a tree and
//! provides lazy iterators over the trees induced by a children-lookup function. It
//! contains no tree of its own (although [ArenaTree] is available for callers who do not
//! bring one): the only capability it requires is `children: Node -> Vec<Node>`, supplied
//! by implementing [TreeTraversable] or by wrapping a closure in [FnTraverser].
//!
//! Three orders are supported: pre-order (a node before its subtrees), post-order (a node
//! after its subtrees), and breadth-first (level by level). All iterators are pull-based
//! and single-pass; calling a traversal method again starts a fresh traversal.
//!
//! ```
//! use arbor::{FnTraverser, TreeTraversable};
//!
//! // The tree        h
//! //               / | \
//! //              d  e  g
//! //             /|\    |
//! //            a b c   f
//! let tree = FnTraverser::new(|node: &char| match node {
//!     'h' => vec!['d', 'e', 'g'],
//!     'd' => vec!['a', 'b', 'c'],
//!     'g' => vec!['f'],
//!     _ => vec![],
//! });
//!
//! assert_eq!(tree.pre_order('h').collect::<String>(), "hdabcegf");
//! assert_eq!(tree.post_order('h').collect::<String>(), "abcdefgh");
//! assert_eq!(tree.breadth_first('h').collect::<String>(), "hdegabcf");
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod arena;
pub mod errors;
pub mod traversable;
pub mod traversal;

pub use arena::{ArenaIndex, ArenaNode, ArenaTree};
pub use errors::ArborError;
pub use traversable::{
    FnTraverser, Order,
    Order::{BreadthFirst, PostOrder, PreOrder},
    TreeTraversable,
};
pub use traversal::{BreadthFirstIterator, PostOrderIterator, PreOrderIterator};
