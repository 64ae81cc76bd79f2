//! Lazy traversal iterators over a [TreeTraversable](crate::TreeTraversable).
//!
//! The depth-first iterators keep an explicit stack of (node, remaining children)
//! frames; breadth-first only needs a FIFO queue. All state is created when the
//! iterator is constructed and dropped with it.

pub mod breadth;
pub mod post_order;
pub mod pre_order;

pub use breadth::BreadthFirstIterator;
pub use post_order::PostOrderIterator;
pub use pre_order::PreOrderIterator;
