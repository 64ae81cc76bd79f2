//! Breadth-first (level-order) traversal backed by a FIFO queue.

use std::collections::VecDeque;

use tracing::trace;

use crate::TreeTraversable;

/// Iterator for a breadth-first traversal. The queue is seeded with the root; each
/// dequeued node's children are appended in their given order, so all nodes of depth
/// `d` are yielded before any node of depth `d + 1`.
pub struct BreadthFirstIterator<'a, W>
where
    W: TreeTraversable,
{
    tree: &'a W,
    queue: VecDeque<W::Node>,
}

impl<'a, W> BreadthFirstIterator<'a, W>
where
    W: TreeTraversable,
{
    pub(crate) fn new(tree: &'a W, root: W::Node) -> Self {
        trace!("starting breadth-first traversal");
        BreadthFirstIterator {
            tree,
            queue: VecDeque::from([root]),
        }
    }

    /// Borrows the node the next `next` call would yield, without advancing.
    pub fn peek(&self) -> Option<&W::Node> {
        self.queue.front()
    }
}

impl<'a, W> Iterator for BreadthFirstIterator<'a, W>
where
    W: TreeTraversable,
{
    type Item = W::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(self.tree.children(&node));
        Some(node)
    }
}
