//! Depth-first pre-order traversal: a node is yielded before any of its descendants.

use std::vec;

use itertools::Itertools;
use tracing::trace;

use crate::TreeTraversable;

/// A DFS stack frame: a node paired with the iterator over its remaining children.
/// The bottom frame walks the root sequence and therefore carries no node.
type Frame<T> = (Option<T>, vec::IntoIter<T>);

/// Iterator for a depth-first, left-to-right pre-order traversal.
///
/// The stack always holds the path from the roots down to the node yielded last,
/// which makes [parent](Self::parent) and [ancestors](Self::ancestors) available
/// without any parent pointers stored on the nodes themselves. Frames of fully
/// visited subtrees are discarded lazily on the following `next` call.
pub struct PreOrderIterator<'a, W>
where
    W: TreeTraversable,
{
    tree: &'a W,
    stack: Vec<Frame<W::Node>>,
}

impl<'a, W> PreOrderIterator<'a, W>
where
    W: TreeTraversable,
    W::Node: Clone,
{
    pub(crate) fn new<I>(tree: &'a W, roots: I) -> Self
    where
        I: IntoIterator<Item = W::Node>,
    {
        trace!("starting pre-order traversal");
        let roots = roots.into_iter().collect_vec();
        PreOrderIterator {
            tree,
            stack: vec![(None, roots.into_iter())],
        }
    }

    /// Parent of the node yielded last within this traversal. `None` at a root,
    /// before the first `next`, and after exhaustion.
    pub fn parent(&self) -> Option<&W::Node> {
        match self.stack.len() {
            0 | 1 => None,
            len => self.stack[len - 2].0.as_ref(),
        }
    }

    /// Upward walk along the DFS stack, starting at the parent of the node yielded
    /// last and ending at its root. Empty at a root, before the first `next`, and
    /// after exhaustion.
    pub fn ancestors(&self) -> impl Iterator<Item = &W::Node> {
        let above = self.stack.len().saturating_sub(1);
        self.stack[..above].iter().rev().filter_map(|(node, _)| node.as_ref())
    }
}

impl<'a, W> Iterator for PreOrderIterator<'a, W>
where
    W: TreeTraversable,
    W::Node: Clone,
{
    type Item = W::Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.1.next() {
                Some(node) => {
                    let children = self.tree.children(&node);
                    // The node stays on the stack so parent()/ancestors() can see it.
                    self.stack.push((Some(node.clone()), children.into_iter()));
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{FnTraverser, TreeTraversable};
    use itertools::Itertools;

    fn letters() -> FnTraverser<char, impl Fn(&char) -> Vec<char>> {
        FnTraverser::new(|node: &char| match node {
            'h' => vec!['d', 'e', 'g'],
            'd' => vec!['a', 'b', 'c'],
            'g' => vec!['f'],
            _ => vec![],
        })
    }

    #[test_log::test]
    fn visits_a_node_before_its_descendants() {
        let tree = letters();
        assert_eq!(tree.pre_order('h').collect::<String>(), "hdabcegf");
    }

    #[test_log::test]
    fn supports_an_ordered_forest() {
        let tree = letters();
        let order = tree.pre_order_forest(['d', 'e', 'g']).collect::<String>();
        assert_eq!(order, "dabcegf");
    }

    #[test_log::test]
    fn exposes_parent_and_ancestors_from_the_stack() {
        let tree = letters();
        let mut iter = tree.pre_order('h');

        // Before the first step there is no current node.
        assert_eq!(iter.parent(), None);
        assert_eq!(iter.ancestors().count(), 0);

        assert_eq!(iter.next(), Some('h'));
        assert_eq!(iter.parent(), None);
        assert_eq!(iter.ancestors().count(), 0);

        assert_eq!(iter.next(), Some('d'));
        assert_eq!(iter.parent(), Some(&'h'));

        // Advance to 'b', a grandchild of the root.
        assert_eq!(iter.next(), Some('a'));
        assert_eq!(iter.next(), Some('b'));
        assert_eq!(iter.parent(), Some(&'d'));
        assert_eq!(iter.ancestors().copied().collect_vec(), ['d', 'h']);

        // 'f' sits on the rightmost path; its ancestor frames are all exhausted
        // but must still be visible.
        let mut iter = tree.pre_order('h');
        iter.find(|node| *node == 'f').unwrap();
        assert_eq!(iter.parent(), Some(&'g'));
        assert_eq!(iter.ancestors().copied().collect_vec(), ['g', 'h']);
    }

    #[test_log::test]
    fn restarts_as_a_fresh_sequence() {
        let tree = letters();
        assert_eq!(
            tree.pre_order('h').collect_vec(),
            tree.pre_order('h').collect_vec()
        );
    }

    #[test_log::test]
    fn keeps_returning_none_once_drained() {
        let tree = letters();
        let mut iter = tree.pre_order('h');
        assert_eq!(iter.by_ref().count(), 8);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.parent(), None);
    }
}
