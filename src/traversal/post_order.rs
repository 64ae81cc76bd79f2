//! Depth-first post-order traversal: a node is yielded only after all of its descendants.

use std::vec;

use tracing::trace;

use crate::TreeTraversable;

/// Iterator for a depth-first, left-to-right post-order traversal.
///
/// Unlike pre-order, emission is deferred: a frame is only popped and yielded once
/// the iterator over its children is exhausted, so the node is moved out of the
/// frame and no cloning is needed.
pub struct PostOrderIterator<'a, W>
where
    W: TreeTraversable,
{
    tree: &'a W,
    stack: Vec<(W::Node, vec::IntoIter<W::Node>)>,
}

impl<'a, W> PostOrderIterator<'a, W>
where
    W: TreeTraversable,
{
    pub(crate) fn new(tree: &'a W, root: W::Node) -> Self {
        trace!("starting post-order traversal");
        let children = tree.children(&root).into_iter();
        PostOrderIterator {
            tree,
            stack: vec![(root, children)],
        }
    }
}

impl<'a, W> Iterator for PostOrderIterator<'a, W>
where
    W: TreeTraversable,
{
    type Item = W::Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.1.next() {
                Some(child) => {
                    let grandchildren = self.tree.children(&child).into_iter();
                    self.stack.push((child, grandchildren));
                }
                // The `?` above guarantees the stack is non-empty here.
                None => return self.stack.pop().map(|(node, _)| node),
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
    fn visits_a_node_after_its_descendants() {
        let tree = letters();
        assert_eq!(tree.post_order('h').collect::<String>(), "abcdefgh");
    }

    #[test_log::test]
    fn yields_a_leaf_root_immediately() {
        let tree = letters();
        assert_eq!(tree.post_order('e').collect_vec(), ['e']);
    }

    #[test_log::test]
    fn restarts_as_a_fresh_sequence() {
        let tree = letters();
        assert_eq!(
            tree.post_order('h').collect_vec(),
            tree.post_order('h').collect_vec()
        );
    }

    #[test_log::test]
    fn keeps_returning_none_once_drained() {
        let tree = letters();
        let mut iter = tree.post_order('h');
        assert_eq!(iter.by_ref().count(), 8);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
