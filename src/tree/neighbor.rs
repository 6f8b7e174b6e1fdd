use std::borrow::Borrow;
use std::cmp::Ordering;

use super::{Node, Tree};

/// Which child a search went down through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    Left,
    Right,
}

/// The ancestors visited on the way down to a node, root first, each with the
/// branch the search took out of it.
type Path<'a, T> = Vec<(&'a Node<T>, Branch)>;

impl<T> Tree<T> {
    /// The node holding the next larger item after `item`. Returns `None` if
    /// `item` is the largest item or isn't in the tree at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Node, Tree};
    ///
    /// let tree: Tree<i32> = vec![0, 10, 5, 15, -5, 20, -10].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&15).map(Node::item), Some(&20));
    /// assert!(tree.successor(&20).is_none());
    /// assert!(tree.successor(&7).is_none());
    /// ```
    pub fn successor<Q>(&self, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root().and_then(|n| n.successor(item))
    }

    /// The node holding the next smaller item before `item`. Returns `None` if
    /// `item` is the smallest item or isn't in the tree at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Node, Tree};
    ///
    /// let tree: Tree<i32> = vec![0, 10, 5, 15, -5, 20, -10].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&0).map(Node::item), Some(&-5));
    /// assert!(tree.predecessor(&-10).is_none());
    /// ```
    pub fn predecessor<Q>(&self, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root().and_then(|n| n.predecessor(item))
    }
}

impl<T> Node<T> {
    /// The node in this subtree holding the next larger item after `item`.
    pub fn successor<Q>(&self, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (target, path) = self.search_path(item)?;

        match target.right() {
            Some(right) => Some(right.minimum()),
            None => Self::closest_ancestor(path, Branch::Left),
        }
    }

    /// The node in this subtree holding the next smaller item before `item`.
    pub fn predecessor<Q>(&self, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (target, path) = self.search_path(item)?;

        match target.left() {
            Some(left) => Some(left.maximum()),
            None => Self::closest_ancestor(path, Branch::Right),
        }
    }

    /// Walks down to the node holding `item`, recording every ancestor along
    /// the way. Nodes don't know their parents, so this path is the only way
    /// back up.
    fn search_path<Q>(&self, item: &Q) -> Option<(&Node<T>, Path<'_, T>)>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut path = Vec::new();
        let mut node = self;
        loop {
            let (child, branch) = match item.cmp(node.item().borrow()) {
                Ordering::Less => (node.left(), Branch::Left),
                Ordering::Equal => return Some((node, path)),
                Ordering::Greater => (node.right(), Branch::Right),
            };
            path.push((node, branch));
            node = child?;
        }
    }

    /// The nearest ancestor the search left through `branch`, most recently
    /// visited first.
    fn closest_ancestor(path: Path<'_, T>, branch: Branch) -> Option<&Node<T>> {
        path.into_iter()
            .rev()
            .find(|(_, taken)| *taken == branch)
            .map(|(ancestor, _)| ancestor)
    }
}
