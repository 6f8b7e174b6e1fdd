use std::borrow::Borrow;
use std::cmp::Ordering;

use super::{Iter, Node, Tree};

impl<T> Tree<T> {
    /// Checks if `item` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lookup(item).is_some()
    }

    /// Potentially finds the subtree rooted at the node holding `item`. If no
    /// node holds it, `None` is returned.
    pub fn lookup<Q>(&self, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root().and_then(|n| n.lookup(item))
    }

    /// The number of edges between the root and the node holding `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(&2), Some(0));
    /// assert_eq!(tree.depth(&3), Some(1));
    /// assert_eq!(tree.depth(&4), None);
    /// ```
    pub fn depth<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root().and_then(|n| n.depth(item))
    }

    /// The node one of whose children holds `item`. The root's item has no
    /// parent.
    pub fn parent<Q>(&self, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root().and_then(|n| n.parent(item))
    }

    /// Searches with a comparator instead of an item, the way
    /// [`slice::binary_search_by`] does: `f` says how a stored item compares
    /// to the one being looked for. This finds items by part of their
    /// contents, such as a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let tree: Tree<(u8, &str)> = vec![(2, "two"), (1, "one")].into_iter().collect();
    /// let found = tree.lookup_by(|(key, _)| key.cmp(&2));
    ///
    /// assert_eq!(found.map(|n| n.item().1), Some("two"));
    /// assert!(tree.contains_by(|(key, _)| key.cmp(&1)));
    /// ```
    pub fn lookup_by<F>(&self, f: F) -> Option<&Node<T>>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.root().and_then(|n| n.lookup_by(f))
    }

    /// Like [`contains`](Tree::contains) but steered by `f`, as in
    /// [`lookup_by`](Tree::lookup_by).
    pub fn contains_by<F>(&self, f: F) -> bool
    where
        F: FnMut(&T) -> Ordering,
    {
        self.lookup_by(f).is_some()
    }

    /// Like [`depth`](Tree::depth) but steered by `f`, as in
    /// [`lookup_by`](Tree::lookup_by).
    pub fn depth_by<F>(&self, f: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.root().and_then(|n| n.depth_by(f))
    }

    /// Like [`parent`](Tree::parent) but steered by `f`, as in
    /// [`lookup_by`](Tree::lookup_by).
    pub fn parent_by<F>(&self, f: F) -> Option<&Node<T>>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.root().and_then(|n| n.parent_by(f))
    }
    /// The leftmost node, holding the smallest item.
    pub fn minimum(&self) -> Option<&Node<T>> {
        self.root().map(Node::minimum)
    }

    /// The rightmost node, holding the largest item.
    pub fn maximum(&self) -> Option<&Node<T>> {
        self.root().map(Node::maximum)
    }

    /// The smallest item.
    pub fn first(&self) -> Option<&T> {
        self.minimum().map(Node::item)
    }

    /// The largest item.
    pub fn last(&self) -> Option<&T> {
        self.maximum().map(Node::item)
    }

    /// Iterates over the items in ascending order. Each call starts over
    /// from the smallest item.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// All items in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Node<T> {
    /// Potentially finds the node holding `item` in the subtree rooted here.
    pub fn lookup<Q>(&self, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lookup_by(|x| item.cmp(x.borrow()).reverse())
    }

    /// Like [`lookup`](Node::lookup) but steered by `f`, which tells how a
    /// stored item compares to the one being searched for. `f` must agree
    /// with the order of the tree.
    pub fn lookup_by<F>(&self, mut f: F) -> Option<&Node<T>>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut node = self;
        loop {
            node = match f(node.item()) {
                Ordering::Greater => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Less => node.right()?,
            };
        }
    }

    /// Checks if `item` is in the subtree rooted here.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lookup(item).is_some()
    }

    /// The number of edges between this node and the node holding `item`.
    pub fn depth<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.depth_by(|x| item.cmp(x.borrow()).reverse())
    }

    /// Like [`depth`](Node::depth) but steered by `f`.
    pub fn depth_by<F>(&self, mut f: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut node = self;
        let mut depth = 0;
        loop {
            node = match f(node.item()) {
                Ordering::Greater => node.left()?,
                Ordering::Equal => return Some(depth),
                Ordering::Less => node.right()?,
            };
            depth += 1;
        }
    }

    /// The node in this subtree one of whose children holds `item`.
    pub fn parent<Q>(&self, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.parent_by(|x| item.cmp(x.borrow()).reverse())
    }

    /// Like [`parent`](Node::parent) but steered by `f`.
    pub fn parent_by<F>(&self, mut f: F) -> Option<&Node<T>>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut parent = None;
        let mut node = self;
        loop {
            let child = match f(node.item()) {
                Ordering::Greater => node.left()?,
                Ordering::Equal => return parent,
                Ordering::Less => node.right()?,
            };
            parent = Some(node);
            node = child;
        }
    }

    /// The leftmost node of this subtree.
    pub fn minimum(&self) -> &Node<T> {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The rightmost node of this subtree.
    pub fn maximum(&self) -> &Node<T> {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}
