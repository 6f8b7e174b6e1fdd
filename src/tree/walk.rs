use std::collections::VecDeque;

use super::{Node, Tree};

/// Callbacks for walking a tree. Every hook does nothing by default, so a
/// visitor only implements the ones it cares about.
pub trait Visitor<T> {
    /// Called on a node before either of its subtrees.
    fn pre_order(&mut self, _item: &T) {}

    /// Called on a node between its left and right subtrees. Only depth first
    /// walks call this.
    fn in_order(&mut self, _item: &T) {}

    /// Called on a node once its subtrees have been walked (depth first) or
    /// queued (breadth first).
    fn post_order(&mut self, _item: &T) {}
}

/// Adapts a closure into a [`Visitor`] that only cares about in-order visits.
struct InOrder<F>(F);

impl<T, F: FnMut(&T)> Visitor<T> for InOrder<F> {
    fn in_order(&mut self, item: &T) {
        (self.0)(item)
    }
}

impl<T> Tree<T> {
    /// Walks every node, left subtree before right, calling the visitor's
    /// pre-, in- and post-order hooks as it goes.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Tree, Visitor};
    ///
    /// #[derive(Default)]
    /// struct PreOrder(Vec<i32>);
    ///
    /// impl Visitor<i32> for PreOrder {
    ///     fn pre_order(&mut self, item: &i32) {
    ///         self.0.push(*item);
    ///     }
    /// }
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    /// let mut visitor = PreOrder::default();
    /// tree.walk_depth_first(&mut visitor);
    ///
    /// assert_eq!(visitor.0, vec![2, 1, 3]);
    /// ```
    pub fn walk_depth_first<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        if let Some(root) = self.root() {
            root.walk_depth_first(visitor);
        }
    }

    /// Walks every node one level at a time, left to right. A node's
    /// pre-order hook is called when it is taken off the queue and its
    /// post-order hook once its children have been queued.
    pub fn walk_breadth_first<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            visitor.pre_order(node.item());
            queue.extend(node.left());
            queue.extend(node.right());
            visitor.post_order(node.item());
        }
    }

    /// Calls `f` on every item in ascending order.
    pub fn walk_in_order<F: FnMut(&T)>(&self, f: F) {
        self.walk_depth_first(&mut InOrder(f));
    }
}

impl<T> Node<T> {
    fn walk_depth_first<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        visitor.pre_order(self.item());
        if let Some(left) = self.left() {
            left.walk_depth_first(visitor);
        }
        visitor.in_order(self.item());
        if let Some(right) = self.right() {
            right.walk_depth_first(visitor);
        }
        visitor.post_order(self.item());
    }
}
