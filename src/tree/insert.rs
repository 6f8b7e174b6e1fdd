use std::cmp::Ordering;
use std::sync::Arc;

use super::{Child, Color, Node, Tree};

impl<T: Ord> Tree<T> {
    /// Returns a new tree that includes the given item. If the item is
    /// already present the original tree is returned, sharing its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let tree = Tree::new();
    /// let new_tree = tree.insert(1);
    /// let newer_tree = new_tree.insert(2);
    ///
    /// // All history is preserved.
    /// assert_eq!(newer_tree.to_vec(), vec![1, 2]);
    /// assert_eq!(new_tree.to_vec(), vec![1]);
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub fn insert(&self, item: T) -> Self {
        match self.ins(item) {
            Some(tree) => tree.into_black_root(),
            None => self.clone(),
        }
    }

    /// Inserts the item by moving `self` to the new version of the tree.
    /// Returns `false` if the item was already present.
    pub fn insert_mut(&mut self, item: T) -> bool {
        let new_tree = self.ins(item);
        self.replace_with(new_tree)
    }

    /// Rebuilds the search path with `item` added as a red leaf, balancing on
    /// the way back up. `None` means `item` was already in the tree.
    fn ins(&self, item: T) -> Option<Self> {
        match self {
            Self::Empty => Some(Node::leaf(Color::Red, Arc::new(item)).into_tree()),
            Self::Node(n) => n.ins(item).map(Self::Node),
        }
    }
}

impl<T: Ord> Node<T> {
    fn ins(&self, item: T) -> Option<Self> {
        match item.cmp(self.item()) {
            Ordering::Less => {
                let new_left = self.left.tree().ins(item)?;
                Some(
                    self.with_children(new_left.into(), self.right.clone())
                        .balance(),
                )
            }
            Ordering::Equal => None,
            Ordering::Greater => {
                let new_right = self.right.tree().ins(item)?;
                Some(
                    self.with_children(self.left.clone(), new_right.into())
                        .balance(),
                )
            }
        }
    }
}

impl<T> Node<T> {
    /// Rewrites a black node with a red child and red grandchild on the same
    /// side chain into a red node with two black children. All four shapes
    /// end up the same: the middle item on top, the smaller and larger items
    /// below it, and the orphaned subtrees reattached in order.
    ///
    /// **Note** This takes `self` instead of `&self` which saves us from
    /// unnecessary `clone`s when there's nothing to rewrite.
    fn balance(self) -> Self {
        if self.color == Color::Black {
            if let Some(l) = self.left.as_red() {
                if let Some(ll) = l.left.as_red() {
                    return Self::rebalanced(
                        [ll.left.clone(), ll.right.clone(), l.right.clone(), self.right.clone()],
                        [&ll.item, &l.item, &self.item],
                    );
                }
                if let Some(lr) = l.right.as_red() {
                    return Self::rebalanced(
                        [l.left.clone(), lr.left.clone(), lr.right.clone(), self.right.clone()],
                        [&l.item, &lr.item, &self.item],
                    );
                }
            }
            if let Some(r) = self.right.as_red() {
                if let Some(rl) = r.left.as_red() {
                    return Self::rebalanced(
                        [self.left.clone(), rl.left.clone(), rl.right.clone(), r.right.clone()],
                        [&self.item, &rl.item, &r.item],
                    );
                }
                if let Some(rr) = r.right.as_red() {
                    return Self::rebalanced(
                        [self.left.clone(), r.left.clone(), rr.left.clone(), rr.right.clone()],
                        [&self.item, &r.item, &rr.item],
                    );
                }
            }
        }

        self
    }

    /// Builds `(a x b) y (c z d)` with a red `y` and black `x` and `z`, given
    /// the subtrees `[a, b, c, d]` and the items `[x, y, z]` in order.
    fn rebalanced(subtrees: [Child<T>; 4], items: [&Arc<T>; 3]) -> Self {
        let [a, b, c, d] = subtrees;
        let [x, y, z] = items;

        let left = Self::new(Color::Black, Arc::clone(x), a, b);
        let right = Self::new(Color::Black, Arc::clone(z), c, d);

        Self::new(Color::Red, Arc::clone(y), left.into_child(), right.into_child())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn red_leaf(item: i32) -> Child<i32> {
        Node::leaf(Color::Red, Arc::new(item)).into_child()
    }

    fn colors(node: &Node<i32>) -> (Color, Color, Color) {
        (
            node.color(),
            node.left().unwrap().color(),
            node.right().unwrap().color(),
        )
    }

    /// Asserts `node` is `2` (red) over black `1` and `3` leaves.
    fn assert_rebalanced(node: &Node<i32>) {
        assert_eq!(node.item(), &2);
        assert_eq!(node.left().unwrap().item(), &1);
        assert_eq!(node.right().unwrap().item(), &3);
        assert_eq!(colors(node), (Color::Red, Color::Black, Color::Black));
        assert!(node.left().unwrap().is_leaf());
        assert!(node.right().unwrap().is_leaf());
    }

    #[test]
    fn balance_left_left() {
        let l = Node::new(Color::Red, Arc::new(2), red_leaf(1), Child::empty());
        let node = Node::new(Color::Black, Arc::new(3), l.into_child(), Child::empty());

        assert_rebalanced(&node.balance());
    }

    #[test]
    fn balance_left_right() {
        let l = Node::new(Color::Red, Arc::new(1), Child::empty(), red_leaf(2));
        let node = Node::new(Color::Black, Arc::new(3), l.into_child(), Child::empty());

        assert_rebalanced(&node.balance());
    }

    #[test]
    fn balance_right_left() {
        let r = Node::new(Color::Red, Arc::new(3), red_leaf(2), Child::empty());
        let node = Node::new(Color::Black, Arc::new(1), Child::empty(), r.into_child());

        assert_rebalanced(&node.balance());
    }

    #[test]
    fn balance_right_right() {
        let r = Node::new(Color::Red, Arc::new(2), Child::empty(), red_leaf(3));
        let node = Node::new(Color::Black, Arc::new(1), Child::empty(), r.into_child());

        assert_rebalanced(&node.balance());
    }

    #[test]
    fn balance_leaves_other_shapes_alone() {
        // A red node is never rewritten, even with a red chain below it.
        let l = Node::new(Color::Red, Arc::new(2), red_leaf(1), Child::empty());
        let node = Node::new(Color::Red, Arc::new(3), l.into_child(), Child::empty());
        let original = node.clone();
        assert!(node.balance().ptr_eq(&original));

        // Two red children but no red grandchild.
        let node = Node::new(Color::Black, Arc::new(2), red_leaf(1), red_leaf(3));
        let original = node.clone();
        assert!(node.balance().ptr_eq(&original));
    }

    #[test]
    fn insert_into_empty_makes_black_root() {
        let tree = Tree::new().insert(1);
        let root = tree.root().unwrap();

        assert_eq!(root.item(), &1);
        assert_eq!(root.color(), Color::Black);
    }

    #[test]
    fn always_adding_left() {
        let items = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut inserted = Vec::new();

        let mut tree = Tree::new();
        assert!(!tree.contains(&10));

        for item in items {
            tree = tree.insert(item);
            inserted.push(item);
            for inserted in &inserted {
                assert!(tree.contains(inserted));
            }
            assert_eq!(tree.validate(), Ok(()));
        }
        // 2 * lg(11) bounds a red-black tree of 10 items.
        assert!(tree.height().unwrap() <= 6);
    }

    #[test]
    fn always_adding_right() {
        let items = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut inserted = Vec::new();

        let mut tree = Tree::new();
        assert!(!tree.contains(&1));

        for item in items {
            tree = tree.insert(item);
            inserted.push(item);
            for inserted in &inserted {
                assert!(tree.contains(inserted));
            }
            assert_eq!(tree.validate(), Ok(()));
        }
        assert!(tree.height().unwrap() <= 6);
    }

    #[test]
    fn three_ascending_items_rotate_to_middle() {
        let tree = Tree::new().insert(1).insert(2).insert(3);
        let root = tree.root().unwrap();

        assert_eq!(root.item(), &2);
        assert_eq!(colors(root), (Color::Black, Color::Black, Color::Black));
        assert_eq!(tree.height(), Some(1));
    }

    #[test]
    fn duplicate_insert_shares_the_original() {
        let tree = Tree::new().insert(5).insert(3).insert(8);
        let same = tree.insert(3);

        assert!(same.ptr_eq(&tree));
        assert_eq!(same.to_vec(), vec![3, 5, 8]);
    }

    #[test]
    fn insert_shares_untouched_subtrees() {
        let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
        let newer = tree.insert(8);

        let old_root = tree.root().unwrap();
        let new_root = newer.root().unwrap();
        assert!(old_root.left.ptr_eq(&new_root.left));
        assert!(!old_root.right.ptr_eq(&new_root.right));
        assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn insert_mut_reports_changes() {
        let mut tree = Tree::new();

        assert!(tree.insert_mut(1));
        assert!(tree.insert_mut(2));
        assert!(!tree.insert_mut(1));
        assert_eq!(tree.to_vec(), vec![1, 2]);
        assert_eq!(tree.root().unwrap().color(), Color::Black);
    }
}
