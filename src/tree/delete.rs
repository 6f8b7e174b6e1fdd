use std::borrow::Borrow;
use std::cmp::Ordering;
use std::sync::Arc;

use super::{Color, Node, Tree};

/// A rebuilt subtree and whether its black height dropped by one compared to
/// the subtree it replaces.
type Removal<T> = (Tree<T>, bool);

impl<T: Ord> Tree<T> {
    /// Returns a new tree without the given item. If the tree never contained
    /// the item, the original tree is returned, sharing its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    /// let newer_tree = tree.delete(&1);
    ///
    /// // All history is preserved.
    /// assert!(!newer_tree.contains(&1));
    /// assert!(tree.contains(&1));
    /// ```
    #[must_use]
    pub fn delete<Q>(&self, item: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.del(item) {
            Some((tree, _)) => tree.into_black_root(),
            None => self.clone(),
        }
    }

    /// Deletes the item by moving `self` to the new version of the tree.
    /// Returns `false` if the item wasn't present.
    pub fn delete_mut<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let new_tree = self.del(item).map(|(tree, _)| tree);
        self.replace_with(new_tree)
    }

    /// `None` means `item` wasn't in the tree.
    fn del<Q>(&self, item: &Q) -> Option<Removal<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Self::Empty => None,
            Self::Node(n) => n.del(item),
        }
    }
}

impl<T: Ord> Node<T> {
    fn del<Q>(&self, item: &Q) -> Option<Removal<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match item.cmp(self.item().borrow()) {
            Ordering::Less => {
                let (new_left, shrank) = self.left.tree().del(item)?;
                let node = self.with_children(new_left.into(), self.right.clone());
                Some(if shrank {
                    node.fix_left()
                } else {
                    (node.into_tree(), false)
                })
            }
            Ordering::Equal => Some(self.remove()),
            Ordering::Greater => {
                let (new_right, shrank) = self.right.tree().del(item)?;
                let node = self.with_children(self.left.clone(), new_right.into());
                Some(if shrank {
                    node.fix_right()
                } else {
                    (node.into_tree(), false)
                })
            }
        }
    }
}

impl<T> Node<T> {
    /// Removes this node's own item from the subtree rooted here.
    fn remove(&self) -> Removal<T> {
        match (self.left(), self.right()) {
            (None, None) => (Tree::Empty, self.color == Color::Black),

            // The only child of a black node is a red leaf. Painting it black
            // keeps the black height.
            (Some(only), None) | (None, Some(only)) => match only.color {
                Color::Red => (only.with_color(Color::Black).into_tree(), false),
                Color::Black => (only.clone().into_tree(), self.color == Color::Black),
            },

            // With two children we splice in this node's successor. That is,
            // the smallest item in this node's right subtree.
            (Some(_), Some(right)) => {
                let (successor, new_right, shrank) = right.delete_smallest();
                let node = Self::new(self.color, successor, self.left.clone(), new_right.into());
                if shrank {
                    node.fix_right()
                } else {
                    (node.into_tree(), false)
                }
            }
        }
    }

    /// Returns the smallest item and a new subtree without it.
    fn delete_smallest(&self) -> (Arc<T>, Tree<T>, bool) {
        match self.left() {
            None => {
                let (rest, shrank) = self.remove();
                (Arc::clone(&self.item), rest, shrank)
            }
            Some(left) => {
                let (smallest, new_left, shrank) = left.delete_smallest();
                let node = self.with_children(new_left.into(), self.right.clone());
                let (tree, shrank) = if shrank {
                    node.fix_left()
                } else {
                    (node.into_tree(), false)
                };
                (smallest, tree, shrank)
            }
        }
    }

    /// Restores the black height of a node whose left subtree just lost one
    /// black node. The returned flag is set when the whole subtree is still
    /// one short, which only happens when it had to push the deficit up.
    ///
    /// **Note** This takes `self` for the same reason `balance` does.
    fn fix_left(self) -> Removal<T> {
        if let Some(short) = self.left.as_red() {
            let left = short.with_color(Color::Black).into_child();
            return (Self { left, ..self }.into_tree(), false);
        }

        let sibling = match self.right() {
            Some(sibling) => sibling,
            None => unreachable!("a subtree that lost black height has no sibling"),
        };

        match sibling.color {
            // Rotate the red sibling up so that its (black) left child becomes
            // the new sibling. The red node moved down absorbs the deficit.
            Color::Red => {
                let inner = Self::new(
                    Color::Red,
                    Arc::clone(&self.item),
                    self.left.clone(),
                    sibling.left.clone(),
                );
                let (inner, _) = inner.fix_left();
                let node = Self::new(
                    Color::Black,
                    Arc::clone(&sibling.item),
                    inner.into(),
                    sibling.right.clone(),
                );
                (node.into_tree(), false)
            }
            Color::Black => {
                if let Some(far) = sibling.right.as_red() {
                    let left = Self::new(
                        Color::Black,
                        Arc::clone(&self.item),
                        self.left.clone(),
                        sibling.left.clone(),
                    );
                    let right = far.with_color(Color::Black);
                    let node = Self::new(
                        self.color,
                        Arc::clone(&sibling.item),
                        left.into_child(),
                        right.into_child(),
                    );
                    (node.into_tree(), false)
                } else if let Some(near) = sibling.left.as_red() {
                    let left = Self::new(
                        Color::Black,
                        Arc::clone(&self.item),
                        self.left.clone(),
                        near.left.clone(),
                    );
                    let right = Self::new(
                        Color::Black,
                        Arc::clone(&sibling.item),
                        near.right.clone(),
                        sibling.right.clone(),
                    );
                    let node = Self::new(
                        self.color,
                        Arc::clone(&near.item),
                        left.into_child(),
                        right.into_child(),
                    );
                    (node.into_tree(), false)
                } else {
                    let right = sibling.with_color(Color::Red).into_child();
                    let shrank = self.color == Color::Black;
                    let node = Self::new(Color::Black, Arc::clone(&self.item), self.left.clone(), right);
                    (node.into_tree(), shrank)
                }
            }
        }
    }

    /// The mirror image of [`fix_left`](Node::fix_left).
    fn fix_right(self) -> Removal<T> {
        if let Some(short) = self.right.as_red() {
            let right = short.with_color(Color::Black).into_child();
            return (Self { right, ..self }.into_tree(), false);
        }

        let sibling = match self.left() {
            Some(sibling) => sibling,
            None => unreachable!("a subtree that lost black height has no sibling"),
        };

        match sibling.color {
            Color::Red => {
                let inner = Self::new(
                    Color::Red,
                    Arc::clone(&self.item),
                    sibling.right.clone(),
                    self.right.clone(),
                );
                let (inner, _) = inner.fix_right();
                let node = Self::new(
                    Color::Black,
                    Arc::clone(&sibling.item),
                    sibling.left.clone(),
                    inner.into(),
                );
                (node.into_tree(), false)
            }
            Color::Black => {
                if let Some(far) = sibling.left.as_red() {
                    let left = far.with_color(Color::Black);
                    let right = Self::new(
                        Color::Black,
                        Arc::clone(&self.item),
                        sibling.right.clone(),
                        self.right.clone(),
                    );
                    let node = Self::new(
                        self.color,
                        Arc::clone(&sibling.item),
                        left.into_child(),
                        right.into_child(),
                    );
                    (node.into_tree(), false)
                } else if let Some(near) = sibling.right.as_red() {
                    let left = Self::new(
                        Color::Black,
                        Arc::clone(&sibling.item),
                        sibling.left.clone(),
                        near.left.clone(),
                    );
                    let right = Self::new(
                        Color::Black,
                        Arc::clone(&self.item),
                        near.right.clone(),
                        self.right.clone(),
                    );
                    let node = Self::new(
                        self.color,
                        Arc::clone(&near.item),
                        left.into_child(),
                        right.into_child(),
                    );
                    (node.into_tree(), false)
                } else {
                    let left = sibling.with_color(Color::Red).into_child();
                    let shrank = self.color == Color::Black;
                    let node = Self::new(Color::Black, Arc::clone(&self.item), left, self.right.clone());
                    (node.into_tree(), shrank)
                }
            }
        }
    }
}
