//! This crate exposes a persistent red-black tree: an ordered set whose
//! "modifying" operations return new versions of the tree while every old
//! version stays valid.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of item (the item that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    item less than its own item.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    item greater than its own item.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! items in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## Red-Black Tree
//!
//! With clever construction the height of a BST can be limited to `O(lg N)`
//! where `N` is the number of nodes in the tree. A red-black tree colors
//! every `Node` red or black and keeps two more invariants:
//!
//! 1. A red `Node` never has a red child.
//! 2. Every path from a `Node` down to an empty subtree passes through the
//!    same number of black `Node`s.
//!
//! Together these mean the longest path is at most twice the shortest.
//!
//! ## Persistence
//!
//! Nodes are never changed once built. Inserting or deleting copies only the
//! nodes on the search path and shares everything else with the previous
//! version, so keeping old versions around is cheap.
//!
//! ```
//! use redblack::{rbt_set, Tree};
//!
//! let tree = rbt_set![5, 1, 3];
//! let newer = tree.insert(4).delete(&1);
//!
//! assert_eq!(tree.to_vec(), vec![1, 3, 5]);
//! assert_eq!(newer.to_vec(), vec![3, 4, 5]);
//! assert_eq!(newer.validate(), Ok(()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod invariant;
pub mod tree;


pub use invariant::InvariantViolation;
pub use tree::{Color, Iter, Node, Tree, Visitor};

/// Creates a [`Tree`] containing the given items, building it in one pass
/// the way `collect` does. Of several equal items the first one wins:
///
/// ```
/// use redblack::{rbt_set, Tree};
///
/// let tree = Tree::new().insert(1).insert(2).insert(3);
///
/// assert_eq!(rbt_set![3, 2, 1, 2], tree);
/// ```
#[macro_export]
macro_rules! rbt_set {
    ($($e:expr),* $(,)?) => {
        <$crate::Tree<_> as ::core::iter::FromIterator<_>>::from_iter([$($e),*])
    };
}
