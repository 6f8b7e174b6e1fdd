//! A persistent red-black tree holding an ordered set of items. Any operation
//! that one would expect to modify the tree (e.g. `insert` or `delete`)
//! instead returns a new tree that references every untouched subtree of the
//! original.
//!
//! # Examples
//!
//! ```
//! use redblack::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(1);
//!
//! // The new tree has the item but the old one doesn't.
//! assert!(new_tree.contains(&1));
//! assert!(!tree.contains(&1));
//!
//! // And delete it for good measure.
//! let newest_tree = new_tree.delete(&1);
//!
//! // All history is preserved.
//! assert!(!newest_tree.contains(&1));
//! assert!(new_tree.contains(&1));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::sync::Arc;

mod build;
mod delete;
mod insert;
mod iter;
mod neighbor;
mod query;
mod walk;

pub use iter::Iter;
pub use walk::Visitor;

/// The color of a [`Node`]. Colors are what keep the tree balanced: a red node
/// never has a red child and every path from a node down to an empty subtree
/// passes through the same number of black nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red nodes don't count towards the black height.
    Red,
    /// The root of every tree handed out by this crate is black.
    Black,
}

/// A persistent red-black tree. This can be used for inserting, finding,
/// and deleting items. Note that this data structure is functional -
/// operations that would modify the tree instead return a new tree.
#[derive(Debug)]
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Empty,
    /// A `Node` that has a color, an item and two children (which are
    /// both `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Generates a `Tree` holding exactly one (black) item.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Color, Tree};
    ///
    /// let tree = Tree::singleton(5);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.item(), &5);
    /// assert_eq!(root.color(), Color::Black);
    /// assert!(root.is_leaf());
    /// ```
    pub fn singleton(item: T) -> Self {
        Self::Node(Node::leaf(Color::Black, Arc::new(item)))
    }

    /// The root node of this tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n),
        }
    }

    /// `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The number of items in the tree. This walks the whole tree.
    pub fn count(&self) -> usize {
        self.root().map_or(0, Node::count)
    }

    /// How many edges are on the longest path from the root to a leaf. A
    /// single item tree has a height of `Some(0)` and an empty tree has no
    /// height at all.
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// Whether two trees share the very same root, meaning one was derived from
    /// the other by an operation that didn't change anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(2);
    ///
    /// assert!(tree.ptr_eq(&tree.insert(1)));
    /// assert!(tree.ptr_eq(&tree.delete(&3)));
    /// assert!(!tree.ptr_eq(&tree.insert(3)));
    /// ```
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Node(a), Self::Node(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Returns a new tree whose root is black. Blackening the root can't
    /// introduce a red-red violation and raises every path's black height by
    /// the same amount.
    fn into_black_root(self) -> Self {
        match self {
            Self::Node(n) if n.color == Color::Red => Self::Node(Node {
                color: Color::Black,
                ..n
            }),
            tree => tree,
        }
    }

    /// Moves `self` to `new_tree`, if there is one, reporting whether it did.
    fn replace_with(&mut self, new_tree: Option<Self>) -> bool {
        match new_tree {
            Some(tree) => {
                *self = tree.into_black_root();
                true
            }
            None => false,
        }
    }
}

/// A shared reference to a subtree. Many versions of a tree may point at the
/// same `Child`, which is why nothing behind it is ever mutated.
#[derive(Debug)]
struct Child<T>(Arc<Tree<T>>);

impl<T> Clone for Child<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Child<T> {
    fn empty() -> Self {
        Self(Arc::new(Tree::Empty))
    }

    fn tree(&self) -> &Tree<T> {
        &self.0
    }

    fn node(&self) -> Option<&Node<T>> {
        self.0.root()
    }

    /// The child's root, but only if it is red.
    fn as_red(&self) -> Option<&Node<T>> {
        self.node().filter(|n| n.color == Color::Red)
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> From<Tree<T>> for Child<T> {
    fn from(tree: Tree<T>) -> Self {
        Self(Arc::new(tree))
    }
}

/// A `Node` has a color, an item that is used for searching/sorting and
/// two children although those children may be [`Empty`][Tree::Empty].
#[derive(Debug)]
pub struct Node<T> {
    color: Color,
    item: Arc<T>,
    left: Child<T>,
    right: Child<T>,
}

/// Manual implementation of `Clone` so we don't clone items when the generic
/// parameter isn't `Clone` itself.
///
/// Note the comment on generic structs in
/// [the docs][<https://doc.rust-lang.org/std/clone/trait.Clone.html#derivable>].
impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            color: self.color,
            item: Arc::clone(&self.item),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T> Node<T> {
    fn new(color: Color, item: Arc<T>, left: Child<T>, right: Child<T>) -> Self {
        Self {
            color,
            item,
            left,
            right,
        }
    }

    fn leaf(color: Color, item: Arc<T>) -> Self {
        Self::new(color, item, Child::empty(), Child::empty())
    }

    /// Create a new Node with the same color and item as this node
    /// but with the given children.
    fn with_children(&self, left: Child<T>, right: Child<T>) -> Self {
        Self::new(self.color, Arc::clone(&self.item), left, right)
    }

    fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    fn into_tree(self) -> Tree<T> {
        Tree::Node(self)
    }

    fn into_child(self) -> Child<T> {
        Child::from(self.into_tree())
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        self.color == other.color
            && Arc::ptr_eq(&self.item, &other.item)
            && self.left.ptr_eq(&other.left)
            && self.right.ptr_eq(&other.right)
    }

    /// The item stored in this node.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// The color of this node.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The left subtree, or `None` if it is empty.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.node()
    }

    /// The right subtree, or `None` if it is empty.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.node()
    }

    /// `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.degree() == 0
    }

    /// The number of non-empty children: 0, 1 or 2.
    pub fn degree(&self) -> usize {
        usize::from(self.left().is_some()) + usize::from(self.right().is_some())
    }

    /// The number of nodes in the subtree rooted here, this one included.
    pub fn count(&self) -> usize {
        1 + self.left().map_or(0, Node::count) + self.right().map_or(0, Node::count)
    }

    /// How many edges are on the longest path down to a leaf. A leaf has a
    /// height of zero.
    pub fn height(&self) -> usize {
        let left = self.left().map(Node::height);
        let right = self.right().map(Node::height);
        left.max(right).map_or(0, |h| h + 1)
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    /// Builds a tree in one pass with [`Tree::from_sorted`]. Input that isn't
    /// strictly ascending is sorted and deduplicated first. Of several equal
    /// items the first one wins, just as with [`Tree::insert`].
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();

        if !items.windows(2).all(|w| w[0] < w[1]) {
            log::trace!("sorting {} unordered items before bulk build", items.len());
            // Stable, so `dedup` keeps the earliest of each run of equal items.
            items.sort();
            items.dedup();
        }

        Self::from_sorted(items)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_mut(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Two trees are equal when they hold the same items, however they are shaped.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Hash> Hash for Tree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0_usize;
        for item in self {
            item.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;

        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }

        f.write_str("}")
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    //! Trees serialize as the ascending sequence of their items.

    use super::Tree;
    use ::serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
    use ::serde::ser::{Serialize, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    impl<T: Serialize> Serialize for Tree<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self)
        }
    }

    impl<'de, T> Deserialize<'de> for Tree<T>
    where
        T: Ord + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Tree<T>, D::Error> {
            deserializer.deserialize_seq(TreeVisitor {
                phantom: PhantomData,
            })
        }
    }

    struct TreeVisitor<T> {
        phantom: PhantomData<T>,
    }

    impl<'de, T> Visitor<'de> for TreeVisitor<T>
    where
        T: Ord + Deserialize<'de>,
    {
        type Value = Tree<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a sequence")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Tree<T>, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));

            while let Some(item) = seq.next_element()? {
                items.push(item);
            }

            Ok(items.into_iter().collect())
        }
    }

}
