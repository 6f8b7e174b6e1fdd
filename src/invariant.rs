//! Checks that a tree really is a red-black tree. Every tree this crate hands
//! out should pass; these checks exist for tests and for callers who want to
//! assert it.

use crate::tree::{Color, Node, Tree};

/// The first broken invariant [`Tree::validate`] came across.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// An in-order walk didn't produce strictly ascending items.
    #[error("items are not in strictly ascending order")]
    BinarySearch,
    /// A red node has a red child.
    #[error("a red node has a red child")]
    RedNodeRedChild,
    /// Two paths down from the same node pass through a different number of
    /// black nodes.
    #[error("black heights differ below a node: {left} on the left, {right} on the right")]
    BlackHeight {
        /// Black nodes on the paths through the left subtree.
        left: usize,
        /// Black nodes on the paths through the right subtree.
        right: usize,
    },
    /// The root is red.
    #[error("the root is red")]
    RedRoot,
}

impl<T: Ord> Tree<T> {
    /// Checks the ordering and red-black invariants of the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let tree: Tree<i32> = (0..100).collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let result = self.check();
        if let Err(violation) = &result {
            log::debug!("invalid tree: {}", violation);
        }
        result
    }

    fn check(&self) -> Result<(), InvariantViolation> {
        let root = match self.root() {
            Some(root) => root,
            None => return Ok(()),
        };

        let mut items = self.iter();
        if let Some(mut previous) = items.next() {
            for item in items {
                if previous >= item {
                    return Err(InvariantViolation::BinarySearch);
                }
                previous = item;
            }
        }

        if !red_nodes_have_black_children(root) {
            return Err(InvariantViolation::RedNodeRedChild);
        }
        black_height(root)?;
        if root.color() == Color::Red {
            return Err(InvariantViolation::RedRoot);
        }

        Ok(())
    }
}

fn is_red<T>(node: Option<&Node<T>>) -> bool {
    node.map_or(false, |n| n.color() == Color::Red)
}

fn red_nodes_have_black_children<T>(node: &Node<T>) -> bool {
    let self_ok =
        node.color() == Color::Black || !(is_red(node.left()) || is_red(node.right()));

    self_ok
        && node.left().map_or(true, red_nodes_have_black_children)
        && node.right().map_or(true, red_nodes_have_black_children)
}

/// The number of black nodes on every path from `node` down to an empty
/// subtree, `node` included.
fn black_height<T>(node: &Node<T>) -> Result<usize, InvariantViolation> {
    let left = node.left().map_or(Ok(0), black_height)?;
    let right = node.right().map_or(Ok(0), black_height)?;

    if left == right {
        Ok(left + usize::from(node.color() == Color::Black))
    } else {
        Err(InvariantViolation::BlackHeight { left, right })
    }
}
