use std::iter::FusedIterator;

use super::{Node, Tree};

/// An iterator over the items of a [`Tree`] in ascending order. It is lazy:
/// creating it only walks down to the smallest item, and each step walks at
/// most one path.
pub struct Iter<'a, T> {
    // The current node is on top of the stack, and below it are those
    // ancestors that hold it in their left subtree. Items increase from the
    // top of the stack to the bottom.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        if let Some(root) = tree.root() {
            iter.dig(root);
        }
        iter
    }

    /// Pushes `node` and its chain of left descendants.
    fn dig(&mut self, node: &'a Node<T>) {
        let mut node = Some(node);
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.dig(right);
        }
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
