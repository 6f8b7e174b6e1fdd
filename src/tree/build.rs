use std::sync::Arc;

use super::{Child, Color, Node, Tree};

impl<T: Ord> Tree<T> {
    /// Builds a balanced tree directly from items that are already in
    /// strictly ascending order, without any rebalancing. This is linear in
    /// the number of items where inserting them one at a time is not.
    ///
    /// Passing unsorted or duplicated items breaks the tree's ordering. Debug
    /// builds panic when that happens; use `collect` to build from anything
    /// else.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![0, 5, 10, 15, 20]);
    ///
    /// assert_eq!(tree.to_vec(), vec![0, 5, 10, 15, 20]);
    /// assert_eq!(tree.height(), Some(2));
    /// ```
    pub fn from_sorted<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        debug_assert!(
            items.windows(2).all(|w| w[0] < w[1]),
            "items must be strictly ascending"
        );

        if items.is_empty() {
            return Self::Empty;
        }

        // Middle splitting fills every level but the deepest one, so only the
        // nodes down there need to be red.
        let height = items.len().ilog2() as usize;
        let tree = Builder { red_depth: height }.split(&items, 0);

        log::trace!("built a tree of {} items with height {}", items.len(), height);
        tree
    }
}

struct Builder {
    red_depth: usize,
}

impl Builder {
    fn color(&self, depth: usize) -> Color {
        if depth > 0 && depth == self.red_depth {
            Color::Red
        } else {
            Color::Black
        }
    }

    fn leaf<T>(&self, item: &Arc<T>, depth: usize) -> Child<T> {
        Node::leaf(self.color(depth), Arc::clone(item)).into_child()
    }

    /// Builds the subtree for `items`, whose root sits at `depth`.
    fn split<T>(&self, items: &[Arc<T>], depth: usize) -> Tree<T> {
        let color = self.color(depth);

        match items {
            [] => Tree::Empty,
            [item] => Node::leaf(color, Arc::clone(item)).into_tree(),
            [low, high] => Node::new(
                color,
                Arc::clone(low),
                Child::empty(),
                self.leaf(high, depth + 1),
            )
            .into_tree(),
            [low, middle, high] => Node::new(
                color,
                Arc::clone(middle),
                self.leaf(low, depth + 1),
                self.leaf(high, depth + 1),
            )
            .into_tree(),
            _ => {
                let mid = items.len() / 2;
                let left = self.split(&items[..mid], depth + 1);
                let right = self.split(&items[mid + 1..], depth + 1);

                Node::new(color, Arc::clone(&items[mid]), left.into(), right.into()).into_tree()
            }
        }
    }
}
