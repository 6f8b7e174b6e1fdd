use redblack::{Color, Node, Tree};

use quickcheck_macros::quickcheck;
use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of items in both.
fn do_ops<T>(ops: &[Op<T>], mut tree: Tree<T>, set: &mut BTreeSet<T>) -> Tree<T>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree = tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                tree = tree.delete(x);
                set.remove(x);
            }
        }
    }

    tree
}

fn red_nodes_have_black_children<T>(node: &Node<T>) -> bool {
    let is_red = |n: Option<&Node<T>>| n.map_or(false, |n| n.color() == Color::Red);
    let ok = node.color() == Color::Black || !(is_red(node.left()) || is_red(node.right()));

    ok && node.left().map_or(true, red_nodes_have_black_children)
        && node.right().map_or(true, red_nodes_have_black_children)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();

    let tree = do_ops(&ops, Tree::new(), &mut set);
    tree.iter().eq(set.iter()) && tree.validate().is_ok()
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
    let tree = do_ops(&ops, Tree::new(), &mut BTreeSet::new());
    let items = tree.to_vec();

    items.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn no_red_node_has_a_red_child(ops: Vec<Op<i8>>) -> bool {
    let tree = do_ops(&ops, Tree::new(), &mut BTreeSet::new());

    tree.root().map_or(true, |root| {
        root.color() == Color::Black && red_nodes_have_black_children(root)
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = xs.iter().fold(Tree::new(), |tree, x| tree.insert(*x));
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x);
    }
    for delete in &deletes {
        tree = tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.insert(*x).ptr_eq(&tree))
}

#[quickcheck]
fn absent_delete_changes_nothing(xs: Vec<i8>, y: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().filter(|x| *x != y).collect();

    tree.delete(&y).ptr_eq(&tree)
}

#[quickcheck]
fn insert_then_delete_round_trips(xs: Vec<i8>, y: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().filter(|x| *x != y).collect();
    let round_trip = tree.insert(y).delete(&y);

    round_trip.to_vec() == tree.to_vec() && round_trip.validate().is_ok()
}

#[quickcheck]
fn count_law(xs: Vec<i8>, y: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let present = usize::from(tree.contains(&y));

    tree.insert(y).count() == tree.count() + 1 - present
        && tree.delete(&y).count() == tree.count() - present
}

#[quickcheck]
fn neighbors_match_a_sorted_vec(xs: Vec<i16>) -> bool {
    let tree: Tree<i16> = xs.iter().copied().collect();
    let sorted = tree.to_vec();

    sorted.iter().enumerate().all(|(i, x)| {
        let successor = tree.successor(x).map(|n| *n.item());
        let predecessor = tree.predecessor(x).map(|n| *n.item());

        successor == sorted.get(i + 1).copied()
            && predecessor == i.checked_sub(1).map(|j| sorted[j])
    })
}

#[quickcheck]
fn bulk_build_matches_incremental(xs: Vec<i16>) -> bool {
    let bulk: Tree<i16> = xs.iter().copied().collect();
    let incremental = xs.iter().fold(Tree::new(), |tree, x| tree.insert(*x));

    bulk == incremental && bulk.validate().is_ok()
}

#[quickcheck]
fn depth_is_bounded_by_height(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter()
        .all(|x| tree.depth(x).zip(tree.height()).map_or(false, |(d, h)| d <= h))
}
