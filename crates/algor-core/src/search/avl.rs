//! AVL tree: a height-balanced binary search tree.

use std::cmp::Ordering;

use algor_common::{Error, Result};

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    /// Height of the subtree rooted here; a leaf has height 0.
    height: i32,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 0,
            left: None,
            right: None,
        })
    }
}

/// An ordered set as an AVL tree.
///
/// After every insert and delete, rotations restore the balance invariant:
/// the heights of any node's subtrees differ by at most one. That pins the
/// tree height to O(log n), so search, insert, and delete are all O(log n)
/// worst case - unlike [`BinarySearchTree`](super::BinarySearchTree), which
/// degenerates on sorted input.
///
/// The balance factor of a node is `height(right) - height(left)`; a factor
/// outside `[-1, 1]` picks one of the four rotation cases (left-left,
/// left-right, right-right, right-left).
///
/// # Example
///
/// ```
/// use algor_core::search::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in [10, 50, 40, 25, 30, 20] {
///     tree.insert(key).unwrap();
/// }
/// // Six keys still fit in height 2
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.pre_order(), vec![&25, &10, &20, &40, &30, &50]);
/// ```
pub struct AvlTree<K: Ord> {
    root: Link<K>,
    n: usize,
}

impl<K: Ord> AvlTree<K> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { root: None, n: 0 }
    }

    /// Returns the number of keys in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns true if the tree holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree (-1 for empty, 0 for a single node).
    #[must_use]
    pub fn height(&self) -> i32 {
        Self::height_of(&self.root)
    }

    /// Is `key` in the tree?
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Inserts `key`, rebalancing along the insertion path.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is already in the tree.
    pub fn insert(&mut self, key: K) -> Result<()> {
        Self::insert_node(&mut self.root, key)?;
        self.n += 1;
        Ok(())
    }

    fn insert_node(link: &mut Link<K>, key: K) -> Result<()> {
        let Some(node) = link else {
            *link = Some(Node::leaf(key));
            return Ok(());
        };
        match key.cmp(&node.key) {
            Ordering::Less => Self::insert_node(&mut node.left, key)?,
            Ordering::Greater => Self::insert_node(&mut node.right, key)?,
            Ordering::Equal => return Err(Error::DuplicateKey),
        }
        Self::rebalance_link(link);
        Ok(())
    }

    /// Returns references to the keys in ascending order.
    #[must_use]
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.n);
        Self::walk_in_order(self.root.as_deref(), &mut keys);
        keys
    }

    /// Returns references to the keys in preorder (root before subtrees).
    #[must_use]
    pub fn pre_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.n);
        Self::walk_pre_order(self.root.as_deref(), &mut keys);
        keys
    }

    fn walk_in_order<'a>(node: Option<&'a Node<K>>, keys: &mut Vec<&'a K>) {
        if let Some(node) = node {
            Self::walk_in_order(node.left.as_deref(), keys);
            keys.push(&node.key);
            Self::walk_in_order(node.right.as_deref(), keys);
        }
    }

    fn walk_pre_order<'a>(node: Option<&'a Node<K>>, keys: &mut Vec<&'a K>) {
        if let Some(node) = node {
            keys.push(&node.key);
            Self::walk_pre_order(node.left.as_deref(), keys);
            Self::walk_pre_order(node.right.as_deref(), keys);
        }
    }

    fn height_of(link: &Link<K>) -> i32 {
        link.as_ref().map_or(-1, |node| node.height)
    }

    /// Balance factor: positive means right-heavy.
    fn balance_factor(node: &Node<K>) -> i32 {
        Self::height_of(&node.right) - Self::height_of(&node.left)
    }

    fn update_height(node: &mut Node<K>) {
        node.height = 1 + Self::height_of(&node.left).max(Self::height_of(&node.right));
    }

    /// Rebalances the node behind `link` in place.
    fn rebalance_link(link: &mut Link<K>) {
        let node = link.take().expect("rebalance target exists");
        *link = Some(Self::rebalance(node));
    }

    fn rebalance(mut node: Box<Node<K>>) -> Box<Node<K>> {
        Self::update_height(&mut node);
        let balance = Self::balance_factor(&node);
        if balance > 1 {
            let right = node.right.as_ref().expect("right-heavy");
            if Self::height_of(&right.right) >= Self::height_of(&right.left) {
                // Right-right: single left rotation
                node = Self::rotate_left(node);
            } else {
                // Right-left: rotate the child right, then this node left
                let right = node.right.take().expect("right-heavy");
                node.right = Some(Self::rotate_right(right));
                node = Self::rotate_left(node);
            }
        } else if balance < -1 {
            let left = node.left.as_ref().expect("left-heavy");
            if Self::height_of(&left.left) >= Self::height_of(&left.right) {
                // Left-left: single right rotation
                node = Self::rotate_right(node);
            } else {
                // Left-right: rotate the child left, then this node right
                let left = node.left.take().expect("left-heavy");
                node.left = Some(Self::rotate_left(left));
                node = Self::rotate_right(node);
            }
        }
        node
    }

    /// ```text
    ///     y              x
    ///    /      ->        \
    ///   x        y
    ///    \      /
    ///     z    z
    /// ```
    fn rotate_right(mut y: Box<Node<K>>) -> Box<Node<K>> {
        let mut x = y.left.take().expect("rotation needs a left child");
        y.left = x.right.take();
        Self::update_height(&mut y);
        x.right = Some(y);
        Self::update_height(&mut x);
        x
    }

    /// ```text
    ///   y                  x
    ///    \       ->       /
    ///     x              y
    ///    /                \
    ///   z                  z
    /// ```
    fn rotate_left(mut y: Box<Node<K>>) -> Box<Node<K>> {
        let mut x = y.right.take().expect("rotation needs a right child");
        y.right = x.left.take();
        Self::update_height(&mut y);
        x.left = Some(y);
        Self::update_height(&mut x);
        x
    }
}

impl<K: Ord + Clone> AvlTree<K> {
    /// Removes `key`, rebalancing along the deletion path. Returns true if
    /// the key was present.
    ///
    /// A node with two children swaps in its in-order successor's key, then
    /// deletes that key from the right subtree (hence the `Clone` bound).
    pub fn delete(&mut self, key: &K) -> bool {
        let removed = Self::delete_node(&mut self.root, key);
        if removed {
            self.n -= 1;
        }
        removed
    }

    fn delete_node(link: &mut Link<K>, key: &K) -> bool {
        let Some(node) = link else {
            return false;
        };
        let removed = match key.cmp(&node.key) {
            Ordering::Less => Self::delete_node(&mut node.left, key),
            Ordering::Greater => Self::delete_node(&mut node.right, key),
            Ordering::Equal => {
                if node.left.is_none() || node.right.is_none() {
                    let node = link.take().expect("matched above");
                    *link = if node.left.is_some() {
                        node.left
                    } else {
                        node.right
                    };
                } else {
                    // Two children: adopt the in-order successor's key and
                    // delete it from the right subtree
                    let successor =
                        Self::min_key(node.right.as_deref().expect("two children")).clone();
                    Self::delete_node(&mut node.right, &successor);
                    node.key = successor;
                }
                true
            }
        };
        if removed && link.is_some() {
            Self::rebalance_link(link);
        }
        removed
    }

    fn min_key(node: &Node<K>) -> &K {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        &current.key
    }
}

impl<K: Ord> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_balanced<K: Ord>(tree: &AvlTree<K>) {
        fn check<K>(link: &Link<K>) -> i32 {
            match link {
                None => -1,
                Some(node) => {
                    let lh = check(&node.left);
                    let rh = check(&node.right);
                    assert!((rh - lh).abs() <= 1, "balance invariant violated");
                    assert_eq!(node.height, 1 + lh.max(rh), "stale height");
                    node.height
                }
            }
        }
        check(&tree.root);
    }

    /// Inserting 10, 50, 40, 25, 30, 20 produces
    /// ```text
    ///      25
    ///     /  \
    ///   10    40
    ///     \   / \
    ///    20  30  50
    /// ```
    fn demo_tree() -> AvlTree<i32> {
        let mut tree = AvlTree::new();
        for key in [10, 50, 40, 25, 30, 20] {
            tree.insert(key).unwrap();
        }
        tree
    }

    #[test]
    fn test_demo_shape() {
        let tree = demo_tree();
        assert_eq!(tree.pre_order(), vec![&25, &10, &20, &40, &30, &50]);
        assert_eq!(tree.in_order(), vec![&10, &20, &25, &30, &40, &50]);
        assert_eq!(tree.height(), 2);
        assert_balanced(&tree);
    }

    #[test]
    fn test_duplicate_insert_is_error() {
        let mut tree = demo_tree();
        assert_eq!(tree.insert(25), Err(Error::DuplicateKey));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_sorted_insertion_stays_logarithmic() {
        let mut tree = AvlTree::new();
        for key in 0..1024 {
            tree.insert(key).unwrap();
        }
        assert_eq!(tree.len(), 1024);
        assert_eq!(tree.height(), 10); // perfectly balanced: 2^10 = 1024
        assert_balanced(&tree);
    }

    #[test]
    fn test_delete_rebalances() {
        let mut tree = demo_tree();
        assert!(tree.delete(&20));
        assert!(tree.delete(&40));
        assert_eq!(tree.in_order(), vec![&10, &25, &30, &50]);
        assert_balanced(&tree);
    }

    #[test]
    fn test_delete_two_child_node_uses_successor() {
        let mut tree = demo_tree();
        assert!(tree.delete(&25)); // the root; both children present
        assert_eq!(tree.in_order(), vec![&10, &20, &30, &40, &50]);
        assert!(!tree.contains(&25));
        assert_balanced(&tree);
    }

    #[test]
    fn test_delete_absent_key() {
        let mut tree = demo_tree();
        assert!(!tree.delete(&99));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_delete_all_then_reuse() {
        let mut tree = demo_tree();
        for key in [10, 50, 40, 25, 30, 20] {
            assert!(tree.delete(&key));
            assert_balanced(&tree);
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        tree.insert(7).unwrap();
        assert!(tree.contains(&7));
    }

    #[test]
    fn test_contains() {
        let tree = demo_tree();
        assert!(tree.contains(&10));
        assert!(tree.contains(&50));
        assert!(!tree.contains(&15));
    }
}
