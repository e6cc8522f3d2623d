//! Unbalanced binary search tree.

use std::cmp::Ordering;

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

/// An ordered set as a plain (unbalanced) binary search tree.
///
/// Average-case O(log n) insert/search/delete; degenerates to O(n) on sorted
/// insertion order - that pathology is exactly what [`AvlTree`](super::AvlTree)
/// fixes. Duplicate inserts are ignored.
///
/// # Example
///
/// ```
/// use algor_core::search::BinarySearchTree;
///
/// let mut bst = BinarySearchTree::new();
/// for key in [50, 30, 20, 40, 70, 60, 80] {
///     bst.insert(key);
/// }
/// assert!(bst.contains(&60));
/// bst.delete(&20);
/// assert_eq!(bst.in_order(), vec![&30, &40, &50, &60, &70, &80]);
/// ```
pub struct BinarySearchTree<K: Ord> {
    root: Link<K>,
    n: usize,
}

impl<K: Ord> BinarySearchTree<K> {
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

    /// Inserts `key`; duplicates are ignored.
    pub fn insert(&mut self, key: K) {
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(Box::new(Node {
                        key,
                        left: None,
                        right: None,
                    }));
                    self.n += 1;
                    return;
                }
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => return,
                },
            }
        }
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

    /// Returns the smallest key, or `None` if the tree is empty.
    #[must_use]
    pub fn min(&self) -> Option<&K> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.key)
    }

    /// Removes `key` from the tree. Returns true if it was present.
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
        match key.cmp(&node.key) {
            Ordering::Less => Self::delete_node(&mut node.left, key),
            Ordering::Greater => Self::delete_node(&mut node.right, key),
            Ordering::Equal => {
                let node = link.take().expect("matched above");
                *link = Self::join(node.left, node.right);
                true
            }
        }
    }

    /// Joins two subtrees where every key of `left` precedes every key of
    /// `right`: the in-order successor (min of `right`) becomes the new root.
    fn join(left: Link<K>, right: Link<K>) -> Link<K> {
        match (left, right) {
            (None, right) => right,
            (left, None) => left,
            (left, Some(right)) => {
                let (rest, mut successor) = Self::delete_min_node(right);
                successor.left = left;
                successor.right = rest;
                Some(successor)
            }
        }
    }

    /// Splits the minimum node off a subtree, returning (remaining subtree,
    /// detached minimum node).
    fn delete_min_node(mut node: Box<Node<K>>) -> (Link<K>, Box<Node<K>>) {
        if node.left.is_none() {
            let rest = node.right.take();
            return (rest, node);
        }
        let mut parent = &mut *node;
        // Descend to the parent of the leftmost node
        while parent.left.as_ref().expect("checked above").left.is_some() {
            parent = parent.left.as_mut().expect("checked above");
        }
        let mut min = parent.left.take().expect("leftmost node");
        parent.left = min.right.take();
        (Some(node), min)
    }

    /// Returns references to the keys in ascending order.
    #[must_use]
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.n);
        Self::walk(self.root.as_deref(), &mut keys);
        keys
    }

    fn walk<'a>(node: Option<&'a Node<K>>, keys: &mut Vec<&'a K>) {
        if let Some(node) = node {
            Self::walk(node.left.as_deref(), keys);
            keys.push(&node.key);
            Self::walk(node.right.as_deref(), keys);
        }
    }

    /// Returns the height of the tree (-1 for empty, 0 for a single node).
    #[must_use]
    pub fn height(&self) -> i32 {
        Self::node_height(self.root.as_deref())
    }

    fn node_height(node: Option<&Node<K>>) -> i32 {
        match node {
            None => -1,
            Some(node) => {
                1 + Self::node_height(node.left.as_deref())
                    .max(Self::node_height(node.right.as_deref()))
            }
        }
    }
}

impl<K: Ord> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}
