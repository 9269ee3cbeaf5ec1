//! AVL tree with rotation counting
//!
//! Every node owns its children outright. Insert and delete descend
//! recursively, taking each subtree by value and handing back the
//! (possibly rotated) replacement, so rebalancing happens bottom-up on
//! the way out of the recursion.
//!
//! The tree counts elementary rotations for its whole lifetime; a double
//! rotation counts as two.

use std::cmp::Ordering;
use std::fmt;

use algolab_core::{parse_key, LabError};

type Link<K> = Option<Box<AvlNode<K>>>;

/// A tree node: key, cached subtree height and owned children
#[derive(Debug, Clone)]
pub struct AvlNode<K> {
    key: K,
    height: usize,
    left: Link<K>,
    right: Link<K>,
}

impl<K> AvlNode<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Cached height of the subtree rooted here; a leaf has height 1
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&AvlNode<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&AvlNode<K>> {
        self.right.as_deref()
    }

    /// `height(left) - height(right)`
    pub fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |node| node.balance())
}

/// Self-balancing binary search tree over unique keys
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
    rotation_count: u64,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
            rotation_count: 0,
        }
    }
}

impl<K: Ord + Clone> AvlTree<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree by inserting `keys` in order, skipping duplicates
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        keys.into_iter().collect()
    }

    /// Insert a key, returning `false` when it was already present
    ///
    /// Duplicates leave the tree untouched.
    pub fn insert_key(&mut self, key: K) -> bool {
        let mut inserted = false;
        let root = self.root.take();
        self.root = Some(insert(root, key, &mut self.rotation_count, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Delete a key, returning `false` when it was absent
    pub fn delete_key(&mut self, key: &K) -> bool {
        let mut removed = false;
        let root = self.root.take();
        self.root = delete(root, key, &mut self.rotation_count, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Keys in ascending order
    pub fn in_order(&self) -> Vec<&K> {
        fn walk<'a, K>(link: &'a Link<K>, out: &mut Vec<&'a K>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(&node.key);
                walk(&node.right, out);
            }
        }
        let mut keys = Vec::with_capacity(self.len);
        walk(&self.root, &mut keys);
        keys
    }

    /// Verify cached heights, the balance bound and key ordering
    ///
    /// Recomputes everything from scratch; intended for tests and for
    /// the harness's correctness checks, not for hot paths.
    pub fn check_invariants(&self) -> bool {
        fn verify<K>(link: &Link<K>) -> Option<usize> {
            match link {
                None => Some(0),
                Some(node) => {
                    let left = verify(&node.left)?;
                    let right = verify(&node.right)?;
                    let expected = 1 + left.max(right);
                    if node.height != expected || left.abs_diff(right) > 1 {
                        return None;
                    }
                    Some(expected)
                }
            }
        }

        let keys = self.in_order();
        let ordered = keys.windows(2).all(|pair| pair[0] < pair[1]);
        ordered && keys.len() == self.len && verify(&self.root).is_some()
    }
}

impl<K> AvlTree<K> {
    pub fn root(&self) -> Option<&AvlNode<K>> {
        self.root.as_deref()
    }

    /// Elementary rotations performed since the tree was created
    pub fn rotation_count(&self) -> u64 {
        self.rotation_count
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty
    pub fn height(&self) -> usize {
        height(&self.root)
    }
}

impl AvlTree<i64> {
    /// Parse `input` as an integer key and insert it
    ///
    /// Malformed input fails with `InvalidKey` and leaves the tree as is.
    pub fn insert_parsed(&mut self, input: &str) -> Result<bool, LabError> {
        let key = parse_key(input)?;
        Ok(self.insert_key(key))
    }

    /// Parse `input` as an integer key and delete it
    pub fn delete_parsed(&mut self, input: &str) -> Result<bool, LabError> {
        let key = parse_key(input)?;
        Ok(self.delete_key(&key))
    }
}

impl<K: Ord + Clone> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert_key(key);
        }
    }
}

impl<K: Ord + Clone> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Sideways rendering: right subtree above, left below, one node per line
impl<K: fmt::Display> fmt::Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn draw<K: fmt::Display>(
            link: &Link<K>,
            depth: usize,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            if let Some(node) = link {
                draw(&node.right, depth + 1, f)?;
                writeln!(f, "{:indent$}{} (h={})", "", node.key, node.height, indent = depth * 4)?;
                draw(&node.left, depth + 1, f)?;
            }
            Ok(())
        }
        draw(&self.root, 0, f)
    }
}

fn insert<K: Ord>(
    link: Link<K>,
    key: K,
    rotations: &mut u64,
    inserted: &mut bool,
) -> Box<AvlNode<K>> {
    let mut node = match link {
        None => {
            *inserted = true;
            return AvlNode::leaf(key);
        }
        Some(node) => node,
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert(node.left.take(), key, rotations, inserted)),
        Ordering::Greater => {
            node.right = Some(insert(node.right.take(), key, rotations, inserted))
        }
        Ordering::Equal => return node,
    }

    rebalance(node, rotations)
}

fn delete<K: Ord + Clone>(
    link: Link<K>,
    key: &K,
    rotations: &mut u64,
    removed: &mut bool,
) -> Link<K> {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key, rotations, removed),
        Ordering::Greater => node.right = delete(node.right.take(), key, rotations, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, right) => return right,
                (left, None) => return left,
                (Some(left), Some(right)) => {
                    let successor = min_key(&right).clone();
                    let mut successor_removed = false;
                    node.left = Some(left);
                    node.right = delete(Some(right), &successor, rotations, &mut successor_removed);
                    node.key = successor;
                }
            }
        }
    }

    Some(rebalance(node, rotations))
}

fn min_key<K>(node: &AvlNode<K>) -> &K {
    let mut cur = node;
    while let Some(left) = cur.left.as_deref() {
        cur = left;
    }
    &cur.key
}

fn rebalance<K>(mut node: Box<AvlNode<K>>, rotations: &mut u64) -> Box<AvlNode<K>> {
    node.update_height();
    let factor = node.balance();

    if factor > 1 {
        if balance(&node.left) < 0 {
            node.left = node.left.take().map(|left| rotate_left(left, rotations));
        }
        return rotate_right(node, rotations);
    }

    if factor < -1 {
        if balance(&node.right) > 0 {
            node.right = node.right.take().map(|right| rotate_right(right, rotations));
        }
        return rotate_left(node, rotations);
    }

    node
}

fn rotate_right<K>(mut z: Box<AvlNode<K>>, rotations: &mut u64) -> Box<AvlNode<K>> {
    let Some(mut y) = z.left.take() else {
        return z;
    };
    z.left = y.right.take();
    z.update_height();
    y.right = Some(z);
    y.update_height();
    *rotations += 1;
    y
}

fn rotate_left<K>(mut z: Box<AvlNode<K>>, rotations: &mut u64) -> Box<AvlNode<K>> {
    let Some(mut y) = z.right.take() else {
        return z;
    };
    z.right = y.left.take();
    z.update_height();
    y.left = Some(z);
    y.update_height();
    *rotations += 1;
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_insert_rotates_once() {
        let mut tree: AvlTree<i64> = AvlTree::new();
        for key in [1, 2, 3] {
            tree.insert_key(key);
        }
        assert_eq!(tree.rotation_count(), 1);
        assert_eq!(tree.root().map(|n| *n.key()), Some(2));
        assert_eq!(tree.height(), 2);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_double_rotation_counts_two() {
        let mut tree: AvlTree<i64> = AvlTree::new();
        for key in [3, 1, 2] {
            tree.insert_key(key);
        }
        assert_eq!(tree.rotation_count(), 2);
        assert_eq!(tree.root().map(|n| *n.key()), Some(2));

        let mut mirror: AvlTree<i64> = AvlTree::new();
        for key in [1, 3, 2] {
            mirror.insert_key(key);
        }
        assert_eq!(mirror.rotation_count(), 2);
        assert_eq!(mirror.root().map(|n| *n.key()), Some(2));
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree: AvlTree<i64> = [5, 3, 8].into_iter().collect();
        let rotations = tree.rotation_count();
        assert!(!tree.insert_key(5));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.rotation_count(), rotations);
        assert_eq!(tree.in_order(), vec![&3, &5, &8]);
    }

    #[test]
    fn test_delete_two_children_uses_successor() {
        let mut tree: AvlTree<i64> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        assert!(tree.delete_key(&50));
        assert_eq!(tree.root().map(|n| *n.key()), Some(60));
        assert_eq!(tree.in_order(), vec![&20, &30, &40, &60, &70, &80]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_delete_absent_and_rebalance() {
        let mut tree: AvlTree<i64> = (1..=7).collect();
        assert!(!tree.delete_key(&42));
        assert_eq!(tree.len(), 7);

        for key in [1, 2, 3] {
            assert!(tree.delete_key(&key));
            assert!(tree.check_invariants());
        }
        assert_eq!(tree.in_order(), vec![&4, &5, &6, &7]);
        assert!(!tree.contains(&2));
        assert!(tree.contains(&6));
    }

    #[test]
    fn test_delete_to_empty() {
        let mut tree: AvlTree<i64> = [2, 1].into_iter().collect();
        assert!(tree.delete_key(&2));
        assert!(tree.delete_key(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_parsed_keys() {
        let mut tree: AvlTree<i64> = AvlTree::new();
        assert_eq!(tree.insert_parsed(" 17 "), Ok(true));
        assert_eq!(tree.insert_parsed("17"), Ok(false));
        assert_eq!(tree.insert_parsed("seventeen"), Err(LabError::InvalidKey));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.delete_parsed("x"), Err(LabError::InvalidKey));
        assert_eq!(tree.delete_parsed("17"), Ok(true));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_node_accessors() {
        let tree: AvlTree<i64> = [2, 1, 3].into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!(root.height(), 2);
        assert_eq!(root.balance(), 0);
        assert_eq!(root.left().map(|n| *n.key()), Some(1));
        assert_eq!(root.right().map(|n| *n.key()), Some(3));
        assert_eq!(root.left().unwrap().height(), 1);
    }

    #[test]
    fn test_display() {
        let tree: AvlTree<i64> = [2, 1, 3].into_iter().collect();
        assert_eq!(tree.to_string(), "    3 (h=1)\n2 (h=2)\n    1 (h=1)\n");
    }
}
