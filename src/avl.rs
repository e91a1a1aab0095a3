//! AVL tree: a height-balanced binary search tree.
//!
//! Every node caches its subtree height. After an insertion the heights are
//! recomputed on the way back up, and any node whose balance factor leaves
//! `-1..=1` is fixed with one of the four standard rotation cases. The case
//! is picked by comparing the inserted key with the child's key.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert`  | O(log n)   |
//! | `search`  | O(log n)   |
//! | `in_order`| O(n)       |

use std::borrow::Borrow;
use std::cmp::Ordering;

use tracing::trace;

use crate::traits::SearchTree;

type Link<T, K> = Option<Box<AvlNode<T, K>>>;

#[derive(Debug)]
struct AvlNode<T, K> {
    item: T,
    key: K,
    left: Link<T, K>,
    right: Link<T, K>,
    height: usize,
}

impl<T, K> AvlNode<T, K> {
    fn leaf(item: T, key: K) -> Self {
        Self {
            item,
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn height<T, K>(link: &Link<T, K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn rotate_right<T, K>(mut y: Box<AvlNode<T, K>>) -> Box<AvlNode<T, K>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left<T, K>(mut x: Box<AvlNode<T, K>>) -> Box<AvlNode<T, K>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Inserts below `link` and returns the new subtree root.
///
/// The second value is `None` when the key was already present, otherwise
/// the comparison of the inserted key with the key of the node that was at
/// this position (`Equal` for a freshly created leaf).
fn insert_at<T, K: Ord>(link: Link<T, K>, item: T, key: K) -> (Box<AvlNode<T, K>>, Option<Ordering>) {
    let mut node = match link {
        None => return (Box::new(AvlNode::leaf(item, key)), Some(Ordering::Equal)),
        Some(node) => node,
    };

    let ord = key.cmp(&node.key);
    let child_ord = match ord {
        Ordering::Equal => return (node, None),
        Ordering::Less => {
            let (child, child_ord) = insert_at(node.left.take(), item, key);
            node.left = Some(child);
            child_ord
        }
        Ordering::Greater => {
            let (child, child_ord) = insert_at(node.right.take(), item, key);
            node.right = Some(child);
            child_ord
        }
    };
    let Some(child_ord) = child_ord else {
        return (node, None);
    };

    node.update_height();
    let balance = node.balance_factor();

    let node = if balance > 1 {
        // left-right: straighten the left child first
        if child_ord == Ordering::Greater {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance < -1 {
        // right-left
        if child_ord == Ordering::Less {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    };

    (node, Some(ord))
}

/// A self-balancing binary search tree keyed by `key_of(item)`.
pub struct AvlTree<T, K, F> {
    root: Link<T, K>,
    len: usize,
    key_of: F,
}

impl<T, K, F> AvlTree<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    pub fn new(key_of: F) -> Self {
        Self {
            root: None,
            len: 0,
            key_of,
        }
    }

    pub fn iter(&self) -> Iter<'_, T, K> {
        Iter::new(self.root.as_deref())
    }

    /// Checks the AVL invariant and the cached heights for every node.
    pub fn is_balanced(&self) -> bool {
        fn check<T, K>(link: &Link<T, K>) -> Option<usize> {
            let Some(node) = link else {
                return Some(0);
            };
            let left = check(&node.left)?;
            let right = check(&node.right)?;
            let height = 1 + left.max(right);
            (left.abs_diff(right) <= 1 && node.height == height).then_some(height)
        }
        check(&self.root).is_some()
    }
}

impl<T, K, F> SearchTree<T, K> for AvlTree<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn insert(&mut self, item: T) {
        let key = (self.key_of)(&item);
        let (root, outcome) = insert_at(self.root.take(), item, key);
        self.root = Some(root);
        match outcome {
            Some(_) => self.len += 1,
            None => trace!("avl: duplicate key ignored"),
        }
    }

    fn search<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.item),
            };
        }
        None
    }

    fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        height(&self.root)
    }
}

impl<'a, T, K, F> IntoIterator for &'a AvlTree<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`AvlTree`].
pub struct Iter<'a, T, K> {
    stack: Vec<&'a AvlNode<T, K>>,
}

impl<'a, T, K> Iter<'a, T, K> {
    fn new(root: Option<&'a AvlNode<T, K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a AvlNode<T, K>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T, K> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.item)
    }
}
