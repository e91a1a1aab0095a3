//! Unbalanced binary search tree.
//!
//! Items are ordered by a key extracted with a caller-supplied closure.
//! Insertion and lookup walk the tree iteratively, so a degenerate
//! (sorted-input) tree does not grow the call stack.

use std::borrow::Borrow;
use std::cmp::Ordering;

use tracing::trace;

use crate::traits::SearchTree;

type Link<T, K> = Option<Box<Node<T, K>>>;

#[derive(Debug)]
struct Node<T, K> {
    item: T,
    key: K,
    left: Link<T, K>,
    right: Link<T, K>,
}

/// A binary search tree keyed by `key_of(item)`.
///
/// # Example
///
/// ```rust
/// use service_dispatch::bst::BinarySearchTree;
/// use service_dispatch::traits::SearchTree;
///
/// let mut tree = BinarySearchTree::new(|word: &&str| word.len());
/// tree.insert("three");
/// tree.insert("one");
/// tree.insert("four");
///
/// assert_eq!(tree.search(&4usize), Some(&"four"));
/// assert_eq!(tree.in_order(), vec![&"one", &"four", &"three"]);
/// ```
pub struct BinarySearchTree<T, K, F> {
    root: Link<T, K>,
    len: usize,
    key_of: F,
}

impl<T, K, F> BinarySearchTree<T, K, F>
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

    /// Lazy in-order iterator.
    pub fn iter(&self) -> Iter<'_, T, K> {
        Iter::new(self.root.as_deref())
    }
}

impl<T, K, F> SearchTree<T, K> for BinarySearchTree<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn insert(&mut self, item: T) {
        let key = (self.key_of)(&item);
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!("bst: duplicate key ignored");
                    return;
                }
            };
        }
        *link = Some(Box::new(Node {
            item,
            key,
            left: None,
            right: None,
        }));
        self.len += 1;
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
        let mut height = 0;
        let mut stack: Vec<(&Node<T, K>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }
}

impl<'a, T, K, F> IntoIterator for &'a BinarySearchTree<T, K, F>
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

/// In-order iterator over a [`BinarySearchTree`].
pub struct Iter<'a, T, K> {
    stack: Vec<&'a Node<T, K>>,
}

impl<'a, T, K> Iter<'a, T, K> {
    fn new(root: Option<&'a Node<T, K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node<T, K>>) {
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
