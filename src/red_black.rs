//! Red-black tree backed by an index arena.
//!
//! Nodes live in a `Vec` and refer to each other by index, including a
//! parent index used by the insertion fix-up. Slot [`NIL`] is a shared black
//! sentinel standing in for every leaf, so boundary checks compare indices
//! instead of matching on `Option`.
//!
//! Invariants maintained after every insertion:
//! - the root and the sentinel are black;
//! - a red node has no red child;
//! - every path from a node down to the sentinel crosses the same number of
//!   black nodes.

use std::borrow::Borrow;
use std::cmp::Ordering;

use tracing::trace;

use crate::traits::SearchTree;

/// Index of the shared sentinel.
const NIL: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy)]
struct Links {
    left: usize,
    right: usize,
    parent: usize,
    color: Color,
}

impl Links {
    const SENTINEL: Links = Links {
        left: NIL,
        right: NIL,
        parent: NIL,
        color: Color::Black,
    };
}

/// A red-black tree keyed by `key_of(item)`.
///
/// `links[i]` holds the structure of node `i`; its key and item are stored
/// in `entries[i - 1]`. The sentinel owns no entry.
pub struct RedBlackTree<T, K, F> {
    links: Vec<Links>,
    entries: Vec<(K, T)>,
    root: usize,
    key_of: F,
}

impl<T, K, F> RedBlackTree<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    pub fn new(key_of: F) -> Self {
        Self {
            links: vec![Links::SENTINEL],
            entries: Vec::new(),
            root: NIL,
            key_of,
        }
    }

    pub fn iter(&self) -> Iter<'_, T, K, F> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left(self.root);
        iter
    }

    /// Color of the root, `None` for an empty tree.
    pub fn root_color(&self) -> Option<Color> {
        (self.root != NIL).then(|| self.links[self.root].color)
    }

    /// Number of black nodes on every root-to-leaf path (sentinel included),
    /// or `None` if any red-black invariant is violated.
    pub fn black_height(&self) -> Option<usize> {
        if self.links[NIL].color != Color::Black || self.links[self.root].color != Color::Black {
            return None;
        }
        self.black_height_at(self.root)
    }

    fn black_height_at(&self, node: usize) -> Option<usize> {
        if node == NIL {
            return Some(1);
        }
        let Links {
            left, right, color, ..
        } = self.links[node];
        if color == Color::Red
            && (self.links[left].color == Color::Red || self.links[right].color == Color::Red)
        {
            return None;
        }
        let left_height = self.black_height_at(left)?;
        let right_height = self.black_height_at(right)?;
        if left_height != right_height {
            return None;
        }
        Some(left_height + usize::from(color == Color::Black))
    }

    fn key(&self, node: usize) -> &K {
        &self.entries[node - 1].0
    }

    fn parent(&self, node: usize) -> usize {
        self.links[node].parent
    }

    fn color(&self, node: usize) -> Color {
        self.links[node].color
    }

    fn rotate_left(&mut self, x: usize) {
        let y = self.links[x].right;
        let y_left = self.links[y].left;
        self.links[x].right = y_left;
        if y_left != NIL {
            self.links[y_left].parent = x;
        }
        let x_parent = self.links[x].parent;
        self.links[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if x == self.links[x_parent].left {
            self.links[x_parent].left = y;
        } else {
            self.links[x_parent].right = y;
        }
        self.links[y].left = x;
        self.links[x].parent = y;
    }

    fn rotate_right(&mut self, y: usize) {
        let x = self.links[y].left;
        let x_right = self.links[x].right;
        self.links[y].left = x_right;
        if x_right != NIL {
            self.links[x_right].parent = y;
        }
        let y_parent = self.links[y].parent;
        self.links[x].parent = y_parent;
        if y_parent == NIL {
            self.root = x;
        } else if y == self.links[y_parent].right {
            self.links[y_parent].right = x;
        } else {
            self.links[y_parent].left = x;
        }
        self.links[x].right = y;
        self.links[y].parent = x;
    }

    fn insert_fixup(&mut self, mut z: usize) {
        while self.color(self.parent(z)) == Color::Red {
            let parent = self.parent(z);
            let grandparent = self.parent(parent);

            if parent == self.links[grandparent].left {
                let uncle = self.links[grandparent].right;
                if self.color(uncle) == Color::Red {
                    self.links[parent].color = Color::Black;
                    self.links[uncle].color = Color::Black;
                    self.links[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.links[parent].right {
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.parent(z);
                    let grandparent = self.parent(parent);
                    self.links[parent].color = Color::Black;
                    self.links[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.links[grandparent].left;
                if self.color(uncle) == Color::Red {
                    self.links[parent].color = Color::Black;
                    self.links[uncle].color = Color::Black;
                    self.links[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.links[parent].left {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.parent(z);
                    let grandparent = self.parent(parent);
                    self.links[parent].color = Color::Black;
                    self.links[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }
        let root = self.root;
        self.links[root].color = Color::Black;
    }

    fn height_at(&self, node: usize) -> usize {
        if node == NIL {
            return 0;
        }
        1 + self
            .height_at(self.links[node].left)
            .max(self.height_at(self.links[node].right))
    }
}

impl<T, K, F> SearchTree<T, K> for RedBlackTree<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn insert(&mut self, item: T) {
        let key = (self.key_of)(&item);

        let mut parent = NIL;
        let mut current = self.root;
        let mut went_left = false;
        while current != NIL {
            parent = current;
            match key.cmp(self.key(current)) {
                Ordering::Less => {
                    current = self.links[current].left;
                    went_left = true;
                }
                Ordering::Greater => {
                    current = self.links[current].right;
                    went_left = false;
                }
                Ordering::Equal => {
                    trace!("red-black: duplicate key ignored");
                    return;
                }
            }
        }

        let z = self.links.len();
        self.links.push(Links {
            left: NIL,
            right: NIL,
            parent,
            color: Color::Red,
        });
        self.entries.push((key, item));

        if parent == NIL {
            self.root = z;
        } else if went_left {
            self.links[parent].left = z;
        } else {
            self.links[parent].right = z;
        }

        self.insert_fixup(z);
    }

    fn search<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while current != NIL {
            current = match key.cmp(self.key(current).borrow()) {
                Ordering::Less => self.links[current].left,
                Ordering::Greater => self.links[current].right,
                Ordering::Equal => return Some(&self.entries[current - 1].1),
            };
        }
        None
    }

    fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn height(&self) -> usize {
        self.height_at(self.root)
    }
}

impl<'a, T, K, F> IntoIterator for &'a RedBlackTree<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`RedBlackTree`].
pub struct Iter<'a, T, K, F> {
    tree: &'a RedBlackTree<T, K, F>,
    stack: Vec<usize>,
}

impl<T, K, F> Iter<'_, T, K, F> {
    fn push_left(&mut self, mut node: usize) {
        while node != NIL {
            self.stack.push(node);
            node = self.tree.links[node].left;
        }
    }
}

impl<'a, T, K, F> Iterator for Iter<'a, T, K, F> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = self.stack.pop()?;
        self.push_left(tree.links[node].right);
        Some(&tree.entries[node - 1].1)
    }
}
