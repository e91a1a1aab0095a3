//! Complete binary tree filled in level order.
//!
//! Insertion always takes the first free position scanning level by level,
//! so the tree is stored as a dense vector: the children of position `i` are
//! `2i + 1` and `2i + 2`.

#[derive(Debug, Clone, Default)]
pub struct BinaryTree<T> {
    nodes: Vec<T>,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn insert(&mut self, item: T) {
        self.nodes.push(item);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Items in level order (the insertion order).
    pub fn level_order(&self) -> Vec<&T> {
        self.nodes.iter().collect()
    }

    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk_in(0, &mut out);
        out
    }

    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk_pre(0, &mut out);
        out
    }

    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk_post(0, &mut out);
        out
    }

    fn walk_in<'a>(&'a self, index: usize, out: &mut Vec<&'a T>) {
        if let Some(item) = self.nodes.get(index) {
            self.walk_in(2 * index + 1, out);
            out.push(item);
            self.walk_in(2 * index + 2, out);
        }
    }

    fn walk_pre<'a>(&'a self, index: usize, out: &mut Vec<&'a T>) {
        if let Some(item) = self.nodes.get(index) {
            out.push(item);
            self.walk_pre(2 * index + 1, out);
            self.walk_pre(2 * index + 2, out);
        }
    }

    fn walk_post<'a>(&'a self, index: usize, out: &mut Vec<&'a T>) {
        if let Some(item) = self.nodes.get(index) {
            self.walk_post(2 * index + 1, out);
            self.walk_post(2 * index + 2, out);
            out.push(item);
        }
    }
}
