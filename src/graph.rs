//! Weighted adjacency-list graph with traversals and Kruskal's MST.
//!
//! Vertices are dense indices `0..vertex_count`; the graph tracks no other
//! vertex identity. Callers map indices back to their own records (for
//! example, positions in the request slice a graph was built from).
//!
//! An undirected edge is stored twice, once in each endpoint's adjacency
//! list, but counted once in [`Graph::edge_count`].

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DispatchError, Result};

/// A weighted edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    directed: bool,
    edge_count: usize,
}

impl Graph {
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed,
            edge_count: 0,
        }
    }

    pub fn undirected(vertex_count: usize) -> Self {
        Self::new(vertex_count, false)
    }

    pub fn directed(vertex_count: usize) -> Self {
        Self::new(vertex_count, true)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges added (not adjacency entries).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(DispatchError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let edge = Edge::new(from, to, weight);
        self.adjacency[from].push(edge);
        if !self.directed {
            self.adjacency[to].push(edge.reversed());
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing adjacency entries of `vertex`.
    pub fn edges(&self, vertex: usize) -> Result<&[Edge]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Every logical edge. For an undirected graph only the entry with
    /// `from <= to` is reported.
    pub fn all_edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flatten()
            .filter(|edge| self.directed || edge.from <= edge.to)
            .copied()
            .collect()
    }

    /// Vertices reachable from `start` in depth-first discovery order.
    ///
    /// Neighbours are explored in adjacency-list order, matching a recursive
    /// DFS, but with an explicit stack.
    pub fn depth_first_search(&self, start: usize) -> Result<Vec<usize>> {
        self.check_vertex(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        // (vertex, index of the next adjacency entry to try)
        let mut stack = vec![(start, 0usize)];
        visited[start] = true;
        order.push(start);

        while let Some(top) = stack.last_mut() {
            let (vertex, next) = *top;
            match self.adjacency[vertex].get(next) {
                Some(edge) => {
                    top.1 += 1;
                    if !visited[edge.to] {
                        visited[edge.to] = true;
                        order.push(edge.to);
                        stack.push((edge.to, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(order)
    }

    /// Vertices reachable from `start` in breadth-first discovery order.
    pub fn breadth_first_search(&self, start: usize) -> Result<Vec<usize>> {
        self.check_vertex(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for edge in &self.adjacency[vertex] {
                if !visited[edge.to] {
                    visited[edge.to] = true;
                    queue.push_back(edge.to);
                }
            }
        }

        Ok(order)
    }

    /// Minimum spanning tree (or forest, for a disconnected graph) by
    /// Kruskal's algorithm.
    ///
    /// Edges are taken from [`Graph::all_edges`] and stably sorted by weight,
    /// so equal weights keep their enumeration order.
    pub fn minimum_spanning_tree_kruskal(&self) -> Vec<Edge> {
        let mut edges = self.all_edges();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut sets = DisjointSet::new(self.vertex_count());
        let mut tree = Vec::with_capacity(self.vertex_count().saturating_sub(1));
        for edge in edges {
            if sets.union(edge.from, edge.to) {
                tree.push(edge);
            }
        }

        debug!(
            vertices = self.vertex_count(),
            edges = self.edge_count,
            tree_edges = tree.len(),
            "computed minimum spanning tree"
        );
        tree
    }
}

/// Sum of edge weights.
pub fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(|edge| edge.weight).sum()
}

/// Union-find over `0..len` with path compression.
///
/// `union` links the first root under the second without ranking.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Representative of `element`'s set, compressing the path to it.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns false if they were already
    /// in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a] = root_b;
        true
    }
}
