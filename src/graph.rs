//! Basic type definitions and the core graph traits.
//!
//! Vertices are plain `u32` ids, 1-indexed in the external edge-list format.
//! Edge weights exist for fidelity with the solver input format but are kept
//! out of the [Graph] trait on purpose: an algorithm written against this
//! trait only ever sees adjacency, so it cannot accidentally depend on
//! weights. The concrete [crate::wgraph::WeightedGraph] exposes weights via
//! inherent methods instead.

use fxhash::{FxHashMap, FxHashSet};

use std::cmp::{max, min};

pub type Vertex = u32;
pub type Weight = u32;
pub type Edge = (Vertex, Vertex);
pub type WeightedEdge = (Vertex, Vertex, Weight);

pub type VertexSet = FxHashSet<Vertex>;
pub type VertexSetRef<'a> = FxHashSet<&'a Vertex>;
pub type EdgeSet = FxHashSet<Edge>;
pub type VertexMap<T> = FxHashMap<Vertex, T>;

/// Canonical encoding of an unordered vertex pair: smaller endpoint first.
/// `{u,v}` and `{v,u}` map to the same key, so a hash set of canonical pairs
/// is a duplicate-free edge record.
pub fn canonical(u: Vertex, v: Vertex) -> Edge {
    (min(u, v), max(u, v))
}

/// Read access to a simple undirected graph.
pub trait Graph {
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn contains(&self, u: &Vertex) -> bool;

    fn adjacent(&self, u: &Vertex, v: &Vertex) -> bool;
    fn degree(&self, u: &Vertex) -> u32;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &Vertex> + 'a>;
    fn neighbours<'a>(&'a self, u: &Vertex) -> Box<dyn Iterator<Item = &Vertex> + 'a>;

    fn len(&self) -> usize {
        self.num_vertices()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Iterates over all edges. Each undirected edge is reported exactly
    /// once, with its smaller endpoint first.
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = Edge> + 'a>
    where
        Self: Sized,
    {
        Box::new(self.vertices().flat_map(move |u| {
            self.neighbours(u)
                .filter(move |v| *u < **v)
                .map(move |v| (*u, *v))
        }))
    }
}

/// Editing operations shared by graph structures that can be built
/// incrementally.
pub trait MutableGraph: Graph {
    fn new() -> Self;
    fn with_capacity(n_guess: usize) -> Self;

    fn add_vertex(&mut self, u: &Vertex) -> bool;
    fn add_edge(&mut self, u: &Vertex, v: &Vertex) -> bool;
    fn remove_edge(&mut self, u: &Vertex, v: &Vertex) -> bool;
    fn remove_vertex(&mut self, u: &Vertex) -> bool;

    fn add_vertices<I>(&mut self, it: I)
    where
        I: IntoIterator<Item = Vertex>,
    {
        for v in it {
            self.add_vertex(&v);
        }
    }

    fn add_edges<I>(&mut self, it: I)
    where
        I: IntoIterator<Item = Edge>,
    {
        for (u, v) in it {
            self.add_edge(&u, &v);
        }
    }
}
