//! A hash-map based simple weighted undirected graph.
//!
//! [WeightedGraph] is the work horse of this crate: the generator builds one
//! per test case and the oracle consumes it. It stores adjacency lists as
//! hash sets and edge weights in a separate map keyed by canonical vertex
//! pairs, so membership tests and insertions run in $O(1)$ time without an
//! $O(n^2)$ adjacency matrix.
//!
//! The structure maintains the data-model invariants at all times: no
//! self-loops and at most one edge per unordered vertex pair. Graphs may be
//! disconnected and may contain isolated vertices, which matters for test
//! cases with a declared vertex count but few (or zero) edges.
//!
//! ```rust
//! use bipbench::graph::*;
//! use bipbench::wgraph::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_weighted_edge(&1, &2, 5);
//! graph.add_weighted_edge(&2, &3, 7);
//! graph.add_vertex(&10); // isolated
//!
//! assert_eq!(graph.num_vertices(), 4);
//! assert_eq!(graph.num_edges(), 2);
//! assert_eq!(graph.weight(&2, &1), Some(5));
//! ```

use fxhash::{FxHashMap, FxHashSet};

use crate::graph::*;
use crate::iterators::*;

/// An implementation of [MutableGraph] that additionally carries integer
/// edge weights.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    pub(crate) adj: FxHashMap<Vertex, VertexSet>,
    pub(crate) weights: FxHashMap<Edge, Weight>,
}

impl PartialEq for WeightedGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false;
        }
        if self.weights != other.weights {
            return false;
        }
        self.adj == other.adj
    }
}
impl Eq for WeightedGraph {}

impl Graph for WeightedGraph {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.weights.len()
    }

    fn contains(&self, u: &Vertex) -> bool {
        self.adj.contains_key(u)
    }

    fn adjacent(&self, u: &Vertex, v: &Vertex) -> bool {
        match self.adj.get(u) {
            Some(N) => N.contains(v),
            _ => false,
        }
    }

    fn degree(&self, u: &Vertex) -> u32 {
        self.adj.get(u).map_or(0, |N| N.len() as u32)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &Vertex> + 'a> {
        Box::new(self.adj.keys())
    }

    fn neighbours<'a>(&'a self, u: &Vertex) -> Box<dyn Iterator<Item = &Vertex> + 'a> {
        match self.adj.get(u) {
            Some(N) => Box::new(N.iter()),
            None => panic!("Vertex not contained in WeightedGraph"),
        }
    }
}

impl MutableGraph for WeightedGraph {
    fn new() -> WeightedGraph {
        WeightedGraph {
            adj: FxHashMap::default(),
            weights: FxHashMap::default(),
        }
    }

    fn with_capacity(n_guess: usize) -> Self {
        WeightedGraph {
            adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            weights: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
        }
    }

    fn add_vertex(&mut self, u: &Vertex) -> bool {
        if !self.adj.contains_key(u) {
            self.adj.insert(*u, FxHashSet::default());
            true
        } else {
            false
        }
    }

    /// Adds an edge with the default weight 1. See [WeightedGraph::add_weighted_edge].
    fn add_edge(&mut self, u: &Vertex, v: &Vertex) -> bool {
        self.add_weighted_edge(u, v, 1)
    }

    fn remove_edge(&mut self, u: &Vertex, v: &Vertex) -> bool {
        if self.adjacent(u, v) {
            self.adj.get_mut(u).unwrap().remove(v);
            self.adj.get_mut(v).unwrap().remove(u);
            self.weights.remove(&canonical(*u, *v));
            true
        } else {
            false
        }
    }

    fn remove_vertex(&mut self, u: &Vertex) -> bool {
        if !self.contains(u) {
            false
        } else {
            let N = self.adj.get(u).unwrap().clone();
            for v in &N {
                self.adj.get_mut(v).unwrap().remove(u);
                self.weights.remove(&canonical(*u, *v));
            }

            self.adj.remove(u);
            true
        }
    }
}

impl WeightedGraph {
    /// Adds the edge $\{u,v\}$ with weight `w`. Returns `false` if the edge
    /// already exists; the stored weight is left untouched in that case.
    ///
    /// Panics if `u == v` or `w == 0`, both of which violate the data model.
    /// External input is validated in [crate::io] before it reaches this
    /// method, so the panic only fires on a programming error.
    pub fn add_weighted_edge(&mut self, u: &Vertex, v: &Vertex, w: Weight) -> bool {
        assert!(u != v, "Self-loops are not supported");
        assert!(w >= 1, "Edge weights start at 1");

        self.add_vertex(u);
        self.add_vertex(v);
        if self.adjacent(u, v) {
            return false;
        }

        self.adj.get_mut(u).unwrap().insert(*v);
        self.adj.get_mut(v).unwrap().insert(*u);
        self.weights.insert(canonical(*u, *v), w);
        true
    }

    /// Returns the weight of the edge $\{u,v\}$, or `None` if the edge
    /// does not exist.
    pub fn weight(&self, u: &Vertex, v: &Vertex) -> Option<Weight> {
        self.weights.get(&canonical(*u, *v)).copied()
    }

    /// Reassigns the weight of an existing edge. Returns `false` if the
    /// edge does not exist; adjacency is never modified.
    pub fn set_weight(&mut self, u: &Vertex, v: &Vertex, w: Weight) -> bool {
        assert!(w >= 1, "Edge weights start at 1");
        match self.weights.get_mut(&canonical(*u, *v)) {
            Some(stored) => {
                *stored = w;
                true
            }
            None => false,
        }
    }

    /// Iterates over all edges with their weights; each undirected edge
    /// appears once, smaller endpoint first.
    pub fn weighted_edges(&self) -> WeightedEdgeIterator<'_> {
        WeightedEdgeIterator::new(self)
    }

    /// Iterates over pairs $(v, N(v))$.
    pub fn neighbourhoods(&self) -> NIterator<'_> {
        NIterator::new(self)
    }

    /// Generates a path on `n` vertices, labelled `1..=n`, unit weights.
    pub fn path(n: u32) -> WeightedGraph {
        let mut res = WeightedGraph::with_capacity(n as usize);
        res.add_vertices(1..=n);
        for u in 1..n {
            res.add_edge(&u, &(u + 1));
        }

        res
    }

    /// Generates a cycle on `n` vertices, labelled `1..=n`, unit weights.
    /// Panics for `n < 3` since shorter cycles require loops or parallel
    /// edges.
    pub fn cycle(n: u32) -> WeightedGraph {
        assert!(n >= 3, "Cycles need at least three vertices");
        let mut res = WeightedGraph::with_capacity(n as usize);
        for u in 1..=n {
            let v = u % n + 1;
            res.add_edge(&u, &v);
        }

        res
    }

    /// Generates a complete bipartite graph on `s`+`t` vertices, labelled
    /// `1..=s+t`, unit weights.
    pub fn biclique(s: u32, t: u32) -> WeightedGraph {
        let mut res = WeightedGraph::with_capacity((s + t) as usize);
        res.add_vertices(1..=(s + t));
        for u in 1..=s {
            for v in (s + 1)..=(s + t) {
                res.add_edge(&u, &v);
            }
        }

        res
    }

    /// Creates a new graph that is the disjoint union of `self` and `graph`.
    /// The vertices of the second graph are relabelled to avoid index
    /// clashes; weights are preserved.
    pub fn disj_union(&self, graph: &WeightedGraph) -> WeightedGraph {
        let mut res = self.clone();

        let offset: Vertex = *self.vertices().max().unwrap_or(&0);
        res.add_vertices(graph.vertices().map(|v| v + offset));
        for (u, v, w) in graph.weighted_edges() {
            res.add_weighted_edge(&(u + offset), &(v + offset), w);
        }

        res
    }
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
