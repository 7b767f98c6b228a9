use crate::graph::{Edge, Vertex, VertexSet, Weight, WeightedEdge};
use crate::wgraph::WeightedGraph;

pub type VertexIterator<'a> = std::collections::hash_map::Keys<'a, Vertex, VertexSet>;
pub type NVertexIterator<'a> = std::collections::hash_set::Iter<'a, Vertex>;

/*
    Neighbourhood iterator for weighted graphs. At each step,
    the iterator returns a pair (v,N(v)).
*/
pub struct NIterator<'a> {
    v_it: VertexIterator<'a>,
    G: &'a WeightedGraph,
}

impl<'a> NIterator<'a> {
    pub fn new(G: &'a WeightedGraph) -> NIterator<'a> {
        NIterator {
            v_it: G.adj.keys(),
            G,
        }
    }
}

impl<'a> Iterator for NIterator<'a> {
    type Item = (Vertex, NVertexIterator<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let v = *self.v_it.next()?;
        let N = self.G.adj[&v].iter();

        Some((v, N))
    }
}

/*
    Weighted edge iterator. The weight map is keyed by canonical pairs,
    so every undirected edge is produced exactly once.
*/
pub struct WeightedEdgeIterator<'a> {
    e_it: std::collections::hash_map::Iter<'a, Edge, Weight>,
}

impl<'a> WeightedEdgeIterator<'a> {
    pub fn new(G: &'a WeightedGraph) -> WeightedEdgeIterator<'a> {
        WeightedEdgeIterator {
            e_it: G.weights.iter(),
        }
    }
}

impl<'a> Iterator for WeightedEdgeIterator<'a> {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let ((u, v), w) = self.e_it.next()?;
        Some((*u, *v, *w))
    }
}
