//! The bipartiteness oracle.
//!
//! A graph is bipartite iff its vertices admit a two-colouring in which
//! every edge joins differently coloured vertices, or equivalently iff it
//! contains no odd cycle. [GraphAlgorithms::bipartition] decides this
//! exactly, in $O(V + E)$ time, and always produces a certificate: the
//! colouring on success, an odd cycle on failure.
//!
//! The algorithm is written against the [Graph] trait, which exposes
//! adjacency but no weights, so the verdict cannot depend on edge weights.

use std::collections::VecDeque;
use std::fmt;

use crate::graph::*;

/// The ground-truth answer for a single test case. There is no partial or
/// unknown state; the traversal always terminates in one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Bipartite,
    NotBipartite,
}

impl fmt::Display for Verdict {
    /// The literal single-line answer-file format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Bipartite => write!(f, "graph is bipartite"),
            Verdict::NotBipartite => write!(f, "graph is not bipartite"),
        }
    }
}

/// Outcome of the two-colouring traversal, including a checkable
/// certificate for either verdict.
#[derive(Debug, Clone)]
pub enum Bipartiteness {
    /// A complete two-colouring; every edge joins the two colour classes.
    TwoColouring(VertexMap<bool>),
    /// A cycle of odd length witnessing that no two-colouring exists.
    /// Consecutive vertices (cyclically) are adjacent in the graph.
    OddCycle(Vec<Vertex>),
}

impl Bipartiteness {
    pub fn verdict(&self) -> Verdict {
        match self {
            Bipartiteness::TwoColouring(_) => Verdict::Bipartite,
            Bipartiteness::OddCycle(_) => Verdict::NotBipartite,
        }
    }
}

pub trait GraphAlgorithms {
    fn bipartition(&self) -> Bipartiteness;
    fn decide_bipartite(&self) -> Verdict;
}

impl<G> GraphAlgorithms for G
where
    G: Graph,
{
    fn bipartition(&self) -> Bipartiteness {
        let mut colours: VertexMap<bool> = VertexMap::default();
        let mut parents: VertexMap<Vertex> = VertexMap::default();
        let mut queue: VecDeque<Vertex> = VecDeque::new();

        // Every uncoloured vertex starts a fresh traversal. This outer loop
        // is what makes the decision correct on disconnected graphs; it also
        // colours isolated vertices, so an edgeless graph is bipartite for
        // any vertex count.
        for r in self.vertices() {
            if colours.contains_key(r) {
                continue;
            }
            colours.insert(*r, false);
            queue.push_back(*r);

            while let Some(u) = queue.pop_front() {
                let cu = colours[&u];
                for v in self.neighbours(&u) {
                    match colours.get(v) {
                        None => {
                            colours.insert(*v, !cu);
                            parents.insert(*v, u);
                            queue.push_back(*v);
                        }
                        Some(&cv) if cv == cu => {
                            // An equally coloured edge is conclusive; no
                            // further vertices or edges need to be looked at.
                            return Bipartiteness::OddCycle(odd_cycle(u, *v, &parents));
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        Bipartiteness::TwoColouring(colours)
    }

    fn decide_bipartite(&self) -> Verdict {
        self.bipartition().verdict()
    }
}

/// Reconstructs an odd cycle from the BFS forest once an equally coloured
/// edge $\{u,v\}$ has been found. The parent chains of `u` and `v` meet at
/// their lowest common ancestor; the two tree paths plus the edge itself
/// close a cycle. Since `u` and `v` share a colour their tree depths have
/// equal parity, which makes the cycle length odd.
fn odd_cycle(u: Vertex, v: Vertex, parents: &VertexMap<Vertex>) -> Vec<Vertex> {
    let mut on_path = VertexSet::default();
    let mut x = u;
    loop {
        on_path.insert(x);
        match parents.get(&x) {
            Some(p) => x = *p,
            None => break,
        }
    }

    // Walk upwards from v until we hit u's root path
    let mut cycle = Vec::new();
    let mut y = v;
    let meet = loop {
        cycle.push(y);
        if on_path.contains(&y) {
            break y;
        }
        y = parents[&y];
    };

    cycle.reverse();
    let mut x = u;
    while x != meet {
        cycle.push(x);
        x = parents[&x];
    }

    cycle
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
