//! Bipbench is a correctness-validation harness for external graph
//! bipartiteness solvers. It manufactures randomized weighted test graphs
//! near the edge density at which bipartiteness is statistically on the
//! fence, and independently computes a trustworthy ground-truth verdict for
//! each input so a solver's output can be diffed against it.
//!
//! The two halves are independent: the generator
//! ([generator](crate::generator)) writes plain edge-list files, the oracle
//! ([algorithms](crate::algorithms)) reads any graph and decides
//! bipartiteness by two-colouring, with a checkable certificate either way.
//! They only ever meet through files on disk (see [harness](crate::harness)).
//!
//! ```rust
//! use bipbench::graph::*;
//! use bipbench::wgraph::WeightedGraph;
//! use bipbench::algorithms::*;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_weighted_edge(&1, &2, 5);
//! graph.add_weighted_edge(&2, &3, 7);
//! graph.add_weighted_edge(&3, &1, 9);
//!
//! // A triangle is an odd cycle
//! assert_eq!(graph.decide_bipartite(), Verdict::NotBipartite);
//!
//! graph.remove_edge(&3, &1);
//! assert_eq!(graph.decide_bipartite(), Verdict::Bipartite);
//! ```
#![allow(non_snake_case)]

pub mod algorithms;
pub mod error;
pub mod generator;
pub mod graph;
pub mod harness;
pub mod io;
pub mod iterators;
pub mod wgraph;
