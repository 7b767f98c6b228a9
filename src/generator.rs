//! Randomized test-case generation near the bipartiteness threshold.
//!
//! A random graph on $n$ vertices stays bipartite with roughly even odds
//! when it has about $n^{1.5}/2$ edges: below that density bipartite graphs
//! dominate, above it odd cycles do. Suites generated at this density
//! genuinely exercise both oracle outcomes, instead of being trivially
//! always-bipartite or always-not. The exact split between verdicts is
//! probabilistic; callers must not assume a fixed ratio across runs.
//!
//! ```rust
//! use bipbench::graph::*;
//! use bipbench::generator::{generate_default, GeneratorParams};
//!
//! let params = GeneratorParams::near_threshold(100, 1000);
//! let graph = generate_default(&params).unwrap();
//!
//! assert_eq!(graph.num_vertices(), 100);
//! assert_eq!(graph.num_edges(), 500);
//! ```

use rand::Rng;

use crate::error::{HarnessError, Result};
use crate::graph::*;
use crate::wgraph::WeightedGraph;

/// Parameters for one generated test case. `num_vertices` and `max_weight`
/// must be at least 1; `num_edges` may be 0 but can never exceed the
/// simple-graph maximum $n(n-1)/2$.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorParams {
    pub num_vertices: u32,
    pub num_edges: usize,
    pub max_weight: Weight,
}

/// The edge count at which a random graph on `n` vertices has roughly even
/// odds of being bipartite: $\lfloor n^{1.5} \rfloor / 2$.
pub fn threshold_edges(n: u32) -> usize {
    // n * sqrt(n) instead of powf(1.5): sqrt is correctly rounded, so
    // perfect squares come out exact.
    let nf = n as f64;
    (nf * nf.sqrt()) as usize / 2
}

/// Maximum number of edges of a simple graph on `n` vertices.
pub fn max_simple_edges(n: u32) -> usize {
    let n = n as usize;
    if n == 0 {
        0
    } else {
        n * (n - 1) / 2
    }
}

impl GeneratorParams {
    pub fn new(num_vertices: u32, num_edges: usize, max_weight: Weight) -> GeneratorParams {
        GeneratorParams { num_vertices, num_edges, max_weight }
    }

    /// Parameters for a graph at the threshold density, see
    /// [threshold_edges].
    pub fn near_threshold(num_vertices: u32, max_weight: Weight) -> GeneratorParams {
        GeneratorParams {
            num_vertices,
            num_edges: threshold_edges(num_vertices),
            max_weight,
        }
    }

    /// Fails with [HarnessError::InvalidParameters] if no simple graph with
    /// these parameters exists. Beyond the simple-graph maximum the
    /// rejection sampling in [generate] could never terminate, so this is
    /// checked before any sampling begins.
    pub fn validate(&self) -> Result<()> {
        if self.num_vertices == 0 {
            return Err(HarnessError::InvalidParameters {
                reason: "at least one vertex is required".to_string(),
            });
        }
        if self.max_weight == 0 {
            return Err(HarnessError::InvalidParameters {
                reason: "the maximum edge weight must be at least 1".to_string(),
            });
        }

        let max = max_simple_edges(self.num_vertices);
        if self.num_edges > max {
            return Err(HarnessError::InvalidParameters {
                reason: format!(
                    "{} edges requested, but a simple graph on {} vertices has at most {}",
                    self.num_edges, self.num_vertices, max
                ),
            });
        }

        Ok(())
    }
}

/// Generates a random simple weighted graph with exactly
/// `params.num_edges` edges on vertices `1..=params.num_vertices`, weights
/// uniform in `[1, params.max_weight]` and independent of edge selection.
///
/// Vertex pairs are rejection-sampled: self-loops and already recorded
/// pairs are discarded and redrawn. The graph's own canonical-pair weight
/// map doubles as the used-pair record, so no separate dense matrix is
/// kept. Near the simple-graph maximum the rejection rate grows; dense
/// graphs would want complement sampling instead, but the threshold regime
/// this crate targets is far below that.
///
/// All vertices are declared up front, so isolated vertices survive into
/// the result and `num_edges = 0` yields an edgeless graph on the full
/// vertex count.
pub fn generate<R: Rng>(params: &GeneratorParams, rng: &mut R) -> Result<WeightedGraph> {
    params.validate()?;

    let n = params.num_vertices;
    let mut G = WeightedGraph::with_capacity(n as usize);
    G.add_vertices(1..=n);

    while G.num_edges() < params.num_edges {
        let u = rng.gen_range(1..=n);
        let v = rng.gen_range(1..=n);
        if u == v || G.adjacent(&u, &v) {
            continue;
        }

        let w = rng.gen_range(1..=params.max_weight);
        G.add_weighted_edge(&u, &v, w);
    }

    Ok(G)
}

/// Like [generate], driven by the thread-local RNG.
pub fn generate_default(params: &GeneratorParams) -> Result<WeightedGraph> {
    generate(params, &mut rand::thread_rng())
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn threshold_values() {
        assert_eq!(threshold_edges(1), 0);
        assert_eq!(threshold_edges(2), 1);
        assert_eq!(threshold_edges(4), 4);
        assert_eq!(threshold_edges(100), 500);
        assert_eq!(threshold_edges(1000), 15811);
    }

    #[test]
    fn generated_graph_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let params = GeneratorParams::near_threshold(100, 1000);
        let G = generate(&params, &mut rng).unwrap();

        assert_eq!(G.num_vertices(), 100);
        assert_eq!(G.num_edges(), 500);

        let mut seen = EdgeSet::default();
        for (u, v, w) in G.weighted_edges() {
            assert!(u != v, "self-loop {u} -- {v}");
            assert!((1..=100).contains(&u) && (1..=100).contains(&v));
            assert!((1..=1000).contains(&w), "weight {w} out of range");
            assert!(seen.insert(canonical(u, v)), "duplicate edge {u} -- {v}");
        }
        assert_eq!(seen.len(), 500);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let params = GeneratorParams::near_threshold(64, 640);

        let G = generate(&params, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        let H = generate(&params, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        assert_eq!(G, H);
    }

    #[test]
    fn edgeless_mode() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let params = GeneratorParams::new(42, 0, 10);
        let G = generate(&params, &mut rng).unwrap();

        assert_eq!(G.num_vertices(), 42);
        assert_eq!(G.num_edges(), 0);
    }

    #[test]
    fn saturated_graph() {
        // num_edges at the simple-graph maximum still terminates
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let params = GeneratorParams::new(6, 15, 1);
        let G = generate(&params, &mut rng).unwrap();

        assert_eq!(G.num_edges(), 15);
        for u in 1..=6 {
            assert_eq!(G.degree(&u), 5);
        }
    }

    #[test]
    fn invalid_parameters() {
        use crate::error::HarnessError;

        let too_dense = GeneratorParams::new(4, 7, 10);
        assert!(matches!(
            generate_default(&too_dense),
            Err(HarnessError::InvalidParameters { .. })
        ));

        let no_vertices = GeneratorParams::new(0, 0, 10);
        assert!(matches!(
            no_vertices.validate(),
            Err(HarnessError::InvalidParameters { .. })
        ));

        let zero_weight = GeneratorParams::new(10, 5, 0);
        assert!(matches!(
            zero_weight.validate(),
            Err(HarnessError::InvalidParameters { .. })
        ));

        GeneratorParams::new(4, 6, 10).validate().unwrap();
    }
}
