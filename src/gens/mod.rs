/*!
# Graph Generators

Random and deterministic graph construction.

Random generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps this into constructors of whole graphs, and
[`GeneratorSubstructures`] adds paths and cycles to existing graphs.
*/

use rand::Rng;

use crate::{error::Result, prelude::*};

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph without self-loops.
    /// ** Panics if `p` is not within `[0, 1]` **
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng;
}

impl RandomGraph for GraphStore {
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::new(n, directed);
        for Edge(u, v) in Gnp::new().nodes(n).prob(p).directed(directed).stream(rng) {
            let inserted = graph.add_edge(u, v);
            debug_assert!(inserted.is_ok(), "generated edge ({u}, {v}) with n = {n}");
        }
        graph
    }
}
