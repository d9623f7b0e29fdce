/*!
`mgraphs` is a small graph-analysis engine built around a **m**ulti-view graph store: every graph
keeps its edge list together with an adjacency list, an adjacency matrix and an incidence matrix,
and all three views are updated on every edit.

# Representation

We represent **vertices** as `u32` in the range `0..n` where `n` is the number of vertices in the
graph. Each vertex carries a display label (`V1, V2, ...` by default). For **edges**, we use a
simple tuple-struct `Edge(Node, Node)`; the store additionally keeps a weight and an optional
label per edge in an [`EdgeRecord`].

### Directed vs Undirected

We support both **directed** and **undirected** graphs:

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)`.
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are
  considered distinct.

### Views

See the [`repr`] module for the [`GraphStore`](crate::repr::GraphStore) and its views. The
adjacency list suppresses duplicate pairs while the other views record every insertion; the
module documentation describes the resulting divergence.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, basic graph operations, and the store,
- [`algo`] includes analysis traits implemented on graphs such as bridges
  (`graph.compute_bridges()`), articulation points, connectivity checks and Eulerian circuits,
- [`gens`] includes deterministic substructures (paths, cycles, chains of cycles) and random
  `G(n,p)` graphs,
- [`io`] includes writers for GEXF, PPM images and plain-text reports.

In most use-cases, `use mgraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use mgraphs::{algo::*, prelude::*};

let graph = GraphStore::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
assert!(graph.compute_bridges().is_empty());
assert!(graph.articulation_points().is_empty());
assert_eq!(graph.eulerian_circuit().circuit().map(|c| c.len()), Some(4));
```

# Logging

Algorithms and the store emit [`tracing`](https://docs.rs/tracing) events (`debug` for results,
`trace` for single edits and steps). The library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::GraphError;
pub use node::*;

/// `mgraphs::prelude` includes definitions for vertices and edges, all basic graph operation
/// traits as well as the graph store and its views.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
