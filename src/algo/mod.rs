/*!
# Graph Algorithms

Structural analyses of a graph, provided as traits on the graph itself. All of them read the
adjacency list only and are re-exported at the top level of this module:
```rust
use mgraphs::{algo::*, prelude::*};

let graph = GraphStore::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]).unwrap();
// bridges are reported as their DFS subtree completes
assert_eq!(graph.compute_bridges(), vec![Edge(2, 3), Edge(1, 2), Edge(0, 1)]);
assert_eq!(graph.compute_bridges_naive(), vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]);
assert_eq!(graph.articulation_points(), vec![1, 2]);
assert!(graph.is_connected());
```

- [`Bridges`] / [`NaiveBridges`]: Tarjan's linear-time search and the edge-removal baseline,
- [`ArticulationPoints`]: cut vertices in a single search,
- [`Connectivity`]: connectivity predicates and Kosaraju's strongly connected components,
- [`EulerianCircuits`]: Fleury's algorithm,
- [`Traversal`]: the iterative depth-first search all of the above build on.

Every search keeps an explicit stack, so arbitrarily deep graphs do not overflow the call stack.
*/

mod articulation;
mod bridges;
mod connectivity;
mod eulerian;
mod traversal;

use crate::prelude::*;

pub use articulation::*;
pub use bridges::*;
pub use connectivity::*;
pub use eulerian::*;
pub use traversal::*;
