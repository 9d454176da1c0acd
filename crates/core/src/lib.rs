//! Graph store and classical analyses over it: vertex degree statistics,
//! negative cycle detection and minimum spanning trees.
//!
//! ```rust
//! use graph_algos_core::{Graph, MinimumSpanningTree, MstKind, NegativeCycleDetector};
//!
//! let mut graph = Graph::new();
//! for id in 1..=3 {
//!     graph.create_vertex(id).unwrap();
//! }
//! graph.create_edge_undirected(1, 2, 4.0).unwrap();
//! graph.create_edge_undirected(2, 3, 5.0).unwrap();
//! graph.create_edge_undirected(3, 1, 6.0).unwrap();
//!
//! let mst = MinimumSpanningTree::new(&graph, 1, MstKind::Prim).unwrap();
//! assert_eq!(mst.weight().unwrap(), 9.0);
//!
//! let detector = NegativeCycleDetector::new(&graph);
//! assert!(!detector.has_cycle_negative());
//! ```

pub mod analysis;
pub mod config;
pub mod csr;
pub mod degree;
pub mod graph;
pub mod kruskal;
pub mod mst;
pub mod negative_cycle;
pub mod prim;
pub mod traits;
pub mod walk;

pub use csr::GraphCSR;
pub use degree::DegreeAnalyzer;
pub use graph::Graph;
pub use mst::{MinimumSpanningTree, MstKind};
pub use negative_cycle::NegativeCycleDetector;
pub use walk::Walk;
