use common::error::Result;
use common::types::{EdgeId, VertexId};

use super::graph::Graph;

/// Trait for strategies that pick minimum spanning tree edges.
pub trait MstStrategy {
    /// Selects minimum-weight edges connecting vertices, growing from `start`.
    ///
    /// Edge direction is ignored and loops are never selected. On a
    /// disconnected graph a strategy returns whatever it could select (a
    /// partial tree or a forest); callers validate that the result spans
    /// every vertex.
    fn select_edges(&self, graph: &Graph, start: VertexId) -> Result<Vec<EdgeId>>;
}
