use common::error::{Error, Result};
use common::types::EdgeId;

use crate::graph::Graph;

/// One traversable direction of a graph edge, in dense vertex indices.
type RelaxArc = (usize, usize, f64, EdgeId);

/// Relaxation index in Compressed Sparse Row (CSR) format.
///
/// Every traversable direction of an edge becomes an arc: a directed edge
/// yields `from -> to`, an undirected edge yields both directions (a single
/// arc for an undirected loop). Arcs leaving the same vertex are stored
/// contiguously:
/// - `node_pointers[u]..node_pointers[u+1]` → arcs leaving node `u`
/// - `arc_targets[i]` -> target node of arc `i`
/// - `arc_weights[i]` -> weight of arc `i`
/// - `arc_source_by_index[i]` -> source node of arc `i`
/// - `arc_edges[i]` -> graph edge that arc `i` was derived from
///
/// Node indices are the graph's dense vertex indices. Within one source node
/// arcs keep the insertion order of their edges.
#[derive(Debug, Clone)]
pub struct GraphCSR {
    pub num_nodes: usize,
    pub node_pointers: Vec<usize>,
    pub arc_targets: Vec<usize>,
    pub arc_weights: Vec<f64>,
    pub arc_source_by_index: Vec<usize>,
    pub arc_edges: Vec<EdgeId>,
}

impl GraphCSR {
    /// Builds the arc index for a snapshot of `graph`.
    ///
    /// # Arguments
    /// * `graph` - Graph whose edges are expanded into arcs. Directed edges
    ///   yield one arc, undirected edges two (one for an undirected loop).
    ///
    /// # Returns
    /// A `GraphCSR` over the graph's dense vertex indices, with `arc_edges`
    /// mapping every arc back to the `EdgeId` it came from.
    ///
    /// # Errors
    /// Returns `Error::VertexNotFound` if an edge references a vertex the graph
    /// does not index.
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let mut arcs: Vec<RelaxArc> = Vec::with_capacity(graph.edge_count() * 2);

        for (id, edge) in graph.edges_indexed() {
            let u = graph.index_of(edge.from)?;
            let v = graph.index_of(edge.to)?;

            arcs.push((u, v, edge.weight, id));
            if !edge.directed && u != v {
                arcs.push((v, u, edge.weight, id));
            }
        }

        Ok(Self::from_arcs(graph.vertex_count(), &arcs))
    }

    fn from_arcs(num_nodes: usize, arcs: &[RelaxArc]) -> Self {
        let (node_pointers, arc_targets, arc_weights, arc_source_by_index, arc_edges) =
            Self::build_csr_from_arcs(num_nodes, arcs);

        Self {
            num_nodes,
            node_pointers,
            arc_targets,
            arc_weights,
            arc_source_by_index,
            arc_edges,
        }
    }

    /// Two-pass counting construction of the CSR arrays.
    ///
    /// The first pass counts arcs per source to size each node's block, the
    /// second places every arc at its source's cursor. Placement order follows
    /// input order, so no sort is needed to keep arcs of one source stable.
    fn build_csr_from_arcs(
        num_nodes: usize,
        arcs: &[RelaxArc],
    ) -> (Vec<usize>, Vec<usize>, Vec<f64>, Vec<usize>, Vec<EdgeId>) {
        let m = arcs.len();
        let mut node_pointers = vec![0; num_nodes + 1];

        for &(u, _, _, _) in arcs {
            node_pointers[u + 1] += 1;
        }

        for i in 1..=num_nodes {
            node_pointers[i] += node_pointers[i - 1];
        }

        let mut arc_targets = vec![0; m];
        let mut arc_weights = vec![0.0; m];
        let mut arc_source_by_index = vec![0; m];
        let mut arc_edges = vec![0; m];

        let mut cursor = node_pointers.clone();

        for &(u, v, weight, edge) in arcs {
            let pos = cursor[u];
            arc_targets[pos] = v;
            arc_weights[pos] = weight;
            arc_source_by_index[pos] = u;
            arc_edges[pos] = edge;

            cursor[u] += 1;
        }

        (
            node_pointers,
            arc_targets,
            arc_weights,
            arc_source_by_index,
            arc_edges,
        )
    }

    pub fn arc_count(&self) -> usize {
        self.arc_targets.len()
    }

    /// Range of arc indices leaving node `u`.
    pub fn arcs_from(&self, u: usize) -> std::ops::Range<usize> {
        self.node_pointers[u]..self.node_pointers[u + 1]
    }

    /// O(1) lookup for the source node of a given arc index.
    ///
    /// # Errors
    /// Returns `Error::InvalidGraph` if `arc_idx` is out of bounds.
    pub fn get_arc_source_node(&self, arc_idx: usize) -> Result<usize> {
        self.arc_source_by_index
            .get(arc_idx)
            .copied()
            .ok_or(Error::InvalidGraph)
    }
}
