use std::cell::OnceCell;

use common::error::{Error, Result};
use tracing::{debug, trace, warn};

use crate::csr::GraphCSR;
use crate::graph::Graph;
use crate::walk::Walk;

/// Detects negative-weight cycles with Bellman-Ford relaxation and reports
/// one of them as a closed [`Walk`].
///
/// Every vertex starts at distance `0.0`, as if a virtual zero-weight source
/// were connected to each of them, so cycles are found in every component
/// regardless of reachability from any particular vertex. Directed edges
/// relax `from -> to` only; undirected edges relax both ways, which makes a
/// single negative undirected edge a cycle of its own.
///
/// The search runs once, on first query, and its outcome is cached for the
/// lifetime of the detector.
pub struct NegativeCycleDetector<'g> {
    graph: &'g Graph,
    cycle: OnceCell<Option<Walk>>,
}

impl<'g> NegativeCycleDetector<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            cycle: OnceCell::new(),
        }
    }

    /// Returns whether the graph contains any negative cycle. The empty graph
    /// has none.
    ///
    /// Relaxation that never settles proves a negative cycle even when it
    /// cannot be traced back, so a failed reconstruction still answers `true`.
    pub fn has_cycle_negative(&self) -> bool {
        match self.search() {
            Ok(cycle) => cycle.is_some(),
            Err(e) => {
                warn!(error = %e, "negative cycle search failed");
                matches!(e, Error::CycleReconstructionFailed)
            }
        }
    }

    /// Returns a negative cycle as a closed walk.
    ///
    /// # Errors
    /// - `Error::Underflow` if the graph has no vertices.
    /// - `Error::NoCycleFound` if the graph has no negative cycle.
    pub fn cycle_negative(&self) -> Result<Walk> {
        if self.graph.is_empty() {
            return Err(Error::Underflow);
        }

        self.search()?.cloned().ok_or(Error::NoCycleFound)
    }

    /// Materializes the negative cycle as a standalone graph.
    ///
    /// # Errors
    /// Same as [`Self::cycle_negative`].
    pub fn create_graph(&self) -> Result<Graph> {
        self.cycle_negative()?.create_graph()
    }

    fn search(&self) -> Result<Option<&Walk>> {
        if let Some(cached) = self.cycle.get() {
            return Ok(cached.as_ref());
        }

        let found = self.find_cycle()?;

        Ok(self.cycle.get_or_init(|| found).as_ref())
    }

    fn find_cycle(&self) -> Result<Option<Walk>> {
        let num_nodes = self.graph.vertex_count();
        if num_nodes == 0 {
            return Ok(None);
        }

        let csr = GraphCSR::from_graph(self.graph)?;
        let mut distance = vec![0.0f64; num_nodes];

        // Stores the CSR index of the predecessor arc.
        let mut pred_arc_idx: Vec<Option<usize>> = vec![None; num_nodes];

        for round in 1..=num_nodes {
            if Self::relax_round(&csr, &mut distance, &mut pred_arc_idx).is_none() {
                debug!(round, "relaxation settled, no negative cycle");
                return Ok(None);
            }
        }

        // Still relaxing after |V| rounds. One more pass pins down a vertex
        // whose predecessor chain leads into a negative cycle.
        let last_updated = Self::relax_round(&csr, &mut distance, &mut pred_arc_idx)
            .ok_or(Error::CycleReconstructionFailed)?;

        let walk = self.reconstruct_cycle(last_updated, &pred_arc_idx, &csr)?;
        debug!(
            edges = walk.edges().len(),
            weight = walk.weight(),
            "negative cycle found"
        );

        Ok(Some(walk))
    }

    /// Relaxes every arc of the index once, in CSR order.
    ///
    /// # Arguments
    /// * `csr` - Arc index of the graph being searched.
    /// * `distance` - Current distance estimate per node, updated in place.
    /// * `pred_arc_idx` - CSR index of the arc that last improved each node,
    ///   updated in place.
    ///
    /// # Returns
    /// The last node whose distance improved during this round, or `None` if
    /// the round changed nothing.
    fn relax_round(
        csr: &GraphCSR,
        distance: &mut [f64],
        pred_arc_idx: &mut [Option<usize>],
    ) -> Option<usize> {
        let mut last_updated = None;

        for u in 0..csr.num_nodes {
            for i in csr.arcs_from(u) {
                let v = csr.arc_targets[i];
                let candidate = distance[u] + csr.arc_weights[i];

                if distance[v] > candidate {
                    trace!(from = u, to = v, distance = candidate, "relaxed");
                    distance[v] = candidate;
                    pred_arc_idx[v] = Some(i);
                    last_updated = Some(v);
                }
            }
        }

        last_updated
    }

    /// Reconstructs the negative cycle that `start` leads into.
    ///
    /// `start` is only known to be downstream of a cycle; it may sit on a tail
    /// of nodes leading into it. Predecessor arcs are followed back until a
    /// node repeats, which is guaranteed to lie on the cycle, and the cycle is
    /// then collected from that node and reversed into forward order. Tail
    /// nodes never appear in the result.
    ///
    /// # Arguments
    /// * `start` - Node updated in the extra relaxation round.
    /// * `pred_arc_idx` - CSR index of the predecessor arc for each node.
    /// * `csr` - Arc index the predecessors refer to.
    ///
    /// # Returns
    /// A closed [`Walk`] whose first and last vertex are the node the cycle
    /// was entered at.
    ///
    /// # Errors
    /// Returns `Error::CycleReconstructionFailed` if a predecessor is missing
    /// or the cycle is longer than the graph has nodes.
    fn reconstruct_cycle(
        &self,
        start: usize,
        pred_arc_idx: &[Option<usize>],
        csr: &GraphCSR,
    ) -> Result<Walk> {
        let num_nodes = csr.num_nodes;
        let mut visited = vec![false; num_nodes];

        let mut trace_node = start;
        while !visited[trace_node] {
            visited[trace_node] = true;
            let arc_idx = pred_arc_idx[trace_node].ok_or(Error::CycleReconstructionFailed)?;
            trace_node = csr.get_arc_source_node(arc_idx)?;
        }

        let cycle_start_node = trace_node;
        let mut cycle_arc_indices: Vec<usize> = Vec::new();
        let mut current_node = cycle_start_node;

        loop {
            let arc_idx = pred_arc_idx[current_node].ok_or(Error::CycleReconstructionFailed)?;
            cycle_arc_indices.push(arc_idx);

            if cycle_arc_indices.len() > num_nodes {
                return Err(Error::CycleReconstructionFailed);
            }

            current_node = csr.get_arc_source_node(arc_idx)?;
            if current_node == cycle_start_node {
                break;
            }
        }

        cycle_arc_indices.reverse();

        let ids = self.graph.vertices();
        let mut vertices = Vec::with_capacity(cycle_arc_indices.len() + 1);
        let mut edges = Vec::with_capacity(cycle_arc_indices.len());

        vertices.push(ids[cycle_start_node]);
        for &arc_idx in &cycle_arc_indices {
            let edge_id = csr.arc_edges[arc_idx];
            edges.push((edge_id, *self.graph.edge(edge_id)?));
            vertices.push(ids[csr.arc_targets[arc_idx]]);
        }

        Walk::new(vertices, edges)
    }
}
