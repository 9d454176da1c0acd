use std::cell::OnceCell;

use common::error::{Error, Result};
use common::types::{Edge, EdgeId, VertexId};
use serde::Deserialize;
use tracing::debug;

use super::graph::Graph;
use super::kruskal::Kruskal;
use super::prim::Prim;
use super::traits::MstStrategy;

/// The available spanning tree strategies, chosen at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstKind {
    #[default]
    Prim,
    Kruskal,
}

impl MstStrategy for MstKind {
    fn select_edges(&self, graph: &Graph, start: VertexId) -> Result<Vec<EdgeId>> {
        match self {
            MstKind::Prim => Prim.select_edges(graph, start),
            MstKind::Kruskal => Kruskal.select_edges(graph, start),
        }
    }
}

/// Minimum spanning tree over a whole graph, computed by strategy `S`.
///
/// Edge direction is ignored. The tree must span every vertex of the graph:
/// any graph with more than one component, including one with an extra
/// isolated vertex, is reported as `Error::DisconnectedGraph` instead of
/// yielding a forest. The selection is computed on first query and cached.
pub struct MinimumSpanningTree<'g, S = MstKind> {
    graph: &'g Graph,
    start: VertexId,
    strategy: S,
    edges: OnceCell<Vec<EdgeId>>,
}

impl<'g, S> MinimumSpanningTree<'g, S>
where
    S: MstStrategy,
{
    /// # Errors
    /// Returns `Error::VertexNotFound` if `start` is not part of `graph`.
    pub fn new(graph: &'g Graph, start: VertexId, strategy: S) -> Result<Self> {
        graph.index_of(start)?;

        Ok(Self {
            graph,
            start,
            strategy,
            edges: OnceCell::new(),
        })
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Ids of the selected edges, in the order the strategy picked them.
    ///
    /// # Errors
    /// Returns `Error::DisconnectedGraph` if the tree cannot reach every vertex.
    pub fn edge_ids(&self) -> Result<&[EdgeId]> {
        if let Some(cached) = self.edges.get() {
            return Ok(cached.as_slice());
        }

        let selected = self.strategy.select_edges(self.graph, self.start)?;

        if selected.len() + 1 != self.graph.vertex_count() {
            debug!(
                selected = selected.len(),
                vertices = self.graph.vertex_count(),
                "spanning tree does not cover the graph"
            );
            return Err(Error::DisconnectedGraph);
        }

        Ok(self.edges.get_or_init(|| selected).as_slice())
    }

    /// The selected edges, in selection order.
    ///
    /// # Errors
    /// Same as [`Self::edge_ids`].
    pub fn edges(&self) -> Result<Vec<Edge>> {
        self.edge_ids()?
            .iter()
            .map(|&id| self.graph.edge(id).copied())
            .collect()
    }

    /// Total weight of the tree; `0.0` for a single isolated vertex.
    pub fn weight(&self) -> Result<f64> {
        let weight = self.edges()?.iter().map(|e| e.weight).sum();
        debug!(weight, start = self.start, "spanning tree weight");

        Ok(weight)
    }

    /// Materializes the tree as a new graph holding every vertex and the
    /// selected edges, each copied with its weight and direction flag.
    pub fn create_graph(&self) -> Result<Graph> {
        let edges = self.edges()?;
        let mut tree = Graph::new();

        for &vertex in self.graph.vertices() {
            tree.create_vertex(vertex)?;
        }
        for edge in &edges {
            tree.create_edge_clone(edge)?;
        }

        Ok(tree)
    }
}
