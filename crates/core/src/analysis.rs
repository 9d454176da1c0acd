use common::error::{Error, Result};
use common::types::{EdgeId, VertexId};
use tracing::{debug, warn};

use super::config::AnalysisConfig;
use super::degree::DegreeAnalyzer;
use super::graph::Graph;
use super::mst::MinimumSpanningTree;
use super::negative_cycle::NegativeCycleDetector;
use super::walk::Walk;

#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTreeSummary {
    pub start: VertexId,
    pub edges: Vec<EdgeId>,
    pub weight: f64,
}

/// Results of every configured analysis over one graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// `None` for the empty graph.
    pub degree_min: Option<usize>,
    pub degree_max: Option<usize>,
    pub regular: bool,
    /// `None` when no negative cycle exists or the search is disabled.
    pub negative_cycle: Option<Walk>,
    pub spanning_tree: std::result::Result<SpanningTreeSummary, Error>,
}

/// Runs degree statistics, negative cycle search and spanning tree
/// construction as configured.
///
/// Expected outcomes such as an empty or disconnected graph land in the
/// report; only inconsistencies inside the algorithms are returned as errors.
pub fn analyze(graph: &Graph, config: &AnalysisConfig) -> Result<GraphReport> {
    let degrees = DegreeAnalyzer::new(graph);

    let negative_cycle = if config.negative_cycle.enabled && !graph.is_empty() {
        match NegativeCycleDetector::new(graph).cycle_negative() {
            Ok(walk) => Some(walk),
            Err(Error::NoCycleFound) => None,
            Err(e) => return Err(e),
        }
    } else {
        None
    };

    let report = GraphReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        degree_min: degrees.degree_min().ok(),
        degree_max: degrees.degree_max().ok(),
        regular: degrees.is_regular(),
        negative_cycle,
        spanning_tree: spanning_tree(graph, config),
    };

    debug!(
        vertices = report.vertex_count,
        edges = report.edge_count,
        negative_cycle = report.negative_cycle.is_some(),
        spanning = report.spanning_tree.is_ok(),
        "graph analysed"
    );

    Ok(report)
}

fn spanning_tree(graph: &Graph, config: &AnalysisConfig) -> Result<SpanningTreeSummary> {
    let start = match config.mst.start_vertex {
        Some(vertex) if graph.has_vertex(vertex) => vertex,
        Some(vertex) => {
            let first = graph.first_vertex()?;
            warn!(configured = vertex, fallback = first, "start vertex not in graph");
            first
        }
        None => graph.first_vertex()?,
    };

    let tree = MinimumSpanningTree::new(graph, start, config.mst.strategy)?;

    Ok(SpanningTreeSummary {
        start,
        edges: tree.edge_ids()?.to_vec(),
        weight: tree.weight()?,
    })
}
