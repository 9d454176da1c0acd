use thiserror::Error;

use crate::types::VertexId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The operation needs at least one vertex.
    #[error("Graph has no vertices.")]
    EmptyGraph,

    /// Vertex degrees differ where a uniform degree was required.
    #[error("Graph is not k-regular (vertex degrees differ).")]
    IrregularGraph,

    /// A result was requested from a graph without the vertices or edges it needs.
    #[error("Graph has no vertices or edges to build a result from.")]
    Underflow,

    /// A negative cycle was requested but none exists.
    #[error("No negative cycle found.")]
    NoCycleFound,

    /// Not every vertex is reachable from the spanning tree's start vertex.
    #[error("Graph is not connected, no spanning tree covers every vertex.")]
    DisconnectedGraph,

    #[error("Vertex {0} does not exist in this graph.")]
    VertexNotFound(VertexId),

    #[error("Vertex {0} already exists in this graph.")]
    DuplicateVertex(VertexId),

    /// Indicates a structural inconsistency found during graph processing or validation.
    #[error("Graph structure is invalid or inconsistent.")]
    InvalidGraph,

    /// Failed to trace the full cycle path, usually due to broken predecessor chains.
    #[error("Cycle path reconstruction failed due to broken predecessor chain.")]
    CycleReconstructionFailed,

    #[error("Configuration error: {0}")]
    Config(String),
}
