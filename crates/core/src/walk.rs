use std::collections::HashSet;

use common::error::{Error, Result};
use common::types::{Edge, EdgeId, VertexId};

use crate::graph::Graph;

/// An ordered walk through a graph: `v0 -e0-> v1 -e1-> ... -> vn`.
///
/// A walk always lists one more vertex reference than it has edges. For a
/// closed walk (a cycle) the first vertex is repeated at the end, so a loop
/// on a single vertex reports one edge and two vertex references.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    vertices: Vec<VertexId>,
    edges: Vec<(EdgeId, Edge)>,
}

impl Walk {
    /// # Errors
    /// Returns `Error::InvalidGraph` unless there is exactly one more vertex
    /// than edges.
    pub fn new(vertices: Vec<VertexId>, edges: Vec<(EdgeId, Edge)>) -> Result<Self> {
        if vertices.len() != edges.len() + 1 {
            return Err(Error::InvalidGraph);
        }

        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(EdgeId, Edge)] {
        &self.edges
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().map(|(id, _)| *id).collect()
    }

    pub fn vertex_first(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn edge_first(&self) -> Option<&Edge> {
        self.edges.first().map(|(_, edge)| edge)
    }

    /// Sum of the weights of every traversed edge, repeats included.
    pub fn weight(&self) -> f64 {
        self.edges.iter().map(|(_, edge)| edge.weight).sum()
    }

    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// Materializes the walk as a standalone graph holding its distinct
    /// vertices and edges. An edge traversed more than once appears once.
    pub fn create_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();

        for &vertex in &self.vertices {
            if !graph.has_vertex(vertex) {
                graph.create_vertex(vertex)?;
            }
        }

        let mut seen = HashSet::new();
        for (id, edge) in &self.edges {
            if seen.insert(*id) {
                graph.create_edge_clone(edge)?;
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let edge = Edge::directed(1, 2, 1.0);

        assert_eq!(Walk::new(vec![1], vec![(0, edge)]), Err(Error::InvalidGraph));
    }

    #[test]
    fn closed_walk_over_one_undirected_edge() {
        let edge = Edge::undirected(1, 2, -1.0);
        let walk = Walk::new(vec![1, 2, 1], vec![(0, edge), (0, edge)]).unwrap();

        assert!(walk.is_closed());
        assert_eq!(walk.weight(), -2.0);
        assert_eq!(walk.vertex_first(), 1);
        assert_eq!(walk.edge_ids(), vec![0, 0]);

        let graph = walk.create_graph().unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0], edge);
    }
}
