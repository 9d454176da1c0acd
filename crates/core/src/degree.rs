use common::error::{Error, Result};
use common::types::VertexId;

use crate::graph::Graph;

/// Degree statistics over a graph. Direction is ignored for `degree` and
/// respected for the in/out variants.
pub struct DegreeAnalyzer<'g> {
    graph: &'g Graph,
}

impl<'g> DegreeAnalyzer<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.graph.degree(vertex)
    }

    pub fn in_degree(&self, vertex: VertexId) -> Result<usize> {
        self.graph.in_degree(vertex)
    }

    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.graph.out_degree(vertex)
    }

    /// Returns the common degree `k` of a k-regular graph.
    ///
    /// # Errors
    /// - `Error::EmptyGraph` if the graph has no vertices.
    /// - `Error::IrregularGraph` if vertex degrees differ.
    pub fn k_regular_degree(&self) -> Result<usize> {
        let degrees = self.graph.degrees();
        let (&first, rest) = degrees.split_first().ok_or(Error::EmptyGraph)?;

        if rest.iter().any(|&d| d != first) {
            return Err(Error::IrregularGraph);
        }

        Ok(first)
    }

    pub fn degree_min(&self) -> Result<usize> {
        self.graph.degrees().into_iter().min().ok_or(Error::EmptyGraph)
    }

    pub fn degree_max(&self) -> Result<usize> {
        self.graph.degrees().into_iter().max().ok_or(Error::EmptyGraph)
    }

    /// Returns whether every vertex has the same degree. The empty graph is
    /// regular.
    ///
    /// This is the one place an `Error::IrregularGraph` turns into `false`.
    pub fn is_regular(&self) -> bool {
        !matches!(self.k_regular_degree(), Err(Error::IrregularGraph))
    }

    /// Returns whether every vertex has as many incoming as outgoing edges.
    pub fn is_balanced(&self) -> Result<bool> {
        for &vertex in self.graph.vertices() {
            if self.in_degree(vertex)? != self.out_degree(vertex)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    pub fn is_vertex_isolated(&self, vertex: VertexId) -> Result<bool> {
        Ok(self.degree(vertex)? == 0)
    }

    /// A source has outgoing edges but nothing leading into it.
    pub fn is_vertex_source(&self, vertex: VertexId) -> Result<bool> {
        Ok(self.in_degree(vertex)? == 0 && self.out_degree(vertex)? > 0)
    }

    /// A sink has incoming edges but nothing leading out of it.
    pub fn is_vertex_sink(&self, vertex: VertexId) -> Result<bool> {
        Ok(self.out_degree(vertex)? == 0 && self.in_degree(vertex)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_vertices(ids: &[u64]) -> Graph {
        let mut graph = Graph::new();
        for &id in ids {
            graph.create_vertex(id).unwrap();
        }
        graph
    }

    #[test]
    fn empty_graph_is_regular_but_has_no_degree() {
        let graph = Graph::new();
        let alg = DegreeAnalyzer::new(&graph);

        assert!(alg.is_regular());
        assert!(alg.is_balanced().unwrap());
        assert_eq!(alg.k_regular_degree(), Err(Error::EmptyGraph));
        assert_eq!(alg.degree_min(), Err(Error::EmptyGraph));
        assert_eq!(alg.degree_max(), Err(Error::EmptyGraph));
    }

    #[test]
    fn isolated_vertices_are_zero_regular() {
        let graph = graph_with_vertices(&[1, 2]);
        let alg = DegreeAnalyzer::new(&graph);

        assert_eq!(alg.k_regular_degree().unwrap(), 0);
        assert!(alg.is_regular());
        assert!(alg.is_vertex_isolated(1).unwrap());
    }

    #[test]
    fn triangle_is_two_regular() {
        let mut graph = graph_with_vertices(&[1, 2, 3]);
        graph.create_edge_undirected(1, 2, 1.0).unwrap();
        graph.create_edge_directed(2, 3, 1.0).unwrap();
        graph.create_edge_undirected(3, 1, 1.0).unwrap();

        let alg = DegreeAnalyzer::new(&graph);

        assert_eq!(alg.k_regular_degree().unwrap(), 2);
        assert!(alg.is_regular());
        assert_eq!(alg.degree_min().unwrap(), alg.degree_max().unwrap());
    }

    #[test]
    fn path_is_irregular() {
        // 1 -- 2 -- 3
        let mut graph = graph_with_vertices(&[1, 2, 3]);
        graph.create_edge_undirected(1, 2, 1.0).unwrap();
        graph.create_edge_undirected(2, 3, 1.0).unwrap();

        let alg = DegreeAnalyzer::new(&graph);

        assert_eq!(alg.k_regular_degree(), Err(Error::IrregularGraph));
        assert!(!alg.is_regular());
        assert_eq!(alg.degree_min().unwrap(), 1);
        assert_eq!(alg.degree_max().unwrap(), 2);
    }

    #[test]
    fn loop_adds_two_to_degree() {
        let mut graph = graph_with_vertices(&[1, 2]);
        graph.create_edge_directed(1, 1, 1.0).unwrap();
        graph.create_edge_undirected(2, 2, 1.0).unwrap();

        let alg = DegreeAnalyzer::new(&graph);

        assert_eq!(alg.degree(1).unwrap(), 2);
        assert_eq!(alg.k_regular_degree().unwrap(), 2);
        assert!(alg.is_balanced().unwrap());
    }

    #[test]
    fn directed_path_has_source_and_sink() {
        // 1 --> 2 --> 3
        let mut graph = graph_with_vertices(&[1, 2, 3]);
        graph.create_edge_directed(1, 2, 1.0).unwrap();
        graph.create_edge_directed(2, 3, 1.0).unwrap();

        let alg = DegreeAnalyzer::new(&graph);

        assert!(alg.is_vertex_source(1).unwrap());
        assert!(alg.is_vertex_sink(3).unwrap());
        assert!(!alg.is_vertex_source(2).unwrap());
        assert!(!alg.is_vertex_sink(2).unwrap());
        assert!(!alg.is_balanced().unwrap());
    }

    #[test]
    fn directed_cycle_is_balanced() {
        let mut graph = graph_with_vertices(&[1, 2]);
        graph.create_edge_directed(1, 2, 1.0).unwrap();
        graph.create_edge_directed(2, 1, 1.0).unwrap();

        assert!(DegreeAnalyzer::new(&graph).is_balanced().unwrap());
    }

    #[test]
    fn unknown_vertex_is_reported() {
        let graph = graph_with_vertices(&[1]);
        let alg = DegreeAnalyzer::new(&graph);

        assert_eq!(alg.degree(9), Err(Error::VertexNotFound(9)));
        assert_eq!(alg.is_vertex_sink(9), Err(Error::VertexNotFound(9)));
    }
}
