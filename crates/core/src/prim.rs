use std::cmp::Reverse;
use std::collections::BinaryHeap;

use common::error::Result;
use common::types::{EdgeId, VertexId};
use ordered_float::OrderedFloat;
use tracing::trace;

use super::graph::Graph;
use super::traits::MstStrategy;

/// Frontier candidate: cheapest first, then earliest inserted edge.
type Candidate = Reverse<(OrderedFloat<f64>, EdgeId, usize)>;

/// Source-growth strategy (Prim).
///
/// Keeps a frontier of vertices already in the tree and repeatedly takes the
/// cheapest edge with exactly one endpoint inside it. Equal weights resolve
/// to the edge inserted first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl Prim {
    /// Undirected adjacency in dense indices: `(edge, other endpoint)` per
    /// vertex, loops left out.
    fn adjacency(graph: &Graph) -> Result<Vec<Vec<(EdgeId, usize)>>> {
        let mut adjacency = vec![Vec::new(); graph.vertex_count()];

        for (id, edge) in graph.edges_indexed() {
            if edge.is_loop() {
                continue;
            }
            let u = graph.index_of(edge.from)?;
            let v = graph.index_of(edge.to)?;
            adjacency[u].push((id, v));
            adjacency[v].push((id, u));
        }

        Ok(adjacency)
    }

    /// Moves `node` into the tree and offers its edges to outside vertices.
    fn enter_tree(
        graph: &Graph,
        adjacency: &[Vec<(EdgeId, usize)>],
        node: usize,
        in_tree: &mut [bool],
        frontier: &mut BinaryHeap<Candidate>,
    ) {
        in_tree[node] = true;

        for &(edge_id, other) in &adjacency[node] {
            if !in_tree[other] {
                let weight = graph.edges()[edge_id].weight;
                frontier.push(Reverse((OrderedFloat(weight), edge_id, other)));
            }
        }
    }
}

impl MstStrategy for Prim {
    fn select_edges(&self, graph: &Graph, start: VertexId) -> Result<Vec<EdgeId>> {
        let adjacency = Self::adjacency(graph)?;
        let start = graph.index_of(start)?;

        let mut in_tree = vec![false; graph.vertex_count()];
        let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();
        let mut selected = Vec::with_capacity(graph.vertex_count().saturating_sub(1));

        Self::enter_tree(graph, &adjacency, start, &mut in_tree, &mut frontier);

        while let Some(Reverse((weight, edge_id, node))) = frontier.pop() {
            // Both endpoints already inside: stale candidate.
            if in_tree[node] {
                continue;
            }

            trace!(edge = edge_id, weight = weight.into_inner(), "frontier edge selected");
            selected.push(edge_id);
            Self::enter_tree(graph, &adjacency, node, &mut in_tree, &mut frontier);
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_weights_prefer_first_inserted_edge() {
        let mut graph = Graph::new();
        for id in 1..=3 {
            graph.create_vertex(id).unwrap();
        }
        graph.create_edge_undirected(1, 3, 2.0).unwrap();
        graph.create_edge_undirected(1, 2, 2.0).unwrap();
        graph.create_edge_undirected(2, 3, 2.0).unwrap();

        assert_eq!(Prim.select_edges(&graph, 1).unwrap(), vec![0, 1]);
    }

    #[test]
    fn stops_at_component_boundary() {
        let mut graph = Graph::new();
        for id in 1..=4 {
            graph.create_vertex(id).unwrap();
        }
        graph.create_edge_undirected(1, 2, 1.0).unwrap();
        graph.create_edge_undirected(3, 4, 1.0).unwrap();

        assert_eq!(Prim.select_edges(&graph, 3).unwrap(), vec![1]);
    }

    #[test]
    fn loops_are_never_selected() {
        let mut graph = Graph::new();
        graph.create_vertex(1).unwrap();
        graph.create_vertex(2).unwrap();
        graph.create_edge_undirected(1, 1, -10.0).unwrap();
        graph.create_edge_directed(2, 1, 5.0).unwrap();

        assert_eq!(Prim.select_edges(&graph, 1).unwrap(), vec![1]);
    }
}
