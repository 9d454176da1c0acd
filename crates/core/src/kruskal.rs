use common::error::Result;
use common::types::{EdgeId, VertexId};
use tracing::trace;

use super::graph::Graph;
use super::traits::MstStrategy;

/// Disjoint-set forest over dense vertex indices, with path halving and
/// union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Merges the sets of `a` and `b`. Returns false if they were already one.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        true
    }
}

/// Global edge-sort strategy (Kruskal).
///
/// Sorts every edge by weight (stable, so equal weights keep insertion
/// order) and accepts each edge that joins two separate components. The
/// start vertex does not influence the selection; it only has to exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl MstStrategy for Kruskal {
    fn select_edges(&self, graph: &Graph, start: VertexId) -> Result<Vec<EdgeId>> {
        graph.index_of(start)?;

        let mut order: Vec<EdgeId> = (0..graph.edge_count()).collect();
        order.sort_by(|&a, &b| graph.edges()[a].weight.total_cmp(&graph.edges()[b].weight));

        let mut components = DisjointSet::new(graph.vertex_count());
        let mut selected = Vec::with_capacity(graph.vertex_count().saturating_sub(1));

        for edge_id in order {
            let edge = graph.edge(edge_id)?;
            let u = graph.index_of(edge.from)?;
            let v = graph.index_of(edge.to)?;

            if components.union(u, v) {
                trace!(edge = edge_id, weight = edge.weight, "edge joins two components");
                selected.push(edge_id);

                if selected.len() + 1 == graph.vertex_count() {
                    break;
                }
            }
        }

        Ok(selected)
    }
}
