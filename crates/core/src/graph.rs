use std::collections::HashMap;

use common::error::{Error, Result};
use common::types::{Edge, EdgeId, VertexId};

/// In-memory multigraph mixing directed and undirected weighted edges.
///
/// Vertices keep their insertion order and get a dense index
/// (`0..vertex_count`) that algorithms use to key their transient state.
/// Edges are identified by their insertion position.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with the given identity.
    ///
    /// # Errors
    /// Returns `Error::DuplicateVertex` if the id is already taken.
    pub fn create_vertex(&mut self, id: VertexId) -> Result<VertexId> {
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateVertex(id));
        }

        self.index.insert(id, self.vertices.len());
        self.vertices.push(id);

        Ok(id)
    }

    /// Adds a directed edge `from -> to`.
    ///
    /// # Errors
    /// Returns `Error::VertexNotFound` if either endpoint is missing.
    pub fn create_edge_directed(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
    ) -> Result<EdgeId> {
        self.push_edge(Edge::directed(from, to, weight))
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// # Errors
    /// Returns `Error::VertexNotFound` if either endpoint is missing.
    pub fn create_edge_undirected(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: f64,
    ) -> Result<EdgeId> {
        self.push_edge(Edge::undirected(a, b, weight))
    }

    /// Adds a copy of `edge`, keeping its endpoints, weight and directedness.
    pub fn create_edge_clone(&mut self, edge: &Edge) -> Result<EdgeId> {
        self.push_edge(*edge)
    }

    fn push_edge(&mut self, edge: Edge) -> Result<EdgeId> {
        for vertex in [edge.from, edge.to] {
            if !self.has_vertex(vertex) {
                return Err(Error::VertexNotFound(vertex));
            }
        }

        self.edges.push(edge);

        Ok(self.edges.len() - 1)
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates `(EdgeId, &Edge)` pairs in insertion order.
    pub fn edges_indexed(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate()
    }

    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges.get(id).ok_or(Error::InvalidGraph)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// A graph without vertices is empty, regardless of anything else.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Dense index of a vertex, suitable for keying per-vertex arrays.
    pub fn index_of(&self, id: VertexId) -> Result<usize> {
        self.index.get(&id).copied().ok_or(Error::VertexNotFound(id))
    }

    pub fn first_vertex(&self) -> Result<VertexId> {
        self.vertices.first().copied().ok_or(Error::EmptyGraph)
    }

    /// Number of edge endpoints at `vertex`. Loops count twice, direction is ignored.
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.index_of(vertex)?;

        Ok(self
            .edges
            .iter()
            .map(|e| usize::from(e.from == vertex) + usize::from(e.to == vertex))
            .sum())
    }

    /// Degree of every vertex, in vertex insertion order, computed in one pass.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertices.len()];

        for edge in &self.edges {
            if let (Some(&u), Some(&v)) = (self.index.get(&edge.from), self.index.get(&edge.to))
            {
                degrees[u] += 1;
                degrees[v] += 1;
            }
        }

        degrees
    }

    /// Number of edges that can be traversed into `vertex`.
    pub fn in_degree(&self, vertex: VertexId) -> Result<usize> {
        self.index_of(vertex)?;

        Ok(self.edges.iter().filter(|e| e.has_edge_to(vertex)).count())
    }

    /// Number of edges that can be traversed out of `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.index_of(vertex)?;

        Ok(self.edges.iter().filter(|e| e.has_edge_from(vertex)).count())
    }

    fn sorted_edge_keys(&self) -> Vec<(VertexId, VertexId, bool, f64)> {
        let mut keys: Vec<_> = self
            .edges
            .iter()
            .map(|e| {
                let (a, b) = e.canonical_endpoints();
                (a, b, e.directed, e.weight)
            })
            .collect();

        keys.sort_by(|x, y| {
            (x.0, x.1, x.2)
                .cmp(&(y.0, y.1, y.2))
                .then(x.3.total_cmp(&y.3))
        });

        keys
    }
}

/// Structural equality: same vertex ids and the same multiset of edges, where
/// undirected edges compare regardless of endpoint order. Insertion order is
/// ignored.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        if self.vertex_count() != other.vertex_count()
            || self.edge_count() != other.edge_count()
        {
            return false;
        }

        let mut ours = self.vertices.clone();
        let mut theirs = other.vertices.clone();
        ours.sort_unstable();
        theirs.sort_unstable();

        ours == theirs && self.sorted_edge_keys() == other.sorted_edge_keys()
    }
}
