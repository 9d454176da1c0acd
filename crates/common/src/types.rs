/// Caller-chosen identity of a vertex, unique within a graph.
pub type VertexId = u64;

/// Dense index of an edge inside the graph that created it, in insertion order.
pub type EdgeId = usize;

/// A weighted connection between two vertices.
///
/// A directed edge always runs `from -> to`. An undirected edge may be
/// traversed from either endpoint; `from`/`to` then only record the order
/// in which the endpoints were given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub directed: bool,
}

impl Edge {
    pub fn directed(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self {
            from,
            to,
            weight,
            directed: true,
        }
    }

    pub fn undirected(a: VertexId, b: VertexId, weight: f64) -> Self {
        Self {
            from: a,
            to: b,
            weight,
            directed: false,
        }
    }

    /// Returns true if both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if `vertex` is one of the endpoints.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }

    /// Returns the endpoint across from `vertex`, or `None` if `vertex` is not
    /// an endpoint. For a loop this is the vertex itself.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.from == vertex {
            Some(self.to)
        } else if self.to == vertex {
            Some(self.from)
        } else {
            None
        }
    }

    /// Returns true if the edge can be traversed starting at `vertex`.
    pub fn has_edge_from(&self, vertex: VertexId) -> bool {
        if self.directed {
            self.from == vertex
        } else {
            self.contains(vertex)
        }
    }

    /// Returns true if the edge can be traversed ending at `vertex`.
    pub fn has_edge_to(&self, vertex: VertexId) -> bool {
        if self.directed {
            self.to == vertex
        } else {
            self.contains(vertex)
        }
    }

    /// Endpoints in a canonical order: as stored for directed edges, sorted
    /// for undirected ones. Used for structural comparison.
    pub fn canonical_endpoints(&self) -> (VertexId, VertexId) {
        if self.directed || self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}
