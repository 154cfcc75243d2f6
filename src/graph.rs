//! Undirected weighted graph with an incidence table.
//!
//! Vertices carry an arbitrary payload `V`; links carry an unsigned weight
//! `W`. Each vertex's incident links are kept in a lookup table keyed by
//! vertex id rather than owned by the vertex.

use alloc::vec::Vec;
use core::fmt;
use num_traits::{PrimInt, Unsigned};

/// Handle of a vertex inside its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle of a link inside its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkId(usize);

impl LinkId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors returned by graph construction and path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex id does not belong to this graph.
    UnknownVertex(VertexId),
    /// A link must join two distinct vertices.
    SelfLoop(VertexId),
    /// The unordered pair is already joined by `existing`.
    DuplicateLink { existing: LinkId },
    /// `target` cannot be reached from `source`.
    NoPathFound { source: VertexId, target: VertexId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex(v) => write!(f, "Unknown vertex {}", v.0),
            GraphError::SelfLoop(v) => write!(f, "Vertex {} cannot link to itself", v.0),
            GraphError::DuplicateLink { existing } => {
                write!(f, "Vertices are already joined by link {}", existing.0)
            }
            GraphError::NoPathFound { source, target } => {
                write!(f, "No path from vertex {} to vertex {}", source.0, target.0)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GraphError {}

/// Unordered pair of vertices with a non-negative weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<W> {
    a: VertexId,
    b: VertexId,
    weight: W,
}

impl<W: Copy> Link<W> {
    pub fn a(&self) -> VertexId {
        self.a
    }

    pub fn b(&self) -> VertexId {
        self.b
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// Opposite end of the link as seen from `v`.
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.a {
            Some(self.b)
        } else if v == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// Whether the link joins `x` and `y`, in either order.
    pub fn connects(&self, x: VertexId, y: VertexId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Owner of all vertices and links.
#[derive(Debug, Clone)]
pub struct Graph<V, W = u32> {
    vertices: Vec<V>,
    links: Vec<Link<W>>,
    incidence: Vec<Vec<LinkId>>,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            links: Vec::new(),
            incidence: Vec::new(),
        }
    }
}

impl<V, W> Graph<V, W>
where
    W: PrimInt + Unsigned,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, payload: V) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(payload);
        self.incidence.push(Vec::new());
        id
    }

    /// Join `a` and `b` with a link of `weight`.
    ///
    /// At most one link may join any unordered pair; a second insertion
    /// fails with [`GraphError::DuplicateLink`] and leaves the graph as is.
    pub fn add_link(&mut self, a: VertexId, b: VertexId, weight: W) -> Result<LinkId, GraphError> {
        self.check(a)?;
        self.check(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if let Some(existing) = self.link_between(a, b) {
            return Err(GraphError::DuplicateLink { existing });
        }
        let id = LinkId(self.links.len());
        self.links.push(Link { a, b, weight });
        self.incidence[a.0].push(id);
        self.incidence[b.0].push(id);
        Ok(id)
    }

    /// [`Graph::add_link`] with the default weight of one.
    pub fn add_unit_link(&mut self, a: VertexId, b: VertexId) -> Result<LinkId, GraphError> {
        self.add_link(a, b, W::one())
    }

    pub fn link_between(&self, a: VertexId, b: VertexId) -> Option<LinkId> {
        self.incidence
            .get(a.0)?
            .iter()
            .copied()
            .find(|id| self.links[id.0].connects(a, b))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id.0)
    }

    pub fn link(&self, id: LinkId) -> Option<&Link<W>> {
        self.links.get(id.0)
    }

    /// All links with their ids, in insertion order.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link<W>)> {
        self.links.iter().enumerate().map(|(i, l)| (LinkId(i), l))
    }

    /// Links incident to `v`, in insertion order.
    pub fn links_of(&self, v: VertexId) -> &[LinkId] {
        self.incidence.get(v.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First vertex whose payload satisfies `pred`.
    pub fn find_vertex<F>(&self, mut pred: F) -> Option<VertexId>
    where
        F: FnMut(&V) -> bool,
    {
        self.vertices.iter().position(|v| pred(v)).map(VertexId)
    }

    pub(crate) fn check(&self, v: VertexId) -> Result<(), GraphError> {
        if v.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(v))
        }
    }
}
