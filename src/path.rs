//! Single-target Dijkstra search over a [`Graph`].
//!
//! The search is rooted at the target: distances are measured *to* the root
//! and every vertex remembers the link and neighbour that lead one step
//! closer to it. A path from any source is then read off by following that
//! chain until it runs out. For an undirected graph the distance from `a` to
//! `b` equals the distance from `b` to `a`.

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Reverse;
use num_traits::{CheckedAdd, PrimInt, Unsigned};

use crate::graph::{Graph, GraphError, LinkId, VertexId};

/// A route through the graph, listed from source to target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<W> {
    pub vertices: Vec<VertexId>,
    pub links: Vec<LinkId>,
    pub distance: W,
}

/// Shortest distances to a fixed root, with the predecessor chain.
#[derive(Debug, Clone)]
pub struct PathTree<W> {
    root: VertexId,
    distance: Vec<Option<W>>,
    next_hop: Vec<Option<(LinkId, VertexId)>>,
}

impl<W> PathTree<W>
where
    W: PrimInt + Unsigned,
{
    /// Run Dijkstra from `root` over the whole graph.
    ///
    /// A vertex's tentative distance is only replaced by a strictly smaller
    /// one, so ties keep the first route found.
    pub fn build<V>(graph: &Graph<V, W>, root: VertexId) -> Result<Self, GraphError> {
        graph.check(root)?;
        let n = graph.vertex_count();
        let mut distance: Vec<Option<W>> = vec![None; n];
        let mut next_hop: Vec<Option<(LinkId, VertexId)>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut frontier = BinaryHeap::new();

        distance[root.index()] = Some(W::zero());
        frontier.push(Reverse((W::zero(), root)));

        while let Some(Reverse((dist, current))) = frontier.pop() {
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;

            for &link_id in graph.links_of(current) {
                let Some(link) = graph.link(link_id) else {
                    continue;
                };
                let Some(neighbour) = link.other(current) else {
                    continue;
                };
                if visited[neighbour.index()] {
                    continue;
                }
                let Some(candidate) = CheckedAdd::checked_add(&dist, &link.weight()) else {
                    continue;
                };
                let improves = match distance[neighbour.index()] {
                    Some(known) => candidate < known,
                    None => true,
                };
                if improves {
                    distance[neighbour.index()] = Some(candidate);
                    next_hop[neighbour.index()] = Some((link_id, current));
                    frontier.push(Reverse((candidate, neighbour)));
                }
            }
        }

        Ok(Self {
            root,
            distance,
            next_hop,
        })
    }

    pub fn root(&self) -> VertexId {
        self.root
    }

    /// Shortest distance from `v` to the root, `None` when unreachable.
    pub fn distance_from(&self, v: VertexId) -> Option<W> {
        self.distance.get(v.index()).copied().flatten()
    }

    /// Walk the predecessor chain from `source` to the root.
    pub fn path_from(&self, source: VertexId) -> Result<Path<W>, GraphError> {
        if source.index() >= self.distance.len() {
            return Err(GraphError::UnknownVertex(source));
        }
        let distance = self.distance_from(source).ok_or(GraphError::NoPathFound {
            source,
            target: self.root,
        })?;

        let mut vertices = vec![source];
        let mut links = Vec::new();
        let mut current = source;
        while let Some((link, next)) = self.next_hop[current.index()] {
            links.push(link);
            vertices.push(next);
            current = next;
        }
        Ok(Path {
            vertices,
            links,
            distance,
        })
    }
}

/// Shortest path from `source` to `target`.
///
/// Fails with [`GraphError::NoPathFound`] when `target` is unreachable and
/// with [`GraphError::UnknownVertex`] for ids from another graph.
pub fn shortest_path<V, W>(
    graph: &Graph<V, W>,
    source: VertexId,
    target: VertexId,
) -> Result<Path<W>, GraphError>
where
    W: PrimInt + Unsigned,
{
    graph.check(source)?;
    PathTree::build(graph, target)?.path_from(source)
}
