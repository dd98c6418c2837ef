//! Arena storage for vertices and directed half-edges.
//!
//! [`HalfEdgeStorage`] is purely structural: it owns vertices and directed
//! edges, their payloads, and the per-vertex incidence lists. It performs no
//! twin/next bookkeeping; that lives in [`mutation`](crate::topology::mutation).
//!
//! Both arenas are `slotmap::SlotMap`s, so handles stay valid while the
//! element lives and a removed handle is never confused with a later one.

use std::ops::{Index, IndexMut};

use slotmap::SlotMap;

use crate::hedi_error::HediError;
use crate::topology::handle::{EdgeId, VertexId};

#[derive(Clone, Debug)]
struct VertexSlot<V> {
    props: V,
    /// Edges with this vertex as source.
    out: Vec<EdgeId>,
    /// Edges with this vertex as target.
    inc: Vec<EdgeId>,
}

#[derive(Clone, Debug)]
struct EdgeSlot<E> {
    source: VertexId,
    target: VertexId,
    props: E,
}

/// Bidirectional directed multigraph with per-vertex and per-edge payloads.
///
/// # Type Parameters
/// - `V`: vertex payload.
/// - `E`: edge payload.
#[derive(Clone, Debug)]
pub struct HalfEdgeStorage<V, E> {
    vertices: SlotMap<VertexId, VertexSlot<V>>,
    edges: SlotMap<EdgeId, EdgeSlot<E>>,
}

impl<V, E> Default for HalfEdgeStorage<V, E> {
    fn default() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
        }
    }
}

impl<V, E> HalfEdgeStorage<V, E> {
    /// Creates a new, empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with room for `vertices` vertices and `edges` edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: SlotMap::with_capacity_and_key(vertices),
            edges: SlotMap::with_capacity_and_key(edges),
        }
    }

    // ---------- vertices ----------

    /// Adds a vertex with a blank payload.
    pub fn add_vertex(&mut self) -> VertexId
    where
        V: Default,
    {
        self.add_vertex_with(V::default())
    }

    /// Adds a vertex carrying `props`.
    pub fn add_vertex_with(&mut self, props: V) -> VertexId {
        self.vertices.insert(VertexSlot {
            props,
            out: Vec::new(),
            inc: Vec::new(),
        })
    }

    /// Removes every edge incident to `v` (both directions).
    ///
    /// Returns the number of edges removed. Handles of removed edges become
    /// stale; no twin/next repair happens.
    pub fn clear_vertex(&mut self, v: VertexId) -> Result<usize, HediError> {
        let slot = self
            .vertices
            .get_mut(v)
            .ok_or(HediError::MissingVertex(v))?;
        let mut incident = std::mem::take(&mut slot.out);
        incident.append(&mut slot.inc);
        // self-loops are listed on both sides
        incident.sort_unstable();
        incident.dedup();

        let mut removed = 0;
        for e in incident {
            if self.detach_edge(e).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Removes `v` together with any edge still incident to it.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<V, HediError> {
        self.clear_vertex(v)?;
        self.vertices
            .remove(v)
            .map(|slot| slot.props)
            .ok_or(HediError::MissingVertex(v))
    }

    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains_key(v)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over all live vertices in arena order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys()
    }

    pub fn vertex(&self, v: VertexId) -> Result<&V, HediError> {
        self.vertices
            .get(v)
            .map(|slot| &slot.props)
            .ok_or(HediError::MissingVertex(v))
    }

    pub fn vertex_mut(&mut self, v: VertexId) -> Result<&mut V, HediError> {
        self.vertices
            .get_mut(v)
            .map(|slot| &mut slot.props)
            .ok_or(HediError::MissingVertex(v))
    }

    /// Edges leaving `v`, in insertion order.
    pub fn out_edges(&self, v: VertexId) -> Result<&[EdgeId], HediError> {
        self.vertices
            .get(v)
            .map(|slot| slot.out.as_slice())
            .ok_or(HediError::MissingVertex(v))
    }

    /// Edges arriving at `v`, in insertion order.
    pub fn in_edges(&self, v: VertexId) -> Result<&[EdgeId], HediError> {
        self.vertices
            .get(v)
            .map(|slot| slot.inc.as_slice())
            .ok_or(HediError::MissingVertex(v))
    }

    /// Number of edges leaving `v`.
    pub fn degree(&self, v: VertexId) -> Result<usize, HediError> {
        self.out_edges(v).map(<[EdgeId]>::len)
    }

    // ---------- edges ----------

    /// Adds a directed edge `v1 -> v2` with a blank payload.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<EdgeId, HediError>
    where
        E: Default,
    {
        self.add_edge_with(v1, v2, E::default())
    }

    /// Adds a directed edge `v1 -> v2` carrying `props`.
    ///
    /// Parallel edges are permitted.
    pub fn add_edge_with(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        props: E,
    ) -> Result<EdgeId, HediError> {
        if !self.vertices.contains_key(v1) {
            return Err(HediError::MissingVertex(v1));
        }
        if !self.vertices.contains_key(v2) {
            return Err(HediError::MissingVertex(v2));
        }
        let e = self.edges.insert(EdgeSlot {
            source: v1,
            target: v2,
            props,
        });
        self.vertices[v1].out.push(e);
        self.vertices[v2].inc.push(e);
        Ok(e)
    }

    /// Removes edge `e`, returning its payload.
    ///
    /// Only `e`'s handle is invalidated. Any twin or next link that pointed at
    /// `e` is left dangling.
    pub fn remove_edge(&mut self, e: EdgeId) -> Result<E, HediError> {
        self.detach_edge(e).ok_or(HediError::MissingEdge(e))
    }

    /// Removes the first edge `v1 -> v2`.
    pub fn remove_edge_between(&mut self, v1: VertexId, v2: VertexId) -> Result<E, HediError> {
        let e = self
            .edge(v1, v2)
            .ok_or(HediError::MissingEdgeBetween { from: v1, to: v2 })?;
        self.remove_edge(e)
    }

    fn detach_edge(&mut self, e: EdgeId) -> Option<E> {
        let slot = self.edges.remove(e)?;
        if let Some(src) = self.vertices.get_mut(slot.source) {
            src.out.retain(|&x| x != e);
        }
        if let Some(dst) = self.vertices.get_mut(slot.target) {
            dst.inc.retain(|&x| x != e);
        }
        Some(slot.props)
    }

    #[inline]
    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edges.contains_key(e)
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over all live edges in arena order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys()
    }

    #[inline]
    pub fn source(&self, e: EdgeId) -> Result<VertexId, HediError> {
        self.edges
            .get(e)
            .map(|slot| slot.source)
            .ok_or(HediError::MissingEdge(e))
    }

    #[inline]
    pub fn target(&self, e: EdgeId) -> Result<VertexId, HediError> {
        self.edges
            .get(e)
            .map(|slot| slot.target)
            .ok_or(HediError::MissingEdge(e))
    }

    /// `(source, target)` of `e`.
    #[inline]
    pub fn endpoints(&self, e: EdgeId) -> Result<(VertexId, VertexId), HediError> {
        self.edges
            .get(e)
            .map(|slot| (slot.source, slot.target))
            .ok_or(HediError::MissingEdge(e))
    }

    pub fn edge_props(&self, e: EdgeId) -> Result<&E, HediError> {
        self.edges
            .get(e)
            .map(|slot| &slot.props)
            .ok_or(HediError::MissingEdge(e))
    }

    pub fn edge_props_mut(&mut self, e: EdgeId) -> Result<&mut E, HediError> {
        self.edges
            .get_mut(e)
            .map(|slot| &mut slot.props)
            .ok_or(HediError::MissingEdge(e))
    }

    /// The first edge `v1 -> v2`, if any.
    pub fn edge(&self, v1: VertexId, v2: VertexId) -> Option<EdgeId> {
        self.vertices
            .get(v1)?
            .out
            .iter()
            .copied()
            .find(|&e| self.edges.get(e).is_some_and(|slot| slot.target == v2))
    }

    #[inline]
    pub fn has_edge(&self, v1: VertexId, v2: VertexId) -> bool {
        self.edge(v1, v2).is_some()
    }
}

impl<V, E> Index<VertexId> for HalfEdgeStorage<V, E> {
    type Output = V;

    /// # Panics
    /// Panics if `v` is not live.
    fn index(&self, v: VertexId) -> &V {
        &self.vertices[v].props
    }
}

impl<V, E> IndexMut<VertexId> for HalfEdgeStorage<V, E> {
    fn index_mut(&mut self, v: VertexId) -> &mut V {
        &mut self.vertices[v].props
    }
}

impl<V, E> Index<EdgeId> for HalfEdgeStorage<V, E> {
    type Output = E;

    /// # Panics
    /// Panics if `e` is not live.
    fn index(&self, e: EdgeId) -> &E {
        &self.edges[e].props
    }
}

impl<V, E> IndexMut<EdgeId> for HalfEdgeStorage<V, E> {
    fn index_mut(&mut self, e: EdgeId) -> &mut E {
        &mut self.edges[e].props
    }
}
