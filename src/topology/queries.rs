//! Read-only topology queries on a [`HalfEdgeGraph`].
//!
//! Everything here is built from the twin/next/source/target primitives and
//! never mutates. Results are only meaningful while the graph invariants hold;
//! boundary walks are capped so a corrupted `next` cycle surfaces as
//! [`HediError::UnclosedBoundary`] instead of a hang.

use hashbrown::HashSet;

use crate::hedi_error::{EdgeLink, HediError};
use crate::topology::boundary::FaceEdges;
use crate::topology::graph::HalfEdgeGraph;
use crate::topology::handle::{EdgeId, FaceId, VertexId};
use crate::topology::payload::{EdgeProps, FaceProps, VertexProps};

impl<V, E, F> HalfEdgeGraph<V, E, F>
where
    V: VertexProps,
    E: EdgeProps,
    F: FaceProps,
{
    // ---------- per-edge links ----------

    /// The oppositely directed partner of `e`.
    pub fn twin(&self, e: EdgeId) -> Result<EdgeId, HediError> {
        self.storage.edge_props(e)?.twin().ok_or(HediError::UnlinkedEdge {
            edge: e,
            link: EdgeLink::Twin,
        })
    }

    /// The successor of `e` on its face boundary.
    pub fn next(&self, e: EdgeId) -> Result<EdgeId, HediError> {
        self.storage.edge_props(e)?.next().ok_or(HediError::UnlinkedEdge {
            edge: e,
            link: EdgeLink::Next,
        })
    }

    /// The face to the left of `e`.
    pub fn face_of(&self, e: EdgeId) -> Result<FaceId, HediError> {
        self.storage.edge_props(e)?.face().ok_or(HediError::UnlinkedEdge {
            edge: e,
            link: EdgeLink::Face,
        })
    }

    /// The coefficient stamped on `e`.
    pub fn k(&self, e: EdgeId) -> Result<f64, HediError> {
        Ok(self.storage.edge_props(e)?.k())
    }

    // ---------- face boundaries ----------

    /// Lazy walk over the boundary edges of `face`.
    pub fn face_edges_iter(&self, face: FaceId) -> Result<FaceEdges<'_, V, E, F>, HediError> {
        FaceEdges::for_face(self, face)
    }

    /// Boundary edges of `face`, starting with its representative edge.
    pub fn face_edges(&self, face: FaceId) -> Result<Vec<EdgeId>, HediError> {
        let edges = self
            .face_edges_iter(face)?
            .collect::<Result<Vec<_>, _>>()?;
        if log::log_enabled!(log::Level::Trace) {
            for (n, &e) in edges.iter().enumerate() {
                log::trace!("face {face} edge {n}: {}", self.edge_label(e));
            }
        }
        Ok(edges)
    }

    /// Boundary vertices of `face` in walk order.
    ///
    /// The first entry is the *target* of the representative edge, so for a
    /// triangle `e01 -> e12 -> e20` anchored at `e01` this returns
    /// `[v1, v2, v0]`. Each boundary vertex appears once per visit.
    pub fn face_vertices(&self, face: FaceId) -> Result<Vec<VertexId>, HediError> {
        self.face_edges_iter(face)?
            .map(|e| e.and_then(|e| self.storage.target(e)))
            .collect()
    }

    /// Number of edges on the boundary of `face`.
    pub fn num_face_edges(&self, face: FaceId) -> Result<usize, HediError> {
        self.face_edges_iter(face)?
            .try_fold(0usize, |n, e| e.map(|_| n + 1))
    }

    /// The edge `p` with `next(p) == e`.
    ///
    /// No back-pointers are stored: this walks the `next` cycle through `e`,
    /// so it is linear in the boundary length and requires that cycle to close.
    pub fn previous_edge(&self, e: EdgeId) -> Result<EdgeId, HediError> {
        let mut previous = e;
        for step in FaceEdges::from_edge(self, e) {
            previous = step?;
        }
        Ok(previous)
    }

    // ---------- adjacency ----------

    /// Targets of every out-edge of `v`.
    pub fn adjacent_vertices(&self, v: VertexId) -> Result<Vec<VertexId>, HediError> {
        self.storage
            .out_edges(v)?
            .iter()
            .map(|&e| self.storage.target(e))
            .collect()
    }

    /// Distinct faces to the left of the out-edges of `v`, ascending.
    ///
    /// Out-edges not yet stamped with a face are skipped.
    pub fn adjacent_faces(&self, v: VertexId) -> Result<Vec<FaceId>, HediError> {
        let mut seen = HashSet::new();
        for &e in self.storage.out_edges(v)? {
            if let Some(f) = self.storage.edge_props(e)?.face() {
                seen.insert(f);
            }
        }
        let mut faces: Vec<FaceId> = seen.into_iter().collect();
        faces.sort_unstable();
        Ok(faces)
    }

    #[inline]
    pub fn has_edge(&self, v1: VertexId, v2: VertexId) -> bool {
        self.storage.has_edge(v1, v2)
    }

    /// The directed edge `v1 -> v2`, or `None` if there is none.
    #[inline]
    pub fn edge(&self, v1: VertexId, v2: VertexId) -> Option<EdgeId> {
        self.storage.edge(v1, v2)
    }

    // ---------- counts and enumeration ----------

    /// Out-degree of `v`.
    #[inline]
    pub fn degree(&self, v: VertexId) -> Result<usize, HediError> {
        self.storage.degree(v)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.storage.num_vertices()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.storage.num_edges()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn vertices(&self) -> Vec<VertexId> {
        self.storage.vertices().collect()
    }

    pub fn edges(&self) -> Vec<EdgeId> {
        self.storage.edges().collect()
    }

    pub fn faces(&self) -> Vec<FaceId> {
        self.faces.ids().collect()
    }

    pub fn out_edges(&self, v: VertexId) -> Result<Vec<EdgeId>, HediError> {
        Ok(self.storage.out_edges(v)?.to_vec())
    }
}
