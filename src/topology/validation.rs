//! Whole-graph invariant validation.
//!
//! Checks, per edge: the twin is live, reversed and mutual; `next` is live,
//! continues at `target(e)` and lies on the same face. Per face: the
//! representative edge is live and stamped with the face, and the boundary
//! walk closes with every edge stamped with the face.

use crate::debug_invariants::DebugInvariants;
use crate::hedi_error::HediError;
use crate::topology::graph::HalfEdgeGraph;
use crate::topology::handle::{EdgeId, FaceId};
use crate::topology::payload::{EdgeProps, FaceProps, VertexProps};

/// Validate every edge and every face of `graph`, returning the first
/// violation found.
pub fn validate_topology<V, E, F>(graph: &HalfEdgeGraph<V, E, F>) -> Result<(), HediError>
where
    V: VertexProps,
    E: EdgeProps,
    F: FaceProps,
{
    for e in graph.storage.edges() {
        graph.check_edge(e)?;
    }
    for f in graph.faces.ids() {
        graph.check_face(f)?;
    }
    Ok(())
}

impl<V, E, F> HalfEdgeGraph<V, E, F>
where
    V: VertexProps,
    E: EdgeProps,
    F: FaceProps,
{
    /// Check the twin and next links of a single edge.
    pub fn check_edge(&self, e: EdgeId) -> Result<(), HediError> {
        let (src, trg) = self.storage.endpoints(e)?;

        let twin = self.twin(e)?;
        let (twin_src, twin_trg) = self.storage.endpoints(twin)?;
        if twin_src != trg || twin_trg != src {
            return Err(HediError::TwinEndpointMismatch { e1: e, e2: twin });
        }
        if self.twin(twin)? != e {
            return Err(HediError::TwinNotMutual { edge: e, twin });
        }

        let next = self.next(e)?;
        if self.storage.source(next)? != trg {
            return Err(HediError::DiscontinuousNext { e1: e, e2: next });
        }
        let face = self.face_of(e)?;
        self.expect_face(next, face)
    }

    /// Check the representative edge and boundary walk of a single face.
    pub fn check_face(&self, f: FaceId) -> Result<(), HediError> {
        let rep = self.faces.get(f)?.edge().ok_or(HediError::FaceWithoutEdge(f))?;
        if !self.storage.contains_edge(rep) {
            return Err(HediError::MissingEdge(rep));
        }
        for e in self.face_edges_iter(f)? {
            self.expect_face(e?, f)?;
        }
        Ok(())
    }
}

impl<V, E, F> DebugInvariants for HalfEdgeGraph<V, E, F>
where
    V: VertexProps,
    E: EdgeProps,
    F: FaceProps,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "HalfEdgeGraph invalid");
    }

    fn validate_invariants(&self) -> Result<(), HediError> {
        validate_topology(self)
    }
}
