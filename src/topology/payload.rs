//! Capability traits for vertex, edge and face payloads.
//!
//! The graph never looks inside a payload beyond these accessors. Calling
//! algorithms attach whatever geometry they need (positions, arc/line
//! classification, offset data) to their own types and implement the traits
//! below. `PlainVertex`, `PlainEdge` and `PlainFace` are minimal
//! implementations for topology-only use.

use std::fmt::Debug;

use crate::topology::handle::{EdgeId, FaceId};

/// Payload stored on every vertex.
pub trait VertexProps {
    /// Opaque classification tag, shown in diagnostics only.
    type Kind: Debug;

    /// Stable, caller-assigned index used to identify the vertex in diagnostics.
    fn index(&self) -> usize;

    fn kind(&self) -> &Self::Kind;
}

/// Payload stored on every directed half-edge.
///
/// Links are `None` on a blank edge until a mutation assigns them.
pub trait EdgeProps {
    fn twin(&self) -> Option<EdgeId>;
    fn set_twin(&mut self, twin: Option<EdgeId>);

    /// Successor on the boundary of the face to the left of this edge.
    fn next(&self) -> Option<EdgeId>;
    fn set_next(&mut self, next: Option<EdgeId>);

    fn face(&self) -> Option<FaceId>;
    fn set_face(&mut self, face: Option<FaceId>);

    /// Caller-defined coefficient (e.g. offset direction of the boundary).
    fn k(&self) -> f64;
    fn set_k(&mut self, k: f64);
}

/// Payload stored on every face.
pub trait FaceProps {
    /// Representative half-edge on the boundary of this face.
    fn edge(&self) -> Option<EdgeId>;
    fn set_edge(&mut self, edge: Option<EdgeId>);

    /// The face's own position in the face table.
    fn idx(&self) -> FaceId;
    fn set_idx(&mut self, idx: FaceId);
}

/// Vertex payload carrying only a diagnostic index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainVertex {
    pub index: usize,
}

impl PlainVertex {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl VertexProps for PlainVertex {
    type Kind = ();

    #[inline]
    fn index(&self) -> usize {
        self.index
    }

    #[inline]
    fn kind(&self) -> &() {
        &()
    }
}

/// Edge payload carrying only the topological links and `k`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlainEdge {
    pub twin: Option<EdgeId>,
    pub next: Option<EdgeId>,
    pub face: Option<FaceId>,
    pub k: f64,
}

impl EdgeProps for PlainEdge {
    #[inline]
    fn twin(&self) -> Option<EdgeId> {
        self.twin
    }
    #[inline]
    fn set_twin(&mut self, twin: Option<EdgeId>) {
        self.twin = twin;
    }
    #[inline]
    fn next(&self) -> Option<EdgeId> {
        self.next
    }
    #[inline]
    fn set_next(&mut self, next: Option<EdgeId>) {
        self.next = next;
    }
    #[inline]
    fn face(&self) -> Option<FaceId> {
        self.face
    }
    #[inline]
    fn set_face(&mut self, face: Option<FaceId>) {
        self.face = face;
    }
    #[inline]
    fn k(&self) -> f64 {
        self.k
    }
    #[inline]
    fn set_k(&mut self, k: f64) {
        self.k = k;
    }
}

/// Face payload carrying only the representative edge and index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainFace {
    pub edge: Option<EdgeId>,
    pub idx: FaceId,
}

impl Default for PlainFace {
    fn default() -> Self {
        Self {
            edge: None,
            idx: FaceId::new(0),
        }
    }
}

impl FaceProps for PlainFace {
    #[inline]
    fn edge(&self) -> Option<EdgeId> {
        self.edge
    }
    #[inline]
    fn set_edge(&mut self, edge: Option<EdgeId>) {
        self.edge = edge;
    }
    #[inline]
    fn idx(&self) -> FaceId {
        self.idx
    }
    #[inline]
    fn set_idx(&mut self, idx: FaceId) {
        self.idx = idx;
    }
}
