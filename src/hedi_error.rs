//! HediError: Unified error type for hedi public APIs
//!
//! Every fallible graph operation reports through this type. Precondition
//! violations and corruption-guard hits are defects in the calling algorithm;
//! they are logged before being returned and callers are expected to treat
//! them as fatal. Plain "not found" lookups use `Option` instead.

use thiserror::Error;

use crate::topology::handle::{EdgeId, FaceId, VertexId};

/// Which per-edge link was found unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLink {
    Twin,
    Next,
    Face,
}

impl std::fmt::Display for EdgeLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EdgeLink::Twin => "twin",
            EdgeLink::Next => "next",
            EdgeLink::Face => "face",
        };
        f.write_str(s)
    }
}

/// Unified error type for hedi operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HediError {
    /// The vertex handle does not refer to a live vertex.
    #[error("vertex {0:?} is not in the graph")]
    MissingVertex(VertexId),
    /// The edge handle does not refer to a live edge.
    #[error("edge {0:?} is not in the graph")]
    MissingEdge(EdgeId),
    /// The face id is past the end of the face table.
    #[error("face {0} is not in the face table")]
    MissingFace(FaceId),
    /// No directed edge connects the two vertices.
    #[error("no edge from {from:?} to {to:?}")]
    MissingEdgeBetween { from: VertexId, to: VertexId },
    /// A twin/next/face link that the operation relies on was never assigned.
    #[error("edge {edge:?} has no {link} link")]
    UnlinkedEdge { edge: EdgeId, link: EdgeLink },
    /// Two edges declared twins do not connect the same vertices in reverse.
    #[error("edges {e1:?} and {e2:?} cannot be twins: endpoints are not reversed")]
    TwinEndpointMismatch { e1: EdgeId, e2: EdgeId },
    /// `twin(twin(edge)) != edge`.
    #[error("twin of {twin:?} does not point back to {edge:?}")]
    TwinNotMutual { edge: EdgeId, twin: EdgeId },
    /// `target(e1) != source(e2)` for a next link.
    #[error("next link {e1:?} -> {e2:?} is discontinuous: target(e1) != source(e2)")]
    DiscontinuousNext { e1: EdgeId, e2: EdgeId },
    /// An edge on the boundary walk of `expected` is stamped with another face.
    #[error("edge {edge:?} on boundary of face {expected} belongs to face {found:?}")]
    FaceMismatch {
        edge: EdgeId,
        expected: FaceId,
        found: Option<FaceId>,
    },
    /// The face has no representative edge.
    #[error("face {0} has no representative edge")]
    FaceWithoutEdge(FaceId),
    /// A boundary walk did not return to its start within the step cap.
    #[error("boundary of face {face:?} did not close within {limit} steps")]
    UnclosedBoundary { face: Option<FaceId>, limit: usize },
    /// An edge sequence passed to cycle/chain assembly was empty.
    #[error("edge sequence is empty")]
    EmptyEdgeSequence,
}
