//! # hedi
//!
//! hedi is a half-edge diagram (DCEL) topology engine: a mutable graph in
//! which every directed edge knows its opposite-direction twin and its
//! successor around the face to its left. It is the structure underneath
//! algorithms such as incremental Voronoi construction that repeatedly split
//! edges, insert vertices and re-author face boundaries while the topology
//! must stay consistent after every call.
//!
//! ## Features
//! - Arena storage with generation-tagged [`VertexId`](topology::VertexId) and
//!   [`EdgeId`](topology::EdgeId) handles; faces are dense [`FaceId`](topology::FaceId)s
//! - Payloads are generic: implement [`VertexProps`](topology::VertexProps),
//!   [`EdgeProps`](topology::EdgeProps) and [`FaceProps`](topology::FaceProps)
//!   on your own types, or use the `Plain*` payloads
//! - Face boundary walks, previous-edge lookup, vertex/face adjacency
//! - Twin creation, next linking, one-shot face assembly and edge splitting
//! - Boundary walks are capped, so a corrupted `next` cycle becomes a
//!   [`HediError::UnclosedBoundary`](hedi_error::HediError::UnclosedBoundary)
//!   rather than a hang
//!
//! ## Invariant checking
//! Preconditions (twin endpoints, next continuity) are always checked and
//! reported as [`HediError`](hedi_error::HediError) after a `log::error!`
//! diagnostic. Post-mutation assertions and per-step face checks are active in
//! debug builds and with the `strict-invariants` / `check-invariants` features.
//!
//! ```rust
//! use hedi::prelude::*;
//!
//! let mut g: HalfEdgeGraph<PlainVertex, PlainEdge, PlainFace> = HalfEdgeGraph::new();
//! let v: Vec<_> = (0..3).map(|i| g.add_vertex_with(PlainVertex::new(i))).collect();
//! let (e01, e10) = g.connect_twins(v[0], v[1]).unwrap();
//! let (e12, e21) = g.connect_twins(v[1], v[2]).unwrap();
//! let (e20, e02) = g.connect_twins(v[2], v[0]).unwrap();
//! let inner = g.add_face();
//! let outer = g.add_face();
//! g.assemble_face_cycle(&[e01, e12, e20], inner, 1.0).unwrap();
//! g.assemble_face_cycle(&[e10, e02, e21], outer, 1.0).unwrap();
//!
//! assert_eq!(g.face_vertices(inner).unwrap(), vec![v[1], v[2], v[0]]);
//!
//! let mid = g.add_vertex_with(PlainVertex::new(3));
//! g.split_edge(mid, e01).unwrap();
//! assert_eq!(g.num_face_edges(inner).unwrap(), 4);
//! assert!(g.validate_invariants().is_ok());
//! ```

pub mod debug_invariants;
pub mod hedi_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::hedi_error::{EdgeLink, HediError};
    pub use crate::topology::{
        DEFAULT_MAX_BOUNDARY_STEPS, EdgeId, EdgeProps, FaceEdges, FaceId, FaceProps, GraphConfig,
        HalfEdgeGraph, HalfEdgeStorage, PlainEdge, PlainFace, PlainVertex, SplitEdge, VertexId,
        VertexProps, validate_topology,
    };
}
