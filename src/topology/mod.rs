//! Half-edge topology: storage, faces, queries, mutations and traversal.
//!
//! Most users build a [`HalfEdgeGraph`] with their own payload types (or the
//! `Plain*` payloads), author face boundaries through the mutation API and
//! read structure back through the query API.

pub mod boundary;
pub mod face_table;
pub mod graph;
pub mod handle;
pub mod mutation;
pub mod payload;
pub mod queries;
pub mod storage;
pub mod validation;

pub use boundary::FaceEdges;
pub use face_table::FaceTable;
pub use graph::{DEFAULT_MAX_BOUNDARY_STEPS, GraphConfig, HalfEdgeGraph};
pub use handle::{EdgeId, FaceId, VertexId};
pub use mutation::SplitEdge;
pub use payload::{EdgeProps, FaceProps, PlainEdge, PlainFace, PlainVertex, VertexProps};
pub use storage::HalfEdgeStorage;
pub use validation::validate_topology;

#[cfg(test)]
mod tests;
