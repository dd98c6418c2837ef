//! The half-edge graph: storage, face table and configuration in one owner.
//!
//! `HalfEdgeGraph` is the single root of ownership for a mesh. Twin, next,
//! face and endpoint relations are all handles resolved through it.
//! Queries live in [`queries`](crate::topology::queries), mutations in
//! [`mutation`](crate::topology::mutation).

use std::ops::{Index, IndexMut};

use crate::hedi_error::HediError;
use crate::topology::face_table::FaceTable;
use crate::topology::handle::{EdgeId, FaceId, VertexId};
use crate::topology::payload::{EdgeProps, FaceProps, VertexProps};
use crate::topology::storage::HalfEdgeStorage;

/// Step cap applied to every boundary walk.
pub const DEFAULT_MAX_BOUNDARY_STEPS: usize = 3_000_000;

/// Tunables for traversal checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// A boundary walk taking more steps than this is reported as
    /// [`HediError::UnclosedBoundary`].
    pub max_boundary_steps: usize,
    /// Verify `face(e) == f` on every step of a boundary walk of `f`.
    ///
    /// On by default whenever `debug_invariants!` assertions are active.
    pub check_faces: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_boundary_steps: DEFAULT_MAX_BOUNDARY_STEPS,
            check_faces: cfg!(any(
                debug_assertions,
                feature = "strict-invariants",
                feature = "check-invariants"
            )),
        }
    }
}

impl GraphConfig {
    pub fn max_boundary_steps(mut self, steps: usize) -> Self {
        self.max_boundary_steps = steps;
        self
    }

    pub fn check_faces(mut self, on: bool) -> Self {
        self.check_faces = on;
        self
    }
}

/// Half-edge diagram over vertex payload `V`, edge payload `E` and face
/// payload `F`.
#[derive(Clone, Debug)]
pub struct HalfEdgeGraph<V, E, F> {
    pub(crate) storage: HalfEdgeStorage<V, E>,
    pub(crate) faces: FaceTable<F>,
    pub(crate) config: GraphConfig,
}

impl<V, E, F> Default for HalfEdgeGraph<V, E, F> {
    fn default() -> Self {
        Self {
            storage: HalfEdgeStorage::default(),
            faces: FaceTable::default(),
            config: GraphConfig::default(),
        }
    }
}

impl<V, E, F> HalfEdgeGraph<V, E, F>
where
    V: VertexProps,
    E: EdgeProps,
    F: FaceProps,
{
    /// Creates an empty graph with the default [`GraphConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GraphConfig) {
        self.config = config;
    }

    /// Structural storage (vertices, directed edges, incidence).
    #[inline]
    pub fn storage(&self) -> &HalfEdgeStorage<V, E> {
        &self.storage
    }

    #[inline]
    pub fn face_table(&self) -> &FaceTable<F> {
        &self.faces
    }

    // ---------- Graph Storage passthroughs ----------

    pub fn add_vertex(&mut self) -> VertexId
    where
        V: Default,
    {
        self.storage.add_vertex()
    }

    pub fn add_vertex_with(&mut self, props: V) -> VertexId {
        self.storage.add_vertex_with(props)
    }

    /// Adds a blank directed edge `v1 -> v2`; links are unset.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<EdgeId, HediError>
    where
        E: Default,
    {
        self.storage.add_edge(v1, v2)
    }

    pub fn add_edge_with(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        props: E,
    ) -> Result<EdgeId, HediError> {
        self.storage.add_edge_with(v1, v2, props)
    }

    #[inline]
    pub fn source(&self, e: EdgeId) -> Result<VertexId, HediError> {
        self.storage.source(e)
    }

    #[inline]
    pub fn target(&self, e: EdgeId) -> Result<VertexId, HediError> {
        self.storage.target(e)
    }

    pub fn vertex(&self, v: VertexId) -> Result<&V, HediError> {
        self.storage.vertex(v)
    }

    pub fn vertex_mut(&mut self, v: VertexId) -> Result<&mut V, HediError> {
        self.storage.vertex_mut(v)
    }

    pub fn edge_props(&self, e: EdgeId) -> Result<&E, HediError> {
        self.storage.edge_props(e)
    }

    pub fn edge_props_mut(&mut self, e: EdgeId) -> Result<&mut E, HediError> {
        self.storage.edge_props_mut(e)
    }

    // ---------- Face Table passthroughs ----------

    pub fn add_face(&mut self) -> FaceId
    where
        F: Default,
    {
        self.faces.add_face()
    }

    pub fn add_face_with(&mut self, props: F) -> FaceId {
        self.faces.add_face_with(props)
    }

    pub fn face(&self, f: FaceId) -> Result<&F, HediError> {
        self.faces.get(f)
    }

    pub fn face_mut(&mut self, f: FaceId) -> Result<&mut F, HediError> {
        self.faces.get_mut(f)
    }

    /// `"index[kind]"` label of a vertex for diagnostics.
    pub(crate) fn vertex_label(&self, v: VertexId) -> String {
        match self.storage.vertex(v) {
            Ok(props) => format!("{}[{:?}]", props.index(), props.kind()),
            Err(_) => format!("{v:?}(removed)"),
        }
    }

    /// `"a[..] -> b[..]"` label of an edge for diagnostics.
    pub(crate) fn edge_label(&self, e: EdgeId) -> String {
        match self.storage.endpoints(e) {
            Ok((s, t)) => format!("{} -> {}", self.vertex_label(s), self.vertex_label(t)),
            Err(_) => format!("{e:?}(removed)"),
        }
    }
}

impl<V, E, F> Index<VertexId> for HalfEdgeGraph<V, E, F> {
    type Output = V;

    fn index(&self, v: VertexId) -> &V {
        &self.storage[v]
    }
}

impl<V, E, F> IndexMut<VertexId> for HalfEdgeGraph<V, E, F> {
    fn index_mut(&mut self, v: VertexId) -> &mut V {
        &mut self.storage[v]
    }
}

impl<V, E, F> Index<EdgeId> for HalfEdgeGraph<V, E, F> {
    type Output = E;

    fn index(&self, e: EdgeId) -> &E {
        &self.storage[e]
    }
}

impl<V, E, F> IndexMut<EdgeId> for HalfEdgeGraph<V, E, F> {
    fn index_mut(&mut self, e: EdgeId) -> &mut E {
        &mut self.storage[e]
    }
}

impl<V, E, F> Index<FaceId> for HalfEdgeGraph<V, E, F> {
    type Output = F;

    fn index(&self, f: FaceId) -> &F {
        &self.faces[f]
    }
}

impl<V, E, F> IndexMut<FaceId> for HalfEdgeGraph<V, E, F> {
    fn index_mut(&mut self, f: FaceId) -> &mut F {
        &mut self.faces[f]
    }
}
