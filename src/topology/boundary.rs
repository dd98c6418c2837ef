//! Lazy walk over the half-edges bounding a face.
//!
//! [`FaceEdges`] follows `next` links from the face's representative edge and
//! stops exactly when the successor equals the starting edge. It owns its
//! cursor, so cloning gives an independent walk and [`FaceEdges::restart`]
//! rewinds it.
//!
//! A corrupted boundary does not loop forever: the walk is capped at
//! [`GraphConfig::max_boundary_steps`](crate::topology::graph::GraphConfig)
//! and yields a single error before ending.

use std::iter::FusedIterator;

use crate::hedi_error::{EdgeLink, HediError};
use crate::topology::graph::HalfEdgeGraph;
use crate::topology::handle::{EdgeId, FaceId};
use crate::topology::payload::{EdgeProps, FaceProps, VertexProps};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Cursor {
    /// Nothing yielded yet.
    Start,
    /// `EdgeId` was the last edge yielded.
    At(EdgeId),
    Done,
}

/// Iterator over the boundary edges of one face.
///
/// Yields `Ok(edge)` for every edge of a closed boundary, starting with the
/// representative edge. A broken boundary ends with exactly one `Err`.
pub struct FaceEdges<'a, V, E, F> {
    graph: &'a HalfEdgeGraph<V, E, F>,
    face: Option<FaceId>,
    start: EdgeId,
    cursor: Cursor,
    steps: usize,
    limit: usize,
    check_faces: bool,
}

impl<V, E, F> Clone for FaceEdges<'_, V, E, F> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            face: self.face,
            start: self.start,
            cursor: self.cursor,
            steps: self.steps,
            limit: self.limit,
            check_faces: self.check_faces,
        }
    }
}

impl<'a, V, E, F> FaceEdges<'a, V, E, F>
where
    V: VertexProps,
    E: EdgeProps,
    F: FaceProps,
{
    /// Walk the boundary of `face`, starting at its representative edge.
    pub(crate) fn for_face(
        graph: &'a HalfEdgeGraph<V, E, F>,
        face: FaceId,
    ) -> Result<Self, HediError> {
        let start = graph
            .faces
            .get(face)?
            .edge()
            .ok_or(HediError::FaceWithoutEdge(face))?;
        Ok(Self::new(graph, start, Some(face), graph.config.check_faces))
    }

    /// Walk the `next` cycle through `start`, whatever face it belongs to.
    ///
    /// Face stamps are not checked.
    pub(crate) fn from_edge(graph: &'a HalfEdgeGraph<V, E, F>, start: EdgeId) -> Self {
        Self::new(graph, start, None, false)
    }

    fn new(
        graph: &'a HalfEdgeGraph<V, E, F>,
        start: EdgeId,
        face: Option<FaceId>,
        check_faces: bool,
    ) -> Self {
        Self {
            graph,
            face,
            start,
            cursor: Cursor::Start,
            steps: 0,
            limit: graph.config.max_boundary_steps,
            check_faces,
        }
    }

    /// Rewind to the representative edge.
    pub fn restart(&mut self) {
        self.cursor = Cursor::Start;
        self.steps = 0;
    }

    /// The edge the walk starts (and ends) at.
    #[inline]
    pub fn start(&self) -> EdgeId {
        self.start
    }

    /// Number of edges yielded so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn fail(&mut self, err: HediError) -> Option<Result<EdgeId, HediError>> {
        self.cursor = Cursor::Done;
        Some(Err(err))
    }

    fn check_face(&self, edge: EdgeId) -> Result<(), HediError> {
        let Some(expected) = self.face.filter(|_| self.check_faces) else {
            return Ok(());
        };
        let found = self.graph.storage.edge_props(edge)?.face();
        if found != Some(expected) {
            log::error!(
                "edge {} on boundary of face {expected} belongs to face {found:?}",
                self.graph.edge_label(edge)
            );
            return Err(HediError::FaceMismatch {
                edge,
                expected,
                found,
            });
        }
        Ok(())
    }

    fn visit(&mut self, edge: EdgeId) -> Option<Result<EdgeId, HediError>> {
        if self.steps >= self.limit {
            log::error!(
                "boundary walk from {} exceeded {} steps without closing (face {:?})",
                self.graph.edge_label(self.start),
                self.limit,
                self.face
            );
            return self.fail(HediError::UnclosedBoundary {
                face: self.face,
                limit: self.limit,
            });
        }
        if let Err(e) = self.check_face(edge) {
            return self.fail(e);
        }
        self.steps += 1;
        self.cursor = Cursor::At(edge);
        Some(Ok(edge))
    }
}

impl<V, E, F> Iterator for FaceEdges<'_, V, E, F>
where
    V: VertexProps,
    E: EdgeProps,
    F: FaceProps,
{
    type Item = Result<EdgeId, HediError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor {
            Cursor::Done => None,
            Cursor::Start => {
                if let Err(e) = self.graph.storage.edge_props(self.start) {
                    return self.fail(e);
                }
                self.visit(self.start)
            }
            Cursor::At(prev) => {
                let succ = match self.graph.storage.edge_props(prev).map(EdgeProps::next) {
                    Ok(Some(succ)) => succ,
                    Ok(None) => {
                        log::error!(
                            "boundary walk reached {} which has no next link",
                            self.graph.edge_label(prev)
                        );
                        return self.fail(HediError::UnlinkedEdge {
                            edge: prev,
                            link: EdgeLink::Next,
                        });
                    }
                    Err(e) => return self.fail(e),
                };
                if succ == self.start {
                    self.cursor = Cursor::Done;
                    return None;
                }
                if !self.graph.storage.contains_edge(succ) {
                    log::error!(
                        "next link of {} points at removed edge {succ:?}",
                        self.graph.edge_label(prev)
                    );
                    return self.fail(HediError::MissingEdge(succ));
                }
                self.visit(succ)
            }
        }
    }
}

impl<V, E, F> FusedIterator for FaceEdges<'_, V, E, F>
where
    V: VertexProps,
    E: EdgeProps,
    F: FaceProps,
{
}
