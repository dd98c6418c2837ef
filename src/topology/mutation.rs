//! Topology mutations on a [`HalfEdgeGraph`].
//!
//! These are the only operations that change twin/next/face linkage. Each one
//! checks its preconditions before touching any state: a violated
//! precondition is logged with the offending handles and returned as a
//! [`HediError`], leaving the graph exactly as it was. Such errors are
//! defects in the calling algorithm and should be treated as fatal.
//!
//! `&mut self` on every entry point means no reader can observe the graph
//! between the sub-steps of `split_edge` or `assemble_face_cycle`.

use itertools::Itertools;

use crate::debug_invariants;
use crate::hedi_error::HediError;
use crate::topology::graph::HalfEdgeGraph;
use crate::topology::handle::{EdgeId, FaceId, VertexId};
use crate::topology::payload::{EdgeProps, FaceProps, VertexProps};

/// The four half-edges that replace an edge and its twin after
/// [`HalfEdgeGraph::split_edge`].
///
/// ```text
///                      face
///                   e1      e2
/// previous ->  src  ->  v  ->  trg  -> next
///              src  <-  v  <-  trg  <- twin_previous
///                   te2     te1
///                    twin_face
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SplitEdge {
    /// `src -> v`, on the face of the split edge.
    pub e1: EdgeId,
    /// `v -> trg`, on the face of the split edge.
    pub e2: EdgeId,
    /// `trg -> v`, on the twin's face.
    pub te1: EdgeId,
    /// `v -> src`, on the twin's face.
    pub te2: EdgeId,
}

impl<V, E, F> HalfEdgeGraph<V, E, F>
where
    V: VertexProps,
    E: EdgeProps,
    F: FaceProps,
{
    // ---------- twins ----------

    /// Adds `v1 -> v2` and `v2 -> v1` and links them as twins.
    pub fn connect_twins(
        &mut self,
        v1: VertexId,
        v2: VertexId,
    ) -> Result<(EdgeId, EdgeId), HediError>
    where
        E: Default,
    {
        if !self.storage.contains_vertex(v2) {
            return Err(HediError::MissingVertex(v2));
        }
        let e1 = self.storage.add_edge(v1, v2)?;
        let e2 = self.storage.add_edge(v2, v1)?;
        self.storage[e1].set_twin(Some(e2));
        self.storage[e2].set_twin(Some(e1));
        Ok((e1, e2))
    }

    /// Declares `e1` and `e2` twins of each other.
    ///
    /// Requires `target(e1) == source(e2)` and `source(e1) == target(e2)`.
    pub fn link_twins(&mut self, e1: EdgeId, e2: EdgeId) -> Result<(), HediError> {
        self.check_twin_endpoints(e1, e2)?;
        self.storage[e1].set_twin(Some(e2));
        self.storage[e2].set_twin(Some(e1));
        Ok(())
    }

    fn check_twin_endpoints(&self, e1: EdgeId, e2: EdgeId) -> Result<(), HediError> {
        let (s1, t1) = self.storage.endpoints(e1)?;
        let (s2, t2) = self.storage.endpoints(e2)?;
        if t1 != s2 || s1 != t2 {
            log::error!(
                "cannot twin {} with {}: target(e1)={} source(e2)={}",
                self.edge_label(e1),
                self.edge_label(e2),
                self.vertex_label(t1),
                self.vertex_label(s2)
            );
            return Err(HediError::TwinEndpointMismatch { e1, e2 });
        }
        Ok(())
    }

    // ---------- next links ----------

    /// Sets `next(e1) = e2`. Requires `target(e1) == source(e2)`.
    pub fn link_next(&mut self, e1: EdgeId, e2: EdgeId) -> Result<(), HediError> {
        self.check_continuity(e1, e2)?;
        self.storage[e1].set_next(Some(e2));
        Ok(())
    }

    fn check_continuity(&self, e1: EdgeId, e2: EdgeId) -> Result<(), HediError> {
        let t1 = self.storage.target(e1)?;
        let s2 = self.storage.source(e2)?;
        if t1 != s2 {
            log::error!(
                "cannot link {} -> {}: target(e1)={} source(e2)={}",
                self.edge_label(e1),
                self.edge_label(e2),
                self.vertex_label(t1),
                self.vertex_label(s2)
            );
            return Err(HediError::DiscontinuousNext { e1, e2 });
        }
        Ok(())
    }

    fn stamp(&mut self, e: EdgeId, face: FaceId, k: f64) -> Result<(), HediError> {
        let props = self.storage.edge_props_mut(e)?;
        props.set_face(Some(face));
        props.set_k(k);
        Ok(())
    }

    /// Authors the whole boundary of `face` in one call.
    ///
    /// Links `edges[0] -> edges[1] -> ... -> edges[n-1] -> edges[0]`, stamps
    /// `face` and `k` on every edge and makes `edges[0]` the face's
    /// representative. Every link is checked for continuity before the first
    /// one is written.
    pub fn assemble_face_cycle(
        &mut self,
        edges: &[EdgeId],
        face: FaceId,
        k: f64,
    ) -> Result<(), HediError> {
        let &first = edges.first().ok_or(HediError::EmptyEdgeSequence)?;
        self.faces.get(face)?;
        let links: Vec<(EdgeId, EdgeId)> = edges.iter().copied().circular_tuple_windows().collect();
        for &(a, b) in &links {
            self.check_continuity(a, b)?;
        }

        for (a, b) in links {
            self.storage[a].set_next(Some(b));
        }
        for &e in edges {
            self.stamp(e, face, k)?;
        }
        self.faces[face].set_edge(Some(first));
        log::debug!("face {face}: assembled boundary of {} edges", edges.len());
        Ok(())
    }

    /// Links `edges[0] -> edges[1] -> ... -> edges[n-1]` without closing.
    ///
    /// With `stamp = Some((face, k))` every edge is also stamped with `face`
    /// and `k` and `edges[0]` becomes the face's representative; with `None`
    /// only the next links are written. Used while a boundary is built
    /// incrementally before it is closed.
    pub fn link_chain(
        &mut self,
        edges: &[EdgeId],
        stamp: Option<(FaceId, f64)>,
    ) -> Result<(), HediError> {
        let &first = edges.first().ok_or(HediError::EmptyEdgeSequence)?;
        if let Some((face, _)) = stamp {
            self.faces.get(face)?;
        }
        for &e in edges {
            if !self.storage.contains_edge(e) {
                return Err(HediError::MissingEdge(e));
            }
        }
        for (a, b) in edges.iter().copied().tuple_windows() {
            self.check_continuity(a, b)?;
        }

        for (a, b) in edges.iter().copied().tuple_windows() {
            self.storage[a].set_next(Some(b));
        }
        if let Some((face, k)) = stamp {
            for &e in edges {
                self.stamp(e, face, k)?;
            }
            self.faces[face].set_edge(Some(first));
        }
        Ok(())
    }

    // ---------- edge split ----------

    /// Inserts vertex `v` into the middle of `e` and of its twin.
    ///
    /// `e` and `twin(e)` are replaced by four edges (see [`SplitEdge`]) that
    /// keep the faces on either side; the boundaries of both faces grow by
    /// one edge. Twins are assigned crosswise (`e1 <-> te2`, `e2 <-> te1`)
    /// since those are the pairs running over the same segment in opposite
    /// directions. Face representatives that pointed at a removed edge are
    /// moved to its replacement, and new edges inherit `k` from the edge
    /// they replace.
    ///
    /// All lookups happen first, so an error leaves the graph unchanged.
    pub fn split_edge(&mut self, v: VertexId, e: EdgeId) -> Result<SplitEdge, HediError>
    where
        E: Default,
    {
        if !self.storage.contains_vertex(v) {
            return Err(HediError::MissingVertex(v));
        }
        let twin = self.twin(e)?;
        let (src, trg) = self.storage.endpoints(e)?;
        let (twin_src, twin_trg) = self.storage.endpoints(twin)?;
        if src != twin_trg || trg != twin_src {
            log::error!(
                "split_edge: {} and its twin {} are not reversed",
                self.edge_label(e),
                self.edge_label(twin)
            );
            return Err(HediError::TwinEndpointMismatch { e1: e, e2: twin });
        }

        let face = self.face_of(e)?;
        let twin_face = self.face_of(twin)?;
        self.faces.get(face)?;
        self.faces.get(twin_face)?;
        let next = self.next(e)?;
        let twin_next = self.next(twin)?;
        let previous = self.previous_edge(e)?;
        let twin_previous = self.previous_edge(twin)?;
        self.expect_face(previous, face)?;
        self.expect_face(twin_previous, twin_face)?;
        let k = self.k(e)?;
        let twin_k = self.k(twin)?;

        log::debug!(
            "split_edge: inserting {} into {}",
            self.vertex_label(v),
            self.edge_label(e)
        );

        let e1 = self.storage.add_edge(src, v)?;
        let e2 = self.storage.add_edge(v, trg)?;
        let te1 = self.storage.add_edge(twin_src, v)?;
        let te2 = self.storage.add_edge(v, twin_trg)?;

        self.stamp(e1, face, k)?;
        self.stamp(e2, face, k)?;
        self.stamp(te1, twin_face, twin_k)?;
        self.stamp(te2, twin_face, twin_k)?;

        // When e and twin follow each other on one boundary, links into a
        // removed edge go to the replacement starting at the same vertex and
        // links out of it come from the replacement ending at the same vertex.
        let arriving = |x: EdgeId| match x {
            x if x == e => e1,
            x if x == twin => te1,
            x => x,
        };
        let leaving = |x: EdgeId| match x {
            x if x == e => e2,
            x if x == twin => te2,
            x => x,
        };

        self.storage[leaving(previous)].set_next(Some(e1));
        self.storage[e1].set_next(Some(e2));
        self.storage[e2].set_next(Some(arriving(next)));
        self.storage[leaving(twin_previous)].set_next(Some(te1));
        self.storage[te1].set_next(Some(te2));
        self.storage[te2].set_next(Some(arriving(twin_next)));

        self.storage[e1].set_twin(Some(te2));
        self.storage[te2].set_twin(Some(e1));
        self.storage[e2].set_twin(Some(te1));
        self.storage[te1].set_twin(Some(e2));

        if self.faces[face].edge() == Some(e) {
            self.faces[face].set_edge(Some(e1));
        }
        if self.faces[twin_face].edge() == Some(twin) {
            self.faces[twin_face].set_edge(Some(te1));
        }

        self.storage.remove_edge(e)?;
        self.storage.remove_edge(twin)?;

        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        for new_edge in [e1, e2, te1, te2] {
            debug_invariants!(self.check_edge(new_edge), "split_edge");
        }
        Ok(SplitEdge { e1, e2, te1, te2 })
    }

    pub(crate) fn expect_face(&self, edge: EdgeId, expected: FaceId) -> Result<(), HediError> {
        let found = self.storage.edge_props(edge)?.face();
        if found != Some(expected) {
            log::error!(
                "edge {} precedes an edge of face {expected} but belongs to face {found:?}",
                self.edge_label(edge)
            );
            return Err(HediError::FaceMismatch {
                edge,
                expected,
                found,
            });
        }
        Ok(())
    }

    // ---------- removal ----------

    /// Removes every edge incident to `v`, then `v` itself.
    ///
    /// Faces whose boundary ran through `v` are not repaired; excise `v`
    /// with edge-level operations first.
    pub fn delete_vertex(&mut self, v: VertexId) -> Result<V, HediError> {
        log::debug!("delete_vertex: {}", self.vertex_label(v));
        self.storage.remove_vertex(v)
    }

    /// Removes every edge incident to `v` but keeps the vertex.
    pub fn clear_vertex(&mut self, v: VertexId) -> Result<usize, HediError> {
        self.storage.clear_vertex(v)
    }

    /// Removes `e` with no twin/next repair.
    ///
    /// The twin and any boundary through `e` are left dangling; restoring
    /// the invariants is the caller's job.
    pub fn remove_edge(&mut self, e: EdgeId) -> Result<E, HediError> {
        self.storage.remove_edge(e)
    }

    /// Removes the edge `v1 -> v2` with no twin/next repair.
    pub fn remove_edge_between(&mut self, v1: VertexId, v2: VertexId) -> Result<E, HediError> {
        self.storage.remove_edge_between(v1, v2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::payload::{PlainEdge, PlainFace, PlainVertex};

    type Graph = HalfEdgeGraph<PlainVertex, PlainEdge, PlainFace>;

    #[test]
    fn connect_twins_links_both_ways() {
        let mut g = Graph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let (ab, ba) = g.connect_twins(a, b).unwrap();
        assert_eq!(g.twin(ab), Ok(ba));
        assert_eq!(g.twin(ba), Ok(ab));
        assert!(g.has_edge(a, b) && g.has_edge(b, a));
    }

    #[test]
    fn connect_twins_to_missing_vertex_adds_nothing() {
        let mut g = Graph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.delete_vertex(b).unwrap();
        assert_eq!(g.connect_twins(a, b), Err(HediError::MissingVertex(b)));
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn link_twins_rejects_unreversed_edges() {
        let mut g = Graph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let ab = g.add_edge(a, b).unwrap();
        let bc = g.add_edge(b, c).unwrap();
        assert_eq!(
            g.link_twins(ab, bc),
            Err(HediError::TwinEndpointMismatch { e1: ab, e2: bc })
        );
        assert_eq!(g[ab].twin, None);
        assert_eq!(g[bc].twin, None);
    }

    #[test]
    fn link_next_rejects_gap() {
        let mut g = Graph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let ab = g.add_edge(a, b).unwrap();
        let ca = g.add_edge(c, a).unwrap();
        assert_eq!(
            g.link_next(ab, ca),
            Err(HediError::DiscontinuousNext { e1: ab, e2: ca })
        );
        assert_eq!(g[ab].next, None);
        g.link_next(ca, ab).unwrap();
        assert_eq!(g.next(ca), Ok(ab));
    }

    #[test]
    fn failed_cycle_writes_nothing() {
        let mut g = Graph::new();
        let vs: Vec<_> = (0..3).map(|_| g.add_vertex()).collect();
        let e01 = g.add_edge(vs[0], vs[1]).unwrap();
        let e12 = g.add_edge(vs[1], vs[2]).unwrap();
        let e21 = g.add_edge(vs[2], vs[1]).unwrap();
        let f = g.add_face();
        // e21 ends at v1, so the closing link e21 -> e01 is broken
        assert_eq!(
            g.assemble_face_cycle(&[e01, e12, e21], f, 1.0),
            Err(HediError::DiscontinuousNext { e1: e21, e2: e01 })
        );
        assert!(g.edges().iter().all(|&e| g[e].next.is_none() && g[e].face.is_none()));
        assert_eq!(g[f].edge, None);
        assert_eq!(
            g.assemble_face_cycle(&[], f, 1.0),
            Err(HediError::EmptyEdgeSequence)
        );
    }

    #[test]
    fn link_chain_with_and_without_stamp() {
        let mut g = Graph::new();
        let vs: Vec<_> = (0..4).map(|_| g.add_vertex()).collect();
        let es: Vec<_> = (0..3).map(|i| g.add_edge(vs[i], vs[i + 1]).unwrap()).collect();
        let f = g.add_face();

        g.link_chain(&es, None).unwrap();
        assert_eq!(g.next(es[0]), Ok(es[1]));
        assert_eq!(g.next(es[1]), Ok(es[2]));
        assert!(g.next(es[2]).is_err());
        assert!(es.iter().all(|&e| g[e].face.is_none()));
        assert_eq!(g[f].edge, None);

        g.link_chain(&es, Some((f, -1.0))).unwrap();
        assert!(es.iter().all(|&e| g[e].face == Some(f) && g[e].k == -1.0));
        assert_eq!(g[f].edge, Some(es[0]));
    }

    #[test]
    fn split_of_untwinned_edge_leaves_graph_untouched() {
        let mut g = Graph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let m = g.add_vertex();
        let ab = g.add_edge(a, b).unwrap();
        let err = g.split_edge(m, ab).unwrap_err();
        assert!(matches!(err, HediError::UnlinkedEdge { edge, .. } if edge == ab));
        assert_eq!(g.num_edges(), 1);
        assert!(g.has_edge(a, b));
    }
}
