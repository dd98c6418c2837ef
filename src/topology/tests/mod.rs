
use crate::topology::graph::HalfEdgeGraph;
use crate::topology::handle::{EdgeId, FaceId, VertexId};
use crate::topology::payload::{PlainEdge, PlainFace, PlainVertex};

pub(crate) type Graph = HalfEdgeGraph<PlainVertex, PlainEdge, PlainFace>;

/// Triangle `v0 v1 v2` with both sides assembled.
pub(crate) struct Triangle {
    pub g: Graph,
    pub v: [VertexId; 3],
    /// `e01, e12, e20` on `inner`.
    pub ccw: [EdgeId; 3],
    /// `e10, e21, e02`, twins of `ccw` in the same order, on `outer`.
    pub cw: [EdgeId; 3],
    pub inner: FaceId,
    pub outer: FaceId,
}

pub(crate) fn triangle() -> Triangle {
    let mut g = Graph::new();
    let v = [0, 1, 2].map(|i| g.add_vertex_with(PlainVertex::new(i)));
    let (e01, e10) = g.connect_twins(v[0], v[1]).unwrap();
    let (e12, e21) = g.connect_twins(v[1], v[2]).unwrap();
    let (e20, e02) = g.connect_twins(v[2], v[0]).unwrap();
    let inner = g.add_face();
    let outer = g.add_face();
    g.assemble_face_cycle(&[e01, e12, e20], inner, 1.0).unwrap();
    g.assemble_face_cycle(&[e10, e02, e21], outer, -1.0).unwrap();
    Triangle {
        g,
        v,
        ccw: [e01, e12, e20],
        cw: [e10, e21, e02],
        inner,
        outer,
    }
}
