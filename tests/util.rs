#![allow(dead_code)]
use hedi::prelude::*;

pub type Graph = HalfEdgeGraph<PlainVertex, PlainEdge, PlainFace>;

pub struct Triangle {
    pub g: Graph,
    pub v0: VertexId,
    pub v1: VertexId,
    pub v2: VertexId,
    pub e01: EdgeId,
    pub e12: EdgeId,
    pub e20: EdgeId,
    pub e10: EdgeId,
    pub e21: EdgeId,
    pub e02: EdgeId,
    pub inner: FaceId,
    pub outer: FaceId,
}

/// Triangle built edge by edge: `e01 e12 e20` bound `inner`, their twins
/// `e10 e02 e21` bound `outer`.
pub fn triangle() -> Triangle {
    triangle_with(GraphConfig::default())
}

pub fn triangle_with(cfg: GraphConfig) -> Triangle {
    let mut g = Graph::with_config(cfg);
    let v0 = g.add_vertex_with(PlainVertex::new(0));
    let v1 = g.add_vertex_with(PlainVertex::new(1));
    let v2 = g.add_vertex_with(PlainVertex::new(2));

    let e01 = g.add_edge(v0, v1).unwrap();
    let e12 = g.add_edge(v1, v2).unwrap();
    let e20 = g.add_edge(v2, v0).unwrap();
    let e10 = g.add_edge(v1, v0).unwrap();
    let e21 = g.add_edge(v2, v1).unwrap();
    let e02 = g.add_edge(v0, v2).unwrap();
    g.link_twins(e01, e10).unwrap();
    g.link_twins(e12, e21).unwrap();
    g.link_twins(e20, e02).unwrap();

    let inner = g.add_face();
    let outer = g.add_face();
    g.assemble_face_cycle(&[e01, e12, e20], inner, 1.0).unwrap();
    g.assemble_face_cycle(&[e10, e02, e21], outer, 1.0).unwrap();

    Triangle {
        g,
        v0,
        v1,
        v2,
        e01,
        e12,
        e20,
        e10,
        e21,
        e02,
        inner,
        outer,
    }
}

/// Check every global invariant edge by edge, independently of the crate's
/// own validator.
pub fn assert_well_formed(g: &Graph) {
    for e in g.edges() {
        let t = g.twin(e).unwrap();
        assert_eq!(g.twin(t).unwrap(), e, "twin(twin(e)) != e");
        assert_eq!(g.source(e).unwrap(), g.target(t).unwrap());
        assert_eq!(g.target(e).unwrap(), g.source(t).unwrap());
        let n = g.next(e).unwrap();
        assert_eq!(g.face_of(e).unwrap(), g.face_of(n).unwrap());
        assert_eq!(g.target(e).unwrap(), g.source(n).unwrap());
    }
    for f in g.faces() {
        let rep = g[f].edge.unwrap();
        let walk = g.face_edges(f).unwrap();
        assert_eq!(walk[0], rep);
        assert!(walk.iter().all(|&e| g.face_of(e).unwrap() == f));
        let mut cur = rep;
        for _ in 0..walk.len() {
            cur = g.next(cur).unwrap();
        }
        assert_eq!(cur, rep, "walk of face {f} did not close after {} steps", walk.len());
    }
    assert_eq!(validate_topology(g), Ok(()));
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
