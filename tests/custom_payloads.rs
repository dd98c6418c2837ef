//! A graph over caller-defined payloads, the way a Voronoi builder would
//! attach positions and classification to the topology.

use hedi::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum SiteKind {
    #[default]
    Normal,
    Apex,
}

#[derive(Clone, Debug, Default)]
struct Site {
    index: usize,
    kind: SiteKind,
    position: (f64, f64),
}

impl VertexProps for Site {
    type Kind = SiteKind;
    fn index(&self) -> usize {
        self.index
    }
    fn kind(&self) -> &SiteKind {
        &self.kind
    }
}

#[derive(Clone, Debug, Default)]
struct Bisector {
    twin: Option<EdgeId>,
    next: Option<EdgeId>,
    face: Option<FaceId>,
    k: f64,
    is_arc: bool,
}

impl EdgeProps for Bisector {
    fn twin(&self) -> Option<EdgeId> {
        self.twin
    }
    fn set_twin(&mut self, twin: Option<EdgeId>) {
        self.twin = twin;
    }
    fn next(&self) -> Option<EdgeId> {
        self.next
    }
    fn set_next(&mut self, next: Option<EdgeId>) {
        self.next = next;
    }
    fn face(&self) -> Option<FaceId> {
        self.face
    }
    fn set_face(&mut self, face: Option<FaceId>) {
        self.face = face;
    }
    fn k(&self) -> f64 {
        self.k
    }
    fn set_k(&mut self, k: f64) {
        self.k = k;
    }
}

#[derive(Clone, Debug)]
struct Cell {
    edge: Option<EdgeId>,
    idx: FaceId,
    generator: (f64, f64),
}

impl FaceProps for Cell {
    fn edge(&self) -> Option<EdgeId> {
        self.edge
    }
    fn set_edge(&mut self, edge: Option<EdgeId>) {
        self.edge = edge;
    }
    fn idx(&self) -> FaceId {
        self.idx
    }
    fn set_idx(&mut self, idx: FaceId) {
        self.idx = idx;
    }
}

type Diagram = HalfEdgeGraph<Site, Bisector, Cell>;

fn site(index: usize, x: f64, y: f64) -> Site {
    Site {
        index,
        kind: SiteKind::Normal,
        position: (x, y),
    }
}

fn cell(generator: (f64, f64)) -> Cell {
    Cell {
        edge: None,
        idx: FaceId::new(u32::MAX),
        generator,
    }
}

#[test]
fn custom_payloads_survive_topology_edits() {
    let mut d = Diagram::new();
    let a = d.add_vertex_with(site(0, 0.0, 0.0));
    let b = d.add_vertex_with(site(1, 2.0, 0.0));
    let c = d.add_vertex_with(site(2, 0.0, 2.0));
    let (ab, ba) = d.connect_twins(a, b).unwrap();
    let (bc, cb) = d.connect_twins(b, c).unwrap();
    let (ca, ac) = d.connect_twins(c, a).unwrap();
    d[bc].is_arc = true;

    let inside = d.add_face_with(cell((0.5, 0.5)));
    let outside = d.add_face_with(cell((9.0, 9.0)));
    assert_eq!(d[inside].idx, inside);
    assert_eq!(d[outside].idx, outside);
    d.assemble_face_cycle(&[ab, bc, ca], inside, 1.0).unwrap();
    d.assemble_face_cycle(&[ba, ac, cb], outside, -1.0).unwrap();

    let apex = d.add_vertex_with(Site {
        index: 3,
        kind: SiteKind::Apex,
        position: (1.0, 0.0),
    });
    let split = d.split_edge(apex, ab).unwrap();

    assert_eq!(d[apex].kind, SiteKind::Apex);
    assert_eq!(d[apex].position, (1.0, 0.0));
    assert_eq!(d[inside].generator, (0.5, 0.5));
    assert_eq!(d.k(split.te1), Ok(-1.0));
    assert!(d[bc].is_arc);
    assert!(!d[split.e1].is_arc);
    assert_eq!(
        d.face_vertices(inside).unwrap(),
        vec![apex, b, c, a]
    );
    assert!(d.validate_invariants().is_ok());
    assert_eq!(validate_topology(&d), Ok(()));
}
