//! Handles for vertices, half-edges and faces.
//!
//! Vertices and edges live in generation-tagged arenas, so their handles are
//! `slotmap` keys: cheap to copy, stable while the element lives, and never
//! silently re-used by a later insertion after the element is removed.
//!
//! Faces are never deleted, so a face is identified by its dense position in
//! the face table. `FaceId` wraps that position in a `repr(transparent)`
//! newtype so it cannot be confused with a vertex index or an edge count.

use std::fmt;

slotmap::new_key_type! {
    /// Handle to a vertex of a [`HalfEdgeGraph`](crate::topology::graph::HalfEdgeGraph).
    pub struct VertexId;
}

slotmap::new_key_type! {
    /// Handle to a directed half-edge of a [`HalfEdgeGraph`](crate::topology::graph::HalfEdgeGraph).
    pub struct EdgeId;
}

/// Position of a face in the face table.
///
/// Assigned at creation (equal to the table size at that moment) and never
/// reused.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct FaceId(u32);

impl FaceId {
    /// Creates a `FaceId` from a raw table position.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        FaceId(raw)
    }

    /// Returns the raw table position.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the table position as a `usize` for indexing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

impl fmt::Debug for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FaceId").field(&self.get()).finish()
    }
}

/// Prints only the raw position.
impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl From<FaceId> for usize {
    #[inline]
    fn from(f: FaceId) -> usize {
        f.index()
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(FaceId, u32);
    assert_eq_size!(VertexId, u64);
    assert_eq_size!(EdgeId, u64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn face_id_debug_and_display() {
        let f = FaceId::new(7);
        assert_eq!(format!("{:?}", f), "FaceId(7)");
        assert_eq!(format!("{}", f), "7");
        assert_eq!(usize::from(f), 7);
    }

    #[test]
    fn face_id_ordering() {
        assert!(FaceId::new(1) < FaceId::new(2));
        let mut ids = vec![FaceId::new(3), FaceId::new(0), FaceId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![FaceId::new(0), FaceId::new(2), FaceId::new(3)]);
    }

    #[test]
    fn removed_keys_are_not_reused() {
        let mut arena: SlotMap<EdgeId, ()> = SlotMap::with_key();
        let a = arena.insert(());
        arena.remove(a);
        let b = arena.insert(());
        assert_ne!(a, b);
        assert!(!arena.contains_key(a));
    }
}
