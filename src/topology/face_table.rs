//! Append-only table of face payloads.

use std::ops::{Index, IndexMut};

use crate::hedi_error::HediError;
use crate::topology::handle::FaceId;
use crate::topology::payload::FaceProps;

/// Faces of a half-edge graph, identified by position.
///
/// Ids are handed out in creation order starting at zero and are never
/// reused; there is no deletion.
#[derive(Clone, Debug)]
pub struct FaceTable<F> {
    faces: Vec<F>,
}

impl<F> Default for FaceTable<F> {
    fn default() -> Self {
        Self { faces: Vec::new() }
    }
}

impl<F: FaceProps> FaceTable<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank face.
    pub fn add_face(&mut self) -> FaceId
    where
        F: Default,
    {
        self.add_face_with(F::default())
    }

    /// Appends `props` and stamps its `idx` with the new id.
    pub fn add_face_with(&mut self, mut props: F) -> FaceId {
        let id = FaceId::new(self.next_raw_id());
        props.set_idx(id);
        self.faces.push(props);
        id
    }

    fn next_raw_id(&self) -> u32 {
        u32::try_from(self.faces.len()).unwrap_or_else(|_| {
            panic!("face table exceeds {} entries", u32::MAX)
        })
    }

    pub fn get(&self, f: FaceId) -> Result<&F, HediError> {
        self.faces.get(f.index()).ok_or(HediError::MissingFace(f))
    }

    pub fn get_mut(&mut self, f: FaceId) -> Result<&mut F, HediError> {
        self.faces.get_mut(f.index()).ok_or(HediError::MissingFace(f))
    }

    #[inline]
    pub fn contains(&self, f: FaceId) -> bool {
        f.index() < self.faces.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// All face ids in creation order.
    ///
    /// Ids come from table positions, not from the payloads' `idx`.
    pub fn ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(|i| FaceId::new(i as u32))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &F)> + '_ {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, f)| (FaceId::new(i as u32), f))
    }
}

impl<F> Index<FaceId> for FaceTable<F> {
    type Output = F;

    fn index(&self, f: FaceId) -> &F {
        &self.faces[f.index()]
    }
}

impl<F> IndexMut<FaceId> for FaceTable<F> {
    fn index_mut(&mut self, f: FaceId) -> &mut F {
        &mut self.faces[f.index()]
    }
}
