//! # Face Codec
//!
//! Decodes the flat face encoding into triangle index lists.
//!
//! Each face starts with a tag. `0` is triangle shorthand followed by three
//! vertex indices. Any other tag `n` is an n-gon followed by `n` indices; it
//! is skipped, not triangulated. Truncated input ends the scan at the first
//! face that would read past the end.

/// Tag value marking a triangle face.
pub const TRIANGLE_TAG: u32 = 0;

/// One face read from an encoded face array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face<'a> {
    Triangle([u32; 3]),
    /// Vertex indices of an n-gon face.
    Polygon(&'a [u32]),
}

/// Iterator over the faces of an encoded array.
///
/// Stops at the end of input or at the first face whose indices would run
/// past the end.
///
/// # Example
///
/// ```rust
/// use scene_mesh::faces::{Face, Faces};
///
/// let faces: Vec<_> = Faces::new(&[0, 1, 2, 3, 4, 0, 1, 2, 3]).collect();
/// assert_eq!(faces, vec![Face::Triangle([1, 2, 3]), Face::Polygon(&[0, 1, 2, 3])]);
/// ```
#[derive(Debug, Clone)]
pub struct Faces<'a> {
    data: &'a [u32],
    cursor: usize,
}

impl<'a> Faces<'a> {
    pub fn new(data: &'a [u32]) -> Self {
        Self { data, cursor: 0 }
    }

    fn truncate(&mut self, needed: usize) {
        log::warn!(
            "face array truncated at offset {}: face needs {} values, {} remain",
            self.cursor,
            needed,
            self.data.len() - self.cursor - 1
        );
        self.cursor = self.data.len();
    }
}

impl<'a> Iterator for Faces<'a> {
    type Item = Face<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = *self.data.get(self.cursor)?;
        let start = self.cursor + 1;

        if tag == TRIANGLE_TAG {
            let Some(&[a, b, c]) = self.data.get(start..start + 3) else {
                self.truncate(3);
                return None;
            };
            self.cursor = start + 3;
            return Some(Face::Triangle([a, b, c]));
        }

        let count = tag as usize;
        let end = start.checked_add(count);
        let Some(indices) = end.and_then(|end| self.data.get(start..end)) else {
            self.truncate(count);
            return None;
        };
        self.cursor = start + count;
        Some(Face::Polygon(indices))
    }
}

/// Decodes an encoded face array into a flat triangle index list.
///
/// Pure function. n-gon faces are dropped.
///
/// # Example
///
/// ```rust
/// use scene_mesh::faces::decode_faces;
///
/// assert_eq!(decode_faces(&[0, 0, 1, 2, 0, 2, 3, 0]), vec![0, 1, 2, 2, 3, 0]);
/// assert!(decode_faces(&[]).is_empty());
/// ```
pub fn decode_faces(faces: &[u32]) -> Vec<u32> {
    let mut indices = Vec::with_capacity(faces.len() / 4 * 3);
    for face in Faces::new(faces) {
        match face {
            Face::Triangle(tri) => indices.extend_from_slice(&tri),
            Face::Polygon(vertices) => {
                log::debug!("skipping {}-gon face", vertices.len());
            }
        }
    }
    indices
}

/// Encodes triangles using the triangle shorthand tag.
pub fn encode_triangles(triangles: &[[u32; 3]]) -> Vec<u32> {
    triangles
        .iter()
        .flat_map(|&[a, b, c]| [TRIANGLE_TAG, a, b, c])
        .collect()
}
