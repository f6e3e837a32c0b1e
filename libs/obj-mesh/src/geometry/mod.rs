//! # Geometry Primitives
//!
//! Value types stored in an [`crate::ObjDocument`]. Positions and directions
//! wrap `glam` vectors so the transform code can use `glam` math directly.
//!
//! All indices held here are zero-based. The one-based convention of the
//! text format is applied only by the parser and the serializer.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{ObjError, ObjResult};

// =============================================================================
// VERTEX DATA
// =============================================================================

/// A point in 3D space. Rewritten by immediate-mode transforms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// Position (X, Y, Z).
    pub position: DVec3,
}

impl Vertex {
    /// Creates a vertex from coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: DVec3::new(x, y, z),
        }
    }
}

impl From<DVec3> for Vertex {
    fn from(position: DVec3) -> Self {
        Self { position }
    }
}

/// A 2D texture coordinate. Never touched by transforms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TexCoord {
    /// Coordinate (U, V).
    pub uv: DVec2,
}

impl TexCoord {
    /// Creates a texture coordinate.
    pub const fn new(u: f64, v: f64) -> Self {
        Self {
            uv: DVec2::new(u, v),
        }
    }
}

/// A 3D direction as read from a `vn` record. Never touched by transforms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Normal {
    /// Direction (X, Y, Z); not necessarily unit length.
    pub direction: DVec3,
}

impl Normal {
    /// Creates a normal.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            direction: DVec3::new(x, y, z),
        }
    }
}

// =============================================================================
// CONNECTIVITY
// =============================================================================

/// An undirected edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    /// Zero-based index of the first vertex.
    pub start: usize,
    /// Zero-based index of the second vertex.
    pub end: usize,
}

impl LineSegment {
    /// Creates a segment between two zero-based vertex indices.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One corner of a face, with its optional attribute indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    /// Zero-based vertex index.
    pub vertex: usize,
    /// Zero-based texture coordinate index.
    pub tex_coord: Option<usize>,
    /// Zero-based normal index.
    pub normal: Option<usize>,
}

/// A polygon given as an ordered list of vertex indices.
///
/// Texture and normal index lists are all-or-nothing: when present they have
/// exactly one entry per vertex index.
///
/// # Example
///
/// ```rust
/// use obj_mesh::Face;
///
/// let face = Face::with_attributes(vec![0, 1, 2], None, Some(vec![0, 0, 0])).unwrap();
/// assert_eq!(face.corner_count(), 3);
/// assert!(face.tex_coords().is_none());
/// assert!(Face::with_attributes(vec![0, 1, 2], Some(vec![0]), None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Face {
    vertices: Vec<usize>,
    tex_coords: Option<Vec<usize>>,
    normals: Option<Vec<usize>>,
}

impl Face {
    /// Creates a face with vertex indices only.
    pub fn new(vertices: Vec<usize>) -> Self {
        Self {
            vertices,
            tex_coords: None,
            normals: None,
        }
    }

    /// Creates a face with optional per-corner attributes.
    ///
    /// Fails with [`ObjError::AttributeLengthMismatch`] when an attribute list
    /// does not have one entry per vertex.
    pub fn with_attributes(
        vertices: Vec<usize>,
        tex_coords: Option<Vec<usize>>,
        normals: Option<Vec<usize>>,
    ) -> ObjResult<Self> {
        check_attribute_len("texture", vertices.len(), tex_coords.as_deref())?;
        check_attribute_len("normal", vertices.len(), normals.as_deref())?;
        Ok(Self {
            vertices,
            tex_coords,
            normals,
        })
    }

    /// Zero-based vertex indices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Zero-based texture coordinate indices, if present.
    #[inline]
    pub fn tex_coords(&self) -> Option<&[usize]> {
        self.tex_coords.as_deref()
    }

    /// Zero-based normal indices, if present.
    #[inline]
    pub fn normals(&self) -> Option<&[usize]> {
        self.normals.as_deref()
    }

    /// Number of corners.
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates corners in winding order.
    pub fn corners(&self) -> impl Iterator<Item = FaceCorner> + '_ {
        self.vertices.iter().enumerate().map(move |(i, &vertex)| FaceCorner {
            vertex,
            tex_coord: self.tex_coords.as_ref().and_then(|t| t.get(i).copied()),
            normal: self.normals.as_ref().and_then(|n| n.get(i).copied()),
        })
    }
}

fn check_attribute_len(
    attribute: &'static str,
    expected: usize,
    indices: Option<&[usize]>,
) -> ObjResult<()> {
    match indices {
        Some(indices) if indices.len() != expected => Err(ObjError::AttributeLengthMismatch {
            attribute,
            expected,
            found: indices.len(),
        }),
        _ => Ok(()),
    }
}
