//! # Mesh Document
//!
//! The aggregate holding every parsed record plus the cumulative transform
//! state. A document is filled once by the parser, optionally gains faces
//! from line reconstruction, is transformed in place and is finally written.
//!
//! Record sequences are append-only and keep file order.

use glam::{DAffine3, DVec3};

use crate::geometry::{Face, LineSegment, Normal, TexCoord, Vertex};
use crate::transform::{TransformMode, TransformState};

/// Parsed OBJ contents and transform bookkeeping.
///
/// # Example
///
/// ```rust
/// use obj_mesh::{Face, ObjDocument, Vertex};
///
/// let mut doc = ObjDocument::new();
/// doc.push_vertex(Vertex::new(0.0, 0.0, 0.0));
/// doc.push_vertex(Vertex::new(1.0, 0.0, 0.0));
/// doc.push_vertex(Vertex::new(0.0, 1.0, 0.0));
/// doc.push_face(Face::new(vec![0, 1, 2]));
/// assert_eq!(doc.vertex_count(), 3);
/// assert_eq!(doc.face_count(), 1);
/// assert!(doc.validate_indices().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ObjDocument {
    pub(crate) vertices: Vec<Vertex>,
    tex_coords: Vec<TexCoord>,
    normals: Vec<Normal>,
    faces: Vec<Face>,
    lines: Vec<LineSegment>,
    mode: TransformMode,
    pub(crate) state: TransformState,
    /// Composed transform not yet applied to `vertices` (deferred mode).
    pub(crate) pending: DAffine3,
}

impl Default for ObjDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjDocument {
    /// Creates an empty document using immediate transforms.
    pub fn new() -> Self {
        Self::with_mode(TransformMode::default())
    }

    /// Creates an empty document using the given transform mode.
    pub fn with_mode(mode: TransformMode) -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
            lines: Vec::new(),
            mode,
            state: TransformState::default(),
            pending: DAffine3::IDENTITY,
        }
    }

    // -------------------------------------------------------------------------
    // Appending
    // -------------------------------------------------------------------------

    /// Appends a vertex and returns its zero-based index.
    pub fn push_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Appends a texture coordinate and returns its zero-based index.
    pub fn push_tex_coord(&mut self, tex_coord: TexCoord) -> usize {
        self.tex_coords.push(tex_coord);
        self.tex_coords.len() - 1
    }

    /// Appends a normal and returns its zero-based index.
    pub fn push_normal(&mut self, normal: Normal) -> usize {
        self.normals.push(normal);
        self.normals.len() - 1
    }

    /// Appends a face.
    pub fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Appends a line segment.
    pub fn push_line(&mut self, line: LineSegment) {
        self.lines.push(line);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Stored vertices. In deferred mode these exclude the pending transform;
    /// see [`ObjDocument::output_positions`].
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Texture coordinates in file order.
    #[inline]
    pub fn tex_coords(&self) -> &[TexCoord] {
        &self.tex_coords
    }

    /// Normals in file order.
    #[inline]
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    /// Faces in file order, followed by reconstructed faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Line segments in file order.
    #[inline]
    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of texture coordinates.
    #[inline]
    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    /// Returns the number of normals.
    #[inline]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of line segments.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
            && self.tex_coords.is_empty()
            && self.normals.is_empty()
            && self.faces.is_empty()
            && self.lines.is_empty()
    }

    /// Transform mode chosen at construction.
    #[inline]
    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Cumulative scale and translation bookkeeping.
    #[inline]
    pub fn transform_state(&self) -> &TransformState {
        &self.state
    }

    /// Transform still to be applied at write time. Always identity in
    /// immediate mode.
    #[inline]
    pub fn pending_transform(&self) -> DAffine3 {
        self.pending
    }

    // -------------------------------------------------------------------------
    // Write-time positions
    // -------------------------------------------------------------------------

    /// Position of `vertex` as it will be written.
    pub fn output_position(&self, vertex: &Vertex) -> DVec3 {
        if self.pending == DAffine3::IDENTITY {
            vertex.position
        } else {
            self.pending.transform_point3(vertex.position)
        }
    }

    /// Iterates vertex positions as they will be written.
    pub fn output_positions(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.vertices.iter().map(move |v| self.output_position(v))
    }

    /// Computes the axis-aligned bounding box of the write-time positions.
    ///
    /// Returns `None` for a document without vertices.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut positions = self.output_positions();
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Lists face and line references that point past the end of their
    /// target sequence. Reporting only; the document is not changed.
    pub fn validate_indices(&self) -> Vec<IndexViolation> {
        let mut violations = Vec::new();
        let vertex_limit = self.vertices.len();

        for (position, face) in self.faces.iter().enumerate() {
            for corner in face.corners() {
                let checks = [
                    (IndexTarget::Vertex, Some(corner.vertex), vertex_limit),
                    (IndexTarget::TexCoord, corner.tex_coord, self.tex_coords.len()),
                    (IndexTarget::Normal, corner.normal, self.normals.len()),
                ];
                for (target, index, limit) in checks {
                    if let Some(index) = index.filter(|&i| i >= limit) {
                        violations.push(IndexViolation {
                            element: Element::Face(position),
                            target,
                            index,
                            limit,
                        });
                    }
                }
            }
        }

        for (position, line) in self.lines.iter().enumerate() {
            for index in [line.start, line.end] {
                if index >= vertex_limit {
                    violations.push(IndexViolation {
                        element: Element::Line(position),
                        target: IndexTarget::Vertex,
                        index,
                        limit: vertex_limit,
                    });
                }
            }
        }

        violations
    }
}

/// Record holding an out-of-range reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Zero-based position in the face sequence.
    Face(usize),
    /// Zero-based position in the line sequence.
    Line(usize),
}

/// Sequence an index refers into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    /// Vertex sequence.
    Vertex,
    /// Texture coordinate sequence.
    TexCoord,
    /// Normal sequence.
    Normal,
}

/// A reference that falls outside its target sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexViolation {
    /// Record containing the reference.
    pub element: Element,
    /// Sequence the reference points into.
    pub target: IndexTarget,
    /// Zero-based index found.
    pub index: usize,
    /// Length of the target sequence.
    pub limit: usize,
}
