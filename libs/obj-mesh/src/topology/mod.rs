//! # Topology Reconstruction
//!
//! Folds undirected line segments into closed polygon loops.
//!
//! ## Algorithm
//!
//! 1. Build an adjacency list from the segments, each segment contributing
//!    both directions. Neighbor lists keep segment order.
//! 2. For each vertex not yet visited, in order of first appearance, walk:
//!    append the current vertex, mark it visited, step to the first
//!    unvisited neighbor. Stop when no such neighbor exists or the walk
//!    returns to its start.
//! 3. Keep loops with at least [`MIN_LOOP_VERTICES`] vertices.
//!
//! Visited marks are global, so a vertex belongs to at most one loop.
//! Winding follows segment order.

use std::collections::{HashMap, HashSet};

use config::constants::MIN_LOOP_VERTICES;
use tracing::debug;

use crate::document::ObjDocument;
use crate::geometry::{Face, LineSegment};

/// Insertion-ordered adjacency list keyed by vertex index.
#[derive(Debug, Default)]
struct Adjacency {
    /// Vertices in order of first appearance.
    order: Vec<usize>,
    neighbors: HashMap<usize, Vec<usize>>,
}

impl Adjacency {
    fn from_segments(segments: &[LineSegment]) -> Self {
        let mut adjacency = Self::default();
        for segment in segments {
            adjacency.link(segment.start, segment.end);
            adjacency.link(segment.end, segment.start);
        }
        adjacency
    }

    fn link(&mut self, from: usize, to: usize) {
        let order = &mut self.order;
        self.neighbors
            .entry(from)
            .or_insert_with(|| {
                order.push(from);
                Vec::new()
            })
            .push(to);
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        self.neighbors
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Reconstructs closed loops from `segments` without touching a document.
///
/// # Example
///
/// ```rust
/// use obj_mesh::{topology::reconstruct_loops, LineSegment};
///
/// let square = [
///     LineSegment::new(0, 1),
///     LineSegment::new(1, 2),
///     LineSegment::new(2, 3),
///     LineSegment::new(3, 0),
/// ];
/// let faces = reconstruct_loops(&square);
/// assert_eq!(faces.len(), 1);
/// assert_eq!(faces[0].vertices(), &[0, 1, 2, 3]);
/// ```
pub fn reconstruct_loops(segments: &[LineSegment]) -> Vec<Face> {
    let adjacency = Adjacency::from_segments(segments);
    let mut visited = HashSet::with_capacity(adjacency.order.len());
    let mut faces = Vec::new();

    for &start in &adjacency.order {
        if visited.contains(&start) {
            continue;
        }

        let mut walk = Vec::new();
        let mut current = start;
        loop {
            walk.push(current);
            visited.insert(current);

            let next = adjacency
                .neighbors(current)
                .iter()
                .copied()
                .find(|n| !visited.contains(n));
            match next {
                Some(next) if next != start => current = next,
                _ => break,
            }
        }

        if walk.len() >= MIN_LOOP_VERTICES {
            debug!(start, vertices = walk.len(), "Reconstructed loop");
            faces.push(Face::new(walk));
        } else {
            debug!(start, vertices = walk.len(), "Discarded degenerate loop");
        }
    }

    faces
}

impl ObjDocument {
    /// Appends a face for every closed loop found in the document's line
    /// segments. Segments are kept. Returns the number of faces added.
    pub fn convert_lines_to_faces(&mut self) -> usize {
        let faces = reconstruct_loops(self.lines());
        let added = faces.len();
        for face in faces {
            self.push_face(face);
        }
        debug!(segments = self.line_count(), added, "Converted lines to faces");
        added
    }
}
