//! # Transform Engine
//!
//! Scale, translation and rotation of vertex positions.
//!
//! Operations apply in call order; calling `translate` then `rotate` is not
//! the same as `rotate` then `translate`. The [`TransformMode`] of the
//! document decides *when* the math runs:
//!
//! - [`TransformMode::Immediate`]: every call rewrites stored vertices.
//! - [`TransformMode::Deferred`]: every call composes into a pending affine
//!   transform that is applied only when positions are written.
//!
//! Both modes give the same geometry for the same call sequence, up to
//! floating-point rounding. Texture coordinates and normals are never
//! transformed.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use obj_mesh::{ObjDocument, TransformMode, Vertex};
//!
//! let mut doc = ObjDocument::with_mode(TransformMode::Deferred);
//! doc.push_vertex(Vertex::new(1.0, 0.0, 0.0));
//! doc.scale_uniform(2.0);
//! doc.translate(DVec3::new(0.0, 1.0, 0.0));
//!
//! // stored vertex is untouched until written
//! assert_eq!(doc.vertices()[0].position, DVec3::X);
//! assert_eq!(doc.output_positions().next(), Some(DVec3::new(2.0, 1.0, 0.0)));
//! ```

use config::constants::approx_equal;
use glam::{DAffine3, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::document::ObjDocument;

// =============================================================================
// MODE AND BOOKKEEPING
// =============================================================================

/// When scale, translation and rotation take effect on stored vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// Mutate vertex positions at call time.
    #[default]
    Immediate,
    /// Compose into a pending transform applied at write time.
    Deferred,
}

/// Cumulative scale and translation accumulators.
///
/// Pure bookkeeping: the values are never applied to vertices a second
/// time. `scale` tracks the X factor of every scale call; `translation` is
/// scaled component-wise by later scale calls and summed with every
/// translation. Rotation does not touch either.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    /// Product of the X factors of every scale call.
    pub scale: f64,
    /// Accumulated translation.
    pub translation: DVec3,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: DVec3::ZERO,
        }
    }
}

impl TransformState {
    fn record_scale(&mut self, factors: DVec3) {
        self.scale *= factors.x;
        self.translation *= factors;
    }

    fn record_translation(&mut self, offset: DVec3) {
        self.translation += offset;
    }
}

// =============================================================================
// ROTATION
// =============================================================================

/// Rotates `point` about X, then Y, then Z by the angles (radians) in
/// `angles`. Each step uses the coordinates produced by the previous one.
/// A zero angle leaves the point bit-for-bit unchanged on that axis.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use obj_mesh::transform::rotate_point;
///
/// let p = rotate_point(DVec3::X, DVec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2));
/// assert!((p - DVec3::Y).length() < 1e-12);
/// ```
pub fn rotate_point(point: DVec3, angles: DVec3) -> DVec3 {
    let (sin_x, cos_x) = angles.x.sin_cos();
    let (sin_y, cos_y) = angles.y.sin_cos();
    let (sin_z, cos_z) = angles.z.sin_cos();
    let DVec3 { mut x, mut y, mut z } = point;

    // A zero angle skips its step so signed zeros and infinities survive.
    if angles.x != 0.0 {
        (y, z) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);
    }
    if angles.y != 0.0 {
        (x, z) = (x * cos_y + z * sin_y, -x * sin_y + z * cos_y);
    }
    if angles.z != 0.0 {
        (x, y) = (x * cos_z - y * sin_z, x * sin_z + y * cos_z);
    }

    DVec3::new(x, y, z)
}

/// Affine matrix equivalent to [`rotate_point`].
pub fn rotation_affine(angles: DVec3) -> DAffine3 {
    DAffine3::from_rotation_z(angles.z)
        * DAffine3::from_rotation_y(angles.y)
        * DAffine3::from_rotation_x(angles.x)
}

// =============================================================================
// DOCUMENT OPERATIONS
// =============================================================================

impl ObjDocument {
    /// Scales every vertex component-wise by `factors`.
    pub fn scale(&mut self, factors: DVec3) {
        debug!(?factors, mode = ?self.mode(), "scale");
        if factors.to_array().into_iter().any(|f| approx_equal(f, 0.0)) {
            warn!(?factors, "Zero scale factor collapses the mesh onto a plane");
        }
        self.state.record_scale(factors);
        match self.mode() {
            TransformMode::Immediate => {
                for v in &mut self.vertices {
                    v.position *= factors;
                }
            }
            TransformMode::Deferred => self.compose(DAffine3::from_scale(factors)),
        }
    }

    /// Scales every vertex by the same factor on all three axes.
    pub fn scale_uniform(&mut self, factor: f64) {
        self.scale(DVec3::splat(factor));
    }

    /// Adds `offset` to every vertex.
    pub fn translate(&mut self, offset: DVec3) {
        debug!(?offset, mode = ?self.mode(), "translate");
        self.state.record_translation(offset);
        match self.mode() {
            TransformMode::Immediate => {
                for v in &mut self.vertices {
                    v.position += offset;
                }
            }
            TransformMode::Deferred => self.compose(DAffine3::from_translation(offset)),
        }
    }

    /// Rotates every vertex about X, then Y, then Z by `angles` (radians).
    pub fn rotate(&mut self, angles: DVec3) {
        debug!(?angles, mode = ?self.mode(), "rotate");
        if angles == DVec3::ZERO {
            return;
        }
        match self.mode() {
            TransformMode::Immediate => {
                for v in &mut self.vertices {
                    v.position = rotate_point(v.position, angles);
                }
            }
            TransformMode::Deferred => self.compose(rotation_affine(angles)),
        }
    }

    /// Bakes the pending transform into the stored vertices and resets it.
    ///
    /// A no-op in immediate mode.
    pub fn apply_pending(&mut self) {
        if self.pending == DAffine3::IDENTITY {
            return;
        }
        let pending = self.pending;
        for v in &mut self.vertices {
            v.position = pending.transform_point3(v.position);
        }
        self.pending = DAffine3::IDENTITY;
    }

    fn compose(&mut self, op: DAffine3) {
        self.pending = op * self.pending;
    }
}
