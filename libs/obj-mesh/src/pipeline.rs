//! # Pipeline
//!
//! One-call load → reconstruct → transform → save.
//!
//! ```text
//! load_obj → convert_lines_to_faces → scale → translate → rotate → save_obj
//! ```
//!
//! The order is fixed. Identity operations are skipped.

use std::path::PathBuf;

use config::constants::{is_identity_scale, DEFAULT_OUTPUT_PATH, DEFAULT_SCALE};
use glam::DVec3;
use serde::Serialize;
use tracing::info;

use crate::error::{ObjError, ObjResult};
use crate::parser::{load_obj, ParseOptions};
use crate::serializer::{save_obj, WriteOptions};

/// Everything needed to reposition one file.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// File to read.
    pub input: PathBuf,
    /// File to create or overwrite.
    pub output: PathBuf,
    /// Per-axis scale factors.
    pub scale: DVec3,
    /// Offset added after scaling.
    pub translate: DVec3,
    /// Rotation angles in radians, applied X then Y then Z.
    pub rotate: DVec3,
    /// Turn `l` segments into faces before transforming.
    pub reconstruct_lines: bool,
    /// Parser settings, including the transform mode.
    pub parse: ParseOptions,
    /// Writer settings.
    pub write: WriteOptions,
}

impl Job {
    /// A job that copies `input` to the default output path unchanged,
    /// reconstructing faces from any line segments.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            scale: DVec3::splat(DEFAULT_SCALE),
            translate: DVec3::ZERO,
            rotate: DVec3::ZERO,
            reconstruct_lines: true,
            parse: ParseOptions::default(),
            write: WriteOptions::default(),
        }
    }

    fn validate(&self) -> ObjResult<()> {
        let params = [
            ("scale.x", self.scale.x),
            ("scale.y", self.scale.y),
            ("scale.z", self.scale.z),
            ("translate.x", self.translate.x),
            ("translate.y", self.translate.y),
            ("translate.z", self.translate.z),
            ("rotate.x", self.rotate.x),
            ("rotate.y", self.rotate.y),
            ("rotate.z", self.rotate.z),
        ];
        match params.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(name, value)) => Err(ObjError::InvalidParameter { name, value }),
            None => Ok(()),
        }
    }
}

/// What a finished job did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
    /// Output file written.
    pub output: PathBuf,
    /// Vertices written.
    pub vertices: usize,
    /// Texture coordinates written.
    pub tex_coords: usize,
    /// Normals written.
    pub normals: usize,
    /// Faces written, including reconstructed ones.
    pub faces: usize,
    /// Line segments read.
    pub lines: usize,
    /// Faces added by line reconstruction.
    pub faces_reconstructed: usize,
    /// Input records dropped as malformed.
    pub skipped_records: usize,
    /// Transform operations actually applied.
    pub applied: Vec<&'static str>,
    /// Axis-aligned bounds of the written vertices.
    pub bounds: Option<([f64; 3], [f64; 3])>,
}

/// Runs `job` end to end.
///
/// # Errors
///
/// - [`ObjError::InvalidParameter`] for a NaN or infinite parameter, before
///   the input is opened
/// - any error from [`load_obj`] or [`save_obj`]
pub fn run_job(job: &Job) -> ObjResult<JobSummary> {
    job.validate()?;

    let parsed = load_obj(&job.input, &job.parse)?;
    let mut document = parsed.document;

    let faces_reconstructed = if job.reconstruct_lines && document.line_count() > 0 {
        document.convert_lines_to_faces()
    } else {
        0
    };

    let mut applied = Vec::new();
    if !job.scale.to_array().into_iter().all(is_identity_scale) {
        document.scale(job.scale);
        applied.push("scale");
    }
    if job.translate != DVec3::ZERO {
        document.translate(job.translate);
        applied.push("translate");
    }
    if job.rotate != DVec3::ZERO {
        document.rotate(job.rotate);
        applied.push("rotate");
    }

    save_obj(&document, &job.output, &job.write)?;

    let summary = JobSummary {
        output: job.output.clone(),
        vertices: document.vertex_count(),
        tex_coords: document.tex_coord_count(),
        normals: document.normal_count(),
        faces: document.face_count(),
        lines: document.line_count(),
        faces_reconstructed,
        skipped_records: parsed.skipped.len(),
        applied,
        bounds: document
            .bounding_box()
            .map(|(min, max)| (min.to_array(), max.to_array())),
    };
    info!(
        input = %job.input.display(),
        output = %job.output.display(),
        faces_reconstructed,
        applied = ?summary.applied,
        "Job finished"
    );
    Ok(summary)
}
