//! # OBJ Mesh
//!
//! Reads Wavefront OBJ geometry, repositions it with affine transforms and
//! writes it back out.
//!
//! ## Architecture
//!
//! ```text
//! text → parser → ObjDocument → topology → transform → serializer → text
//! ```
//!
//! - [`parser`]: `v`, `vt`, `vn`, `f` and `l` records into an [`ObjDocument`]
//! - [`topology`]: closed polygons from undirected line segments
//! - [`transform`]: scale, translate and rotate, immediate or deferred
//! - [`serializer`]: sectioned OBJ text with fixed-point coordinates
//! - [`pipeline`]: all of the above in one call
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use obj_mesh::{parse_obj, to_obj_string, ParseOptions, WriteOptions};
//!
//! let source = "v 1 0 0\nv 0 1 0\nv 0 0 1\nf 1 2 3\n";
//! let mut document = parse_obj(source, &ParseOptions::default()).unwrap().document;
//! document.translate(DVec3::new(0.0, 0.0, 5.0));
//!
//! let text = to_obj_string(&document, &WriteOptions::default()).unwrap();
//! assert!(text.contains("v 1.000000 0.000000 5.000000"));
//! assert!(text.contains("f 1 2 3"));
//! ```

pub mod document;
pub mod error;
pub mod geometry;
pub mod parser;
pub mod pipeline;
pub mod serializer;
pub mod topology;
pub mod transform;

pub use document::{Element, IndexTarget, IndexViolation, ObjDocument};
pub use error::{ObjError, ObjResult, RecordError, RecordErrorKind};
pub use geometry::{Face, FaceCorner, LineSegment, Normal, TexCoord, Vertex};
pub use parser::{load_obj, parse_obj, read_obj, FaceErrorPolicy, ParseOptions, ParsedObj};
pub use pipeline::{run_job, Job, JobSummary};
pub use serializer::{save_obj, to_obj_string, write_obj, WriteOptions};
pub use transform::{TransformMode, TransformState};
