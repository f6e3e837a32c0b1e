//! # OBJ Parser
//!
//! Builds an [`ObjDocument`] from a line stream.
//!
//! ## Recognized records
//!
//! | Prefix | Fields | Record |
//! |---|---|---|
//! | `v` | 3 floats | vertex |
//! | `vt` | 2 floats | texture coordinate |
//! | `vn` | 3 floats | normal |
//! | `f` | ≥1 `v[/vt][/vn]` | face, one-based |
//! | `l` | 2 ints | line segment, one-based |
//!
//! Every other line is ignored.
//!
//! ## Error Handling
//!
//! A malformed record is dropped and reported in [`ParsedObj::skipped`]; the
//! load continues. Malformed faces follow [`FaceErrorPolicy`]. Only a failing
//! byte stream is always fatal.
//!
//! ```rust
//! use obj_mesh::{parse_obj, ParseOptions};
//!
//! let parsed = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n", &ParseOptions::default()).unwrap();
//! assert_eq!(parsed.document.faces()[0].vertices(), &[0, 1, 2]);
//! ```

pub mod record;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::document::ObjDocument;
use crate::error::{ObjError, ObjResult, RecordError, RecordErrorKind};
use crate::transform::TransformMode;
use record::{parse_record, split_line, Prefix, Record};

// =============================================================================
// OPTIONS
// =============================================================================

/// What to do with a face line that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceErrorPolicy {
    /// Drop the face and keep loading, like any other record.
    #[default]
    Skip,
    /// Fail the whole load with [`ObjError::MalformedFace`].
    Abort,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Handling of malformed faces.
    pub face_errors: FaceErrorPolicy,
    /// Recognize `l` records. When false they are ignored like comments.
    pub parse_lines: bool,
    /// Transform mode of the produced document.
    pub mode: TransformMode,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            face_errors: FaceErrorPolicy::Skip,
            parse_lines: true,
            mode: TransformMode::Immediate,
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// A loaded document plus the records that were dropped on the way.
#[derive(Debug, Clone)]
pub struct ParsedObj {
    /// The populated document.
    pub document: ObjDocument,
    /// Dropped records in line order.
    pub skipped: Vec<RecordError>,
    /// Number of lines read.
    pub lines_read: usize,
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Parses OBJ text held in memory.
pub fn parse_obj(source: &str, options: &ParseOptions) -> ObjResult<ParsedObj> {
    let mut parser = LineParser::new(options);
    for line in source.lines() {
        parser.feed(line)?;
    }
    Ok(parser.finish())
}

/// Parses OBJ text from a buffered reader.
///
/// A read error, including invalid UTF-8, fails the whole call.
pub fn read_obj<R: BufRead>(reader: R, options: &ParseOptions) -> ObjResult<ParsedObj> {
    let mut parser = LineParser::new(options);
    for line in reader.lines() {
        parser.feed(&line?)?;
    }
    Ok(parser.finish())
}

/// Loads an OBJ file.
///
/// # Errors
///
/// - [`ObjError::FileNotFound`] when the path does not exist
/// - [`ObjError::Read`] when opening or reading fails
/// - [`ObjError::MalformedFace`] under [`FaceErrorPolicy::Abort`]
///
/// # Example
///
/// ```no_run
/// use obj_mesh::{load_obj, ParseOptions};
///
/// let parsed = load_obj("model.obj", &ParseOptions::default()).unwrap();
/// println!("{} vertices", parsed.document.vertex_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P, options: &ParseOptions) -> ObjResult<ParsedObj> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ObjError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ObjError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let parsed = read_obj(BufReader::new(file), options).map_err(|e| match e {
        ObjError::Io(source) => ObjError::Read {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!(
        path = %path.display(),
        vertices = parsed.document.vertex_count(),
        tex_coords = parsed.document.tex_coord_count(),
        normals = parsed.document.normal_count(),
        faces = parsed.document.face_count(),
        lines = parsed.document.line_count(),
        skipped = parsed.skipped.len(),
        "Loaded OBJ"
    );
    Ok(parsed)
}

// =============================================================================
// LINE PARSER
// =============================================================================

/// Incremental state shared by the entry points.
struct LineParser<'a> {
    options: &'a ParseOptions,
    document: ObjDocument,
    skipped: Vec<RecordError>,
    line_number: usize,
}

impl<'a> LineParser<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            document: ObjDocument::with_mode(options.mode),
            skipped: Vec::new(),
            line_number: 0,
        }
    }

    fn feed(&mut self, line: &str) -> ObjResult<()> {
        self.line_number += 1;

        let Some((prefix, fields)) = split_line(line) else {
            return Ok(());
        };
        if prefix == Prefix::Line && !self.options.parse_lines {
            return Ok(());
        }

        match parse_record(prefix, &fields) {
            Ok(record) => self.push(record),
            Err(kind) => self.reject(prefix, kind)?,
        }
        Ok(())
    }

    fn push(&mut self, record: Record) {
        match record {
            Record::Vertex(v) => {
                self.document.push_vertex(v);
            }
            Record::TexCoord(t) => {
                self.document.push_tex_coord(t);
            }
            Record::Normal(n) => {
                self.document.push_normal(n);
            }
            Record::Face(f) => self.document.push_face(f),
            Record::Line(l) => self.document.push_line(l),
        }
    }

    fn reject(&mut self, prefix: Prefix, kind: RecordErrorKind) -> ObjResult<()> {
        if prefix == Prefix::Face && self.options.face_errors == FaceErrorPolicy::Abort {
            warn!(line = self.line_number, error = %kind, "Aborting load on malformed face");
            return Err(ObjError::malformed_face(self.line_number, kind.to_string()));
        }
        debug!(line = self.line_number, ?prefix, error = %kind, "Skipping record");
        self.skipped.push(RecordError::new(self.line_number, kind));
        Ok(())
    }

    fn finish(self) -> ParsedObj {
        ParsedObj {
            document: self.document,
            skipped: self.skipped,
            lines_read: self.line_number,
        }
    }
}

#[cfg(test)]
mod tests;
