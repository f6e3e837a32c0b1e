//! # OBJ Serializer
//!
//! Writes an [`ObjDocument`] back out in the grammar the parser reads.
//!
//! ## Layout
//!
//! ```text
//! # Parsed .obj file
//!
//! # Vertices
//! v x y z ...
//!
//! # Texture Coordinates      (only when present)
//! # Normals                  (only when present)
//! # Faces                    (only when present)
//! # Lines                    (only with WriteOptions::include_lines)
//! ```
//!
//! Coordinates use fixed-point notation with [`FLOAT_PRECISION`] fractional
//! digits. Vertex positions include any pending deferred transform; stored
//! vertices are not modified by writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::{
    FACES_TITLE, FLOAT_PRECISION, LINES_TITLE, NORMALS_TITLE, OUTPUT_HEADER, TEX_COORDS_TITLE,
    VERTICES_TITLE,
};
use tracing::info;

use crate::document::ObjDocument;
use crate::error::{ObjError, ObjResult};
use crate::geometry::{Face, FaceCorner};

/// Writer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// First line of the file.
    pub header: String,
    /// Fractional digits per coordinate.
    pub precision: usize,
    /// Append the line segments as `l` records.
    pub include_lines: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            header: OUTPUT_HEADER.to_string(),
            precision: FLOAT_PRECISION,
            include_lines: false,
        }
    }
}

/// Writes `document` to any byte sink.
///
/// The writer is not flushed; wrap files in a `BufWriter` and flush, or use
/// [`save_obj`].
pub fn write_obj<W: Write>(
    document: &ObjDocument,
    writer: &mut W,
    options: &WriteOptions,
) -> ObjResult<()> {
    let p = options.precision;

    writeln!(writer, "{}", options.header)?;
    writeln!(writer)?;

    writeln!(writer, "{VERTICES_TITLE}")?;
    for position in document.output_positions() {
        writeln!(
            writer,
            "v {:.p$} {:.p$} {:.p$}",
            position.x, position.y, position.z
        )?;
    }

    if !document.tex_coords().is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{TEX_COORDS_TITLE}")?;
        for tex in document.tex_coords() {
            writeln!(writer, "vt {:.p$} {:.p$}", tex.uv.x, tex.uv.y)?;
        }
    }

    if !document.normals().is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{NORMALS_TITLE}")?;
        for normal in document.normals() {
            let d = normal.direction;
            writeln!(writer, "vn {:.p$} {:.p$} {:.p$}", d.x, d.y, d.z)?;
        }
    }

    if !document.faces().is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{FACES_TITLE}")?;
        for face in document.faces() {
            writeln!(writer, "{}", format_face(face))?;
        }
    }

    if options.include_lines && !document.lines().is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{LINES_TITLE}")?;
        for line in document.lines() {
            writeln!(writer, "l {} {}", line.start + 1, line.end + 1)?;
        }
    }

    Ok(())
}

/// Formats one face record with one-based references.
///
/// # Example
///
/// ```rust
/// use obj_mesh::{serializer::format_face, Face};
///
/// assert_eq!(format_face(&Face::new(vec![0, 1, 2])), "f 1 2 3");
/// let with_normals = Face::with_attributes(vec![0, 1, 2], None, Some(vec![4, 4, 4])).unwrap();
/// assert_eq!(format_face(&with_normals), "f 1//5 2//5 3//5");
/// ```
pub fn format_face(face: &Face) -> String {
    let mut out = String::from("f");
    for corner in face.corners() {
        out.push(' ');
        out.push_str(&format_corner(&corner));
    }
    out
}

fn format_corner(corner: &FaceCorner) -> String {
    let vertex = corner.vertex + 1;
    match (corner.tex_coord, corner.normal) {
        (None, None) => vertex.to_string(),
        (Some(t), None) => format!("{vertex}/{}", t + 1),
        (None, Some(n)) => format!("{vertex}//{}", n + 1),
        (Some(t), Some(n)) => format!("{vertex}/{}/{}", t + 1, n + 1),
    }
}

/// Renders `document` to a string.
pub fn to_obj_string(document: &ObjDocument, options: &WriteOptions) -> ObjResult<String> {
    let mut buffer = Vec::new();
    write_obj(document, &mut buffer, options)?;
    String::from_utf8(buffer).map_err(|e| {
        ObjError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Creates or overwrites `path` with the serialized document.
///
/// # Errors
///
/// [`ObjError::Write`] if the file cannot be created, written or flushed.
pub fn save_obj<P: AsRef<Path>>(
    document: &ObjDocument,
    path: P,
    options: &WriteOptions,
) -> ObjResult<()> {
    let path = path.as_ref();
    let write_error = |source| ObjError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    write_obj(document, &mut writer, options).map_err(|e| match e {
        ObjError::Io(source) => write_error(source),
        other => other,
    })?;
    writer.flush().map_err(write_error)?;

    info!(
        path = %path.display(),
        vertices = document.vertex_count(),
        faces = document.face_count(),
        "Saved OBJ"
    );
    Ok(())
}

#[cfg(test)]
mod tests;
