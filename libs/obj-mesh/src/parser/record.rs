//! # Record Parsing
//!
//! Turns one line of text into one record. Lines are whitespace-tokenized
//! and classified by their first token; the prefix match is case-sensitive.

use crate::error::{ObjError, RecordErrorKind};
use crate::geometry::{Face, LineSegment, Normal, TexCoord, Vertex};

/// One recognized input record.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// `v x y z`
    Vertex(Vertex),
    /// `vt u v`
    TexCoord(TexCoord),
    /// `vn x y z`
    Normal(Normal),
    /// `f v[/vt][/vn] ...`
    Face(Face),
    /// `l a b`
    Line(LineSegment),
}

/// Record family of a line, decided by its first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// `v`
    Vertex,
    /// `vt`
    TexCoord,
    /// `vn`
    Normal,
    /// `f`
    Face,
    /// `l`
    Line,
}

impl Prefix {
    /// Classifies a prefix token. Anything unrecognized, including comments,
    /// returns `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "v" => Some(Self::Vertex),
            "vt" => Some(Self::TexCoord),
            "vn" => Some(Self::Normal),
            "f" => Some(Self::Face),
            "l" => Some(Self::Line),
            _ => None,
        }
    }
}

/// Splits a line into its prefix and remaining fields.
///
/// Returns `None` for blank lines and lines with an unrecognized prefix.
///
/// # Example
///
/// ```rust
/// use obj_mesh::parser::record::{split_line, Prefix};
///
/// let (prefix, fields) = split_line("vt 0.5 1.0").unwrap();
/// assert_eq!(prefix, Prefix::TexCoord);
/// assert_eq!(fields, vec!["0.5", "1.0"]);
/// assert!(split_line("# comment").is_none());
/// assert!(split_line("usemtl wood").is_none());
/// ```
pub fn split_line(line: &str) -> Option<(Prefix, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let prefix = Prefix::from_token(tokens.next()?)?;
    Some((prefix, tokens.collect()))
}

/// Parses the fields of a line whose prefix has been classified.
pub fn parse_record(prefix: Prefix, fields: &[&str]) -> Result<Record, RecordErrorKind> {
    match prefix {
        Prefix::Vertex => {
            let [x, y, z] = parse_floats::<3>("v", fields)?;
            Ok(Record::Vertex(Vertex::new(x, y, z)))
        }
        Prefix::TexCoord => {
            let [u, v] = parse_floats::<2>("vt", fields)?;
            Ok(Record::TexCoord(TexCoord::new(u, v)))
        }
        Prefix::Normal => {
            let [x, y, z] = parse_floats::<3>("vn", fields)?;
            Ok(Record::Normal(Normal::new(x, y, z)))
        }
        Prefix::Face => parse_face(fields).map(Record::Face),
        Prefix::Line => parse_line_segment(fields).map(Record::Line),
    }
}

/// Parses exactly `N` float fields.
fn parse_floats<const N: usize>(
    record: &'static str,
    fields: &[&str],
) -> Result<[f64; N], RecordErrorKind> {
    if fields.len() != N {
        return Err(RecordErrorKind::FieldCount {
            record,
            expected: N,
            found: fields.len(),
        });
    }
    let mut values = [0.0; N];
    for (value, text) in values.iter_mut().zip(fields) {
        *value = text.parse().map_err(|_| RecordErrorKind::InvalidNumber {
            text: (*text).to_string(),
        })?;
    }
    Ok(values)
}

/// Parses a one-based index into a zero-based one.
///
/// Zero, negative and non-integer tokens are rejected.
pub fn parse_index(text: &str) -> Result<usize, RecordErrorKind> {
    text.parse::<usize>()
        .ok()
        .and_then(|one_based| one_based.checked_sub(1))
        .ok_or_else(|| RecordErrorKind::InvalidIndex {
            text: text.to_string(),
        })
}

fn parse_optional_index(component: Option<&str>) -> Result<Option<usize>, RecordErrorKind> {
    match component {
        None | Some("") => Ok(None),
        Some(text) => parse_index(text).map(Some),
    }
}

/// Parses face references of the form `v`, `v/vt`, `v//vn` or `v/vt/vn`.
///
/// Components past the third are ignored. Texture and normal indices must be
/// present on every corner or on none.
pub fn parse_face(fields: &[&str]) -> Result<Face, RecordErrorKind> {
    if fields.is_empty() {
        return Err(RecordErrorKind::EmptyFace);
    }

    let mut vertices = Vec::with_capacity(fields.len());
    let mut tex_coords = Vec::with_capacity(fields.len());
    let mut normals = Vec::with_capacity(fields.len());

    for reference in fields {
        let mut components = reference.split('/');
        let vertex = components.next().unwrap_or_default();
        vertices.push(parse_index(vertex)?);
        if let Some(index) = parse_optional_index(components.next())? {
            tex_coords.push(index);
        }
        if let Some(index) = parse_optional_index(components.next())? {
            normals.push(index);
        }
    }

    let tex_coords = all_or_nothing("texture", tex_coords, vertices.len())?;
    let normals = all_or_nothing("normal", normals, vertices.len())?;
    Face::with_attributes(vertices, tex_coords, normals).map_err(|err| match err {
        ObjError::AttributeLengthMismatch { attribute, .. } => {
            RecordErrorKind::PartialAttributes { attribute }
        }
        other => RecordErrorKind::InvalidIndex {
            text: other.to_string(),
        },
    })
}

fn all_or_nothing(
    attribute: &'static str,
    indices: Vec<usize>,
    corners: usize,
) -> Result<Option<Vec<usize>>, RecordErrorKind> {
    if indices.is_empty() {
        Ok(None)
    } else if indices.len() == corners {
        Ok(Some(indices))
    } else {
        Err(RecordErrorKind::PartialAttributes { attribute })
    }
}

/// Parses `l a b` with exactly two vertex references.
pub fn parse_line_segment(fields: &[&str]) -> Result<LineSegment, RecordErrorKind> {
    match fields {
        [start, end] => Ok(LineSegment::new(parse_index(start)?, parse_index(end)?)),
        _ => Err(RecordErrorKind::FieldCount {
            record: "l",
            expected: 2,
            found: fields.len(),
        }),
    }
}
