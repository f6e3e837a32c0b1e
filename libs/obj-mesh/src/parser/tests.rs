//! Tests for the OBJ parser.

use std::io::Cursor;

use glam::{DVec2, DVec3};

use super::record::{parse_face, parse_index, parse_line_segment};
use super::*;
use crate::geometry::LineSegment;

fn parse(source: &str) -> ParsedObj {
    parse_obj(source, &ParseOptions::default()).unwrap()
}

// =============================================================================
// SIMPLE RECORDS
// =============================================================================

#[test]
fn test_parse_vertices() {
    let parsed = parse("v 1 2 3\nv -1.5 0.25 1e3\n");
    let doc = &parsed.document;
    assert_eq!(doc.vertex_count(), 2);
    assert_eq!(doc.vertices()[0].position, DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(doc.vertices()[1].position, DVec3::new(-1.5, 0.25, 1000.0));
    assert!(parsed.skipped.is_empty());
}

#[test]
fn test_parse_tex_coords_and_normals() {
    let doc = parse("vt 0.5 0.75\nvn 0 0 1\n").document;
    assert_eq!(doc.tex_coords()[0].uv, DVec2::new(0.5, 0.75));
    assert_eq!(doc.normals()[0].direction, DVec3::Z);
}

#[test]
fn test_ignores_unrecognized_lines() {
    let source = "# comment\n\no cube\ng side\nusemtl red\nmtllib a.mtl\ns off\nV 1 2 3\n";
    let parsed = parse(source);
    assert!(parsed.document.is_empty());
    assert!(parsed.skipped.is_empty());
    assert_eq!(parsed.lines_read, 8);
}

#[test]
fn test_tolerates_extra_whitespace_and_crlf() {
    let doc = parse("v   1\t2  3\r\n  vt 0 1\r\n").document;
    assert_eq!(doc.vertex_count(), 1);
    assert_eq!(doc.tex_coord_count(), 1);
}

// =============================================================================
// MALFORMED RECORDS
// =============================================================================

#[test]
fn test_vertex_with_two_fields_is_dropped() {
    let parsed = parse("v 1 2 3\nv 1 2\nv 4 5 6\n");
    assert_eq!(parsed.document.vertex_count(), 2);
    assert_eq!(
        parsed.skipped,
        vec![RecordError::new(
            2,
            RecordErrorKind::FieldCount {
                record: "v",
                expected: 3,
                found: 2,
            }
        )]
    );
}

#[test]
fn test_vertex_with_four_fields_is_dropped() {
    let parsed = parse("v 1 2 3 1\n");
    assert_eq!(parsed.document.vertex_count(), 0);
    assert_eq!(parsed.skipped.len(), 1);
}

#[test]
fn test_non_numeric_fields_are_dropped() {
    let parsed = parse("v 1 two 3\nvt a 0\nvn 0 0 z\nv 0 0 0\n");
    assert_eq!(parsed.document.vertex_count(), 1);
    assert_eq!(parsed.document.tex_coord_count(), 0);
    assert_eq!(parsed.document.normal_count(), 0);
    let lines: Vec<usize> = parsed.skipped.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
    assert_eq!(
        parsed.skipped[0].kind,
        RecordErrorKind::InvalidNumber {
            text: "two".to_string()
        }
    );
}

// =============================================================================
// FACES
// =============================================================================

#[test]
fn test_face_indices_are_zero_based() {
    let doc = parse("f 1 2 3\n").document;
    assert_eq!(doc.faces()[0].vertices(), &[0, 1, 2]);
    assert!(doc.faces()[0].tex_coords().is_none());
    assert!(doc.faces()[0].normals().is_none());
}

#[test]
fn test_face_reference_forms() {
    let full = parse_face(&["1/4/7", "2/5/8", "3/6/9"]).unwrap();
    assert_eq!(full.vertices(), &[0, 1, 2]);
    assert_eq!(full.tex_coords(), Some(&[3, 4, 5][..]));
    assert_eq!(full.normals(), Some(&[6, 7, 8][..]));

    let tex_only = parse_face(&["1/1", "2/2", "3/3"]).unwrap();
    assert_eq!(tex_only.tex_coords(), Some(&[0, 1, 2][..]));
    assert!(tex_only.normals().is_none());

    let normal_only = parse_face(&["1//3", "2//3", "3//3"]).unwrap();
    assert!(normal_only.tex_coords().is_none());
    assert_eq!(normal_only.normals(), Some(&[2, 2, 2][..]));

    let trailing = parse_face(&["1/", "2/", "3//"]).unwrap();
    assert!(trailing.tex_coords().is_none());
    assert!(trailing.normals().is_none());
}

#[test]
fn test_face_single_reference_and_polygon() {
    assert_eq!(parse_face(&["5"]).unwrap().vertices(), &[4]);
    let quad = parse_face(&["1", "2", "3", "4", "5"]).unwrap();
    assert_eq!(quad.corner_count(), 5);
}

#[test]
fn test_face_errors() {
    assert_eq!(parse_face(&[]).unwrap_err(), RecordErrorKind::EmptyFace);
    assert!(matches!(
        parse_face(&["1", "x", "3"]).unwrap_err(),
        RecordErrorKind::InvalidIndex { .. }
    ));
    assert!(matches!(
        parse_face(&["1/a", "2/1", "3/1"]).unwrap_err(),
        RecordErrorKind::InvalidIndex { .. }
    ));
    assert!(matches!(
        parse_face(&["0", "1", "2"]).unwrap_err(),
        RecordErrorKind::InvalidIndex { .. }
    ));
    assert!(matches!(
        parse_face(&["-1", "-2", "-3"]).unwrap_err(),
        RecordErrorKind::InvalidIndex { .. }
    ));
    assert_eq!(
        parse_face(&["1/1", "2", "3/3"]).unwrap_err(),
        RecordErrorKind::PartialAttributes {
            attribute: "texture"
        }
    );
    assert_eq!(
        parse_face(&["1//1", "2//2", "3"]).unwrap_err(),
        RecordErrorKind::PartialAttributes {
            attribute: "normal"
        }
    );
}

#[test]
fn test_malformed_face_skipped_by_default() {
    let parsed = parse("v 0 0 0\nf 1 2 x\nf 1 1 1\n");
    assert_eq!(parsed.document.face_count(), 1);
    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(parsed.skipped[0].line, 2);
}

#[test]
fn test_malformed_face_aborts_when_requested() {
    let options = ParseOptions {
        face_errors: FaceErrorPolicy::Abort,
        ..ParseOptions::default()
    };
    let err = parse_obj("v 0 0 0\nv 1 2\nf 1 2 x\n", &options).unwrap_err();
    match err {
        ObjError::MalformedFace { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("'x'"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_abort_policy_still_skips_vertex_errors() {
    let options = ParseOptions {
        face_errors: FaceErrorPolicy::Abort,
        ..ParseOptions::default()
    };
    let parsed = parse_obj("v 1 2\nv 0 0 0\n", &options).unwrap();
    assert_eq!(parsed.document.vertex_count(), 1);
    assert_eq!(parsed.skipped.len(), 1);
}

// =============================================================================
// LINES
// =============================================================================

#[test]
fn test_parse_line_segments() {
    let doc = parse("l 1 2\nl 3 4\n").document;
    assert_eq!(doc.lines(), &[LineSegment::new(0, 1), LineSegment::new(2, 3)]);
}

#[test]
fn test_malformed_lines_are_dropped() {
    let parsed = parse("l 1\nl 1 2 3\nl a b\nl 0 1\n");
    assert_eq!(parsed.document.line_count(), 0);
    assert_eq!(parsed.skipped.len(), 4);
    assert!(parse_line_segment(&["1", "2"]).is_ok());
}

#[test]
fn test_line_parsing_can_be_disabled() {
    let options = ParseOptions {
        parse_lines: false,
        ..ParseOptions::default()
    };
    let parsed = parse_obj("l 1 2\nl bad\n", &options).unwrap();
    assert_eq!(parsed.document.line_count(), 0);
    assert!(parsed.skipped.is_empty());
}

#[test]
fn test_parse_index() {
    assert_eq!(parse_index("1"), Ok(0));
    assert_eq!(parse_index("+12"), Ok(11));
    assert!(parse_index("0").is_err());
    assert!(parse_index("1.5").is_err());
    assert!(parse_index("").is_err());
}

// =============================================================================
// READERS
// =============================================================================

#[test]
fn test_read_obj_matches_parse_obj() {
    let source = "v 1 2 3\nv 4 5 6\nv 7 8 9\nf 1 2 3\n";
    let from_reader = read_obj(Cursor::new(source), &ParseOptions::default()).unwrap();
    let from_str = parse(source);
    assert_eq!(from_reader.document.vertices(), from_str.document.vertices());
    assert_eq!(from_reader.document.faces(), from_str.document.faces());
    assert_eq!(from_reader.lines_read, 4);
}

#[test]
fn test_read_obj_invalid_utf8_is_fatal() {
    let bytes: &[u8] = b"v 1 2 3\n\xff\xfe\n";
    let err = read_obj(Cursor::new(bytes), &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ObjError::Io(_)));
}

#[test]
fn test_document_takes_requested_mode() {
    let options = ParseOptions {
        mode: TransformMode::Deferred,
        ..ParseOptions::default()
    };
    let parsed = parse_obj("v 0 0 0\n", &options).unwrap();
    assert_eq!(parsed.document.mode(), TransformMode::Deferred);
}

#[test]
fn test_load_missing_file() {
    let err = load_obj("does_not_exist_12345.obj", &ParseOptions::default()).unwrap_err();
    match err {
        ObjError::FileNotFound { path } => {
            assert!(path.to_string_lossy().contains("does_not_exist"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_mid_stream_failure_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.obj");
    std::fs::write(&path, b"v 1 2 3\n\xff\xfe\n").unwrap();

    let result = load_obj(&path, &ParseOptions::default());
    match result {
        Err(ObjError::Read { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(parsed) => panic!(
            "partial document returned with {} vertices",
            parsed.document.vertex_count()
        ),
    }
}
