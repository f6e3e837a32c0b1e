//! Tests for OBJ serialization.

use glam::DVec3;

use super::*;
use crate::geometry::{LineSegment, Normal, TexCoord, Vertex};
use crate::transform::TransformMode;

fn triangle(mode: TransformMode) -> ObjDocument {
    let mut doc = ObjDocument::with_mode(mode);
    doc.push_vertex(Vertex::new(0.0, 0.0, 0.0));
    doc.push_vertex(Vertex::new(1.0, 0.0, 0.0));
    doc.push_vertex(Vertex::new(0.0, 1.0, 0.0));
    doc.push_face(Face::new(vec![0, 1, 2]));
    doc
}

fn render(doc: &ObjDocument) -> String {
    to_obj_string(doc, &WriteOptions::default()).unwrap()
}

#[test]
fn test_minimal_layout() {
    let text = render(&triangle(TransformMode::Immediate));
    let expected = "# Parsed .obj file\n\
                    \n\
                    # Vertices\n\
                    v 0.000000 0.000000 0.000000\n\
                    v 1.000000 0.000000 0.000000\n\
                    v 0.000000 1.000000 0.000000\n\
                    \n\
                    # Faces\n\
                    f 1 2 3\n";
    assert_eq!(text, expected);
}

#[test]
fn test_empty_document_has_header_and_vertex_title_only() {
    let text = render(&ObjDocument::new());
    assert_eq!(text, "# Parsed .obj file\n\n# Vertices\n");
}

#[test]
fn test_optional_sections_in_order() {
    let mut doc = triangle(TransformMode::Immediate);
    doc.push_tex_coord(TexCoord::new(0.5, 0.25));
    doc.push_normal(Normal::new(0.0, 0.0, 1.0));
    let text = render(&doc);

    let tex = text.find("# Texture Coordinates").unwrap();
    let normals = text.find("# Normals").unwrap();
    let faces = text.find("# Faces").unwrap();
    assert!(tex < normals && normals < faces);
    assert!(text.contains("vt 0.500000 0.250000\n"));
    assert!(text.contains("vn 0.000000 0.000000 1.000000\n"));
}

#[test]
fn test_corner_forms() {
    let tex = Face::with_attributes(vec![0, 1, 2], Some(vec![0, 1, 2]), None).unwrap();
    let normal = Face::with_attributes(vec![0, 1, 2], None, Some(vec![2, 2, 2])).unwrap();
    let both =
        Face::with_attributes(vec![0, 1, 2], Some(vec![3, 4, 5]), Some(vec![6, 7, 8])).unwrap();

    assert_eq!(format_face(&tex), "f 1/1 2/2 3/3");
    assert_eq!(format_face(&normal), "f 1//3 2//3 3//3");
    assert_eq!(format_face(&both), "f 1/4/7 2/5/8 3/6/9");
}

#[test]
fn test_precision_is_configurable() {
    let mut doc = ObjDocument::new();
    doc.push_vertex(Vertex::new(1.0 / 3.0, -2.0, 0.5));
    let options = WriteOptions {
        precision: 2,
        ..WriteOptions::default()
    };
    let text = to_obj_string(&doc, &options).unwrap();
    assert!(text.contains("v 0.33 -2.00 0.50\n"));
}

#[test]
fn test_lines_written_only_on_request() {
    let mut doc = triangle(TransformMode::Immediate);
    doc.push_line(LineSegment::new(0, 1));

    assert!(!render(&doc).contains("# Lines"));

    let options = WriteOptions {
        include_lines: true,
        ..WriteOptions::default()
    };
    let text = to_obj_string(&doc, &options).unwrap();
    assert!(text.ends_with("\n# Lines\nl 1 2\n"));
}

#[test]
fn test_deferred_transform_applied_on_output_only() {
    let mut doc = triangle(TransformMode::Deferred);
    doc.scale_uniform(2.0);
    doc.translate(DVec3::new(1.0, 0.0, 0.0));

    let text = render(&doc);
    assert!(text.contains("v 1.000000 0.000000 0.000000\n"));
    assert!(text.contains("v 3.000000 0.000000 0.000000\n"));
    assert!(text.contains("v 1.000000 2.000000 0.000000\n"));

    assert_eq!(doc.vertices()[1].position, DVec3::X);
}

#[test]
fn test_custom_header() {
    let options = WriteOptions {
        header: "# exported".to_string(),
        ..WriteOptions::default()
    };
    let text = to_obj_string(&ObjDocument::new(), &options).unwrap();
    assert!(text.starts_with("# exported\n\n# Vertices\n"));
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.obj");
    let err = save_obj(&ObjDocument::new(), &path, &WriteOptions::default()).unwrap_err();
    match err {
        ObjError::Write { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.obj");
    std::fs::write(&path, "stale contents that are longer than the output\n".repeat(10)).unwrap();

    save_obj(&ObjDocument::new(), &path, &WriteOptions::default()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "# Parsed .obj file\n\n# Vertices\n");
}
