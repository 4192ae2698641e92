//! Tests for project file parsing and writing.

use serde_json::{Value, json};

use crate::format::{
    FormatError, GeometryEntry, HotspotEntry, ProjectFile, WarningKind, WarningSeverity,
};
use crate::model::{Hotspot, HotspotShape, Point, Rect, ShapeKind};

fn parse(value: Value) -> (ProjectFile, Vec<crate::format::FormatWarning>) {
    ProjectFile::from_value(&value).expect("project should parse")
}

#[test]
fn test_written_field_names() {
    let hotspot = Hotspot::rectangle(Rect::new(1.0, 2.0, 30.0, 40.0))
        .with_link("/a", "Alt", "Title")
        .with_translation(Point::new(5.0, 6.0));
    let project = ProjectFile::new("/img/a.png", "shop", [&hotspot]);

    let bytes = project.to_json_bytes().expect("serialize");
    let value: Value = serde_json::from_slice(&bytes).expect("valid json");

    assert_eq!(value["imagePath"], "/img/a.png");
    assert_eq!(value["mapName"], "shop");
    let entry = &value["hotspots"][0];
    assert_eq!(entry["shape"], 0);
    assert_eq!(entry["url"], "/a");
    assert_eq!(entry["alt"], "Alt");
    assert_eq!(entry["title"], "Title");
    assert_eq!(entry["posX"], 5.0);
    assert_eq!(entry["posY"], 6.0);
    assert_eq!(entry["x"], 1.0);
    assert_eq!(entry["y"], 2.0);
    assert_eq!(entry["width"], 30.0);
    assert_eq!(entry["height"], 40.0);
    assert!(entry.get("radius").is_none());
}

#[test]
fn test_circle_and_polygon_fields() {
    let circle = Hotspot::circle(Point::new(10.0, 20.0), 7.0);
    let poly = Hotspot::polygon(crate::model::Polygon::closed_from(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    ]));
    let project = ProjectFile::new("", "m", [&circle, &poly]);
    let value = serde_json::to_value(&project).expect("serialize");

    assert_eq!(value["hotspots"][0]["shape"], 1);
    assert_eq!(value["hotspots"][0]["centerX"], 10.0);
    assert_eq!(value["hotspots"][0]["centerY"], 20.0);
    assert_eq!(value["hotspots"][0]["radius"], 7.0);

    assert_eq!(value["hotspots"][1]["shape"], 2);
    assert_eq!(
        value["hotspots"][1]["points"],
        json!([{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 0.0}, {"x": 0.0, "y": 1.0}])
    );
}

#[test]
fn test_missing_fields_use_defaults() {
    let (project, warnings) = parse(json!({
        "hotspots": [ { "shape": 1 }, {} ]
    }));

    assert!(warnings.is_empty());
    assert_eq!(project.image_path, "");
    assert_eq!(project.map_name, "imagemap");
    assert_eq!(project.hotspots.len(), 2);

    let circle = &project.hotspots[0];
    assert_eq!(circle.url, "");
    assert_eq!(circle.pos_x, 0.0);
    assert_eq!(
        circle.geometry,
        GeometryEntry::Circle {
            center_x: 0.0,
            center_y: 0.0,
            radius: 0.0
        }
    );

    // No shape tag reads as a rectangle
    assert_eq!(project.hotspots[1].shape, 0);
}

#[test]
fn test_missing_hotspots_is_empty_project() {
    let (project, warnings) = parse(json!({ "imagePath": "x.png", "mapName": "m" }));
    assert!(project.hotspots.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn test_mistyped_fields_default_with_warning() {
    let (project, warnings) = parse(json!({
        "mapName": 42,
        "hotspots": [ { "shape": 0, "x": "ten", "url": 5, "width": 20, "height": 20 } ]
    }));

    assert_eq!(project.map_name, "imagemap");
    let entry = &project.hotspots[0];
    assert_eq!(entry.url, "");
    assert_eq!(
        entry.geometry,
        GeometryEntry::Rectangle {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 20.0
        }
    );

    assert_eq!(warnings.len(), 3);
    assert!(warnings.iter().all(|w| w.kind == WarningKind::MalformedField));
}

#[test]
fn test_unknown_shape_and_non_object_entries_skipped() {
    let (project, warnings) = parse(json!({
        "hotspots": [
            { "shape": 7, "x": 1 },
            "not a hotspot",
            { "shape": "circle" },
            { "shape": 2, "points": [ {"x": 1, "y": 2}, {"x": 3} ] }
        ]
    }));

    assert_eq!(project.hotspots.len(), 1);
    assert_eq!(
        project.hotspots[0].geometry,
        GeometryEntry::Polygon {
            points: vec![
                crate::format::PointEntry { x: 1.0, y: 2.0 },
                crate::format::PointEntry { x: 3.0, y: 0.0 },
            ]
        }
    );

    let skipped: Vec<_> = warnings
        .iter()
        .filter(|w| w.kind == WarningKind::SkippedHotspot)
        .collect();
    assert_eq!(skipped.len(), 3);
    assert!(skipped.iter().all(|w| w.severity == WarningSeverity::Error));
    assert!(skipped[0].message.contains("#0"));
}

#[test]
fn test_hotspots_not_an_array() {
    let (project, warnings) = parse(json!({ "hotspots": {"shape": 0} }));
    assert!(project.hotspots.is_empty());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::MalformedField);
}

#[test]
fn test_invalid_documents_are_errors() {
    assert!(matches!(
        ProjectFile::from_json_bytes(b"{ not json"),
        Err(FormatError::Json(_))
    ));
    assert!(matches!(
        ProjectFile::from_json_bytes(b"[1, 2, 3]"),
        Err(FormatError::InvalidFormat { .. })
    ));
}

#[test]
fn test_loaded_polygons_are_closed() {
    let entry = HotspotEntry {
        shape: 2,
        url: String::new(),
        alt: String::new(),
        title: String::new(),
        pos_x: 0.0,
        pos_y: 0.0,
        geometry: GeometryEntry::Polygon {
            points: vec![
                crate::format::PointEntry { x: 0.0, y: 0.0 },
                crate::format::PointEntry { x: 10.0, y: 0.0 },
                crate::format::PointEntry { x: 0.0, y: 10.0 },
            ],
        },
    };

    let hotspot = entry.to_hotspot();
    assert_eq!(hotspot.kind(), ShapeKind::Polygon);
    match hotspot.shape() {
        HotspotShape::Polygon(poly) => assert!(poly.closed),
        other => panic!("Expected polygon, got {:?}", other),
    }
}
