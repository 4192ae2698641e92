//! Round-trip tests: hotspots -> project JSON -> hotspots.

use crate::coords::CoordinateMapper;
use crate::format::ProjectFile;
use crate::model::{Hotspot, Point, Polygon, Rect};

fn one_of_each() -> Vec<Hotspot> {
    vec![
        Hotspot::rectangle(Rect::new(10.0, 12.5, 50.0, 30.0))
            .with_link("https://example.com", "Example", "Go to example")
            .with_translation(Point::new(5.0, -3.0)),
        Hotspot::circle(Point::new(200.0, 150.0), 42.25).with_link("#top", "", ""),
        Hotspot::polygon(Polygon::closed_from(vec![
            Point::new(300.0, 300.0),
            Point::new(350.0, 310.0),
            Point::new(340.0, 380.0),
            Point::new(290.0, 360.0),
        ]))
        .with_link("", "Region", "")
        .with_translation(Point::new(0.5, 0.5)),
    ]
}

fn round_trip(hotspots: &[Hotspot]) -> (ProjectFile, Vec<Hotspot>) {
    let project = ProjectFile::new("/tmp/photo.png", "gallery", hotspots);
    let bytes = project.to_json_bytes().expect("serialize");
    let (loaded, warnings) = ProjectFile::from_json_bytes(&bytes).expect("parse");
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    let rebuilt = loaded.to_hotspots();
    (loaded, rebuilt)
}

#[test]
fn test_roundtrip_preserves_everything_but_ids() {
    let original = one_of_each();
    let (loaded, rebuilt) = round_trip(&original);

    assert_eq!(loaded.image_path, "/tmp/photo.png");
    assert_eq!(loaded.map_name, "gallery");
    assert_eq!(rebuilt.len(), original.len());

    for (before, after) in original.iter().zip(&rebuilt) {
        assert_eq!(before.shape(), after.shape());
        assert_eq!(before.translation, after.translation);
        assert_eq!(before.url, after.url);
        assert_eq!(before.alt_text, after.alt_text);
        assert_eq!(before.title, after.title);
        assert_ne!(before.id(), after.id());
    }
}

#[test]
fn test_roundtrip_keeps_export_output() {
    let original = one_of_each();
    let (_, rebuilt) = round_trip(&original);
    let mapper = CoordinateMapper::identity();

    let before: Vec<_> = original.iter().map(|h| h.area_tag(&mapper)).collect();
    let after: Vec<_> = rebuilt.iter().map(|h| h.area_tag(&mapper)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_roundtrip_empty_project() {
    let (loaded, rebuilt) = round_trip(&[]);
    assert!(loaded.hotspots.is_empty());
    assert!(rebuilt.is_empty());
}
