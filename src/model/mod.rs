//! Data models for the image map editor.

mod geometry;
mod hotspot;
mod tool;

pub use geometry::{Point, Polygon, Rect};
pub use hotspot::{Hotspot, HotspotId, HotspotShape, ShapeKind, round_coord};
pub use tool::EditorTool;
