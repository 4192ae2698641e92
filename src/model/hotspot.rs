//! Hotspot data model.
//!
//! A hotspot is one drawn shape with link metadata. Geometry is stored in
//! local coordinates and shifted by `translation` whenever it is placed in
//! the scene or exported.

use std::fmt;

use uuid::Uuid;

use super::geometry::{Point, Polygon, Rect};
use crate::constants::{drawing::HOTSPOT_PADDING, export::HOTSPOT_ID_LEN, label};
use crate::coords::CoordinateMapper;
use crate::format::html::escape_attr;

/// Short opaque identifier of a hotspot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotspotId(String);

impl HotspotId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(HOTSPOT_ID_LEN);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HotspotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discriminant of a hotspot's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Polygon,
}

impl ShapeKind {
    /// Value of the HTML `shape` attribute.
    pub fn token(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "poly",
        }
    }

    /// Get the display name for this shape kind.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Polygon => "Polygon",
        }
    }

    /// Short name used in hotspot list labels.
    pub fn short_name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rect",
            ShapeKind::Circle => "Circle",
            ShapeKind::Polygon => "Poly",
        }
    }
}

/// Shape geometry of a hotspot (local coordinates).
#[derive(Debug, Clone, PartialEq)]
pub enum HotspotShape {
    Rectangle(Rect),
    Circle { center: Point, radius: f64 },
    Polygon(Polygon),
}

impl HotspotShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            HotspotShape::Rectangle(_) => ShapeKind::Rectangle,
            HotspotShape::Circle { .. } => ShapeKind::Circle,
            HotspotShape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Padded bounds used for the hit-area display.
    pub fn bounding_box(&self) -> Rect {
        match self {
            HotspotShape::Rectangle(rect) => rect.padded(HOTSPOT_PADDING),
            HotspotShape::Circle { center, radius } => Rect::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            )
            .padded(HOTSPOT_PADDING),
            HotspotShape::Polygon(poly) => poly.bounds().unwrap_or_default().padded(HOTSPOT_PADDING),
        }
    }

    /// Exact containment of a point given in local coordinates.
    pub fn contains(&self, point: &Point) -> bool {
        match self {
            HotspotShape::Rectangle(rect) => rect.contains(point),
            HotspotShape::Circle { center, radius } => center.distance_to(point) <= *radius,
            HotspotShape::Polygon(poly) => poly.contains(point),
        }
    }
}

/// Round half away from zero, the rounding used for every exported coordinate.
pub fn round_coord(value: f64) -> i64 {
    value.round() as i64
}

/// A single drawn annotation with link metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    id: HotspotId,
    shape: HotspotShape,
    pub url: String,
    pub alt_text: String,
    pub title: String,
    /// Offset applied to all geometry.
    pub translation: Point,
}

impl Hotspot {
    /// Create a hotspot with a fresh id and empty link fields.
    pub fn new(shape: HotspotShape) -> Self {
        Self {
            id: HotspotId::generate(),
            shape,
            url: String::new(),
            alt_text: String::new(),
            title: String::new(),
            translation: Point::default(),
        }
    }

    pub fn rectangle(rect: Rect) -> Self {
        Self::new(HotspotShape::Rectangle(rect))
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(HotspotShape::Circle { center, radius })
    }

    pub fn polygon(polygon: Polygon) -> Self {
        Self::new(HotspotShape::Polygon(polygon))
    }

    /// Builder: set the link fields.
    pub fn with_link(
        mut self,
        url: impl Into<String>,
        alt_text: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.url = url.into();
        self.alt_text = alt_text.into();
        self.title = title.into();
        self
    }

    /// Builder: set the translation.
    pub fn with_translation(mut self, translation: Point) -> Self {
        self.translation = translation;
        self
    }

    pub fn id(&self) -> &HotspotId {
        &self.id
    }

    pub fn shape(&self) -> &HotspotShape {
        &self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    // Geometry mutation keeps the shape kind fixed: each setter only applies
    // to the matching variant and reports whether it did.

    /// Replace the rectangle of a rectangle hotspot.
    pub fn set_rect(&mut self, rect: Rect) -> bool {
        match &mut self.shape {
            HotspotShape::Rectangle(r) => {
                *r = rect;
                true
            }
            _ => false,
        }
    }

    /// Change the radius of a circle hotspot.
    pub fn set_radius(&mut self, radius: f64) -> bool {
        match &mut self.shape {
            HotspotShape::Circle { radius: r, .. } => {
                *r = radius.max(0.0);
                true
            }
            _ => false,
        }
    }

    /// Append a vertex to a polygon hotspot.
    pub fn push_vertex(&mut self, point: Point) -> bool {
        match &mut self.shape {
            HotspotShape::Polygon(poly) => {
                poly.push(point);
                true
            }
            _ => false,
        }
    }

    /// Mark a polygon hotspot as closed.
    pub fn close_polygon(&mut self) -> bool {
        match &mut self.shape {
            HotspotShape::Polygon(poly) => {
                poly.close();
                true
            }
            _ => false,
        }
    }

    /// Move the hotspot by a delta.
    pub fn translate_by(&mut self, dx: f64, dy: f64) {
        self.translation.x += dx;
        self.translation.y += dy;
    }

    /// Local bounding box padded on every side, for hit-area display.
    pub fn bounding_box(&self) -> Rect {
        self.shape.bounding_box()
    }

    /// Padded bounding box in scene coordinates.
    pub fn scene_bounding_box(&self) -> Rect {
        self.bounding_box().translated(self.translation)
    }

    /// Exact containment test for a point in scene coordinates.
    pub fn contains_point(&self, point: &Point) -> bool {
        let local = Point::new(point.x - self.translation.x, point.y - self.translation.y);
        self.shape.contains(&local)
    }

    /// Value of the HTML `shape` attribute.
    pub fn shape_token(&self) -> &'static str {
        self.kind().token()
    }

    /// Coordinates for the HTML `coords` attribute.
    ///
    /// Translation is applied, then `mapper`, then every value is rounded
    /// half away from zero.
    pub fn output_coords(&self, mapper: &CoordinateMapper) -> Vec<i64> {
        match &self.shape {
            HotspotShape::Rectangle(rect) => {
                let r = mapper.map_rect(rect.translated(self.translation));
                vec![
                    round_coord(r.x),
                    round_coord(r.y),
                    round_coord(r.right()),
                    round_coord(r.bottom()),
                ]
            }
            HotspotShape::Circle { center, radius } => {
                let c = mapper.map_point(center.offset(self.translation));
                vec![
                    round_coord(c.x),
                    round_coord(c.y),
                    round_coord(mapper.map_radius(*radius)),
                ]
            }
            HotspotShape::Polygon(poly) => poly
                .vertices
                .iter()
                .flat_map(|p| {
                    let p = mapper.map_point(p.offset(self.translation));
                    [round_coord(p.x), round_coord(p.y)]
                })
                .collect(),
        }
    }

    /// Coordinates in editor space (no screen-standard scaling).
    pub fn output_coords_unscaled(&self) -> Vec<i64> {
        self.output_coords(&CoordinateMapper::identity())
    }

    /// Comma-separated `coords` attribute value.
    pub fn coords_string(&self, mapper: &CoordinateMapper) -> String {
        self.output_coords(mapper)
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Generate the `<area>` tag for this hotspot.
    pub fn area_tag(&self, mapper: &CoordinateMapper) -> String {
        let href = if self.url.is_empty() {
            "#".to_string()
        } else {
            escape_attr(&self.url)
        };

        let mut tag = format!(
            "<area shape=\"{}\" coords=\"{}\" href=\"{}\" alt=\"{}\"",
            self.shape_token(),
            self.coords_string(mapper),
            href,
            escape_attr(&self.alt_text)
        );

        if !self.title.is_empty() {
            tag.push_str(&format!(" title=\"{}\"", escape_attr(&self.title)));
        }

        tag.push('>');
        tag
    }

    /// Label for hotspot lists, e.g. `Rect - Home page`.
    pub fn display_label(&self) -> String {
        let text = if !self.title.is_empty() {
            self.title.as_str()
        } else if !self.url.is_empty() {
            self.url.as_str()
        } else {
            label::NO_LINK
        };

        let text = if text.chars().count() > label::MAX_LEN {
            let head: String = text.chars().take(label::TRUNCATED_LEN).collect();
            format!("{head}...")
        } else {
            text.to_string()
        };

        format!("{} - {}", self.kind().short_name(), text)
    }
}
