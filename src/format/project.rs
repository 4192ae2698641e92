//! Project file (`.imap`) data structures.
//!
//! A project is a JSON object recording the image path, the map name and
//! every hotspot with its kind, geometry, translation and link fields:
//!
//! ```json
//! {
//!   "imagePath": "/home/user/photo.png",
//!   "mapName": "imagemap",
//!   "hotspots": [
//!     { "shape": 0, "url": "/a", "alt": "", "title": "", "posX": 0.0, "posY": 0.0,
//!       "x": 10.0, "y": 10.0, "width": 50.0, "height": 30.0 }
//!   ]
//! }
//! ```
//!
//! Writing goes through serde. Reading is done by hand over
//! [`serde_json::Value`] so that a wrong or missing field falls back to its
//! default instead of rejecting the whole file.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::export::DEFAULT_MAP_NAME;
use crate::format::error::FormatError;
use crate::format::report::FormatWarning;
use crate::model::{Hotspot, HotspotShape, Point, Polygon, Rect, ShapeKind};

/// Numeric shape tag stored in the `shape` field.
pub fn shape_tag(kind: ShapeKind) -> u8 {
    match kind {
        ShapeKind::Rectangle => 0,
        ShapeKind::Circle => 1,
        ShapeKind::Polygon => 2,
    }
}

/// Inverse of [`shape_tag`].
pub fn kind_from_tag(tag: i64) -> Option<ShapeKind> {
    match tag {
        0 => Some(ShapeKind::Rectangle),
        1 => Some(ShapeKind::Circle),
        2 => Some(ShapeKind::Polygon),
        _ => None,
    }
}

/// Persisted form of a whole project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub image_path: String,
    pub map_name: String,
    pub hotspots: Vec<HotspotEntry>,
}

/// Persisted form of one hotspot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotEntry {
    pub shape: u8,
    pub url: String,
    pub alt: String,
    pub title: String,
    #[serde(rename = "posX")]
    pub pos_x: f64,
    #[serde(rename = "posY")]
    pub pos_y: f64,
    #[serde(flatten)]
    pub geometry: GeometryEntry,
}

/// Shape-specific fields, flattened into the hotspot object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeometryEntry {
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        #[serde(rename = "centerX")]
        center_x: f64,
        #[serde(rename = "centerY")]
        center_y: f64,
        radius: f64,
    },
    Polygon {
        points: Vec<PointEntry>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointEntry {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PointEntry {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<&Hotspot> for HotspotEntry {
    fn from(hotspot: &Hotspot) -> Self {
        let geometry = match hotspot.shape() {
            HotspotShape::Rectangle(rect) => GeometryEntry::Rectangle {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            },
            HotspotShape::Circle { center, radius } => GeometryEntry::Circle {
                center_x: center.x,
                center_y: center.y,
                radius: *radius,
            },
            HotspotShape::Polygon(poly) => GeometryEntry::Polygon {
                points: poly.vertices.iter().copied().map(PointEntry::from).collect(),
            },
        };

        Self {
            shape: shape_tag(hotspot.kind()),
            url: hotspot.url.clone(),
            alt: hotspot.alt_text.clone(),
            title: hotspot.title.clone(),
            pos_x: hotspot.translation.x,
            pos_y: hotspot.translation.y,
            geometry,
        }
    }
}

impl HotspotEntry {
    /// Build a hotspot with a fresh id. Polygons come back closed.
    pub fn to_hotspot(&self) -> Hotspot {
        let hotspot = match &self.geometry {
            GeometryEntry::Rectangle {
                x,
                y,
                width,
                height,
            } => Hotspot::rectangle(Rect::new(*x, *y, *width, *height)),
            GeometryEntry::Circle {
                center_x,
                center_y,
                radius,
            } => Hotspot::circle(Point::new(*center_x, *center_y), radius.max(0.0)),
            GeometryEntry::Polygon { points } => Hotspot::polygon(Polygon::closed_from(
                points.iter().map(|p| Point::new(p.x, p.y)).collect(),
            )),
        };

        hotspot
            .with_link(self.url.clone(), self.alt.clone(), self.title.clone())
            .with_translation(Point::new(self.pos_x, self.pos_y))
    }

    /// Parse one hotspot object, defaulting missing or mistyped fields.
    ///
    /// Fails only when the value is not an object or the shape tag is
    /// unknown.
    fn from_value(value: &Value, warnings: &mut Vec<FormatWarning>) -> Result<Self, String> {
        let obj = value
            .as_object()
            .ok_or_else(|| "entry is not a JSON object".to_string())?;

        let tag = match obj.get("shape") {
            None => 0,
            Some(v) => integer(v).ok_or_else(|| format!("shape tag {} is not an integer", v))?,
        };
        let kind = kind_from_tag(tag).ok_or_else(|| format!("unknown shape tag {}", tag))?;

        let mut fields = FieldReader { obj, warnings };
        let geometry = match kind {
            ShapeKind::Rectangle => GeometryEntry::Rectangle {
                x: fields.number("x"),
                y: fields.number("y"),
                width: fields.number("width"),
                height: fields.number("height"),
            },
            ShapeKind::Circle => GeometryEntry::Circle {
                center_x: fields.number("centerX"),
                center_y: fields.number("centerY"),
                radius: fields.number("radius"),
            },
            ShapeKind::Polygon => GeometryEntry::Polygon {
                points: fields.points("points"),
            },
        };

        Ok(Self {
            shape: shape_tag(kind),
            url: fields.string("url"),
            alt: fields.string("alt"),
            title: fields.string("title"),
            pos_x: fields.number("posX"),
            pos_y: fields.number("posY"),
            geometry,
        })
    }
}

impl ProjectFile {
    /// Snapshot hotspots into a project.
    pub fn new<'a>(
        image_path: impl Into<String>,
        map_name: impl Into<String>,
        hotspots: impl IntoIterator<Item = &'a Hotspot>,
    ) -> Self {
        Self {
            image_path: image_path.into(),
            map_name: map_name.into(),
            hotspots: hotspots.into_iter().map(HotspotEntry::from).collect(),
        }
    }

    /// Serialize as indented JSON.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, FormatError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Parse project bytes.
    ///
    /// Invalid JSON or a non-object document is an error. Everything else is
    /// tolerated: bad hotspot entries are skipped and bad fields defaulted,
    /// each reported in the returned warnings.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<(Self, Vec<FormatWarning>), FormatError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<(Self, Vec<FormatWarning>), FormatError> {
        let obj = value
            .as_object()
            .ok_or_else(|| FormatError::invalid_format("project root is not a JSON object"))?;

        let mut warnings = Vec::new();
        let (image_path, map_name) = {
            let mut fields = FieldReader {
                obj,
                warnings: &mut warnings,
            };
            let image_path = fields.string("imagePath");
            let map_name = fields
                .optional_string("mapName")
                .unwrap_or_else(|| DEFAULT_MAP_NAME.to_string());
            (image_path, map_name)
        };

        let entries: &[Value] = match obj.get("hotspots") {
            None => &[],
            Some(Value::Array(items)) => items,
            Some(other) => {
                warnings.push(FormatWarning::malformed(format!(
                    "\"hotspots\" is {}, expected an array",
                    type_name(other)
                )));
                &[]
            }
        };

        let mut hotspots = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match HotspotEntry::from_value(entry, &mut warnings) {
                Ok(hotspot) => hotspots.push(hotspot),
                Err(reason) => {
                    log::warn!("Skipping hotspot #{}: {}", index, reason);
                    warnings.push(FormatWarning::skipped_hotspot(index, reason));
                }
            }
        }

        Ok((
            Self {
                image_path,
                map_name,
                hotspots,
            },
            warnings,
        ))
    }

    /// Rebuild every hotspot, in file order.
    pub fn to_hotspots(&self) -> Vec<Hotspot> {
        self.hotspots.iter().map(HotspotEntry::to_hotspot).collect()
    }
}

/// Typed lookups on a JSON object that record a warning and return the
/// default on a type mismatch.
struct FieldReader<'a> {
    obj: &'a Map<String, Value>,
    warnings: &'a mut Vec<FormatWarning>,
}

impl FieldReader<'_> {
    fn number(&mut self, key: &str) -> f64 {
        let obj = self.obj;
        match obj.get(key) {
            None | Some(Value::Null) => 0.0,
            Some(v) => v.as_f64().unwrap_or_else(|| {
                self.mismatch(key, v, "a number");
                0.0
            }),
        }
    }

    fn string(&mut self, key: &str) -> String {
        self.optional_string(key).unwrap_or_default()
    }

    fn optional_string(&mut self, key: &str) -> Option<String> {
        let obj = self.obj;
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(v) => {
                self.mismatch(key, v, "a string");
                None
            }
        }
    }

    fn points(&mut self, key: &str) -> Vec<PointEntry> {
        let obj = self.obj;
        let items = match obj.get(key) {
            None | Some(Value::Null) => return Vec::new(),
            Some(Value::Array(items)) => items,
            Some(v) => {
                self.mismatch(key, v, "an array");
                return Vec::new();
            }
        };

        items
            .iter()
            .map(|item| {
                let coord = |name: &str| item.get(name).and_then(Value::as_f64).unwrap_or(0.0);
                PointEntry {
                    x: coord("x"),
                    y: coord("y"),
                }
            })
            .collect()
    }

    fn mismatch(&mut self, key: &str, value: &Value, expected: &str) {
        log::warn!("Field \"{}\" is {}, using default", key, type_name(value));
        self.warnings.push(FormatWarning::malformed(format!(
            "\"{}\" is {}, expected {}; using default",
            key,
            type_name(value),
            expected
        )));
    }
}

/// An integer value, also accepting floats with no fractional part.
fn integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
