//! Core geometry types.
//!
//! All values are in editor (image-pixel) space unless stated otherwise.

use serde::{Deserialize, Serialize};

/// A 2D point in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Offset this point by a translation.
    pub fn offset(&self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a normalized rectangle spanning two corner points.
    ///
    /// Width and height are never negative, whichever way the corners are given.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let x = p1.x.min(p2.x);
        let y = p1.y.min(p2.y);
        let width = (p1.x - p2.x).abs();
        let height = (p1.y - p2.y).abs();
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle (edges included).
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Shift the rectangle by a translation.
    pub fn translated(&self, by: Point) -> Rect {
        Rect::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }
}

/// A polygon defined by a sequence of vertices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    /// The vertices in insertion order.
    pub vertices: Vec<Point>,
    /// Whether drawing has finished (last vertex connects to first).
    pub closed: bool,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an already closed polygon from its vertices.
    pub fn closed_from(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            closed: true,
        }
    }

    pub fn push(&mut self, point: Point) {
        self.vertices.push(point);
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Tight bounds of the vertices, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.vertices.first()?;

        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;

        for p in &self.vertices[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Check if a point is inside the polygon (even-odd ray casting).
    ///
    /// Open polygons never contain anything.
    pub fn contains(&self, point: &Point) -> bool {
        if !self.closed || self.vertices.len() < 3 {
            return false;
        }

        let mut inside = false;
        let n = self.vertices.len();

        let mut j = n - 1;
        for i in 0..n {
            let vi = &self.vertices[i];
            let vj = &self.vertices[j];

            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance_to(&p2) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_rect_from_corners() {
        let rect = Rect::from_corners(Point::new(10.0, 20.0), Point::new(50.0, 80.0));
        assert_eq!(rect, Rect::new(10.0, 20.0, 40.0, 60.0));

        // Reversed corners give the same rect
        let reversed = Rect::from_corners(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        assert_eq!(rect, reversed);

        // Mixed diagonal
        let mixed = Rect::from_corners(Point::new(50.0, 20.0), Point::new(10.0, 80.0));
        assert_eq!(rect, mixed);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert!(rect.contains(&Point::new(50.0, 50.0)));
        assert!(rect.contains(&Point::new(10.0, 10.0))); // Edge
        assert!(rect.contains(&Point::new(110.0, 110.0))); // Far edge
        assert!(!rect.contains(&Point::new(5.0, 50.0)));
    }

    #[test]
    fn test_rect_padded() {
        let rect = Rect::new(10.0, 10.0, 20.0, 30.0).padded(4.0);
        assert_eq!(rect, Rect::new(6.0, 6.0, 28.0, 38.0));
    }

    #[test]
    fn test_polygon_contains() {
        let poly = Polygon::closed_from(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ]);

        assert!(poly.contains(&Point::new(50.0, 50.0)));
        assert!(!poly.contains(&Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_open_polygon_contains_nothing() {
        let mut poly = Polygon::new();
        poly.push(Point::new(0.0, 0.0));
        poly.push(Point::new(100.0, 0.0));
        poly.push(Point::new(100.0, 100.0));

        assert!(!poly.contains(&Point::new(90.0, 10.0)));
        poly.close();
        assert!(poly.contains(&Point::new(90.0, 10.0)));
    }

    #[test]
    fn test_polygon_bounds() {
        assert_eq!(Polygon::new().bounds(), None);

        let poly = Polygon::closed_from(vec![
            Point::new(10.0, 40.0),
            Point::new(30.0, 5.0),
            Point::new(50.0, 20.0),
        ]);
        assert_eq!(poly.bounds(), Some(Rect::new(10.0, 5.0, 40.0, 35.0)));
    }
}
