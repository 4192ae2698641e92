//! Editor-space to export-space coordinate mapping.
//!
//! With screen-standard mode enabled, coordinates are re-expressed as if the
//! image were displayed at 1920×1080. The two axes scale independently.

use crate::constants::screen::{STANDARD_HEIGHT, STANDARD_WIDTH};
use crate::model::{Point, Polygon, Rect};

/// Maps scene coordinates to the coordinates written to exported markup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateMapper {
    screen_standard: bool,
    image_size: Option<(u32, u32)>,
}

impl CoordinateMapper {
    pub fn new(screen_standard: bool, image_size: Option<(u32, u32)>) -> Self {
        Self {
            screen_standard,
            image_size,
        }
    }

    /// A mapper that leaves every coordinate unchanged.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn is_screen_standard(&self) -> bool {
        self.screen_standard
    }

    pub fn set_screen_standard(&mut self, enabled: bool) {
        self.screen_standard = enabled;
    }

    pub fn image_size(&self) -> Option<(u32, u32)> {
        self.image_size
    }

    pub fn set_image_size(&mut self, size: Option<(u32, u32)>) {
        self.image_size = size;
    }

    /// Per-axis scale factors `(sx, sy)`.
    ///
    /// `(1.0, 1.0)` when the mode is off or the image size is unknown or zero.
    pub fn scale(&self) -> (f64, f64) {
        if !self.screen_standard {
            return (1.0, 1.0);
        }
        match self.image_size {
            Some((w, h)) if w > 0 && h > 0 => (
                f64::from(STANDARD_WIDTH) / f64::from(w),
                f64::from(STANDARD_HEIGHT) / f64::from(h),
            ),
            _ => (1.0, 1.0),
        }
    }

    pub fn map_point(&self, point: Point) -> Point {
        let (sx, sy) = self.scale();
        Point::new(point.x * sx, point.y * sy)
    }

    pub fn map_rect(&self, rect: Rect) -> Rect {
        let (sx, sy) = self.scale();
        Rect::new(rect.x * sx, rect.y * sy, rect.width * sx, rect.height * sy)
    }

    /// Scale a radius by the horizontal factor only.
    pub fn map_radius(&self, radius: f64) -> f64 {
        let (sx, _) = self.scale();
        radius * sx
    }

    pub fn map_polygon(&self, polygon: &Polygon) -> Polygon {
        Polygon {
            vertices: polygon.vertices.iter().map(|p| self.map_point(*p)).collect(),
            closed: polygon.closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::closed_from(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ])
    }

    #[test]
    fn test_disabled_is_identity() {
        let mapper = CoordinateMapper::new(false, Some((960, 540)));
        let p = Point::new(12.5, 7.25);
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(mapper.map_point(p), p);
        assert_eq!(mapper.map_rect(r), r);
        assert_eq!(mapper.map_radius(9.5), 9.5);
        assert_eq!(mapper.map_polygon(&square()), square());
    }

    #[test]
    fn test_screen_standard_scales_per_axis() {
        let mapper = CoordinateMapper::new(true, Some((960, 270)));
        assert_eq!(mapper.scale(), (2.0, 4.0));

        assert_eq!(mapper.map_point(Point::new(10.0, 10.0)), Point::new(20.0, 40.0));
        assert_eq!(
            mapper.map_rect(Rect::new(10.0, 10.0, 5.0, 5.0)),
            Rect::new(20.0, 40.0, 10.0, 20.0)
        );
        // Radius follows the x factor
        assert_eq!(mapper.map_radius(10.0), 20.0);

        let mapped = mapper.map_polygon(&square());
        assert_eq!(mapped.vertices[2], Point::new(20.0, 40.0));
        assert!(mapped.closed);
    }

    #[test]
    fn test_unknown_or_zero_size_is_identity() {
        let unknown = CoordinateMapper::new(true, None);
        assert_eq!(unknown.scale(), (1.0, 1.0));

        let zero = CoordinateMapper::new(true, Some((0, 1080)));
        assert_eq!(zero.scale(), (1.0, 1.0));
        assert_eq!(zero.map_point(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_native_standard_size_is_identity() {
        let mapper = CoordinateMapper::new(true, Some((1920, 1080)));
        assert_eq!(mapper.scale(), (1.0, 1.0));
    }
}
