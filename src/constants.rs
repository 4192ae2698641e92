//! Global constants for the image map editor.
//!
//! Thresholds, paddings and defaults shared by the drawing controller,
//! the hotspot model and the serializers.

/// Minimum sizes a shape must exceed to be committed.
pub mod threshold {
    /// Rectangles need both width and height strictly above this.
    pub const MIN_RECT_SIZE: f64 = 5.0;
    /// Circles need a radius strictly above this.
    pub const MIN_CIRCLE_RADIUS: f64 = 5.0;
    /// Minimum number of vertices for a committed polygon.
    pub const MIN_POLYGON_VERTICES: usize = 3;
}

/// Geometry defaults for newly started shapes.
pub mod drawing {
    /// Side length of the rectangle created on the first pointer press.
    pub const INITIAL_RECT_SIZE: f64 = 1.0;
    /// Radius of the circle created on the first pointer press.
    pub const INITIAL_CIRCLE_RADIUS: f64 = 1.0;
    /// Margin added on every side of a hotspot's bounding box.
    pub const HOTSPOT_PADDING: f64 = 4.0;
}

/// Reference resolution used by screen-standard mode.
pub mod screen {
    pub const STANDARD_WIDTH: u32 = 1920;
    pub const STANDARD_HEIGHT: u32 = 1080;
}

/// Export and project defaults.
pub mod export {
    /// Map name used when none is configured or the project omits it.
    pub const DEFAULT_MAP_NAME: &str = "imagemap";
    /// Image file name used when the loaded image has no file name.
    pub const FALLBACK_IMAGE_NAME: &str = "image.png";
    /// `alt` text of the generated `<img>` element.
    pub const IMAGE_ALT: &str = "Image Map";
    /// Extension of project files.
    pub const PROJECT_EXTENSION: &str = "imap";
    /// Number of hex characters kept from a UUID for hotspot ids.
    pub const HOTSPOT_ID_LEN: usize = 8;
}

/// Hotspot list labels.
pub mod label {
    /// Labels longer than this are truncated.
    pub const MAX_LEN: usize = 25;
    /// Characters kept before the ellipsis when truncating.
    pub const TRUNCATED_LEN: usize = 23;
    /// Label text for hotspots with neither title nor URL.
    pub const NO_LINK: &str = "(no link)";
}
