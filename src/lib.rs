//! imagemap - HTML image-map hotspot editor engine
//!
//! Draw rectangular, circular and polygonal hotspots over an image and
//! export them as `<map>`/`<area>` HTML or a reloadable `.imap` project.
//! Rendering is left to the presentation layer, which feeds
//! [`InputEvent`]s into an [`Editor`] and listens for changes.

pub mod config;
pub mod constants;
pub mod coords;
pub mod drawing;
pub mod editor;
pub mod format;
pub mod image_info;
pub mod input;
pub mod keybindings;
pub mod model;
pub mod notify;
pub mod store;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use coords::CoordinateMapper;
pub use drawing::{DrawOutcome, DrawingController, DrawingState};
pub use editor::{Editor, EditorEvent};
pub use format::{FormatError, FormatWarning, LoadReport, ProjectFile};
pub use input::{InputEvent, Key, MouseButton};
pub use keybindings::KeyBindings;
pub use model::{EditorTool, Hotspot, HotspotId, HotspotShape, Point, Polygon, Rect, ShapeKind};
pub use store::{HotspotStore, StoreEvent};
