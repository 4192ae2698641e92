//! Project persistence and HTML export.
//!
//! - **HTML**: `<img>` + `<map>`/`<area>` fragment, optionally wrapped in a
//!   full page ([`html::document`]).
//! - **Project JSON** (`.imap`): reloadable editor state, read leniently.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use imagemap::format::{html, ProjectFile};
//!
//! let (project, warnings) = ProjectFile::from_json_bytes(&bytes)?;
//! let hotspots = project.to_hotspots();
//! let fragment = html::image_map(Some(path), &project.map_name, &hotspots, &mapper);
//! ```

mod error;
pub mod html;
mod project;
mod report;

#[cfg(test)]
mod tests;

pub use error::FormatError;
pub use project::{
    GeometryEntry, HotspotEntry, PointEntry, ProjectFile, kind_from_tag, shape_tag,
};
pub use report::{FormatWarning, LoadReport, WarningKind, WarningSeverity};
