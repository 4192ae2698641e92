//! Warnings and summaries produced while loading projects.

use std::path::PathBuf;

/// Severity level for format warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    /// Informational message, not a problem.
    Info,
    /// Something was skipped or replaced with a default.
    Warning,
    /// Data was lost.
    Error,
}

/// What a warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The project's image could not be opened.
    ImageNotFound,
    /// A hotspot entry was dropped.
    SkippedHotspot,
    /// A field had the wrong type and its default was used.
    MalformedField,
}

/// Warning generated during project loading.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatWarning {
    pub kind: WarningKind,

    /// Human-readable warning message.
    pub message: String,

    pub severity: WarningSeverity,

    /// Path of the image this warning relates to (if applicable).
    pub image_path: Option<PathBuf>,
}

impl FormatWarning {
    /// Create a new warning.
    pub fn new(kind: WarningKind, message: impl Into<String>, severity: WarningSeverity) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
            image_path: None,
        }
    }

    /// The project's image could not be opened; hotspots still load.
    pub fn image_not_found(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        let path = path.into();
        Self {
            kind: WarningKind::ImageNotFound,
            message: format!("Could not load image {}: {}", path.display(), reason),
            severity: WarningSeverity::Warning,
            image_path: Some(path),
        }
    }

    /// A hotspot entry at `index` was dropped.
    pub fn skipped_hotspot(index: usize, reason: impl std::fmt::Display) -> Self {
        Self::new(
            WarningKind::SkippedHotspot,
            format!("Skipped hotspot #{}: {}", index, reason),
            WarningSeverity::Error,
        )
    }

    /// A field was malformed and defaulted.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(WarningKind::MalformedField, message, WarningSeverity::Warning)
    }
}

/// Summary of a project load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Image path recorded in the project (may be stale).
    pub image_path: String,

    pub map_name: String,

    /// Number of hotspots added to the store.
    pub hotspots_loaded: usize,

    /// Native dimensions of the image, if it could be opened.
    pub image_dimensions: Option<(u32, u32)>,

    pub warnings: Vec<FormatWarning>,
}

impl LoadReport {
    pub fn add_warning(&mut self, warning: FormatWarning) {
        self.warnings.push(warning);
    }

    /// Check if there were any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if any warning of the given kind was recorded.
    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }

    /// Check if there were any errors (severe warnings).
    pub fn has_errors(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w.severity, WarningSeverity::Error))
    }
}
