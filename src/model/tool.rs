//! Editor tool types.

/// Tools available in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorTool {
    /// Select and move existing hotspots
    #[default]
    Select,
    /// Drag out a rectangular hotspot
    Rectangle,
    /// Drag out a circular hotspot from its center
    Circle,
    /// Click vertices, then right-click, double-click or Enter to finish
    Polygon,
}

impl EditorTool {
    /// Get the display name for this tool.
    pub fn name(&self) -> &'static str {
        match self {
            EditorTool::Select => "Select",
            EditorTool::Rectangle => "Rectangle",
            EditorTool::Circle => "Circle",
            EditorTool::Polygon => "Polygon",
        }
    }

    /// One-line usage hint for tool tips and status bars.
    pub fn hint(&self) -> &'static str {
        match self {
            EditorTool::Select => "Select and move hotspots",
            EditorTool::Rectangle => "Draw rectangular hotspot",
            EditorTool::Circle => "Draw circular hotspot",
            EditorTool::Polygon => "Draw polygon hotspot (right-click or double-click to finish)",
        }
    }

    /// Get all available tools.
    pub fn all() -> &'static [EditorTool] {
        &[
            EditorTool::Select,
            EditorTool::Rectangle,
            EditorTool::Circle,
            EditorTool::Polygon,
        ]
    }

    /// Check if this tool is a drawing tool (not Select).
    pub fn is_drawing_tool(&self) -> bool {
        !matches!(self, EditorTool::Select)
    }
}
