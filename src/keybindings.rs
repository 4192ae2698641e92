//! Customizable tool hotkeys.
//!
//! Hotkeys are single characters matched case-insensitively. Persisted
//! through [`crate::config::KeyBindingsConfig`].

use crate::input::Key;
use crate::model::EditorTool;

/// Tool hotkey configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    /// Hotkey for Select tool
    pub tool_select: char,
    /// Hotkey for Rectangle tool
    pub tool_rectangle: char,
    /// Hotkey for Circle tool
    pub tool_circle: char,
    /// Hotkey for Polygon tool
    pub tool_polygon: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            tool_select: 'v',
            tool_rectangle: 'r',
            tool_circle: 'c',
            tool_polygon: 'p',
        }
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tool that corresponds to a key press, if any.
    pub fn tool_for_key(&self, key: Key) -> Option<EditorTool> {
        let Key::Char(c) = key else {
            return None;
        };
        let c = c.to_ascii_lowercase();

        EditorTool::all()
            .iter()
            .copied()
            .find(|tool| self.key_for_tool(*tool).to_ascii_lowercase() == c)
    }

    /// Get the hotkey for a specific tool.
    pub fn key_for_tool(&self, tool: EditorTool) -> char {
        match tool {
            EditorTool::Select => self.tool_select,
            EditorTool::Rectangle => self.tool_rectangle,
            EditorTool::Circle => self.tool_circle,
            EditorTool::Polygon => self.tool_polygon,
        }
    }

    /// Set the hotkey for a tool.
    pub fn set_tool_key(&mut self, tool: EditorTool, key: char) {
        match tool {
            EditorTool::Select => self.tool_select = key,
            EditorTool::Rectangle => self.tool_rectangle = key,
            EditorTool::Circle => self.tool_circle = key,
            EditorTool::Polygon => self.tool_polygon = key,
        }
    }

    /// Check if a key is already bound to another tool.
    /// Returns a description of what it's used for, if anything.
    pub fn key_conflict(&self, key: char, exclude_tool: Option<EditorTool>) -> Option<String> {
        let key = key.to_ascii_lowercase();
        EditorTool::all()
            .iter()
            .filter(|tool| Some(**tool) != exclude_tool)
            .find(|tool| self.key_for_tool(**tool).to_ascii_lowercase() == key)
            .map(|tool| format!("{} tool", tool.name()))
    }
}
