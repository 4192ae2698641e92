//! Editor facade.
//!
//! [`Editor`] is what a presentation layer talks to. It owns the hotspot
//! store, the drawing controller and the coordinate mapper, routes
//! [`InputEvent`]s between them and reports editor-level changes through
//! [`EditorEvent`]s. Store changes are reported separately through
//! [`HotspotStore::subscribe`].

use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::constants::export::DEFAULT_MAP_NAME;
use crate::coords::CoordinateMapper;
use crate::drawing::{DrawOutcome, DrawingController};
use crate::format::{FormatError, FormatWarning, LoadReport, ProjectFile, html};
use crate::image_info;
use crate::input::{InputEvent, Key, MouseButton};
use crate::keybindings::KeyBindings;
use crate::model::{EditorTool, Hotspot, HotspotId, Point, round_coord};
use crate::notify::{ListenerId, Notifier};
use crate::store::HotspotStore;

/// Editor-level notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The current tool changed.
    ToolChanged(EditorTool),
    /// Pointer position for the live readout, in output space.
    CoordinatesChanged(Point),
    /// Clipboard mode click. `text` is what should go on the clipboard.
    CoordinatesCopied { point: Point, text: String },
    /// An image was set or cleared.
    ImageChanged(Option<PathBuf>),
}

/// A Select-tool drag moving one hotspot.
#[derive(Debug, Clone)]
struct MoveDrag {
    id: HotspotId,
    last: Point,
}

/// The hotspot editing engine.
#[derive(Debug)]
pub struct Editor {
    store: HotspotStore,
    drawing: DrawingController,
    mapper: CoordinateMapper,
    image_path: Option<PathBuf>,
    map_name: String,
    clipboard_mode: bool,
    keybindings: KeyBindings,
    drag: Option<MoveDrag>,
    notifier: Notifier<EditorEvent>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            store: HotspotStore::new(),
            drawing: DrawingController::new(),
            mapper: CoordinateMapper::default(),
            image_path: None,
            map_name: DEFAULT_MAP_NAME.to_string(),
            clipboard_mode: false,
            keybindings: KeyBindings::default(),
            drag: None,
            notifier: Notifier::new(),
        }
    }

    /// Create an editor with the user's saved preferences.
    pub fn from_config(config: &AppConfig) -> Self {
        let prefs = &config.preferences;
        let mut editor = Self::new();
        editor.map_name = prefs.default_map_name.clone();
        editor.clipboard_mode = prefs.clipboard_mode;
        editor.mapper.set_screen_standard(prefs.screen_standard_mode);
        editor.keybindings = config.keybindings.to_keybindings();
        editor
    }

    /// Register an editor event listener.
    pub fn subscribe<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&EditorEvent) + 'static,
    {
        self.notifier.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn store(&self) -> &HotspotStore {
        &self.store
    }

    /// Mutable store access, e.g. for editing link fields or subscribing.
    pub fn store_mut(&mut self) -> &mut HotspotStore {
        &mut self.store
    }

    pub fn drawing(&self) -> &DrawingController {
        &self.drawing
    }

    /// The shape being drawn, for preview rendering.
    pub fn preview(&self) -> Option<&Hotspot> {
        self.drawing.preview()
    }

    pub fn tool(&self) -> EditorTool {
        self.drawing.tool()
    }

    /// Switch tools. Any in-progress shape is discarded.
    pub fn set_tool(&mut self, tool: EditorTool) {
        self.drag = None;
        self.drawing.set_tool(tool);
        self.notifier.emit(&EditorEvent::ToolChanged(tool));
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    pub fn set_keybindings(&mut self, keybindings: KeyBindings) {
        self.keybindings = keybindings;
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn is_screen_standard(&self) -> bool {
        self.mapper.is_screen_standard()
    }

    /// Toggle scaling of exported coordinates to 1920x1080.
    pub fn set_screen_standard(&mut self, enabled: bool) {
        self.mapper.set_screen_standard(enabled);
        log::debug!("Screen standard mode: {}", enabled);
    }

    pub fn clipboard_mode(&self) -> bool {
        self.clipboard_mode
    }

    /// Toggle clipboard mode. While enabled, left clicks report coordinates
    /// and never draw or select.
    pub fn set_clipboard_mode(&mut self, enabled: bool) {
        if enabled {
            self.drawing.cancel();
            self.drag = None;
        }
        self.clipboard_mode = enabled;
        log::debug!("Clipboard mode: {}", enabled);
    }

    pub fn map_name(&self) -> &str {
        &self.map_name
    }

    pub fn set_map_name(&mut self, name: impl Into<String>) {
        self.map_name = name.into();
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    pub fn image_dimensions(&self) -> Option<(u32, u32)> {
        self.mapper.image_size()
    }

    pub fn has_image(&self) -> bool {
        self.image_path.is_some()
    }

    /// Set the loaded image and its native pixel dimensions.
    ///
    /// Hotspots are kept.
    pub fn set_image(&mut self, path: impl Into<PathBuf>, dimensions: (u32, u32)) {
        let path = path.into();
        log::info!(
            "🖼️  Image {:?} ({}x{})",
            path,
            dimensions.0,
            dimensions.1
        );
        self.mapper.set_image_size(Some(dimensions));
        self.image_path = Some(path.clone());
        self.notifier.emit(&EditorEvent::ImageChanged(Some(path)));
    }

    /// Forget the loaded image.
    pub fn clear_image(&mut self) {
        self.mapper.set_image_size(None);
        if self.image_path.take().is_some() {
            self.notifier.emit(&EditorEvent::ImageChanged(None));
        }
    }

    /// Read an image's dimensions from disk and make it the loaded image.
    pub fn open_image(&mut self, path: impl AsRef<Path>) -> Result<(u32, u32), FormatError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FormatError::image_not_found(path));
        }
        let dimensions = image_info::read_dimensions(path)?;
        self.set_image(path, dimensions);
        Ok(dimensions)
    }

    /// Process one input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { button, position } => self.pointer_down(button, position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { button, position } => {
                if button == MouseButton::Left {
                    self.drag = None;
                    self.drawing.pointer_up(position, &mut self.store);
                }
            }
            InputEvent::DoubleClick { .. } => {
                self.drawing.secondary_commit(&mut self.store);
            }
            InputEvent::KeyPressed { key } => self.key_pressed(key),
        }
    }

    fn pointer_down(&mut self, button: MouseButton, position: Point) {
        let mapped = self.report_coordinates(position);

        match button {
            MouseButton::Left if self.clipboard_mode => {
                let text = format!("{},{}", round_coord(mapped.x), round_coord(mapped.y));
                log::debug!("📋 Copied coordinates {}", text);
                self.notifier.emit(&EditorEvent::CoordinatesCopied {
                    point: mapped,
                    text,
                });
            }
            MouseButton::Left if self.tool() == EditorTool::Select => {
                let hit = self.store.hit_test(&position).cloned();
                self.store.select(hit.as_ref());
                self.drag = hit.map(|id| MoveDrag { id, last: position });
            }
            MouseButton::Left => {
                self.drawing.pointer_down(position);
            }
            MouseButton::Right => {
                self.drawing.secondary_commit(&mut self.store);
            }
            MouseButton::Middle => {}
        }
    }

    fn pointer_move(&mut self, position: Point) {
        self.report_coordinates(position);

        if let Some(drag) = &mut self.drag {
            let (dx, dy) = (position.x - drag.last.x, position.y - drag.last.y);
            drag.last = position;
            if !self.store.translate(&drag.id, dx, dy) {
                // Hotspot went away mid-drag
                self.drag = None;
            }
        } else {
            self.drawing.pointer_move(position);
        }
    }

    fn key_pressed(&mut self, key: Key) {
        match key {
            Key::Delete | Key::Backspace => {
                if let Some(hotspot) = self.store.delete_selected() {
                    self.drag = None;
                    log::info!("🗑️  Deleted {} hotspot {}", hotspot.kind().name(), hotspot.id());
                }
            }
            Key::Escape => {
                if self.drawing.cancel() == DrawOutcome::Ignored {
                    self.store.select(None);
                }
            }
            Key::Enter => {
                self.drawing.secondary_commit(&mut self.store);
            }
            Key::Char(_) => {
                if let Some(tool) = self.keybindings.tool_for_key(key) {
                    self.set_tool(tool);
                }
            }
        }
    }

    fn report_coordinates(&mut self, position: Point) -> Point {
        let mapped = self.mapper.map_point(position);
        self.notifier.emit(&EditorEvent::CoordinatesChanged(mapped));
        mapped
    }

    /// Image-map HTML fragment, or `None` if there is nothing to export.
    pub fn to_html(&self) -> Option<String> {
        html::image_map(
            self.image_path.as_deref(),
            &self.map_name,
            self.store.as_slice(),
            &self.mapper,
        )
    }

    /// Standalone HTML page, or `None` if there is nothing to export.
    pub fn html_document(&self) -> Option<String> {
        self.to_html().map(|fragment| html::document(&fragment))
    }

    /// Write the HTML export to `path`.
    pub fn export_html_file(
        &self,
        path: impl AsRef<Path>,
        full_document: bool,
    ) -> Result<(), FormatError> {
        let path = path.as_ref();
        let html = if full_document {
            self.html_document()
        } else {
            self.to_html()
        }
        .ok_or(FormatError::NothingToExport)?;

        std::fs::write(path, html)?;
        log::info!(
            "Exported {} hotspots to {:?}",
            self.store.len(),
            path
        );
        Ok(())
    }

    /// Snapshot the current document.
    pub fn to_project(&self) -> ProjectFile {
        let image_path = self
            .image_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        ProjectFile::new(image_path, self.map_name.clone(), self.store.iter())
    }

    /// Serialize the current document as project JSON.
    pub fn save_project(&self) -> Result<Vec<u8>, FormatError> {
        self.to_project().to_json_bytes()
    }

    pub fn save_project_file(&self, path: impl AsRef<Path>) -> Result<(), FormatError> {
        let path = path.as_ref();
        std::fs::write(path, self.save_project()?)?;
        log::info!("💾 Saved project with {} hotspots to {:?}", self.store.len(), path);
        Ok(())
    }

    /// Replace the document with a project read from `bytes`.
    ///
    /// The recorded image path is used as-is.
    pub fn load_project(&mut self, bytes: &[u8]) -> Result<LoadReport, FormatError> {
        self.load_project_in(bytes, None)
    }

    /// Load a project file. A relative image path is resolved against the
    /// project file's directory.
    pub fn load_project_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, FormatError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        log::info!("Loading project from {:?}", path);
        self.load_project_in(&bytes, path.parent())
    }

    fn load_project_in(
        &mut self,
        bytes: &[u8],
        base_dir: Option<&Path>,
    ) -> Result<LoadReport, FormatError> {
        // Nothing changes unless the document parses
        let (project, warnings) = ProjectFile::from_json_bytes(bytes)?;

        self.drawing.cancel();
        self.drag = None;

        let mut report = LoadReport {
            image_path: project.image_path.clone(),
            map_name: project.map_name.clone(),
            warnings,
            ..LoadReport::default()
        };

        if !project.image_path.is_empty() {
            let recorded = PathBuf::from(&project.image_path);
            let resolved = match base_dir {
                Some(dir) if recorded.is_relative() => dir.join(&recorded),
                _ => recorded,
            };

            match image_info::read_dimensions(&resolved) {
                Ok(dimensions) => {
                    self.set_image(resolved, dimensions);
                    report.image_dimensions = Some(dimensions);
                }
                Err(e) => {
                    log::warn!("Could not load project image {:?}: {}", resolved, e);
                    self.clear_image();
                    report.add_warning(FormatWarning::image_not_found(resolved, e));
                }
            }
        }

        self.map_name = project.map_name.clone();

        self.store.clear();
        for hotspot in project.to_hotspots() {
            self.store.add(hotspot);
        }
        report.hotspots_loaded = self.store.len();

        log::info!(
            "✅ Loaded project: {} hotspots, {} warnings",
            report.hotspots_loaded,
            report.warnings.len()
        );
        Ok(report)
    }
}
