//! Pointer-driven drawing state machine.
//!
//! The controller owns the hotspot being drawn. It only reaches the
//! [`HotspotStore`] on commit, when the finished hotspot is moved into the
//! store and selected. Shapes below the size thresholds are dropped without
//! an error.

use std::mem;

use crate::constants::{drawing, threshold};
use crate::model::{EditorTool, Hotspot, HotspotId, HotspotShape, Point, Polygon, Rect};
use crate::store::HotspotStore;

/// State for the shape currently being drawn.
#[derive(Debug, Clone, Default)]
pub enum DrawingState {
    /// Not currently drawing anything.
    #[default]
    Idle,
    /// Dragging out a rectangle from `anchor`.
    Rectangle { anchor: Point, hotspot: Hotspot },
    /// Dragging out a circle centered on `anchor`.
    Circle { anchor: Point, hotspot: Hotspot },
    /// Clicking polygon vertices (at least one placed).
    Polygon { hotspot: Hotspot },
}

impl DrawingState {
    /// Check if we're currently drawing something.
    pub fn is_drawing(&self) -> bool {
        !matches!(self, DrawingState::Idle)
    }

    /// The in-progress hotspot, for preview rendering.
    pub fn hotspot(&self) -> Option<&Hotspot> {
        match self {
            DrawingState::Idle => None,
            DrawingState::Rectangle { hotspot, .. }
            | DrawingState::Circle { hotspot, .. }
            | DrawingState::Polygon { hotspot } => Some(hotspot),
        }
    }

    /// Number of polygon vertices placed so far (0 outside polygon drawing).
    pub fn vertex_count(&self) -> usize {
        match self {
            DrawingState::Polygon { hotspot } => match hotspot.shape() {
                HotspotShape::Polygon(poly) => poly.len(),
                _ => 0,
            },
            _ => 0,
        }
    }
}

/// What a drawing call did.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    /// The event does not apply to the current tool or state.
    Ignored,
    /// A new shape was started.
    Started,
    /// The in-progress shape changed.
    Updated,
    /// The shape was added to the store and selected.
    Committed(HotspotId),
    /// The shape was too small and was dropped.
    Discarded,
    /// Drawing was cancelled and the shape dropped.
    Cancelled,
}

/// Turns pointer events into committed hotspots.
///
/// Also holds the current tool; nothing else keeps a copy of it.
#[derive(Debug, Clone, Default)]
pub struct DrawingController {
    tool: EditorTool,
    state: DrawingState,
}

impl DrawingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> EditorTool {
        self.tool
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// The hotspot being drawn, if any.
    pub fn preview(&self) -> Option<&Hotspot> {
        self.state.hotspot()
    }

    /// Switch tools, cancelling any in-progress shape first.
    pub fn set_tool(&mut self, tool: EditorTool) {
        if self.state.is_drawing() {
            self.cancel();
        }
        self.tool = tool;
        log::debug!("Tool: {}", tool.name());
    }

    /// Primary button pressed at `position`.
    pub fn pointer_down(&mut self, position: Point) -> DrawOutcome {
        if let DrawingState::Polygon { hotspot } = &mut self.state {
            if self.tool != EditorTool::Polygon {
                return DrawOutcome::Ignored;
            }
            hotspot.push_vertex(position);
            log::debug!(
                "Added polygon point at ({:.1}, {:.1}), total: {}",
                position.x,
                position.y,
                self.state.vertex_count()
            );
            return DrawOutcome::Updated;
        }
        if self.state.is_drawing() {
            return DrawOutcome::Ignored;
        }

        let (state, name) = match self.tool {
            EditorTool::Select => return DrawOutcome::Ignored,
            EditorTool::Rectangle => {
                let rect = Rect::new(
                    position.x,
                    position.y,
                    drawing::INITIAL_RECT_SIZE,
                    drawing::INITIAL_RECT_SIZE,
                );
                let hotspot = Hotspot::rectangle(rect);
                (DrawingState::Rectangle { anchor: position, hotspot }, "rectangle")
            }
            EditorTool::Circle => {
                let hotspot = Hotspot::circle(position, drawing::INITIAL_CIRCLE_RADIUS);
                (DrawingState::Circle { anchor: position, hotspot }, "circle")
            }
            EditorTool::Polygon => {
                let mut poly = Polygon::new();
                poly.push(position);
                let hotspot = Hotspot::polygon(poly);
                (DrawingState::Polygon { hotspot }, "polygon")
            }
        };

        self.state = state;
        log::debug!("Started {} at ({:.1}, {:.1})", name, position.x, position.y);
        DrawOutcome::Started
    }

    /// Pointer moved to `position`.
    ///
    /// Polygons ignore movement; only clicks place vertices.
    pub fn pointer_move(&mut self, position: Point) -> DrawOutcome {
        match &mut self.state {
            DrawingState::Rectangle { anchor, hotspot } => {
                hotspot.set_rect(Rect::from_corners(*anchor, position));
                DrawOutcome::Updated
            }
            DrawingState::Circle { anchor, hotspot } => {
                hotspot.set_radius(anchor.distance_to(&position));
                DrawOutcome::Updated
            }
            DrawingState::Polygon { .. } | DrawingState::Idle => DrawOutcome::Ignored,
        }
    }

    /// Primary button released at `position`.
    ///
    /// Finishes rectangles and circles; polygons keep going.
    pub fn pointer_up(&mut self, position: Point, store: &mut HotspotStore) -> DrawOutcome {
        match self.state {
            DrawingState::Rectangle { .. } | DrawingState::Circle { .. } => {
                self.pointer_move(position);
                self.finish(store)
            }
            DrawingState::Polygon { .. } | DrawingState::Idle => DrawOutcome::Ignored,
        }
    }

    /// Right-click, double-click or Enter: finish a polygon.
    pub fn secondary_commit(&mut self, store: &mut HotspotStore) -> DrawOutcome {
        match self.state {
            DrawingState::Polygon { .. } => self.finish(store),
            _ => DrawOutcome::Ignored,
        }
    }

    /// Drop the in-progress shape.
    pub fn cancel(&mut self) -> DrawOutcome {
        if mem::take(&mut self.state).is_drawing() {
            log::debug!("Drawing cancelled");
            DrawOutcome::Cancelled
        } else {
            DrawOutcome::Ignored
        }
    }

    /// Commit the in-progress shape if it passes its size threshold.
    pub fn finish(&mut self, store: &mut HotspotStore) -> DrawOutcome {
        let mut hotspot = match mem::take(&mut self.state) {
            DrawingState::Idle => return DrawOutcome::Ignored,
            DrawingState::Rectangle { hotspot, .. }
            | DrawingState::Circle { hotspot, .. }
            | DrawingState::Polygon { hotspot } => hotspot,
        };

        if !meets_commit_threshold(hotspot.shape()) {
            log::debug!("Discarded {} below minimum size", hotspot.kind().name());
            return DrawOutcome::Discarded;
        }

        hotspot.close_polygon();
        let kind = hotspot.kind();
        let id = store.add(hotspot);
        store.select(Some(&id));
        log::info!("Created {} hotspot {}", kind.name(), id);
        DrawOutcome::Committed(id)
    }
}

/// Whether a shape is large enough to be committed.
pub fn meets_commit_threshold(shape: &HotspotShape) -> bool {
    match shape {
        HotspotShape::Rectangle(rect) => {
            rect.width > threshold::MIN_RECT_SIZE && rect.height > threshold::MIN_RECT_SIZE
        }
        HotspotShape::Circle { radius, .. } => *radius > threshold::MIN_CIRCLE_RADIUS,
        HotspotShape::Polygon(poly) => poly.len() >= threshold::MIN_POLYGON_VERTICES,
    }
}
