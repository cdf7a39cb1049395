//! Mode controller: the single authority for what a pointer gesture does.

use crate::canvas::{Color, DrawSurface, ObjectId, ShapeKind};
use crate::history::{AnnotationHistory, CanvasAction};

use super::brush::{Brush, clamp_width};
use super::mode::{Mode, ModeKind};
use crate::eraser::EraserSession;

/// Owns the active [`Mode`] and the brush configuration, and keeps the
/// drawing surface's behavior consistent across mode switches.
///
/// The controller never touches the history stacks directly; it records
/// through the injected [`AnnotationHistory`] like every other component.
pub struct ModeController {
    mode: Mode,
    brush: Brush,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(Brush::default())
    }
}

impl ModeController {
    /// Creates a controller in the initial free-draw mode.
    ///
    /// The surface is configured on the first `set_mode` call; constructing
    /// the controller has no side effects.
    pub fn new(brush: Brush) -> Self {
        Self {
            mode: Mode::Free,
            brush,
        }
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Switches the active interaction mode.
    ///
    /// Tear-down of the outgoing mode happens before anything of the new
    /// mode is installed, so no input event can ever be seen by two modes:
    /// an eraser gesture still open at switch time is aborted (previewed
    /// objects restored, nothing recorded).
    pub fn set_mode(&mut self, kind: ModeKind, surface: &mut dyn DrawSurface) {
        if let Mode::Eraser(session) = &mut self.mode {
            session.abort(surface);
        }

        // Baseline the surface; each arm overrides what its mode needs.
        surface.set_free_draw(None);
        surface.set_selection_enabled(true);

        self.mode = match kind {
            ModeKind::Select => Mode::Select,
            ModeKind::Free => {
                surface.set_free_draw(Some(self.brush.free_style()));
                Mode::Free
            }
            ModeKind::Highlight => {
                surface.set_free_draw(Some(self.brush.highlight_style()));
                Mode::Highlight
            }
            ModeKind::Eraser => {
                surface.set_selection_enabled(false);
                Mode::Eraser(EraserSession::new())
            }
            ModeKind::Shape => Mode::Shape,
        };

        log::debug!("mode switched to {}", kind.name());
    }

    /// Switches mode by toolbar option id; unknown names are logged and
    /// ignored rather than corrupting the active mode.
    pub fn set_mode_by_name(&mut self, name: &str, surface: &mut dyn DrawSurface) {
        match ModeKind::from_name(name) {
            Some(kind) => self.set_mode(kind, surface),
            None => log::warn!("ignoring unknown draw mode '{name}'"),
        }
    }

    /// Updates the brush's base color.
    ///
    /// While highlight mode is active the stroke color the surface sees is
    /// re-derived from the new base color at the fixed highlighter alpha,
    /// never carried over from the previous derivation.
    pub fn set_brush_color(&mut self, color: Color, surface: &mut dyn DrawSurface) {
        self.brush.color = color;
        self.reapply_stroke_style(surface);
    }

    /// Updates the brush color from a toolbar hex string.
    ///
    /// A malformed string is a local validation failure: logged, the last
    /// good color stays active, and `false` is returned for the indicator.
    pub fn set_brush_color_hex(&mut self, hex: &str, surface: &mut dyn DrawSurface) -> bool {
        match Color::from_hex(hex) {
            Ok(color) => {
                self.set_brush_color(color, surface);
                true
            }
            Err(err) => {
                log::warn!("rejecting brush color '{hex}': {err}");
                false
            }
        }
    }

    /// Updates the stroke width, clamped to the sane positive range.
    ///
    /// Modes without a stroke width concept keep their surface behavior
    /// untouched; the stored width still updates so the next stroke mode
    /// picks it up.
    pub fn set_stroke_width(&mut self, width: f64, surface: &mut dyn DrawSurface) {
        self.brush.width = clamp_width(width);
        self.reapply_stroke_style(surface);
    }

    fn reapply_stroke_style(&self, surface: &mut dyn DrawSurface) {
        match self.mode {
            Mode::Free => surface.set_free_draw(Some(self.brush.free_style())),
            Mode::Highlight => surface.set_free_draw(Some(self.brush.highlight_style())),
            _ => {}
        }
    }

    /// Records one `Add` for a freehand path the surface just finalized.
    pub fn path_created(&mut self, id: ObjectId, history: &mut AnnotationHistory) {
        history.record(CanvasAction::add(id));
    }

    /// Inserts a primitive at the surface's default position and records it.
    ///
    /// Only meaningful in shape-insert mode; requests from other modes are
    /// logged and ignored.
    pub fn insert_shape(
        &mut self,
        shape: ShapeKind,
        surface: &mut dyn DrawSurface,
        history: &mut AnnotationHistory,
    ) -> Option<ObjectId> {
        if !matches!(self.mode, Mode::Shape) {
            log::warn!(
                "ignoring {} insert outside shape mode (active: {})",
                shape.name(),
                self.mode.kind().name()
            );
            return None;
        }

        let id = surface.insert_shape(shape);
        history.record(CanvasAction::add(id));
        Some(id)
    }

    /// Removes every live object, recorded as one undoable step so a single
    /// undo restores the entire canvas.
    pub fn clear(&mut self, surface: &mut dyn DrawSurface, history: &mut AnnotationHistory) {
        let live = surface.objects();
        if live.is_empty() {
            return;
        }

        history.record_group(live.iter().map(|&id| CanvasAction::remove(id)).collect());
        for id in &live {
            surface.detach(*id);
        }
        surface.request_render();
        log::debug!("cleared {} object(s)", live.len());
    }

    /// Pointer-down dispatch; only the eraser installs gesture handlers.
    pub fn pointer_down(&mut self, x: f64, y: f64, surface: &mut dyn DrawSurface) {
        if let Mode::Eraser(session) = &mut self.mode {
            session.begin();
            session.probe(surface, x, y);
        }
    }

    /// Pointer-move dispatch while a gesture may be open.
    pub fn pointer_moved(&mut self, x: f64, y: f64, surface: &mut dyn DrawSurface) {
        if let Mode::Eraser(session) = &mut self.mode {
            session.probe(surface, x, y);
        }
    }

    /// Abandons any open gesture without committing it.
    ///
    /// Used when the overlay hides mid-drag: previewed objects get their
    /// opacity back and nothing is recorded.
    pub fn cancel_gesture(&mut self, surface: &mut dyn DrawSurface) {
        if let Mode::Eraser(session) = &mut self.mode {
            session.abort(surface);
        }
    }

    /// Pointer-up dispatch: commits an open eraser gesture.
    pub fn pointer_released(
        &mut self,
        surface: &mut dyn DrawSurface,
        history: &mut AnnotationHistory,
    ) {
        if let Mode::Eraser(session) = &mut self.mode {
            session.commit(surface, history);
        }
    }
}
