//! Top-level overlay engine.
//!
//! `OverlayEngine` wires the mode controller, the annotation history, the
//! drawing surface, and the collaborator bridges together, and is the single
//! entry point the shell drives: pointer/keyboard events in, capture and
//! hide requests out.
//!
//! The surface is optional until the shell attaches one; every operation
//! that needs it degrades to a logged no-op before that point.

use std::path::PathBuf;

use crate::bridge::capture::{
    CaptureRequest, CaptureService, SaveOutcome, expand_tilde, generate_filename,
};
use crate::canvas::{DrawSurface, ObjectId, ShapeKind};
use crate::config::Config;
use crate::history::AnnotationHistory;
use crate::input::{Brush, ModeController, ModeKind, PointerButton};

/// Inbound requests from the shell (global hotkeys, tray, toolbar buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Undo the most recent canvas mutation.
    Undo,
    /// Redo the most recently undone mutation.
    Redo,
    /// Capture the overlay and prompt for a save location.
    Save,
    /// Hide the overlay window.
    HideOverlay,
}

/// One overlay session: mode state, history, surface, and bridges.
pub struct OverlayEngine {
    surface: Option<Box<dyn DrawSurface>>,
    history: AnnotationHistory,
    controller: ModeController,
    capture: Option<CaptureService>,
    save_directory: Option<PathBuf>,
    chrome_hidden: bool,
    hide_requested: bool,
}

impl OverlayEngine {
    pub fn new(brush: Brush) -> Self {
        Self {
            surface: None,
            history: AnnotationHistory::new(),
            controller: ModeController::new(brush),
            capture: None,
            save_directory: None,
            chrome_hidden: false,
            hide_requested: false,
        }
    }

    /// Builds an engine from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut engine = Self::new(config.initial_brush());
        engine.save_directory = config
            .capture
            .save_directory
            .as_deref()
            .map(expand_tilde);
        engine
    }

    /// Attaches the drawing surface and configures it for the active mode.
    pub fn attach_surface(&mut self, mut surface: Box<dyn DrawSurface>) {
        let kind = self.controller.mode_kind();
        self.controller.set_mode(kind, surface.as_mut());
        self.surface = Some(surface);
    }

    /// Connects the capture collaborator.
    pub fn set_capture_service(&mut self, service: CaptureService) {
        self.capture = Some(service);
    }

    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    pub fn history(&self) -> &AnnotationHistory {
        &self.history
    }

    /// Direct surface access for the shell (object creation callbacks).
    pub fn surface_mut(&mut self) -> Option<&mut (dyn DrawSurface + 'static)> {
        self.surface.as_deref_mut()
    }

    /// Whether the toolbar chrome is currently hidden for a capture.
    pub fn chrome_hidden(&self) -> bool {
        self.chrome_hidden
    }

    /// Takes the pending hide-overlay request, if any.
    pub fn take_hide_request(&mut self) -> bool {
        std::mem::take(&mut self.hide_requested)
    }

    // ------------------------------------------------------------------
    // Toolbar commands
    // ------------------------------------------------------------------

    pub fn set_mode(&mut self, kind: ModeKind) {
        let Some(surface) = self.surface.as_deref_mut() else {
            log::debug!("mode change before surface attach ignored");
            return;
        };
        self.controller.set_mode(kind, surface);
    }

    pub fn set_mode_by_name(&mut self, name: &str) {
        let Some(surface) = self.surface.as_deref_mut() else {
            log::debug!("mode change before surface attach ignored");
            return;
        };
        self.controller.set_mode_by_name(name, surface);
    }

    pub fn set_brush_color_hex(&mut self, hex: &str) -> bool {
        let Some(surface) = self.surface.as_deref_mut() else {
            log::debug!("color change before surface attach ignored");
            return false;
        };
        self.controller.set_brush_color_hex(hex, surface)
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        let Some(surface) = self.surface.as_deref_mut() else {
            log::debug!("width change before surface attach ignored");
            return;
        };
        self.controller.set_stroke_width(width, surface);
    }

    pub fn insert_shape(&mut self, shape: ShapeKind) -> Option<ObjectId> {
        let Some(surface) = self.surface.as_deref_mut() else {
            log::debug!("shape insert before surface attach ignored");
            return None;
        };
        self.controller.insert_shape(shape, surface, &mut self.history)
    }

    pub fn clear(&mut self) {
        let Some(surface) = self.surface.as_deref_mut() else {
            log::debug!("clear before surface attach ignored");
            return;
        };
        self.controller.clear(surface, &mut self.history);
    }

    // ------------------------------------------------------------------
    // Surface events
    // ------------------------------------------------------------------

    /// The surface finalized a freehand path.
    pub fn notify_path_created(&mut self, id: ObjectId) {
        self.controller.path_created(id, &mut self.history);
    }

    pub fn pointer_down(&mut self, button: PointerButton, x: f64, y: f64) {
        if button != PointerButton::Left {
            return;
        }
        let Some(surface) = self.surface.as_deref_mut() else {
            return;
        };
        self.controller.pointer_down(x, y, surface);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let Some(surface) = self.surface.as_deref_mut() else {
            return;
        };
        self.controller.pointer_moved(x, y, surface);
    }

    pub fn pointer_released(&mut self, button: PointerButton) {
        if button != PointerButton::Left {
            return;
        }
        let Some(surface) = self.surface.as_deref_mut() else {
            return;
        };
        self.controller.pointer_released(surface, &mut self.history);
    }

    // ------------------------------------------------------------------
    // Shell signals
    // ------------------------------------------------------------------

    pub fn handle_signal(&mut self, signal: Signal) {
        match signal {
            Signal::Undo => {
                let Some(surface) = self.surface.as_deref_mut() else {
                    return;
                };
                self.history.undo(surface);
            }
            Signal::Redo => {
                let Some(surface) = self.surface.as_deref_mut() else {
                    return;
                };
                self.history.redo(surface);
            }
            Signal::Save => self.request_save(),
            Signal::HideOverlay => {
                if let Some(surface) = self.surface.as_deref_mut() {
                    self.controller.cancel_gesture(surface);
                }
                self.hide_requested = true;
            }
        }
    }

    /// Hides toolbar chrome and queues a capture-and-save round trip.
    pub fn request_save(&mut self) {
        let Some(capture) = &self.capture else {
            log::warn!("save requested but no capture service is connected");
            return;
        };

        let request = match &self.save_directory {
            Some(dir) => CaptureRequest {
                suggested_path: dir.join(generate_filename()),
            },
            None => CaptureRequest::default(),
        };

        // Chrome goes down before the request so the toolbar never ends up
        // in the captured image.
        self.chrome_hidden = true;
        if let Err(err) = capture.request(request) {
            log::error!("capture request failed: {err}");
            self.chrome_hidden = false;
        }
    }

    /// Drains the capture outcome mailbox.
    ///
    /// Chrome is restored on every outcome, success or not.
    pub fn poll_capture(&mut self) -> Option<SaveOutcome> {
        let outcome = self.capture.as_ref()?.try_take_outcome()?;
        self.chrome_hidden = false;

        match &outcome {
            SaveOutcome::Saved(path) => log::info!("overlay saved to {}", path.display()),
            SaveOutcome::Cancelled => log::info!("save dialog dismissed"),
            SaveOutcome::Failed(reason) => log::error!("overlay save failed: {reason}"),
        }

        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::capture::{CaptureBackend, CaptureError};
    use crate::canvas::MemorySurface;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    fn engine_with_surface() -> OverlayEngine {
        let mut engine = OverlayEngine::new(Brush::default());
        engine.attach_surface(Box::new(MemorySurface::new()));
        engine
    }

    fn draw_stroke(engine: &mut OverlayEngine, at: (f64, f64)) -> ObjectId {
        let id = engine
            .surface_mut()
            .unwrap()
            .add_path(&[at])
            .expect("free draw enabled");
        engine.notify_path_created(id);
        id
    }

    #[test]
    fn operations_without_surface_are_noops() {
        let mut engine = OverlayEngine::new(Brush::default());
        engine.set_mode(ModeKind::Eraser);
        engine.set_stroke_width(10.0);
        engine.clear();
        engine.pointer_down(PointerButton::Left, 0.0, 0.0);
        engine.pointer_released(PointerButton::Left);
        engine.handle_signal(Signal::Undo);
        engine.handle_signal(Signal::Redo);
        assert!(!engine.set_brush_color_hex("#FF0000"));
        assert!(engine.insert_shape(ShapeKind::Circle).is_none());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn undo_redo_signals_drive_history() {
        let mut engine = engine_with_surface();
        let id = draw_stroke(&mut engine, (5.0, 5.0));

        engine.handle_signal(Signal::Undo);
        assert!(engine.surface_mut().unwrap().objects().is_empty());

        engine.handle_signal(Signal::Redo);
        assert_eq!(engine.surface_mut().unwrap().objects(), vec![id]);
    }

    #[test]
    fn right_button_does_not_erase() {
        let mut engine = engine_with_surface();
        let id = draw_stroke(&mut engine, (5.0, 5.0));

        engine.set_mode(ModeKind::Eraser);
        engine.pointer_down(PointerButton::Right, 5.0, 5.0);
        engine.pointer_released(PointerButton::Right);

        assert_eq!(engine.surface_mut().unwrap().objects(), vec![id]);
    }

    #[test]
    fn hide_signal_cancels_open_gesture() {
        let mut engine = engine_with_surface();
        let id = draw_stroke(&mut engine, (5.0, 5.0));

        engine.set_mode(ModeKind::Eraser);
        engine.pointer_down(PointerButton::Left, 5.0, 5.0);
        engine.handle_signal(Signal::HideOverlay);

        assert!(engine.take_hide_request());
        assert!(!engine.take_hide_request()); // drained
        let surface = engine.surface_mut().unwrap();
        assert_eq!(surface.objects(), vec![id]);
        assert_eq!(surface.opacity(id), Some(1.0));
    }

    #[test]
    fn save_without_capture_service_keeps_chrome() {
        let mut engine = engine_with_surface();
        engine.handle_signal(Signal::Save);
        assert!(!engine.chrome_hidden());
    }

    struct StubBackend(Result<PathBuf, ()>);

    #[async_trait]
    impl CaptureBackend for StubBackend {
        async fn capture_and_save(
            &self,
            _request: &CaptureRequest,
        ) -> Result<PathBuf, CaptureError> {
            match &self.0 {
                Ok(path) => Ok(path.clone()),
                Err(()) => Err(CaptureError::Cancelled("dialog dismissed".into())),
            }
        }
    }

    async fn poll_until_outcome(engine: &mut OverlayEngine) -> SaveOutcome {
        for _ in 0..100 {
            if let Some(outcome) = engine.poll_capture() {
                return outcome;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("no capture outcome arrived");
    }

    #[tokio::test]
    async fn chrome_hides_for_capture_and_restores_on_success() {
        let mut engine = engine_with_surface();
        let backend = Arc::new(StubBackend(Ok(PathBuf::from("/tmp/pineshot.png"))));
        engine.set_capture_service(CaptureService::new(
            &tokio::runtime::Handle::current(),
            backend,
        ));

        engine.handle_signal(Signal::Save);
        assert!(engine.chrome_hidden());

        let outcome = poll_until_outcome(&mut engine).await;
        assert_eq!(outcome, SaveOutcome::Saved(PathBuf::from("/tmp/pineshot.png")));
        assert!(!engine.chrome_hidden());
    }

    #[tokio::test]
    async fn chrome_restores_even_when_save_is_cancelled() {
        let mut engine = engine_with_surface();
        let backend = Arc::new(StubBackend(Err(())));
        engine.set_capture_service(CaptureService::new(
            &tokio::runtime::Handle::current(),
            backend,
        ));

        engine.handle_signal(Signal::Save);
        assert!(engine.chrome_hidden());

        let outcome = poll_until_outcome(&mut engine).await;
        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert!(!engine.chrome_hidden());
    }
}
