//! Drag-based eraser session.
//!
//! One session spans a single gesture: pointer-down opens a batch,
//! pointer-moves probe the surface and dim everything the pointer touches,
//! pointer-up commits the batch as removals. Tearing the session down
//! mid-gesture restores the preview and records nothing.

use crate::canvas::{DrawSurface, ObjectId};
use crate::history::{AnnotationHistory, CanvasAction};

/// Opacity applied to touched objects while the gesture is still open.
pub const PREVIEW_OPACITY: f64 = 0.3;

/// One touched object and the opacity it had before the preview dimmed it.
#[derive(Debug, Clone, Copy)]
struct BatchEntry {
    object: ObjectId,
    original_opacity: f64,
}

/// Per-gesture hit-testing state machine for the eraser tool.
#[derive(Debug, Default)]
pub struct EraserSession {
    batch: Vec<BatchEntry>,
    erasing: bool,
}

impl EraserSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new batch on pointer-down.
    pub fn begin(&mut self) {
        self.batch.clear();
        self.erasing = true;
    }

    /// Whether a gesture is currently open.
    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    /// Number of objects currently marked for removal.
    pub fn batch_len(&self) -> usize {
        self.batch.len()
    }

    /// Probes the pointer position against every live object.
    ///
    /// Newly intersected objects join the batch with their pre-preview
    /// opacity and are dimmed. Objects already in the batch are skipped, so
    /// crossing the same stroke twice neither duplicates the removal nor
    /// double-applies the preview. No-op unless a gesture is open.
    pub fn probe(&mut self, surface: &mut dyn DrawSurface, x: f64, y: f64) {
        if !self.erasing {
            return;
        }

        let mut touched = false;
        for id in surface.objects() {
            if self.batch.iter().any(|entry| entry.object == id) {
                continue;
            }
            if !surface.hit_test(id, x, y) {
                continue;
            }

            let original_opacity = surface.opacity(id).unwrap_or(1.0);
            self.batch.push(BatchEntry {
                object: id,
                original_opacity,
            });
            surface.set_opacity(id, PREVIEW_OPACITY);
            touched = true;
        }

        if touched {
            surface.request_render();
        }
    }

    /// Commits the batch on pointer-up.
    ///
    /// Per entry: restore the original opacity, lock selectability, record
    /// the removal, then detach the object. The opacity restore happens
    /// before the record so the history only ever sees the pre-removal
    /// visual state; a later redo re-adds the object at full strength, not
    /// at the dimmed preview value.
    ///
    /// Returns the number of objects removed.
    pub fn commit(
        &mut self,
        surface: &mut dyn DrawSurface,
        history: &mut AnnotationHistory,
    ) -> usize {
        let removed = self.batch.len();

        for entry in self.batch.drain(..) {
            surface.set_opacity(entry.object, entry.original_opacity);
            surface.set_selectable(entry.object, false);
            history.record(CanvasAction::remove(entry.object));
            surface.detach(entry.object);
        }

        self.erasing = false;
        if removed > 0 {
            log::debug!("eraser committed {removed} removal(s)");
            surface.request_render();
        }
        removed
    }

    /// Abandons the gesture without removing or recording anything.
    ///
    /// Called when the eraser mode is torn down mid-gesture; every dimmed
    /// object gets its opacity back.
    pub fn abort(&mut self, surface: &mut dyn DrawSurface) {
        let dangling = self.batch.len();

        for entry in self.batch.drain(..) {
            surface.set_opacity(entry.object, entry.original_opacity);
        }

        self.erasing = false;
        if dangling > 0 {
            log::debug!("eraser aborted with {dangling} previewed object(s) restored");
            surface.request_render();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Color, LineCap, MemorySurface, StrokeStyle};

    fn surface_with_stroke_at(x: f64, y: f64) -> (MemorySurface, ObjectId) {
        let mut surface = MemorySurface::new();
        surface.set_free_draw(Some(StrokeStyle {
            color: Color::new(1.0, 0.0, 0.0, 1.0),
            width: 5.0,
            cap: LineCap::Round,
        }));
        let id = surface.add_path(&[(x, y)]).unwrap();
        surface.set_free_draw(None);
        (surface, id)
    }

    #[test]
    fn probe_dims_touched_objects() {
        let (mut surface, id) = surface_with_stroke_at(10.0, 10.0);
        let mut session = EraserSession::new();

        session.begin();
        session.probe(&mut surface, 10.0, 10.0);

        assert_eq!(session.batch_len(), 1);
        assert_eq!(surface.opacity(id), Some(PREVIEW_OPACITY));
    }

    #[test]
    fn probe_without_begin_is_noop() {
        let (mut surface, id) = surface_with_stroke_at(10.0, 10.0);
        let mut session = EraserSession::new();

        session.probe(&mut surface, 10.0, 10.0);

        assert_eq!(session.batch_len(), 0);
        assert_eq!(surface.opacity(id), Some(1.0));
    }

    #[test]
    fn double_touch_produces_single_removal() {
        let (mut surface, _id) = surface_with_stroke_at(10.0, 10.0);
        let mut session = EraserSession::new();
        let mut history = AnnotationHistory::new();

        session.begin();
        session.probe(&mut surface, 10.0, 10.0);
        session.probe(&mut surface, 40.0, 40.0); // miss
        session.probe(&mut surface, 11.0, 10.0); // same stroke again

        assert_eq!(session.batch_len(), 1);
        let removed = session.commit(&mut surface, &mut history);
        assert_eq!(removed, 1);
        assert_eq!(history.undo_len(), 1);
        assert!(surface.objects().is_empty());
    }

    #[test]
    fn commit_restores_opacity_before_removal() {
        let (mut surface, id) = surface_with_stroke_at(10.0, 10.0);
        surface.set_opacity(id, 0.8);
        let mut session = EraserSession::new();
        let mut history = AnnotationHistory::new();

        session.begin();
        session.probe(&mut surface, 10.0, 10.0);
        assert_eq!(surface.opacity(id), Some(PREVIEW_OPACITY));

        session.commit(&mut surface, &mut history);

        // The record carries the pre-preview opacity: a redo after undo must
        // bring the object back at 0.8, not at the dimmed value.
        assert_eq!(surface.opacity(id), Some(0.8));
        assert!(!session.is_erasing());
    }

    #[test]
    fn committed_objects_return_selectable_on_undo() {
        let (mut surface, id) = surface_with_stroke_at(10.0, 10.0);
        let mut session = EraserSession::new();
        let mut history = AnnotationHistory::new();

        session.begin();
        session.probe(&mut surface, 10.0, 10.0);
        session.commit(&mut surface, &mut history);
        assert!(!surface.is_selectable(id));

        history.undo(&mut surface);
        assert_eq!(surface.objects(), vec![id]);
        assert!(surface.is_selectable(id));
    }

    #[test]
    fn abort_restores_preview_and_records_nothing() {
        let (mut surface, id) = surface_with_stroke_at(10.0, 10.0);
        let mut session = EraserSession::new();
        let mut history = AnnotationHistory::new();

        session.begin();
        session.probe(&mut surface, 10.0, 10.0);
        session.abort(&mut surface);

        assert_eq!(surface.opacity(id), Some(1.0));
        assert_eq!(surface.objects(), vec![id]);
        assert!(history.is_empty());
        assert!(!session.is_erasing());
        assert_eq!(session.batch_len(), 0);
    }

    #[test]
    fn commit_of_empty_batch_is_noop() {
        let (mut surface, _) = surface_with_stroke_at(10.0, 10.0);
        let mut session = EraserSession::new();
        let mut history = AnnotationHistory::new();

        session.begin();
        let removed = session.commit(&mut surface, &mut history);

        assert_eq!(removed, 0);
        assert!(history.is_empty());
    }
}
