//! Undo/redo log over canvas mutations.
//!
//! Every user-visible reversible mutation records exactly one [`CanvasAction`]
//! at the moment it becomes visible: strokes on creation, objects on
//! programmatic removal. Actions are grouped into steps; most steps hold a
//! single action, but canvas-wide operations (clear) record one step covering
//! every object so a single undo restores the whole canvas.
//!
//! There is no global history instance. The engine constructs one
//! [`AnnotationHistory`] per overlay session and passes it to whichever
//! component needs to record, undo, or redo.

use crate::canvas::{DrawSurface, ObjectId};

/// Direction of a recorded mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// The object became visible (stroke finalized, shape inserted, ...).
    Add,
    /// The object was removed from the surface.
    Remove,
}

/// One reversible mutation of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasAction {
    pub kind: ActionKind,
    pub object: ObjectId,
}

impl CanvasAction {
    pub fn add(object: ObjectId) -> Self {
        Self {
            kind: ActionKind::Add,
            object,
        }
    }

    pub fn remove(object: ObjectId) -> Self {
        Self {
            kind: ActionKind::Remove,
            object,
        }
    }
}

/// Append-only undo/redo log with standard semantics.
///
/// Both stacks hold *steps* (groups of actions applied together),
/// most-recent-last. Recording anything clears the redo stack.
#[derive(Debug, Default)]
pub struct AnnotationHistory {
    undo_stack: Vec<Vec<CanvasAction>>,
    redo_stack: Vec<Vec<CanvasAction>>,
}

impl AnnotationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single-action step. O(1).
    pub fn record(&mut self, action: CanvasAction) {
        self.record_group(vec![action]);
    }

    /// Records a multi-action step applied as one unit (used by clear).
    ///
    /// Empty groups are ignored so a clear of an already-empty canvas does
    /// not produce a no-op undo step.
    pub fn record_group(&mut self, actions: Vec<CanvasAction>) {
        if actions.is_empty() {
            return;
        }
        self.undo_stack.push(actions);
        self.redo_stack.clear();
    }

    /// Undoes the most recent step by applying each action's structural
    /// inverse in reverse order, then moves the step to the redo stack.
    ///
    /// Returns `false` when there is nothing to undo (terminal condition,
    /// not an error).
    pub fn undo(&mut self, surface: &mut dyn DrawSurface) -> bool {
        let Some(step) = self.undo_stack.pop() else {
            return false;
        };

        for action in step.iter().rev() {
            match action.kind {
                ActionKind::Add => surface.detach(action.object),
                ActionKind::Remove => Self::reattach(surface, action.object),
            }
        }

        self.redo_stack.push(step);
        true
    }

    /// Redoes the most recently undone step, applying actions in their
    /// original direction and order, and moves it back to the undo stack.
    pub fn redo(&mut self, surface: &mut dyn DrawSurface) -> bool {
        let Some(step) = self.redo_stack.pop() else {
            return false;
        };

        for action in step.iter() {
            match action.kind {
                ActionKind::Add => Self::reattach(surface, action.object),
                ActionKind::Remove => surface.detach(action.object),
            }
        }

        self.undo_stack.push(step);
        true
    }

    // An object coming back onto the surface must be interactive again:
    // eraser preview locks selectability before removal.
    fn reattach(surface: &mut dyn DrawSurface, id: ObjectId) {
        surface.restore(id);
        surface.set_selectable(id, true);
    }

    /// Number of undoable steps.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redoable steps.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty() && self.redo_stack.is_empty()
    }
}
