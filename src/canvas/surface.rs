//! The drawing-surface capability boundary.
//!
//! Rendering and geometry live in an external vector-canvas layer; the engine
//! drives it through this trait. The contract is intentionally narrow: object
//! enumeration, opacity and selectability attributes, point hit-testing, and
//! attach/detach of whole objects. Everything else (tessellation, z-order,
//! actual pixels) stays on the other side of the boundary.

use super::color::Color;
use super::object::{ObjectId, ShapeKind};

/// End-cap style for stroked paths.
///
/// Free-draw uses round caps; the highlighter uses square caps for the flat
/// stroke ends characteristic of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
    Square,
}

/// Stroke styling the surface applies to newly drawn freehand paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
}

/// Capability contract for the external drawing surface.
///
/// Removal is modeled as *detach*: the surface drops the object from display
/// but retains its record so a later undo/redo can re-attach it with all
/// attributes intact.
pub trait DrawSurface {
    /// Live (attached) objects in z-order, bottom first.
    fn objects(&self) -> Vec<ObjectId>;

    /// Current opacity of an object, attached or detached.
    fn opacity(&self, id: ObjectId) -> Option<f64>;

    /// Sets an object's opacity (eraser preview dimming and its restore).
    fn set_opacity(&mut self, id: ObjectId, opacity: f64);

    /// Marks an object as selectable/interactive or locked.
    fn set_selectable(&mut self, id: ObjectId, selectable: bool);

    /// Whether an object is currently selectable.
    fn is_selectable(&self, id: ObjectId) -> bool;

    /// Tests a single point against one object's geometry.
    fn hit_test(&self, id: ObjectId, x: f64, y: f64) -> bool;

    /// Removes an object from display, retaining its record.
    fn detach(&mut self, id: ObjectId);

    /// Re-attaches a previously detached object.
    fn restore(&mut self, id: ObjectId);

    /// Inserts a primitive shape at the surface's default position.
    fn insert_shape(&mut self, shape: ShapeKind) -> ObjectId;

    /// Finalizes a freehand path drawn with the current free-draw style.
    ///
    /// Returns `None` when free-draw is disabled; the surface ignores the
    /// gesture in that case.
    fn add_path(&mut self, points: &[(f64, f64)]) -> Option<ObjectId>;

    /// Enables native free-draw with the given stroke style, or disables it.
    fn set_free_draw(&mut self, style: Option<StrokeStyle>);

    /// Enables or disables native object selection/moving.
    fn set_selection_enabled(&mut self, enabled: bool);

    /// Asks the surface to repaint (used after preview-only mutations).
    fn request_render(&mut self);
}
