//! Object identity and primitive shape kinds.

use std::fmt;

/// Opaque handle to a single drawable object owned by the drawing surface.
///
/// The engine never inspects object geometry; it tracks identity (this id)
/// and the object's opacity attribute, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// Primitive shapes the shape-insert mode can place on the canvas.
///
/// Geometry (default position, default size) is the surface's business;
/// the engine only names the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeKind {
    /// Human-readable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }
}
