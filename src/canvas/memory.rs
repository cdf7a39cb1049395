//! In-process reference implementation of [`DrawSurface`].
//!
//! Backs the engine in tests and headless runs. Geometry is deliberately
//! simple: paths are their recorded points, shapes are axis-aligned bounding
//! boxes at fixed default positions. Hit-testing works against that geometry
//! with a tolerance derived from the stroke width.

use std::collections::HashMap;

use super::color::Color;
use super::object::{ObjectId, ShapeKind};
use super::surface::{DrawSurface, LineCap, StrokeStyle};

/// Minimum hit-test tolerance in surface units.
const BASE_HIT_TOLERANCE: f64 = 4.0;

/// Where inserted primitives land, matching the product's fixed spawn point.
const SHAPE_ORIGIN: (f64, f64) = (100.0, 100.0);
const SHAPE_SIZE: (f64, f64) = (120.0, 80.0);

#[derive(Debug, Clone)]
enum Geometry {
    /// Freehand path: the raw pointer samples.
    Path(Vec<(f64, f64)>),
    /// Primitive shape: axis-aligned bounds `(x, y, w, h)`.
    Shape(ShapeKind, (f64, f64, f64, f64)),
}

#[derive(Debug, Clone)]
struct ObjectRecord {
    geometry: Geometry,
    style: StrokeStyle,
    opacity: f64,
    selectable: bool,
    attached: bool,
}

/// Vector surface holding objects in plain memory.
pub struct MemorySurface {
    records: HashMap<ObjectId, ObjectRecord>,
    order: Vec<ObjectId>,
    next_id: u64,
    free_draw: Option<StrokeStyle>,
    selection_enabled: bool,
    render_count: u64,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
            free_draw: None,
            selection_enabled: true,
            render_count: 0,
        }
    }

    fn allocate(&mut self, geometry: Geometry, style: StrokeStyle) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.records.insert(
            id,
            ObjectRecord {
                geometry,
                style,
                opacity: 1.0,
                selectable: true,
                attached: true,
            },
        );
        self.order.push(id);
        id
    }

    /// Number of repaint requests received, observable in tests.
    pub fn renders(&self) -> u64 {
        self.render_count
    }

    /// Currently configured free-draw style, if enabled.
    pub fn free_draw_style(&self) -> Option<StrokeStyle> {
        self.free_draw
    }

    /// Whether native selection is currently enabled.
    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }
}

impl DrawSurface for MemorySurface {
    fn objects(&self) -> Vec<ObjectId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.records.get(id).is_some_and(|r| r.attached))
            .collect()
    }

    fn opacity(&self, id: ObjectId) -> Option<f64> {
        self.records.get(&id).map(|r| r.opacity)
    }

    fn set_opacity(&mut self, id: ObjectId, opacity: f64) {
        if let Some(record) = self.records.get_mut(&id) {
            record.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    fn set_selectable(&mut self, id: ObjectId, selectable: bool) {
        if let Some(record) = self.records.get_mut(&id) {
            record.selectable = selectable;
        }
    }

    fn is_selectable(&self, id: ObjectId) -> bool {
        self.records.get(&id).is_some_and(|r| r.selectable)
    }

    fn hit_test(&self, id: ObjectId, x: f64, y: f64) -> bool {
        let Some(record) = self.records.get(&id) else {
            return false;
        };
        if !record.attached {
            return false;
        }

        match &record.geometry {
            Geometry::Path(points) => {
                let tolerance = (record.style.width / 2.0).max(BASE_HIT_TOLERANCE);
                points.iter().any(|&(px, py)| {
                    let dx = px - x;
                    let dy = py - y;
                    (dx * dx + dy * dy).sqrt() <= tolerance
                })
            }
            Geometry::Shape(_, (sx, sy, w, h)) => {
                x >= *sx && x <= sx + w && y >= *sy && y <= sy + h
            }
        }
    }

    fn detach(&mut self, id: ObjectId) {
        if let Some(record) = self.records.get_mut(&id) {
            record.attached = false;
        } else {
            log::debug!("detach of unknown {id} ignored");
        }
    }

    fn restore(&mut self, id: ObjectId) {
        if let Some(record) = self.records.get_mut(&id) {
            record.attached = true;
        } else {
            log::debug!("restore of unknown {id} ignored");
        }
    }

    fn insert_shape(&mut self, shape: ShapeKind) -> ObjectId {
        let (x, y) = SHAPE_ORIGIN;
        let (w, h) = SHAPE_SIZE;
        let style = self.free_draw.unwrap_or(StrokeStyle {
            color: Color::new(0.0, 0.0, 0.0, 1.0),
            width: 2.0,
            cap: LineCap::Round,
        });
        let id = self.allocate(Geometry::Shape(shape, (x, y, w, h)), style);
        log::debug!("inserted {} as {id}", shape.name());
        id
    }

    fn add_path(&mut self, points: &[(f64, f64)]) -> Option<ObjectId> {
        let style = self.free_draw?;
        if points.is_empty() {
            return None;
        }
        Some(self.allocate(Geometry::Path(points.to_vec()), style))
    }

    fn set_free_draw(&mut self, style: Option<StrokeStyle>) {
        self.free_draw = style;
    }

    fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
    }

    fn request_render(&mut self) {
        self.render_count += 1;
    }
}
