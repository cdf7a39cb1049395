//! End-to-end interaction flows through the public engine API.

use pinemark::canvas::{DrawSurface, MemorySurface, ObjectId, ShapeKind};
use pinemark::engine::{OverlayEngine, Signal};
use pinemark::input::{Brush, ModeKind, PointerButton};

fn engine() -> OverlayEngine {
    let mut engine = OverlayEngine::new(Brush::default());
    engine.attach_surface(Box::new(MemorySurface::new()));
    engine
}

fn draw_stroke(engine: &mut OverlayEngine, at: (f64, f64)) -> ObjectId {
    let id = engine
        .surface_mut()
        .expect("surface attached")
        .add_path(&[at])
        .expect("free draw enabled");
    engine.notify_path_created(id);
    id
}

fn live_objects(engine: &mut OverlayEngine) -> Vec<ObjectId> {
    engine.surface_mut().expect("surface attached").objects()
}

#[test]
fn strokes_undo_in_reverse_order_and_redo_forward() {
    let mut engine = engine();
    let first = draw_stroke(&mut engine, (10.0, 10.0));
    let second = draw_stroke(&mut engine, (50.0, 50.0));
    let third = draw_stroke(&mut engine, (90.0, 90.0));

    engine.handle_signal(Signal::Undo);
    assert_eq!(live_objects(&mut engine), vec![first, second]);

    engine.handle_signal(Signal::Undo);
    assert_eq!(live_objects(&mut engine), vec![first]);

    engine.handle_signal(Signal::Undo);
    assert!(live_objects(&mut engine).is_empty());

    // Extra undos on an empty stack stay silent.
    engine.handle_signal(Signal::Undo);
    assert!(live_objects(&mut engine).is_empty());

    engine.handle_signal(Signal::Redo);
    engine.handle_signal(Signal::Redo);
    engine.handle_signal(Signal::Redo);
    assert_eq!(live_objects(&mut engine), vec![first, second, third]);
}

#[test]
fn new_stroke_after_undo_invalidates_redo() {
    let mut engine = engine();
    draw_stroke(&mut engine, (10.0, 10.0));
    let kept = draw_stroke(&mut engine, (50.0, 50.0));

    engine.handle_signal(Signal::Undo);
    engine.handle_signal(Signal::Undo);
    let replacement = draw_stroke(&mut engine, (30.0, 30.0));

    engine.handle_signal(Signal::Redo);
    let objects = live_objects(&mut engine);
    assert_eq!(objects, vec![replacement]);
    assert!(!objects.contains(&kept));
}

#[test]
fn eraser_drag_removes_everything_it_crossed() {
    let mut engine = engine();
    let left = draw_stroke(&mut engine, (10.0, 10.0));
    let right = draw_stroke(&mut engine, (100.0, 10.0));
    let far = draw_stroke(&mut engine, (300.0, 300.0));

    engine.set_mode(ModeKind::Eraser);
    engine.pointer_down(PointerButton::Left, 10.0, 10.0);
    engine.pointer_moved(55.0, 10.0);
    engine.pointer_moved(100.0, 10.0);
    engine.pointer_released(PointerButton::Left);

    assert_eq!(live_objects(&mut engine), vec![far]);

    // Each erased object is its own undo step.
    engine.handle_signal(Signal::Undo);
    engine.handle_signal(Signal::Undo);
    let mut objects = live_objects(&mut engine);
    objects.sort();
    assert_eq!(objects, vec![left, right, far]);
}

#[test]
fn crossing_the_same_stroke_twice_removes_it_once() {
    let mut engine = engine();
    let id = draw_stroke(&mut engine, (10.0, 10.0));

    engine.set_mode(ModeKind::Eraser);
    engine.pointer_down(PointerButton::Left, 10.0, 10.0);
    engine.pointer_moved(200.0, 200.0);
    engine.pointer_moved(10.0, 11.0); // back over the same stroke
    engine.pointer_released(PointerButton::Left);

    assert!(live_objects(&mut engine).is_empty());

    // One removal means exactly one undo brings it back; a second does
    // nothing more.
    engine.handle_signal(Signal::Undo);
    assert_eq!(live_objects(&mut engine), vec![id]);
    engine.handle_signal(Signal::Undo);
    assert_eq!(live_objects(&mut engine), vec![id]);
}

#[test]
fn mode_switch_mid_drag_leaves_canvas_untouched() {
    let mut engine = engine();
    let id = draw_stroke(&mut engine, (10.0, 10.0));

    engine.set_mode(ModeKind::Eraser);
    engine.pointer_down(PointerButton::Left, 10.0, 10.0);

    // No pointer-up: the gesture is torn down by the mode switch.
    engine.set_mode(ModeKind::Free);

    let surface = engine.surface_mut().unwrap();
    assert_eq!(surface.objects(), vec![id]);
    assert_eq!(surface.opacity(id), Some(1.0));

    // Nothing was recorded, so undo rolls back the original draw.
    engine.handle_signal(Signal::Undo);
    assert!(live_objects(&mut engine).is_empty());
}

#[test]
fn erased_object_comes_back_interactive() {
    let mut engine = engine();
    let id = draw_stroke(&mut engine, (10.0, 10.0));

    engine.set_mode(ModeKind::Eraser);
    engine.pointer_down(PointerButton::Left, 10.0, 10.0);
    engine.pointer_released(PointerButton::Left);
    assert!(live_objects(&mut engine).is_empty());

    engine.handle_signal(Signal::Undo);
    let surface = engine.surface_mut().unwrap();
    assert_eq!(surface.objects(), vec![id]);
    assert!(surface.is_selectable(id));
    assert_eq!(surface.opacity(id), Some(1.0));
}

#[test]
fn clear_then_single_undo_restores_every_object() {
    let mut engine = engine();
    let a = draw_stroke(&mut engine, (10.0, 10.0));
    let b = draw_stroke(&mut engine, (50.0, 50.0));

    engine.set_mode(ModeKind::Shape);
    let c = engine.insert_shape(ShapeKind::Triangle).unwrap();

    engine.clear();
    assert!(live_objects(&mut engine).is_empty());

    engine.handle_signal(Signal::Undo);
    assert_eq!(live_objects(&mut engine), vec![a, b, c]);

    engine.handle_signal(Signal::Redo);
    assert!(live_objects(&mut engine).is_empty());
}

#[test]
fn highlight_strokes_track_the_latest_color() {
    let mut engine = engine();
    engine.set_mode(ModeKind::Highlight);
    assert!(engine.set_brush_color_hex("#FF0000"));

    let id = engine
        .surface_mut()
        .unwrap()
        .add_path(&[(5.0, 5.0)])
        .expect("highlight keeps free draw enabled");
    engine.notify_path_created(id);

    // The surface drew with the red base at the highlighter alpha; the
    // object's own opacity attribute stays untouched.
    assert_eq!(engine.surface_mut().unwrap().opacity(id), Some(1.0));
    assert_eq!(engine.controller().brush().color.to_hex(), "#FF0000");
}

#[test]
fn shape_inserts_are_individually_undoable() {
    let mut engine = engine();
    engine.set_mode(ModeKind::Shape);

    let rect = engine.insert_shape(ShapeKind::Rectangle).unwrap();
    let circle = engine.insert_shape(ShapeKind::Circle).unwrap();
    assert_eq!(live_objects(&mut engine), vec![rect, circle]);

    engine.handle_signal(Signal::Undo);
    assert_eq!(live_objects(&mut engine), vec![rect]);
}
