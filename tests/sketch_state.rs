use egui::Pos2;
use sketchpad::{InputEvent, SketchConfig, SketchState, Tool};

fn state() -> SketchState {
    SketchState::new(SketchConfig::default())
}

fn draw_line(state: &mut SketchState, from: (f32, f32), to: (f32, f32)) {
    state.handle_event(InputEvent::PointerDown {
        position: Pos2::new(from.0, from.1),
    });
    state.handle_event(InputEvent::PointerMove {
        position: Pos2::new(to.0, to.1),
    });
    state.handle_event(InputEvent::PointerUp);
}

#[test]
fn test_starts_with_thin_marker() {
    let state = state();
    assert_eq!(state.tool(), &Tool::Marker { width: 1.0 });
}

#[test]
fn test_select_width_and_sticker() {
    let mut state = state();
    state.select_width(5.0);
    assert!(state.tool().is_marker_width(5.0));

    state.select_sticker("🎸");
    assert!(state.tool().is_sticker("🎸"));

    state.handle_event(InputEvent::PointerDown {
        position: Pos2::new(20.0, 20.0),
    });
    state.handle_event(InputEvent::PointerUp);
    let sticker = state.history().drawables()[0].as_sticker().unwrap();
    assert_eq!(sticker.glyph(), "🎸");
    assert_eq!(sticker.font_size(), 32.0);
}

#[test]
fn test_dirty_flag() {
    let mut state = state();
    assert!(state.take_dirty());
    assert!(!state.take_dirty());

    // Nothing to undo: no change
    state.undo();
    assert!(!state.take_dirty());

    draw_line(&mut state, (0.0, 0.0), (10.0, 10.0));
    assert!(state.take_dirty());

    state.undo();
    assert!(state.take_dirty());
    state.redo();
    assert!(state.take_dirty());

    state.clear();
    assert!(state.take_dirty());
    assert!(state.history().is_empty());
}

#[test]
fn test_clear_then_undo_redo_are_noops() {
    let mut state = state();
    draw_line(&mut state, (0.0, 0.0), (10.0, 10.0));
    draw_line(&mut state, (5.0, 0.0), (5.0, 10.0));
    state.undo();
    state.clear();
    state.take_dirty();

    state.undo();
    state.redo();
    assert!(!state.take_dirty());
    assert!(state.history().is_empty());
    assert!(!state.history().can_redo());
}

#[test]
fn test_custom_sticker() {
    let mut state = state();
    let builtin = state.stickers().len();

    assert!(!state.add_custom_sticker("   "));
    assert_eq!(state.stickers().len(), builtin);

    assert!(state.add_custom_sticker(" 🦀 "));
    assert_eq!(state.stickers().len(), builtin + 1);
    assert!(state.tool().is_sticker("🦀"));

    // Adding it again arms it without duplicating
    assert!(state.add_custom_sticker("🦀"));
    assert_eq!(state.stickers().len(), builtin + 1);
}
