use egui::{Key, KeyboardShortcut, Modifiers, Rect};

use crate::config::SketchConfig;
use crate::error::{SketchError, SketchResult};
use crate::export;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::state::SketchState;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// The eframe application: a toolbar above a single drawing canvas
pub struct SketchApp {
    state: SketchState,
    input: InputHandler,
    /// Text typed into the custom sticker field
    custom_sticker: String,
    /// Last export outcome, shown in the toolbar
    status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    ///
    /// Fails if eframe could not create a GL context, so no frame is ever
    /// drawn to a missing surface.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> SketchResult<Self> {
        if cc.gl.is_none() {
            return Err(SketchError::SurfaceUnavailable(
                "eframe provided no glow context".to_owned(),
            ));
        }
        log::info!("Starting sketchpad with a {}px canvas", config.canvas_size);
        Ok(Self::with_config(config))
    }

    /// Build the app without a rendering context
    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            state: SketchState::new(config),
            input: InputHandler::new(Rect::NOTHING),
            custom_sticker: String::new(),
            status: None,
        }
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SketchState {
        &mut self.state
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn custom_sticker_mut(&mut self) -> &mut String {
        &mut self.custom_sticker
    }

    /// Add the typed custom sticker and reset the text field
    pub fn add_custom_sticker(&mut self) {
        if self.state.add_custom_sticker(&self.custom_sticker) {
            self.custom_sticker.clear();
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Export at the configured scale and hand the PNG to the user
    pub fn export_drawing(&mut self) {
        let config = self.state.config();
        let file_name = config.export_file_name.clone();
        let result = self
            .state
            .export(config.export_scale)
            .and_then(|bytes| export::save_png(&bytes, &file_name));

        self.status = Some(match result {
            Ok(()) => format!("Exported {}", file_name),
            Err(err) => {
                log::error!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Text fields keep their own undo
        if ctx.wants_keyboard_input() {
            return;
        }

        // Redo first: the undo shortcut would also match with shift held
        let redo = ctx.input_mut(|i| {
            i.consume_shortcut(&REDO_SHORTCUT) || i.consume_shortcut(&REDO_ALT_SHORTCUT)
        });
        if redo {
            self.state.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.state.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);

        if self.state.take_dirty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Pos2, RawInput};

    use crate::input::InputEvent;

    fn app_with_two_strokes(config: SketchConfig) -> SketchApp {
        let mut app = SketchApp::with_config(config);
        for y in [10.0, 20.0] {
            let state = app.state_mut();
            state.handle_event(InputEvent::PointerDown {
                position: Pos2::new(10.0, y),
            });
            state.handle_event(InputEvent::PointerMove {
                position: Pos2::new(200.0, y),
            });
            state.handle_event(InputEvent::PointerUp);
        }
        app
    }

    fn chord(modifiers: Modifiers, key: Key) -> RawInput {
        RawInput {
            modifiers,
            events: vec![Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..Default::default()
        }
    }

    fn press(app: &mut SketchApp, modifiers: Modifiers, key: Key) {
        let ctx = egui::Context::default();
        let _ = ctx.run(chord(modifiers, key), |ctx| app.handle_shortcuts(ctx));
    }

    fn stack_lens(app: &SketchApp) -> (usize, usize) {
        let history = app.state().history();
        (history.len(), history.redo_stack().len())
    }

    #[test]
    fn test_undo_redo_shortcuts() {
        let mut app = app_with_two_strokes(SketchConfig::default());
        assert_eq!(stack_lens(&app), (2, 0));

        press(&mut app, Modifiers::COMMAND, Key::Z);
        assert_eq!(stack_lens(&app), (1, 1));

        press(&mut app, Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
        assert_eq!(stack_lens(&app), (2, 0));

        press(&mut app, Modifiers::COMMAND, Key::Z);
        assert_eq!(stack_lens(&app), (1, 1));
        press(&mut app, Modifiers::COMMAND, Key::Y);
        assert_eq!(stack_lens(&app), (2, 0));
    }

    #[test]
    fn test_plain_z_does_nothing() {
        let mut app = app_with_two_strokes(SketchConfig::default());
        press(&mut app, Modifiers::NONE, Key::Z);
        assert_eq!(stack_lens(&app), (2, 0));
    }

    #[test]
    fn test_shortcuts_ignored_while_text_field_focused() {
        let mut app = app_with_two_strokes(SketchConfig::default());
        let ctx = egui::Context::default();
        let _ = ctx.run(chord(Modifiers::COMMAND, Key::Z), |ctx| {
            ctx.memory_mut(|m| m.request_focus(egui::Id::new("custom_sticker")));
            app.handle_shortcuts(ctx);
        });
        assert_eq!(stack_lens(&app), (2, 0));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_export_writes_png_file() {
        use image::GenericImageView;

        let path = std::env::temp_dir().join(format!("sketchpad-export-{}.png", std::process::id()));
        let config = SketchConfig {
            export_file_name: path.to_string_lossy().into_owned(),
            ..Default::default()
        };
        let mut app = app_with_two_strokes(config);

        app.export_drawing();

        assert!(app.status().is_some_and(|s| s.starts_with("Exported")));
        let image = image::open(&path).unwrap();
        assert_eq!(image.dimensions(), (1024, 1024));
        std::fs::remove_file(&path).ok();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_export_failure_is_reported() {
        let path = std::env::temp_dir()
            .join("sketchpad-missing-dir")
            .join("nested")
            .join("out.png");
        let config = SketchConfig {
            export_file_name: path.to_string_lossy().into_owned(),
            ..Default::default()
        };
        let mut app = app_with_two_strokes(config);

        app.export_drawing();

        assert!(app.status().is_some_and(|s| s.starts_with("Export failed")));
        assert!(!path.exists());
        // History is untouched by a failed export
        assert_eq!(stack_lens(&app), (2, 0));
    }
}
