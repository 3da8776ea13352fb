use crate::SketchApp;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.heading("Sketchpad");

        ui.horizontal_wrapped(|ui| {
            let config = app.state().config();
            let markers = [("Thin", config.thin_width), ("Thick", config.thick_width)];
            for (label, width) in markers {
                let selected = app.state().tool().is_marker_width(width);
                if ui.selectable_label(selected, label).clicked() {
                    app.state_mut().select_width(width);
                }
            }

            ui.separator();

            // Collect first to avoid borrowing the state while selecting
            let stickers: Vec<String> = app.state().stickers().to_vec();
            for glyph in stickers {
                let selected = app.state().tool().is_sticker(&glyph);
                if ui.selectable_label(selected, glyph.as_str()).clicked() {
                    app.state_mut().select_sticker(glyph);
                }
            }

            ui.add(
                egui::TextEdit::singleline(app.custom_sticker_mut())
                    .hint_text("Custom sticker")
                    .desired_width(100.0),
            );
            if ui.button("Add sticker").clicked() {
                app.add_custom_sticker();
            }
        });

        ui.horizontal(|ui| {
            let history = app.state().history();
            let can_undo = history.can_undo();
            let can_redo = history.can_redo();

            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.state_mut().undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.state_mut().redo();
            }
            if ui.button("Clear").clicked() {
                app.state_mut().clear();
            }
            if ui.button("Export").clicked() {
                app.export_drawing();
            }

            ui.separator();
            ui.label(app.state().tool().name());
            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
    });
}
