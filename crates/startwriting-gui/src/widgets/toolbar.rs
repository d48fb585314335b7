/// Top action bar -- clear, reload, theme toggle, and branding.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("✏ StartWriting")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        if ui
            .button("🗑 Clear")
            .on_hover_text("Empty the word box")
            .clicked()
        {
            state.clear();
        }

        if ui
            .button("🔄 Reload pictures")
            .on_hover_text(format!("Scan {} again", state.images_dir.display()))
            .clicked()
        {
            state.rescan();
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About StartWriting").clicked() {
                state.show_about = true;
            }

            let (icon, tip) = if state.settings.dark_mode {
                ("☀", "Switch to light mode")
            } else {
                ("🌙", "Switch to dark mode")
            };
            if ui.button(icon).on_hover_text(tip).clicked() {
                state.settings.dark_mode = !state.settings.dark_mode;
            }
        });
    });
}
