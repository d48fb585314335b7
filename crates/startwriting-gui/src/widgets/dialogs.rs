/// Modal message boxes: validation warnings, the broken-picture retry
/// prompt, the fatal folder error, and the About box.
use crate::state::{AppState, Dialog, IMAGE_ERROR_MESSAGE};
use crate::theme::WritingTheme;

/// What the user clicked in the front dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Ok,
    Retry,
    Cancel,
}

/// Draw the front dialog, if any, and apply the user's answer to `state`.
pub fn dialogs(ctx: &egui::Context, state: &mut AppState, theme: &WritingTheme) {
    if let Some(action) = show_front(ctx, state, theme) {
        tracing::debug!("Dialog answered: {:?}", action);
        match action {
            DialogAction::Ok => state.acknowledge_dialog(),
            DialogAction::Retry => state.retry(),
            DialogAction::Cancel => state.cancel_dialog(),
        }
    }
    about(ctx, state, theme);
}

fn show_front(
    ctx: &egui::Context,
    state: &AppState,
    theme: &WritingTheme,
) -> Option<DialogAction> {
    let dialog = state.dialog()?;

    let (title, body, color) = match dialog {
        Dialog::Warnings(text) => ("Pictures", text.as_str(), theme.warning),
        Dialog::ImageUnreadable { .. } => ("ups", IMAGE_ERROR_MESSAGE, theme.error),
        Dialog::Fatal(text) => ("Error", text.as_str(), theme.error),
    };

    // The backdrop swallows input, so the word box and Check button stay
    // inert until the front dialog is answered.
    let mut action = None;
    let modal = egui::Modal::new(egui::Id::new("message_modal"))
        .backdrop_color(egui::Color32::from_black_alpha(120))
        .show(ctx, |ui| {
            ui.set_width(380.0);
            ui.label(egui::RichText::new(title).size(16.0).strong());
            ui.add_space(8.0);
            ui.label(egui::RichText::new(body).size(14.0).color(color));

            if let Dialog::ImageUnreadable { path, message, .. } = dialog {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("{}\n{}", path.display(), message))
                        .size(11.0)
                        .color(theme.text_muted),
                );
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| match dialog {
                Dialog::ImageUnreadable { .. } => {
                    if ui.button("Retry").clicked() {
                        action = Some(DialogAction::Retry);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(DialogAction::Cancel);
                    }
                }
                Dialog::Warnings(_) | Dialog::Fatal(_) => {
                    if ui.button("OK").clicked() {
                        action = Some(DialogAction::Ok);
                    }
                }
            });
            ui.add_space(4.0);
        });

    // Escape or a click on the backdrop.
    if action.is_none() && modal.should_close() {
        action = Some(match dialog {
            Dialog::ImageUnreadable { .. } => DialogAction::Cancel,
            Dialog::Warnings(_) | Dialog::Fatal(_) => DialogAction::Ok,
        });
    }

    action
}

fn about(ctx: &egui::Context, state: &mut AppState, theme: &WritingTheme) {
    let mut show_about = state.show_about;
    egui::Window::new("About StartWriting")
        .open(&mut show_about)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([340.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("✏ StartWriting")
                        .size(24.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(13.0)
                        .color(theme.text_muted),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(
                        "Type a word, watch its vowels turn colour,\n\
                         and press Check to see its picture.",
                    )
                    .size(12.0)
                    .color(theme.text_primary),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Pictures are read from the images folder.")
                        .size(11.0)
                        .color(theme.text_muted),
                );
                ui.add_space(8.0);
            });
        });
    state.show_about = show_about;
}
