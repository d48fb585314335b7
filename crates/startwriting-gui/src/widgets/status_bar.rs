/// Bottom status bar — library size and the last check result.
use crate::state::{AppState, CheckOutcome};
use crate::theme::WritingTheme;
use egui::Ui;
use startwriting_core::text::count_vowels;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState, theme: &WritingTheme) {
    ui.horizontal(|ui| {
        let words = state.library.len();
        ui.label(
            egui::RichText::new(format!(
                "{} {}",
                words,
                if words == 1 { "picture" } else { "pictures" }
            ))
            .size(12.0)
            .color(theme.accent),
        );

        ui.separator();

        let word = state.current_word();
        let vowels = count_vowels(&word);
        ui.label(
            egui::RichText::new(format!(
                "{} letters, {} vowels",
                word.chars().count(),
                vowels
            ))
            .size(12.0)
            .color(theme.text_primary),
        );

        if let Some(outcome) = &state.last_check {
            ui.separator();
            let (text, color) = match outcome {
                CheckOutcome::Found(w) => (format!("\u{2713} {w}"), theme.success),
                CheckOutcome::NotFound(w) => (format!("\u{2717} {w}"), theme.warning),
                CheckOutcome::Failed(w) => (format!("\u{26a0} {w}"), theme.error),
            };
            ui.label(egui::RichText::new(text).size(12.0).color(color));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(truncate_path(
                    &state.images_dir.to_string_lossy(),
                    60,
                ))
                .size(11.0)
                .color(theme.text_muted),
            );
        });
    });
}

/// Truncate a path string to at most `max_chars` characters, replacing the
/// middle with "..." if needed.
fn truncate_path(path: &str, max_chars: usize) -> String {
    let count = path.chars().count();
    if count <= max_chars {
        return path.to_string();
    }
    let half = max_chars.saturating_sub(3) / 2;
    let head: String = path.chars().take(half).collect();
    let tail: String = path.chars().skip(count - half).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_path_untouched() {
        assert_eq!(truncate_path("/home/ola/images", 60), "/home/ola/images");
    }

    #[test]
    fn test_truncate_long_path() {
        let out = truncate_path("/very/long/path/to/the/images", 13);
        assert_eq!(out, "/very...mages");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        let out = truncate_path("/ąąąąąąąąąą/żżżżżżżżżż", 9);
        assert_eq!(out, "/ąą...żżż");
    }
}
