/// Picture area — shows the matched picture scaled to fit, or a hint.
use crate::state::{AppState, CheckOutcome};
use crate::theme::WritingTheme;
use egui::{Ui, Vec2};

/// Largest size with the picture's aspect ratio that fits in `available`.
///
/// Small pictures are scaled up too; a degenerate picture or area yields
/// `Vec2::ZERO`.
pub fn fit_size(picture: Vec2, available: Vec2) -> Vec2 {
    if picture.x <= 0.0 || picture.y <= 0.0 || available.x <= 0.0 || available.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (available.x / picture.x).min(available.y / picture.y);
    picture * scale
}

/// Draw the picture area.
pub fn picture_view(
    ui: &mut Ui,
    state: &AppState,
    texture: Option<&egui::TextureHandle>,
    theme: &WritingTheme,
) {
    let available = ui.available_size();

    match (texture, &state.picture) {
        (Some(texture), Some(_)) => {
            let size = fit_size(texture.size_vec2(), available);
            ui.centered_and_justified(|ui| {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::new(texture.id(), size))
                        .fit_to_exact_size(size),
                );
            });
        }
        _ => {
            let (text, color) = match &state.last_check {
                Some(CheckOutcome::NotFound(word)) if !word.is_empty() => {
                    (format!("No picture for \"{word}\" yet"), theme.warning)
                }
                Some(CheckOutcome::Failed(word)) => {
                    (format!("Could not show \"{word}\""), theme.error)
                }
                _ => ("Type a word and press Check".to_string(), theme.text_muted),
            };
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(text).size(20.0).color(color));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_fit_wide_picture() {
        assert_eq!(fit_size(vec2(200.0, 100.0), vec2(400.0, 400.0)), vec2(400.0, 200.0));
    }

    #[test]
    fn test_fit_tall_picture() {
        assert_eq!(fit_size(vec2(100.0, 200.0), vec2(400.0, 300.0)), vec2(150.0, 300.0));
    }

    #[test]
    fn test_fit_scales_down() {
        assert_eq!(fit_size(vec2(1000.0, 500.0), vec2(100.0, 100.0)), vec2(100.0, 50.0));
    }

    #[test]
    fn test_fit_degenerate() {
        assert_eq!(fit_size(vec2(0.0, 10.0), vec2(100.0, 100.0)), Vec2::ZERO);
        assert_eq!(fit_size(vec2(10.0, 10.0), vec2(0.0, 100.0)), Vec2::ZERO);
    }
}
