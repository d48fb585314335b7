/// Colour scheme and visual theme for StartWriting.
///
/// Light by default, with an optional dark palette. All colour constants
/// live here so the rest of the UI refers to semantically-named values
/// rather than raw hex codes.

use egui::{Color32, Stroke, Visuals};

/// Semantic colour palette.
pub struct WritingTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub vowel: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub separator: Color32,
}

impl WritingTheme {
    /// Light theme — the default.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xfd, 0xfa, 0xf2),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xf0, 0xec, 0xe0),
            text_primary: Color32::from_rgb(0x10, 0x10, 0x10),
            text_muted: Color32::from_rgb(0x8a, 0x8a, 0x9a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            vowel: Color32::from_rgb(0xff, 0x00, 0x00),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            error: Color32::from_rgb(0xd0, 0x40, 0x50),
            separator: Color32::from_rgb(0xd8, 0xd4, 0xc8),
        }
    }

    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            surface_hover: Color32::from_rgb(0x35, 0x35, 0x4a),
            text_primary: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_muted: Color32::from_rgb(0x6c, 0x70, 0x86),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            vowel: Color32::from_rgb(0xff, 0x55, 0x55),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            error: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x50),
        }
    }

    /// Theme for the given mode, with the vowel colour taken from settings.
    pub fn for_settings(dark_mode: bool, vowel_color: [u8; 3]) -> Self {
        let mut theme = if dark_mode { Self::dark() } else { Self::light() };
        let [r, g, b] = vowel_color;
        theme.vowel = Color32::from_rgb(r, g, b);
        theme
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface;
        visuals.faint_bg_color = self.surface;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_colour_from_settings() {
        let theme = WritingTheme::for_settings(false, [0, 0, 255]);
        assert_eq!(theme.vowel, Color32::from_rgb(0, 0, 255));
        assert_eq!(theme.background, WritingTheme::light().background);
    }

    #[test]
    fn test_dark_mode_selects_dark_palette() {
        let theme = WritingTheme::for_settings(true, [255, 0, 0]);
        assert_eq!(theme.background, WritingTheme::dark().background);
    }
}
