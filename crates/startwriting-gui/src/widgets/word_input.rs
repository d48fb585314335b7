/// Word box — a single-line text field that paints vowels as you type.
///
/// Colouring happens in the layouter, so the buffer and the caret are never
/// touched: typing a vowel, deleting it and typing a consonant leaves the
/// consonant in the plain colour.
use crate::state::AppState;
use crate::theme::WritingTheme;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, Ui};
use startwriting_core::text::{highlight, SpanKind};

/// Build the coloured layout for `text`.
pub fn vowel_layout_job(text: &str, font_id: FontId, plain: Color32, vowel: Color32) -> LayoutJob {
    let mut job = LayoutJob::default();
    for span in highlight(text) {
        let color = match span.kind {
            SpanKind::Vowel => vowel,
            SpanKind::Plain => plain,
        };
        job.append(
            &text[span.range],
            0.0,
            TextFormat::simple(font_id.clone(), color),
        );
    }
    job
}

/// Draw the word box. Returns `true` when the user pressed Enter.
pub fn word_input(ui: &mut Ui, state: &mut AppState, theme: &WritingTheme) -> bool {
    let font_id = FontId::proportional(state.settings.font_size);
    let plain = theme.text_primary;
    let vowel = theme.vowel;

    let mut layouter = |ui: &Ui, text: &str, wrap_width: f32| {
        let mut job = vowel_layout_job(text, font_id.clone(), plain, vowel);
        job.wrap.max_width = wrap_width;
        ui.fonts(|f| f.layout_job(job))
    };

    let width = (ui.available_width() * 0.8).max(200.0);
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.text)
            .font(font_id.clone())
            .hint_text("type a word")
            .horizontal_align(egui::Align::Center)
            .desired_width(width)
            .layouter(&mut layouter),
    );

    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if state.dialog().is_none() && (submitted || !response.has_focus()) {
        response.request_focus();
    }
    submitted
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: Color32 = Color32::BLACK;
    const VOWEL: Color32 = Color32::RED;

    fn colours(text: &str) -> Vec<(String, Color32)> {
        let job = vowel_layout_job(text, FontId::proportional(20.0), PLAIN, VOWEL);
        job.sections
            .iter()
            .map(|s| (job.text[s.byte_range.clone()].to_string(), s.format.color))
            .collect()
    }

    #[test]
    fn test_vowels_are_painted() {
        let expected: Vec<(String, Color32)> = [("m", PLAIN), ("a", VOWEL), ("m", PLAIN), ("a", VOWEL)]
            .into_iter()
            .map(|(t, c)| (t.to_string(), c))
            .collect();
        assert_eq!(colours("mama"), expected);
    }

    #[test]
    fn test_layout_text_is_unchanged() {
        let text = "Żółw i ąę";
        let job = vowel_layout_job(text, FontId::proportional(20.0), PLAIN, VOWEL);
        assert_eq!(job.text, text);
    }

    #[test]
    fn test_empty_text_has_no_sections() {
        let job = vowel_layout_job("", FontId::proportional(20.0), PLAIN, VOWEL);
        assert!(job.sections.is_empty());
    }
}
