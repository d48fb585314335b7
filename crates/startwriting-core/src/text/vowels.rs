/// Vowel highlighting.
///
/// The word box paints vowels in a highlight colour while the child types.
/// This module only decides *which* bytes are vowels; the GUI turns the
/// spans into coloured text sections.
use std::ops::Range;

/// Letters painted as vowels, lowercase and uppercase.
pub const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'ą', 'ę', 'ó', //
    'A', 'E', 'I', 'O', 'U', 'Y', 'Ą', 'Ę', 'Ó',
];

/// Whether `c` belongs to the vowel set.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Vowel,
    Plain,
}

/// A run of characters of one kind. `range` is in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub kind: SpanKind,
}

/// Split `text` into alternating vowel / plain spans.
///
/// Spans cover the whole text without gaps and adjacent characters of the
/// same kind share a span. Empty text yields no spans.
pub fn highlight(text: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();

    for (start, c) in text.char_indices() {
        let kind = if is_vowel(c) {
            SpanKind::Vowel
        } else {
            SpanKind::Plain
        };
        let end = start + c.len_utf8();

        match spans.last_mut() {
            Some(last) if last.kind == kind => last.range.end = end,
            _ => spans.push(Span {
                range: start..end,
                kind,
            }),
        }
    }

    spans
}

/// Number of vowels in `text`.
pub fn count_vowels(text: &str) -> usize {
    text.chars().filter(|&c| is_vowel(c)).count()
}
