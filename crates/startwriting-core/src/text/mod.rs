/// Text helpers for the word box.
///
/// - [`normalize`] — turns raw text box contents into the word to look up.
/// - [`vowels`] — splits text into vowel / non-vowel spans for colouring.
pub mod normalize;
pub mod vowels;

pub use normalize::normalize_word;
pub use vowels::{count_vowels, highlight, is_vowel, Span, SpanKind};
