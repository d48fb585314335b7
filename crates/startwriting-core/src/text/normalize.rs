/// Turn the raw text box contents into the word used for lookup.
///
/// Removes every line break (`\r\n`, a lone `\r`, or a lone `\n`).
/// Nothing else changes: no trimming and no case folding, so `" kot"` and
/// `"Kot"` stay distinct from `"kot"`.
pub fn normalize_word(raw: &str) -> String {
    raw.chars().filter(|&c| c != '\r' && c != '\n').collect()
}
