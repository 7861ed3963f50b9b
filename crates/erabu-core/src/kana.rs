/// Hiragana block (U+3041..U+309F)
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}')
}

/// Katakana block, including the prolonged sound mark (U+30A0..U+30FF)
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}')
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// True when every character of the text is kana. The empty string is not
/// considered a kana spelling.
pub fn is_all_kana(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_kana)
}
