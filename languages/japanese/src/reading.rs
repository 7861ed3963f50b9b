use unicode_normalization::UnicodeNormalization;

/// Fold a reading into the hiragana form dictionaries index by: NFKC
/// normalization, then katakana mapped to hiragana. The analyzer emits
/// katakana readings while dictionary readings are hiragana.
pub fn normalize_reading(reading: &str) -> String {
    reading
        .nfkc()
        .collect::<String>()
        .chars()
        .map(katakana_to_hiragana)
        .collect()
}

/// Map one katakana character to its hiragana counterpart. Everything else
/// passes through, including the prolonged sound mark.
pub fn katakana_to_hiragana(c: char) -> char {
    match c {
        'ァ'..='ヶ' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    }
}
