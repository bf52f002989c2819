use unidecode::unidecode;

/// Folds a display name for lookup: ASCII-transliterated, lowercased, runs
/// of whitespace collapsed to single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
