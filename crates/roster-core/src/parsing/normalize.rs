/// Normalize a raw roster name to title case.
///
/// Steps:
/// 1. Trim and collapse whitespace runs to single spaces
/// 2. Uppercase the first character of each word
/// 3. Lowercase the rest of the word
///
/// `"  JOHN   SMITH "` becomes `"John Smith"`. Whitespace-only input
/// yields an empty string.
pub fn format_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
