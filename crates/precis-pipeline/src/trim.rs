/// Keep at most `max_words` whitespace-separated words, rejoined by single
/// spaces. Text already within the limit is returned unchanged.
pub fn trim_to_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    words[..max_words].join(" ")
}
