//! Sentence boundary detection for evidence candidate scanning.

/// Shortest fragment kept as a sentence, in characters.
const MIN_SENTENCE_CHARS: usize = 3;

/// Split text into sentences at terminal punctuation (`.`, `!`, `?`)
/// followed by whitespace or end of input.
///
/// Fragments shorter than [`MIN_SENTENCE_CHARS`] or without any
/// alphanumeric content are dropped; they can never carry a keyword
/// match. Trailing text without terminal punctuation counts as a final
/// sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminal = false;

    for (i, c) in text.char_indices() {
        if after_terminal && c.is_whitespace() {
            push_if_substantial(&mut sentences, &text[start..i]);
            start = i;
        }
        after_terminal = matches!(c, '.' | '!' | '?');
    }
    push_if_substantial(&mut sentences, &text[start..]);

    sentences
}

fn push_if_substantial(out: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.chars().count() >= MIN_SENTENCE_CHARS
        && trimmed.chars().any(char::is_alphanumeric)
    {
        out.push(trimmed.to_string());
    }
}
