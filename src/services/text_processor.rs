// Text Processing Service
// Lexical metrics and sentence segmentation used by the scorer

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::warn;

fn non_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Combining marks count as non-word so decomposed accents are stripped.
    RE.get_or_init(|| Regex::new(r"[^\w\s]|\p{M}").expect("non-word regex"))
}

/// Length in characters (Unicode scalar values), not UTF-8 bytes.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Type-Token Ratio over whitespace-separated tokens
///
/// Punctuation is removed and tokens are lowercased first. Unsegmented CJK
/// runs therefore count as a single token.
pub fn calculate_ttr(text: &str) -> f64 {
    let stripped = non_word_re().replace_all(text, "").to_lowercase();
    let tokens: Vec<&str> = stripped.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = tokens.iter().copied().collect();
    unique.len() as f64 / tokens.len() as f64
}

/// Word-boundary matchers for the configured connector words.
#[derive(Debug, Clone)]
pub struct FunctionWordMatcher {
    patterns: Vec<Regex>,
}

impl FunctionWordMatcher {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let patterns = words
            .iter()
            .map(|w| -> &str { w.as_ref() })
            .filter(|w| !w.trim().is_empty())
            .filter_map(|w| match Regex::new(&format!(r"\b{}\b", regex::escape(w))) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(word = w, error = %e, "function_word.pattern_invalid");
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    /// Total non-overlapping matches across all words.
    pub fn count(&self, text: &str) -> usize {
        self.patterns.iter().map(|re| re.find_iter(text).count()).sum()
    }

    /// Matches per character; 0.0 for empty text.
    pub fn density(&self, text: &str) -> f64 {
        let len = char_len(text);
        if len == 0 {
            return 0.0;
        }
        self.count(text) as f64 / len as f64
    }
}

/// Split after each terminator, keeping it attached to the preceding
/// sentence. Pieces are trimmed and empty ones dropped.
pub fn split_sentences(text: &str, terminators: &[char]) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut buffer = String::new();

    for ch in text.chars() {
        buffer.push(ch);
        if terminators.contains(&ch) {
            push_trimmed(&mut sentences, &buffer);
            buffer.clear();
        }
    }
    push_trimmed(&mut sentences, &buffer);

    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

/// Occurrences of any of `marks` in `text`.
pub fn count_chars_in(text: &str, marks: &[char]) -> usize {
    text.chars().filter(|c| marks.contains(c)).count()
}
