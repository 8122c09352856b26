use crate::models::Utterance;
use crate::rules;

/// Result of stage 2 paragraph merging
#[derive(Debug)]
pub struct MergeResult {
    /// Merged paragraphs; no two consecutive entries share a speaker value
    pub utterances: Vec<Utterance>,
    /// Blocks folded into a predecessor
    pub blocks_merged: usize,
}

/// Execute stage 2: paragraph merging
///
/// Consecutive utterances with the same speaker value (including runs of
/// speaker-less preamble) collapse into one, content joined with a single
/// space. Each merged paragraph then gets sentence-level cleanup: whitespace
/// runs collapse, space before punctuation is dropped, a terminal period is
/// added when missing, and the first letter after each `. ` split is
/// uppercased.
pub fn merge(utterances: Vec<Utterance>) -> MergeResult {
    let mut merged: Vec<Utterance> = Vec::new();
    let mut blocks_merged = 0;

    for utterance in utterances {
        match merged.last_mut() {
            Some(last) if last.speaker == utterance.speaker => {
                last.text.push(' ');
                last.text.push_str(&utterance.text);
                blocks_merged += 1;
            }
            _ => merged.push(utterance),
        }
    }

    for utterance in &mut merged {
        utterance.text = polish(&utterance.text);
    }

    MergeResult {
        utterances: merged,
        blocks_merged,
    }
}

/// Sentence-level cleanup for one merged paragraph
fn polish(text: &str) -> String {
    let text = rules::WHITESPACE_RUN.replace_all(text.trim(), " ");
    let mut text = rules::SPACE_BEFORE_PUNCT
        .replace_all(&text, "$1")
        .into_owned();

    if !text.is_empty() && !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }

    text.split(". ")
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(". ")
}

/// Uppercase the first character of a sentence, leaving the rest untouched
fn capitalize_first(sentence: &str) -> String {
    let sentence = sentence.trim();
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
