use regex::Captures;
use tracing::debug;

use crate::rules;

/// Result of stage 0 normalization
#[derive(Debug)]
pub struct NormalizeResult {
    /// The normalized text
    pub text: String,
    /// Timestamp occurrences deleted
    pub timestamps_removed: usize,
    /// Filler words and phrases deleted
    pub fillers_removed: usize,
    /// Adjacent duplicate words dropped
    pub repeats_collapsed: usize,
}

/// Execute stage 0: text normalization
///
/// Applies the rule tables in fixed order over the whole text:
/// 1. Delete timestamps
/// 2. Canonicalize speaker notation to `Interviewer:` / `Expert:`
/// 3. Delete disfluencies
/// 4. Collapse adjacent duplicate-word runs
/// 5. Uppercase sentence starts after `. ` breaks
/// 6. Strip stray asterisks
///
/// The output is best-effort: it is timestamp-free and filler-free, but not
/// guaranteed grammatical. Re-running on its own output changes nothing.
pub fn normalize(text: &str) -> NormalizeResult {
    let timestamps_removed = rules::TIMESTAMP.find_iter(text).count();
    let mut text = rules::TIMESTAMP.replace_all(text, "").into_owned();

    for (pattern, replacement) in rules::SPEAKER_ALIASES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    let mut fillers_removed = 0;
    for pattern in rules::DISFLUENCIES.iter() {
        fillers_removed += pattern.find_iter(&text).count();
        text = pattern.replace_all(&text, "").into_owned();
    }

    let (text, repeats_collapsed) = collapse_repeated_words(&text);

    let mut text = rules::SENTENCE_BREAK
        .replace_all(&text, |caps: &Captures| {
            format!(". {}", caps[1].to_uppercase())
        })
        .into_owned();

    text.retain(|c| c != '*');

    debug!(
        timestamps_removed,
        fillers_removed, repeats_collapsed, "normalized text"
    );

    NormalizeResult {
        text,
        timestamps_removed,
        fillers_removed,
        repeats_collapsed,
    }
}

/// Collapse runs of the same word separated only by whitespace ("the the
/// the" becomes "the"). Comparison ignores case; the first occurrence wins.
/// Returns the rewritten text and the number of duplicates dropped.
fn collapse_repeated_words(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut dropped = 0;
    let mut last_end = 0;
    let mut previous_word: Option<String> = None;

    for word in rules::WORD.find_iter(text) {
        let lowered = word.as_str().to_lowercase();
        let gap = &text[last_end..word.start()];
        let is_repeat = previous_word.as_deref() == Some(lowered.as_str())
            && !gap.is_empty()
            && gap.chars().all(char::is_whitespace);

        if is_repeat {
            dropped += 1;
        } else {
            out.push_str(gap);
            out.push_str(word.as_str());
        }

        last_end = word.end();
        previous_word = Some(lowered);
    }

    out.push_str(&text[last_end..]);
    (out, dropped)
}
