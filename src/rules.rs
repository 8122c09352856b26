//! Ordered rule tables for the text normalizer and section splitter.
//!
//! Each table is an ordered constant list applied by a pure function in
//! `stages`. Rule order matters: speaker aliases run top to bottom over the
//! whole text, so earlier rewrites are never re-matched by later rules in a
//! way that changes them.

use std::sync::LazyLock;

use regex::Regex;

/// Timestamp forms like `[00:15]`, `(12:45)`, `10:30`, or `00:00:05`
pub static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\(]?\d{1,2}:\d{2}(?::\d{2})?[\]\)]?").unwrap());

/// Speaker-notation rewrites, in application order.
///
/// Asterisk-wrapped diarizer output (`*Speaker 1: *`) first, then bare role
/// names. Single-letter aliases require a colon so plain prose is left alone.
pub static SPEAKER_ALIASES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\*Speaker 1:\s*\*", "Interviewer: "),
        (r"(?i)\*Speaker 2:\s*\*", "Expert: "),
        (r"(?i)\b(?:Interviewer|Questioner)[\s:]+", "Interviewer: "),
        (r"(?i)\bQ:\s*", "Interviewer: "),
        (r"(?i)\b(?:Expert|Subject|Respondent)[\s:]+", "Expert: "),
        (r"(?i)\bA:\s*", "Expert: "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (compile(pattern), replacement))
    .collect()
});

/// Filler words and phrases deleted outright, not replaced.
///
/// Deleting mid-sentence fillers leaves odd spacing and run-on commas; that
/// lossy output is the contract, later stages only collapse whitespace.
pub static DISFLUENCIES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bum+\b",
        r"\buh+\b",
        r"\blike\b",
        r"\byou know\b",
        r"\bI mean\b",
        r"\bso\b",
        r"\bjust\b",
        r"\bkind of\b",
        r"\bsort of\b",
        r"\bliterally\b",
        r"\bbasically\b",
    ]
    .iter()
    .map(|pattern| compile(&format!("(?i){pattern}")))
    .collect()
});

/// A period followed by a lowercase sentence start, e.g. `". and"`
pub static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| compile(r"\.\s+([a-z])"));

/// Word tokens, used when collapsing adjacent duplicate words
pub static WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\w+"));

/// Whitespace runs collapsed to a single space during paragraph cleanup
pub static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// Whitespace preceding punctuation, dropped during paragraph cleanup
pub static SPACE_BEFORE_PUNCT: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+([,.;:!?])"));

/// A canonicalized speaker line: `Interviewer: ...` or `Expert: ...`
pub static SPEAKER_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(Interviewer|Expert):\s*(.*)$"));

/// Phrases that signal a topic change and open a new section
pub const SECTION_MARKERS: [&str; 6] = [
    "let's move on to",
    "next topic",
    "another question",
    "next question",
    "changing subjects",
    "moving forward",
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid built-in pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        assert!(!SPEAKER_ALIASES.is_empty());
        assert_eq!(DISFLUENCIES.len(), 11);
        assert!(TIMESTAMP.is_match("[00:15]"));
    }

    #[test]
    fn test_timestamp_forms() {
        for form in ["[00:15]", "(12:45)", "10:30", "00:00:05"] {
            assert!(TIMESTAMP.is_match(form), "should match {form}");
        }
        assert!(!TIMESTAMP.is_match("since 2009"));
    }

    #[test]
    fn test_speaker_line_forms() {
        let caps = SPEAKER_LINE.captures("Interviewer: So tell me.").unwrap();
        assert_eq!(&caps[1], "Interviewer");
        assert_eq!(&caps[2], "So tell me.");

        let caps = SPEAKER_LINE.captures("expert:").unwrap();
        assert_eq!(&caps[1], "expert");
        assert_eq!(&caps[2], "");

        assert!(!SPEAKER_LINE.is_match("Moderator: hello"));
        assert!(!SPEAKER_LINE.is_match("mid-line Interviewer: hello"));
    }

    #[test]
    fn test_single_letter_aliases_need_colon() {
        assert!(SPEAKER_ALIASES.iter().any(|(re, _)| re.is_match("Q: why?")));
        assert!(!SPEAKER_ALIASES.iter().any(|(re, _)| re.is_match("A question arose")));
    }
}
