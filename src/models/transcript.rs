use serde::{Deserialize, Serialize};

use super::Speaker;

/// Ordered lines of text extracted from a source document.
///
/// Immutable once loaded; every pipeline stage works on derived data.
#[derive(Debug, Clone)]
pub struct RawTranscript {
    /// Source lines in document order
    pub lines: Vec<String>,
}

impl RawTranscript {
    /// Build from raw document text, preserving line boundaries
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// The full text with original line boundaries
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of lines with any non-whitespace content
    pub fn non_blank_lines(&self) -> usize {
        self.lines.iter().filter(|l| !l.trim().is_empty()).count()
    }
}

/// One attributed block of speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    /// `None` only for preamble/metadata lines before the first recognized speaker
    pub speaker: Option<Speaker>,
    /// Block content, joined across continuation lines
    pub text: String,
}

impl Utterance {
    pub fn new(speaker: Option<Speaker>, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }
}

/// An ordered run of utterances bounded by topic-change markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Utterances in original speaking order; never empty
    pub utterances: Vec<Utterance>,
}

/// The final cleaned transcript, produced once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedTranscript {
    /// Document title
    pub title: String,
    /// Sections in original order
    pub sections: Vec<Section>,
}

impl CleanedTranscript {
    /// Total utterances across all sections
    pub fn utterance_count(&self) -> usize {
        self.sections.iter().map(|s| s.utterances.len()).sum()
    }

    /// Number of sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_transcript_from_text() {
        let raw = RawTranscript::from_text("one\n\ntwo\n   \nthree");
        assert_eq!(raw.lines.len(), 5);
        assert_eq!(raw.non_blank_lines(), 3);
        assert_eq!(raw.text(), "one\n\ntwo\n   \nthree");
    }

    #[test]
    fn test_utterance_counts() {
        let transcript = CleanedTranscript {
            title: "Test".to_string(),
            sections: vec![
                Section {
                    utterances: vec![
                        Utterance::new(Some(Speaker::Interviewer), "Hello."),
                        Utterance::new(Some(Speaker::Expert), "Hi."),
                    ],
                },
                Section {
                    utterances: vec![Utterance::new(None, "End of recording.")],
                },
            ],
        };

        assert_eq!(transcript.section_count(), 2);
        assert_eq!(transcript.utterance_count(), 3);
    }
}
