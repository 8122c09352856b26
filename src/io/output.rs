use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DocumentError;
use crate::models::CleanedTranscript;

/// Machine-readable rendition of a cleaned transcript
#[derive(Debug, Clone, Serialize)]
pub struct MachineTranscript {
    pub title: String,
    pub sections: Vec<MachineSection>,
    pub metadata: TranscriptMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineSection {
    /// Heading shown in the human document; `None` for the opening section
    pub heading: Option<String>,
    pub utterances: Vec<MachineUtterance>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineUtterance {
    pub speaker: Option<String>,
    pub text: String,
}

/// Metadata about the cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptMetadata {
    pub paragraphs: usize,
    pub sections: usize,
    pub timestamps_removed: usize,
    pub fillers_removed: usize,
    pub repeats_collapsed: usize,
    pub cleaned_at: DateTime<Utc>,
}

impl MachineTranscript {
    /// Build from a cleaned transcript plus run metadata
    pub fn from_transcript(transcript: &CleanedTranscript, metadata: TranscriptMetadata) -> Self {
        let sections = transcript
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| MachineSection {
                heading: (i > 0).then(|| section_heading(i)),
                utterances: section
                    .utterances
                    .iter()
                    .map(|u| MachineUtterance {
                        speaker: u.speaker.map(|s| s.label().to_string()),
                        text: u.text.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: transcript.title.clone(),
            sections,
            metadata,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<(), DocumentError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| DocumentError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

        std::fs::write(path, json).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Human-readable markdown rendition of a cleaned transcript
pub struct HumanDocument<'a> {
    transcript: &'a CleanedTranscript,
}

impl<'a> HumanDocument<'a> {
    pub fn new(transcript: &'a CleanedTranscript) -> Self {
        Self { transcript }
    }

    /// Format as markdown: title heading, a `Section N: Topic N` heading for
    /// each section after the first, one paragraph per utterance with a bold
    /// speaker label (or bare text for speaker-less preamble), and blank
    /// lines separating paragraphs and sections.
    pub fn format(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n", self.transcript.title));

        for (i, section) in self.transcript.sections.iter().enumerate() {
            if i > 0 {
                out.push_str(&format!("\n## {}\n", section_heading(i)));
            }

            for utterance in &section.utterances {
                out.push('\n');
                match utterance.speaker {
                    Some(speaker) => {
                        out.push_str(&format!("**{}:** {}\n", speaker.label(), utterance.text));
                    }
                    None => {
                        out.push_str(&utterance.text);
                        out.push('\n');
                    }
                }
            }
        }

        out
    }

    /// Write to a markdown file. On failure nothing is claimed as written.
    pub fn write_file(&self, path: &Path) -> Result<(), DocumentError> {
        std::fs::write(path, self.format()).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Heading for the i-th section (the opening section carries none)
fn section_heading(index: usize) -> String {
    format!("Section {index}: Topic {index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, Speaker, Utterance};

    fn sample_transcript() -> CleanedTranscript {
        CleanedTranscript {
            title: "Cleaned Interview Transcript".to_string(),
            sections: vec![
                Section {
                    utterances: vec![
                        Utterance::new(None, "Recorded on site."),
                        Utterance::new(Some(Speaker::Interviewer), "Who are you?"),
                        Utterance::new(Some(Speaker::Expert), "A professor."),
                    ],
                },
                Section {
                    utterances: vec![Utterance::new(
                        Some(Speaker::Interviewer),
                        "Let's move on to the next topic.",
                    )],
                },
            ],
        }
    }

    fn metadata() -> TranscriptMetadata {
        TranscriptMetadata {
            paragraphs: 4,
            sections: 2,
            timestamps_removed: 1,
            fillers_removed: 2,
            repeats_collapsed: 0,
            cleaned_at: Utc::now(),
        }
    }

    #[test]
    fn test_markdown_layout() {
        let binding = sample_transcript();
        let doc = HumanDocument::new(&binding);
        let text = doc.format();

        assert!(text.starts_with("# Cleaned Interview Transcript\n"));
        assert!(text.contains("\nRecorded on site.\n"));
        assert!(text.contains("**Interviewer:** Who are you?"));
        assert!(text.contains("**Expert:** A professor."));
        assert!(text.contains("## Section 1: Topic 1"));
        // The opening section has no heading of its own
        assert!(!text.contains("Section 0"));
    }

    #[test]
    fn test_write_markdown_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");

        HumanDocument::new(&sample_transcript()).write_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("**Expert:** A professor."));
    }

    #[test]
    fn test_unwritable_path_is_write_error() {
        let transcript = sample_transcript();
        let err = HumanDocument::new(&transcript)
            .write_file(Path::new("/nonexistent/dir/out.md"))
            .unwrap_err();

        assert!(matches!(err, DocumentError::Write { .. }));
    }

    #[test]
    fn test_machine_transcript_shape() {
        let machine = MachineTranscript::from_transcript(&sample_transcript(), metadata());

        assert_eq!(machine.sections.len(), 2);
        assert_eq!(machine.sections[0].heading, None);
        assert_eq!(
            machine.sections[1].heading.as_deref(),
            Some("Section 1: Topic 1")
        );
        assert_eq!(machine.sections[0].utterances[0].speaker, None);
        assert_eq!(
            machine.sections[0].utterances[1].speaker.as_deref(),
            Some("Interviewer")
        );
    }

    #[test]
    fn test_machine_transcript_serializes() {
        let machine = MachineTranscript::from_transcript(&sample_transcript(), metadata());
        let json = serde_json::to_string(&machine).unwrap();

        assert!(json.contains("\"title\""));
        assert!(json.contains("\"cleaned_at\""));
        assert!(json.contains("\"Interviewer\""));
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let machine = MachineTranscript::from_transcript(&sample_transcript(), metadata());

        machine.write_json(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"sections\""));
    }
}
