use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::io::{HumanDocument, MachineTranscript, TranscriptMetadata};
use crate::models::CleanedTranscript;

/// Configuration for stage 4 rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to generate the human-readable markdown document
    pub generate_human: bool,
    /// Whether to generate the machine-readable JSON rendition
    pub generate_machine: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            generate_human: true,
            generate_machine: true,
        }
    }
}

/// Result of stage 4 rendering
#[derive(Debug)]
pub struct RenderResult {
    /// Path to the human document (if generated)
    pub human_path: Option<PathBuf>,
    /// Path to the machine transcript (if generated)
    pub machine_path: Option<PathBuf>,
}

/// Execute stage 4: rendering
///
/// Produces up to two views of the cleaned transcript:
/// 1. Human document: markdown with title, section headings, bold speaker labels
/// 2. Machine transcript: JSON with sections, utterances, and run metadata
pub fn execute_render(
    transcript: &CleanedTranscript,
    metadata: TranscriptMetadata,
    human_output: Option<&Path>,
    machine_output: Option<&Path>,
    config: &RenderConfig,
) -> Result<RenderResult> {
    let mut result = RenderResult {
        human_path: None,
        machine_path: None,
    };

    if config.generate_human {
        if let Some(path) = human_output {
            info!("Writing cleaned document to {:?}", path);
            HumanDocument::new(transcript).write_file(path)?;
            result.human_path = Some(path.to_path_buf());
        }
    }

    if config.generate_machine {
        if let Some(path) = machine_output {
            info!("Writing machine transcript to {:?}", path);
            let machine = MachineTranscript::from_transcript(transcript, metadata);
            machine.write_json(path)?;
            result.machine_path = Some(path.to_path_buf());
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{Section, Speaker, Utterance};

    fn transcript() -> CleanedTranscript {
        CleanedTranscript {
            title: "Cleaned Interview Transcript".to_string(),
            sections: vec![Section {
                utterances: vec![Utterance::new(Some(Speaker::Expert), "Done.")],
            }],
        }
    }

    fn metadata() -> TranscriptMetadata {
        TranscriptMetadata {
            paragraphs: 1,
            sections: 1,
            timestamps_removed: 0,
            fillers_removed: 0,
            repeats_collapsed: 0,
            cleaned_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert!(config.generate_human);
        assert!(config.generate_machine);
    }

    #[test]
    fn test_renders_both_views() {
        let dir = tempfile::tempdir().unwrap();
        let human = dir.path().join("out.md");
        let machine = dir.path().join("out.json");

        let result = execute_render(
            &transcript(),
            metadata(),
            Some(&human),
            Some(&machine),
            &RenderConfig::default(),
        )
        .unwrap();

        assert_eq!(result.human_path.as_deref(), Some(human.as_path()));
        assert_eq!(result.machine_path.as_deref(), Some(machine.as_path()));
        assert!(human.exists());
        assert!(machine.exists());
    }

    #[test]
    fn test_skips_machine_view_without_path() {
        let dir = tempfile::tempdir().unwrap();
        let human = dir.path().join("out.md");

        let result = execute_render(
            &transcript(),
            metadata(),
            Some(&human),
            None,
            &RenderConfig::default(),
        )
        .unwrap();

        assert!(result.machine_path.is_none());
        assert!(human.exists());
    }
}
