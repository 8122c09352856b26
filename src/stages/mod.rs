pub mod stage0_normalize;
pub mod stage1_segment;
pub mod stage2_merge;
pub mod stage3_section;
pub mod stage4_render;

pub use stage0_normalize::*;
pub use stage1_segment::*;
pub use stage2_merge::*;
pub use stage3_section::*;
pub use stage4_render::*;

use tracing::info;

use crate::models::{CleanedTranscript, RawTranscript};

/// Configuration for the full cleaning pipeline
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Title placed at the top of the output document
    pub title: String,
    /// Section splitting settings
    pub sections: SectionConfig,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            title: "Cleaned Interview Transcript".to_string(),
            sections: SectionConfig::default(),
        }
    }
}

/// Summary statistics for one pipeline run
#[derive(Debug, Clone)]
pub struct CleanStats {
    pub timestamps_removed: usize,
    pub fillers_removed: usize,
    pub repeats_collapsed: usize,
    pub blocks_merged: usize,
    pub paragraphs: usize,
    pub sections: usize,
}

/// Result of a full pipeline run
#[derive(Debug)]
pub struct CleanResult {
    pub transcript: CleanedTranscript,
    pub stats: CleanStats,
}

/// Run the cleaning pipeline over a raw transcript.
///
/// Normalizer, speaker segmenter, paragraph merger, section splitter, in
/// that order; each stage consumes the whole output of the previous one.
pub fn clean(raw: &RawTranscript, config: &CleanConfig) -> CleanResult {
    let normalized = normalize(&raw.text());
    info!(
        "Normalized: {} timestamps, {} fillers, {} stutters removed",
        normalized.timestamps_removed, normalized.fillers_removed, normalized.repeats_collapsed
    );

    let segmented = segment(&normalized.text);
    info!(
        "Segmented {} blocks ({} continuation lines)",
        segmented.utterances.len(),
        segmented.continuation_lines
    );

    let merged = merge(segmented.utterances);
    info!(
        "Merged into {} paragraphs ({} blocks folded)",
        merged.utterances.len(),
        merged.blocks_merged
    );

    let paragraphs = merged.utterances.len();
    let sectioned = split_sections(merged.utterances, &config.sections);
    info!("Split into {} sections", sectioned.sections.len());

    let stats = CleanStats {
        timestamps_removed: normalized.timestamps_removed,
        fillers_removed: normalized.fillers_removed,
        repeats_collapsed: normalized.repeats_collapsed,
        blocks_merged: merged.blocks_merged,
        paragraphs,
        sections: sectioned.sections.len(),
    };

    CleanResult {
        transcript: CleanedTranscript {
            title: config.title.clone(),
            sections: sectioned.sections,
        },
        stats,
    }
}
