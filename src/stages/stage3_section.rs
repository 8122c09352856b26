use crate::models::{Section, Utterance};
use crate::rules;

/// Configuration for stage 3 section splitting
#[derive(Debug, Clone)]
pub struct SectionConfig {
    /// Lowercase phrases that open a new section when found in a paragraph
    pub markers: Vec<String>,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            markers: rules::SECTION_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Result of stage 3 section splitting
#[derive(Debug)]
pub struct SectionResult {
    /// Sections in original order; each has at least one utterance
    pub sections: Vec<Section>,
}

/// Execute stage 3: section splitting
///
/// Paragraphs accumulate into the current section. A paragraph whose
/// lowercased text contains any marker phrase flushes the non-empty
/// accumulator and opens a new section that begins with the triggering
/// paragraph; the paragraph itself is never sub-split. End of input flushes
/// the final accumulator. A transcript without markers yields one section.
pub fn split_sections(paragraphs: Vec<Utterance>, config: &SectionConfig) -> SectionResult {
    let mut sections = Vec::new();
    let mut current: Vec<Utterance> = Vec::new();

    for paragraph in paragraphs {
        let lower = paragraph.text.to_lowercase();
        let is_break = config.markers.iter().any(|m| lower.contains(m.as_str()));

        if is_break && !current.is_empty() {
            sections.push(Section {
                utterances: std::mem::take(&mut current),
            });
        }
        current.push(paragraph);
    }

    if !current.is_empty() {
        sections.push(Section { utterances: current });
    }

    SectionResult { sections }
}
