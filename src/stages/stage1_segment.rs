use crate::models::{Speaker, Utterance};
use crate::rules;

/// Result of stage 1 speaker segmentation
#[derive(Debug)]
pub struct SegmentResult {
    /// Attributed blocks in original speaking order
    pub utterances: Vec<Utterance>,
    /// Non-blank lines absorbed into an open block
    pub continuation_lines: usize,
}

/// Execute stage 1: speaker segmentation
///
/// Scans normalized text line by line. A line matching
/// `Interviewer:`/`Expert:` opens a new attributed block; any other
/// non-blank line continues the open block, or becomes a speaker-less
/// preamble utterance when no block is open yet. Blank lines are skipped.
///
/// A transcript with no recognized speaker line at all collapses into
/// speaker-less utterances only. That is accepted output, not an error.
pub fn segment(text: &str) -> SegmentResult {
    let mut utterances = Vec::new();
    let mut continuation_lines = 0;
    let mut current: Option<(Speaker, Vec<String>)> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let attributed = rules::SPEAKER_LINE.captures(line).and_then(|caps| {
            let speaker = Speaker::from_label(caps.get(1)?.as_str())?;
            let content = caps.get(2).map(|m| m.as_str().trim().to_string());
            Some((speaker, content))
        });

        match attributed {
            Some((speaker, content)) => {
                flush(&mut utterances, current.take());
                let mut parts = Vec::new();
                if let Some(content) = content.filter(|c| !c.is_empty()) {
                    parts.push(content);
                }
                current = Some((speaker, parts));
            }
            None => match current.as_mut() {
                Some((_, parts)) => {
                    parts.push(line.to_string());
                    continuation_lines += 1;
                }
                None => utterances.push(Utterance::new(None, line)),
            },
        }
    }

    flush(&mut utterances, current);

    SegmentResult {
        utterances,
        continuation_lines,
    }
}

/// Close the open block, if it accumulated any content
fn flush(utterances: &mut Vec<Utterance>, current: Option<(Speaker, Vec<String>)>) {
    if let Some((speaker, parts)) = current {
        if !parts.is_empty() {
            utterances.push(Utterance::new(Some(speaker), parts.join(" ")));
        }
    }
}
