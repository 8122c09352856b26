use std::path::Path;

use crate::error::DocumentError;
use crate::models::RawTranscript;

/// Built-in sample for `--example`, exercising diarizer asterisk notation,
/// timestamps, fillers, stutters, and a topic-change marker.
pub const EXAMPLE_TRANSCRIPT: &str = "\
*Speaker 1: *So can you please introduce yourself a little bit?
00:00:05 *Speaker 2: *Uh, I'm an associate professor here. I've been here since, uh, 2009, actually. And, um, my research area is, uh, software verification. I mostly work in the the theoretical computer science area.
*Speaker 1: *Let's move on to the next topic. Um, what threats do you study?
*Speaker 2: *Well, you know, mostly hybrid attacks on on critical infrastructure. Basically anything state-sponsored.";

/// Load a paragraph-oriented source document.
///
/// Only plain paragraph text is read; styling in the source is ignored
/// (stray markdown emphasis is stripped later by the normalizer).
pub fn load_document(path: &Path) -> Result<RawTranscript, DocumentError> {
    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(RawTranscript::from_text(&text))
}
