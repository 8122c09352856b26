pub mod error;
pub mod io;
pub mod models;
pub mod rules;
pub mod stages;

pub use error::DocumentError;
pub use io::{load_document, HumanDocument, MachineTranscript, TranscriptMetadata, EXAMPLE_TRANSCRIPT};
pub use models::{CleanedTranscript, RawTranscript, Section, Speaker, Utterance};
pub use stages::{
    clean, execute_render, merge, normalize, segment, split_sections, CleanConfig, CleanResult,
    CleanStats, RenderConfig, RenderResult, SectionConfig,
};
