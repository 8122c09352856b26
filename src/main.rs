use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use tidyscript::{
    clean, execute_render, load_document, CleanConfig, HumanDocument, RawTranscript, RenderConfig,
    TranscriptMetadata, EXAMPLE_TRANSCRIPT,
};

#[derive(Parser)]
#[command(name = "tidyscript")]
#[command(author, version, about = "Interview transcript cleaning pipeline", long_about = None)]
struct Cli {
    /// Input transcript document (plain text or markdown)
    #[arg(required_unless_present = "example")]
    input: Option<PathBuf>,

    /// Output document path (default: <input stem>_cleaned.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a machine-readable JSON rendition to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Clean a built-in sample transcript and print the result
    #[arg(short, long)]
    example: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Error processing transcript: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run(cli: Cli) -> Result<()> {
    let config = CleanConfig::default();

    if cli.example {
        let raw = RawTranscript::from_text(EXAMPLE_TRANSCRIPT);
        let result = clean(&raw, &config);
        println!("{}", HumanDocument::new(&result.transcript).format());
        return Ok(());
    }

    let Some(input) = cli.input else {
        anyhow::bail!("an input document is required unless --example is given");
    };

    info!("Loading transcript from {:?}", input);
    let raw = load_document(&input)?;
    info!("Loaded {} lines ({} non-blank)", raw.lines.len(), raw.non_blank_lines());

    let result = clean(&raw, &config);
    info!(
        "Cleaned {} paragraphs into {} sections",
        result.stats.paragraphs, result.stats.sections
    );

    let output = cli.output.unwrap_or_else(|| default_output_path(&input));
    let metadata = TranscriptMetadata {
        paragraphs: result.stats.paragraphs,
        sections: result.stats.sections,
        timestamps_removed: result.stats.timestamps_removed,
        fillers_removed: result.stats.fillers_removed,
        repeats_collapsed: result.stats.repeats_collapsed,
        cleaned_at: Utc::now(),
    };

    let rendered = execute_render(
        &result.transcript,
        metadata,
        Some(&output),
        cli.json.as_deref(),
        &RenderConfig::default(),
    )?;

    if let Some(path) = rendered.human_path {
        info!("Cleaned transcript saved to {:?}", path);
    }
    if let Some(path) = rendered.machine_path {
        info!("Machine transcript saved to {:?}", path);
    }

    Ok(())
}

/// `<stem>_cleaned.<ext>` next to the input; extension defaults to `md`
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    let ext = input.extension().and_then(|s| s.to_str()).unwrap_or("md");
    input.with_file_name(format!("{stem}_cleaned.{ext}"))
}
