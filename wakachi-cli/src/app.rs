//! CLI run logic
//!
//! Everything that happens after argument parsing, factored out of
//! `main` so the rejection paths can be exercised in tests without
//! spawning the binary. `run` returns the process exit code for
//! argument rejections and propagates everything else as a fatal
//! error.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use crate::validate::check_files;
use wakachi_core::{PipelineStages, WordSeparator};

#[derive(Parser)]
#[command(name = "wakachi")]
#[command(about = "Word-separate a raw text file into a cleaned, space-joined token stream")]
pub struct Args {
    /// Configuration file path. (ex. config.json)
    #[arg(short, long)]
    pub config: String,

    /// Input file(s)
    #[arg(short, long, num_args = 1.., required = true)]
    pub input: Vec<String>,

    /// Output file(s)
    #[arg(short, long, num_args = 1.., required = true)]
    pub output: Vec<String>,

    /// Enable detailed profiling of all pipeline steps
    #[arg(long)]
    pub profile: bool,

    /// Dump all intermediate pipeline stage outputs to a directory
    /// Captures: rendered text, normalized text, joined tokens, and the final result
    #[arg(long)]
    pub dump_stages: Option<String>,
}

/// Validate and execute one invocation.
pub fn run(args: &Args) -> Result<i32> {
    // Parsed and echoed, never consulted - but a file that fails to
    // parse still aborts the run before any transform I/O.
    let config = wakachi_core::config::load_config(Path::new(&args.config))?;
    println!("config:{config}");

    if let Err(e) = check_files(&args.input, &args.output) {
        eprintln!("{e}");
        return Ok(1);
    }

    // The capture path records stage boundaries, not timings
    if args.profile && args.dump_stages.is_some() {
        eprintln!("--profile cannot be combined with --dump-stages");
        return Ok(1);
    }

    let separator = WordSeparator::new_embedded()?;
    println!("📖 Using {} segmenter", separator.segmenter_name());

    let input = Path::new(&args.input[0]);
    let output = Path::new(&args.output[0]);

    // Stage dump mode: capture and save all intermediates, then append
    // the final text as a normal run would
    if let Some(stages_dir) = &args.dump_stages {
        println!("\n🔬 Pipeline stage dump mode");
        let raw = std::fs::read_to_string(input)
            .with_context(|| format!("failed to read input file: {}", input.display()))?;
        let stages = separator.capture_stages(&raw)?;
        save_stages(&stages, stages_dir)?;
        wakachi_core::writer::append_text(output, &stages.preprocessed)?;
        println!("\n✅ All stages dumped to: {stages_dir}");
    } else {
        let preprocessed =
            separator.separate_file_with_profiling(input, output, args.profile)?;
        println!(
            "💾 Appended {} bytes to: {}",
            preprocessed.len(),
            output.display()
        );
    }

    Ok(0)
}

fn save_stages(stages: &PipelineStages, output_dir: &str) -> Result<()> {
    use std::fs;
    fs::create_dir_all(output_dir)?;

    let rendered_path = format!("{}/stage1_rendered.txt", output_dir);
    fs::write(&rendered_path, &stages.rendered)?;
    println!("  💾 {}", rendered_path);

    let normalized_path = format!("{}/stage2_normalized.txt", output_dir);
    fs::write(&normalized_path, &stages.normalized)?;
    println!("  💾 {}", normalized_path);

    let joined_path = format!("{}/stage3_joined.txt", output_dir);
    fs::write(&joined_path, &stages.joined)?;
    println!("  💾 {} ({} tokens)", joined_path, stages.token_count);

    let preprocessed_path = format!("{}/stage4_preprocessed.txt", output_dir);
    fs::write(&preprocessed_path, &stages.preprocessed)?;
    println!("  💾 {}", preprocessed_path);

    // Summary file: quick reference for validation scripts
    let summary = serde_json::json!({
        "stage_counts": {
            "rendered_bytes": stages.rendered.len(),
            "normalized_bytes": stages.normalized.len(),
            "token_count": stages.token_count,
            "joined_bytes": stages.joined.len(),
            "preprocessed_bytes": stages.preprocessed.len(),
        }
    });
    let summary_path = format!("{}/summary.json", output_dir);
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    println!("  💾 {}", summary_path);

    Ok(())
}
