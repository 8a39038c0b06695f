//! Batch processing command for multiple email files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use mailsift_core::models::template::Template;
use mailsift_core::{GenericExtractor, TemplateExtractor};

use super::parse::{load_config, load_template};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (*.txt / *.eml)
    #[arg(required = true)]
    input: String,

    /// Template file (JSON); omit to run generic extraction
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory (default: next to each input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also emit a summary JSON with per-file results
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
#[derive(Serialize)]
struct FileResult {
    path: PathBuf,
    ok: bool,
    warnings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "eml")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let template = match &args.template {
        Some(path) => Some(load_template(path)?),
        None => None,
    };

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let template_extractor = TemplateExtractor::from_config(&config.extraction);
    let generic_extractor = GenericExtractor::from_config(&config.extraction);

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match process_single_file(&path, template.as_ref(), &template_extractor, &generic_extractor, &args)
        {
            Ok(warning_count) => {
                debug!("Processed {} with {} warnings", path.display(), warning_count);
                results.push(FileResult {
                    path,
                    ok: true,
                    warnings: warning_count,
                    error: None,
                });
            }
            Err(err) => {
                if !args.continue_on_error {
                    pb.finish_and_clear();
                    return Err(err.context(format!("Failed to process {}", path.display())));
                }
                warn!("Failed to process {}: {}", path.display(), err);
                results.push(FileResult {
                    path,
                    ok: false,
                    warnings: 0,
                    error: Some(err.to_string()),
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let failed = results.iter().filter(|r| !r.ok).count();
    println!(
        "{} Processed {} files in {:.1}s ({} failed)",
        style("✓").green(),
        results.len(),
        start.elapsed().as_secs_f32(),
        failed
    );

    if args.summary {
        let summary_json = serde_json::to_string_pretty(&results)?;
        if let Some(ref output_dir) = args.output_dir {
            let summary_path = output_dir.join("summary.json");
            fs::write(&summary_path, &summary_json)?;
            println!(
                "{} Summary written to {}",
                style("✓").green(),
                summary_path.display()
            );
        } else {
            println!("{}", summary_json);
        }
    }

    Ok(())
}

fn process_single_file(
    path: &PathBuf,
    template: Option<&Template>,
    template_extractor: &TemplateExtractor,
    generic_extractor: &GenericExtractor,
    args: &BatchArgs,
) -> anyhow::Result<usize> {
    let body = fs::read_to_string(path)?;

    let (json, warning_count) = match template {
        Some(template) => {
            let report = template_extractor.parse(&body, template);
            (serde_json::to_string_pretty(&report.data)?, report.warnings.len())
        }
        None => {
            let extraction = generic_extractor.extract(&body);
            (serde_json::to_string_pretty(&extraction)?, 0)
        }
    };

    let output_path = match &args.output_dir {
        Some(dir) => {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
            dir.join(stem).with_extension("json")
        }
        None => path.with_extension("json"),
    };
    fs::write(&output_path, json)?;

    Ok(warning_count)
}
