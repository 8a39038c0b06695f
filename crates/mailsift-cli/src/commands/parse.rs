//! Parse command - extract data from a single email file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use mailsift_core::models::config::SiftConfig;
use mailsift_core::models::template::Template;
use mailsift_core::models::value::{FieldValue, ParsedData};
use mailsift_core::{GenericExtraction, GenericExtractor, TemplateExtractor};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input email file (plain text; `-` for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Template file (JSON); omit to run generic extraction
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Print extraction warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let body = read_input(&args.input)?;

    info!("Parsing {} characters of email text", body.len());

    let (output, warnings) = if let Some(template_path) = &args.template {
        let template = load_template(template_path)?;
        debug!(
            "Loaded template '{}' with {} fields",
            template.name,
            template.fields.len()
        );

        let extractor = TemplateExtractor::from_config(&config.extraction);
        let report = extractor.parse(&body, &template);

        (
            format_parsed(&report.data, args.format, args.pretty)?,
            report.warnings,
        )
    } else {
        let extractor = GenericExtractor::from_config(&config.extraction);
        let extraction = extractor.extract(&body);

        (format_generic(&extraction, args.format, args.pretty)?, Vec::new())
    };

    if args.show_warnings && !warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &warnings {
            eprintln!("  - {}", warning);
        }
    }

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<SiftConfig> {
    Ok(match config_path {
        Some(path) => SiftConfig::from_file(Path::new(path))?,
        None => SiftConfig::default(),
    })
}

pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        return Ok(body);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}

pub(crate) fn load_template(path: &Path) -> anyhow::Result<Template> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read template {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid template {}: {}", path.display(), e))
}

fn format_parsed(data: &ParsedData, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(data, pretty),
        OutputFormat::Text => {
            let mut output = String::new();
            for (name, value) in data {
                output.push_str(&format!("{}: {}\n", name, render_value(value)));
            }
            Ok(output)
        }
    }
}

fn format_generic(
    extraction: &GenericExtraction,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(extraction, pretty),
        OutputFormat::Text => {
            let mut output = String::new();

            if !extraction.key_value_pairs.is_empty() {
                output.push_str("Key-value pairs:\n");
                for (key, value) in &extraction.key_value_pairs {
                    output.push_str(&format!("  {}: {}\n", key, value));
                }
            }

            let dates: Vec<String> = extraction.dates.iter().map(|d| d.to_string()).collect();
            push_section(&mut output, "Dates (epoch ms)", &dates);

            let amounts: Vec<String> = extraction
                .amounts
                .iter()
                .map(|a| format!("{} {}", a.amount, a.currency))
                .collect();
            push_section(&mut output, "Amounts", &amounts);

            push_section(&mut output, "URLs", &extraction.urls);
            push_section(&mut output, "Names", &extraction.names);
            push_section(&mut output, "Email addresses", &extraction.email_addresses);
            push_section(&mut output, "Phone numbers", &extraction.phone_numbers);

            Ok(output)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn push_section(output: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("{}:\n", label));
    for item in items {
        output.push_str(&format!("  {}\n", item));
    }
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "-".to_string(),
        FieldValue::Boolean(flag) => flag.to_string(),
        FieldValue::Number(number) => number.to_string(),
        FieldValue::Currency(amount) => format!("{} {}", amount.amount, amount.currency),
        FieldValue::List(items) => items.join(", "),
        FieldValue::Text(text) => text.clone(),
    }
}
