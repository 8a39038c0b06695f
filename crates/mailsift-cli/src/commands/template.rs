//! Template command - inspect and validate template files.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use mailsift_core::models::template::{ExtractionRule, FieldType};

use super::parse::load_template;

/// Arguments for the template command.
#[derive(Args)]
pub struct TemplateArgs {
    #[command(subcommand)]
    command: TemplateCommands,
}

#[derive(Subcommand)]
enum TemplateCommands {
    /// Check a template file for authoring mistakes
    Validate {
        /// Template file (JSON)
        file: PathBuf,
    },

    /// Show a template's fields and rules
    Show {
        /// Template file (JSON)
        file: PathBuf,
    },
}

pub fn run(args: TemplateArgs) -> anyhow::Result<()> {
    match args.command {
        TemplateCommands::Validate { file } => validate(&file),
        TemplateCommands::Show { file } => show(&file),
    }
}

fn validate(file: &Path) -> anyhow::Result<()> {
    let template = load_template(file)?;
    let issues = template.lint();

    if issues.is_empty() {
        println!(
            "{} Template is valid ({} fields)",
            style("✓").green(),
            template.fields.len()
        );
        return Ok(());
    }

    eprintln!("{}", style("Issues:").yellow());
    for issue in &issues {
        eprintln!("  - {}", issue);
    }
    anyhow::bail!("{} issue(s) found in {}", issues.len(), file.display());
}

fn show(file: &Path) -> anyhow::Result<()> {
    let template = load_template(file)?;

    if !template.name.is_empty() {
        println!("{}", style(&template.name).bold());
    }
    if let Some(description) = &template.description {
        println!("{}", description);
    }
    println!();

    for field in &template.fields {
        let required = if field.required { " (required)" } else { "" };
        println!(
            "  {} [{}]{}",
            style(&field.name).cyan(),
            field_type_name(field.field_type),
            required
        );

        match &field.extraction_rules {
            Some(rules) => println!("      {}", describe_rule(rules)),
            None => println!("      no extraction rules"),
        }
    }

    Ok(())
}

fn field_type_name(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Text => "text",
        FieldType::Date => "date",
        FieldType::Number => "number",
        FieldType::Currency => "currency",
        FieldType::Boolean => "boolean",
        FieldType::List => "list",
    }
}

fn describe_rule(rules: &ExtractionRule) -> String {
    let mut parts = Vec::new();

    if let Some(contains) = &rules.contains {
        parts.push(format!("contains {:?}", contains));
    }
    if let Some(regex) = &rules.regex {
        parts.push(format!(
            "regex /{}/{}",
            regex,
            rules.flags.as_deref().unwrap_or("")
        ));
    }
    if let Some(group) = rules.group {
        parts.push(format!("group {}", group));
    }
    if let Some(before) = &rules.before {
        parts.push(format!("before {:?}", before));
    }
    if let Some(after) = &rules.after {
        parts.push(format!("after {:?}", after));
    }
    if let Some(max) = rules.max_length {
        parts.push(format!("max {} bytes", max));
    }
    if let Some(prefix) = &rules.item_prefix {
        parts.push(format!("item prefix {:?}", prefix));
    }

    if parts.is_empty() {
        "no mechanism selected".to_string()
    } else {
        parts.join(", ")
    }
}
