//! Parse command handler

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::io::{self, Write};

use super::{OutputFormat, ParseCommands};
use crate::cli::commands::load_prompt_batch;
use crate::ingest::PromptBatch;

pub fn handle_parse_command(args: ParseCommands) -> Result<()> {
    let batch = load_prompt_batch(&args.file)?;
    let rendered = render_batch(&batch, args.format)?;

    // stdout carries only the rendered body
    eprintln!(
        "{}",
        "Excel file successfully parsed to required format".bright_green()
    );

    if let Some(output_path) = args.output {
        fs::write(&output_path, &rendered)
            .with_context(|| format!("Failed to write output to: {}", output_path.display()))?;
        eprintln!(
            "{} prompts saved to: {}",
            batch.len(),
            output_path.display().to_string().bright_green()
        );
    } else {
        write_body(&mut io::stdout().lock(), &rendered)?;
    }

    Ok(())
}

/// Write the rendered body followed by a newline, nothing else
fn write_body<W: Write>(out: &mut W, rendered: &str) -> Result<()> {
    writeln!(out, "{}", rendered).context("Failed to write output")?;
    out.flush().context("Failed to write output")
}

/// Render the batch the way it would be posted (or one prompt per line)
pub fn render_batch(batch: &PromptBatch, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(batch).context("Failed to format JSON output")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(batch).context("Failed to format JSON output")
        }
        OutputFormat::Lines => Ok(batch.prompts.join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> PromptBatch {
        PromptBatch {
            prompts: vec!["VCPU:2,OperatingSystem:RHEL9".to_string(), String::new()],
        }
    }

    #[test]
    fn test_render_compact() {
        assert_eq!(
            render_batch(&batch(), OutputFormat::JsonCompact).unwrap(),
            r#"{"prompts":["VCPU:2,OperatingSystem:RHEL9",""]}"#
        );
    }

    #[test]
    fn test_render_pretty() {
        let rendered = render_batch(&batch(), OutputFormat::Json).unwrap();
        assert!(rendered.starts_with("{\n  \"prompts\": [\n"));
    }

    #[test]
    fn test_render_lines() {
        assert_eq!(
            render_batch(&batch(), OutputFormat::Lines).unwrap(),
            "VCPU:2,OperatingSystem:RHEL9\n"
        );
    }

    #[test]
    fn test_stdout_body_is_valid_json() {
        let rendered = render_batch(&batch(), OutputFormat::JsonCompact).unwrap();
        let mut out = Vec::new();
        write_body(&mut out, &rendered).unwrap();

        let parsed: PromptBatch = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, batch());
    }
}
