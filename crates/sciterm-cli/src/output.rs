//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sciterm_explainer::{ExplainResponse, RelatedTermsResponse};
use sciterm_extractor::ExtractionReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an explanation with its related terms.
    pub fn format_explanation(&self, response: &ExplainResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Quiet => Ok(response.explanation.clone()),
            OutputFormat::Table => {
                let header = self.colorize(
                    &format!("{} ({})", response.term, response.level),
                    "cyan",
                );
                Ok(format!(
                    "{}\n\n{}\n\n{}",
                    header,
                    response.explanation,
                    self.terms_table(&response.relative_terms, 0)
                ))
            }
        }
    }

    /// Format related terms for a lookup.
    pub fn format_related(&self, response: &RelatedTermsResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Quiet => Ok(response.relative_terms.join("\n")),
            OutputFormat::Table => Ok(self.terms_table(&response.relative_terms, response.padded)),
        }
    }

    /// Format an offline extraction report.
    pub fn format_report(&self, report: &ExtractionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "relative_terms": report.terms.as_slice(),
                "extracted": report.extracted,
                "padded": report.padded,
                "resolved_by": report.resolved_by.as_str(),
                "script_gap": report.script_gap,
            }))?),
            OutputFormat::Quiet => Ok(report.terms.as_slice().join("\n")),
            OutputFormat::Table => {
                let mut out = self.terms_table(report.terms.as_slice(), report.padded);
                if report.script_gap {
                    out.push('\n');
                    out.push_str(&self.warning(
                        "Model output is in a non-Latin script; \
                         fallback patterns could not read it",
                    ));
                }
                Ok(out)
            }
        }
    }

    /// Table of terms; the last `padded` rows are marked as fallbacks.
    fn terms_table(&self, terms: &[String], padded: usize) -> String {
        let real = terms.len().saturating_sub(padded);

        let mut builder = Builder::default();
        builder.push_record(["#", "Related term", "Source"]);
        for (idx, term) in terms.iter().enumerate() {
            let source = if idx < real { "model" } else { "fallback" };
            builder.push_record([(idx + 1).to_string(), term.clone(), source.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
