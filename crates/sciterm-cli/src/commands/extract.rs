//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sciterm_domain::LookupTerm;
use sciterm_extractor::extract_with_report;
use std::io::Read;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    println!("{}", extract_output(&args.term, &text, formatter)?);
    Ok(())
}

fn extract_output(term: &str, text: &str, formatter: &Formatter) -> Result<String> {
    let term = LookupTerm::new(term);
    if term.is_empty() {
        return Err(CliError::InvalidInput("--term must not be empty".to_string()));
    }
    let report = extract_with_report(&term, text);
    formatter.format_report(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_extract_output_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = extract_output("Cell Division", "1. Mitosis 2. Meiosis", &formatter).unwrap();
        assert_eq!(output, "Mitosis\nMeiosis\nCell Division mechanism");
    }

    #[test]
    fn test_extract_rejects_empty_term() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let result = extract_output("  ", "A, B, C", &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
