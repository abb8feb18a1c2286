//! Explain command implementation.

use super::groq_explainer;
use crate::cli::ExplainArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use sciterm_domain::traits::LlmProvider;
use sciterm_explainer::{ExplainRequest, Explainer};

/// Execute the explain command.
pub async fn execute_explain(
    args: ExplainArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let explainer = groq_explainer(config)?;
    let output = explain_with(&explainer, args, formatter).await?;
    println!("{}", output);
    Ok(())
}

async fn explain_with<L: LlmProvider>(
    explainer: &Explainer<L>,
    args: ExplainArgs,
    formatter: &Formatter,
) -> Result<String> {
    let request = ExplainRequest::new(args.term, args.level.as_str()).with_language(args.language);
    let response = explainer.explain(request).await?;
    formatter.format_explanation(&response)
}
