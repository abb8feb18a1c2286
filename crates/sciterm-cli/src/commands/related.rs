//! Related command implementation.

use super::groq_explainer;
use crate::cli::RelatedArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the related command.
pub async fn execute_related(
    args: RelatedArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let explainer = groq_explainer(config)?;
    let response = explainer.related_terms_response(args.term).await?;
    println!("{}", formatter.format_related(&response)?);
    Ok(())
}
