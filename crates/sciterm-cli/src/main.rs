//! Sciterm CLI - explain scientific terms from the command line.

use clap::Parser;
use sciterm_cli::commands;
use sciterm_cli::{init_tracing, Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> sciterm_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load(&config_path)?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Explain(args) => commands::execute_explain(args, &config, &formatter).await?,
        Command::Related(args) => commands::execute_related(args, &config, &formatter).await?,
        Command::Extract(args) => commands::execute_extract(args, &formatter)?,
    }

    Ok(())
}
