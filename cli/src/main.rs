use clap::Parser;
use tracing_subscriber::EnvFilter;

use campus_cli::CliError;
use campus_cli::commands::{Cli, execute};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = execute(cli).await?;
    println!("{output}");
    Ok(())
}
