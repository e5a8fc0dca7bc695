mod cli;
mod commands;
mod config;
mod credentials;
mod render;

use clap::Parser;
use cli::Cli;
use commands::Completion;
use config::RuntimeConfig;
use credentials::{CredentialStore, ShellLaunch};
use pkg_client::HttpTransport;
use std::io::Write;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Merge: CLI args / env > config file > defaults
    let config = RuntimeConfig::load(&cli)?;
    init_tracing(config.debug);
    info!("API base: {}", config.api_base);
    info!("Token:    {}***", config.token.chars().take(4).collect::<String>());

    let transport = HttpTransport::new(&config.api_base, &config.token)?;
    let store = CredentialStore::temp();
    let mut stdout = std::io::stdout();

    let completion = commands::run(cli.command, &transport, &store, &mut stdout).await?;
    stdout.flush()?;

    let code = match completion {
        Completion::Handoff(path) => ShellLaunch::from_env(path)?.run().await?,
        other => other.exit_code(),
    };
    Ok(ExitCode::from(code))
}

/// Logs go to stderr so command output on stdout stays pipeable.
/// `--debug` turns on request/response dumps regardless of `RUST_LOG`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("warn,k8spin=debug,pkg_client=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
