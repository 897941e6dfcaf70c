//! Argonaut - Declarative API test runner
//!
//! Command-line entry point: parses arguments, validates the startup
//! configuration (the only class of error allowed to terminate the
//! process), wires the adapters to the orchestrator, and runs the batch.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use argonaut_application::{CallbackNotifier, Reporter, RunConfig, RunMode, Runner};
use argonaut_domain::HostOverrides;
use argonaut_infrastructure::{
    HttpCallbackNotifier, ReqwestHttpClient, discover, load_host_overrides, read_sources,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Declarative API test runner
#[derive(Debug, Parser)]
#[command(name = "argonaut", version, about)]
struct Cli {
    /// Test file or directory (directories are walked recursively)
    #[arg(short = 't', long = "tests", default_value = "./tests")]
    tests: PathBuf,

    /// Callback URL notified of every failure
    #[arg(short = 'u', long = "url")]
    callback: Option<Url>,

    /// Process files and cases in order instead of fanning out
    #[arg(short = 's', long = "sync")]
    sync: bool,

    /// Print failures to the console (only honored with --sync)
    #[arg(short = 'o', long = "output")]
    output: bool,

    /// Host-override config file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if cli.sync { RunMode::Sync } else { RunMode::Async };
    if mode == RunMode::Async && cli.callback.is_none() {
        return Err("asynchronous running requires a callback URL (-u)".into());
    }

    let host_overrides = match &cli.config {
        Some(path) => load_host_overrides(path).await?,
        None => HostOverrides::new(),
    };

    let files = discover(&cli.tests).await?;
    let sources = read_sources(files).await;

    let notifier: Option<Arc<dyn CallbackNotifier>> = match cli.callback {
        Some(endpoint) => Some(Arc::new(HttpCallbackNotifier::new(endpoint)?)),
        None => None,
    };

    let config = RunConfig::new(mode, cli.output, host_overrides);
    let reporter = Arc::new(Reporter::new(config.console_enabled(), notifier));
    let http = Arc::new(ReqwestHttpClient::new()?);

    Runner::new(config, http, reporter).run(sources).await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["argonaut"]);
        assert_eq!(cli.tests, PathBuf::from("./tests"));
        assert!(!cli.sync);
        assert!(!cli.output);
        assert!(cli.callback.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::parse_from([
            "argonaut",
            "-t",
            "suite",
            "-u",
            "http://listener.example.com/results",
            "-s",
            "-o",
        ]);
        assert_eq!(cli.tests, PathBuf::from("suite"));
        assert!(cli.sync);
        assert!(cli.output);
        assert_eq!(
            cli.callback.unwrap().as_str(),
            "http://listener.example.com/results"
        );
    }
}
