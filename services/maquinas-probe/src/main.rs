// services/maquinas-probe/src/main.rs
//
// maquinas-probe - checks the stored access token against /api/maquinas
//
// Run with: cargo run --bin maquinas-probe -- --token <jwt>
//

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maquinas_probe::{load_config, ReqwestMaquinasApi, TokenSource};
use svckit::diagnostics::{
    probe_maquinas, ApiMaquinaService, DiagnosticHarness, HarnessOutcome, MaquinaService,
    ProbeOutcome, TracingLog,
};

#[derive(Parser, Debug)]
#[command(name = "maquinas-probe")]
#[command(about = "Checks the stored access token against GET /api/maquinas")]
#[command(version)]
struct Args {
    #[arg(short, long, default_value = "config/maquinas-probe.yaml")]
    config: String,

    /// Token to use instead of the storage file
    #[arg(long, env = "FROTA_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// localStorage export (JSON object) to read the token from
    #[arg(long)]
    storage_file: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default)]
enum Command {
    /// Look up the token and issue one GET /api/maquinas (default)
    #[default]
    Probe,
    /// Build the machine service and call its list operation once
    TestService,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let level = &config.observability.log_level;
                format!("maquinas_probe={level},diagnostics={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let storage_file = args
        .storage_file
        .unwrap_or_else(|| PathBuf::from(&config.storage_file));
    let source = TokenSource::resolve(args.token, &config.api.token_key, storage_file);
    let api = ReqwestMaquinasApi::new(&config.api)?;

    info!("Target: {}", api.url());

    let ok = match args.command.unwrap_or_default() {
        Command::Probe => {
            let outcome = probe_maquinas(&source, &config.api.token_key, &api, &TracingLog).await;
            matches!(outcome, ProbeOutcome::Listed { .. })
        }
        Command::TestService => {
            let token_key = config.api.token_key.clone();
            let harness = DiagnosticHarness::from_fn(move || {
                let service: Box<dyn MaquinaService> = Box::new(ApiMaquinaService::new(
                    source.clone(),
                    &token_key,
                    api.clone(),
                ));
                Ok(service)
            });

            matches!(harness.test_service(&TracingLog).await, HarnessOutcome::Listed { .. })
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
