//! fhir-patient: command-line front end for the FHIR Patient client.

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fhir_client::{Bundle, ClientConfig, ClientError, FhirPatientClient, SearchParams};

#[derive(Parser)]
#[command(
    name = "fhir-patient",
    version,
    about = "Search and manage Patient resources on a FHIR server"
)]
struct Cli {
    /// FHIR server base URL (defaults to FHIR_SERVER_URL)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Request timeout in seconds (defaults to FHIR_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search patients by name and/or phone number
    Search {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        count: Option<u32>,
    },
    /// Read a patient by id
    Get { id: String },
    /// Create a patient from a JSON file ("-" for stdin)
    Create { file: String },
    /// Replace a patient from a JSON file ("-" for stdin)
    Update { id: String, file: String },
    /// Delete a patient by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(ClientError::Server {
                outcome: Some(outcome),
                ..
            }) = e.downcast_ref::<ClientError>()
            {
                if let Some(diagnostics) = outcome.diagnostics() {
                    tracing::error!(%diagnostics, "Server returned OperationOutcome");
                }
            }
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Some(std::time::Duration::from_secs(secs));
    }

    let client = FhirPatientClient::from_config(&config)?;
    let server = config.server_url.as_str();

    let output = match cli.command {
        Command::Search { name, phone, count } => {
            let params = SearchParams { name, phone, count };
            let bundle = client.search(server, &params).await?;
            match Bundle::from_value(&bundle) {
                Ok(view) => tracing::info!(
                    total = ?view.total,
                    returned = view.resources().count(),
                    "Search complete"
                ),
                Err(e) => tracing::warn!(error = %e, "Search response is not a Bundle"),
            }
            Some(bundle)
        }
        Command::Get { id } => Some(client.get(server, &id).await?),
        Command::Create { file } => {
            let patient = read_json(&file)?;
            Some(client.create(server, &patient).await?)
        }
        Command::Update { id, file } => {
            let patient = read_json(&file)?;
            Some(client.update(server, &id, &patient).await?)
        }
        Command::Delete { id } => {
            client.delete(server, &id).await?;
            tracing::info!(%id, "Patient deleted");
            None
        }
    };

    if let Some(value) = output {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

/// Read a JSON document from a path, or stdin when the path is "-"
fn read_json(path: &str) -> anyhow::Result<JsonValue> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path))
}
