use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use agentmeta::access::parse_object;
use agentmeta::{
    chain_name, contract_addresses, ingest_feedback_file, ingest_registration, EntityStore,
    FeedbackContext, InMemoryStore, RegistrationFile,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "agentmeta=info";

#[derive(Parser, Debug)]
#[command(name = "agentmeta", version, about = "Agent document normalizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode an agent registration document and print the record
    Registration {
        /// Registration record id
        #[arg(long)]
        id: String,
        /// Previously stored record (JSON) to decode over
        #[arg(long)]
        existing: Option<PathBuf>,
        /// Registration document
        file: PathBuf,
    },
    /// Decode a feedback file and print the persisted record
    Feedback {
        /// Content identifier of the document
        #[arg(long)]
        cid: String,
        /// JSON object with feedbackId, txHash, tag1OnChain, tag2OnChain, timestamp
        #[arg(long)]
        context: PathBuf,
        /// Feedback document
        file: PathBuf,
    },
    /// Print the registry deployment for a chain
    Chain {
        /// Numeric chain id
        chain_id: u64,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    AgentMeta(#[from] agentmeta::AgentMetaError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid record file {path}: {source}")]
    InvalidRecord {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to render record: {0}")]
    Render(serde_json::Error),
    #[error("record {0} was not persisted")]
    NotPersisted(String),
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Registration { id, existing, file } => {
            cmd_registration(&id, existing.as_deref(), &file)
        }
        Commands::Feedback { cid, context, file } => cmd_feedback(&cid, &context, &file),
        Commands::Chain { chain_id } => cmd_chain(chain_id),
    }
}

fn cmd_registration(id: &str, existing: Option<&Path>, path: &Path) -> Result<(), CliError> {
    let mut store = InMemoryStore::new();
    if let Some(existing) = existing {
        let mut record: RegistrationFile = read_record(existing)?;
        record.id = id.to_string();
        store.save_registration(record);
    }

    let content = fs::read(path)?;
    let record = ingest_registration(&mut store, id, &content);
    write_json(&record)
}

fn cmd_feedback(cid: &str, context: &Path, path: &Path) -> Result<(), CliError> {
    let entries = parse_object(&fs::read(context)?)?;
    let ctx = FeedbackContext::from_entries(&entries)?;
    debug!(tx_hash = %ctx.tx_hash, "loaded feedback context");

    let mut store = InMemoryStore::new();
    let content = fs::read(path)?;
    let id = ingest_feedback_file(&mut store, cid, &ctx, &content);
    let record = store
        .feedback_file(&id)
        .ok_or_else(|| CliError::NotPersisted(id.clone()))?;
    write_json(record)
}

fn cmd_chain(chain_id: u64) -> Result<(), CliError> {
    let contracts = contract_addresses(chain_id);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "name={}", chain_name(chain_id))?;
    writeln!(stdout, "identity_registry={}", contracts.identity_registry)?;
    writeln!(stdout, "reputation_registry={}", contracts.reputation_registry)?;
    writeln!(stdout, "validation_registry={}", contracts.validation_registry)?;
    Ok(())
}

fn read_record<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(|source| CliError::InvalidRecord {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let mut rendered = serde_json::to_string_pretty(value).map_err(CliError::Render)?;
    rendered.push('\n');
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    Ok(())
}
