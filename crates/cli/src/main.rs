use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "clarify")]
#[command(about = "Chat with your documentation and spreadsheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive documentation chat: ingest a document, then ask questions
    Chat {
        /// Document link to ingest
        #[arg(short, long)]
        url: Option<String>,
        /// Collection name the document is ingested into
        #[arg(short, long)]
        collection: Option<String>,
        /// Route questions to the agent endpoint (no ingestion required)
        #[arg(long)]
        agent: bool,
    },
    /// Interactive spreadsheet chat against a Google Sheet
    Sheet {
        /// Spreadsheet id (44 characters)
        #[arg(long)]
        sheet_id: String,
        /// API key; falls back to the keystore, then CLARIFY_API_KEY
        #[arg(long)]
        api_key: Option<String>,
    },
    /// One-shot agent-search question, answer printed to stdout
    Ask {
        question: String,
    },
    /// Cookie-authenticated portal chat
    Portal {
        /// Portal password
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Chat { url, collection, agent } => commands::chat::run(url, collection, agent).await,
        Commands::Sheet { sheet_id, api_key } => commands::sheet::run(&sheet_id, api_key).await,
        Commands::Ask { question } => commands::ask::run(&question).await,
        Commands::Portal { password } => commands::portal::run(&password).await,
    }
}
