use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::info;

use casework_core::config::{Config, load_dotenv};
use casework_core::tracing::{LogFormat, init_tracing};
use casework_records::config::RecordsConfig;
use casework_records::fixtures::FixtureSet;
use casework_records::infra::db::DbDocumentStore;
use casework_records::router::build_router;
use casework_records::state::AppState;
use casework_records::usecase::reset::{ResetDatabaseUseCase, ResetOutcome};

#[derive(Parser)]
#[command(about = "Student, family and intervention records service")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Delete every record and reload the built-in sample data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    load_dotenv();

    let command = args.command.unwrap_or(Command::Serve);
    init_tracing(match command {
        Command::Serve => LogFormat::Json,
        Command::Reset { .. } => LogFormat::Compact,
    });

    let config = RecordsConfig::try_from_env().expect("invalid records configuration");
    let store = DbDocumentStore::open(&config)
        .await
        .expect("failed to open document store");

    match command {
        Command::Serve => serve(config, store).await,
        Command::Reset { yes } => {
            if !yes && !confirm() {
                println!("Aborted.");
                return;
            }
            let usecase = ResetDatabaseUseCase {
                store,
                fixtures: FixtureSet::builtin(),
            };
            let outcome = ResetOutcome::from(&usecase.execute().await);
            println!("{}", outcome.message);
            if !outcome.success {
                std::process::exit(1);
            }
        }
    }
}

async fn serve(config: RecordsConfig, store: DbDocumentStore) {
    let router = build_router(AppState { store });
    let http_addr = format!("0.0.0.0:{}", config.records_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("records service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}

/// Ask for explicit confirmation before wiping every collection.
fn confirm() -> bool {
    print!("This deletes every student, family and intervention record. Type YES to continue: ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => answer.trim() == "YES",
        Err(_) => false,
    }
}
