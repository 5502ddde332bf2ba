//! Lendlib - Library Catalog Manager
//!
//! Each invocation loads the snapshot, performs one operation and saves
//! the catalog again if it changed.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lendlib::{
    config::AppConfig,
    error::ErrorCode,
    render,
    repository::{JsonFileStore, Repository},
    services::{BorrowOutcome, ReturnOutcome},
    LibraryService,
};

#[derive(Parser)]
#[command(version, about = "Library catalog manager")]
struct Cli {
    /// Snapshot file, overriding configuration
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a book, or more copies of an existing one
    AddBook { name: String, id: String, quantity: u32 },
    /// Register a user
    AddUser { name: String, id: String },
    /// Lend a book to a user
    Borrow { user: String, book: String },
    /// Take a book back from a user
    Return { user: String, book: String },
    /// List books, optionally those whose name starts with a prefix
    Books {
        #[arg(default_value = "")]
        prefix: String,
    },
    /// List users with the books they hold
    Users,
    /// List users currently holding a book
    Borrowers { book: String },
    /// Add the sample library to the catalog
    Seed,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code.exit_status()),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(ErrorCode::Failure.exit_status())
        }
    }
}

fn run() -> anyhow::Result<ErrorCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config);

    let path = cli.data.clone().unwrap_or_else(|| config.snapshot.path.clone());
    let store = JsonFileStore::new(path, config.snapshot.pretty);
    let mut library = LibraryService::new(Repository::new(store));

    let found = library.load().context("Failed to load catalog snapshot")?;
    let mut changed = false;
    if !found && config.catalog.seed_demo_data {
        library.catalog.seed_demo_data();
        changed = true;
    }

    let (text, code, mutated) = execute(&mut library, cli.command);
    println!("{}", text);
    changed |= mutated;

    if changed {
        if let Err(e) = library.save() {
            eprintln!("{}", render::error(&e));
            return Ok(e.code());
        }
    }

    Ok(code)
}

/// Perform one command; returns the rendered text, the exit code and
/// whether the catalog changed
fn execute(library: &mut LibraryService, command: Command) -> (String, ErrorCode, bool) {
    let catalog = &mut library.catalog;
    match command {
        Command::AddBook { name, id, quantity } => {
            let outcome = catalog.add_book(&name, id, quantity);
            (render::add_book(&name, outcome), ErrorCode::Success, true)
        }
        Command::AddUser { name, id } => {
            let created = catalog.add_user(&name, id);
            let code = if created { ErrorCode::Success } else { ErrorCode::Duplicate };
            (render::add_user(&name, created), code, created)
        }
        Command::Borrow { user, book } => match catalog.borrow_book(&user, &book) {
            Ok(outcome) => (
                render::borrow(&user, &book, outcome),
                ErrorCode::Success,
                outcome == BorrowOutcome::Borrowed,
            ),
            Err(e) => (render::error(&e), e.code(), false),
        },
        Command::Return { user, book } => {
            let outcome = catalog.return_book(&user, &book);
            (
                render::return_book(&user, &book, outcome),
                ErrorCode::Success,
                outcome == ReturnOutcome::Returned,
            )
        }
        Command::Books { prefix } => (
            render::books(&catalog.find_by_prefix(&prefix)),
            ErrorCode::Success,
            false,
        ),
        Command::Users => (
            render::users(catalog.all_users(), catalog.book_table()),
            ErrorCode::Success,
            false,
        ),
        Command::Borrowers { book } => (
            render::borrowers(&book, &catalog.borrowers_of(&book), catalog.book_table()),
            ErrorCode::Success,
            false,
        ),
        Command::Seed => {
            catalog.seed_demo_data();
            ("Sample library added.".to_string(), ErrorCode::Success, true)
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("lendlib={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
