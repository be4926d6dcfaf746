//! CLI administration tool for book-api.
//!
//! Works directly against the SQLite file, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection and schema version
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # List and count books
//! cargo run --bin admin -- books list
//! cargo run --bin admin -- books count
//!
//! # Delete a book (asks for confirmation unless -y is given)
//! cargo run --bin admin -- books delete 7f1c0e4a-...
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or `DATABASE_PATH`.

use book_api::config;
use book_api::domain::repositories::BookRepository;
use book_api::infrastructure::db;
use book_api::infrastructure::persistence::SqliteBookRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use uuid::Uuid;

/// CLI tool for managing book-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage stored books
    Books {
        #[command(subcommand)]
        action: BooksAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Book subcommands.
#[derive(Subcommand)]
enum BooksAction {
    /// List all books
    List,

    /// Show the number of books
    Count,

    /// Delete a book by id
    Delete {
        /// Book id (UUID)
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and schema version
    Check,

    /// Apply pending schema migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = db::open(&config.database())
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    match cli.command {
        Commands::Books { action } => handle_books_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches book commands. Requires an up-to-date schema.
async fn handle_books_action(action: BooksAction, pool: &SqlitePool) -> Result<()> {
    ensure_schema(pool).await?;

    let repo = SqliteBookRepository::new(pool.clone());

    match action {
        BooksAction::List => list_books(&repo).await?,
        BooksAction::Count => {
            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count books: {}", e))?;
            println!("{} {}", "Books:".bright_white().bold(), count.to_string().cyan());
        }
        BooksAction::Delete { id, yes } => delete_book(&repo, id, yes).await?,
    }

    Ok(())
}

/// Fails with a hint when the database has not been migrated yet.
async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    let applied = db::applied_migration_version(pool).await?;

    if applied.is_none() {
        anyhow::bail!(
            "Database schema not initialized. Run: {} admin db migrate",
            "cargo run --bin"
        );
    }

    Ok(())
}

/// Lists all books in a table.
///
/// # Output Format
///
/// ```text
/// Books
///
///   ID                                    Title                          Author
///   ─────────────────────────────────────────────────────────────────────────────
///   7f1c0e4a-2b7d-4a4e-9d0c-2f5b8e6a1c33  Dune                           Frank Herbert
/// ```
async fn list_books(repo: &SqliteBookRepository) -> Result<()> {
    println!("{}", "Books".bright_blue().bold());
    println!();

    let books = repo
        .find_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list books: {}", e))?;

    if books.is_empty() {
        println!("{}", "  No books found".yellow());
        return Ok(());
    }

    println!(
        "  {:<37} {:<30} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Author".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for book in &books {
        println!(
            "  {:<37} {:<30} {}",
            book.id.to_string().bright_black(),
            book.title.cyan(),
            book.author
        );
    }

    println!();
    println!("  Total: {}", books.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a book after showing it and asking for confirmation.
async fn delete_book(repo: &SqliteBookRepository, id: Uuid, skip_confirm: bool) -> Result<()> {
    let book = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up book: {}", e))?;

    let Some(book) = book else {
        println!("{} {}", "Book not found:".red(), id);
        return Ok(());
    };

    println!("  Title:  {}", book.title.cyan());
    println!("  Author: {}", book.author.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this book?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    repo.delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete book: {}", e))?;

    println!("{}", "Book deleted".green().bold());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            db::ping(pool).await.context("Database did not answer")?;
            println!("{}", "Database connection OK".green().bold());

            let applied = db::applied_migration_version(pool).await?;
            let latest = db::latest_migration_version();

            match applied {
                Some(version) if Some(version) == latest => {
                    println!("  Schema version: {}", version.to_string().cyan());
                }
                Some(version) => {
                    println!(
                        "  Schema version: {} {}",
                        version.to_string().yellow(),
                        "(migrations pending)".yellow()
                    );
                }
                None => println!("  {}", "Schema not initialized".yellow()),
            }
        }
        DbAction::Migrate => {
            db::migrate(pool).await.context("Migration failed")?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
