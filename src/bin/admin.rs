//! CLI administration tool for slug-shortener.
//!
//! Inspects and creates mappings directly against the database, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show mapping count and total clicks
//! cargo run --bin admin -- stats
//!
//! # Show one mapping
//! cargo run --bin admin -- show docs
//!
//! # Create a mapping (prompts for the URL when omitted)
//! cargo run --bin admin -- create https://docs.rs --slug docs
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or the `DB_*` components): PostgreSQL connection string

use slug_shortener::application::services::MappingService;
use slug_shortener::config::Config;
use slug_shortener::domain::entities::Mapping;
use slug_shortener::infrastructure::persistence::PgMappingRepository;
use slug_shortener::utils::validation::MappingCandidate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing slug-shortener.
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
    /// Show mapping count and total clicks
    Stats,

    /// Show a single mapping
    Show {
        /// Slug to look up (exact match)
        slug: String,
    },

    /// Create a mapping
    Create {
        /// Destination URL (prompted for when omitted)
        url: Option<String>,

        /// Slug to use (random when omitted)
        #[arg(short, long)]
        slug: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Run pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = MappingService::new(Arc::new(PgMappingRepository::new(Arc::new(
        pool.clone(),
    ))));

    match cli.command {
        Commands::Stats => handle_stats(&service).await?,
        Commands::Show { slug } => handle_show(&service, &slug).await?,
        Commands::Create { url, slug, yes } => handle_create(&service, url, slug, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays collection statistics.
async fn handle_stats(service: &MappingService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let stats = service
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Mappings: {}",
        stats.mappings.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:   {}",
        stats.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints one mapping, or a notice when the slug is unknown.
async fn handle_show(service: &MappingService, slug: &str) -> Result<()> {
    let mapping = service
        .find_mapping(slug)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match mapping {
        Some(mapping) => print_mapping(&mapping),
        None => println!("{}", format!("No mapping for '{}'", slug).yellow()),
    }

    Ok(())
}

/// Creates a mapping with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the URL (or use provided)
/// 2. Show what will be created
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Validate and store through [`MappingService`]
async fn handle_create(
    service: &MappingService,
    url: Option<String>,
    slug: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Mapping".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Destination URL")
            .interact_text()?,
    };

    println!("  URL:  {}", url.cyan());
    println!(
        "  Slug: {}",
        slug.as_deref().unwrap_or("(random)").bright_yellow()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this mapping?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let mapping = service
        .create_mapping(MappingCandidate::new(Some(url), slug))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create mapping: {}", e))?;

    println!("{}", "✅ Mapping created".green().bold());
    println!();
    print_mapping(&mapping);

    Ok(())
}

fn print_mapping(mapping: &Mapping) {
    println!("  ID:      {}", mapping.id.to_string().bright_black());
    println!("  Slug:    {}", mapping.slug.bright_yellow().bold());
    println!("  URL:     {}", mapping.url.cyan());
    println!("  Clicks:  {}", mapping.click.to_string().bright_green());
    println!(
        "  Created: {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "📦 Running migrations...".bright_blue());

            sqlx::migrate!("./migrations").run(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
