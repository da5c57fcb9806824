//! CLI administration tool for the cruise catalog.
//!
//! Terminal stand-in for the catalog management screens: list, add, edit
//! and delete destinations and organisations, run exports on demand, and
//! check the store.
//!
//! # Usage
//!
//! ```bash
//! # List Malaysian two-night cruises
//! cargo run --bin admin -- destination list --country Malaysia --duration "2 Nights"
//!
//! # Add an organisation interactively
//! cargo run --bin admin -- organization add
//!
//! # Edit a destination (prompts are pre-filled with the stored values)
//! cargo run --bin admin -- destination update Langkawi
//!
//! # Write a single report
//! cargo run --bin admin -- export --only destinations-malaysia
//!
//! # Check the store
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the export binary; see `cruise_catalog::config`.

use cruise_catalog::application::forms::{DestinationForm, OrganizationForm};
use cruise_catalog::application::services::{DestinationService, OrganizationService};
use cruise_catalog::config::{self, Config};
use cruise_catalog::domain::entities::{Country, Destination, Duration, Organization};
use cruise_catalog::domain::filter::{DestinationFilter, OrganizationFilter};
use cruise_catalog::export::{ExportJob, Exporter, FileSink};
use cruise_catalog::infrastructure::persistence::{
    Database, SqliteDestinationRepository, SqliteOrganizationRepository,
};
use cruise_catalog::logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::sync::Arc;

/// CLI tool for managing the cruise catalog.
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
    /// Manage cruise destinations
    Destination {
        #[command(subcommand)]
        action: DestinationAction,
    },

    /// Manage partner organisations
    Organization {
        #[command(subcommand)]
        action: OrganizationAction,
    },

    /// Write catalog reports
    Export {
        /// Run a single report by label (e.g. "destinations-malaysia")
        #[arg(long)]
        only: Option<String>,
    },

    /// Show catalog counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DestinationAction {
    /// List destinations
    List {
        /// "Malaysia", "Singapore" or "All"
        #[arg(long, default_value = "All")]
        country: String,

        /// "1 Night" .. "4 Nights" or "All"
        #[arg(long, default_value = "All")]
        duration: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a destination
    Add,

    /// Edit a destination
    Update {
        /// Place of the destination to edit
        place: String,
    },

    /// Delete a destination
    Delete {
        place: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum OrganizationAction {
    /// List organisations
    List {
        /// "Malaysia", "Singapore" or "All"
        #[arg(long, default_value = "All")]
        country: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an organisation
    Add,

    /// Edit an organisation
    Update {
        /// Name of the organisation to edit
        name: String,
    },

    /// Delete an organisation
    Delete {
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    logging::init(&config);

    let db = Database::connect(&config.database_url, config.create_if_missing)
        .await
        .context("Failed to open catalog store")?;
    db.migrate().await.context("Failed to apply migrations")?;

    match cli.command {
        Commands::Destination { action } => handle_destination_action(action, &db).await?,
        Commands::Organization { action } => handle_organization_action(action, &db).await?,
        Commands::Export { only } => handle_export(only, &db, &config).await?,
        Commands::Stats => handle_stats(&db).await?,
        Commands::Db { action } => handle_db_action(action, &db).await?,
    }

    Ok(())
}

// ── Destinations ────────────────────────────────────────────────────────────

type Destinations = DestinationService<SqliteDestinationRepository>;

async fn handle_destination_action(action: DestinationAction, db: &Database) -> Result<()> {
    let service = DestinationService::new(Arc::new(SqliteDestinationRepository::new(db.pool())));

    match action {
        DestinationAction::List {
            country,
            duration,
            json,
        } => {
            let filter = DestinationFilter::parse(&country, &duration)?;
            list_destinations(&service, filter, json).await?;
        }
        DestinationAction::Add => add_destination(&service).await?,
        DestinationAction::Update { place } => update_destination(&service, &place).await?,
        DestinationAction::Delete { place, yes } => {
            delete_destination(&service, &place, yes).await?
        }
    }

    Ok(())
}

/// Lists destinations as a table, or as JSON with `--json`.
///
/// ```text
/// 🚢 Destinations (Malaysia, All)
///
///   Place                Country      Duration   Ship             Price
///   ───────────────────────────────────────────────────────────────────────
///   Langkawi             Malaysia     2 Nights   Star             500
/// ```
async fn list_destinations(
    service: &Destinations,
    filter: DestinationFilter,
    json: bool,
) -> Result<()> {
    let destinations = service.list(filter).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&destinations)?);
        return Ok(());
    }

    println!(
        "{} ({}, {})",
        "🚢 Destinations".bright_blue().bold(),
        filter.country,
        filter.duration
    );
    println!();

    if destinations.is_empty() {
        println!("{}", "  No destinations found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<12} {:<10} {:<16} {:>8}",
        "Place".bright_white().bold(),
        "Country".bright_white().bold(),
        "Duration".bright_white().bold(),
        "Ship".bright_white().bold(),
        "Price".bright_white().bold()
    );
    println!("  {}", "─".repeat(71).bright_black());

    for d in &destinations {
        println!(
            "  {:<20} {:<12} {:<10} {:<16} {:>8}",
            d.place.cyan(),
            d.country_from.to_string(),
            d.duration.to_string(),
            d.cruise_ship,
            d.price.to_string().bright_green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        destinations.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn add_destination(service: &Destinations) -> Result<()> {
    println!("{}", "➕ Add Destination".bright_blue().bold());
    println!();

    let form = prompt_destination(DestinationForm::default())?;
    let created = service.create(&form).await?;

    println!();
    println!(
        "{} {}",
        "✅ Destination added:".green().bold(),
        created.place.cyan()
    );
    println!();

    Ok(())
}

/// Edits a destination.
///
/// # Flow
///
/// 1. Load the stored record (pre-fills every prompt)
/// 2. Prompt for each field
/// 3. Confirm
/// 4. Write the new values over the row matching the original place
async fn update_destination(service: &Destinations, place: &str) -> Result<()> {
    println!("{}", "✏️  Edit Destination".bright_blue().bold());
    println!();

    let Some(current) = service.load_for_edit(place).await? else {
        println!("{} {}", "⚠️  No destination named".yellow(), place.cyan());
        return Ok(());
    };

    let form = prompt_destination(DestinationForm::from(&current))?;
    let updated = form.validate()?;

    println!();
    print_destination(&updated);
    println!();

    if !confirm("Save these changes?", true)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let rows = service.update(place, &form).await?;
    report_rows("updated", rows);

    Ok(())
}

async fn delete_destination(service: &Destinations, place: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Destination".bright_blue().bold());
    println!();

    let Some(current) = service.load_for_edit(place).await? else {
        println!("{} {}", "⚠️  No destination named".yellow(), place.cyan());
        return Ok(());
    };

    print_destination(&current);
    println!();

    if !skip_confirm && !confirm("Delete this destination?", false)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let rows = service.delete(place).await?;
    report_rows("deleted", rows);

    Ok(())
}

fn prompt_destination(initial: DestinationForm) -> Result<DestinationForm> {
    Ok(DestinationForm {
        country_from: select_value("Country from", &Country::VALUES, &initial.country_from)?,
        duration: select_value("Duration", &Duration::VALUES, &initial.duration)?,
        place: prompt_text("Place", &initial.place)?,
        cruise_ship: prompt_text("Cruise ship", &initial.cruise_ship)?,
        route: prompt_text("Route", &initial.route)?,
        price: prompt_text("Price", &initial.price)?,
        date: prompt_text("Date", &initial.date)?,
    })
}

fn print_destination(d: &Destination) {
    println!("  Place:    {}", d.place.cyan());
    println!("  Country:  {}", d.country_from);
    println!("  Duration: {}", d.duration);
    println!("  Ship:     {}", d.cruise_ship);
    println!("  Route:    {}", d.route);
    println!("  Price:    {}", d.price.to_string().bright_green());
    println!("  Date:     {}", d.date);
}

// ── Organisations ───────────────────────────────────────────────────────────

type Organizations = OrganizationService<SqliteOrganizationRepository>;

async fn handle_organization_action(action: OrganizationAction, db: &Database) -> Result<()> {
    let service =
        OrganizationService::new(Arc::new(SqliteOrganizationRepository::new(db.pool())));

    match action {
        OrganizationAction::List { country, json } => {
            let filter = OrganizationFilter::parse(&country)?;
            list_organizations(&service, filter, json).await?;
        }
        OrganizationAction::Add => add_organization(&service).await?,
        OrganizationAction::Update { name } => update_organization(&service, &name).await?,
        OrganizationAction::Delete { name, yes } => {
            delete_organization(&service, &name, yes).await?
        }
    }

    Ok(())
}

async fn list_organizations(
    service: &Organizations,
    filter: OrganizationFilter,
    json: bool,
) -> Result<()> {
    let organizations = service.list(filter).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&organizations)?);
        return Ok(());
    }

    println!(
        "{} ({})",
        "🤝 Organisations".bright_blue().bold(),
        filter.country
    );
    println!();

    if organizations.is_empty() {
        println!("{}", "  No organisations found".yellow());
        return Ok(());
    }

    println!(
        "  {:<28} {:<16} {:<12} {:<28}",
        "Name".bright_white().bold(),
        "Type".bright_white().bold(),
        "Country".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "─".repeat(84).bright_black());

    for o in &organizations {
        println!(
            "  {:<28} {:<16} {:<12} {:<28}",
            o.name.cyan(),
            o.kind,
            o.country.to_string(),
            o.email.bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        organizations.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn add_organization(service: &Organizations) -> Result<()> {
    println!("{}", "➕ Add Organisation".bright_blue().bold());
    println!();

    let form = prompt_organization(OrganizationForm::default())?;
    let created = service.create(&form).await?;

    println!();
    println!(
        "{} {}",
        "✅ Organisation added:".green().bold(),
        created.name.cyan()
    );
    println!();

    Ok(())
}

async fn update_organization(service: &Organizations, name: &str) -> Result<()> {
    println!("{}", "✏️  Edit Organisation".bright_blue().bold());
    println!();

    let Some(current) = service.load_for_edit(name).await? else {
        println!("{} {}", "⚠️  No organisation named".yellow(), name.cyan());
        return Ok(());
    };

    let form = prompt_organization(OrganizationForm::from(&current))?;
    let updated = form.validate()?;

    println!();
    print_organization(&updated);
    println!();

    if !confirm("Save these changes?", true)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let rows = service.update(name, &form).await?;
    report_rows("updated", rows);

    Ok(())
}

async fn delete_organization(service: &Organizations, name: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Organisation".bright_blue().bold());
    println!();

    let Some(current) = service.load_for_edit(name).await? else {
        println!("{} {}", "⚠️  No organisation named".yellow(), name.cyan());
        return Ok(());
    };

    print_organization(&current);
    println!();

    if !skip_confirm && !confirm("Delete this organisation?", false)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let rows = service.delete(name).await?;
    report_rows("deleted", rows);

    Ok(())
}

fn prompt_organization(initial: OrganizationForm) -> Result<OrganizationForm> {
    Ok(OrganizationForm {
        name: prompt_text("Name", &initial.name)?,
        kind: prompt_text("Type", &initial.kind)?,
        country: select_value("Country", &Country::VALUES, &initial.country)?,
        about: prompt_text("About", &initial.about)?,
        website: prompt_text("Website", &initial.website)?,
        email: prompt_text("Email", &initial.email)?,
        location: prompt_text("Location", &initial.location)?,
    })
}

fn print_organization(o: &Organization) {
    println!("  Name:     {}", o.name.cyan());
    println!("  Type:     {}", o.kind);
    println!("  Country:  {}", o.country);
    println!("  About:    {}", o.about);
    println!("  Website:  {}", o.website);
    println!("  Email:    {}", o.email);
    println!("  Location: {}", o.location);
}

// ── Export, stats, db ───────────────────────────────────────────────────────

async fn handle_export(only: Option<String>, db: &Database, config: &Config) -> Result<()> {
    let jobs = match only {
        Some(label) => {
            let job = ExportJob::find_standard(&label).with_context(|| {
                let labels: Vec<_> = ExportJob::standard().into_iter().map(|j| j.label).collect();
                format!("Unknown export '{}', expected one of: {}", label, labels.join(", "))
            })?;
            vec![job]
        }
        None => ExportJob::standard(),
    };

    println!("{}", "📤 Exporting reports".bright_blue().bold());
    println!(
        "  Directory: {}",
        config.export_dir.display().to_string().bright_white()
    );
    println!();

    let exporter = Exporter::new(
        Arc::new(SqliteDestinationRepository::new(db.pool())),
        Arc::new(SqliteOrganizationRepository::new(db.pool())),
        Arc::new(FileSink::new(config.export_dir.clone())),
    );

    for outcome in exporter.run_batch(&jobs).await {
        match outcome.result {
            Ok(summary) => println!(
                "  {} {:<24} {} ({} records)",
                "✅".green(),
                summary.label.cyan(),
                summary.file_name,
                summary.records.to_string().bright_white()
            ),
            Err(e) => println!(
                "  {} {:<24} {}",
                "❌".red(),
                outcome.label.cyan(),
                e.to_string().red()
            ),
        }
    }
    println!();

    Ok(())
}

/// Displays catalog row counts.
async fn handle_stats(db: &Database) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = db.pool();

    let destinations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cruise_destination")
        .fetch_one(pool.as_ref())
        .await?;

    let organizations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM charity_organisation")
        .fetch_one(pool.as_ref())
        .await?;

    println!(
        "  Destinations:  {}",
        destinations.to_string().bright_green().bold()
    );
    println!(
        "  Organisations: {}",
        organizations.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, db: &Database) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            db.ping().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}

// ── Prompt helpers ──────────────────────────────────────────────────────────

fn prompt_text(label: &str, initial: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Picks one of `values`, starting on `current` when it matches.
fn select_value<T: ToString>(label: &str, values: &[T], current: &str) -> Result<String> {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    let default = items.iter().position(|v| v == current).unwrap_or(0);

    let index = Select::new()
        .with_prompt(label)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(items[index].clone())
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn report_rows(action: &str, rows: u64) {
    println!();
    if rows == 0 {
        println!("{}", format!("⚠️  Nothing {action}: no matching row").yellow());
    } else {
        println!(
            "{}",
            format!("✅ {rows} row(s) {action}").green().bold()
        );
    }
    println!();
}
