//! Docket CLI - terminal front end for the law practice record store

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use docket::browser::Browser;
use docket::record::{NewCase, NewClient, NewLawyer, TableKind};
use docket::storage::RecordStore;
use docket::ui::{self, Icons};
use docket::{config, TableData};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "docket")]
#[command(version)]
#[command(about = "Record manager for a small law practice")]
#[command(long_about = r#"
Docket keeps a law practice's clients, lawyers and cases in a single
SQLite file and offers two ways at the data:

  • An interactive terminal browser that rotates through the tables
  • One-shot subcommands for scripts and other front ends

Example usage:
  docket init --config
  docket add client --name "Dana Cruz" --email dana@example.com
  docket list --table cases
  docket browse
"#)]
struct Cli {
    /// Path to the database file (overrides docket.toml)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the tables interactively in the terminal
    Browse,

    /// Create the database file (idempotent), optionally writing docket.toml
    Init {
        /// Also write a docket.toml pointing at the database
        #[arg(long)]
        config: bool,

        /// Overwrite an existing docket.toml
        #[arg(long)]
        force: bool,
    },

    /// List all rows of a table
    List {
        /// Table to list (clients, lawyers, cases)
        #[arg(short, long)]
        table: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Add a record
    #[command(subcommand)]
    Add(AddCommands),

    /// Rewrite a single column of a record
    Update {
        /// Table holding the record
        #[arg(short, long)]
        table: String,

        /// Record id
        #[arg(short, long)]
        id: i64,

        /// Column to rewrite
        #[arg(short, long)]
        column: String,

        /// New value
        #[arg(long)]
        value: String,
    },

    /// Delete a record by id
    Delete {
        /// Table holding the record
        #[arg(short, long)]
        table: String,

        /// Record id
        #[arg(short, long)]
        id: i64,
    },

    /// Show row counts for all tables
    Stats {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand)]
enum AddCommands {
    /// Add a client record
    Client {
        /// Client name
        #[arg(short, long)]
        name: String,

        /// Contact details
        #[arg(short, long)]
        contact: Option<String>,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Add a lawyer record
    Lawyer {
        /// Lawyer name
        #[arg(short, long)]
        name: String,

        /// Area of practice
        #[arg(short, long)]
        specialization: Option<String>,

        /// Contact details
        #[arg(short, long)]
        contact: Option<String>,
    },

    /// Add a case record
    Case {
        /// Case title
        #[arg(short, long)]
        title: String,

        /// Referenced client id (not checked against the clients table)
        #[arg(long)]
        client_id: Option<i64>,

        /// Referenced lawyer id (not checked against the lawyers table)
        #[arg(long)]
        lawyer_id: Option<i64>,

        /// Case status, free text
        #[arg(short, long)]
        status: Option<String>,

        /// Case description
        #[arg(long)]
        description: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let loaded = config::load_config(None)?;
    let db_path = config::resolve_database(cli.database.as_deref(), loaded.as_ref());
    config::ensure_db_dir(&db_path)?;

    match cli.command {
        Commands::Browse => {
            let store = RecordStore::open(&db_path)?;
            Browser::new(store).run()?;
        }

        Commands::Init { config: write, force } => {
            let store = RecordStore::open(&db_path)?;
            ui::success(&format!("Database ready at {}", store.path().display()));
            if write {
                let cfg = config::DocketConfig {
                    database: Some(db_path.display().to_string()),
                };
                config::write_config(&config::default_config_path(), &cfg, force)?;
                ui::success("Wrote docket.toml");
            }
        }

        Commands::List { table, format } => {
            let table: TableKind = table.parse()?;
            let store = RecordStore::open(&db_path)?;
            let data = store.list(table)?;
            print_listing(table, &data, &format)?;
        }

        Commands::Add(add) => {
            let store = RecordStore::open(&db_path)?;
            match add {
                AddCommands::Client { name, contact, email } => {
                    let id = store.add_client(&NewClient { name, contact, email })?;
                    ui::success(&format!("Client added with id {}", id));
                }
                AddCommands::Lawyer {
                    name,
                    specialization,
                    contact,
                } => {
                    let id = store.add_lawyer(&NewLawyer {
                        name,
                        specialization,
                        contact,
                    })?;
                    ui::success(&format!("Lawyer added with id {}", id));
                }
                AddCommands::Case {
                    title,
                    client_id,
                    lawyer_id,
                    status,
                    description,
                } => {
                    let id = store.add_case(&NewCase {
                        title,
                        client_id,
                        lawyer_id,
                        status,
                        description,
                    })?;
                    ui::success(&format!("Case added with id {}", id));
                }
            }
        }

        Commands::Update {
            table,
            id,
            column,
            value,
        } => {
            let table: TableKind = table.parse()?;
            let store = RecordStore::open(&db_path)?;
            store.update(table, id, &column, &value)?;
            ui::success(&format!("{} record {} updated", table, id));
        }

        Commands::Delete { table, id } => {
            let table: TableKind = table.parse()?;
            let store = RecordStore::open(&db_path)?;
            store.delete(table, id)?;
            ui::success(&format!("{} record {} deleted", table, id));
        }

        Commands::Stats { format } => {
            let store = RecordStore::open(&db_path)?;
            let counts = store.counts()?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                println!("{} {}", Icons::STATS, ui::muted(&db_path.display().to_string()));
                println!("{}", counts);
            }
        }
    }

    Ok(())
}

fn print_listing(table: TableKind, data: &TableData, format: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        ui::rule(&table.as_str().to_uppercase());
        println!("{}", docket::ui::table::render(data));
    }
    Ok(())
}
