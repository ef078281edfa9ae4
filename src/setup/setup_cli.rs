use campaign_hub::config::Config;
use campaign_hub::models::db_operations::profiles_db_operations;
use campaign_hub::setup::{db_setup, fixtures};
use clap::{Parser, Subcommand};
use redb::Database;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

const SETTING_KEYS: [&str; 4] = ["campaign_name", "contact_phone", "contact_email", "website"];

#[derive(Parser, Debug)]
#[command(name = "setup_cli", author, version, about = "A CLI for initial campaign hub setup.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the .env configuration file.
    #[arg(long, required = true, value_name = "FILE")]
    env_file: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
enum DbAction {
    /// Create the tables. Pass 'campaign' or 'library' to set up only one store.
    Setup {
        db_type: Option<String>,
    },
    /// Load the bundled sample data into tables that are still empty.
    Seed,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    List,
    Set {
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = Config::from_env(&cli.env_file)
        .expect("FATAL: Failed to load or parse configuration.");

    match &cli.command {
        Commands::Db { action } => match action {
            DbAction::Setup { db_type } => match db_type.as_deref() {
                Some("campaign") => setup_campaign_database(&config),
                Some("library") => setup_library_database(&config),
                Some(other) => eprintln!("❌ Error: Unknown database type '{}'. Use 'campaign' or 'library'.", other),
                None => {
                    setup_campaign_database(&config);
                    setup_library_database(&config);
                }
            },
            DbAction::Seed => seed_databases(&config),
        },
        Commands::Settings { action } => match action {
            SettingsAction::List => list_settings(&config),
            SettingsAction::Set { key, value } => set_setting(&config, key, value),
        },
    }
}

fn ensure_parent_dir(db_path: &Path) -> bool {
    match db_path.parent().map(fs::create_dir_all) {
        Some(Err(e)) => {
            eprintln!("❌ Error: Could not create database directory for '{}': {}", db_path.display(), e);
            false
        }
        _ => true,
    }
}

fn open_campaign_db(config: &Config) -> Option<Connection> {
    let db_path = config.campaign_db_path();
    if !db_path.exists() {
        eprintln!("❌ Error: Campaign database not found at '{}'. Please run `setup_cli db setup` first.", db_path.display());
        return None;
    }
    match Connection::open(&db_path) {
        Ok(conn) => Some(conn),
        Err(e) => {
            eprintln!("❌ Error opening campaign database: {}", e);
            None
        }
    }
}

fn setup_campaign_database(config: &Config) {
    let db_path = config.campaign_db_path();
    println!("\nSetting up campaign database at '{}'...", db_path.display());
    if !ensure_parent_dir(&db_path) {
        return;
    }

    let mut conn = match Connection::open(&db_path) {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ Error creating campaign database file: {}", e);
            return;
        }
    };
    match db_setup::setup_campaign_db(&mut conn) {
        Ok(_) => println!("✅ Campaign database setup completed successfully."),
        Err(e) => eprintln!("❌ Error setting up campaign database: {}", e),
    }
}

fn setup_library_database(config: &Config) {
    let db_path = config.library_db_path();
    println!("\nSetting up message library at '{}'...", db_path.display());
    if !ensure_parent_dir(&db_path) {
        return;
    }

    let db = match Database::create(&db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Error creating message library file: {}", e);
            return;
        }
    };
    match db_setup::setup_library_db(&db) {
        Ok(_) => println!("✅ Message library setup completed successfully."),
        Err(e) => eprintln!("❌ Error setting up message library: {}", e),
    }
}

fn seed_databases(config: &Config) {
    let Some(mut conn) = open_campaign_db(config) else {
        return;
    };
    let library_path = config.library_db_path();
    if !library_path.exists() {
        eprintln!("❌ Error: Message library not found at '{}'. Please run `setup_cli db setup` first.", library_path.display());
        return;
    }
    let library = match Database::open(&library_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Error opening message library: {}", e);
            return;
        }
    };

    match fixtures::seed_empty_tables(&mut conn, &library) {
        Ok(report) => println!(
            "✅ Seeded {} profile(s), {} post idea(s), {} event(s) and {} library message(s).",
            report.profiles, report.post_ideas, report.events, report.messages
        ),
        Err(e) => eprintln!("❌ Error seeding sample data: {}", e),
    }
}

fn list_settings(config: &Config) {
    let Some(conn) = open_campaign_db(config) else {
        return;
    };
    match profiles_db_operations::read_all_settings(&conn) {
        Ok(settings) => {
            println!("Campaign settings:");
            for (key, value) in settings {
                println!("- {} = {}", key, value);
            }
        }
        Err(e) => eprintln!("❌ Error fetching settings: {}", e),
    }
}

fn set_setting(config: &Config, key: &str, value: &str) {
    if !SETTING_KEYS.contains(&key) {
        eprintln!("❌ Error: Unknown setting '{}'. Use one of: {}.", key, SETTING_KEYS.join(", "));
        return;
    }
    let value = value.trim();
    if value.is_empty() {
        eprintln!("❌ Error: Setting '{}' cannot be empty.", key);
        return;
    }
    if key == "contact_email" && !value.contains('@') {
        eprintln!("❌ Error: '{}' is not a valid email address.", value);
        return;
    }
    let Some(conn) = open_campaign_db(config) else {
        return;
    };
    match profiles_db_operations::update_setting(&conn, key, value) {
        Ok(()) => println!("✅ Setting '{}' updated.", key),
        Err(e) => eprintln!("❌ Error updating setting: {}", e),
    }
}
