// CLI module - command-line argument parsing and handlers
//
// With no subcommand the TUI runs. Subcommands:
// - list / add / edit / delete: one roster operation, printed to stdout
// - serve-demo: run the in-memory Student Directory service
// - config --show/--reset/--edit/--update/--path: configuration management

use crate::config::{Config, VERSION};
use crate::roster::{DraftField, HttpDirectory, Roster, Student};
use crate::tui::components::formatters::truncate;
use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::net::SocketAddr;
use std::process::Command;

/// Student roster - terminal front end for a Student Directory service
#[derive(Parser)]
#[command(name = "roster")]
#[command(version = VERSION)]
#[command(about = "Manage a student roster over a Student Directory service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every student
    List,

    /// Add a student
    Add {
        #[arg(long)]
        name: String,

        /// A-F
        #[arg(long)]
        grade: String,

        /// Degree program, e.g. "Computer science"
        #[arg(long)]
        major: String,
    },

    /// Change fields of an existing student
    Edit {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        grade: Option<String>,

        #[arg(long)]
        major: Option<String>,
    },

    /// Delete a student
    Delete {
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Run the in-memory demo directory service
    ServeDemo {
        /// Address to listen on (default from config)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Show effective configuration
    #[arg(long)]
    show: bool,

    /// Reset config file to defaults
    #[arg(long)]
    reset: bool,

    /// Open config file in $EDITOR
    #[arg(long)]
    edit: bool,

    /// Update config with new defaults (preserves user values)
    #[arg(long)]
    update: bool,

    /// Show config file path
    #[arg(long)]
    path: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Roster commands
// ─────────────────────────────────────────────────────────────────────────────

/// Run a single roster command against the configured service
pub async fn run_command(command: Commands, config: &Config) -> Result<()> {
    let directory = HttpDirectory::new(&config.service_url, config.request_timeout())
        .context("Failed to build HTTP client")?;
    let mut roster = Roster::new(directory);

    // Validation and id assignment need the current collection
    roster
        .reload()
        .await
        .map_err(|e| anyhow!(e.user_message()))
        .with_context(|| format!("Could not reach {}", config.service_url))?;

    match command {
        Commands::List => print_roster(roster.students()),

        Commands::Add { name, grade, major } => {
            roster.begin_create();
            roster.update_draft_field(DraftField::Name, &name);
            roster.update_draft_field(DraftField::Grade, &grade);
            roster.update_draft_field(DraftField::Major, &major);

            let student = roster
                .submit_create()
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            println!("Added {} (#{})", student.name, student.id);
        }

        Commands::Edit {
            id,
            name,
            grade,
            major,
        } => {
            let Some(student) = roster.state().student(id).cloned() else {
                bail!("Student {} not found.", id);
            };
            roster.begin_edit(&student);

            let changes = [
                (DraftField::Name, name),
                (DraftField::Grade, grade),
                (DraftField::Major, major),
            ];
            for (field, value) in changes {
                if let Some(value) = value {
                    roster.update_draft_field(field, &value);
                }
            }

            let saved = roster
                .submit_edit(id)
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            println!("Saved {} (#{})", saved.name, saved.id);
        }

        Commands::Delete { id, yes } => {
            let deleted = roster
                .delete_student(id, |s| {
                    yes || confirm(&format!("Delete {} (#{})?", s.name, s.id))
                })
                .await
                .map_err(|e| anyhow!(e.user_message()))?;

            if deleted {
                println!("Deleted student {}", id);
            } else {
                println!("Aborted.");
            }
        }

        // Dispatched before a directory is needed
        Commands::ServeDemo { .. } | Commands::Config(_) => {}
    }

    Ok(())
}

/// Ask a y/N question on stderr, read the answer from stdin
fn confirm(question: &str) -> bool {
    eprint!("{} [y/N] ", question);
    if std::io::stderr().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}

/// Print the roster as a plain table
pub fn print_roster(students: &[Student]) {
    if students.is_empty() {
        println!("No students.");
        return;
    }

    println!("{}", format_row("ID", "Name", "Grade", "Major"));
    println!("{}", "─".repeat(72));
    for s in students {
        println!(
            "{}",
            format_row(&s.id.to_string(), &s.name, s.grade.as_str(), s.major.as_str())
        );
    }
}

fn format_row(id: &str, name: &str, grade: &str, major: &str) -> String {
    format!(
        "{:>4}  {:<24}  {:<5}  {}",
        id,
        truncate(name, 24),
        grade,
        truncate(major, 32)
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Config commands
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(args: ConfigArgs) {
    if args.path {
        handle_config_path();
    } else if args.show {
        handle_config_show();
    } else if args.reset {
        handle_config_reset();
    } else if args.edit {
        handle_config_edit();
    } else if args.update {
        handle_config_update();
    } else {
        // No flag provided, show help
        println!("Usage: roster config [--show|--reset|--edit|--update|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --update  Update config with new defaults (preserves user values)");
        println!("  --path    Show config file path");
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("service_url = {:?}", config.service_url);
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    println!("theme = {:?}", config.theme);
    println!("enable_tui = {}", config.enable_tui);
    println!("demo_mode = {}", config.demo_mode);
    println!();
    println!("[demo]");
    println!("bind_addr = {:?}", config.demo.bind_addr.to_string());
    println!("seed = {}", config.demo.seed);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() && !confirm(&format!("Config file exists at {}. Overwrite?", path.display())) {
        println!("Aborted.");
        return;
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Config::to_toml is the single source of truth for the template
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Re-render the template with the user's current values
    let updated = Config::from_env().to_toml();

    let backup_path = path.with_extension("toml.bak");
    match std::fs::copy(&path, &backup_path) {
        Ok(_) => println!("Backup created: {}", backup_path.display()),
        Err(e) => eprintln!("Warning: Could not create backup: {}", e),
    }

    if let Err(e) = std::fs::write(&path, updated) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}
