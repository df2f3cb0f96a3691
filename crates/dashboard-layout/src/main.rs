//! Dashboard Layout - CLI entry point
//!
//! This binary reads and edits the persisted dashboard widget layout. Every
//! editing command submits a full replacement layout to the store, which
//! writes it through to the layout file.

use clap::{Parser, Subcommand};
use dashboard_layout::commands::layout::{self, ListFormat};
use dashboard_layout::config::{default, loader::ConfigLoader, schema::Config, xdg};
use dashboard_layout::{logging, open_store, resolve_layout_path, CommandError};
use std::path::PathBuf;
use std::process::ExitCode;
use widget_layout::{Geometry, SaveStatus, WidgetSize};


/// Dashboard widget layout editor
#[derive(Parser)]
#[command(name = "dashlayout")]
#[command(version, about = "Read and edit the persisted dashboard widget layout")]
struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/dashboard-layout/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Layout file, overriding `store.path` from the configuration
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dashlayout CLI
#[derive(Subcommand)]
enum Commands {
    /// List widgets in display order
    List {
        /// Include hidden widgets
        #[arg(long)]
        all: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a hidden widget
    Show {
        /// Widget id
        id: String,
    },

    /// Hide a widget
    Hide {
        /// Widget id
        id: String,
    },

    /// Move a widget to a display position (1 = first)
    Move {
        /// Widget id
        id: String,
        /// Target position, counting hidden widgets
        position: usize,
    },

    /// Change the size hint of a widget
    Resize {
        /// Widget id
        id: String,
        /// small, medium or large
        size: WidgetSize,
    },

    /// Set the grid position and span of a widget
    Place {
        /// Widget id
        id: String,
        /// Grid column
        #[arg(long)]
        x: u32,
        /// Grid row
        #[arg(long)]
        y: u32,
        /// Width in columns
        #[arg(long)]
        w: u32,
        /// Height in rows
        #[arg(long)]
        h: u32,
    },

    /// Restore the default widget set
    Reset,

    /// Print the current layout as a JSON widget array
    Export {
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Replace the whole layout with a JSON widget array
    Import {
        /// File containing the widget array
        file: PathBuf,
    },

    /// Print the layout file path
    Path,

    /// Delete the stored layout; the next run starts from defaults
    Forget,

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Config { action } = &cli.command {
        logging::init(Config::default().logging.level);
        return run_config_command(action, cli.config.as_deref());
    }

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.logging.level);

    match run_layout_command(cli.command, &config, cli.layout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs a layout command against the configured store.
fn run_layout_command(
    command: Commands,
    config: &Config,
    layout_override: Option<PathBuf>,
) -> Result<(), CommandError> {
    if let Commands::Path = command {
        println!(
            "{}",
            resolve_layout_path(config, layout_override.as_deref()).display()
        );
        return Ok(());
    }

    let mut store = open_store(config, layout_override.as_deref());

    let status = match command {
        Commands::List { all, json } => {
            let format = if json {
                ListFormat::Json
            } else {
                ListFormat::Table
            };
            print!("{}", layout::list(&store, all, format)?);
            if json {
                println!();
            }
            return Ok(());
        }
        Commands::Export { output } => {
            match output {
                Some(path) => {
                    layout::export_to_file(&store, &path)?;
                    println!("Exported layout to {}", path.display());
                }
                None => println!("{}", layout::export(&store)?),
            }
            return Ok(());
        }
        Commands::Forget => {
            layout::forget(&mut store)?;
            println!("Stored layout removed");
            return Ok(());
        }
        Commands::Show { id } => layout::set_visible(&mut store, &id, true)?,
        Commands::Hide { id } => layout::set_visible(&mut store, &id, false)?,
        Commands::Move { id, position } => layout::move_widget(&mut store, &id, position)?,
        Commands::Resize { id, size } => layout::resize(&mut store, &id, size)?,
        Commands::Place { id, x, y, w, h } => {
            layout::place(&mut store, &id, Geometry { x, y, w, h })?
        }
        Commands::Reset => layout::reset(&mut store),
        Commands::Import { file } => layout::import_from_file(&mut store, &file)?,
        Commands::Path | Commands::Config { .. } => return Ok(()),
    };

    report_save(&status);
    Ok(())
}

/// Prints the outcome of the write-through. A failed write is only a warning:
/// the command itself succeeded.
fn report_save(status: &SaveStatus) {
    match status {
        SaveStatus::Saved => println!("Layout saved"),
        SaveStatus::Failed(e) => {
            eprintln!("Warning: layout changed for this session but not saved: {e}");
        }
    }
}

/// Handles `config init|path|validate`.
fn run_config_command(action: &ConfigAction, explicit: Option<&std::path::Path>) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => default::create_default_config(*force).map(|path| {
            println!("Created configuration at {}", path.display());
        }),
        ConfigAction::Path => {
            let path = explicit
                .map(|p| p.to_path_buf())
                .unwrap_or_else(xdg::config_path);
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Validate => ConfigLoader::load(explicit).map(|config| {
            println!("Configuration is valid");
            println!("{config:#?}");
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}
