use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use forgeworklights_color::{interpolate_with, Rounding};
use forgeworklights_config::{
    defaults, get_config_dir, read_brightness, write_brightness, write_led_selection, Config,
    LedSelection,
};
use forgeworklights_logger::{self as logger, LogLevel};
use forgeworklights_sync::sync_with_config;
use forgeworklights_theme::{ThemeDatabase, ThemeEntry};

/// Manage the LED theme database of the ForgeworkLights daemon
#[derive(Parser, Debug)]
#[command(name = "forgeworklights-themes", about, version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Restore premade themes and import installed desktop themes
    Sync {
        /// Print progress and a summary
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the gradient expanded from anchor colors
    Gradient {
        /// Anchor colors, #rrggbb
        #[arg(required = true, value_name = "COLOR")]
        colors: Vec<String>,
        /// Number of colors to produce
        #[arg(short, long)]
        length: Option<usize>,
        /// Truncate channels instead of rounding to nearest
        #[arg(long)]
        truncate: bool,
    },
    /// Add or replace a custom theme
    Create {
        /// Display name; the key is derived from it
        name: String,
        /// Anchor colors, #rrggbb
        #[arg(required = true, value_name = "COLOR")]
        colors: Vec<String>,
        #[arg(short, long)]
        length: Option<usize>,
    },
    /// Remove a theme from the database
    Delete { key: String },
    /// List themes in the database
    List,
    /// Print a theme expanded to preview length
    Preview {
        key: String,
        #[arg(short, long)]
        length: Option<usize>,
    },
    /// Re-expand every theme in the database to the configured length
    Regenerate {
        #[arg(short, long)]
        length: Option<usize>,
        /// Truncate channels instead of rounding to nearest
        #[arg(long)]
        truncate: bool,
    },
    /// Choose the theme rendered by the daemon (a key, or `match`)
    Select { theme: String },
    /// Print or set LED brightness in percent
    Brightness {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: Option<u8>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config)?;

    match cli.command {
        Command::Sync { verbose } => {
            let report = sync_with_config(&config, verbose).context("Theme sync failed")?;
            if !verbose && report.changes() > 0 {
                println!("{} theme(s) changed", report.changes());
            }
        }
        Command::Gradient {
            colors,
            length,
            truncate,
        } => {
            let length = length.unwrap_or(config.themes.gradient_length);
            for color in interpolate_with(&colors, length, rounding(truncate))? {
                println!("{}", color);
            }
        }
        Command::Create {
            name,
            colors,
            length,
        } => {
            let path = config.database_path()?;
            let mut db = load_database(&path)?;
            let length = length.unwrap_or(config.themes.gradient_length);
            let key = db.create_custom(&name, &colors, length)?;
            db.save(&path)?;
            logger::info(format!("Created theme {}", key));
            println!("Created {}", key);
        }
        Command::Delete { key } => {
            let path = config.database_path()?;
            let mut db = load_database(&path)?;
            if !db.remove(&key) {
                bail!("No theme named '{}'", key);
            }
            db.save(&path)?;
            logger::info(format!("Deleted theme {}", key));
        }
        Command::List => {
            let db = load_database(&config.database_path()?)?;
            for key in db.keys() {
                match db.get(key) {
                    Some(entry) => println!("{}", list_line(key, entry)),
                    None => println!("{}\t?\t-", key),
                }
            }
        }
        Command::Preview { key, length } => {
            let db = load_database(&config.database_path()?)?;
            let Some(entry) = db.get(&key) else {
                bail!("No readable theme named '{}'", key);
            };
            let length = length.unwrap_or(config.themes.preview_length);
            for color in interpolate_with(&entry.colors, length, Rounding::Nearest)
                .with_context(|| format!("Theme '{}' has unusable colors", key))?
            {
                println!("{}", color);
            }
        }
        Command::Regenerate { length, truncate } => {
            let path = config.database_path()?;
            let mut db = load_database(&path)?;
            let length = length.unwrap_or(config.themes.gradient_length);
            let changed = db.regenerate(length, rounding(truncate))?;
            db.save(&path)?;
            logger::info(format!("Regenerated {} theme(s) to {} colors", changed, length));
            println!("{} theme(s) regenerated", changed);
        }
        Command::Select { theme } => {
            let selection = LedSelection::parse(&theme);
            if let LedSelection::Theme(key) = &selection {
                let db = load_database(&config.database_path()?)?;
                if !db.contains(key) {
                    bail!("No theme named '{}'", key);
                }
            }
            write_led_selection(&get_config_dir()?, &selection)?;
            logger::info(format!("Selected LED theme {}", selection));
        }
        Command::Brightness { percent } => {
            let dir = get_config_dir()?;
            match percent {
                Some(percent) => {
                    let applied = write_brightness(&dir, percent)?;
                    logger::info(format!("Brightness set to {}%", applied));
                }
                None => println!("{}", read_brightness(&dir)),
            }
        }
    }

    Ok(())
}

fn rounding(truncate: bool) -> Rounding {
    if truncate {
        Rounding::Truncate
    } else {
        Rounding::Nearest
    }
}

fn init_logging(config: &Config) -> Result<()> {
    let file_path: PathBuf = config.log_file_path()?;
    let min_level = config
        .logging
        .min_level
        .parse::<LogLevel>()
        .unwrap_or(LogLevel::Info);
    logger::init(file_path, defaults::MAX_LOG_ENTRIES, min_level);
    Ok(())
}

/// Load the LED database for editing; unlike sync, a corrupt file is an error.
fn load_database(path: &std::path::Path) -> Result<ThemeDatabase> {
    ThemeDatabase::load_strict(path)
        .with_context(|| format!("Refusing to edit {}", path.display()))
}

fn list_line(key: &str, entry: &ThemeEntry) -> String {
    let span = match (entry.colors.first(), entry.colors.last()) {
        (Some(first), Some(last)) => format!("{}..{}", first, last),
        _ => "-".to_string(),
    };
    format!("{}\t{}\t{}", key, entry.name, span)
}
