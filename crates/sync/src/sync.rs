//! The merge itself: restore, discover, persist.

use std::path::Path;

use forgeworklights_color::{gradient, ColorError, Rgb, Rounding};
use forgeworklights_logger as logger;
use forgeworklights_theme::{humanize, ThemeDatabase, ThemeEntry, TuiDatabase, TuiPalette};

use crate::{discover_themes, SyncError, SyncOptions, SyncReport};

/// Progress lines go to the log, and to stdout when verbose.
struct Progress {
    verbose: bool,
}

impl Progress {
    fn info(&self, message: String) {
        if self.verbose {
            println!("{}", message);
        }
        logger::info(message);
    }

    fn detail(&self, message: String) {
        if self.verbose {
            println!("{}", message);
        }
        logger::debug(message);
    }
}

/// Run one sync pass and persist the result.
///
/// Only writing the databases can fail; unreadable inputs are replaced by
/// empty ones and logged. A failed write leaves both database files as
/// they were, except when the palette database rename fails after the LED
/// database was already replaced.
pub fn sync(options: &SyncOptions) -> Result<SyncReport, SyncError> {
    if options.gradient_length == 0 {
        return Err(ColorError::InvalidLength(0).into());
    }

    let progress = Progress {
        verbose: options.verbose,
    };
    let mut report = SyncReport::default();

    let mut db = ThemeDatabase::load(&options.database_path);
    let premade = load_premade(&options.premade_path, &progress);

    for key in db.restore_missing(&premade) {
        report.restored += 1;
        progress.info(format!("✓ Restored: {} (from premade)", key));
    }
    if report.restored > 0 {
        progress.info(format!(
            "Restored {} deleted default themes",
            report.restored
        ));
    }

    let discovered = discover_themes(&options.source_dirs);
    if discovered.is_empty() {
        progress.detail("No theme sources found".to_string());
    }

    let mut palettes: Vec<(String, TuiPalette)> = Vec::new();
    for theme in discovered {
        let entry = build_entry(
            &theme.key,
            &theme.palette.anchors,
            theme.palette.tui.clone(),
            options.gradient_length,
        );
        if let Some(tui) = &theme.palette.tui {
            palettes.push((theme.key.clone(), tui.clone()));
        }

        if !db.contains(&theme.key) {
            db.insert(theme.key.clone(), entry);
            report.added += 1;
            progress.info(format!("✓ Added: {}", theme.key));
        } else if options.is_live(&theme.key) {
            if db.get(&theme.key) == Some(&entry) {
                progress.detail(format!("= Unchanged: {} (live)", theme.key));
            } else {
                db.insert(theme.key.clone(), entry);
                report.updated += 1;
                progress.info(format!("✓ Updated: {} (live)", theme.key));
            }
        } else {
            report.skipped += 1;
            progress.detail(format!("⏭ Skipped: {} (already exists)", theme.key));
        }
    }

    // Both documents are staged before either replaces its file.
    let led_write = db
        .stage(&options.database_path)
        .map_err(SyncError::Persistence)?;
    let tui_write = match &options.tui_database_path {
        Some(tui_path) => {
            let mut tui_db = TuiDatabase::load(tui_path);
            for (key, palette) in palettes {
                tui_db.insert(key, palette);
            }
            Some(tui_db.stage(tui_path).map_err(SyncError::Persistence)?)
        }
        None => None,
    };
    led_write.commit().map_err(SyncError::Persistence)?;
    if let Some(tui_write) = tui_write {
        tui_write.commit().map_err(SyncError::Persistence)?;
    }

    report.total = db.len();
    progress.info(format!(
        "Sync complete: {} restored, {} new, {} updated, {} total",
        report.restored, report.added, report.updated, report.total
    ));
    if options.verbose {
        println!("{}", report);
        println!("  Saved to: {}", options.database_path.display());
    }

    Ok(report)
}

fn build_entry(key: &str, anchors: &[Rgb], tui: Option<TuiPalette>, length: usize) -> ThemeEntry {
    let colors = gradient(anchors, length, Rounding::Nearest)
        .into_iter()
        .map(Rgb::to_hex)
        .collect();
    let entry = ThemeEntry::new(humanize(key), colors);
    match tui {
        Some(tui) => entry.with_tui(tui),
        None => entry,
    }
}

fn load_premade(path: &Path, progress: &Progress) -> ThemeDatabase {
    let premade = ThemeDatabase::load(path);
    if !premade.is_empty() {
        progress.detail(format!(
            "Loaded {} premade themes from {}",
            premade.len(),
            path.display()
        ));
    }
    premade
}
