//! CLI host for the reading list core.
//!
//! # Responsibility
//! - Play the host role: restore the selection slot from SQLite, route one
//!   "selection changed" event, and print the list/detail projection.
//! - Keep output line-oriented and deterministic for scripting.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use readinglist_core::{
    default_log_level, init_logging, open_db, ReadingList, SqliteSlot, TypedSelection,
};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DB_FILE_NAME: &str = "readinglist.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "readinglist", version, about = "Reading list with a persisted selection")]
struct Cli {
    /// Database holding the persisted selection slot.
    #[arg(long, env = "READINGLIST_DB_PATH")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "READINGLIST_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core linkage info.
    Ping,
    /// List records, marking the selected one.
    List,
    /// Print the selected record.
    Show,
    /// Select a record by id.
    Select { id: String },
    /// Clear the selection.
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir.to_str().context("log directory is not valid UTF-8")?;
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            bail!("logging init failed: {err}");
        }
    }

    let db_path = cli
        .db
        .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME));

    match cli.command.unwrap_or(Command::List) {
        Command::Ping => {
            println!("readinglist_core ping={}", readinglist_core::ping());
            println!("readinglist_core version={}", readinglist_core::core_version());
        }
        Command::List => with_reading_list(&db_path, |list| {
            print_list(list);
            Ok(())
        })?,
        Command::Show => with_reading_list(&db_path, |list| {
            print_selected(list);
            Ok(())
        })?,
        Command::Select { id } => {
            let id = Uuid::parse_str(id.trim())
                .with_context(|| format!("invalid record id `{}`", id.trim()))?;
            with_reading_list(&db_path, |list| {
                list.select(id);
                ensure_persisted(list, Some(id))?;
                print_selected(list);
                Ok(())
            })?;
        }
        Command::Clear => with_reading_list(&db_path, |list| {
            list.clear_selection();
            ensure_persisted(list, None)?;
            print_selected(list);
            Ok(())
        })?,
    }

    Ok(())
}

fn with_reading_list(
    db_path: &Path,
    f: impl FnOnce(&mut ReadingList<SqliteSlot<'_>>) -> Result<()>,
) -> Result<()> {
    let conn = open_db(db_path)
        .with_context(|| format!("failed to open database `{}`", db_path.display()))?;
    let mut list = ReadingList::seeded(SqliteSlot::for_selection(&conn));
    f(&mut list)
}

fn ensure_persisted(list: &ReadingList<SqliteSlot<'_>>, expected: TypedSelection) -> Result<()> {
    let stored = list.selection();
    if stored != expected {
        let stored = stored.map_or_else(|| "none".to_string(), |id| id.to_string());
        bail!("selection was not persisted; database still holds selection={stored}");
    }
    Ok(())
}

fn print_list(list: &ReadingList<SqliteSlot<'_>>) {
    let selection = list.selection();
    for record in list.records() {
        let marker = if Some(record.id()) == selection { '*' } else { ' ' };
        println!(
            "{marker} {}  {} ({})",
            record.id(),
            record.title(),
            record.subtitle()
        );
    }
}

fn print_selected(list: &ReadingList<SqliteSlot<'_>>) {
    match (list.selection(), list.selected_record()) {
        (None, _) => println!("selection=none"),
        (Some(_), Some(record)) => println!(
            "selection={} title={} subtitle={}",
            record.id(),
            record.title(),
            record.subtitle()
        ),
        (Some(id), None) => println!("selection={id} status=not_in_list"),
    }
}
