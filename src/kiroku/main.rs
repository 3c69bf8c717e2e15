use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use kiroku::api::{CmdMessage, KirokuApi, KirokuPaths, MessageLevel};
use kiroku::config::KirokuConfig;
use kiroku::error::{KirokuError, Result};
use kiroku::model::{Entry, LogEntry, LogLevel};
use kiroku::store::fs::FileStore;
use std::io::Read;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: KirokuApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Save { file }) => handle_save(&mut ctx, file),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Cat) => handle_cat(&mut ctx),
        Some(Commands::Log { level, message }) => handle_log(&ctx, &level, message),
        Some(Commands::List) | None => handle_list(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli);
    let config = KirokuConfig::load(&data_dir).unwrap_or_default();

    let store = FileStore::new(
        data_dir.join(&config.store_file),
        data_dir.join(&config.backup_dir),
    );
    let paths = KirokuPaths {
        log_dir: data_dir.join(&config.log_dir),
        data_dir,
    };

    Ok(AppContext {
        api: KirokuApi::new(store, paths),
    })
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var("KIROKU_HOME") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "kiroku", "kiroku").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.ensure_store()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &mut AppContext, file: Option<PathBuf>) -> Result<()> {
    let blob = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let result = ctx.api.save_all(&blob)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_entry(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cat(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.fetch_all()?;
    if let Some(blob) = &result.blob {
        print!("{}", blob);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_entries()?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_log(ctx: &AppContext, level: &str, message: String) -> Result<()> {
    let level: LogLevel = level.parse().map_err(KirokuError::Validation)?;
    let result = ctx.api.append_logs(&[LogEntry::new(level, message)])?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    for entry in entries {
        let id_str = format!("{}. ", entry.id);

        let category = if entry.category.is_empty() {
            String::new()
        } else {
            format!(" ({})", entry.category)
        };
        let body = format!("{}{}", entry.content, category);

        let fixed_width = 4 + id_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let body_display = truncate_to_width(&body, available);
        let padding = available.saturating_sub(body_display.width());

        println!(
            "    {}{}{}  {}",
            id_str,
            body_display,
            " ".repeat(padding),
            format_entry_age(&entry.date).dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Entry dates are caller-supplied strings; when one parses as a calendar
/// date it is shown as a relative age, otherwise verbatim.
fn format_entry_age(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc());

    let time_str = match parsed {
        Some(then) => {
            let duration = Utc::now().signed_duration_since(then);
            let formatter = timeago::Formatter::new();
            formatter.convert(duration.to_std().unwrap_or_default())
        }
        None => date.to_string(),
    };

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
