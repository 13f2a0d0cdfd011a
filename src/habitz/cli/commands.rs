use super::print::{print_config, print_habit_names, print_habits, print_messages, print_stats};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use habitz::api::{CmdMessage, ConfigAction, HabitzApi};
use habitz::config::HabitzConfig;
use habitz::error::{HabitzError, Result};
use habitz::model::{Habit, SortMode, StatusFilter, ViewState};
use habitz::store::fs::FileStore;
use habitz::store::habit_store::HabitStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HOME_ENV: &str = "HABITZ_HOME";
const LOG_ENV: &str = "HABITZ_LOG";

struct AppContext {
    api: HabitzApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { name }) => handle_add(&mut ctx, name),
        Some(Commands::List {
            search,
            filter,
            sort,
        }) => handle_list(&mut ctx, search, filter, sort),
        Some(Commands::Toggle { habits }) => handle_toggle(&mut ctx, habits),
        Some(Commands::Remove { habits, yes }) => handle_remove(&mut ctx, habits, yes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, None, None),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("habitz=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "habitz", "habitz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HabitzError::Config("Could not determine a data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    debug!(dir = %dir.display(), "using data directory");

    let config = HabitzConfig::load(&dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        HabitzConfig::default()
    });

    let store = HabitStore::load(FileStore::new(dir.clone()), config.storage_key.clone());
    let default_view = ViewState::new(config.default_filter, config.default_sort);

    Ok(AppContext {
        api: HabitzApi::new(store, default_view, dir),
    })
}

fn handle_add(ctx: &mut AppContext, words: Vec<String>) -> Result<()> {
    let name = words.join(" ");
    let result = ctx.api.add(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    filter: Option<StatusFilter>,
    sort: Option<SortMode>,
) -> Result<()> {
    if let Some(term) = search {
        ctx.api.set_search_term(term);
    }
    if let Some(filter) = filter {
        ctx.api.set_status_filter(filter);
    }
    if let Some(sort) = sort {
        ctx.api.set_sort_mode(sort);
    }

    let result = ctx.api.list()?;
    print_habits(&result.listed_habits, result.total_habits);
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, habits: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_habits(&habits)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, habits: Vec<String>, yes: bool) -> Result<()> {
    let ids = ctx.api.resolve_ids(&habits)?;
    let targets: Vec<Habit> = ids
        .iter()
        .filter_map(|id| ctx.api.habit(*id).cloned())
        .collect();

    if !yes && !targets.is_empty() {
        println!("This will remove the following habits:");
        print_habit_names(&targets);
        if !confirm("Remove them?")? {
            print_messages(&[CmdMessage::info("Operation cancelled.")]);
            return Ok(());
        }
    }

    let result = ctx.api.remove_habits(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let completed: Vec<Habit> = ctx.api.completed_habits().into_iter().cloned().collect();

    if !yes && !completed.is_empty() {
        println!("This will remove every completed habit:");
        print_habit_names(&completed);
        if !confirm("Clear them?")? {
            print_messages(&[CmdMessage::info("Operation cancelled.")]);
            return Ok(());
        }
    }

    let result = ctx.api.clear_completed()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush().map_err(HabitzError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(HabitzError::Io)?;

    let answer = input.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
