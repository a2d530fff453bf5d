//! Command-line client: argument parsing, context setup, handlers and
//! terminal rendering. Everything here talks to the library through
//! [`CurioApi`]; none of it is part of the lib API.

mod args;
mod print;

use clap::Parser;
use directories::ProjectDirs;
use log::debug;
use std::path::PathBuf;

use curio::api::{ConfigAction, CurioApi};
use curio::attributes::get_spec;
use curio::catalog::JsonRoomTypeSource;
use curio::config::CurioConfig;
use curio::error::{CurioError, Result};
use curio::query::parse_filter_expr;
use curio::session::FilterSession;
use curio::store::fs::JsonFileSource;

use args::{Cli, Commands, FilterArgs};
use print::{
    print_config, print_health, print_items, print_messages, print_options, print_rooms,
    print_warnings, Palette,
};

const HOME_ENV: &str = "CURIO_HOME";
const DEFAULT_ITEMS_FILE: &str = "items.json";

struct AppContext {
    api: CurioApi<JsonFileSource>,
    config: CurioConfig,
    palette: Palette,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List(filters)) => handle_list(&mut ctx, filters),
        Some(Commands::Warnings) => handle_warnings(&mut ctx),
        Some(Commands::Options { attr }) => handle_options(&mut ctx, &attr),
        Some(Commands::Rooms { file }) => handle_rooms(ctx, file),
        Some(Commands::Normalize { raw }) => handle_normalize(&ctx, &raw),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, FilterArgs::default()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "curio", "curio")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CurioError::Config("could not determine a home directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = CurioConfig::load(&config_dir)?;

    let items_path = cli
        .items
        .clone()
        .or_else(|| config.items_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ITEMS_FILE));
    debug!("items source: {}", items_path.display());

    let api = CurioApi::new(JsonFileSource::new(items_path), config_dir);
    let palette = Palette::new(&config);

    Ok(AppContext {
        api,
        config,
        palette,
    })
}

fn session_from_args(filters: FilterArgs) -> Result<FilterSession> {
    let mut session = FilterSession::new();
    if let Some(term) = filters.search {
        session.set_search(term);
    }

    if !filters.search_fields.is_empty() {
        for field in &filters.search_fields {
            if get_spec(field).is_none() {
                return Err(CurioError::InvalidFilter(format!(
                    "unknown search field '{}'",
                    field
                )));
            }
        }
        session.set_search_fields(filters.search_fields);
    }

    let named = [
        ("artist", filters.artist),
        ("condition", filters.condition),
        ("creator", filters.creator),
        ("currency", filters.currency),
        ("year", filters.year),
    ];
    for (attr, values) in named {
        for value in values {
            session.select(attr, &value);
        }
    }

    for expr in &filters.filters {
        let (attr, value) = parse_filter_expr(expr)?;
        session.select(&attr, &value);
    }

    Ok(session)
}

fn handle_list(ctx: &mut AppContext, filters: FilterArgs) -> Result<()> {
    let mut session = session_from_args(filters)?;
    let result = match ctx.api.list_session(&mut session) {
        Ok(result) => result,
        Err(e) => {
            if ctx.config.show_api_health {
                print_health(Err(e.to_string()));
            }
            return Err(e);
        }
    };
    print_items(&result.listed_items, ctx.palette);
    print_messages(&result.messages);

    if ctx.config.show_api_health {
        print_health(Ok(result.collection_size));
    }
    Ok(())
}

fn handle_warnings(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.warnings()?;
    print_warnings(&result.warnings, ctx.palette);
    print_messages(&result.messages);
    Ok(())
}

fn handle_options(ctx: &mut AppContext, attr: &str) -> Result<()> {
    let result = ctx.api.facet_options(attr)?;
    print_options(&result.options, ctx.palette);
    print_messages(&result.messages);
    Ok(())
}

fn handle_rooms(ctx: AppContext, file: Option<PathBuf>) -> Result<()> {
    let palette = ctx.palette;
    let api = match file.or_else(|| ctx.config.rooms_file.clone()) {
        Some(path) => ctx
            .api
            .with_room_source(Box::new(JsonRoomTypeSource::new(path))),
        None => ctx.api,
    };
    let result = api.room_types()?;
    print_rooms(&result.room_types, palette);
    print_messages(&result.messages);
    Ok(())
}

fn handle_normalize(ctx: &AppContext, raw: &str) -> Result<()> {
    println!("{}", ctx.api.normalize_number(raw));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    match (&result.config, result.messages.is_empty()) {
        (Some(config), true) => print_config(config),
        _ => print_messages(&result.messages),
    }
    if result.has_errors() {
        return Err(CurioError::Config("preference not changed".into()));
    }
    Ok(())
}
