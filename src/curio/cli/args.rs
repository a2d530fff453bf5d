use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "curio", version)]
#[command(about = "Browse, filter and check a decor item collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Items file (JSON). Defaults to the `items-file` preference, then ./items.json
    #[arg(long, global = true, value_name = "PATH")]
    pub items: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items, optionally filtered
    #[command(alias = "ls")]
    List(FilterArgs),

    /// List items with missing required fields
    #[command(alias = "w")]
    Warnings,

    /// Show the selectable values of a facet (artist, condition, currency, ...)
    #[command(alias = "opts")]
    Options {
        /// Facet attribute name
        attr: String,
    },

    /// List room types
    Rooms {
        /// Room-type catalog file. Defaults to the `rooms-file` preference
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Normalize a typed number (e.g. "1.200,50")
    Normalize {
        /// The raw text
        raw: String,
    },

    /// Get or set preferences
    Config {
        /// Preference key (theme, show-api-health, items-file, rooms-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Free-text search (title, description, artist)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Search only these fields (repeatable)
    #[arg(long = "in", value_name = "FIELD")]
    pub search_fields: Vec<String>,

    /// Only items by this artist (repeatable)
    #[arg(long, value_name = "NAME")]
    pub artist: Vec<String>,

    /// Only items in this condition (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub condition: Vec<String>,

    /// Only items by this creator (repeatable)
    #[arg(long, value_name = "NAME")]
    pub creator: Vec<String>,

    /// Only items priced in this currency (repeatable)
    #[arg(long, value_name = "CODE")]
    pub currency: Vec<String>,

    /// Only items from this year or period (repeatable)
    #[arg(long, value_name = "YEAR")]
    pub year: Vec<String>,

    /// Any other facet, as ATTR=VALUE (repeatable)
    #[arg(long = "filter", value_name = "ATTR=VALUE")]
    pub filters: Vec<String>,
}
