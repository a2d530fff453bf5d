//! # Command Layer
//!
//! Each command lives in its own submodule and is a plain function over an
//! [`ItemSource`](crate::store::ItemSource) (or a catalog) that returns a
//! [`CmdResult`].
//!
//! Commands do not print, parse arguments or pick exit codes. They return
//! data: listed items, warnings, options, and [`CmdMessage`]s with a level the
//! UI decides how to show.
//!
//! ## Testing Strategy
//!
//! Command tests use [`InMemoryStore`](crate::store::memory::InMemoryStore) and
//! assert on `CmdResult` contents.
//!
//! ## Command Modules
//!
//! - [`list`]: run a query, list the matching items
//! - [`warnings`]: list incomplete items
//! - [`options`]: option list for one facet
//! - [`rooms`]: room-type catalog
//! - [`config`]: show and change preferences

use serde::Serialize;

use crate::catalog::RoomType;
use crate::config::CurioConfig;
use crate::facets::FacetOption;
use crate::model::Item;
use crate::validation::WarningItem;

pub mod config;
pub mod list;
pub mod options;
pub mod rooms;
pub mod warnings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Size of the whole collection the command read, when it read one.
    pub collection_size: usize,
    pub listed_items: Vec<Item>,
    pub warnings: Vec<WarningItem>,
    pub options: Vec<FacetOption>,
    pub room_types: Vec<RoomType>,
    pub config: Option<CurioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<WarningItem>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_options(mut self, options: Vec<FacetOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_room_types(mut self, rooms: Vec<RoomType>) -> Self {
        self.room_types = rooms;
        self
    }

    pub fn with_config(mut self, config: CurioConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
