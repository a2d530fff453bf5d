//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI (the CLI here, a web front end elsewhere).
//!
//! It dispatches to `commands/*.rs`, owns the [`OptionCache`] so option lists
//! survive between calls, and returns structured `Result<CmdResult>` values.
//! It holds no filter state: the caller owns a
//! [`FilterSession`](crate::session::FilterSession) and passes criteria in.
//!
//! ## Generic Over ItemSource
//!
//! - Production: `CurioApi<JsonFileSource>`
//! - Testing: `CurioApi<InMemoryStore>`

use std::path::{Path, PathBuf};

use crate::catalog::{RoomTypeSource, StaticRoomTypes};
use crate::commands;
use crate::error::Result;
use crate::facets::OptionCache;
use crate::normalize::normalize;
use crate::query::QueryCriteria;
use crate::session::FilterSession;
use crate::store::ItemSource;

pub struct CurioApi<S: ItemSource> {
    source: S,
    rooms: Box<dyn RoomTypeSource>,
    cache: OptionCache,
    config_dir: PathBuf,
}

impl<S: ItemSource> CurioApi<S> {
    pub fn new(source: S, config_dir: PathBuf) -> Self {
        Self {
            source,
            rooms: Box::new(StaticRoomTypes::default()),
            cache: OptionCache::new(),
            config_dir,
        }
    }

    pub fn with_room_source(mut self, rooms: Box<dyn RoomTypeSource>) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn list_items(&self, criteria: &QueryCriteria) -> Result<commands::CmdResult> {
        commands::list::run(&self.source, criteria)
    }

    /// Lists items for a caller-held session, pruning selections that no
    /// current option backs.
    pub fn list_session(&mut self, session: &mut FilterSession) -> Result<commands::CmdResult> {
        commands::list::run_session(&self.source, &mut self.cache, session)
    }

    pub fn warnings(&self) -> Result<commands::CmdResult> {
        commands::warnings::run(&self.source)
    }

    pub fn facet_options(&mut self, attr: &str) -> Result<commands::CmdResult> {
        commands::options::run(&self.source, &mut self.cache, attr)
    }

    pub fn room_types(&self) -> Result<commands::CmdResult> {
        commands::rooms::run(self.rooms.as_ref())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn normalize_number(&self, raw: &str) -> String {
        normalize(raw)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
