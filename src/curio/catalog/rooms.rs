//! Room-type catalog.
//!
//! Room types describe the rooms items can be placed in. They come from an
//! outside source that may be unavailable; consumers must keep working with an
//! empty catalog in that case, so [`room_types_or_empty`] is the entry point the
//! rest of the crate uses.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CurioError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RoomType {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

/// Anything that can supply the room-type catalog.
pub trait RoomTypeSource {
    fn fetch_room_types(&self) -> Result<Vec<RoomType>>;
}

/// Reads room types from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonRoomTypeSource {
    path: PathBuf,
}

impl JsonRoomTypeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RoomTypeSource for JsonRoomTypeSource {
    fn fetch_room_types(&self) -> Result<Vec<RoomType>> {
        if !self.path.exists() {
            return Err(CurioError::Catalog(format!(
                "room types not found at {}",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path)?;
        let rooms: Vec<RoomType> = serde_json::from_str(&content)?;
        Ok(rooms)
    }
}

/// A fixed list, for tests and for callers that already hold the catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticRoomTypes(pub Vec<RoomType>);

impl RoomTypeSource for StaticRoomTypes {
    fn fetch_room_types(&self) -> Result<Vec<RoomType>> {
        Ok(self.0.clone())
    }
}

/// Fetches room types, substituting an empty list on any failure.
pub fn room_types_or_empty<S: RoomTypeSource + ?Sized>(source: &S) -> Vec<RoomType> {
    match source.fetch_room_types() {
        Ok(rooms) => rooms,
        Err(e) => {
            warn!("room types unavailable, continuing without them: {}", e);
            Vec::new()
        }
    }
}
