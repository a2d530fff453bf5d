use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurioError {
    #[error("Items file not found: {}", .0.display())]
    ItemsNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Item {index} could not be read: {source}")]
    InvalidItem {
        index: usize,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, CurioError>;
