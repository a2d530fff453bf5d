//! # Curio Architecture
//!
//! Curio is a **UI-agnostic library** for browsing a collection of decor items
//! (artworks, furnishings, rooms they live in). It filters, facets and checks
//! items for completeness; the `curio` binary is one client of it, a browser
//! front end could be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders results, owns stdout/stderr    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the option cache         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Returns CmdResult: items, warnings, options, messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query Core (query, facets, validation, normalize)          │
//! │  - Pure functions, no I/O, never fail                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items come from an [`store::ItemSource`]; the core treats each snapshot as
//! immutable and never writes items back.
//!
//! ## The Query Core
//!
//! - [`normalize`]: free-text numbers to canonical decimal strings
//! - [`validation`]: which required fields an item is missing
//! - [`facets`]: options, selection sets and the shared matching rule
//! - [`query`]: search + facets over a collection, plus the warnings view
//!
//! Failures in the core are reported as data (a missing-fields list, an empty
//! catalog), never as errors.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: one module per operation
//! - [`attributes`]: named access to item fields
//! - [`catalog`]: currency table and room-type catalog
//! - [`session`]: caller-owned search and selection state
//! - [`store`]: item sources
//! - [`model`]: the `Item` type
//! - [`config`]: persisted preferences
//! - [`error`]: error types

pub mod api;
pub mod attributes;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod facets;
pub mod model;
pub mod normalize;
pub mod query;
pub mod session;
pub mod store;
pub mod validation;
