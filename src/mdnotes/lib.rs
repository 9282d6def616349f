//! # mdnotes Architecture
//!
//! mdnotes is a small personal note manager. Notes are short Markdown
//! documents kept on disk, addressed by a title that is turned into a
//! filesystem-safe identifier.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands and the interactive menu                     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, user-facing messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, identity, backup, search)           │
//! │  - NoteStore trait: FlatStore and AggregateStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! A title such as `"Meeting Notes"` is sanitized to `Meeting_Notes`. When
//! that identifier is taken, new notes get `Meeting_Notes_1`, `_2`, and so on.
//! Lookups by title always resolve to the unsuffixed identifier. See
//! [`identity`].
//!
//! ## Safety
//!
//! Updates never overwrite without first copying the previous bytes to a
//! `.bak` file, and reject whitespace-only bodies. All writes are atomic
//! renames. See [`backup`] and [`store`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic and messages for each operation
//! - [`store`]: `NoteStore` trait and the flat/aggregate backends
//! - [`identity`]: Title sanitizing and collision suffixes
//! - [`backup`]: Single-generation backups before overwrite
//! - [`search`]: Title and content scans
//! - [`render`]: Markdown to HTML with raw-text fallback
//! - [`editor`]: External editor round trip
//! - [`config`]: Per-root configuration file
//! - [`logging`]: stderr logger bootstrap
//! - [`model`]: `Note`, `NoteEntry`, `NoteFile`, `BackendKind`
//! - [`error`]: Error types

pub mod api;
pub mod backup;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod identity;
pub mod logging;
pub mod model;
pub mod render;
pub mod search;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
