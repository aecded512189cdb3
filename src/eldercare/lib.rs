//! # Eldercare Architecture
//!
//! Eldercare keeps a list of elderly-care beneficiaries (name, age, address,
//! the help they need, a contact number) and saves it to a plain text file.
//! It is a library with a CLI client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap subcommands and the numbered menu shell             │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CareApi<S: Storage>, one method per operation            │
//! │  - Tracks unsaved changes                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and business logic, returns CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, codec.rs, model.rs)                          │
//! │  - RecordStore: ordered records + id counter                │
//! │  - codec: the `id|name|age|address|need|contact` format     │
//! │  - Storage trait: FileStorage, InMemoryStorage              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through the `log` facade; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`commands`]: one module per operation
//! - [`store`]: `RecordStore` and storage backends
//! - [`codec`]: stored line format
//! - [`model`]: `Record`, `NewRecord`, `RecordPatch`, field validation
//! - [`config`]: `config.json` handling
//! - [`init`]: path resolution and context setup for the CLI
//! - [`error`]: error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
