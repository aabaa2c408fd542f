//! outlay-cli - Command-line personal expense tracker
//!
//! This library provides the core functionality for the outlay expense
//! tracker: a ledger of expense records persisted to a single JSON file,
//! manipulated one operation per process run.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense record, id, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (the five ledger operations)
//! - `display`: Terminal formatting
//! - `cli`: clap subcommands and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay_cli::config::{paths::OutlayPaths, settings::Settings};
//! use outlay_cli::services::ExpenseService;
//! use outlay_cli::storage::Storage;
//!
//! let paths = OutlayPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let id = ExpenseService::new(&storage).add("Lunch", "12.50")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::OutlayError;
