//! todo - In-Memory To-Do List Engine
//!
//! This library provides the core functionality for the todo CLI tool:
//! an ordered list of text tasks with completion state, a filter mode,
//! and derived read-only views recomputed on demand.
//!
//! # Core Concepts
//!
//! - **TaskStore**: Owns the ordered task list and the active filter
//! - **Snapshot**: The pair of task list and filter handed to projections
//! - **Projections**: Pure derivations — the filtered view and the stats view
//! - **Script**: Line-oriented command language driving the store
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.todo.toml`
//! - `error`: Error types and result aliases
//! - `ids`: Monotonic task id allocation
//! - `task`: Task records and the mutable store
//! - `filter`: Filter modes and the filtered-view projection
//! - `stats`: Aggregate statistics projection
//! - `script`: Command parsing for the run driver
//! - `output`: Shared JSON/human output formatting

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod ids;
pub mod output;
pub mod script;
pub mod stats;
pub mod task;

pub use error::{Error, Result};
