//! `fixdesk` - Session-scoped issue desk library
//!
//! This crate provides the console front end for the `fxd` tool: an
//! interactive session (or one-shot commands) over the in-memory issue
//! store from [`fixdesk_lib`]. All state is transient and owned by the
//! running process; nothing is written to disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line grammar, dispatch, and the interactive session
//! - [`config`] - Optional YAML configuration and environment overrides
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//! - [`validation`] - Form-boundary checks for issue input

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod validation;

pub use cli::run;
