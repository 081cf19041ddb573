//! Command implementations.
//!
//! Each module exposes one `execute` function taking the session store
//! and its parsed arguments. Commands print their own output (text or
//! JSON) and return errors for the caller to report.

pub mod create;
pub mod filter;
pub mod list;
pub mod reopen;
pub mod resolve;
pub mod search;
pub mod show;
pub mod suggest;
pub mod version;
pub mod vote;
