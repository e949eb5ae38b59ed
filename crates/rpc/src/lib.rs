//! Cinder RPC - CLI orchestrator
//!
//! This crate provides the CLI binary and command orchestration. The
//! ledger itself lives in `cinder-ledger`; this is only a host that
//! invokes its operations and observes its notifications.

pub mod commands;
pub mod context;

pub use context::AppContext;
