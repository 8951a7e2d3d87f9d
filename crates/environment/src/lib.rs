//! Read-only access to process environment variables.
//!
//! Provides lookup-with-default semantics and a deterministic, sorted
//! snapshot of every variable, used for startup and heartbeat logging.

pub mod snapshot;
pub mod source;

pub use snapshot::format_snapshot;
pub use source::{Environment, ProcessEnv, StaticEnv};

/// Returns every process variable as sorted `KEY=VALUE` entries joined by `", "`.
pub fn snapshot() -> String {
    ProcessEnv.snapshot()
}
