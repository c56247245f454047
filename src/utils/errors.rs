//! Error types for wlanprobe
//!
//! All error types use thiserror for clean error handling.
//! SECURITY: Error messages MUST NOT contain revealed network keys.

use std::time::Duration;

/// Errors from invoking the external wireless-control utility.
///
/// These never reach library consumers directly: every core wrapper degrades
/// an invocation failure to an empty result (empty list, `None`). The type
/// exists so the platform layer can report precisely what went wrong and the
/// core can log it before degrading.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("wireless utility not found: {0}")]
    ToolMissing(String),

    #[error("access denied running wireless utility")]
    AccessDenied,

    #[error("wireless utility exited with status {status}")]
    NonZeroExit { status: i32 },

    #[error("wireless utility timed out after {0:?}")]
    Timeout(Duration),

    #[error("I/O error invoking wireless utility: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from correlation requests.
///
/// `NotFound` is the one condition surfaced to callers: it means the
/// selection no longer matches the current scan (stale UI state), which the
/// caller must handle rather than the engine papering over it.
#[derive(Debug, thiserror::Error)]
pub enum CorrelationError {
    #[error("network '{0}' is not present in the current scan")]
    NotFound(String),
}
