//! wlanprobe - wireless network inventory and credential correlation
//!
//! Parses the free-text output of the Windows wireless-control utility into
//! typed network records, resolves the currently connected network, cross-
//! references saved-profile credentials, and applies a coarse
//! signal-to-throughput heuristic. Presentation (tables, export, UI) is left
//! to consumers of [`models::NetworkRecord`] and [`models::DisplayRecord`].

// Public modules
pub mod constants;
pub mod core;
pub mod logger;
pub mod models;
pub mod utils;

// Platform-specific modules
#[cfg(windows)]
pub mod platform;

// Re-export commonly used types
pub use core::{build_display_record, WlanSnapshot, WlanSource};
pub use models::{
    ConnectedInfo, CredentialStatus, DisplayRecord, NetworkRecord, SecretString, SpeedEstimate,
};
pub use utils::{CorrelationError, SourceError};
