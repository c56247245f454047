//! # Application-Wide Constants
//!
//! Centralized configuration values and magic numbers used throughout wlanprobe.
//!
//! ## Design Rationale
//!
//! Constants are defined here (rather than scattered across modules) to:
//! - Make configuration changes easier (single source of truth)
//! - Improve discoverability (grep for constant name finds definition + all uses)
//! - Document WHY each value was chosen

/// Windows API flag to create a process without a visible console window
///
/// Used when launching netsh.exe so a GUI consumer of this library does not
/// get a flash of command prompt window per invocation.
#[cfg(windows)]
pub const CREATE_NO_WINDOW: u32 = 0x08000000;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for any single netsh invocation before killing it
///
/// **Rationale**: netsh has no timeout of its own and is known to hang on
/// some wireless stacks. 5 seconds covers a full BSSID-mode scan listing on
/// slow adapters while keeping a stuck lookup from blocking the caller
/// indefinitely. The spawned child is killed on timeout, never orphaned.
pub const WLAN_COMMAND_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// Parsing limits
// ============================================================================

/// Upper bound for a reported signal percentage
///
/// Values above this are clamped rather than rejected, so a malformed
/// `Signal : 150%` line still yields a record that satisfies the 0-100
/// invariant.
pub const MAX_SIGNAL_PERCENT: u8 = 100;
