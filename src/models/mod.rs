//! # Domain Models
//!
//! Core data structures for scanned networks, live connection state, and
//! revealed credentials.
//!
//! ## Security Design
//!
//! The [`SecretString`] type provides memory-safe handling of revealed
//! network keys:
//! - Key data is zeroed on drop to prevent leakage via swap/core dumps
//! - Never exposed in `Debug` or `Display` implementations
//! - Uses unsafe code (carefully audited) for memory zeroing
//!
//! Secrets exist only in the [`network::DisplayRecord`] handed back to the
//! caller; nothing in this crate caches them, and the logger never sees them.

pub mod network;
pub mod secret;

pub use network::{ConnectedInfo, CredentialStatus, DisplayRecord, NetworkRecord, SpeedEstimate};
pub use secret::SecretString;
