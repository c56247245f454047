//! Core parsing and correlation engine (platform-agnostic)
//!
//! CRITICAL: This module MUST NOT import platform-specific code or UI
//! frameworks. Everything here is a pure transform over captured command
//! text, safe to call from any thread.

pub mod correlate;
pub mod interface;
pub mod profiles;
pub mod scan;
pub mod source;

// Test utilities for mock sources (tests only)
#[cfg(test)]
pub mod mock_source;

pub use correlate::{build_display_record, WlanSnapshot};
pub use interface::{connected_network, parse_interface_status};
pub use profiles::{parse_key_content, parse_profile_names, reveal_secret, saved_profile_names};
pub use scan::{parse_network_list, scan_networks};
pub use source::WlanSource;
