//! Platform-specific implementations (Windows wireless stack)
//!
//! All platform-specific code is isolated here. The core engine only ever
//! sees the [`crate::core::WlanSource`] trait, so non-Windows builds and
//! tests run against mock sources.

pub mod netsh;

pub use netsh::NetshWlan;
