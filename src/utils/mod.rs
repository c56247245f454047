//! # Utilities Module
//!
//! Cross-cutting concerns shared by the core engine and the platform layer.
//!
//! ## Modules
//!
//! - [`errors`]: Typed error hierarchy using `thiserror` for domain-specific errors
//!
//! ## Design Notes
//!
//! Error types are defined in this module to avoid circular dependencies
//! between the `core` and `platform` modules. Invocation failures
//! ([`SourceError`]) are a platform concern that the core deliberately
//! degrades to empty results; correlation failures ([`CorrelationError`])
//! are the one error family surfaced to library consumers.

pub mod errors;

pub use errors::{CorrelationError, SourceError};
