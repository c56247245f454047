//! Wireless-utility abstraction.
//!
//! This trait allows testing without a real wireless stack by supporting mock
//! implementations. The platform-specific netsh implementation is in
//! `src/platform/`.

use crate::utils::SourceError;

/// Captured text of the four wireless-control invocations the engine parses.
///
/// Implementations run one external command per method and return its raw
/// stdout. They are responsible for bounding each invocation with a timeout
/// and for killing the child process on timeout or cancellation; the
/// underlying utility is known to hang on some network stacks.
///
/// All methods are best-effort single invocations: no retry, no backoff.
#[async_trait::async_trait]
pub trait WlanSource: Send + Sync {
    /// Output of the bulk scan listing with per-BSSID detail
    /// (`netsh wlan show networks mode=bssid`).
    async fn list_networks(&self) -> Result<String, SourceError>;

    /// Output of the interface status query (`netsh wlan show interfaces`).
    async fn interface_status(&self) -> Result<String, SourceError>;

    /// Output of the saved-profile listing (`netsh wlan show profiles`).
    async fn list_profiles(&self) -> Result<String, SourceError>;

    /// Output of the per-profile key reveal
    /// (`netsh wlan show profile <name> key=clear`).
    ///
    /// SECURITY: The returned text can contain a private network credential.
    /// Implementations and callers MUST NOT log or cache it; the registry
    /// extracts the key field and drops the rest.
    async fn reveal_profile(&self, profile_name: &str) -> Result<String, SourceError>;
}
