//! Real wireless source backed by netsh.exe.
//!
//! Each method runs one `netsh wlan` invocation under an explicit timeout.
//! The child process is configured with `kill_on_drop`, so a timed-out or
//! cancelled invocation terminates the child instead of orphaning it —
//! netsh is known to hang on some wireless stacks.

use crate::constants::{CREATE_NO_WINDOW, WLAN_COMMAND_TIMEOUT_SECS};
use crate::core::source::WlanSource;
use crate::utils::SourceError;
use std::io;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Wireless source invoking the Windows `netsh wlan` utility.
pub struct NetshWlan {
    command_timeout: Duration,
}

impl NetshWlan {
    /// Create a source with the default per-invocation timeout.
    pub fn new() -> Self {
        Self {
            command_timeout: Duration::from_secs(WLAN_COMMAND_TIMEOUT_SECS),
        }
    }

    /// Create a source with a caller-chosen per-invocation timeout.
    pub fn with_timeout(command_timeout: Duration) -> Self {
        Self { command_timeout }
    }

    /// Run `netsh wlan <args>` and capture decoded stdout.
    ///
    /// Single best-effort invocation: no retry. Non-zero exit and timeout
    /// map to their own [`SourceError`] variants so the core can log what
    /// happened before degrading.
    async fn run_wlan(&self, args: &[&str]) -> Result<String, SourceError> {
        let mut command = Command::new("netsh");
        command.arg("wlan").args(args);
        command.kill_on_drop(true);
        command.creation_flags(CREATE_NO_WINDOW);

        let output = timeout(self.command_timeout, command.output())
            .await
            .map_err(|_| SourceError::Timeout(self.command_timeout))?
            .map_err(map_spawn_error)?;

        if !output.status.success() {
            return Err(SourceError::NonZeroExit {
                status: output.status.code().unwrap_or(-1),
            });
        }

        // netsh output is localized and not guaranteed UTF-8; decode lossily
        // rather than failing the whole invocation on a stray byte.
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for NetshWlan {
    fn default() -> Self {
        Self::new()
    }
}

fn map_spawn_error(err: io::Error) -> SourceError {
    match err.kind() {
        io::ErrorKind::NotFound => SourceError::ToolMissing("netsh".to_string()),
        io::ErrorKind::PermissionDenied => SourceError::AccessDenied,
        _ => SourceError::Io(err),
    }
}

#[async_trait::async_trait]
impl WlanSource for NetshWlan {
    async fn list_networks(&self) -> Result<String, SourceError> {
        self.run_wlan(&["show", "networks", "mode=bssid"]).await
    }

    async fn interface_status(&self) -> Result<String, SourceError> {
        self.run_wlan(&["show", "interfaces"]).await
    }

    async fn list_profiles(&self) -> Result<String, SourceError> {
        self.run_wlan(&["show", "profiles"]).await
    }

    async fn reveal_profile(&self, profile_name: &str) -> Result<String, SourceError> {
        // Profile name passed as a single argv entry; never interpolated
        // into a shell line.
        let name_arg = format!("name={}", profile_name);
        self.run_wlan(&["show", "profile", &name_arg, "key=clear"])
            .await
    }
}
