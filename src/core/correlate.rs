//! Correlation of scan results, live interface state, and saved profiles.
//!
//! This is where the two sources of truth meet: the bulk scan listing holds
//! a stale signal snapshot for the network the host is actively connected
//! to, while the interface status reports live numbers. Per-network display
//! records always prefer the live values when SSIDs match.

use crate::core::interface::connected_network;
use crate::core::profiles::{reveal_secret, saved_profile_names};
use crate::core::scan::scan_networks;
use crate::core::source::WlanSource;
use crate::models::{ConnectedInfo, CredentialStatus, DisplayRecord, NetworkRecord, SpeedEstimate};
use crate::utils::CorrelationError;

/// One scan session's worth of wireless state.
///
/// An explicit session object: capture it once, then derive display records
/// from it. Records are owned by the snapshot that produced them and are
/// never persisted or mutated in place; a fresh scan means a fresh snapshot.
#[derive(Debug, Clone, Default)]
pub struct WlanSnapshot {
    /// Visible networks in source order, duplicates preserved.
    pub networks: Vec<NetworkRecord>,
    /// Live state of the connected interface, if any.
    pub connected: Option<ConnectedInfo>,
    /// Saved profile names in listing order.
    pub profile_names: Vec<String>,
}

impl WlanSnapshot {
    /// Capture a snapshot by running the three bulk invocations.
    ///
    /// Each invocation degrades independently: a failed scan still leaves
    /// profile names usable and vice versa.
    pub async fn capture(source: &dyn WlanSource) -> Self {
        let networks = scan_networks(source).await;
        let connected = connected_network(source).await;
        let profile_names = saved_profile_names(source).await;

        WlanSnapshot {
            networks,
            connected,
            profile_names,
        }
    }

    /// Whether a saved profile exists for the given SSID.
    pub fn has_profile(&self, ssid: &str) -> bool {
        self.profile_names.iter().any(|name| name == ssid)
    }

    /// Build the display record for a selected SSID.
    ///
    /// The per-profile key reveal runs against `source` only when a saved
    /// profile exists for the selection; see [`build_display_record`].
    pub async fn display_record(
        &self,
        source: &dyn WlanSource,
        selected_ssid: &str,
    ) -> Result<DisplayRecord, CorrelationError> {
        build_display_record(source, selected_ssid, self).await
    }
}

/// Materialize the display record for one selected network.
///
/// 1. Locate the first scanned record matching `selected_ssid`; an SSID
///    absent from the snapshot means the caller's selection is stale, which
///    is surfaced as [`CorrelationError::NotFound`] rather than masked.
/// 2. If the host is connected to that SSID, override signal and estimated
///    speed with the live values; the displayed speed label becomes the live
///    receive rate instead of the heuristic estimate.
/// 3. Attach credential status: [`CredentialStatus::NotSaved`] when no
///    profile exists, otherwise `Saved` with the outcome of a key reveal.
pub async fn build_display_record(
    source: &dyn WlanSource,
    selected_ssid: &str,
    snapshot: &WlanSnapshot,
) -> Result<DisplayRecord, CorrelationError> {
    let record = snapshot
        .networks
        .iter()
        .find(|record| record.ssid == selected_ssid)
        .ok_or_else(|| CorrelationError::NotFound(selected_ssid.to_string()))?;

    let mut network = record.clone();
    let mut speed = None;
    if let Some(connected) = snapshot.connected.as_ref() {
        if connected.ssid == selected_ssid {
            network.signal_percent = connected.signal_percent;
            network.estimated_speed = SpeedEstimate::from_signal(connected.signal_percent);
            speed = Some(connected.speed.clone());
        }
    }
    let speed = speed.unwrap_or_else(|| network.estimated_speed.label().to_string());

    let credential = if snapshot.has_profile(selected_ssid) {
        CredentialStatus::Saved(reveal_secret(source, selected_ssid).await)
    } else {
        CredentialStatus::NotSaved
    };

    Ok(DisplayRecord {
        network,
        speed,
        credential,
    })
}
