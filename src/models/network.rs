//! Domain model types for wireless network records.
//!
//! These are the only artifacts the display/export collaborators consume;
//! every field they render must be derivable from here with no extra
//! computation.

use crate::models::SecretString;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Coarse throughput estimate derived from signal strength.
///
/// Advisory heuristic only, not calibrated to measured throughput. Ordered
/// by increasing estimated speed so callers can compare tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpeedEstimate {
    Under50,
    Mbps75,
    Mbps150,
    Mbps300,
    Mbps600Plus,
}

impl SpeedEstimate {
    /// Map a signal percentage to a throughput tier.
    ///
    /// Lower bounds are exclusive: a signal of exactly 80 falls into the
    /// 300 Mbps tier, not 600+.
    pub fn from_signal(signal_percent: u8) -> Self {
        if signal_percent > 80 {
            SpeedEstimate::Mbps600Plus
        } else if signal_percent > 60 {
            SpeedEstimate::Mbps300
        } else if signal_percent > 40 {
            SpeedEstimate::Mbps150
        } else if signal_percent > 20 {
            SpeedEstimate::Mbps75
        } else {
            SpeedEstimate::Under50
        }
    }

    /// The fixed display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            SpeedEstimate::Under50 => "<50 Mbps",
            SpeedEstimate::Mbps75 => "75 Mbps",
            SpeedEstimate::Mbps150 => "150 Mbps",
            SpeedEstimate::Mbps300 => "300 Mbps",
            SpeedEstimate::Mbps600Plus => "600+ Mbps",
        }
    }
}

impl std::fmt::Display for SpeedEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for SpeedEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One visible network as reported by the bulk scan listing.
///
/// Created fresh on every scan and owned by the snapshot that produced it.
/// SSIDs are not unique: multiple access points broadcasting the same SSID
/// yield one record each, preserved in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRecord {
    /// Network name; `"Unknown"` when the source block had no parseable name
    /// line, empty for hidden networks broadcasting a blank SSID.
    pub ssid: String,
    pub authentication: String,
    pub encryption: String,
    /// Signal strength, clamped to 0-100.
    pub signal_percent: u8,
    pub estimated_speed: SpeedEstimate,
    pub radio_type: String,
    pub channel: String,
    pub network_type: String,
}

/// Live state of the connected interface, when one is connected.
///
/// Transient snapshot; absent entirely when no interface is connected or the
/// status output could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectedInfo {
    pub ssid: String,
    pub signal_percent: u8,
    /// Receive rate label, `"<n> Mbps"` when reported, `"Unknown"` otherwise.
    pub speed: String,
}

/// Saved-credential state attached to a [`DisplayRecord`].
///
/// Always exactly one of three states: no saved profile, saved with a
/// retrievable secret, or saved without one. A failed reveal command and a
/// profile with no stored key both collapse into `Saved(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// The selected SSID has no saved profile on this host.
    NotSaved,
    /// A profile exists; the secret is `Some` only when the reveal command
    /// returned a non-empty `Key Content` field.
    Saved(Option<SecretString>),
}

impl CredentialStatus {
    /// Whether a saved profile exists for the network.
    pub fn has_saved_profile(&self) -> bool {
        matches!(self, CredentialStatus::Saved(_))
    }

    /// The revealed secret, if any.
    pub fn secret(&self) -> Option<&SecretString> {
        match self {
            CredentialStatus::Saved(secret) => secret.as_ref(),
            CredentialStatus::NotSaved => None,
        }
    }
}

impl Serialize for CredentialStatus {
    // Serialized for export consumers as {has_saved_profile, secret}. This is
    // the one deliberate exit point for the secret value.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CredentialStatus", 2)?;
        match self {
            CredentialStatus::NotSaved => {
                state.serialize_field("has_saved_profile", &false)?;
                state.serialize_field("secret", &None::<&str>)?;
            }
            CredentialStatus::Saved(secret) => {
                state.serialize_field("has_saved_profile", &true)?;
                state.serialize_field("secret", &secret.as_ref().map(|s| s.reveal()))?;
            }
        }
        state.end()
    }
}

/// Per-network inspection record produced by the correlation engine.
///
/// The embedded [`NetworkRecord`] carries live signal/speed values when the
/// host was connected to the selected network at capture time.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRecord {
    #[serde(flatten)]
    pub network: NetworkRecord,
    /// Displayed speed label: the live receive rate (`"<n> Mbps"`) when the
    /// host is connected to this network, the estimate's label otherwise.
    pub speed: String,
    pub credential: CredentialStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_tier_boundaries() {
        let cases = [
            (20, "<50 Mbps"),
            (21, "75 Mbps"),
            (40, "75 Mbps"),
            (41, "150 Mbps"),
            (60, "150 Mbps"),
            (61, "300 Mbps"),
            (80, "300 Mbps"),
            (81, "600+ Mbps"),
        ];
        for (signal, expected) in cases {
            assert_eq!(
                SpeedEstimate::from_signal(signal).label(),
                expected,
                "signal {}",
                signal
            );
        }
    }

    #[test]
    fn test_speed_tier_extremes() {
        assert_eq!(SpeedEstimate::from_signal(0), SpeedEstimate::Under50);
        assert_eq!(SpeedEstimate::from_signal(100), SpeedEstimate::Mbps600Plus);
    }

    #[test]
    fn test_speed_tier_monotonic() {
        let mut previous = SpeedEstimate::from_signal(0);
        for signal in 1..=100u8 {
            let current = SpeedEstimate::from_signal(signal);
            assert!(current >= previous, "tier dropped at signal {}", signal);
            previous = current;
        }
    }

    #[test]
    fn test_credential_status_states() {
        assert!(!CredentialStatus::NotSaved.has_saved_profile());
        assert!(CredentialStatus::Saved(None).has_saved_profile());
        assert!(CredentialStatus::Saved(None).secret().is_none());

        let saved = CredentialStatus::Saved(Some(SecretString::new("pw")));
        assert!(saved.has_saved_profile());
        assert_eq!(saved.secret().map(|s| s.reveal()), Some("pw"));
    }

    #[test]
    fn test_display_record_serialization() {
        let record = DisplayRecord {
            network: NetworkRecord {
                ssid: "Home".to_string(),
                authentication: "WPA2-Personal".to_string(),
                encryption: "CCMP".to_string(),
                signal_percent: 90,
                estimated_speed: SpeedEstimate::from_signal(90),
                radio_type: "802.11ax".to_string(),
                channel: "36".to_string(),
                network_type: "Infrastructure".to_string(),
            },
            speed: "866.7 Mbps".to_string(),
            credential: CredentialStatus::Saved(Some(SecretString::new("hunter2"))),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["ssid"], "Home");
        assert_eq!(json["estimated_speed"], "600+ Mbps");
        assert_eq!(json["speed"], "866.7 Mbps");
        assert_eq!(json["credential"]["has_saved_profile"], true);
        assert_eq!(json["credential"]["secret"], "hunter2");
    }

    #[test]
    fn test_not_saved_serialization() {
        let json = serde_json::to_value(CredentialStatus::NotSaved).unwrap();
        assert_eq!(json["has_saved_profile"], false);
        assert_eq!(json["secret"], serde_json::Value::Null);
    }
}
