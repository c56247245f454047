//! Connected-network resolution from the interface status output.

use crate::core::scan::parse_signal_percent;
use crate::core::source::WlanSource;
use crate::logger;
use crate::models::ConnectedInfo;

/// Resolve the currently connected network, if any.
///
/// Invocation failure degrades to `None`, same as "not connected". The
/// distinction is logged but not surfaced; callers only care whether live
/// data exists to merge.
pub async fn connected_network(source: &dyn WlanSource) -> Option<ConnectedInfo> {
    match source.interface_status().await {
        Ok(text) => parse_interface_status(&text),
        Err(err) => {
            logger::log_debug(&format!("interface status unavailable: {}", err));
            None
        }
    }
}

/// Parse the flat `label : value` lines of the interface status output.
///
/// Returns `Some` only when both `SSID` and `Signal` are present; a
/// disconnected interface reports neither. Labels are matched exactly after
/// trimming leading whitespace, so `BSSID` never shadows `SSID`. The receive
/// rate is optional and reported as a `"<n> Mbps"` label, `"Unknown"` when
/// absent.
pub fn parse_interface_status(text: &str) -> Option<ConnectedInfo> {
    let mut ssid: Option<String> = None;
    let mut signal_percent: Option<u8> = None;
    let mut speed: Option<String> = None;

    for line in text.lines() {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let label = label.trim();
        let value = value.trim();

        match label {
            "SSID" if ssid.is_none() && !value.is_empty() => {
                ssid = Some(value.to_string());
            }
            "Signal" if signal_percent.is_none() => {
                signal_percent = parse_signal_percent(value);
            }
            "Receive rate (Mbps)" if speed.is_none() && !value.is_empty() => {
                speed = Some(format!("{} Mbps", value));
            }
            _ => {}
        }
    }

    Some(ConnectedInfo {
        ssid: ssid?,
        signal_percent: signal_percent?,
        speed: speed.unwrap_or_else(|| "Unknown".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONNECTED_OUTPUT: &str = "\
There is 1 interface on the system:

    Name                   : Wi-Fi
    Description            : Intel(R) Wi-Fi 6 AX201
    State                  : connected
    SSID                   : HomeNet
    BSSID                  : aa:bb:cc:dd:ee:01
    Radio type             : 802.11ax
    Channel                : 36
    Receive rate (Mbps)    : 866.7
    Transmit rate (Mbps)   : 866.7
    Signal                 : 92%
";

    #[test]
    fn test_connected_interface_resolves() {
        let info = parse_interface_status(CONNECTED_OUTPUT).unwrap();
        assert_eq!(info.ssid, "HomeNet");
        assert_eq!(info.signal_percent, 92);
        assert_eq!(info.speed, "866.7 Mbps");
    }

    #[test]
    fn test_bssid_label_does_not_shadow_ssid() {
        let text = "    BSSID : aa:bb:cc:dd:ee:01\n    Signal : 50%\n";
        assert!(parse_interface_status(text).is_none());
    }

    #[test]
    fn test_disconnected_interface_is_absent() {
        let text = "\
    Name                   : Wi-Fi
    State                  : disconnected
";
        assert!(parse_interface_status(text).is_none());
    }

    #[test]
    fn test_missing_signal_is_absent() {
        let text = "    SSID : HomeNet\n    State : connected\n";
        assert!(parse_interface_status(text).is_none());
    }

    #[test]
    fn test_missing_receive_rate_reports_unknown() {
        let text = "    SSID : HomeNet\n    Signal : 40%\n";
        let info = parse_interface_status(text).unwrap();
        assert_eq!(info.speed, "Unknown");
    }

    #[test]
    fn test_empty_input_is_absent() {
        assert!(parse_interface_status("").is_none());
    }
}
