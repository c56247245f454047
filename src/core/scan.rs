//! Network list parsing for the bulk scan listing.
//!
//! Turns the free-text output of the "show networks mode=bssid" invocation
//! into an ordered sequence of [`NetworkRecord`]s. Parsing is a pure, total
//! transform: any input (including empty) yields a sequence, never an error.

use crate::constants::MAX_SIGNAL_PERCENT;
use crate::core::source::WlanSource;
use crate::logger;
use crate::models::{NetworkRecord, SpeedEstimate};

/// Literal marker that opens each network section in the listing output.
///
/// Note this is a substring of `BSSID ` as well, so per-BSSID detail sections
/// start blocks of their own. That is deliberate: each access-point entry
/// yields its own record, which is how duplicate networks stay visible as
/// separate rows instead of being merged.
const BLOCK_MARKER: &str = "SSID ";

/// Scan for visible networks via the given source.
///
/// An invocation failure (utility missing, access denied, non-zero exit,
/// timeout) degrades to an empty list. It is logged but never propagated;
/// callers always get a usable (possibly empty) sequence.
pub async fn scan_networks(source: &dyn WlanSource) -> Vec<NetworkRecord> {
    match source.list_networks().await {
        Ok(text) => parse_network_list(&text),
        Err(err) => {
            logger::log_warn(&format!("network scan failed: {}", err));
            Vec::new()
        }
    }
}

/// Parse the raw scan-listing text into records, preserving source order.
///
/// The text is split on [`BLOCK_MARKER`]; whatever precedes the first marker
/// (interface header, network count) is discarded. Each block is scanned
/// line by line exactly once, filling a builder on the first occurrence of
/// each labeled field.
pub fn parse_network_list(text: &str) -> Vec<NetworkRecord> {
    let mut blocks = text.split(BLOCK_MARKER);
    blocks.next(); // preamble before the first marker

    blocks.map(parse_block).collect()
}

/// Accumulates fields as the line scanner walks a block.
///
/// `Option` per field keeps "absent" distinct from "present but empty" until
/// the final record is built, and makes first-occurrence-wins assignment
/// explicit.
#[derive(Default)]
struct RecordBuilder {
    ssid: Option<String>,
    authentication: Option<String>,
    encryption: Option<String>,
    signal_percent: Option<u8>,
    radio_type: Option<String>,
    channel: Option<String>,
    network_type: Option<String>,
}

impl RecordBuilder {
    fn set_once(slot: &mut Option<String>, value: &str) {
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    fn build(self) -> NetworkRecord {
        let signal_percent = self.signal_percent.unwrap_or(0);
        NetworkRecord {
            ssid: self.ssid.unwrap_or_else(|| "Unknown".to_string()),
            authentication: self.authentication.unwrap_or_default(),
            encryption: self.encryption.unwrap_or_default(),
            signal_percent,
            estimated_speed: SpeedEstimate::from_signal(signal_percent),
            radio_type: self.radio_type.unwrap_or_default(),
            channel: self.channel.unwrap_or_default(),
            network_type: self.network_type.unwrap_or_default(),
        }
    }
}

fn parse_block(block: &str) -> NetworkRecord {
    let mut builder = RecordBuilder::default();
    let mut lines = block.lines();

    // First line carries the section name: "<index> : <name>". A name is
    // free text up to end of line; a missing colon means the block has no
    // parseable name at all.
    if let Some(first) = lines.next() {
        if let Some((_, name)) = first.split_once(':') {
            builder.ssid = Some(name.trim().to_string());
        }
    }

    for line in lines {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let label = label.trim();
        let value = value.trim();

        match label {
            "Authentication" => RecordBuilder::set_once(&mut builder.authentication, value),
            "Encryption" => RecordBuilder::set_once(&mut builder.encryption, value),
            "Radio type" => RecordBuilder::set_once(&mut builder.radio_type, value),
            "Network type" => RecordBuilder::set_once(&mut builder.network_type, value),
            "Signal" => {
                if builder.signal_percent.is_none() {
                    builder.signal_percent = parse_signal_percent(value);
                }
            }
            "Channel" => {
                if builder.channel.is_none() {
                    let digits: String =
                        value.chars().take_while(|c| c.is_ascii_digit()).collect();
                    if !digits.is_empty() {
                        builder.channel = Some(digits);
                    }
                }
            }
            _ => {}
        }
    }

    builder.build()
}

/// Parse a `NN%` signal value, clamping to the 0-100 invariant.
///
/// Returns `None` for anything that is not digits followed by `%`, so a
/// malformed line counts as field-absent rather than poisoning the record.
pub(crate) fn parse_signal_percent(value: &str) -> Option<u8> {
    let digits = value.strip_suffix('%')?.trim_end();
    let parsed: u32 = digits.parse().ok()?;
    Some(parsed.min(MAX_SIGNAL_PERCENT as u32) as u8)
}
