//! Saved-profile registry: profile listing and per-profile key reveal.
//!
//! SECURITY: The reveal path handles private network credentials. The secret
//! is extracted into a [`SecretString`] and the rest of the command output is
//! dropped immediately; nothing here caches or logs key material.

use crate::core::source::WlanSource;
use crate::logger;
use crate::models::SecretString;

const PROFILE_LABEL: &str = "All User Profile";
const KEY_LABEL: &str = "Key Content";

/// List the names of saved wireless profiles on this host.
///
/// Invocation failure degrades to an empty list (logged, not surfaced).
pub async fn saved_profile_names(source: &dyn WlanSource) -> Vec<String> {
    match source.list_profiles().await {
        Ok(text) => parse_profile_names(&text),
        Err(err) => {
            logger::log_warn(&format!("profile listing failed: {}", err));
            Vec::new()
        }
    }
}

/// Extract profile names from the listing output, in appearance order.
///
/// One name per `All User Profile : <name>` line. Duplicate names are kept;
/// the listing is authoritative about what it reports.
pub fn parse_profile_names(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let (label, value) = line.split_once(':')?;
            if label.trim() == PROFILE_LABEL {
                Some(value.trim().to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Reveal the stored key for a single saved profile.
///
/// Returns `Some` only when the reveal output carries a non-empty
/// `Key Content` field. A profile with no stored key, a key field that is
/// present but empty, and a failed invocation all collapse to `None` — the
/// external contract does not distinguish them. The failure case is logged
/// (profile name only, never any output text) so the conflation stays
/// diagnosable.
pub async fn reveal_secret(source: &dyn WlanSource, profile_name: &str) -> Option<SecretString> {
    match source.reveal_profile(profile_name).await {
        Ok(text) => parse_key_content(&text),
        Err(err) => {
            logger::log_debug(&format!(
                "key reveal failed for profile '{}': {}",
                profile_name, err
            ));
            None
        }
    }
}

/// Extract the key value from a per-profile reveal output.
///
/// `None` when the field is absent or present-but-empty.
pub fn parse_key_content(text: &str) -> Option<SecretString> {
    for line in text.lines() {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        if label.trim() == KEY_LABEL {
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            return Some(SecretString::new(value));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_LISTING: &str = "\
Profiles on interface Wi-Fi:

Group policy profiles (read only)
---------------------------------
    <None>

User profiles
-------------
    All User Profile     : HomeNet
    All User Profile     : CoffeeShop
    All User Profile     : Office 5GHz
";

    #[test]
    fn test_profile_names_in_appearance_order() {
        let names = parse_profile_names(PROFILE_LISTING);
        assert_eq!(names, vec!["HomeNet", "CoffeeShop", "Office 5GHz"]);
    }

    #[test]
    fn test_no_profiles_yields_empty() {
        assert!(parse_profile_names("").is_empty());
        assert!(parse_profile_names("Profiles on interface Wi-Fi:\n    <None>\n").is_empty());
    }

    #[test]
    fn test_key_content_present() {
        let text = "\
Security settings
-----------------
    Authentication         : WPA2-Personal
    Security key           : Present
    Key Content            : correct horse battery
";
        let secret = parse_key_content(text).unwrap();
        assert_eq!(secret.reveal(), "correct horse battery");
    }

    #[test]
    fn test_key_content_absent() {
        let text = "    Authentication : WPA2-Enterprise\n    Security key : Absent\n";
        assert!(parse_key_content(text).is_none());
    }

    #[test]
    fn test_key_content_present_but_empty() {
        assert!(parse_key_content("    Key Content            : \n").is_none());
    }
}
