//! Mock wireless source for testing without a real wireless stack.
//!
//! Returns canned netsh-shaped output matching what a Windows host reports.
//! Used to exercise parser and correlation logic in tests without invoking
//! the actual utility.

use crate::core::source::WlanSource;
use crate::utils::SourceError;

const LISTING: &str = "\
Interface name : Wi-Fi
There are 2 networks currently visible.

SSID 1 : HomeNet
    Network type            : Infrastructure
    Authentication          : WPA2-Personal
    Encryption              : CCMP
    Signal                  : 78%
    Radio type              : 802.11ac
    Channel                 : 44

SSID 2 : CoffeeShop
    Network type            : Infrastructure
    Authentication          : Open
    Encryption              : None
    Signal                  : 34%
    Radio type              : 802.11n
    Channel                 : 6
";

const INTERFACE_STATUS: &str = "\
There is 1 interface on the system:

    Name                   : Wi-Fi
    State                  : connected
    SSID                   : HomeNet
    BSSID                  : aa:bb:cc:dd:ee:01
    Receive rate (Mbps)    : 866.7
    Signal                 : 92%
";

const PROFILES: &str = "\
Profiles on interface Wi-Fi:

User profiles
-------------
    All User Profile     : HomeNet
    All User Profile     : CoffeeShop
";

const REVEAL_WITH_KEY: &str = "\
Security settings
-----------------
    Authentication         : WPA2-Personal
    Security key           : Present
    Key Content            : hunter2
";

const REVEAL_EMPTY_KEY: &str = "\
Security settings
-----------------
    Security key           : Present
    Key Content            :
";

/// Behaviors a mock can simulate per scenario.
#[derive(Debug, Clone, Copy)]
enum RevealBehavior {
    WithKey,
    EmptyKey,
    Fails,
}

/// Mock source returning canned command output.
pub struct MockWlanSource {
    reachable: bool,
    reveal: RevealBehavior,
}

impl MockWlanSource {
    /// A host with two visible networks, connected to "HomeNet", with two
    /// saved profiles whose keys reveal successfully.
    pub fn healthy() -> Self {
        Self {
            reachable: true,
            reveal: RevealBehavior::WithKey,
        }
    }

    /// A host where every invocation fails (utility missing).
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            reveal: RevealBehavior::Fails,
        }
    }

    /// Reveal output carries a present-but-empty `Key Content` field.
    pub fn with_empty_key(mut self) -> Self {
        self.reveal = RevealBehavior::EmptyKey;
        self
    }

    /// The reveal invocation itself fails.
    pub fn with_failing_reveal(mut self) -> Self {
        self.reveal = RevealBehavior::Fails;
        self
    }

    fn check_reachable(&self) -> Result<(), SourceError> {
        if self.reachable {
            Ok(())
        } else {
            Err(SourceError::ToolMissing("netsh".to_string()))
        }
    }
}

#[async_trait::async_trait]
impl WlanSource for MockWlanSource {
    async fn list_networks(&self) -> Result<String, SourceError> {
        self.check_reachable()?;
        Ok(LISTING.to_string())
    }

    async fn interface_status(&self) -> Result<String, SourceError> {
        self.check_reachable()?;
        Ok(INTERFACE_STATUS.to_string())
    }

    async fn list_profiles(&self) -> Result<String, SourceError> {
        self.check_reachable()?;
        Ok(PROFILES.to_string())
    }

    async fn reveal_profile(&self, _profile_name: &str) -> Result<String, SourceError> {
        self.check_reachable()?;
        match self.reveal {
            RevealBehavior::WithKey => Ok(REVEAL_WITH_KEY.to_string()),
            RevealBehavior::EmptyKey => Ok(REVEAL_EMPTY_KEY.to_string()),
            RevealBehavior::Fails => Err(SourceError::NonZeroExit { status: 1 }),
        }
    }
}
