//! Driver settings and configuration.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Pairing data persisted by the platform between runs.
///
/// ```
/// use hue_light_driver::Settings;
///
/// let settings = Settings::paired("abcdef0123", "192.168.1.20");
/// assert!(settings.is_paired());
/// assert_eq!(
///     serde_json::to_string(&settings).unwrap(),
///     r#"{"user":"abcdef0123","bridgeAddress":"192.168.1.20"}"#,
/// );
/// assert!(!Settings::default().is_paired());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub bridge_address: Option<String>,
}

impl Settings {
    pub fn paired(user: &str, bridge_address: &str) -> Self {
        Settings {
            user: Some(user.to_string()),
            bridge_address: Some(bridge_address.to_string()),
        }
    }

    /// Both the user token and the bridge address are known.
    pub fn is_paired(&self) -> bool {
        self.credentials().is_some()
    }

    /// `(bridge_address, user)` when paired.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.bridge_address, &self.user) {
            (Some(address), Some(user)) => Some((address.as_str(), user.as_str())),
            _ => None,
        }
    }
}

/// Platform-owned storage for [`Settings`].
pub trait SettingsStore: Send + Sync {
    /// Load the stored settings.
    fn get(&self) -> impl Future<Output = Result<Settings>> + Send;

    /// Replace the stored settings.
    fn set(&self, settings: &Settings) -> impl Future<Output = Result<()>> + Send;
}

impl<T: SettingsStore> SettingsStore for Arc<T> {
    fn get(&self) -> impl Future<Output = Result<Settings>> + Send {
        (**self).get()
    }

    fn set(&self, settings: &Settings) -> impl Future<Output = Result<()>> + Send {
        (**self).set(settings)
    }
}

/// A [`SettingsStore`] that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: Mutex<Settings>,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }

    /// Current contents, without going through the async interface.
    pub fn snapshot(&self) -> Settings {
        self.settings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SettingsStore for MemoryStore {
    async fn get(&self) -> Result<Settings> {
        Ok(self.snapshot())
    }

    async fn set(&self, settings: &Settings) -> Result<()> {
        *self
            .settings
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = settings.clone();
        Ok(())
    }
}

/// Options for the adapter and its default HTTP bridge client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Sent as `devicetype` when registering with the bridge.
    pub app_name: String,
    /// Portal answering nupnp discovery requests.
    pub discovery_url: String,
    /// Per-request timeout for the HTTP client. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl AdapterConfig {
    pub const DEFAULT_APP_NAME: &'static str = "Thinglator hue-light driver";
    pub const DEFAULT_DISCOVERY_URL: &'static str = "https://discovery.meethue.com";

    pub fn with_app_name(mut self, app_name: &str) -> Self {
        self.app_name = app_name.to_string();
        self
    }

    pub fn with_discovery_url(mut self, url: &str) -> Self {
        self.discovery_url = url.to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            app_name: Self::DEFAULT_APP_NAME.to_string(),
            discovery_url: Self::DEFAULT_DISCOVERY_URL.to_string(),
            request_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_platform_json() {
        let settings: Settings =
            serde_json::from_str(r#"{"user": null, "bridgeAddress": "10.0.0.2"}"#).unwrap();
        assert!(!settings.is_paired());
        assert_eq!(settings.bridge_address.as_deref(), Some("10.0.0.2"));

        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::default();
        assert_eq!(store.get().await.unwrap(), Settings::default());

        let paired = Settings::paired("u", "10.0.0.2");
        store.set(&paired).await.unwrap();
        assert_eq!(store.get().await.unwrap(), paired);
        assert_eq!(store.snapshot().credentials(), Some(("10.0.0.2", "u")));
    }

    #[test]
    fn test_default_config() {
        let config = AdapterConfig::default().with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.app_name, "Thinglator hue-light driver");
        assert_eq!(config.discovery_url, "https://discovery.meethue.com");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }
}
