//! Bridge client abstraction.
//!
//! The adapter only ever talks to the bridge through these two traits:
//! [`BridgeConnector`] covers the calls that need no credentials, and
//! [`BridgeSession`] the calls made with a paired user. [`crate::http`]
//! provides the implementation used outside of tests.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::payload::LightStateUpdate;
use crate::status::LightStatus;

type Result<T> = std::result::Result<T, Error>;

/// A bridge reported by nupnp discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredBridge {
    pub id: String,
    #[serde(rename = "internalipaddress")]
    pub ipaddress: String,
}

/// Entry of the bridge's light list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub light_type: String,
}

/// Unauthenticated access to bridges on the local network.
pub trait BridgeConnector: Send + Sync {
    type Session: BridgeSession;

    /// Ask the discovery portal for bridges on this network.
    fn nupnp_search(&self) -> impl Future<Output = Result<Vec<DiscoveredBridge>>> + Send;

    /// Register a new application user. Fails unless the link button was pressed.
    fn register_user(
        &self,
        ip: &str,
        app_name: &str,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Open a session for a paired user. Makes no network call.
    fn session(&self, address: &str, user: &str) -> Self::Session;
}

/// Authenticated access to one bridge.
pub trait BridgeSession: Send + Sync {
    fn lights(&self) -> impl Future<Output = Result<Vec<LightInfo>>> + Send;

    fn set_light_state(
        &self,
        id: &str,
        state: &LightStateUpdate,
    ) -> impl Future<Output = Result<()>> + Send;

    fn light_status(&self, id: &str) -> impl Future<Output = Result<LightStatus>> + Send;
}
