//! # hue_light_driver
//!
//! A home-automation driver for Philips Hue lights.
//!
//! The crate adapts a platform's generic device hooks (pairing, discovery,
//! commands, state events) onto the Hue bridge's local REST API. It converts
//! platform units (hue in degrees, saturation and brightness in 0-1, durations
//! in seconds) into bridge units and back, runs the one-time link-button
//! pairing, and publishes the light state after every command.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hue_light_driver::{
//!     AdapterConfig, Colour, HsbProps, HttpConnector, HueLightAdapter, MemoryStore,
//! };
//!
//! async fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AdapterConfig::default();
//!     let connector = HttpConnector::new(&config)?;
//!     let sink = |kind, id: &str, state: &_| println!("{kind} {id}: {state:?}");
//!     let mut adapter = HueLightAdapter::new(connector, MemoryStore::default(), sink, config).await?;
//!
//!     // Press the link button on the bridge first.
//!     let result = adapter.authentication_step0(&serde_json::Value::Null).await;
//!     assert!(result.success, "{:?}", result.message);
//!
//!     for device in adapter.discover().await? {
//!         println!("{} {} {:?}", device.original_id, device.name, device.commands);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Collaborators
//!
//! The adapter never reaches outside its three collaborators:
//!
//! - [`SettingsStore`]: where the pairing (`user`, `bridgeAddress`) is kept
//! - [`BridgeConnector`] / [`BridgeSession`]: the bridge client; [`HttpConnector`]
//!   talks to a real bridge
//! - [`EventSink`]: receives `LIGHT_STATE` events
//!
//! ## Errors
//!
//! Failures carry an [`ErrorKind`] the platform can branch on:
//! `Authentication` (not paired, or the light list could not be read),
//! `Connection` (no bridge on the network) and `Device` (a command failed).

mod adapter;
mod auth;
mod bridge;
mod config;
mod device;
mod errors;
mod events;
mod http;
mod payload;
mod status;
pub mod translate;
mod types;

// Re-export public API
pub use adapter::HueLightAdapter;
pub use auth::{AuthenticationResult, AuthenticationStep, StepType};
pub use bridge::{BridgeConnector, BridgeSession, DiscoveredBridge, LightInfo};
pub use config::{AdapterConfig, MemoryStore, Settings, SettingsStore};
pub use device::{Command, Device, LightType, PlatformDevice};
pub use errors::{Error, ErrorKind};
pub use events::{EventKind, EventSink, NullSink};
pub use http::{HttpConnector, HttpSession};
pub use payload::LightStateUpdate;
pub use status::{BridgeLightState, LightStatus};
pub use types::{BooleanProps, BrightnessColour, BrightnessProps, Colour, ColourState, HsbProps};
