//! The driver the platform talks to.

use log::{debug, info, warn};
use serde_json::Value;

use crate::auth::{AuthenticationResult, AuthenticationStep};
use crate::bridge::{BridgeConnector, BridgeSession};
use crate::config::{AdapterConfig, Settings, SettingsStore};
use crate::device::{Device, LightType, PlatformDevice};
use crate::errors::{Error, ErrorKind};
use crate::events::{EventKind, EventSink};
use crate::payload::LightStateUpdate;
use crate::types::{BooleanProps, BrightnessProps, ColourState, HsbProps};

type Result<T> = std::result::Result<T, Error>;

/// Adapts the platform's device hooks onto a Hue bridge.
///
/// The adapter is unauthenticated until the pairing step has stored both a
/// user token and a bridge address; until then discovery and commands fail
/// with [`ErrorKind::Authentication`] without touching the network.
///
/// # Example
///
/// ```ignore
/// use hue_light_driver::{AdapterConfig, HttpConnector, HueLightAdapter, MemoryStore};
///
/// let config = AdapterConfig::default();
/// let connector = HttpConnector::new(&config)?;
/// let sink = |kind, id: &str, state: &_| println!("{kind} {id} {state:?}");
/// let mut adapter = HueLightAdapter::new(connector, MemoryStore::default(), sink, config).await?;
///
/// // after the link button on the bridge has been pressed
/// let result = adapter.authentication_step0(&serde_json::Value::Null).await;
/// assert!(result.success);
/// for device in adapter.discover().await? {
///     println!("{} {}", device.original_id, device.name);
/// }
/// ```
pub struct HueLightAdapter<C: BridgeConnector, S, E> {
    connector: C,
    store: S,
    sink: E,
    config: AdapterConfig,
    settings: Settings,
    session: Option<C::Session>,
}

impl<C, S, E> HueLightAdapter<C, S, E>
where
    C: BridgeConnector,
    S: SettingsStore,
    E: EventSink,
{
    /// Load stored settings and reopen the bridge session if already paired.
    ///
    /// On first run the store is initialised with empty settings.
    pub async fn new(connector: C, store: S, sink: E, config: AdapterConfig) -> Result<Self> {
        let stored = store.get().await?;
        let session = stored
            .credentials()
            .map(|(address, user)| connector.session(address, user));

        let settings = if session.is_some() {
            debug!("using stored pairing for bridge {:?}", stored.bridge_address);
            stored
        } else {
            let empty = Settings::default();
            store.set(&empty).await?;
            empty
        };

        Ok(HueLightAdapter {
            connector,
            store,
            sink,
            config,
            settings,
            session,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Called by the platform with its known devices on startup. Nothing to do for Hue.
    pub fn init_devices(&self, devices: &[PlatformDevice]) {
        debug!("init_devices: {} device(s)", devices.len());
    }

    pub fn authentication_steps(&self) -> Vec<AuthenticationStep> {
        vec![AuthenticationStep::press_link_button()]
    }

    /// Pair with the first bridge found on the network.
    ///
    /// Must be called after the link button on the bridge was pressed. Never
    /// returns an error; failures are reported in the result. When already
    /// paired this succeeds without contacting the bridge.
    pub async fn authentication_step0(&mut self, _props: &Value) -> AuthenticationResult {
        if self.is_authenticated() {
            info!("already paired with bridge {:?}", self.settings.bridge_address);
            return AuthenticationResult::success();
        }

        match self.pair().await {
            Ok(()) => {
                info!("paired with bridge {:?}", self.settings.bridge_address);
                AuthenticationResult::success()
            }
            Err(e) => {
                warn!("pairing failed: {e}");
                AuthenticationResult::failure(&e.to_string())
            }
        }
    }

    async fn pair(&mut self) -> Result<()> {
        let bridge = self
            .connector
            .nupnp_search()
            .await?
            .into_iter()
            .next()
            .ok_or_else(Error::bridge_not_found)?;

        let user = self
            .connector
            .register_user(&bridge.ipaddress, &self.config.app_name)
            .await?;

        let settings = Settings::paired(&user, &bridge.ipaddress);
        self.store.set(&settings).await?;
        self.session = Some(self.connector.session(&bridge.ipaddress, &user));
        self.settings = settings;
        Ok(())
    }

    /// Forget the paired bridge so that pairing can run again.
    pub async fn unpair(&mut self) -> Result<()> {
        let empty = Settings::default();
        self.store.set(&empty).await?;
        self.settings = empty;
        self.session = None;
        info!("bridge pairing cleared");
        Ok(())
    }

    /// List the lights known to the bridge.
    ///
    /// Every failure, including a bridge that cannot be reached, is reported
    /// as [`ErrorKind::Authentication`].
    pub async fn discover(&self) -> Result<Vec<Device>> {
        let session = self.session()?;
        let lights = session
            .lights()
            .await
            .map_err(|e| e.retag(ErrorKind::Authentication))?;

        let devices = lights
            .iter()
            .map(|light| {
                let light_type = LightType::from_bridge(&light.light_type);
                if !light_type.is_supported() {
                    warn!(
                        "light {} ({}) has unsupported type {:?}; it will accept no commands",
                        light.id, light.name, light.light_type
                    );
                }
                Device::new(&light.id, &light.name, light_type)
            })
            .collect();
        Ok(devices)
    }

    pub async fn command_set_hsb_state(&self, device: &PlatformDevice, props: &HsbProps) -> Result<()> {
        self.apply(device, &LightStateUpdate::from(props)).await
    }

    pub async fn command_set_brightness_state(
        &self,
        device: &PlatformDevice,
        props: &BrightnessProps,
    ) -> Result<()> {
        self.apply(device, &LightStateUpdate::from(props)).await
    }

    pub async fn command_set_boolean_state(
        &self,
        device: &PlatformDevice,
        props: &BooleanProps,
    ) -> Result<()> {
        self.apply(device, &LightStateUpdate::from(props)).await
    }

    async fn apply(&self, device: &PlatformDevice, update: &LightStateUpdate) -> Result<()> {
        self.set_and_publish(device, update)
            .await
            .map_err(Error::into_device)
    }

    /// Set the state, read it back and publish what the bridge reports.
    async fn set_and_publish(&self, device: &PlatformDevice, update: &LightStateUpdate) -> Result<()> {
        let session = self.session()?;
        let id = &device.specs.original_id;

        session.set_light_state(id, update).await?;
        let status = session.light_status(id).await?;

        let state = ColourState::from(&status);
        debug!("light {id} is now {state:?}");
        self.sink.create_event(EventKind::LightState, &device.id, &state);
        Ok(())
    }

    fn session(&self) -> Result<&C::Session> {
        self.session.as_ref().ok_or_else(Error::not_authenticated)
    }
}
