//! State-change events published to the platform.

use serde::{Deserialize, Serialize};

use crate::types::ColourState;

/// Event types a device can emit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum EventKind {
    #[serde(rename = "LIGHT_STATE")]
    #[strum(serialize = "LIGHT_STATE")]
    LightState,
}

/// Receiver of device state changes.
///
/// Any `Fn(EventKind, &str, &ColourState)` closure is a sink:
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use hue_light_driver::{ColourState, EventKind, EventSink};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = {
///     let seen = Arc::clone(&seen);
///     move |kind: EventKind, id: &str, _: &ColourState| {
///         seen.lock().unwrap().push(format!("{kind} {id}"));
///     }
/// };
/// sink.create_event(EventKind::LightState, "abc", &ColourState::default());
/// assert_eq!(seen.lock().unwrap()[0], "LIGHT_STATE abc");
/// ```
pub trait EventSink: Send + Sync {
    fn create_event(&self, kind: EventKind, device_id: &str, payload: &ColourState);
}

impl<F> EventSink for F
where
    F: Fn(EventKind, &str, &ColourState) + Send + Sync,
{
    fn create_event(&self, kind: EventKind, device_id: &str, payload: &ColourState) {
        self(kind, device_id, payload)
    }
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn create_event(&self, _kind: EventKind, _device_id: &str, _payload: &ColourState) {}
}
