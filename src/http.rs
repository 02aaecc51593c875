//! Bridge client over the Hue v1 REST API.

use log::debug;
use reqwest::{Client, RequestBuilder};
use serde_json::{Value, json};

use crate::bridge::{BridgeConnector, BridgeSession, DiscoveredBridge, LightInfo};
use crate::config::AdapterConfig;
use crate::errors::Error;
use crate::payload::LightStateUpdate;
use crate::status::LightStatus;

type Result<T> = std::result::Result<T, Error>;

/// Discovers and registers with bridges over HTTP.
#[derive(Debug, Clone)]
pub struct HttpConnector {
    client: Client,
    discovery_url: String,
}

impl HttpConnector {
    pub fn new(config: &AdapterConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| Error::http("build", e))?;
        Ok(HttpConnector {
            client,
            discovery_url: config.discovery_url.clone(),
        })
    }
}

impl BridgeConnector for HttpConnector {
    type Session = HttpSession;

    async fn nupnp_search(&self) -> Result<Vec<DiscoveredBridge>> {
        let body = send(self.client.get(&self.discovery_url), "discovery").await?;
        serde_json::from_value(body).map_err(Error::JsonLoad)
    }

    async fn register_user(&self, ip: &str, app_name: &str) -> Result<String> {
        let request = self
            .client
            .post(format!("http://{ip}/api"))
            .json(&json!({ "devicetype": app_name }));
        parse_username(&send(request, "register").await?)
    }

    fn session(&self, address: &str, user: &str) -> HttpSession {
        HttpSession {
            client: self.client.clone(),
            base_url: format!("http://{address}/api/{user}"),
        }
    }
}

/// Calls made on behalf of a paired user.
#[derive(Debug, Clone)]
pub struct HttpSession {
    client: Client,
    base_url: String,
}

impl BridgeSession for HttpSession {
    async fn lights(&self) -> Result<Vec<LightInfo>> {
        let url = format!("{}/lights", self.base_url);
        parse_lights(send(self.client.get(url), "lights").await?)
    }

    async fn set_light_state(&self, id: &str, state: &LightStateUpdate) -> Result<()> {
        debug!("setting light {id} state: {state:?}");
        let url = format!("{}/lights/{id}/state", self.base_url);
        send(self.client.put(url).json(state), "set_light_state").await?;
        Ok(())
    }

    async fn light_status(&self, id: &str) -> Result<LightStatus> {
        let url = format!("{}/lights/{id}", self.base_url);
        let body = send(self.client.get(url), "light_status").await?;
        serde_json::from_value(body).map_err(Error::JsonLoad)
    }
}

async fn send(request: RequestBuilder, action: &str) -> Result<Value> {
    let response = request
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::http(action, e))?;
    let body: Value = response.json().await.map_err(|e| Error::http(action, e))?;
    debug!("bridge {action} response: {body}");
    check_bridge_error(body)
}

/// The bridge reports failures as `[{"error": {...}}]` with a 200 status.
fn check_bridge_error(body: Value) -> Result<Value> {
    let error = body
        .as_array()
        .and_then(|entries| entries.iter().find_map(|entry| entry.get("error")));
    match error {
        Some(err) => Err(Error::bridge(
            err.get("type").and_then(Value::as_u64).unwrap_or(0) as u16,
            err.get("address").and_then(Value::as_str).unwrap_or(""),
            err.get("description")
                .and_then(Value::as_str)
                .unwrap_or("unknown bridge error"),
        )),
        None => Ok(body),
    }
}

fn parse_username(body: &Value) -> Result<String> {
    body.as_array()
        .and_then(|entries| {
            entries
                .iter()
                .find_map(|entry| entry.pointer("/success/username"))
        })
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| Error::UnexpectedResponse(body.to_string()))
}

/// `/lights` answers with an object keyed by light id.
fn parse_lights(body: Value) -> Result<Vec<LightInfo>> {
    let map = match body {
        Value::Object(map) => map,
        other => return Err(Error::UnexpectedResponse(other.to_string())),
    };
    let mut lights: Vec<LightInfo> = map
        .into_iter()
        .map(|(id, light)| LightInfo {
            name: field(&light, "name"),
            light_type: field(&light, "type"),
            id,
        })
        .collect();
    lights.sort_by_key(|l| (l.id.parse::<u32>().unwrap_or(u32::MAX), l.id.clone()));
    Ok(lights)
}

fn field(light: &Value, key: &str) -> String {
    light
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_button_not_pressed() {
        let body = json!([{"error": {"type": 101, "address": "", "description": "link button not pressed"}}]);
        let err = check_bridge_error(body).unwrap_err();
        assert_eq!(err, Error::bridge(101, "", "link button not pressed"));
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_partial_failure_is_an_error() {
        let body = json!([
            {"success": {"/lights/1/state/on": true}},
            {"error": {"type": 201, "address": "/lights/1/state/hue", "description": "parameter, hue, is not modifiable. Device is set to off."}}
        ]);
        let err = check_bridge_error(body).unwrap_err();
        assert!(matches!(err, Error::Bridge { code: 201, .. }));
    }

    #[test]
    fn test_parse_username() {
        let body = json!([{"success": {"username": "83b7780291a6ceffbe0bd049104df"}}]);
        assert_eq!(
            parse_username(&check_bridge_error(body).unwrap()).unwrap(),
            "83b7780291a6ceffbe0bd049104df"
        );
        assert!(parse_username(&json!([])).is_err());
    }

    #[test]
    fn test_parse_lights_sorted_by_id() {
        let body = json!({
            "10": {"name": "Porch", "type": "Dimmable light", "state": {"on": false}},
            "2": {"name": "Desk", "type": "Extended color light", "state": {"on": true}},
            "1": {"name": "Hall", "type": "Color temperature light", "state": {"on": true}}
        });
        let lights = parse_lights(body).unwrap();
        let ids: Vec<_> = lights.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "10"]);
        assert_eq!(lights[1].name, "Desk");
        assert_eq!(lights[1].light_type, "Extended color light");
    }

    #[test]
    fn test_parse_lights_rejects_non_object() {
        assert!(matches!(
            parse_lights(json!(null)),
            Err(Error::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_discovery_response() {
        let body = json!([{"id": "001788fffe100491", "internalipaddress": "192.168.2.23", "port": 443}]);
        let bridges: Vec<DiscoveredBridge> = serde_json::from_value(body).unwrap();
        assert_eq!(bridges[0].ipaddress, "192.168.2.23");
    }

    #[test]
    fn test_session_url() {
        let connector = HttpConnector::new(&AdapterConfig::default()).unwrap();
        let session = connector.session("192.168.2.23", "abc");
        assert_eq!(session.base_url, "http://192.168.2.23/api/abc");
    }
}
