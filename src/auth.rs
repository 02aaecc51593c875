//! Pairing flow descriptions and results.

use serde::{Deserialize, Serialize};

/// What the platform should ask the operator to do at a pairing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepType {
    ManualAction,
}

/// One step of the pairing flow, as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationStep {
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub message: String,
}

impl AuthenticationStep {
    pub(crate) fn press_link_button() -> Self {
        AuthenticationStep {
            step_type: StepType::ManualAction,
            message: "In order to use Philips Hue bulbs you must press the button on your Philips Hue bridge."
                .to_string(),
        }
    }
}

/// Outcome of a pairing step. Failures are reported here rather than as errors.
///
/// ```
/// use hue_light_driver::AuthenticationResult;
///
/// let ok = serde_json::to_string(&AuthenticationResult::success()).unwrap();
/// assert_eq!(ok, r#"{"success":true}"#);
///
/// let failed = AuthenticationResult::failure("link button not pressed");
/// assert!(!failed.success);
/// assert_eq!(failed.message.as_deref(), Some("link button not pressed"));
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    pub success: bool,
    pub message: Option<String>,
}

impl AuthenticationResult {
    pub fn success() -> Self {
        AuthenticationResult {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: &str) -> Self {
        AuthenticationResult {
            success: false,
            message: Some(message.to_string()),
        }
    }
}
