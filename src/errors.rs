use serde::{Deserialize, Serialize};

/// Classification the platform branches on when a driver call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum ErrorKind {
    /// The driver is not paired with a bridge, or the bridge refused the listing.
    Authentication,
    /// No bridge could be found on the network.
    Connection,
    /// A command against a light failed.
    Device,
}

/// All error types that can occur when talking to a Hue bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize data to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// An HTTP request to the bridge or the discovery portal failed.
    #[error("http {action} error: {err}")]
    Http { action: String, err: reqwest::Error },

    /// The bridge answered with an error envelope.
    #[error("{description}")]
    Bridge {
        code: u16,
        address: String,
        description: String,
    },

    /// The bridge answered with something that is neither a result nor an error.
    #[error("unexpected bridge response: {0}")]
    UnexpectedResponse(String),

    /// The settings store failed to load or persist.
    #[error("settings store error: {0}")]
    Settings(String),

    /// An error carrying a platform-facing [`ErrorKind`].
    #[error("{message}")]
    Tagged {
        kind: ErrorKind,
        message: String,
        #[source]
        source: Option<Box<Error>>,
    },
}

impl Error {
    /// Create a new http error
    pub fn http(action: &str, err: reqwest::Error) -> Self {
        Error::Http {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new bridge error
    pub fn bridge(code: u16, address: &str, description: &str) -> Self {
        Error::Bridge {
            code,
            address: address.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a new tagged error with no underlying cause
    pub fn tagged(kind: ErrorKind, message: &str) -> Self {
        Error::Tagged {
            kind,
            message: message.to_string(),
            source: None,
        }
    }

    pub fn not_authenticated() -> Self {
        Self::tagged(ErrorKind::Authentication, "Not authenticated")
    }

    pub fn bridge_not_found() -> Self {
        Self::tagged(
            ErrorKind::Connection,
            "Unable to find the Philips Hue bridge on your network",
        )
    }

    /// The platform-facing kind, if this error carries one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Tagged { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Force `kind` onto this error, keeping its message and cause.
    pub fn retag(self, kind: ErrorKind) -> Self {
        match self {
            Error::Tagged {
                message, source, ..
            } => Error::Tagged {
                kind,
                message,
                source,
            },
            other => Error::Tagged {
                kind,
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }

    /// Tag an untagged error as [`ErrorKind::Device`]; tagged errors pass through.
    ///
    /// ```
    /// use hue_light_driver::{Error, ErrorKind};
    ///
    /// let err = Error::bridge(201, "/lights/1/state/hue", "parameter, hue, is not modifiable");
    /// assert_eq!(err.into_device().kind(), Some(ErrorKind::Device));
    ///
    /// let err = Error::not_authenticated();
    /// assert_eq!(err.into_device().kind(), Some(ErrorKind::Authentication));
    /// ```
    pub fn into_device(self) -> Self {
        if self.kind().is_some() {
            self
        } else {
            self.retag(ErrorKind::Device)
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string() && self.kind() == other.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retag_keeps_message_and_source() {
        let err = Error::UnexpectedResponse("null".into()).retag(ErrorKind::Authentication);
        assert_eq!(err.kind(), Some(ErrorKind::Authentication));
        assert_eq!(err.to_string(), "unexpected bridge response: null");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_device_wrap_uses_bridge_description() {
        let err = Error::bridge(3, "/lights/9", "resource, /lights/9, not available").into_device();
        assert_eq!(err.kind(), Some(ErrorKind::Device));
        assert_eq!(err.to_string(), "resource, /lights/9, not available");
    }

    #[test]
    fn test_bridge_not_found_message() {
        let err = Error::bridge_not_found();
        assert_eq!(err.kind(), Some(ErrorKind::Connection));
        assert_eq!(
            err,
            Error::tagged(
                ErrorKind::Connection,
                "Unable to find the Philips Hue bridge on your network"
            )
        );
    }
}
