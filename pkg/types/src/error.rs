use serde::{Deserialize, Serialize};

/// Error body returned by the API for non-2xx responses: `{"error": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: String,
}

impl ApiError {
    /// Best-effort parse. Anything that is not a JSON object with a string
    /// `error` field yields an empty message.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
