//! Network-related constants.

/// Default base URL of the namespace provisioning API.
pub const DEFAULT_API_BASE: &str = "https://console.beta.k8spin.cloud/api";

/// Path segment of the namespaces collection, relative to the API base.
pub const NAMESPACES_SEGMENT: &str = "namespaces";

/// Message reported for any 5xx response. Server error bodies are not parsed.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
