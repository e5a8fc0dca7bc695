use serde::{Deserialize, Serialize, Serializer};

/// A tenant namespace as reported by the provisioning API.
///
/// Every field is server-defined and opaque to the client; missing fields
/// deserialize to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Internal identifier assigned by the service.
    #[serde(default)]
    pub namespace: String,
    /// User-facing display name.
    #[serde(default)]
    pub namespace_name: String,
    #[serde(default)]
    pub ingress_whitelist: Vec<String>,
    #[serde(default)]
    pub expiration: String,
    #[serde(default)]
    pub resource_quotas: String,
    /// Lifecycle state, e.g. `provisioning` or `ready`.
    #[serde(default)]
    pub status: String,
}

impl Namespace {
    /// Decode a list response. A body that is not a JSON array of namespaces
    /// yields `None` so the caller can decide how to report it.
    pub fn parse_list(body: &str) -> Option<Vec<Namespace>> {
        serde_json::from_str(body).ok()
    }
}

/// A resource quantity forwarded verbatim to the API.
///
/// Values that are valid JSON numbers go on the wire as numbers, written
/// exactly as given (`200`, `1e3`, `99999999999999999999`); anything else as
/// a string. No unit or bounds checking happens here.
///
/// Relies on serde_json's `arbitrary_precision`: a parsed `Number` keeps its
/// source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity(pub String);

impl Quantity {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match serde_json::from_str::<serde_json::Number>(self.0.trim()) {
            Ok(n) => n.serialize(serializer),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resources requested for a new namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceResources {
    pub cpu: Quantity,
    #[serde(rename = "mem")]
    pub memory: Quantity,
    #[serde(rename = "disks_size")]
    pub disk_size: Quantity,
}

impl Default for NamespaceResources {
    fn default() -> Self {
        Self {
            cpu: Quantity::new("100"),
            memory: Quantity::new("128"),
            disk_size: Quantity::new("0"),
        }
    }
}

/// Body of `POST /namespaces`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateNamespaceRequest {
    pub namespace_name: String,
    pub resources: NamespaceResources,
}
