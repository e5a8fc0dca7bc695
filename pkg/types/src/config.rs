use serde::{Deserialize, Serialize};

/// Client configuration file (YAML).
///
/// Example `~/.k8spin/config.yaml`:
/// ```yaml
/// host: https://console.beta.k8spin.cloud/api
/// token: my-secret-token
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfigFile {
    #[serde(default, alias = "api-base")]
    pub host: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(
    path: &std::path::Path,
) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}
