//! Environment variable names read or written by the client.

/// Bearer token for the provisioning API.
pub const TOKEN_ENV: &str = "K8SPINTOKEN";

/// Overrides the API base URL.
pub const HOST_ENV: &str = "K8SPINHOST";

/// Exported to the spawned shell, pointing at the saved credentials.
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Login shell to hand the terminal session to.
pub const SHELL_ENV: &str = "SHELL";
