//! Filesystem path constants.

// ─── Credentials ──────────────────────────────────────────────────────────

/// File name prefix for saved namespace credentials.
/// Full path = `<temp dir>/CREDENTIALS_FILE_PREFIX + namespace`.
pub const CREDENTIALS_FILE_PREFIX: &str = "k8spin_";

/// Unix permission bits for saved credentials (owner read/write only).
pub const CREDENTIALS_FILE_MODE: u32 = 0o600;

// ─── Config ───────────────────────────────────────────────────────────────

/// Config file location relative to the user's home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".k8spin/config.yaml";
