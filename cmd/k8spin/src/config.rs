use crate::cli::Cli;
use anyhow::Context;
use pkg_constants::network::DEFAULT_API_BASE;
use pkg_constants::paths::DEFAULT_CONFIG_FILE;
use pkg_types::config::{ClientConfigFile, load_config_file};
use std::path::PathBuf;

/// Settings resolved once at startup and passed to everything that needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base: String,
    pub token: String,
    pub debug: bool,
}

impl RuntimeConfig {
    /// Read the config file (if any) and merge it under the CLI/env values.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let file_cfg = match cli.config.clone().or_else(default_config_path) {
            Some(path) => load_config_file::<ClientConfigFile>(&path)
                .with_context(|| format!("failed to load config file {}", path.display()))?,
            None => ClientConfigFile::default(),
        };
        Ok(Self::resolve(cli.host.clone(), cli.token.clone(), cli.debug, file_cfg))
    }

    /// Merge: CLI args / env > config file > defaults.
    /// The token has no default; an empty one is sent and rejected remotely.
    pub fn resolve(
        host: Option<String>,
        token: Option<String>,
        debug: bool,
        file_cfg: ClientConfigFile,
    ) -> Self {
        let api_base = non_empty(host)
            .or(non_empty(file_cfg.host))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let token = non_empty(token).or(non_empty(file_cfg.token)).unwrap_or_default();

        Self {
            api_base,
            token,
            debug,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
}
