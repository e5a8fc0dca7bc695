use clap::{Parser, Subcommand};
use pkg_constants::env::{HOST_ENV, TOKEN_ENV};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "k8spin", version, about = "CLI for managing namespaces")]
pub struct Cli {
    /// Show debug information (request and response dumps on stderr)
    #[arg(long, global = true)]
    pub debug: bool,

    /// K8Spin token
    #[arg(long, env = TOKEN_ENV, global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, env = HOST_ENV, global = true)]
    pub host: Option<String>,

    /// Path to YAML config file [default: ~/.k8spin/config.yaml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all namespaces
    #[command(visible_alias = "l")]
    List {
        /// Print the raw response instead of a table
        #[arg(long)]
        raw: bool,
    },
    /// Get namespace credentials
    #[command(name = "get_credentials", visible_alias = "gc")]
    GetCredentials {
        #[arg(value_name = "name")]
        name: Option<String>,
        /// Saves and sets KUBECONFIG variable to a temporary file
        #[arg(long = "set_config")]
        set_config: bool,
    },
    /// Save namespace credentials and open a shell with KUBECONFIG set
    #[command(name = "set_credentials", visible_alias = "sc")]
    SetCredentials {
        #[arg(value_name = "name")]
        name: Option<String>,
    },
    /// Create a namespace
    #[command(visible_alias = "c")]
    Create {
        #[arg(value_name = "name")]
        name: Option<String>,
        /// Requested CPU, forwarded as-is
        #[arg(long, default_value = "100", allow_hyphen_values = true)]
        cpu: String,
        /// Requested memory, forwarded as-is
        #[arg(long, default_value = "128", allow_hyphen_values = true)]
        memory: String,
        /// Requested disk size, forwarded as-is
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        storage: String,
    },
    /// Delete a namespace
    #[command(visible_alias = "d")]
    Delete {
        #[arg(value_name = "name")]
        name: Option<String>,
    },
}
