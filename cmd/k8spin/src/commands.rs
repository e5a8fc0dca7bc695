use crate::cli::Command;
use crate::credentials::CredentialStore;
use crate::render::namespace_table;
use pkg_client::{NamespaceApi, Outcome, Transport};
use pkg_types::namespace::{Namespace, NamespaceResources, Quantity};
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

/// How a command finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Done,
    /// The API rejected the request or could not be reached.
    Rejected,
    /// A required argument was missing; nothing was sent.
    Usage,
    /// Credentials were saved; hand the session to a shell.
    Handoff(PathBuf),
}

impl Completion {
    pub fn exit_code(&self) -> u8 {
        match self {
            Completion::Done | Completion::Handoff(_) => 0,
            Completion::Rejected => 1,
            Completion::Usage => 2,
        }
    }
}

const SELECT_NAMESPACE: &str = "You need to select a namespace";
const NAME_REQUIRED: &str = "You have to set a namespace name";

/// Execute one command: at most one API call, output written to `out`.
pub async fn run(
    command: Command,
    transport: &dyn Transport,
    store: &CredentialStore,
    out: &mut dyn Write,
) -> anyhow::Result<Completion> {
    let api = NamespaceApi::new(transport);

    match command {
        Command::List { raw } => {
            let Some(body) = settle(api.list().await, out)? else {
                return Ok(Completion::Rejected);
            };
            if raw {
                out.write_all(&body)?;
                writeln!(out)?;
            } else {
                let text = String::from_utf8_lossy(&body);
                let namespaces = Namespace::parse_list(&text).unwrap_or_else(|| {
                    warn!("Response is not a namespace list; showing an empty table");
                    Vec::new()
                });
                writeln!(out, "{}", namespace_table(&namespaces))?;
            }
            Ok(Completion::Done)
        }
        Command::GetCredentials { name, set_config } => {
            credentials(&api, name, set_config, store, out).await
        }
        Command::SetCredentials { name } => credentials(&api, name, true, store, out).await,
        Command::Create {
            name,
            cpu,
            memory,
            storage,
        } => {
            let Some(name) = required(name) else {
                writeln!(out, "{}", NAME_REQUIRED)?;
                return Ok(Completion::Usage);
            };
            let resources = NamespaceResources {
                cpu: Quantity::new(cpu),
                memory: Quantity::new(memory),
                disk_size: Quantity::new(storage),
            };
            if settle(api.create(&name, resources).await, out)?.is_none() {
                return Ok(Completion::Rejected);
            }
            writeln!(out, "Namespace {} created", name)?;
            Ok(Completion::Done)
        }
        Command::Delete { name } => {
            let Some(name) = required(name) else {
                writeln!(out, "{}", SELECT_NAMESPACE)?;
                return Ok(Completion::Usage);
            };
            if settle(api.delete(&name).await, out)?.is_none() {
                return Ok(Completion::Rejected);
            }
            writeln!(out, "Namespace {} deleted", name)?;
            Ok(Completion::Done)
        }
    }
}

async fn credentials(
    api: &NamespaceApi<'_>,
    name: Option<String>,
    persist: bool,
    store: &CredentialStore,
    out: &mut dyn Write,
) -> anyhow::Result<Completion> {
    let Some(name) = required(name) else {
        writeln!(out, "{}", SELECT_NAMESPACE)?;
        return Ok(Completion::Usage);
    };
    let Some(body) = settle(api.credentials(&name).await, out)? else {
        return Ok(Completion::Rejected);
    };

    if !persist {
        out.write_all(&body)?;
        writeln!(out)?;
        return Ok(Completion::Done);
    }

    let path = store.save(&name, &body)?;
    writeln!(out, "Credentials saved at {}", path.display())?;
    writeln!(out, "KUBECONFIG variable set")?;
    Ok(Completion::Handoff(path))
}

fn required(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.trim().is_empty())
}

/// Report a failed call and yield the body of a successful one.
/// Transport errors and API rejections are printed, never propagated.
fn settle(
    result: anyhow::Result<Outcome>,
    out: &mut dyn Write,
) -> anyhow::Result<Option<Vec<u8>>> {
    match result {
        Ok(Outcome::Success { body }) => Ok(Some(body)),
        Ok(Outcome::Failure {
            status, message, ..
        }) => {
            warn!("Request failed with HTTP {}", status);
            writeln!(out, "{}", message)?;
            Ok(None)
        }
        Err(e) => {
            writeln!(out, "Error: {:#}", e)?;
            Ok(None)
        }
    }
}
