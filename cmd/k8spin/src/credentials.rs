//! Credential handoff: save the payload to a per-namespace file and start a
//! shell with `KUBECONFIG` pointing at it.
//!
//! The credential file is staged in the same directory and renamed into
//! place, so a pre-planted file or symlink at the predictable path is replaced
//! rather than written through.
//!
//! The shell runs as a child with inherited stdio; when it exits, k8spin exits
//! with the shell's status.

use anyhow::Context;
use pkg_constants::env::{KUBECONFIG_ENV, SHELL_ENV};
use pkg_constants::paths::{CREDENTIALS_FILE_MODE, CREDENTIALS_FILE_PREFIX};
use std::io::Write;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};

/// Directory that holds saved credential files.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the system temp dir.
    pub fn temp() -> Self {
        Self::new(std::env::temp_dir())
    }

    /// Same namespace, same file: repeated runs overwrite it.
    pub fn path_for(&self, namespace: &str) -> PathBuf {
        let safe: String = namespace
            .chars()
            .map(|c| if std::path::is_separator(c) { '_' } else { c })
            .collect();
        self.dir.join(format!("{}{}", CREDENTIALS_FILE_PREFIX, safe))
    }

    /// Write `contents` byte-for-byte, readable by the owner only.
    pub fn save(&self, namespace: &str, contents: &[u8]) -> anyhow::Result<PathBuf> {
        let path = self.path_for(namespace);

        let mut staged = tempfile::Builder::new()
            .prefix(&format!(".{}", CREDENTIALS_FILE_PREFIX))
            .tempfile_in(&self.dir)
            .with_context(|| format!("failed to create a temporary file in {}", self.dir.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(std::fs::Permissions::from_mode(CREDENTIALS_FILE_MODE))
                .context("failed to restrict permissions on the credentials file")?;
        }
        staged
            .write_all(contents)
            .context("failed to write the credentials file")?;

        // rename(2) swaps the directory entry; an existing symlink is replaced, not followed.
        staged
            .persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to move credentials into {}", path.display()))?;
        info!("Credentials written to {}", path.display());
        Ok(path)
    }
}

/// An interactive shell to hand the session to, with `KUBECONFIG` exported.
#[derive(Debug, Clone)]
pub struct ShellLaunch {
    shell: PathBuf,
    kubeconfig: PathBuf,
}

impl ShellLaunch {
    pub fn new(shell: impl Into<PathBuf>, kubeconfig: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
            kubeconfig: kubeconfig.into(),
        }
    }

    /// Use the login shell named by `$SHELL`.
    pub fn from_env(kubeconfig: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let shell = std::env::var_os(SHELL_ENV)
            .filter(|s| !s.is_empty())
            .with_context(|| format!("${} is not set; cannot start a shell with the saved credentials", SHELL_ENV))?;
        Ok(Self::new(shell, kubeconfig))
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.env(KUBECONFIG_ENV, &self.kubeconfig);
        cmd
    }

    /// Run the shell in the foreground and return its exit code
    /// (1 if it was killed by a signal).
    pub async fn run(self) -> anyhow::Result<u8> {
        debug!(
            "Starting {} with {}={}",
            self.shell.display(),
            KUBECONFIG_ENV,
            self.kubeconfig.display()
        );
        let status = self
            .command()
            .status()
            .await
            .with_context(|| format!("failed to start shell {}", self.shell.display()))?;
        Ok(status.code().and_then(|c| u8::try_from(c).ok()).unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn path_is_keyed_by_namespace() {
        let store = CredentialStore::new("/tmp");
        assert_eq!(store.path_for("bar"), PathBuf::from("/tmp/k8spin_bar"));
        assert_eq!(store.path_for("bar"), store.path_for("bar"));
        assert_ne!(store.path_for("bar"), store.path_for("baz"));
    }

    #[test]
    fn separators_cannot_escape_dir() {
        let store = CredentialStore::new("/tmp");
        assert_eq!(store.path_for("../etc/passwd"), PathBuf::from("/tmp/k8spin_.._etc_passwd"));
    }

    #[test]
    fn save_writes_exact_bytes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path());

        let first = store.save("bar", b"apiVersion: v1\nkind: Config\n").unwrap();
        let second = store.save("bar", b"short").unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), b"short");
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path());
        let path = store.path_for("bar");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        store.save("bar", b"new").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn shell_command_exports_kubeconfig() {
        let launch = ShellLaunch::new("/bin/sh", "/tmp/k8spin_bar");
        let cmd = launch.command();
        let cmd = cmd.as_std();

        assert_eq!(cmd.get_program(), OsStr::new("/bin/sh"));
        let envs: Vec<_> = cmd.get_envs().collect();
        assert_eq!(envs, vec![(OsStr::new("KUBECONFIG"), Some(OsStr::new("/tmp/k8spin_bar")))]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_at_credentials_path_is_replaced_not_followed() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path());
        let victim = dir.path().join("victim");
        std::fs::write(&victim, "precious").unwrap();
        std::fs::set_permissions(&victim, std::fs::Permissions::from_mode(0o644)).unwrap();
        let path = store.path_for("bar");
        std::os::unix::fs::symlink(&victim, &path).unwrap();

        store.save("bar", b"creds").unwrap();

        assert_eq!(std::fs::read_to_string(&victim).unwrap(), "precious");
        let victim_mode = std::fs::metadata(&victim).unwrap().permissions().mode() & 0o777;
        assert_eq!(victim_mode, 0o644);
        let meta = std::fs::symlink_metadata(&path).unwrap();
        assert!(meta.file_type().is_file());
        assert_eq!(std::fs::read(&path).unwrap(), b"creds");
    }

    #[test]
    fn save_leaves_no_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path());
        store.save("bar", b"one").unwrap();
        store.save("bar", b"two").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn run_propagates_shell_status() {
        assert_eq!(ShellLaunch::new("/bin/true", "/tmp/k8spin_x").run().await.unwrap(), 0);
        assert_eq!(ShellLaunch::new("/bin/false", "/tmp/k8spin_x").run().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_shell_binary_is_fatal() {
        let launch = ShellLaunch::new("/nonexistent/k8spin-shell", "/tmp/k8spin_x");
        assert!(launch.run().await.is_err());
    }
}
