use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use crossbeam_channel::bounded;

use crate::shared::constants::GCLOUD_TIMEOUT;

/// Source of ambient cloud credentials (Application Default Credentials).
///
/// Implementations resolve an OAuth access token and a default project id;
/// both return `None` when the environment has no such configuration.
pub trait CredentialHelper {
    fn access_token(&self) -> Option<String>;
    fn project(&self) -> Option<String>;
}

/// Credential helper that shells out to the gcloud CLI.
///
/// Each invocation is bounded by a timeout; a missing binary, non-zero
/// exit, empty output, or timeout all resolve to `None`.
pub struct GcloudCli {
    timeout: Duration,
}

impl GcloudCli {
    pub fn new() -> Self {
        Self {
            timeout: GCLOUD_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for GcloudCli {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHelper for GcloudCli {
    fn access_token(&self) -> Option<String> {
        run_with_timeout("gcloud", &["auth", "print-access-token"], self.timeout)
    }

    fn project(&self) -> Option<String> {
        run_with_timeout("gcloud", &["config", "get-value", "project"], self.timeout)
    }
}

/// Run a command and return its trimmed stdout, or `None` on any failure.
///
/// std::process has no wait-with-timeout, so a monitor thread drains
/// stdout and reports over a channel; on timeout the child is killed.
fn run_with_timeout(program: &str, args: &[&str], timeout: Duration) -> Option<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let mut stdout = child.stdout.take()?;
    let (tx, rx) = bounded(1);
    thread::spawn(move || {
        let mut buf = String::new();
        let result = stdout.read_to_string(&mut buf).ok().map(|_| buf);
        let _ = tx.send(result);
    });

    match rx.recv_timeout(timeout) {
        Ok(Some(output)) => {
            let status = child.wait().ok()?;
            if !status.success() {
                return None;
            }
            let trimmed = output.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => {
            let _ = child.kill();
            let _ = child.wait();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_returns_none() {
        let out = run_with_timeout(
            "definitely-not-an-installed-binary",
            &[],
            Duration::from_secs(1),
        );
        assert!(out.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_trimmed_stdout() {
        let out = run_with_timeout("echo", &["  token-123  "], Duration::from_secs(5));
        assert_eq!(out.as_deref(), Some("token-123"));
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_output_returns_none() {
        let out = run_with_timeout("true", &[], Duration::from_secs(5));
        assert!(out.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_returns_none() {
        let out = run_with_timeout("false", &[], Duration::from_secs(5));
        assert!(out.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_kills_and_returns_none() {
        let start = std::time::Instant::now();
        let out = run_with_timeout("sleep", &["30"], Duration::from_millis(200));
        assert!(out.is_none());
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
