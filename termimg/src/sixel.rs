// ABOUTME: SIXEL output through the external img2sixel encoder
// ABOUTME: Builds the shell invocation and runs it behind an injectable command runner

use crate::constants::sixel::{ENCODER_BINARY, SHELL};
use crate::error::TermImgError;
use crate::passthrough::Passthrough;
use crate::Result;
use async_trait::async_trait;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Runs a shell command and returns what it wrote to stdout
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &OsStr) -> Result<String>;
}

/// `sh -c <command>` via tokio's process API
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandRunner;

#[async_trait]
impl CommandRunner for ShellCommandRunner {
    async fn run(&self, command: &OsStr) -> Result<String> {
        let display = command.to_string_lossy();
        log::debug!("Running `{}`", display);

        let output = tokio::process::Command::new(SHELL)
            .arg("-c")
            .arg(command)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| TermImgError::CommandSpawn {
                command: display.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(TermImgError::CommandFailed {
                command: display.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Shell command that writes the SIXEL stream for `path` to stdout. Built as
/// an `OsString` so the path bytes reach the shell unchanged.
pub fn command_for(path: &Path) -> OsString {
    let mut command = OsString::from(format!("{} \"", ENCODER_BINARY));
    command.push(quote(path.as_os_str()));
    command.push("\"");
    command
}

/// Escape the bytes that stay special inside double quotes
fn quote(raw: &OsStr) -> OsString {
    let bytes = raw.as_encoded_bytes();
    let mut quoted = Vec::with_capacity(bytes.len());
    for &byte in bytes {
        if matches!(byte, b'"' | b'\\' | b'$' | b'`') {
            quoted.push(b'\\');
        }
        quoted.push(byte);
    }

    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStringExt;
        OsString::from_vec(quoted)
    }
    #[cfg(not(unix))]
    {
        OsString::from(String::from_utf8_lossy(&quoted).into_owned())
    }
}

/// Run the encoder for `path` and wrap its output for the multiplexer
pub async fn encode(
    path: &Path,
    runner: &dyn CommandRunner,
    passthrough: Passthrough,
) -> Result<String> {
    let sequence = runner.run(&command_for(path)).await?;
    log::debug!("SIXEL: {} bytes from {}", sequence.len(), ENCODER_BINARY);
    Ok(passthrough.wrap(sequence))
}
