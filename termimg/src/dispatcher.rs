// ABOUTME: Main renderer that detects the terminal protocol and dispatches to an encoder
// ABOUTME: Falls back to a readable message when the terminal cannot show images

use crate::constants::{UNSUPPORTED_PREFIX, ansi::DEFAULT_COLUMNS};
use crate::detection::detect;
use crate::options::RenderOptions;
use crate::passthrough::Passthrough;
use crate::protocol::Protocol;
use crate::signal::CapabilitySignal;
use crate::sixel::CommandRunner;
use crate::{Result, ansi, iterm2, kitty, sixel};
use std::path::Path;
use std::sync::Arc;

pub struct Renderer {
    protocol: Protocol,
    passthrough: Passthrough,
    ansi_columns: u32,
    command_runner: Option<Arc<dyn CommandRunner>>,
}

impl Renderer {
    /// Detect once from `signal`; the result is fixed for this renderer
    pub fn new(signal: &CapabilitySignal) -> Self {
        Self {
            protocol: detect(signal),
            passthrough: Passthrough::from_signal(signal),
            ansi_columns: DEFAULT_COLUMNS,
            command_runner: None,
        }
    }

    /// Columns used by the ANSI half-block fallback
    pub fn with_ansi_columns(mut self, columns: u32) -> Self {
        self.ansi_columns = columns.max(1);
        self
    }

    /// Enable SIXEL output. Without a runner, SIXEL terminals get the
    /// unsupported message.
    pub fn with_command_runner(mut self, runner: Arc<dyn CommandRunner>) -> Self {
        self.command_runner = Some(runner);
        self
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// Escape sequence (or fallback text) that displays `path` at `size`
    pub async fn render(&self, path: &Path, size: u32) -> Result<String> {
        let output = match &self.protocol {
            Protocol::Kitty => {
                kitty::encode(path, &RenderOptions::with_width(size), self.passthrough).await?
            }
            Protocol::Iterm2 => {
                iterm2::encode(path, &RenderOptions::with_width(size), self.passthrough).await?
            }
            Protocol::Ansi => ansi::encode(path, self.ansi_columns).await?,
            Protocol::Sixel => match &self.command_runner {
                Some(runner) => sixel::encode(path, runner.as_ref(), self.passthrough).await?,
                None => {
                    log::debug!("SIXEL detected but no command runner configured");
                    unsupported(path)
                }
            },
            Protocol::None | Protocol::Other(_) => unsupported(path),
        };

        log::debug!(
            "Rendered {} via '{}' ({} bytes)",
            path.display(),
            self.protocol,
            output.len()
        );
        Ok(output)
    }
}

/// Message shown when the terminal cannot display `path`
pub fn unsupported(path: &Path) -> String {
    format!("{}{}", UNSUPPORTED_PREFIX, path.display())
}
