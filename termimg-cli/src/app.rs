// ABOUTME: Resolves CLI flags and config into render settings and builds the renderer
// ABOUTME: CLI flags beat the environment override, which beats config file values

use crate::cli::Cli;
use crate::config::Config;
use std::sync::Arc;
use termimg::ansi::default_columns;
use termimg::{CapabilitySignal, Renderer, ShellCommandRunner};

/// Width used when neither the CLI nor config picks one
pub const DEFAULT_WIDTH: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub protocol: Option<String>,
    pub width: u32,
    pub ansi_columns: Option<u32>,
    pub sixel: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            protocol: cli.protocol.clone(),
            width: cli.width.or(config.width).unwrap_or(DEFAULT_WIDTH),
            ansi_columns: cli.ansi_columns.or(config.ansi_columns),
            sixel: cli.sixel || config.sixel.unwrap_or(false),
        }
    }
}

/// Signal with overrides applied. An environment override outranks the config
/// file, a `--protocol` flag outranks both.
pub fn effective_signal(
    signal: CapabilitySignal,
    settings: &Settings,
    config: &Config,
) -> CapabilitySignal {
    let signal = if signal.protocol_override.is_none() {
        signal.with_override(config.protocol.clone())
    } else {
        signal
    };
    signal.with_override(settings.protocol.clone())
}

pub fn build_renderer(
    signal: &CapabilitySignal,
    settings: &Settings,
    terminal_width: Option<u16>,
) -> Renderer {
    let columns = settings
        .ansi_columns
        .unwrap_or_else(|| default_columns(terminal_width));

    let renderer = Renderer::new(signal).with_ansi_columns(columns);
    if settings.sixel {
        renderer.with_command_runner(Arc::new(ShellCommandRunner))
    } else {
        renderer
    }
}
