// ABOUTME: Terminal inline image rendering library: capability detection and protocol encoders
// ABOUTME: Encodes images for Kitty, iTerm2, SIXEL (external) and ANSI half-block output

pub mod ansi;
pub mod constants;
pub mod conversion;
pub mod detection;
pub mod dispatcher;
pub mod error;
pub mod iterm2;
pub mod kitty;
pub mod options;
pub mod passthrough;
pub mod protocol;
pub mod signal;
pub mod sixel;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use detection::detect;
pub use dispatcher::Renderer;
pub use error::TermImgError;
pub use options::{Dimension, RenderOptions};
pub use passthrough::Passthrough;
pub use protocol::Protocol;
pub use signal::CapabilitySignal;
pub use sixel::{CommandRunner, ShellCommandRunner};

pub type Result<T> = std::result::Result<T, TermImgError>;
