// ABOUTME: iTerm2 terminal inline image protocol implementation
// ABOUTME: Sends the original file bytes base64-encoded inside an OSC 1337 sequence

use crate::constants::{escape::BEL, iterm2::FILE_PREFIX};
use crate::conversion::read_file;
use crate::options::RenderOptions;
use crate::passthrough::Passthrough;
use crate::Result;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::Path;

/// Read `path` and build the inline image sequence for it
pub async fn encode(
    path: &Path,
    options: &RenderOptions,
    passthrough: Passthrough,
) -> Result<String> {
    let data = read_file(path).await?;
    let name = file_name(path);

    log::debug!(
        "iTerm2: sending {} ({} bytes) unmodified",
        String::from_utf8_lossy(name),
        data.len()
    );
    Ok(passthrough.wrap(build_sequence(name, &data, options)))
}

/// ITerm2 inline image format:
/// \x1b]1337;File=name=<b64>;inline=1;width=W;height=H;preserveAspectRatio=P:<b64 data>\x07
pub fn build_sequence(name: &[u8], data: &[u8], options: &RenderOptions) -> String {
    format!(
        "{}name={};inline=1;width={};height={};preserveAspectRatio={}:{}{}",
        FILE_PREFIX,
        STANDARD.encode(name),
        options.width,
        options.height,
        u8::from(options.preserve_aspect_ratio),
        STANDARD.encode(data),
        BEL
    )
}

/// Raw bytes of the final path component, or of the whole path when there is none
fn file_name(path: &Path) -> &[u8] {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .as_encoded_bytes()
}
