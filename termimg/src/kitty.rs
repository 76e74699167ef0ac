// ABOUTME: Kitty terminal graphics protocol implementation
// ABOUTME: Resizes and re-encodes images as PNG, then base64-chunks them as Kitty graphics protocol units

use crate::constants::escape::ST;
use crate::constants::kitty::{ACTION_TRANSMIT_AND_DISPLAY, CHUNK_SIZE, FORMAT_PNG};
use crate::conversion::{encode_png, load_image, proportional_height, resize_rgba};
use crate::options::RenderOptions;
use crate::passthrough::Passthrough;
use crate::Result;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::Path;

/// Decode `path`, scale it to the requested size, and emit the chunked
/// transmit-and-display sequence
pub async fn encode(
    path: &Path,
    options: &RenderOptions,
    passthrough: Passthrough,
) -> Result<String> {
    let img = load_image(path).await?;
    let options = options.clone();

    let png = tokio::task::spawn_blocking(move || {
        let width = options.width.resolve(img.width()).unwrap_or(img.width());
        let height = options
            .height
            .resolve(img.height())
            .unwrap_or_else(|| proportional_height(img.width(), img.height(), width));
        encode_png(&resize_rgba(&img, width, height))
    })
    .await??;

    let payload = STANDARD.encode(&png);
    let sequence = build_sequence(&payload);

    log::debug!(
        "Kitty: {} base64 bytes in {} chunk(s)",
        payload.len(),
        chunk_payload(&payload, CHUNK_SIZE).len()
    );
    Ok(passthrough.wrap(sequence))
}

/// Split a base64 payload into transmission units. The first unit carries the
/// full parameter set; `m=1` marks every unit that has a successor.
pub fn build_sequence(payload: &str) -> String {
    let chunks = chunk_payload(payload, CHUNK_SIZE);
    let mut output = String::with_capacity(payload.len() + chunks.len() * 24);

    for (i, chunk) in chunks.iter().enumerate() {
        let more = u8::from(i + 1 < chunks.len());

        if i == 0 {
            output.push_str(&format!(
                "\x1b_Gf={},a={},m={};{}{}",
                FORMAT_PNG, ACTION_TRANSMIT_AND_DISPLAY, more, chunk, ST
            ));
        } else {
            output.push_str(&format!("\x1b_Gm={};{}{}", more, chunk, ST));
        }
    }

    output
}

/// Split into pieces of at most `size` bytes, in order. A char wider than
/// `size` becomes a piece of its own. An empty payload still yields one
/// (empty) chunk.
pub fn chunk_payload(payload: &str, size: usize) -> Vec<&str> {
    let size = size.max(1);
    let mut chunks = Vec::with_capacity(payload.len() / size + 1);
    let mut rest = payload;

    while !rest.is_empty() {
        let mut end = rest.len().min(size);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }

    if chunks.is_empty() {
        chunks.push("");
    }
    chunks
}
