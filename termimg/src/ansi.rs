// ABOUTME: ANSI truecolor half-block renderer for terminals without a graphics protocol
// ABOUTME: Packs two vertical pixels per cell using foreground, background, and U+2584

use crate::constants::ansi::{FALLBACK_TERMINAL_COLUMNS, HALF_BLOCK, MAX_AUTO_COLUMNS};
use crate::constants::escape::RESET;
use crate::conversion::{load_image, resize_rgba};
use crate::Result;
use image::RgbaImage;
use std::path::Path;

/// Render `path` as `target_columns` cells wide, aspect preserved
pub async fn encode(path: &Path, target_columns: u32) -> Result<String> {
    let img = load_image(path).await?;
    let columns = target_columns.max(1);

    let text = tokio::task::spawn_blocking(move || {
        let rows = cell_rows(img.width(), img.height(), columns);
        render_cells(&resize_rgba(&img, columns, rows * 2))
    })
    .await?;

    Ok(text)
}

/// Rows of text needed for `columns` cells. Each cell covers two pixel rows.
pub fn cell_rows(width: u32, height: u32, columns: u32) -> u32 {
    if width == 0 || height == 0 {
        return 1;
    }
    let aspect = f64::from(width) / f64::from(height);
    let rows = (f64::from(columns) / aspect / 2.0).round();
    (rows as u32).max(1)
}

/// Columns for auto-sized output: the terminal width, capped
pub fn default_columns(terminal_width: Option<u16>) -> u32 {
    u32::from(
        terminal_width
            .unwrap_or(FALLBACK_TERMINAL_COLUMNS)
            .min(MAX_AUTO_COLUMNS),
    )
}

/// Render an already-sized bitmap. Pixel row `2y` is the foreground (top
/// half), row `2y + 1` the background. An odd trailing row is dropped.
pub fn render_cells(img: &RgbaImage) -> String {
    let (width, height) = img.dimensions();
    let rows = height / 2;

    let mut lines = Vec::with_capacity(rows as usize);
    for y in 0..rows {
        let mut line = String::with_capacity(width as usize * 40);
        for x in 0..width {
            let top = img.get_pixel(x, y * 2).0;
            let bottom = img.get_pixel(x, y * 2 + 1).0;
            line.push_str(&format!(
                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}",
                top[0], top[1], top[2], bottom[0], bottom[1], bottom[2], HALF_BLOCK
            ));
        }
        line.push_str(RESET);
        lines.push(line);
    }

    lines.join("\n")
}
