// ABOUTME: Test helper utilities for building fixture images on disk
// ABOUTME: Provides solid, striped, and high-entropy bitmaps written as PNG into temp dirs

use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

/// Every row is one color, alternating between `top` (even rows) and `bottom` (odd rows)
pub fn striped_image(width: u32, height: u32, top: [u8; 3], bottom: [u8; 3]) -> RgbaImage {
    RgbaImage::from_fn(width, height, |_, y| {
        let c = if y % 2 == 0 { top } else { bottom };
        Rgba([c[0], c[1], c[2], 255])
    })
}

/// Pseudo-random pixels so PNG compression cannot shrink the payload much
pub fn noise_image(width: u32, height: u32) -> RgbaImage {
    let mut state: u32 = 0x2545_F491;
    RgbaImage::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let [r, g, b, _] = state.to_le_bytes();
        Rgba([r, g, b, 255])
    })
}

pub fn write_png(dir: &TempDir, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.path().join(name);
    img.save_with_format(&path, image::ImageFormat::Png)
        .expect("fixture image should be writable");
    path
}
