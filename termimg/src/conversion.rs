// ABOUTME: Image loading, resizing, and PNG re-encoding shared by the protocol encoders
// ABOUTME: File reads are async; CPU-bound decode and encode work runs on the blocking pool

use crate::error::TermImgError;
use crate::Result;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Read raw file bytes
pub async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| TermImgError::file_read(path, e))
}

/// Read and decode an image file into an in-memory bitmap
pub async fn load_image(path: &Path) -> Result<DynamicImage> {
    let data = read_file(path).await?;
    let owned: PathBuf = path.to_path_buf();

    tokio::task::spawn_blocking(move || {
        image::load_from_memory(&data).map_err(|source| TermImgError::ImageDecode {
            path: owned,
            source,
        })
    })
    .await?
}

/// Resize to exactly `width` x `height` with a bilinear filter, as RGBA
pub fn resize_rgba(img: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    let (width, height) = (width.max(1), height.max(1));
    if img.width() == width && img.height() == height {
        return img.to_rgba8();
    }

    log::debug!(
        "Scaling image from {}x{} to {}x{}",
        img.width(),
        img.height(),
        width,
        height
    );
    image::imageops::resize(&img.to_rgba8(), width, height, FilterType::Triangle)
}

/// Height that keeps the source aspect ratio at `width`, at least 1
pub fn proportional_height(source_width: u32, source_height: u32, width: u32) -> u32 {
    if source_width == 0 {
        return 1;
    }
    let scaled = (f64::from(source_height) * f64::from(width) / f64::from(source_width)).round();
    (scaled as u32).max(1)
}

/// Encode a bitmap as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(TermImgError::ImageEncode)?;

    log::debug!("Encoded {}x{} PNG ({} bytes)", img.width(), img.height(), buffer.len());
    Ok(buffer)
}
