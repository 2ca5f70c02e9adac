//! QR code rasterization.
//!
//! The code is generated at error-correction level H on the smallest version
//! that fits the payload, drawn black-on-white at 10 px per module with a
//! 4-module quiet zone, then resampled with Lanczos3 to the requested square
//! size. Output is fully deterministic for a given payload and size.

use std::io::Cursor;

use image::{imageops, imageops::FilterType, DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use thiserror::Error;

/// Pixels per QR module before resampling.
const MODULE_SIZE: u32 = 10;

/// Quiet zone width in modules, per the QR standard.
const QUIET_ZONE_MODULES: u32 = 4;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Render `text` as a `size`x`size` PNG.
pub fn render_qr_png(text: &str, size: u32) -> Result<Vec<u8>, QrError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)?;
    let module_count = code.width() as u32;

    let native_size = (module_count + 2 * QUIET_ZONE_MODULES) * MODULE_SIZE;
    let mut img = GrayImage::from_pixel(native_size, native_size, Luma([255u8]));

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color == Color::Dark {
            let x = (i as u32 % module_count + QUIET_ZONE_MODULES) * MODULE_SIZE;
            let y = (i as u32 / module_count + QUIET_ZONE_MODULES) * MODULE_SIZE;
            for dy in 0..MODULE_SIZE {
                for dx in 0..MODULE_SIZE {
                    img.put_pixel(x + dx, y + dy, Luma([0u8]));
                }
            }
        }
    }

    let resized = imageops::resize(&img, size, size, FilterType::Lanczos3);

    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(resized).write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;

    tracing::trace!(payload_len = text.len(), size, "Rendered QR code");
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_deterministic() {
        let a = render_qr_png("https://example.com/x.png", 400).unwrap();
        let b = render_qr_png("https://example.com/x.png", 400).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn output_is_a_square_png_of_the_requested_size() {
        let png = render_qr_png("https://example.com/x.png", 400).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), 400);
        assert_eq!(img.height(), 400);
    }

    #[test]
    fn different_payloads_produce_different_images() {
        let a = render_qr_png("https://example.com/a", 400).unwrap();
        let b = render_qr_png("https://example.com/b", 400).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn long_payloads_fit_on_larger_versions() {
        let long_url = format!("https://example.com/{}", "a".repeat(200));
        let png = render_qr_png(&long_url, 400).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), 400);
    }

    #[test]
    fn non_default_sizes_are_honored() {
        let png = render_qr_png("https://example.com", 128).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), 128);
        assert_eq!(img.height(), 128);
    }
}
