use bytes::Bytes;
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, GenericImageView};

/// Longest edge after compression.
pub const MAX_DIMENSION: u32 = 1920;
pub const JPEG_QUALITY: u8 = 80;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompressionError {
    #[error("Image could not be decoded: {0}")]
    Undecodable(String),

    #[error("JPEG encoding failed: {0}")]
    EncodeFailed(String),

    #[error("Compression task failed")]
    TaskFailed,
}

#[derive(Debug, Clone)]
pub struct CompressedImage {
    pub bytes: Bytes,
    pub width: u32,
    pub height: u32,
}

/// Decode, fit inside `MAX_DIMENSION` keeping the aspect ratio, re-encode as JPEG.
pub fn compress_image(input: &[u8]) -> Result<CompressedImage, CompressionError> {
    let decoded =
        image::load_from_memory(input).map_err(|e| CompressionError::Undecodable(e.to_string()))?;

    let (width, height) = decoded.dimensions();
    let resized = if width > MAX_DIMENSION || height > MAX_DIMENSION {
        decoded.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Triangle)
    } else {
        decoded
    };

    // JPEG has no alpha channel
    let rgb = resized.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| CompressionError::EncodeFailed(e.to_string()))?;

    Ok(CompressedImage {
        bytes: Bytes::from(out),
        width: rgb.width(),
        height: rgb.height(),
    })
}

/// Runs `compress_image` off the async runtime.
pub async fn compress(input: Bytes) -> Result<CompressedImage, CompressionError> {
    tokio::task::spawn_blocking(move || compress_image(&input))
        .await
        .map_err(|_| CompressionError::TaskFailed)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([200, 30, 30, 128]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn large_images_are_downscaled_keeping_aspect() {
        let out = compress_image(&png(3840, 1280)).unwrap();
        assert_eq!((out.width, out.height), (1920, 640));
        assert_eq!(image::guess_format(&out.bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn tall_images_are_bounded_by_height() {
        let out = compress_image(&png(500, 2500)).unwrap();
        assert_eq!((out.width, out.height), (384, 1920));
    }

    #[test]
    fn small_images_keep_their_size() {
        let out = compress_image(&png(64, 32)).unwrap();
        assert_eq!((out.width, out.height), (64, 32));
    }

    #[test]
    fn garbage_is_undecodable() {
        assert!(matches!(
            compress_image(b"definitely not an image"),
            Err(CompressionError::Undecodable(_))
        ));
    }

    #[tokio::test]
    async fn compress_runs_on_blocking_pool() {
        let out = compress(Bytes::from(png(10, 10))).await.unwrap();
        assert_eq!(out.width, 10);
    }
}
