//! Single-band raster decoding on top of the `image` crate.
//!
//! Sentinel-2 band exports typically arrive as single-channel GeoTIFF
//! (uint16 reflectance). The decoder takes the first channel only when
//! a file carries several, and widens integer samples to f32 verbatim.
//! Value scaling is the producer's burden; nothing is normalized here.

use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};
use crate::types::{BandGrid, Dimensions};

/// Decodes raw file bytes into a single-band grid.
///
/// The filename provides a format hint via its extension; when that
/// fails the content is sniffed instead. Any decoder failure surfaces
/// as [`Error::Decode`] carrying the filename and the original cause.
pub fn read_band(bytes: &[u8], filename: &str) -> Result<BandGrid> {
    let format = format_from_extension(filename).or_else(|| image::guess_format(bytes).ok());

    let decoded = match format {
        Some(fmt) => image::load_from_memory_with_format(bytes, fmt),
        None => image::load_from_memory(bytes),
    }
    .map_err(|e| Error::Decode(format!("{}: {}", filename, e)))?;

    first_channel(decoded, filename)
}

fn format_from_extension(filename: &str) -> Option<ImageFormat> {
    let ext = Path::new(filename).extension()?.to_str()?;
    ImageFormat::from_extension(ext)
}

/// Extracts the first channel of a decoded image as an f32 grid.
fn first_channel(image: DynamicImage, filename: &str) -> Result<BandGrid> {
    let dims = Dimensions::new(image.width() as usize, image.height() as usize);

    let data = match image {
        DynamicImage::ImageLuma8(buf) => widen(buf.as_raw(), 1),
        DynamicImage::ImageLumaA8(buf) => widen(buf.as_raw(), 2),
        DynamicImage::ImageRgb8(buf) => widen(buf.as_raw(), 3),
        DynamicImage::ImageRgba8(buf) => widen(buf.as_raw(), 4),
        DynamicImage::ImageLuma16(buf) => widen(buf.as_raw(), 1),
        DynamicImage::ImageLumaA16(buf) => widen(buf.as_raw(), 2),
        DynamicImage::ImageRgb16(buf) => widen(buf.as_raw(), 3),
        DynamicImage::ImageRgba16(buf) => widen(buf.as_raw(), 4),
        DynamicImage::ImageRgb32F(buf) => widen(buf.as_raw(), 3),
        DynamicImage::ImageRgba32F(buf) => widen(buf.as_raw(), 4),
        other => {
            return Err(Error::Decode(format!(
                "{}: unsupported sample layout {:?}",
                filename,
                other.color()
            )))
        }
    };

    BandGrid::new(dims, data)
}

/// Takes sample 0 of every pixel, converting to f32.
fn widen<T: Into<f32> + Copy>(samples: &[T], channels: usize) -> Vec<f32> {
    samples
        .chunks_exact(channels)
        .map(|px| px[0].into())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image
            .write_to(&mut buf, image::ImageOutputFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_reads_gray_png() {
        let img = image::GrayImage::from_raw(2, 2, vec![0, 64, 128, 255]).unwrap();
        let bytes = encode_png(DynamicImage::ImageLuma8(img));

        let grid = read_band(&bytes, "band.png").unwrap();
        assert_eq!(grid.dimensions(), Dimensions::new(2, 2));
        assert_eq!(grid.data(), &[0.0, 64.0, 128.0, 255.0]);
    }

    #[test]
    fn test_reads_16bit_gray() {
        let img = image::ImageBuffer::<image::Luma<u16>, _>::from_raw(2, 1, vec![1000u16, 40000])
            .unwrap();
        let bytes = encode_png(DynamicImage::ImageLuma16(img));

        let grid = read_band(&bytes, "b08.png").unwrap();
        assert_eq!(grid.data(), &[1000.0, 40000.0]);
    }

    #[test]
    fn test_takes_first_channel_of_rgb() {
        let img = image::RgbImage::from_raw(1, 2, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let bytes = encode_png(DynamicImage::ImageRgb8(img));

        let grid = read_band(&bytes, "rgb.png").unwrap();
        assert_eq!(grid.data(), &[10.0, 40.0]);
    }

    #[test]
    fn test_sniffs_content_when_extension_lies() {
        let img = image::GrayImage::from_raw(1, 1, vec![7]).unwrap();
        let bytes = encode_png(DynamicImage::ImageLuma8(img));

        // Unknown extension falls back to magic-byte sniffing.
        let grid = read_band(&bytes, "band.dat").unwrap();
        assert_eq!(grid.data(), &[7.0]);
    }

    #[test]
    fn test_garbage_bytes_fail_with_decode_error() {
        let err = read_band(b"not a raster at all", "scene.tif").unwrap_err();
        match err {
            Error::Decode(msg) => assert!(msg.contains("scene.tif")),
            other => panic!("expected Decode, got {}", other),
        }
    }
}
