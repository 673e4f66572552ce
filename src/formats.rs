//! Output encoding for the resized variants.
//!
//! Variants keep the source file's name, so the encoder is chosen from the
//! file extension and always run at its highest quality setting.

use crate::constants::JPEG_MAX_QUALITY;
use crate::error::{IconError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageFormat};
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Image formats a variant can be written as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    /// Lossy, written at quality 100 without alpha
    Jpeg,
    WebP,
    Bmp,
    Tiff,
    Gif,
}

impl OutputFormat {
    /// Determine the format from a file extension, case-insensitively
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                IconError::UnsupportedFormat(format!("{} has no file extension", path.display()))
            })?;

        match ext.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "webp" => Ok(OutputFormat::WebP),
            "bmp" => Ok(OutputFormat::Bmp),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            "gif" => Ok(OutputFormat::Gif),
            other => Err(IconError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn to_image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::WebP => ImageFormat::WebP,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tiff => ImageFormat::Tiff,
            OutputFormat::Gif => ImageFormat::Gif,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::WebP => "WebP",
            OutputFormat::Bmp => "BMP",
            OutputFormat::Tiff => "TIFF",
            OutputFormat::Gif => "GIF",
        };
        write!(f, "{}", name)
    }
}

/// Write `img` to `output` using the best quality `format` offers.
///
/// # Arguments
/// * `img` - The resized variant
/// * `output` - Destination file; its parent directory must already exist
/// * `format` - Encoder to use
pub fn save_with_max_quality(img: &DynamicImage, output: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Jpeg => {
            let writer = BufWriter::new(File::create(output)?);
            let encoder = JpegEncoder::new_with_quality(writer, JPEG_MAX_QUALITY);
            // JPEG has no alpha channel
            DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)?;
        }
        OutputFormat::Png => {
            let writer = BufWriter::new(File::create(output)?);
            let encoder =
                PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
            img.write_with_encoder(encoder)?;
        }
        other => {
            img.save_with_format(output, other.to_image_format())?;
        }
    }

    Ok(())
}
