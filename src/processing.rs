use crate::error::{BatchError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::fs::{self, File, Metadata};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Validates that a file exists at the given path.
///
/// # Example
/// ```
/// use std::path::Path;
/// use img_batch::processing::validate_file_exists;
///
/// let result = validate_file_exists(Path::new("nonexistent.jpg"));
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BatchError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Loads an image and the file metadata it was read from.
///
/// The format is sniffed from the file contents, so a PNG saved as `.jpg`
/// still decodes.
///
/// # Returns
/// * `Ok((image, metadata))` - The decoded image and its file metadata
/// * `Err(BatchError::FileNotFound)` - If nothing exists at `input_path`
/// * `Err(BatchError::ImageProcessing)` - If the file is not a decodable image
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, Metadata)> {
    validate_file_exists(input_path)?;

    let metadata = fs::metadata(input_path)?;
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;

    Ok((img, metadata))
}

pub fn resize_exact(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    img.resize_exact(width, height, FilterType::Lanczos3)
}

/// Encoder is chosen from the output extension.
pub fn determine_output_format(output: &Path) -> Result<ImageFormat> {
    Ok(ImageFormat::from_path(output)?)
}

/// Writes `img` to `output` in the format implied by its extension.
///
/// `jpeg_quality` only affects JPEG output; `None` keeps the encoder default.
/// JPEG cannot carry alpha or 16-bit samples, so such images are converted to
/// 8-bit RGB first.
pub fn save_image(img: &DynamicImage, output: &Path, jpeg_quality: Option<u8>) -> Result<()> {
    let format = determine_output_format(output)?;

    match format {
        ImageFormat::Jpeg => {
            let converted;
            let source = match img.color() {
                ColorType::L8 | ColorType::Rgb8 => img,
                _ => {
                    converted = DynamicImage::ImageRgb8(img.to_rgb8());
                    &converted
                }
            };

            let mut writer = BufWriter::new(File::create(output)?);
            let encoder = match jpeg_quality {
                Some(quality) => JpegEncoder::new_with_quality(&mut writer, quality),
                None => JpegEncoder::new(&mut writer),
            };
            source.write_with_encoder(encoder)?;
            writer.flush()?;
        }
        _ => {
            img.save_with_format(output, format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_load_image_with_metadata_not_found() {
        let path = Path::new("nonexistent.jpg");
        let result = load_image_with_metadata(path);
        assert!(matches!(result, Err(BatchError::FileNotFound(_))));
    }

    #[test]
    fn test_load_image_rejects_non_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fake.jpg");
        fs::write(&path, b"fake image data").unwrap();

        let result = load_image_with_metadata(&path);
        assert!(matches!(result, Err(BatchError::ImageProcessing(_))));
    }

    #[test]
    fn test_load_image_reports_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("small.png");
        RgbImage::from_pixel(12, 7, Rgb([10, 20, 30])).save(&path).unwrap();

        let (img, metadata) = load_image_with_metadata(&path).unwrap();

        assert_eq!(img.dimensions(), (12, 7));
        assert_eq!(metadata.len(), fs::metadata(&path).unwrap().len());
    }

    #[test]
    fn test_determine_output_format() {
        assert_eq!(
            determine_output_format(Path::new("a.jpg")).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            determine_output_format(Path::new("a.JPEG")).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            determine_output_format(Path::new("a.png")).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            determine_output_format(Path::new("a.bmp")).unwrap(),
            ImageFormat::Bmp
        );
        assert!(matches!(
            determine_output_format(Path::new("a.unknown")),
            Err(BatchError::ImageProcessing(_))
        ));
    }

    #[test]
    fn test_resize_exact() {
        let img = DynamicImage::new_rgb8(2000, 1500);
        assert_eq!(resize_exact(&img, 600, 450).dimensions(), (600, 450));
    }

    #[test]
    fn test_save_rgba_as_jpeg() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("alpha.jpg");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 128])));

        save_image(&img, &output, Some(95)).unwrap();

        let reloaded = image::open(&output).unwrap();
        assert_eq!(reloaded.dimensions(), (8, 8));
    }

    #[test]
    fn test_save_png_and_bmp() {
        let temp_dir = TempDir::new().unwrap();
        let img = DynamicImage::new_rgb8(5, 3);

        for name in ["out.png", "out.bmp"] {
            let output = temp_dir.path().join(name);
            save_image(&img, &output, None).unwrap();
            assert_eq!(image::open(&output).unwrap().dimensions(), (5, 3));
        }
    }
}
