use crate::constants::{
    COMPRESSED_FOLDER, COMPRESSED_JPEG_QUALITY, FOLDER_PREFIX, MAX_RATIO_PERCENT,
    MIN_RATIO_PERCENT, RATIO_PREFIX, SIZE_PREFIX, SUCCESS_PREFIX,
};
use crate::error::{BatchError, Result};
use crate::folder::allocate_unique_folder;
use crate::processing::{load_image_with_metadata, resize_exact, save_image};
use crate::utils::{absolute_path, calculate_size_reduction, create_progress_bar, format_file_size};
use crate::{info, verbose};
use image::{DynamicImage, GenericImageView};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Scale factor applied to both sides of every image, stored as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionRatio(u8);

impl CompressionRatio {
    pub fn from_percent(percent: i64) -> Result<Self> {
        if !(MIN_RATIO_PERCENT as i64..=MAX_RATIO_PERCENT as i64).contains(&percent) {
            return Err(BatchError::RatioOutOfRange(
                percent,
                MIN_RATIO_PERCENT,
                MAX_RATIO_PERCENT,
            ));
        }
        Ok(Self(percent as u8))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn as_fraction(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `floor(dimension * ratio)`, never below one pixel.
    pub fn scale(&self, dimension: u32) -> u32 {
        let scaled = dimension as u64 * self.0 as u64 / 100;
        (scaled as u32).max(1)
    }

    pub fn scale_dimensions(&self, (width, height): (u32, u32)) -> (u32, u32) {
        (self.scale(width), self.scale(height))
    }
}

impl FromStr for CompressionRatio {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let percent = trimmed
            .parse::<i64>()
            .map_err(|_| BatchError::InvalidRatio(trimmed.to_string()))?;
        Self::from_percent(percent)
    }
}

impl fmt::Display for CompressionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

pub fn resize_image(img: &DynamicImage, ratio: CompressionRatio) -> DynamicImage {
    let (width, height) = ratio.scale_dimensions(img.dimensions());
    resize_exact(img, width, height)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressionSummary {
    pub files: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
    pub elapsed: Duration,
}

impl CompressionSummary {
    fn record(&mut self, before: u64, after: u64) {
        self.files += 1;
        self.bytes_before += before;
        self.bytes_after += after;
    }

    pub fn reduction_percent(&self) -> f64 {
        calculate_size_reduction(self.bytes_before, self.bytes_after)
    }

    fn print(&self) {
        info!("\n{} Compression Summary:", SIZE_PREFIX);
        info!("  {} Files compressed: {}", FOLDER_PREFIX, self.files);
        info!(
            "  {} Total size: {} -> {}",
            SIZE_PREFIX,
            format_file_size(self.bytes_before),
            format_file_size(self.bytes_after)
        );
        info!("  {} Size reduction: {:.1}%", RATIO_PREFIX, self.reduction_percent());
        info!("  ⏱️  Total time: {:.2?}", self.elapsed);
    }
}

/// Resizes every image by `ratio` into a new `compressed_images` folder under `output_root`.
///
/// Output file names are the input file names, so two inputs with the same
/// name leave only the later one on disk.
///
/// # Returns
/// * `Ok(paths)` - The written files, in input order
/// * `Err(BatchError)` - On the first file that cannot be read or written;
///   files written before it stay in place
pub fn compress_images(
    paths: &[PathBuf],
    ratio: CompressionRatio,
    output_root: &Path,
) -> Result<Vec<PathBuf>> {
    let output_folder = allocate_unique_folder(output_root, COMPRESSED_FOLDER)?;
    info!(
        "{} Compressed images will be saved to: {}",
        FOLDER_PREFIX,
        absolute_path(&output_folder).display()
    );

    let start_time = Instant::now();
    let progress = create_progress_bar(paths.len() as u64, "Compressing");
    let mut summary = CompressionSummary::default();
    let mut outputs = Vec::with_capacity(paths.len());

    for input in paths {
        let file_name = input
            .file_name()
            .ok_or_else(|| BatchError::InvalidFileName(input.clone()))?;
        let output = output_folder.join(file_name);

        let (before, after) = compress_single_image(input, &output, ratio)?;
        summary.record(before, after);

        progress.suspend(|| info!("{} Compressed and saved: {}", SUCCESS_PREFIX, output.display()));
        progress.inc(1);
        outputs.push(output);
    }

    progress.finish_and_clear();
    summary.elapsed = start_time.elapsed();
    summary.print();

    Ok(outputs)
}

fn compress_single_image(
    input: &Path,
    output: &Path,
    ratio: CompressionRatio,
) -> Result<(u64, u64)> {
    let (img, metadata) = load_image_with_metadata(input)?;
    let resized = resize_image(&img, ratio);
    verbose!(
        "{:?}: {}x{} -> {}x{}",
        input,
        img.width(),
        img.height(),
        resized.width(),
        resized.height()
    );

    save_image(&resized, output, Some(COMPRESSED_JPEG_QUALITY))?;
    let compressed_size = fs::metadata(output)?.len();

    Ok((metadata.len(), compressed_size))
}
