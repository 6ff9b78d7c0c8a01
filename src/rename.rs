use crate::constants::{FOLDER_PREFIX, SUCCESS_PREFIX};
use crate::error::{BatchError, Result};
use crate::folder::allocate_unique_folder;
use crate::naming::{ImageFacts, RuleSet};
use crate::processing::{load_image_with_metadata, save_image};
use crate::utils::{absolute_path, create_progress_bar};
use crate::{info, verbose};
use chrono::{DateTime, Local, NaiveDate, Utc};
use image::{DynamicImage, GenericImageView};
use std::fs::Metadata;
use std::path::{Path, PathBuf};

impl ImageFacts {
    pub fn gather(path: &Path, img: &DynamicImage, metadata: &Metadata) -> Result<Self> {
        let stem = path
            .file_stem()
            .ok_or_else(|| BatchError::InvalidFileName(path.to_path_buf()))?
            .to_string_lossy()
            .into_owned();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let (width, height) = img.dimensions();

        Ok(Self {
            stem,
            extension,
            width,
            height,
            modified: DateTime::<Utc>::from(metadata.modified()?),
            size: metadata.len(),
        })
    }
}

/// Writes every image under a rule-derived name into a new folder under `output_root`.
///
/// The folder is allocated from `folder_name` once per call. Names are not
/// de-duplicated, so images that render the same name overwrite each other.
///
/// # Returns
/// * `Ok(paths)` - The written files, in input order
/// * `Err(BatchError)` - On the first file that cannot be read or written
pub fn rename_images(
    paths: &[PathBuf],
    rules: &RuleSet,
    output_root: &Path,
    folder_name: &str,
) -> Result<Vec<PathBuf>> {
    let output_folder = allocate_unique_folder(output_root, folder_name)?;
    info!(
        "{} Renamed images will be saved to: {}",
        FOLDER_PREFIX,
        absolute_path(&output_folder).display()
    );

    let today = Local::now().date_naive();
    rename_into(paths, rules, &output_folder, today)
}

fn rename_into(
    paths: &[PathBuf],
    rules: &RuleSet,
    output_folder: &Path,
    today: NaiveDate,
) -> Result<Vec<PathBuf>> {
    let progress = create_progress_bar(paths.len() as u64, "Renaming");
    let mut outputs = Vec::with_capacity(paths.len());

    for (index, input) in paths.iter().enumerate() {
        let (img, metadata) = load_image_with_metadata(input)?;
        let facts = ImageFacts::gather(input, &img, &metadata)?;
        let output = output_folder.join(rules.file_name(index + 1, &facts, today));
        verbose!("{:?} -> {:?}", input, output);

        save_image(&img, &output, None)?;

        progress.suspend(|| info!("{} Renamed and saved: {}", SUCCESS_PREFIX, output.display()));
        progress.inc(1);
        outputs.push(output);
    }

    progress.finish_and_clear();
    Ok(outputs)
}
