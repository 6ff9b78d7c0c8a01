use crate::constants::{PICKER_FILTER_NAME, PICKER_TITLE, SUPPORTED_IMAGE_EXTENSIONS};
use crate::error::{BatchError, Result};
use crate::{verbose, warn};
use glob::glob;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check if a file path has one of the extensions the picker offers.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Returns the images to process, in selection order.
///
/// With no command-line inputs the native file picker is shown; otherwise each
/// input is expanded by [`collect_image_files`].
pub fn select_images(inputs: &[String]) -> Result<Vec<PathBuf>> {
    if inputs.is_empty() {
        return pick_images();
    }

    let mut images = Vec::new();
    for input in inputs {
        let found = collect_image_files(input)?;
        if found.is_empty() {
            warn!("No image files matched {:?}", input);
        }
        images.extend(found);
    }
    Ok(images)
}

/// Expands one input into canonical image paths.
///
/// * An existing file is kept if it has a supported extension.
/// * An existing directory contributes its top-level images, sorted by name,
///   skipping hidden entries.
/// * Anything else is treated as a glob pattern.
pub fn collect_image_files(input: &str) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();
    let input_path = Path::new(input);

    if input_path.is_file() {
        if is_image_file(input_path) {
            image_files.push(input_path.canonicalize()?);
        } else {
            verbose!("Skipping non-image file {:?}", input_path);
        }
    } else if input_path.is_dir() {
        let root = input_path.canonicalize()?;
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_image_file(path) {
                image_files.push(path.canonicalize()?);
            }
        }
    } else {
        for entry in glob(input)?.flatten() {
            if entry.is_file() && is_image_file(&entry) {
                image_files.push(entry.canonicalize()?);
            }
        }
    }

    Ok(image_files)
}

/// Shows a native multi-select dialog. Cancelling yields an empty list.
pub fn pick_images() -> Result<Vec<PathBuf>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| BatchError::Picker(e.to_string()))?;

    let picked = runtime.block_on(
        rfd::AsyncFileDialog::new()
            .set_title(PICKER_TITLE)
            .add_filter(PICKER_FILTER_NAME, SUPPORTED_IMAGE_EXTENSIONS)
            .pick_files(),
    );

    Ok(picked
        .unwrap_or_default()
        .into_iter()
        .map(|handle| handle.path().to_path_buf())
        .collect())
}
