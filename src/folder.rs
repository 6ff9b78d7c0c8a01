use crate::error::{BatchError, Result};
use crate::verbose;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name tried for the `attempt`-th candidate: `base`, then `base(1)`, `base(2)`, ...
pub fn candidate_name(base_name: &str, attempt: u32) -> String {
    if attempt == 0 {
        base_name.to_string()
    } else {
        format!("{}({})", base_name, attempt)
    }
}

/// Creates a brand-new directory named after `base_name` inside `root`.
///
/// Any existing entry (file or directory) at a candidate path moves the search
/// on to the next numbered candidate, so an existing directory is never reused.
///
/// # Returns
/// * `Ok(path)` - The freshly created, empty directory
/// * `Err(BatchError::FolderCreationFailed)` - If the filesystem refuses the creation
pub fn allocate_unique_folder(root: &Path, base_name: &str) -> Result<PathBuf> {
    let mut attempt = 0u32;
    loop {
        let candidate = root.join(candidate_name(base_name, attempt));
        attempt += 1;

        if candidate.symlink_metadata().is_ok() {
            verbose!("Folder {:?} already exists, trying next name", candidate);
            continue;
        }

        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            // Lost a race with another process; keep counting.
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(BatchError::FolderCreationFailed(candidate, e)),
        }
    }
}
