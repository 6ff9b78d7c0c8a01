use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Writes a solid-colour image; the format follows the file extension.
pub fn create_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([200, 100, 50]))
        .save(&path)
        .unwrap();
    path
}

/// One image per supported extension, selected in this order.
pub fn create_mixed_selection(dir: &Path) -> Vec<PathBuf> {
    vec![
        create_test_image(dir, "A.jpg", 100, 60),
        create_test_image(dir, "B.png", 80, 40),
        create_test_image(dir, "C.bmp", 20, 20),
    ]
}
