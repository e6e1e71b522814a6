use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Resample to `size` x `size` with Lanczos3. A same-size request is a copy.
pub fn resample(img: &RgbaImage, size: u32) -> RgbaImage {
    if img.dimensions() == (size, size) {
        img.clone()
    } else {
        imageops::resize(img, size, size, FilterType::Lanczos3)
    }
}

/// Emit one `icon-{size}.png` per size-set entry into `out_dir`, creating the
/// directory if absent. Existing files are overwritten. Returns the written
/// paths in size-set order.
pub fn write_png_set(img: &RgbaImage, out_dir: &Path, sizes: &[u32]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let resized = resample(img, size);
        let path = out_dir.join(format!("icon-{size}.png"));
        resized
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
