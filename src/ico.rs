use crate::constants::sizes;
use crate::resample;
use anyhow::{bail, Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use std::fs::File;
use std::path::Path;

/// Load the base raster at `input`, resample it across the Windows size
/// ladder, and write an .ico container to `output`.
///
/// The shipped container carries the 256px frame only; call [`pack`] with the
/// whole ladder to embed every size.
pub fn package(input: &Path, output: &Path) -> Result<()> {
    if !input.exists() {
        bail!("missing input {}; run create-icon first", input.display());
    }

    let base = image::open(input)
        .with_context(|| format!("Failed to load {}", input.display()))?
        .to_rgba8();

    let frames: Vec<RgbaImage> = sizes::ICO_SIZES
        .iter()
        .map(|&size| resample::resample(&base, size))
        .collect();

    let embed = frames
        .iter()
        .find(|frame| frame.width() == sizes::ICO_EMBED_SIZE)
        .context("256px frame missing from size ladder")?;

    pack(std::slice::from_ref(embed), output)
}

/// Encode `frames` into a single .ico container at `path`, creating the parent
/// directory if absent. The container holds one entry per frame, in order.
pub fn pack(frames: &[RgbaImage], path: &Path) -> Result<()> {
    if frames.is_empty() {
        bail!("cannot pack an .ico with no frames");
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }

    let mut dir = IconDir::new(ResourceType::Icon);
    for frame in frames {
        let img = IconImage::from_rgba_data(frame.width(), frame.height(), frame.as_raw().clone());
        dir.add_entry(IconDirEntry::encode(&img).context("Failed to encode .ico frame")?);
    }

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    dir.write(&mut file)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Read back the (width, height) of each frame in an .ico file.
pub fn frame_dimensions(path: &Path) -> Result<Vec<(u32, u32)>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let dir = IconDir::read(file)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect())
}
