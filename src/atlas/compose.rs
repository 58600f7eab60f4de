use std::path::Path;

use anyhow::Context as _;
use image::{RgbImage, imageops};

use crate::{
    atlas::discover::FrameSet,
    foundation::{
        core::Layout,
        error::{PackError, PackResult},
    },
    layout::validity::is_admissible,
};

/// Tile the frames of `frames` into one RGB atlas.
///
/// Frame `i` lands in row `i / columns`, column `i % columns`. Each frame is cropped
/// to the first frame's size from its top-left corner; frames past the grid capacity
/// are not read.
#[tracing::instrument(skip_all, fields(frames = frames.paths.len(), %layout))]
pub fn compose_atlas(frames: &FrameSet, layout: Layout) -> PackResult<RgbImage> {
    let anim = &frames.animation;
    if !is_admissible(layout, anim) {
        return Err(PackError::DegenerateLayout {
            columns: layout.columns,
            rows: layout.rows,
        });
    }

    let (width, height) = layout.atlas_size(anim);
    let mut atlas = RgbImage::new(width as u32, height as u32);

    for (index, path) in frames.paths.iter().enumerate() {
        let Some((x, y)) = layout.cell_origin(index as u64, anim) else {
            break;
        };
        let cell = image::open(path)
            .with_context(|| format!("open frame '{}'", path.display()))?
            .crop_imm(0, 0, anim.frame_width(), anim.frame_height())
            .to_rgb8();
        imageops::replace(&mut atlas, &cell, x as i64, y as i64);
    }

    Ok(atlas)
}

/// Save `atlas` as a PNG, creating parent directories as needed.
pub fn write_atlas(atlas: &RgbImage, path: &Path) -> PackResult<()> {
    ensure_parent_dir(path)?;
    atlas
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Create `path`'s parent directory if it has one.
pub fn ensure_parent_dir(path: &Path) -> PackResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/compose.rs"]
mod tests;
