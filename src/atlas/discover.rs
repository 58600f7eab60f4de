use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::{
    core::Animation,
    error::{PackError, PackResult},
};

/// Frame files in playback order together with the descriptor built from them.
#[derive(Clone, Debug)]
pub struct FrameSet {
    pub paths: Vec<PathBuf>,
    pub animation: Animation,
}

/// Expand `pattern` into frame files and describe the sequence.
///
/// Matches are sorted by path so playback order does not depend on directory listing
/// order. The frame size is taken from the first match.
#[tracing::instrument(skip(fps))]
pub fn discover_frames(pattern: &str, fps: f64) -> PackResult<FrameSet> {
    let entries = glob::glob(pattern)
        .map_err(|e| PackError::discovery(format!("invalid pattern '{pattern}': {e}")))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("read glob match")?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let Some(first) = paths.first() else {
        return Err(PackError::discovery(format!(
            "pattern '{pattern}' does not match any frames"
        )));
    };

    let (frame_width, frame_height) = frame_dimensions(first)?;
    let animation = Animation::new(frame_width, frame_height, paths.len() as u64, fps)?;
    tracing::debug!(
        frames = paths.len(),
        frame_width,
        frame_height,
        "discovered frames"
    );

    Ok(FrameSet { paths, animation })
}

fn frame_dimensions(path: &Path) -> PackResult<(u32, u32)> {
    let dims = image::image_dimensions(path)
        .with_context(|| format!("read frame size of '{}'", path.display()))?;
    Ok(dims)
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/discover.rs"]
mod tests;
