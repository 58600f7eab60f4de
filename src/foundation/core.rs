use crate::foundation::error::{PackError, PackResult};

/// Hard ceiling, in pixels, on either side of the packed atlas.
pub const MAX_SIDE_LENGTH: u32 = 11_000;

/// Pixel size, length, and playback rate of one frame sequence.
///
/// Construction validates every field, so any `Animation` that exists has positive
/// dimensions, at least one frame, and a finite positive frame rate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "AnimationFields")]
pub struct Animation {
    frame_width: u32,
    frame_height: u32,
    frame_count: u64,
    fps: f64,
}

impl Animation {
    pub fn new(
        frame_width: u32,
        frame_height: u32,
        frame_count: u64,
        fps: f64,
    ) -> PackResult<Self> {
        if frame_width == 0 {
            return Err(PackError::invalid_descriptor("frame width must be > 0"));
        }
        if frame_height == 0 {
            return Err(PackError::invalid_descriptor("frame height must be > 0"));
        }
        if frame_count == 0 {
            return Err(PackError::invalid_descriptor("frame count must be > 0"));
        }
        if !fps.is_finite() || fps <= 0.0 {
            return Err(PackError::invalid_descriptor(format!(
                "fps must be a finite positive number, got {fps}"
            )));
        }
        Ok(Self {
            frame_width,
            frame_height,
            frame_count,
            fps,
        })
    }

    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Widest column count that keeps the atlas within [`MAX_SIDE_LENGTH`].
    pub fn max_columns(&self) -> u32 {
        MAX_SIDE_LENGTH / self.frame_width
    }

    /// Tallest row count that keeps the atlas within [`MAX_SIDE_LENGTH`].
    pub fn max_rows(&self) -> u32 {
        MAX_SIDE_LENGTH / self.frame_height
    }
}

#[derive(serde::Deserialize)]
struct AnimationFields {
    frame_width: u32,
    frame_height: u32,
    frame_count: u64,
    fps: f64,
}

impl TryFrom<AnimationFields> for Animation {
    type Error = PackError;

    fn try_from(f: AnimationFields) -> PackResult<Self> {
        Self::new(f.frame_width, f.frame_height, f.frame_count, f.fps)
    }
}

/// A grid arrangement of frames inside the atlas.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Layout {
    pub columns: u32,
    pub rows: u32,
}

impl Layout {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of cells in the grid.
    pub fn capacity(self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    pub fn is_dense(self, anim: &Animation) -> bool {
        self.capacity() <= anim.frame_count()
    }

    pub fn is_sparse(self, anim: &Animation) -> bool {
        !self.is_dense(anim)
    }

    /// Packed atlas size in pixels as `(width, height)`.
    pub fn atlas_size(self, anim: &Animation) -> (u64, u64) {
        (
            u64::from(self.columns) * u64::from(anim.frame_width()),
            u64::from(self.rows) * u64::from(anim.frame_height()),
        )
    }

    /// Top-left pixel of frame `index` under row-major placement.
    ///
    /// Returns `None` for indices past the grid capacity; those frames are not packed.
    pub fn cell_origin(self, index: u64, anim: &Animation) -> Option<(u64, u64)> {
        if index >= self.capacity() {
            return None;
        }
        let columns = u64::from(self.columns);
        let row = index / columns;
        let column = index % columns;
        Some((
            column * u64::from(anim.frame_width()),
            row * u64::from(anim.frame_height()),
        ))
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
