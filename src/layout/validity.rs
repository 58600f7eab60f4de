use crate::foundation::core::{Animation, Layout, MAX_SIDE_LENGTH};

/// `true` when `layout` has at least one column and row and fits the atlas ceiling.
pub fn is_admissible(layout: Layout, anim: &Animation) -> bool {
    if layout.columns == 0 || layout.rows == 0 {
        return false;
    }
    let (width, height) = layout.atlas_size(anim);
    let max = u64::from(MAX_SIDE_LENGTH);
    width <= max && height <= max
}

/// Admissible and no larger than the frame sequence, so no cell is left empty.
pub fn is_valid(layout: Layout, anim: &Animation) -> bool {
    is_admissible(layout, anim) && layout.is_dense(anim)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/validity.rs"]
mod tests;
