//! Ranking of candidate layouts.
//!
//! A layout is better when its capacity is closer to the frame count. Ties go to the
//! layout whose packed width and height are closer together, and any remaining tie
//! goes to the first argument.

use std::cmp::Ordering;

use crate::foundation::core::{Animation, Layout};

/// Distance between the layout's capacity and the frame count.
pub fn frame_delta(layout: Layout, anim: &Animation) -> u64 {
    layout.capacity().abs_diff(anim.frame_count())
}

/// Pixel difference between the packed atlas width and height.
pub fn squareness(layout: Layout, anim: &Animation) -> u64 {
    let (width, height) = layout.atlas_size(anim);
    width.abs_diff(height)
}

/// Order two layouts by preference. `Less` means `a` ranks ahead of `b`.
pub fn compare_layouts(a: Layout, b: Layout, anim: &Animation) -> Ordering {
    frame_delta(a, anim)
        .cmp(&frame_delta(b, anim))
        .then_with(|| squareness(a, anim).cmp(&squareness(b, anim)))
}

/// Pick the preferred of two layouts, keeping `a` on an exact tie.
pub fn better_layout(a: Layout, b: Layout, anim: &Animation) -> Layout {
    match compare_layouts(a, b, anim) {
        Ordering::Greater => b,
        Ordering::Less | Ordering::Equal => a,
    }
}

/// Fold `candidates` down to the best layout, or `None` when there are none.
pub fn select_best<I>(candidates: I, anim: &Animation) -> Option<Layout>
where
    I: IntoIterator<Item = Layout>,
{
    candidates
        .into_iter()
        .reduce(|best, next| better_layout(best, next, anim))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/rank.rs"]
mod tests;
