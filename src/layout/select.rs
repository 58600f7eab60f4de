use crate::{
    foundation::core::{Animation, Layout},
    foundation::error::{PackError, PackResult},
    layout::anneal::{AnnealOpts, anneal_layout},
    layout::grid::{dense_layouts, layouts, sparse_layouts},
    layout::rank::select_best,
    layout::validity::is_valid,
};

/// Which side of the frame count the exhaustive search looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    /// Capacity at most the frame count; extra frames are dropped.
    #[default]
    Dense,
    /// Capacity above the frame count; trailing cells stay empty.
    Sparse,
}

/// How [`plan_layout`] searches for the primary layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Deterministic enumeration of every dense candidate.
    #[default]
    Exhaustive,
    /// Simulated annealing over dense layouts.
    Annealing(AnnealOpts),
}

/// How far a dense layout falls short of packing every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Shortfall {
    /// Frames to drop from the sequence so it fits exactly.
    pub remove: u64,
    /// Frames to add so it fills the best sparse layout, if one exists.
    pub add: Option<u64>,
}

/// Outcome of planning: the chosen layout plus truncation diagnostics.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutPlan {
    pub animation: Animation,
    pub layout: Layout,
    pub shortfall: Option<Shortfall>,
}

impl LayoutPlan {
    /// Number of frames that make it into the atlas.
    pub fn packed_frames(&self) -> u64 {
        self.layout.capacity().min(self.animation.frame_count())
    }

    /// Atlas size in pixels as `(width, height)`.
    pub fn atlas_size(&self) -> (u64, u64) {
        self.layout.atlas_size(&self.animation)
    }
}

/// Best layout of the requested density, or `None` when no candidate exists.
pub fn compute_layout(anim: &Animation, density: Density) -> Option<Layout> {
    match density {
        Density::Dense => select_best(dense_layouts(anim), anim),
        Density::Sparse => select_best(sparse_layouts(anim), anim),
    }
}

/// Diagnostics for a layout that cannot hold every frame.
///
/// Returns `None` when `layout` already has room for the whole sequence.
pub fn shortfall(anim: &Animation, layout: Layout) -> Option<Shortfall> {
    let capacity = layout.capacity();
    if capacity >= anim.frame_count() {
        return None;
    }
    let add =
        compute_layout(anim, Density::Sparse).map(|sparse| sparse.capacity() - anim.frame_count());
    Some(Shortfall {
        remove: anim.frame_count() - capacity,
        add,
    })
}

/// Pick a dense layout with `strategy` and attach truncation diagnostics.
#[tracing::instrument(skip_all, fields(
    frame_width = anim.frame_width(),
    frame_height = anim.frame_height(),
    frame_count = anim.frame_count(),
))]
pub fn plan_layout(anim: &Animation, strategy: &Strategy) -> PackResult<LayoutPlan> {
    let layout = match strategy {
        Strategy::Exhaustive => {
            tracing::debug!(
                candidates = layouts(anim).candidate_count(),
                "exhaustive search"
            );
            compute_layout(anim, Density::Dense).ok_or_else(|| {
                PackError::no_admissible_layout(format!(
                    "{}x{} frames do not fit within the atlas side limit",
                    anim.frame_width(),
                    anim.frame_height()
                ))
            })?
        }
        Strategy::Annealing(opts) => {
            opts.validate()?;
            let layout = anneal_layout(anim, opts);
            if !is_valid(layout, anim) {
                return Err(PackError::DegenerateLayout {
                    columns: layout.columns,
                    rows: layout.rows,
                });
            }
            layout
        }
    };

    let shortfall = shortfall(anim, layout);
    tracing::debug!(%layout, capacity = layout.capacity(), ?shortfall, "layout selected");

    Ok(LayoutPlan {
        animation: *anim,
        layout,
        shortfall,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/select.rs"]
mod tests;
