//! framepack packs a sequence of equally sized animation frames into one sprite atlas.
//!
//! The interesting part is choosing the grid. Given a frame size and count, the crate
//! searches for the `columns x rows` arrangement that holds as many frames as possible
//! without either atlas side exceeding [`MAX_SIDE_LENGTH`], preferring near-square atlases
//! on ties.
//!
//! # Pipeline overview
//!
//! 1. **Discover**: `glob pattern -> FrameSet` (sorted paths plus a validated [`Animation`])
//! 2. **Plan**: `Animation + Strategy -> LayoutPlan` (chosen [`Layout`] and truncation diagnostics)
//! 3. **Compose**: `FrameSet + Layout -> RgbImage` (row-major tiling)
//! 4. **Render**: `Animation + Layout -> String` (CSS/HTML playback snippet)
//!
//! Two search strategies are available. [`Strategy::Exhaustive`] enumerates every candidate
//! columns-outer, rows-inner and is fully deterministic. [`Strategy::Annealing`] runs the
//! generic [`anneal`] engine with an injectable RNG; its result is re-validated before use.
#![forbid(unsafe_code)]

mod atlas;
mod foundation;
mod layout;
mod render;
mod search;

pub use atlas::compose::{compose_atlas, ensure_parent_dir, write_atlas};
pub use atlas::discover::{FrameSet, discover_frames};
pub use foundation::core::{Animation, Layout, MAX_SIDE_LENGTH};
pub use foundation::error::{PackError, PackResult};
pub use layout::anneal::{
    AnnealOpts, anneal_layout, anneal_layout_with, initial_layout, layout_energy, mutate_layout,
};
pub use layout::grid::{LayoutGrid, dense_layouts, layouts, sparse_layouts};
pub use layout::rank::{better_layout, compare_layouts, frame_delta, select_best, squareness};
pub use layout::select::{
    Density, LayoutPlan, Shortfall, Strategy, compute_layout, plan_layout, shortfall,
};
pub use layout::validity::{is_admissible, is_valid};
pub use render::html::{VIEWPORT_ASPECT_SPLIT, render_html};
pub use search::anneal::{AnnealOutcome, AnnealParams, anneal, linear_cooling};
