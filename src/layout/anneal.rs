//! Layout search driven by the generic annealing engine.
//!
//! The state is a [`Layout`], its energy is the number of frames it leaves out, and a
//! move nudges one side by one cell. Moves that break [`is_valid`] are discarded, so
//! the walk stays inside dense, admissible territory once it starts there.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    foundation::core::{Animation, Layout},
    foundation::error::{PackError, PackResult},
    layout::validity::is_valid,
    search::anneal::{AnnealParams, anneal, linear_cooling},
};

/// Temperature schedule and seeding for [`anneal_layout`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnnealOpts {
    pub temp_max: f64,
    pub temp_min: f64,
    /// Amount subtracted from the temperature after each step.
    pub cooling_step: f64,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealOpts {
    fn default() -> Self {
        Self {
            temp_max: 15.0,
            temp_min: 0.001,
            cooling_step: 0.001,
            seed: None,
        }
    }
}

impl AnnealOpts {
    /// Reject schedules that never cool down to `temp_min`.
    pub fn validate(&self) -> PackResult<()> {
        if !self.temp_max.is_finite() || !self.temp_min.is_finite() {
            return Err(PackError::invalid_options("temperatures must be finite"));
        }
        if !self.cooling_step.is_finite() || self.cooling_step <= 0.0 {
            return Err(PackError::invalid_options(format!(
                "cooling step must be a finite positive number, got {}",
                self.cooling_step
            )));
        }
        Ok(())
    }
}

/// Starting grid sized so the atlas holds roughly the total pixel budget as a square.
///
/// Very large frames can truncate either side to zero; that state is degenerate and
/// callers must re-check the final layout.
pub fn initial_layout(anim: &Animation) -> Layout {
    let width = f64::from(anim.frame_width());
    let height = f64::from(anim.frame_height());
    let pixels = width * height * anim.frame_count() as f64;
    let side = pixels.sqrt();
    Layout::new((side / width) as u32, (side / height) as u32)
}

/// Frames a layout leaves unpacked. Negative for sparse layouts.
pub fn layout_energy(layout: &Layout, anim: &Animation) -> f64 {
    anim.frame_count() as f64 - layout.capacity() as f64
}

/// Grow or shrink one side by a single cell, or stay put if the result is not valid.
pub fn mutate_layout<R>(layout: &Layout, anim: &Animation, rng: &mut R) -> Layout
where
    R: Rng + ?Sized,
{
    let grow = rng.gen_bool(0.5);
    let step = |v: u32| {
        if grow {
            v.checked_add(1)
        } else {
            v.checked_sub(1)
        }
    };

    let next = if rng.gen_bool(0.5) {
        step(layout.columns).map(|columns| Layout::new(columns, layout.rows))
    } else {
        step(layout.rows).map(|rows| Layout::new(layout.columns, rows))
    };

    match next {
        Some(next) if is_valid(next, anim) => next,
        _ => *layout,
    }
}

/// Anneal with a caller-provided random source.
pub fn anneal_layout_with<R>(anim: &Animation, opts: &AnnealOpts, rng: &mut R) -> Layout
where
    R: Rng + ?Sized,
{
    let anim = *anim;
    let outcome = anneal(
        AnnealParams {
            initial_state: initial_layout(&anim),
            mutate: |layout: &Layout, rng: &mut R| mutate_layout(layout, &anim, rng),
            energy: |layout: &Layout| layout_energy(layout, &anim),
            temp_max: opts.temp_max,
            temp_min: opts.temp_min,
            cool: linear_cooling(opts.cooling_step),
        },
        rng,
    );
    outcome.state
}

/// Anneal with an RNG seeded from `opts.seed`, or from entropy when unset.
///
/// The result is not guaranteed to be valid: a degenerate starting layout is
/// returned unchanged.
pub fn anneal_layout(anim: &Animation, opts: &AnnealOpts) -> Layout {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    anneal_layout_with(anim, opts, &mut rng)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/anneal.rs"]
mod tests;
