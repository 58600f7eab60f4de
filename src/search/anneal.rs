//! Domain-agnostic simulated annealing.
//!
//! The engine knows nothing about layouts: a caller supplies the starting state, a
//! mutation, an energy function, and a cooling schedule through [`AnnealParams`], plus
//! the random source every draw comes from.

use rand::Rng;

/// Inputs for one annealing run.
///
/// `mutate` receives the current state and the run's RNG and returns a candidate
/// successor. `energy` is minimised. `cool` maps the current temperature to the next
/// one and must eventually bring it to `temp_min` or below, otherwise the run does not end.
pub struct AnnealParams<S, M, E, C> {
    pub initial_state: S,
    pub mutate: M,
    pub energy: E,
    pub temp_max: f64,
    pub temp_min: f64,
    pub cool: C,
}

/// Lowest-energy state seen during the run, together with its energy.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnealOutcome<S> {
    pub state: S,
    pub energy: f64,
    pub iterations: u64,
}

/// Run the annealing loop and return the best state observed.
///
/// A worse successor is accepted when a uniform `[0, 1)` draw falls below
/// `exp((current - next) / temp)`. The draw is skipped for strict improvements.
pub fn anneal<S, R, M, E, C>(params: AnnealParams<S, M, E, C>, rng: &mut R) -> AnnealOutcome<S>
where
    S: Clone,
    R: Rng + ?Sized,
    M: FnMut(&S, &mut R) -> S,
    E: FnMut(&S) -> f64,
    C: FnMut(f64) -> f64,
{
    let AnnealParams {
        initial_state,
        mut mutate,
        mut energy,
        temp_max,
        temp_min,
        mut cool,
    } = params;

    let mut current = initial_state;
    let mut current_energy = energy(&current);

    let mut best = current.clone();
    let mut best_energy = current_energy;

    let mut temp = temp_max;
    let mut iterations = 0u64;

    while temp > temp_min {
        let next = mutate(&current, &mut *rng);
        let next_energy = energy(&next);

        let accept = next_energy < current_energy
            || rng.r#gen::<f64>() < ((current_energy - next_energy) / temp).exp();

        if accept {
            if next_energy < best_energy {
                best = next.clone();
                best_energy = next_energy;
            }
            current = next;
            current_energy = next_energy;
        }

        temp = cool(temp);
        iterations += 1;
    }

    AnnealOutcome {
        state: best,
        energy: best_energy,
        iterations,
    }
}

/// Cooling schedule that lowers the temperature by a fixed step each iteration.
pub fn linear_cooling(step: f64) -> impl FnMut(f64) -> f64 {
    move |temp| temp - step
}

#[cfg(test)]
#[path = "../../tests/unit/search/anneal.rs"]
mod tests;
