//! Anti-overlap placement of symbols around a ring.
//!
//! This is a heuristic, not an optimiser. Two relaxation passes push symbols
//! apart in opposite directions and the results are averaged. The guarantee is
//! minimum spacing with circular order kept; total displacement is small but
//! not minimal.

use crate::angles::normalize;
use crate::catalog::BodyId;
use serde::{Deserialize, Serialize};

/// Added to the minimum separation so spaced neighbours clear it strictly
pub const STEP_EPSILON: f64 = 0.1;

/// Original and de-collided angle of one body on one ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolPlacement {
    pub body: BodyId,
    pub original: f64,
    pub adjusted: f64,
}

fn max_passes(n: usize) -> usize {
    (4 * n).max(64)
}

/// Spread sorted angles so every circular neighbour gap is at least `min_sep`.
///
/// `positions` must be sorted ascending within [0, 360). Zero or one position
/// is returned unchanged. When `n` symbols cannot fit at `min_sep + 0.1`, the
/// step shrinks to an even share of the circle.
pub fn adjust_positions(positions: &[f64], min_sep: f64) -> Vec<f64> {
    let n = positions.len();
    if n <= 1 {
        return positions.to_vec();
    }

    let mut step = min_sep + STEP_EPSILON;
    if step * n as f64 >= 360.0 {
        step = 360.0 / n as f64;
        log::debug!("{} symbols cannot fit at {:.1}°, spacing evenly at {:.3}°", n, min_sep, step);
    }

    let forward = relax_forward(positions, step);
    let backward = relax_backward(positions, step);

    // Both passes stay unwrapped with forward >= input >= backward at every
    // index, so the plain mean keeps each gap at least `step`.
    forward
        .iter()
        .zip(&backward)
        .map(|(&f, &b)| normalize((f + b) / 2.0))
        .collect()
}

/// Push each position up to `previous + step`, until nothing moves
fn relax_forward(positions: &[f64], step: f64) -> Vec<f64> {
    let n = positions.len();
    let mut out = positions.to_vec();

    for pass in 0..max_passes(n) {
        let mut changed = false;
        for i in 0..n {
            let previous = if i == 0 { out[n - 1] - 360.0 } else { out[i - 1] };
            let floor = previous + step;
            if out[i] < floor - 1e-9 {
                out[i] = floor;
                changed = true;
            }
        }
        if !changed {
            log::debug!("forward relaxation settled after {} passes", pass + 1);
            return out;
        }
    }

    log::warn!("forward relaxation hit the pass cap for {} symbols", n);
    out
}

/// Pull each position down to `next - step`, walking from the last, until nothing moves
fn relax_backward(positions: &[f64], step: f64) -> Vec<f64> {
    let n = positions.len();
    let mut out = positions.to_vec();

    for pass in 0..max_passes(n) {
        let mut changed = false;
        for i in (0..n).rev() {
            let next = if i == n - 1 { out[0] + 360.0 } else { out[i + 1] };
            let ceiling = next - step;
            if out[i] > ceiling + 1e-9 {
                out[i] = ceiling;
                changed = true;
            }
        }
        if !changed {
            log::debug!("backward relaxation settled after {} passes", pass + 1);
            return out;
        }
    }

    log::warn!("backward relaxation hit the pass cap for {} symbols", n);
    out
}

/// Sort bodies by angle and place them with [`adjust_positions`]
pub fn place_symbols(bodies: &[(BodyId, f64)], min_sep: f64) -> Vec<SymbolPlacement> {
    let mut sorted: Vec<(BodyId, f64)> = bodies
        .iter()
        .map(|&(body, angle)| (body, normalize(angle)))
        .collect();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

    let angles: Vec<f64> = sorted.iter().map(|&(_, angle)| angle).collect();
    let adjusted = adjust_positions(&angles, min_sep);

    sorted
        .iter()
        .zip(adjusted)
        .map(|(&(body, original), adjusted)| SymbolPlacement {
            body,
            original,
            adjusted,
        })
        .collect()
}
