// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.  Given one mesh band, iterate z ← z² + c
//! at every point and count the iterations for which the running
//! value stayed finite.
//!
//! Overflow is the signal here, not a fault: squaring a large
//! magnitude overflows the f64 components to infinity, and from then
//! on the point's state never returns to finite (∞² + c is ∞ or NaN,
//! and NaN² + c is NaN), so a diverged point is permanently excluded
//! from further counting.  IEEE-754 arithmetic overflows silently, so
//! no error-mode fiddling is needed to tolerate it.

use num::Complex;

use grid::{FractalBand, MeshBand};

/// Compute the escape counts for one band.  The result has the same
/// shape as the input; each count is the number of iterations, out of
/// `num_iter`, at which the point's orbit was still finite.  A point
/// that never diverges scores `num_iter`; a point whose input is
/// already non-finite scores 0.
pub fn julia_set(grid: &MeshBand, num_iter: usize, c: Complex<f64>) -> FractalBand {
    let mut state: Vec<Complex<f64>> = grid.points.clone();
    let mut counts = vec![0 as u32; state.len()];

    for _ in 0..num_iter {
        for (z, count) in state.iter_mut().zip(counts.iter_mut()) {
            *z = *z * *z + c;
            if z.re.is_finite() && z.im.is_finite() {
                *count += 1;
            }
        }
    }

    FractalBand {
        width: grid.width,
        counts,
    }
}
