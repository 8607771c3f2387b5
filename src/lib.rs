#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set generator
//!
//! A Julia set is the set of points on the complex plane whose orbit
//! under the map z ← z² + c, for some fixed constant c, never escapes
//! to infinity.  The classic way to draw one is to iterate the map a
//! bounded number of times at every point of a grid and record, per
//! point, how many iterations the running value stayed finite.  Points
//! inside the set saturate at the iteration cap; points outside score
//! the iteration at which they blew up, which is what gives the
//! rendered image its banded glow.
//!
//! The computation is embarrassingly parallel: the grid is cut into
//! horizontal bands, each band is handed to a worker, and the finished
//! bands are stitched back together in their original order.  Workers
//! share nothing; the only coordination is the scatter at the start
//! and the ordered gather at the end.

extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod escape;
pub mod grid;
pub mod output;
pub mod render;

pub use escape::julia_set;
pub use grid::{complex_grids, FractalBand, MeshBand};
pub use render::{concatenate, render_parallel};
