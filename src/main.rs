// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Demonstration driver: computes one 2000×2000 Julia set with fixed
//! parameters and a pool of 100 workers, then exits.  No flags, no
//! output file; set RUST_LOG=info to watch it go.

extern crate env_logger;
extern crate juliaset;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use num::Complex;

use juliaset::{complex_grids, render_parallel};

fn main() {
    env_logger::init();

    let c = Complex::new(-0.83, -0.22);
    let extent = 2.0;
    let cells = 2000;
    let num_iter = 80;
    let n_workers = 100;
    let n_slices = 100;

    info!(
        "rendering {}x{} cells on {} workers ({} cores available)",
        cells,
        cells,
        n_workers,
        num_cpus::get()
    );

    let grids = complex_grids(extent, cells, n_slices);
    match render_parallel(grids, num_iter, c, n_workers) {
        Ok(fractal) => {
            info!(
                "done: {} rows x {} columns, counts up to {}",
                fractal.rows(),
                fractal.width,
                num_iter
            );
            // juliaset::output::write_image("julia.pnm", &fractal, num_iter).unwrap();
        }
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    }
}
