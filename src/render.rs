// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Scatter-gather orchestration.  The mesh bands are pushed through a
//! fixed pool of scoped worker threads; each worker pulls the next
//! unclaimed band off a shared queue, runs the escape-time kernel on
//! it, and files the result under the band's slice index.  The gather
//! blocks until every worker has finished, then the bands are
//! concatenated in slice order, so the final image depends only on
//! submission order, never on which worker finished first.
//!
//! Workers share no mutable state beyond the two mutexes guarding the
//! job queue and the result slots; the bands themselves are disjoint,
//! so there is nothing else to lock.  A panic in any worker fails the
//! whole render, with no partial result.

use crossbeam::scope;
use num::Complex;
use std::iter::Enumerate;
use std::sync::{Arc, Mutex};
use std::vec::IntoIter;

use escape::julia_set;
use grid::{FractalBand, MeshBand};

type JobQueue = Arc<Mutex<Enumerate<IntoIter<MeshBand>>>>;
type ResultSlots = Arc<Mutex<Vec<Option<FractalBand>>>>;

/// Stitch per-slice fractal bands back into one band, top to bottom,
/// in the order given.  All bands must share a width; the result's
/// row count is the sum of the inputs' row counts.
pub fn concatenate(bands: Vec<FractalBand>) -> Result<FractalBand, String> {
    let width = match bands.first() {
        Some(band) => band.width,
        None => return Err("cannot concatenate zero bands".to_string()),
    };
    let mut counts = Vec::with_capacity(bands.iter().map(|b| b.counts.len()).sum());
    for band in bands {
        if band.width != width {
            return Err(format!(
                "band width mismatch: expected {}, got {}",
                width, band.width
            ));
        }
        counts.extend(band.counts);
    }
    Ok(FractalBand { width, counts })
}

/// Render every band on a pool of `workers` threads and concatenate
/// the results in submission order.  Blocks until the whole image is
/// done.  Any worker panic aborts the render with an error; there is
/// no retry and no partial image.
pub fn render_parallel(
    bands: Vec<MeshBand>,
    num_iter: usize,
    c: Complex<f64>,
    workers: usize,
) -> Result<FractalBand, String> {
    let n_bands = bands.len();
    let jobs: JobQueue = Arc::new(Mutex::new(bands.into_iter().enumerate()));
    let slots: ResultSlots = Arc::new(Mutex::new((0..n_bands).map(|_| None).collect()));

    scope(|spawner| {
        for _ in 0..workers {
            let jobs = jobs.clone();
            let slots = slots.clone();
            spawner.spawn(move |_| loop {
                let job = { jobs.lock().unwrap().next() };
                match job {
                    Some((index, band)) => {
                        let fractal = julia_set(&band, num_iter, c);
                        slots.lock().unwrap()[index] = Some(fractal);
                    }
                    None => {
                        break;
                    }
                }
            });
        }
    })
    .map_err(|_| "a render worker panicked".to_string())?;

    let slots = Arc::try_unwrap(slots)
        .map_err(|_| "render worker leaked a result handle".to_string())?
        .into_inner()
        .map_err(|_| "result slots poisoned".to_string())?;
    let fractals = slots
        .into_iter()
        .map(|slot| slot.ok_or_else(|| "band was never rendered".to_string()))
        .collect::<Result<Vec<FractalBand>, String>>()?;
    concatenate(fractals)
}
