//! Contains the mesh types and the grid partitioner.  The full
//! computation grid is an n_cells × n_cells sampling of the square
//! [-extent, extent) × [-extent, extent) on the complex plane, cut
//! into horizontal bands so that each band can be computed on its own
//! worker.  Bands cover the grid's rows contiguously and exhaustively;
//! no row appears in two bands and none is skipped.

use itertools::iproduct;
use num::Complex;

/// A horizontal strip of the computation mesh.  Points are stored
/// row-major in a flat buffer; `width` is the number of columns, which
/// is always the full grid width since bands are only ever cut along
/// the row axis.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBand {
    /// Number of columns in each row of the band.
    pub width: usize,
    /// The complex sample points, row-major.
    pub points: Vec<Complex<f64>>,
}

impl MeshBand {
    /// The number of rows in this band.  Zero for bands produced when
    /// there are more slices than rows.
    pub fn rows(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.points.len() / self.width
        }
    }

    /// True when the band holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Escape counts for one band, in the same row-major layout as the
/// mesh band it was computed from.  Every count lies in
/// [0, num_iter].
#[derive(Clone, Debug, PartialEq)]
pub struct FractalBand {
    /// Number of columns in each row of the band.
    pub width: usize,
    /// Per-point escape counts, row-major.
    pub counts: Vec<u32>,
}

impl FractalBand {
    /// The number of rows in this band.
    pub fn rows(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.counts.len() / self.width
        }
    }

    /// True when the band holds no counts at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// The 1D coordinate sequence shared by both axes of the grid:
/// n_cells values evenly spaced over [-extent, extent), with step
/// 2·extent/n_cells.  The right endpoint is excluded.
pub fn coordinates(extent: f64, n_cells: usize) -> Vec<f64> {
    let step = 2.0 * extent / (n_cells as f64);
    (0..n_cells).map(|i| -extent + (i as f64) * step).collect()
}

/// Split the sampling grid into `n_slices` horizontal bands.  Slice i
/// covers rows [n_cells·i / n_slices, n_cells·(i+1) / n_slices); the
/// integer-division boundaries guarantee full coverage with no
/// overlap even when n_cells is not divisible by n_slices, at the
/// cost of row counts differing by one between bands.  The mesh entry
/// at (row, col) is r[col] + i·r[row]: the real axis carries the full
/// coordinate run, the imaginary axis the band's row subset.
///
/// Asking for more slices than rows produces empty bands, which the
/// kernel handles fine.  Non-positive extent is not checked; garbage
/// in, garbage out.
pub fn complex_grids(extent: f64, n_cells: usize, n_slices: usize) -> Vec<MeshBand> {
    let r = coordinates(extent, n_cells);
    let mut meshes = Vec::with_capacity(n_slices);
    for i_slice in 0..n_slices {
        let lower = n_cells * i_slice / n_slices;
        let upper = n_cells * (i_slice + 1) / n_slices;
        let points = iproduct!(lower..upper, 0..n_cells)
            .map(|(row, col)| Complex::new(r[col], r[row]))
            .collect();
        meshes.push(MeshBand {
            width: n_cells,
            points,
        });
    }
    meshes
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    /// The full mesh built in one piece, for comparison against the
    /// banded construction.
    fn full_mesh(extent: f64, n_cells: usize) -> Vec<Complex<f64>> {
        let r = coordinates(extent, n_cells);
        iproduct!(0..n_cells, 0..n_cells)
            .map(|(row, col)| Complex::new(r[col], r[row]))
            .collect()
    }

    #[test]
    fn coordinates_are_evenly_spaced_and_half_open() {
        let r = coordinates(2.0, 8);
        assert_eq!(r.len(), 8);
        assert_eq!(r[0], -2.0);
        // Step is 2*2/8 = 0.5; the right endpoint 2.0 is excluded.
        for w in r.windows(2) {
            assert!((w[1] - w[0] - 0.5).abs() < 1e-12);
        }
        assert_eq!(*r.last().unwrap(), 1.5);
    }

    #[test]
    fn band_rows_sum_to_n_cells() {
        for &(n_cells, n_slices) in &[(10, 3), (2000, 100), (7, 7), (5, 4)] {
            let bands = complex_grids(1.0, n_cells, n_slices);
            assert_eq!(bands.len(), n_slices);
            let total: usize = bands.iter().map(|b| b.rows()).sum();
            assert_eq!(total, n_cells);
            let floor = n_cells / n_slices;
            for band in &bands {
                assert!(band.rows() == floor || band.rows() == floor + 1);
            }
        }
    }

    #[test]
    fn concatenated_bands_reproduce_the_full_mesh() {
        for &n_slices in &[1, 2, 3, 5, 8] {
            let bands = complex_grids(2.0, 8, n_slices);
            let mut rebuilt = Vec::new();
            for band in &bands {
                assert_eq!(band.width, 8);
                rebuilt.extend_from_slice(&band.points);
            }
            assert_eq!(rebuilt, full_mesh(2.0, 8));
        }
    }

    #[test]
    fn rows_carry_one_imaginary_value_each() {
        let bands = complex_grids(2.0, 4, 2);
        let band = &bands[1];
        // Second band of a 4-row grid starts at row 2, so its first
        // row's imaginary part is the third coordinate, 0.0.
        for col in 0..4 {
            assert_eq!(band.points[col].im, 0.0);
            assert_eq!(band.points[4 + col].im, 1.0);
        }
        // Real parts run the full coordinate sequence in every row.
        let r = coordinates(2.0, 4);
        for (i, p) in band.points.iter().enumerate() {
            assert_eq!(p.re, r[i % 4]);
        }
    }

    #[test]
    fn more_slices_than_rows_yields_empty_bands() {
        let bands = complex_grids(1.0, 3, 5);
        assert_eq!(bands.len(), 5);
        let total: usize = bands.iter().map(|b| b.rows()).sum();
        assert_eq!(total, 3);
        assert!(bands.iter().any(|b| b.is_empty()));
    }
}
