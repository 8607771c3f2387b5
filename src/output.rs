//! Grayscale PNM output for a finished fractal.  Not wired into the
//! default driver, which stops at the in-memory image; this is here
//! for anyone who wants to look at what they computed.

use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use num::clamp;
use std::fs::File;
use std::io;

use grid::FractalBand;

/// Write the fractal as a binary graymap, scaling counts so that
/// `num_iter` (never diverged) maps to full white.  `num_iter` of
/// zero writes an all-black image rather than dividing by it.
pub fn write_image(filename: &str, fractal: &FractalBand, num_iter: usize) -> io::Result<()> {
    let pixels: Vec<u8> = fractal
        .counts
        .iter()
        .map(|&count| {
            if num_iter == 0 {
                0
            } else {
                clamp((count as usize) * 255 / num_iter, 0, 255) as u8
            }
        })
        .collect();

    let output = File::create(filename)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    encoder.encode(
        &pixels[..],
        fractal.width as u32,
        fractal.rows() as u32,
        ColorType::Gray(8),
    )?;
    Ok(())
}
