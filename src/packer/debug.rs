// Copyright 2025 Lars Brubaker
// License: MIT
//
// Debug rendering of a pack attempt.
//
// The free gap between the two profiles of every row is painted red, and
// the outline of every placed triangle is drawn in white on top of it.

use super::PackOutcome;
use crate::error::PackResult;
use crate::raster::LineCells;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

const GAP: Rgb<u8> = Rgb([255, 0, 0]);
const EDGE: Rgb<u8> = Rgb([255, 255, 255]);

pub fn debug_image(outcome: &PackOutcome) -> RgbImage {
    let mut img = RgbImage::new(outcome.width, outcome.height);
    let wave = &outcome.wavefront;
    for (y, (&l, &r)) in wave.left().iter().zip(wave.right()).enumerate() {
        for x in (l + 1).max(0)..r.min(wave.width()) {
            img.put_pixel(x as u32, y as u32, GAP);
        }
    }
    for p in &outcome.placements {
        for (from, to) in p.edges() {
            for cell in LineCells::new(from, to) {
                if cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < img.width() && (cell.y as u32) < img.height() {
                    img.put_pixel(cell.x as u32, cell.y as u32, EDGE);
                }
            }
        }
    }
    img
}

/// Render `outcome` and write it to `path` as a TGA file.
pub fn save_debug_image(outcome: &PackOutcome, path: impl AsRef<Path>) -> PackResult<()> {
    let path = path.as_ref();
    debug_image(outcome).save_with_format(path, ImageFormat::Tga)?;
    log::debug!("wrote pack debug image to {}", path.display());
    Ok(())
}
