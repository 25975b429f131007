// Copyright 2025 Lars Brubaker
// License: MIT
//
// Stateful front end: collect triangles from one or more meshes, then pack
// them all into one atlas.

use crate::config::PackConfig;
use crate::error::{PackError, PackResult};
use crate::packer::PackOutcome;
use crate::search::{self, FitResult};
use glam::{vec3, Vec3};

/// Convert a flat `x, y, z` float buffer into positions. The length must be
/// a whole number of triangles (9 floats each).
pub fn positions_from_flat(flat: &[f32]) -> PackResult<Vec<Vec3>> {
    if flat.len() % 9 != 0 {
        return Err(PackError::InvalidInput(format!(
            "{} floats is not a whole number of triangles",
            flat.len()
        )));
    }
    Ok(flat.chunks_exact(3).map(|c| vec3(c[0], c[1], c[2])).collect())
}

pub struct AtlasPacker {
    width: u32,
    height: u32,
    config: PackConfig,
    positions: Vec<Vec3>,
}

impl AtlasPacker {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, PackConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: PackConfig) -> Self {
        AtlasPacker { width, height, config, positions: Vec::new() }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn config(&self) -> &PackConfig { &self.config }
    pub fn config_mut(&mut self) -> &mut PackConfig { &mut self.config }
    pub fn set_spacing(&mut self, spacing: u32) { self.config.spacing = spacing; }

    /// Append whole triangles. UVs come back in the same vertex order,
    /// after the triangles of earlier calls.
    pub fn add_triangles(&mut self, positions: &[Vec3]) -> PackResult<()> {
        if positions.len() % 3 != 0 {
            return Err(PackError::InvalidInput(format!(
                "{} vertices is not a whole number of triangles",
                positions.len()
            )));
        }
        self.positions.extend_from_slice(positions);
        Ok(())
    }

    /// Append triangles from a flat float buffer (9 floats per triangle).
    pub fn add_flat(&mut self, flat: &[f32]) -> PackResult<()> {
        let positions = positions_from_flat(flat)?;
        self.positions.extend(positions);
        Ok(())
    }

    pub fn triangle_count(&self) -> usize { self.positions.len() / 3 }
    pub fn positions(&self) -> &[Vec3] { &self.positions }
    pub fn clear(&mut self) { self.positions.clear(); }

    /// One attempt at a fixed scale.
    pub fn pack_at_scale(&self, scale: f32) -> PackResult<PackOutcome> {
        search::pack_at_scale(&self.positions, self.width, self.height, scale, &self.config)
    }

    /// Search for the largest scale that places every triangle.
    pub fn pack_to_fit(&self) -> PackResult<FitResult> {
        search::pack_to_fit(&self.positions, self.width, self.height, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: [f32; 18] = [
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
    ];

    #[test]
    fn flat_input_must_be_whole_triangles() {
        assert_eq!(positions_from_flat(&QUAD).unwrap().len(), 6);
        assert!(matches!(positions_from_flat(&QUAD[..10]), Err(PackError::InvalidInput(_))));
        assert!(positions_from_flat(&[]).unwrap().is_empty());
    }

    #[test]
    fn meshes_accumulate_in_order() {
        let mut atlas = AtlasPacker::new(64, 64);
        atlas.add_flat(&QUAD).unwrap();
        atlas.add_triangles(&[Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
        assert!(atlas.add_triangles(&[Vec3::ZERO]).is_err());
        assert_eq!(atlas.triangle_count(), 3);
        assert_eq!(atlas.positions()[6], Vec3::ZERO);

        let fit = atlas.pack_to_fit().unwrap();
        assert_eq!(fit.uvs.len(), 9);
        assert!(fit.outcome.is_complete());

        atlas.clear();
        assert!(matches!(atlas.pack_to_fit(), Err(PackError::InvalidInput(_))));
    }

    #[test]
    fn spacing_is_forwarded() {
        let mut atlas = AtlasPacker::new(32, 32);
        atlas.set_spacing(0);
        atlas.add_flat(&QUAD).unwrap();
        let out = atlas.pack_at_scale(10.0).unwrap();
        assert_eq!(out.spacing, 0);
        assert_eq!(out.placements[0].corners[1], glam::ivec2(0, 0));
        assert_eq!(atlas.config().spacing, 0);
        atlas.config_mut().max_passes = 3;
        assert_eq!(atlas.config().max_passes, 3);
    }
}
