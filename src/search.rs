// Copyright 2025 Lars Brubaker
// License: MIT
//
// Scale search.
//
// The packer either places everything at a given world-to-pixel scale or it
// does not. This module looks for the largest scale that still places
// everything: grow by doubling while trials succeed, then close in on the
// boundary with a shrinking multiplier.

use crate::config::PackConfig;
use crate::error::{PackError, PackResult};
use crate::measure::measure;
use crate::packer::{pack, PackOutcome, Placement};
use glam::{Vec2, Vec3};
use log::{debug, info, warn};

/// Largest accepted atlas width or height. Pixel coordinates up to `2^24`
/// are exact in `f32`, so every UV maps back to its own pixel.
pub const MAX_ATLAS_DIMENSION: u32 = 1 << 24;

/// Outcome of a successful search.
#[derive(Clone, Debug)]
pub struct FitResult {
    /// World units to pixels.
    pub scale: f32,
    /// One UV per input vertex, in `[0, 1)`.
    pub uvs: Vec<Vec2>,
    /// The authoritative pack at `scale`.
    pub outcome: PackOutcome,
    /// Pack attempts spent, the final one included.
    pub attempts: usize,
}

impl FitResult {
    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.outcome.placements
    }
}

/// Reject input that no scale could ever pack.
pub(crate) fn validate(positions: &[Vec3], width: u32, height: u32, config: &PackConfig) -> PackResult<()> {
    if positions.is_empty() {
        return Err(PackError::InvalidInput("no triangles".into()));
    }
    if positions.len() % 3 != 0 {
        return Err(PackError::InvalidInput(format!(
            "{} vertices is not a whole number of triangles",
            positions.len()
        )));
    }
    if let Some(i) = positions.iter().position(|p| !p.is_finite()) {
        return Err(PackError::InvalidInput(format!("vertex {} is not finite: {}", i, positions[i])));
    }
    if width == 0 || height == 0 {
        return Err(PackError::InvalidInput(format!("empty atlas {}x{}", width, height)));
    }
    if width > MAX_ATLAS_DIMENSION || height > MAX_ATLAS_DIMENSION {
        return Err(PackError::InvalidInput(format!(
            "atlas {}x{} exceeds the {} pixel limit",
            width, height, MAX_ATLAS_DIMENSION
        )));
    }
    let border = u64::from(config.spacing) * 2;
    if u64::from(width) <= border || u64::from(height) <= border {
        return Err(PackError::InvalidInput(format!(
            "atlas {}x{} leaves no room inside spacing {}",
            width, height, config.spacing
        )));
    }
    if config.max_passes == 0 {
        return Err(PackError::InvalidInput("max_passes must be at least 1".into()));
    }
    Ok(())
}

fn validate_scale(scale: f32) -> PackResult<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(PackError::InvalidInput(format!("scale {} must be finite and positive", scale)));
    }
    Ok(())
}

/// Measure and pack once at `scale`.
///
/// Returns the outcome even when it is incomplete; use
/// [`PackOutcome::into_result`] to treat that as an error.
pub fn pack_at_scale(
    positions: &[Vec3],
    width: u32,
    height: u32,
    scale: f32,
    config: &PackConfig,
) -> PackResult<PackOutcome> {
    validate(positions, width, height, config)?;
    validate_scale(scale)?;
    Ok(pack(&measure(positions, scale), width, height, config))
}

/// Sequential pack attempts against one mesh and atlas.
struct Trials<'a> {
    positions: &'a [Vec3],
    width: u32,
    height: u32,
    config: &'a PackConfig,
    attempts: usize,
}

impl Trials<'_> {
    fn attempt(&mut self, scale: f32) -> PackOutcome {
        self.attempts += 1;
        pack(&measure(self.positions, scale), self.width, self.height, self.config)
    }

    fn fits(&mut self, scale: f32) -> bool {
        let outcome = self.attempt(scale);
        debug!(
            "attempt {} at scale {}: placed {} of {}",
            self.attempts,
            scale,
            outcome.placed_count(),
            outcome.total
        );
        outcome.is_complete()
    }
}

/// Find the largest scale (within the search's resolution) at which every
/// triangle of `positions` fits a `width` × `height` atlas, and pack at it.
pub fn pack_to_fit(positions: &[Vec3], width: u32, height: u32, config: &PackConfig) -> PackResult<FitResult> {
    validate(positions, width, height, config)?;
    let triangles = positions.len() / 3;
    let mut trials = Trials { positions, width, height, config, attempts: 0 };

    let mut scale = 1.0f32;
    let mut last_fit: Option<f32> = None;
    let mut saturated = false;
    let mut multiplier;

    if trials.fits(scale) {
        last_fit = Some(scale);
        let mut expansions = 0;
        loop {
            if expansions == config.max_expansions {
                saturated = true;
                break;
            }
            expansions += 1;
            scale *= 2.0;
            if !trials.fits(scale) {
                break;
            }
            last_fit = Some(scale);
        }
        multiplier = 0.75f32;
    } else {
        multiplier = 0.5f32;
    }

    if saturated {
        debug!("scale still fits after {} doublings, skipping refinement", config.max_expansions);
    } else {
        for _ in 0..config.refine_rounds {
            for _ in 0..2 {
                scale *= multiplier;
                if trials.fits(scale) {
                    last_fit = Some(last_fit.map_or(scale, |best| best.max(scale)));
                    scale /= multiplier;
                    multiplier = (multiplier + 1.0) * 0.5;
                    break;
                }
            }
        }
    }

    let Some(scale) = last_fit else {
        warn!(
            "no scale fits {} triangles into {}x{} after {} attempts",
            triangles, width, height, trials.attempts
        );
        return Err(PackError::NoFeasibleScale {
            triangles,
            width,
            height,
            attempts: trials.attempts,
        });
    };

    let outcome = trials.attempt(scale);
    debug_assert!(outcome.is_complete(), "fitting scale {} did not repack", scale);
    let outcome = outcome.into_result(scale)?;
    info!(
        "packed {} triangles into {}x{} at scale {} after {} attempts",
        triangles, width, height, scale, trials.attempts
    );
    Ok(FitResult {
        scale,
        uvs: outcome.uvs(),
        outcome,
        attempts: trials.attempts,
    })
}
