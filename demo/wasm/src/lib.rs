// Copyright 2025 Lars Brubaker
// WASM bindings for tri-atlas

use tri_atlas::{AtlasPacker, FitResult, FlipTieBreak};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A stateful packer that accumulates meshes, then packs them into one atlas.
#[wasm_bindgen]
pub struct AtlasPackerJs {
    inner: AtlasPacker,
    last: Option<FitResult>,
}

#[wasm_bindgen]
impl AtlasPackerJs {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> AtlasPackerJs {
        AtlasPackerJs {
            inner: AtlasPacker::new(width, height),
            last: None,
        }
    }

    pub fn set_spacing(&mut self, spacing: u32) {
        self.inner.set_spacing(spacing);
    }

    /// Tie-break between equally good orientations.
    /// 0 = BalanceApex, 1 = PreferNatural, 2 = PreferMirrored
    pub fn set_tie_break(&mut self, policy: u32) {
        self.inner.config_mut().flip_tie_break = match policy {
            1 => FlipTieBreak::PreferNatural,
            2 => FlipTieBreak::PreferMirrored,
            _ => FlipTieBreak::BalanceApex,
        };
    }

    /// Add triangles from a flat [x0,y0,z0, x1,y1,z1, ...] Float32Array,
    /// 9 floats per triangle. Returns false if the length is not a whole
    /// number of triangles.
    pub fn add_mesh(&mut self, positions: &[f32]) -> bool {
        self.inner.add_flat(positions).is_ok()
    }

    pub fn triangle_count(&self) -> u32 {
        self.inner.triangle_count() as u32
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.last = None;
    }

    /// Search for the largest scale that fits and return true on success.
    pub fn pack(&mut self) -> bool {
        self.last = self.inner.pack_to_fit().ok();
        self.last.is_some()
    }

    /// World-to-pixel scale of the last successful pack, 0 otherwise.
    pub fn scale(&self) -> f32 {
        self.last.as_ref().map_or(0.0, |f| f.scale)
    }

    /// Flat [u0,v0, u1,v1, ...] per input vertex from the last pack.
    pub fn get_uvs(&self) -> Vec<f32> {
        self.last.as_ref().map_or_else(Vec::new, flatten)
    }
}

fn flatten(fit: &FitResult) -> Vec<f32> {
    fit.uvs.iter().flat_map(|uv| [uv.x, uv.y]).collect()
}

/// Convenience: pack a single flat position array into a `width` x `height`
/// atlas. Returns flat [u0,v0, u1,v1, ...], empty on failure.
#[wasm_bindgen]
pub fn pack_to_fit(positions: &[f32], width: u32, height: u32, spacing: u32) -> Vec<f32> {
    let mut p = AtlasPackerJs::new(width, height);
    p.set_spacing(spacing);
    if !p.add_mesh(positions) || !p.pack() {
        return Vec::new();
    }
    p.get_uvs()
}
