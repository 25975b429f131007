// Copyright 2025 Lars Brubaker
// License: MIT
//
// Turning placements into texture coordinates and pixel coverage.

use super::{PackOutcome, Placement};
use crate::error::{PackError, PackResult};
use crate::raster::LineCells;
use glam::{vec2, IVec2, Vec2};

/// Horizontal extent of a placed triangle's outline on one pixel row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowSpan {
    pub y: i32,
    pub min_x: i32,
    pub max_x: i32,
}

impl Placement {
    /// Rasterize the outline and return the covered span of every row from
    /// the top of the triangle to the bottom. Interior pixels lie between
    /// `min_x` and `max_x` of their row.
    pub fn row_spans(&self) -> Vec<RowSpan> {
        let (lo, hi) = self.bounds();
        let mut spans: Vec<RowSpan> = (lo.y..=hi.y)
            .map(|y| RowSpan { y, min_x: i32::MAX, max_x: i32::MIN })
            .collect();
        for (from, to) in self.edges() {
            for cell in LineCells::new(from, to) {
                let span = &mut spans[(cell.y - lo.y) as usize];
                span.min_x = span.min_x.min(cell.x);
                span.max_x = span.max_x.max(cell.x);
            }
        }
        spans
    }

    /// Pixel cells covered by the triangle, outline and interior.
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.row_spans()
            .into_iter()
            .flat_map(|s| (s.min_x..=s.max_x).map(move |x| IVec2::new(x, s.y)))
    }
}

impl PackOutcome {
    /// Pixel to UV factor. Pixel `x` maps to `x / width`, so every legal
    /// pixel lands in `[0, 1)`.
    #[inline]
    fn uv_scale(&self) -> Vec2 {
        vec2(1.0 / self.width as f32, 1.0 / self.height as f32)
    }

    /// Write the UV of every placed vertex into `uvs`, indexed like the input
    /// vertices. Entries of triangles that were not placed are left alone.
    pub fn write_uvs(&self, uvs: &mut [Vec2]) -> PackResult<()> {
        let needed = self.total * 3;
        if uvs.len() < needed {
            return Err(PackError::InvalidInput(format!(
                "UV buffer holds {} entries, {} triangles need {}",
                uvs.len(),
                self.total,
                needed
            )));
        }
        self.fill_uvs(uvs);
        Ok(())
    }

    /// UVs for all `3 * total` vertices. Vertices of unplaced triangles are
    /// left at the origin.
    pub fn uvs(&self) -> Vec<Vec2> {
        let mut uvs = vec![Vec2::ZERO; self.total * 3];
        self.fill_uvs(&mut uvs);
        uvs
    }

    fn fill_uvs(&self, uvs: &mut [Vec2]) {
        let scale = self.uv_scale();
        for p in &self.placements {
            for (&vertex, corner) in p.vertices.iter().zip(p.corners) {
                if let Some(uv) = uvs.get_mut(vertex) {
                    *uv = corner.as_vec2() * scale;
                }
            }
        }
    }

    /// Accept the outcome only when every triangle was placed.
    pub fn into_result(self, scale: f32) -> PackResult<PackOutcome> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(PackError::InsufficientArea {
                placed: self.placed_count(),
                total: self.total,
                scale,
            })
        }
    }
}
