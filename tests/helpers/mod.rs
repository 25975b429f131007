// Copyright 2025 Lars Brubaker
// License: MIT
//
// Shared test utilities for tri-atlas tests.

#![allow(dead_code)]

use glam::{ivec2, vec3, IVec2, Vec2, Vec3};
use tri_atlas::{LineCells, PackOutcome};

/// `cols` × `rows` quads of side `size` in the XY plane, two triangles each.
pub fn grid_quads(cols: usize, rows: usize, size: f32) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(cols * rows * 6);
    for j in 0..rows {
        for i in 0..cols {
            let x = i as f32 * size;
            let y = j as f32 * size;
            let p00 = vec3(x, y, 0.0);
            let p10 = vec3(x + size, y, 0.0);
            let p11 = vec3(x + size, y + size, 0.0);
            let p01 = vec3(x, y + size, 0.0);
            out.extend([p00, p10, p11, p00, p11, p01]);
        }
    }
    out
}

/// `count` equilateral triangles of side `side`, all in the XZ plane.
pub fn equilateral(count: usize, side: f32) -> Vec<Vec3> {
    let h = side * 3f32.sqrt() * 0.5;
    let mut out = Vec::with_capacity(count * 3);
    for i in 0..count {
        let x = i as f32 * side;
        out.extend([vec3(x, 0.0, 0.0), vec3(x + side, 0.0, 0.0), vec3(x + side * 0.5, 0.0, h)]);
    }
    out
}

/// Deterministic xorshift64 stream in `[0, 1)`.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng(seed.max(1))
    }

    pub fn next_f32(&mut self) -> f32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// `count` random triangles with vertices inside a cube of side `extent`.
pub fn random_triangles(seed: u64, count: usize, extent: f32) -> Vec<Vec3> {
    let mut rng = Rng::new(seed);
    (0..count * 3)
        .map(|_| vec3(rng.next_f32(), rng.next_f32(), rng.next_f32()) * extent)
        .collect()
}

/// Pixel position a UV was written from.
pub fn uv_to_pixel(uv: Vec2, width: u32, height: u32) -> IVec2 {
    ivec2((uv.x * width as f32).round() as i32, (uv.y * height as f32).round() as i32)
}

/// Pixels covered by a triangle given its corners in A, B, C order, walking
/// the edges the same way the packer does and filling between them.
pub fn rasterize(corners: [IVec2; 3]) -> Vec<IVec2> {
    let [a, b, c] = corners;
    let lo = a.min(b).min(c);
    let hi = a.max(b).max(c);
    let mut spans = vec![(i32::MAX, i32::MIN); (hi.y - lo.y + 1) as usize];
    for (from, to) in [(b, c), (c, a), (b, a)] {
        for cell in LineCells::new(from, to) {
            let s = &mut spans[(cell.y - lo.y) as usize];
            s.0 = s.0.min(cell.x);
            s.1 = s.1.max(cell.x);
        }
    }
    let mut cells = Vec::new();
    for (i, &(x0, x1)) in spans.iter().enumerate() {
        for x in x0..=x1 {
            cells.push(ivec2(x, lo.y + i as i32));
        }
    }
    cells
}

/// Check a complete layout: UVs agree with the placements, every covered
/// pixel keeps `spacing` from the border, and pixels of different
/// triangles are more than `spacing` apart (Chebyshev distance).
pub fn assert_valid_layout(outcome: &PackOutcome, uvs: &[Vec2]) {
    let (w, h) = (outcome.width as i32, outcome.height as i32);
    let s = outcome.spacing as i32;
    assert!(outcome.is_complete(), "{} of {} placed", outcome.placed_count(), outcome.total);
    assert_eq!(uvs.len(), outcome.total * 3);
    assert!(outcome.wavefront.is_consistent());

    let mut owner: Vec<Option<usize>> = vec![None; (w * h) as usize];
    for p in &outcome.placements {
        let from_uvs = p.vertices.map(|v| uv_to_pixel(uvs[v], outcome.width, outcome.height));
        assert_eq!(from_uvs, p.corners, "UVs of triangle {} disagree", p.triangle());
        for uv in p.vertices.map(|v| uvs[v]) {
            assert!((0.0..1.0).contains(&uv.x) && (0.0..1.0).contains(&uv.y), "uv {:?}", uv);
        }
        for cell in rasterize(p.corners) {
            assert!(
                cell.x >= s && cell.x <= w - 1 - s && cell.y >= s && cell.y <= h - 1 - s,
                "triangle {} reaches {:?}",
                p.triangle(),
                cell
            );
            let slot = &mut owner[(cell.y * w + cell.x) as usize];
            assert!(slot.is_none(), "triangles {:?} and {} share {:?}", slot, p.triangle(), cell);
            *slot = Some(p.triangle());
        }
    }

    for y in 0..h {
        for x in 0..w {
            let Some(t) = owner[(y * w + x) as usize] else { continue };
            for ny in (y - s).max(0)..=(y + s).min(h - 1) {
                for nx in (x - s).max(0)..=(x + s).min(w - 1) {
                    if let Some(u) = owner[(ny * w + nx) as usize] {
                        assert_eq!(u, t, "triangles {} and {} closer than {} at ({}, {})", t, u, s + 1, x, y);
                    }
                }
            }
        }
    }
}
