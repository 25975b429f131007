// Copyright 2025 Lars Brubaker
// License: MIT
//
// Triangle measurement.
//
// Every triangle is reduced to a "tent": its longest edge becomes a
// horizontal base, the opposite vertex becomes the apex at some offset along
// the base and some height above it.
//
//        C            -
//      * |  *         | height
//    *   |     *      |
//  B-----+--------A   -
//  '--x--'
//  '-----width-----'
//
// A is where the longest edge starts (vertex k), B where it ends (vertex
// k + 1), C is the apex (vertex k + 2). All three measurements are rounded up
// to whole pixels.

use glam::Vec3;
use std::cmp::Ordering;

/// Pixel-space tent shape of one input triangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Index of the triangle in the input (vertices `3t..3t + 3`).
    pub triangle: usize,
    /// Global vertex index of the apex, the vertex opposite the longest edge.
    pub apex_index: usize,
    pub width: i32,
    /// Horizontal distance from the base start B to the apex.
    pub apex_offset: i32,
    pub height: i32,
    /// Set when the tent is mirrored so the apex offset is measured from the
    /// other end of the base.
    pub horizontal_flip: bool,
}

impl Footprint {
    /// The same triangle with its base ends exchanged.
    #[inline]
    pub fn mirrored(self) -> Self {
        Footprint {
            apex_offset: self.width - self.apex_offset,
            horizontal_flip: !self.horizontal_flip,
            ..self
        }
    }

    /// Global vertex indices that take the A (base end), B (base start) and
    /// C (apex) positions, in that order.
    pub fn vertex_roles(&self) -> [usize; 3] {
        let first = self.triangle * 3;
        let local = self.apex_index - first;
        let mut a = first + (local + 1) % 3;
        let mut b = first + (local + 2) % 3;
        if self.horizontal_flip {
            std::mem::swap(&mut a, &mut b);
        }
        [a, b, self.apex_index]
    }

    /// Packing order: taller first, then wider.
    #[inline]
    pub fn packing_order(&self, other: &Footprint) -> Ordering {
        other
            .height
            .cmp(&self.height)
            .then(other.width.cmp(&self.width))
    }
}

/// Measure a single triangle at the given scale.
pub fn measure_triangle(triangle: usize, points: [Vec3; 3], scale: f32) -> Footprint {
    let p = points.map(|v| v * scale);
    let edges = [p[1] - p[0], p[2] - p[1], p[0] - p[2]];
    let lengths = edges.map(|e| e.length_squared());

    let mut longest = 0;
    if lengths[1] > lengths[longest] {
        longest = 1;
    }
    if lengths[2] > lengths[longest] {
        longest = 2;
    }
    let next = (longest + 1) % 3;
    let apex_index = triangle * 3 + (longest + 2) % 3;

    let width = lengths[longest].sqrt();
    if width <= 0.0 {
        // All three vertices coincide: a single pixel.
        return Footprint {
            triangle,
            apex_index,
            width: 0,
            apex_offset: 0,
            height: 0,
            horizontal_flip: false,
        };
    }

    let base = edges[longest];
    let offset = -base.dot(edges[next]) / width;
    let foot = base / width * (width - offset);
    let height = (base + edges[next] - foot).length();

    let width = width.ceil() as i32;
    // The apex of the longest edge always projects inside the base; rounding
    // can push it a hair outside.
    let apex_offset = (offset.ceil() as i32).clamp(0, width);
    Footprint {
        triangle,
        apex_index,
        width,
        apex_offset,
        height: height.ceil() as i32,
        horizontal_flip: false,
    }
}

/// Measure every triangle of `positions` (consecutive vertex triples) and
/// return the footprints in packing order.
///
/// The sort is stable, so triangles with equal footprints keep their input
/// order and repeated calls produce identical sequences.
pub fn measure(positions: &[Vec3], scale: f32) -> Vec<Footprint> {
    let mut footprints: Vec<Footprint> = positions
        .chunks_exact(3)
        .enumerate()
        .map(|(t, tri)| measure_triangle(t, [tri[0], tri[1], tri[2]], scale))
        .collect();
    footprints.sort_by(Footprint::packing_order);
    footprints
}
