// Copyright 2025 Lars Brubaker
// License: MIT
//
// Integer line rasterization.
//
// Every skyline query, wavefront surge and debug stroke walks the same
// Bresenham cell sequence, so the packer and anything that re-rasterizes a
// placement agree on exactly which pixels an edge touches.

use glam::IVec2;
use std::iter::FusedIterator;

/// Lazy sequence of grid cells on the segment `from -> to`, both endpoints
/// included, in walking order.
///
/// Consecutive cells differ by at most one step on each axis, so a segment
/// visits every row (and every column) between its endpoints. The walk is
/// mirror-symmetric: reflecting both endpoints horizontally reflects every
/// cell.
#[derive(Clone, Debug)]
pub struct LineCells {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LineCells {
    pub fn new(from: IVec2, to: IVec2) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        LineCells {
            x: from.x,
            y: from.y,
            x1: to.x,
            y1: to.y,
            dx,
            dy,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            err: (if dx > dy { dx } else { -dy }) / 2,
            done: false,
        }
    }
}

impl Iterator for LineCells {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.done {
            return None;
        }
        let cell = IVec2::new(self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(cell);
        }
        let e2 = self.err;
        if e2 > -self.dx {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dy {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(cell)
    }
}

impl FusedIterator for LineCells {}

/// Shorthand for [`LineCells::new`].
#[inline]
pub fn line(from: IVec2, to: IVec2) -> LineCells {
    LineCells::new(from, to)
}
