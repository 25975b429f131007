// Copyright 2025 Lars Brubaker
// License: MIT
//
// Twin skyline profiles.
//
// Each scanline of the atlas is split into three parts: content grown from
// the left border, a free gap, and content grown from the right border.
// `left[y]` is the rightmost occupied column of the left part, `right[y]` the
// leftmost occupied column of the right part. The borders act as occupied
// columns -1 and `width`, so an empty row is `(-1, width)` and
// `left[y] <= right[y]` always holds.
//
// A pass works in a frame where its own side is on the left. Reverse passes
// see the atlas mirrored (`x' = width - 1 - x`), which turns the right
// profile into a left one and lets both directions share the same walk.

use crate::raster::LineCells;
use glam::{ivec2, IVec2};

/// Side of the atlas a pass grows from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wavefront {
    width: i32,
    left: Vec<i32>,
    right: Vec<i32>,
}

impl Wavefront {
    pub fn new(width: i32, height: i32) -> Self {
        let rows = height.max(0) as usize;
        Wavefront {
            width,
            left: vec![-1; rows],
            right: vec![width; rows],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.left.len() as i32
    }

    pub fn left(&self) -> &[i32] {
        &self.left
    }

    pub fn right(&self) -> &[i32] {
        &self.right
    }

    /// True when no row has its two sides crossing.
    pub fn is_consistent(&self) -> bool {
        self.left.iter().zip(&self.right).all(|(l, r)| l <= r)
    }

    /// Convert an X coordinate between the atlas and a pass frame. The
    /// mapping is its own inverse.
    #[inline]
    pub fn to_frame(&self, direction: Direction, x: i32) -> i32 {
        match direction {
            Direction::Forward => x,
            Direction::Reverse => self.width - 1 - x,
        }
    }

    /// Rightmost occupied column of the pass's own side, in frame coordinates.
    #[inline]
    fn occupied(&self, direction: Direction, y: usize) -> i32 {
        match direction {
            Direction::Forward => self.left[y],
            Direction::Reverse => self.width - 1 - self.right[y],
        }
    }

    /// Leftmost occupied column of the opposite side, in frame coordinates.
    #[inline]
    fn opposite(&self, direction: Direction, y: usize) -> i32 {
        match direction {
            Direction::Forward => self.right[y],
            Direction::Reverse => self.width - 1 - self.left[y],
        }
    }

    /// Slide a slanted edge in from the pass's own side until it clears the
    /// profile.
    ///
    /// The edge runs from `(0, from_y)` to `to`. Returns the smallest X shift
    /// that keeps every cell of the shifted edge at least `spacing + 1`
    /// columns right of the occupied boundary on every row within `spacing`
    /// of the cell's row. All rows touched by the edge must lie inside the
    /// atlas.
    pub fn wash_up(&self, direction: Direction, from_y: i32, to: IVec2, spacing: i32) -> i32 {
        let mut x = 0;
        for cell in LineCells::new(ivec2(0, from_y), to) {
            let lo = (cell.y - spacing).max(0);
            let hi = (cell.y + spacing).min(self.height() - 1);
            for row in lo..=hi {
                let needed = self.occupied(direction, row as usize) + spacing + 1 - cell.x;
                if needed > x {
                    x = needed;
                }
            }
        }
        x
    }

    /// Whether a span reaching `right_x` (frame coordinates) on rows
    /// `top..=bottom` keeps `spacing` free columns and rows to the opposite
    /// side.
    pub fn fits(&self, direction: Direction, right_x: i32, top: i32, bottom: i32, spacing: i32) -> bool {
        let lo = (top - spacing).max(0);
        let hi = (bottom + spacing).min(self.height() - 1);
        (lo..=hi).all(|row| right_x <= self.opposite(direction, row as usize) - spacing - 1)
    }

    /// Advance the pass's own profile along an edge (frame coordinates).
    /// Each row keeps the furthest cell the edge reaches on it.
    pub fn surge(&mut self, direction: Direction, from: IVec2, to: IVec2) {
        for cell in LineCells::new(from, to) {
            if cell.y < 0 || cell.y >= self.height() {
                continue;
            }
            let row = cell.y as usize;
            match direction {
                Direction::Forward => {
                    self.left[row] = self.left[row].max(cell.x);
                }
                Direction::Reverse => {
                    let x = self.width - 1 - cell.x;
                    self.right[row] = self.right[row].min(x);
                }
            }
            debug_assert!(self.left[row] <= self.right[row], "profiles crossed on row {}", row);
        }
    }
}
