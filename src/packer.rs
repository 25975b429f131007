// Copyright 2025 Lars Brubaker
// License: MIT
//
// Skyline packer for tent footprints.
//
// Footprints arrive tallest first. Each pass fills the atlas in rows from the
// top, alternating tents that point up (base on the row's top line) and down
// (base on the row's bottom line) so neighbours interlock along their
// slanted edges. A tent is slid in from the pass's side until its leading
// edge clears the wavefront, in whichever horizontal orientation lands
// further left, and then its trailing edge becomes the new wavefront.
//
// When the rows run out, the next pass restarts at the top from the other
// side of the atlas and fills the free gaps that earlier rows left behind.

use crate::config::PackConfig;
use crate::measure::Footprint;
use crate::wavefront::{Direction, Wavefront};
use glam::{ivec2, IVec2};
use log::{debug, trace};

#[cfg(feature = "debug-image")]
pub mod debug;
mod output;

pub use output::RowSpan;

// ─────────────────────────────── Public types ──────────────────────────────────

/// Which way a tent points inside its row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Base on the row's top line, apex below it.
    Up,
    /// Base on the row's bottom line, apex above it.
    Down,
}

impl Orientation {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
        }
    }
}

/// One packed triangle in atlas pixel space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Footprint as placed, with the orientation chosen inside its pass.
    pub footprint: Footprint,
    /// Pixel positions of the A (base end), B (base start) and C (apex)
    /// corners.
    pub corners: [IVec2; 3],
    /// Global vertex indices that receive `corners`, in the same order.
    pub vertices: [usize; 3],
    pub orientation: Orientation,
    pub direction: Direction,
    /// Zero-based pass that placed the triangle.
    pub pass: usize,
}

impl Placement {
    #[inline]
    pub fn triangle(&self) -> usize {
        self.footprint.triangle
    }

    /// The three edges as `(from, to)` pixel pairs, walked in the same
    /// direction the packer walks them: B -> C, C -> A, B -> A.
    pub fn edges(&self) -> [(IVec2, IVec2); 3] {
        let [a, b, c] = self.corners;
        [(b, c), (c, a), (b, a)]
    }

    /// Inclusive pixel bounding box `(min, max)`.
    pub fn bounds(&self) -> (IVec2, IVec2) {
        let [a, b, c] = self.corners;
        (a.min(b).min(c), a.max(b).max(c))
    }
}

/// Result of one packing attempt.
#[derive(Clone, Debug)]
pub struct PackOutcome {
    /// Placed triangles in placement order.
    pub placements: Vec<Placement>,
    /// Number of footprints offered to the packer.
    pub total: usize,
    pub width: u32,
    pub height: u32,
    pub spacing: u32,
    /// Passes started, including the one that ran out of rows.
    pub passes: usize,
    /// Skyline state after the last placement.
    pub wavefront: Wavefront,
}

impl PackOutcome {
    #[inline]
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Vertices whose UVs this attempt can fill (three per placed triangle).
    #[inline]
    pub fn placed_vertices(&self) -> usize {
        self.placements.len() * 3
    }

    /// True when every footprint found a place.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.placements.len() == self.total
    }
}

// ─────────────────────────────── Packing ───────────────────────────────────────

/// Row cursor of one pass.
struct Row {
    y: i32,
    height: i32,
    orientation: Orientation,
}

impl Row {
    fn start(spacing: i32, height: i32) -> Self {
        Row { y: spacing, height, orientation: Orientation::Up }
    }

    fn advance(&mut self, next_height: i32, spacing: i32) {
        self.y += self.height + spacing + 1;
        self.height = next_height;
    }
}

/// Place `footprints` (in packing order) into a `width` × `height` atlas.
///
/// Never fails: footprints that do not fit are simply left out, and the
/// outcome reports how many were placed. Deterministic for a given input.
pub fn pack(footprints: &[Footprint], width: u32, height: u32, config: &PackConfig) -> PackOutcome {
    let w = clamp_dimension(width);
    let h = clamp_dimension(height);
    let spacing = clamp_dimension(config.spacing);
    let max_width = w.saturating_sub(1).saturating_sub(spacing.saturating_mul(2));
    let max_height = h.saturating_sub(1).saturating_sub(spacing.saturating_mul(2));

    let mut wave = Wavefront::new(w, h);
    let mut placements: Vec<Placement> = Vec::with_capacity(footprints.len());
    let mut direction = Direction::Forward;
    let mut passes = 0;
    let mut next = 0;

    'passes: while next < footprints.len() && passes < config.max_passes {
        let pass = passes;
        passes += 1;
        let placed_before = placements.len();
        let mut row = Row::start(spacing, footprints[next].height);

        while let Some(&fp) = footprints.get(next) {
            if fp.width > max_width || fp.height > max_height {
                debug!(
                    "triangle {} ({}x{}) can never fit a {}x{} atlas with spacing {}",
                    fp.triangle, fp.width, fp.height, width, height, spacing
                );
                break 'passes;
            }
            match place(&mut wave, direction, &mut row, fp, spacing, config) {
                Some((x, top, oriented)) => {
                    placements.push(placement(&wave, direction, row.orientation, pass, x, top, oriented));
                    row.orientation = row.orientation.flipped();
                    next += 1;
                }
                None => break,
            }
        }

        let placed = placements.len() - placed_before;
        debug!(
            "pass {} ({:?}) placed {} triangles, {} of {} done",
            pass,
            direction,
            placed,
            placements.len(),
            footprints.len()
        );
        direction = direction.reversed();
    }

    PackOutcome {
        placements,
        total: footprints.len(),
        width,
        height,
        spacing: config.spacing,
        passes,
        wavefront: wave,
    }
}

/// Find a spot for `fp` in the current pass, advancing rows as needed.
/// Returns the frame X, the top row and the oriented footprint, or `None`
/// once the pass runs out of rows.
fn place(
    wave: &mut Wavefront,
    direction: Direction,
    row: &mut Row,
    fp: Footprint,
    spacing: i32,
    config: &PackConfig,
) -> Option<(i32, i32, Footprint)> {
    loop {
        let top = match row.orientation {
            Orientation::Up => row.y,
            Orientation::Down => row.y + (row.height - fp.height).max(0),
        };
        if top + fp.height + spacing > wave.height() - 1 {
            trace!("rows exhausted at y = {}", row.y);
            return None;
        }
        let (base_y, apex_y) = tent_rows(row.orientation, top, fp.height);

        let natural = wave.wash_up(direction, base_y, ivec2(fp.apex_offset, apex_y), spacing);
        let mirror = fp.mirrored();
        let mirrored = wave.wash_up(direction, base_y, ivec2(mirror.apex_offset, apex_y), spacing);
        let take_mirror = mirrored < natural
            || (mirrored == natural
                && config.flip_tie_break.prefers_mirror(fp.width, fp.apex_offset));
        let (x, oriented) = if take_mirror { (mirrored, mirror) } else { (natural, fp) };

        if wave.fits(direction, x + oriented.width, top, top + oriented.height, spacing) {
            // trailing edge C -> A
            wave.surge(
                direction,
                ivec2(x + oriented.apex_offset, apex_y),
                ivec2(x + oriented.width, base_y),
            );
            return Some((x, top, oriented));
        }

        row.advance(fp.height, spacing);
        trace!("triangle {} starts a new row at y = {}", fp.triangle, row.y);
    }
}

/// `(base_y, apex_y)` of a tent whose rows start at `top`.
#[inline]
fn tent_rows(orientation: Orientation, top: i32, height: i32) -> (i32, i32) {
    match orientation {
        Orientation::Up => (top, top + height),
        Orientation::Down => (top + height, top),
    }
}

fn placement(
    wave: &Wavefront,
    direction: Direction,
    orientation: Orientation,
    pass: usize,
    x: i32,
    top: i32,
    footprint: Footprint,
) -> Placement {
    let (base_y, apex_y) = tent_rows(orientation, top, footprint.height);
    let corner = |fx: i32, y: i32| ivec2(wave.to_frame(direction, fx), y);
    Placement {
        footprint,
        corners: [
            corner(x + footprint.width, base_y),
            corner(x, base_y),
            corner(x + footprint.apex_offset, apex_y),
        ],
        vertices: footprint.vertex_roles(),
        orientation,
        direction,
        pass,
    }
}

#[inline]
fn clamp_dimension(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
