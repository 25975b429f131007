// Copyright 2025 Lars Brubaker
// License: MIT
//
// Packing parameters shared by single attempts and the scale search.

pub const DEFAULT_SPACING: u32 = 2;
pub const DEFAULT_MAX_PASSES: usize = 10;
pub const DEFAULT_REFINE_ROUNDS: usize = 16;
pub const DEFAULT_MAX_EXPANSIONS: usize = 32;

/// What to do when the natural and mirrored orientation of a footprint wash
/// up to the same X offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FlipTieBreak {
    /// Mirror when the apex sits right of the base midpoint, so the leading
    /// edge is the steeper one.
    #[default]
    BalanceApex,
    PreferNatural,
    PreferMirrored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PackConfig {
    /// Minimum number of free pixels between two regions, and between a
    /// region and the atlas border.
    pub spacing: u32,
    /// Upper bound on skyline passes per attempt. Passes after the first
    /// restart at the top from the opposite side of the atlas.
    pub max_passes: usize,
    /// Contraction rounds of the scale search.
    pub refine_rounds: usize,
    /// Upper bound on scale doublings while everything still fits.
    pub max_expansions: usize,
    pub flip_tie_break: FlipTieBreak,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            max_passes: DEFAULT_MAX_PASSES,
            refine_rounds: DEFAULT_REFINE_ROUNDS,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            flip_tie_break: FlipTieBreak::default(),
        }
    }
}

impl PackConfig {
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn with_refine_rounds(mut self, rounds: usize) -> Self {
        self.refine_rounds = rounds;
        self
    }

    pub fn with_max_expansions(mut self, expansions: usize) -> Self {
        self.max_expansions = expansions;
        self
    }

    pub fn with_flip_tie_break(mut self, policy: FlipTieBreak) -> Self {
        self.flip_tie_break = policy;
        self
    }
}

impl FlipTieBreak {
    /// Whether a footprint with this base width and apex offset should be
    /// mirrored when both orientations land on the same X.
    #[inline]
    pub fn prefers_mirror(self, width: i32, apex_offset: i32) -> bool {
        match self {
            FlipTieBreak::BalanceApex => apex_offset > width / 2,
            FlipTieBreak::PreferNatural => false,
            FlipTieBreak::PreferMirrored => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PackConfig::default();
        assert_eq!(c.spacing, 2);
        assert_eq!(c.max_passes, 10);
        assert_eq!(c.refine_rounds, 16);
        assert_eq!(c.flip_tie_break, FlipTieBreak::BalanceApex);
    }

    #[test]
    fn builder_overrides() {
        let c = PackConfig::default()
            .with_spacing(0)
            .with_max_passes(1)
            .with_flip_tie_break(FlipTieBreak::PreferNatural);
        assert_eq!(c.spacing, 0);
        assert_eq!(c.max_passes, 1);
        assert_eq!(c.flip_tie_break, FlipTieBreak::PreferNatural);
    }

    #[test]
    fn balance_apex_uses_integer_half() {
        // width 15: half is 7, so offset 8 mirrors and 7 stays.
        assert!(FlipTieBreak::BalanceApex.prefers_mirror(15, 8));
        assert!(!FlipTieBreak::BalanceApex.prefers_mirror(15, 7));
        assert!(!FlipTieBreak::BalanceApex.prefers_mirror(0, 0));
    }
}
