// Copyright 2025 Lars Brubaker
// License: MIT
//
// Packed triangles never touch each other or the atlas border.

mod helpers;

use helpers::{assert_valid_layout, equilateral, grid_quads, random_triangles};
use proptest::prelude::*;
use tri_atlas::{pack_at_scale, pack_to_fit, FlipTieBreak, PackConfig, PackError};

#[test_log::test]
fn grid_of_quads() {
    let positions = grid_quads(6, 6, 1.0);
    let fit = pack_to_fit(&positions, 128, 128, &PackConfig::default()).unwrap();
    assert_eq!(fit.uvs.len(), positions.len());
    assert_valid_layout(&fit.outcome, &fit.uvs);
}

#[test_log::test]
fn grid_without_spacing() {
    let positions = grid_quads(4, 5, 2.0);
    let config = PackConfig::default().with_spacing(0);
    let fit = pack_to_fit(&positions, 64, 48, &config).unwrap();
    assert_valid_layout(&fit.outcome, &fit.uvs);
}

#[test]
fn wide_spacing() {
    let positions = random_triangles(7, 25, 3.0);
    let config = PackConfig::default().with_spacing(5);
    let fit = pack_to_fit(&positions, 200, 150, &config).unwrap();
    assert_valid_layout(&fit.outcome, &fit.uvs);
}

#[test]
fn equilateral_strip() {
    let positions = equilateral(40, 1.0);
    let fit = pack_to_fit(&positions, 96, 96, &PackConfig::default()).unwrap();
    assert_valid_layout(&fit.outcome, &fit.uvs);
    // equal triangles in one row alternate their orientation
    let first_row: Vec<_> = fit
        .placements()
        .iter()
        .filter(|p| p.pass == 0 && p.bounds().0.y == fit.placements()[0].bounds().0.y)
        .map(|p| p.orientation)
        .collect();
    assert!(first_row.len() >= 2);
    for pair in first_row.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn every_tie_break_policy_is_valid() {
    let positions = random_triangles(99, 30, 2.0);
    for policy in [FlipTieBreak::BalanceApex, FlipTieBreak::PreferNatural, FlipTieBreak::PreferMirrored] {
        let config = PackConfig::default().with_flip_tie_break(policy);
        let fit = pack_to_fit(&positions, 128, 128, &config).unwrap();
        assert_valid_layout(&fit.outcome, &fit.uvs);
    }
}

#[test]
fn fixed_scale_pack_is_valid() {
    let positions = grid_quads(3, 3, 1.0);
    let outcome = pack_at_scale(&positions, 64, 64, 4.0, &PackConfig::default()).unwrap();
    let uvs = outcome.uvs();
    assert_valid_layout(&outcome, &uvs);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_meshes_pack_without_overlap(
        seed in 1u64..u64::MAX,
        count in 1usize..40,
        spacing in 0u32..4,
        width in 48u32..160,
        height in 48u32..160,
    ) {
        let positions = random_triangles(seed, count, 4.0);
        let config = PackConfig::default().with_spacing(spacing);
        match pack_to_fit(&positions, width, height, &config) {
            Ok(fit) => assert_valid_layout(&fit.outcome, &fit.uvs),
            Err(PackError::NoFeasibleScale { triangles, .. }) => prop_assert_eq!(triangles, count),
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
