//! End-to-end border detection through the public API.
//!
//! Covers the full pipeline (labeling then classification) on literal
//! grids, the `Algorithm` trait surface, and the properties that must hold
//! for any input: strata partition the grid, border flags are uniform per
//! stratum, and classification is deterministic.

use demarc_algorithms::prelude::*;
use demarc_core::{Algorithm, Grid};

fn photograph() -> Grid<i64> {
    Grid::from_rows(vec![
        vec![9, 2, 2, 2, 3, 5],
        vec![9, 8, 3, 2, 4, 5],
        vec![9, 7, 2, 2, 4, 3],
        vec![9, 9, 2, 4, 4, 3],
        vec![9, 2, 3, 4, 3, 5],
    ])
    .unwrap()
}

#[test]
fn full_pipeline_on_worked_grid() {
    let grid = photograph();
    let mask = detect_borders(&grid, BorderParams::default()).unwrap();

    assert_eq!(mask.shape(), grid.shape());
    assert_eq!(
        mask.to_rows(),
        vec![
            vec![0, 1, 1, 1, 0, 0],
            vec![0, 0, 0, 1, 0, 0],
            vec![0, 0, 1, 1, 0, 1],
            vec![0, 0, 1, 0, 0, 1],
            vec![0, 1, 0, 0, 1, 0],
        ]
    );
}

#[test]
fn algorithm_trait_surface() {
    let mask = DetectBorders.execute_default(photograph()).unwrap();
    assert_eq!(mask.get(0, 1).unwrap(), 1);
    assert_eq!(mask.get(0, 0).unwrap(), 0);

    let map = LabelStrata.execute_default(photograph()).unwrap();
    assert_eq!(map.labels.shape(), (5, 6));

    assert_eq!(DetectBorders.name(), "Detect Borders");
    assert!(!LabelStrata.description().is_empty());
}

#[test]
fn strata_partition_and_uniform_flags() {
    let grid = photograph();
    let map = label_strata(&grid).unwrap();
    let mask = detect_borders_with(&grid, &map, BorderParams::default()).unwrap();

    // Every cell belongs to exactly one stratum
    let mut seen = vec![false; grid.len()];
    for stratum in &map.strata {
        for &(r, c) in &stratum.cells {
            let idx = r * grid.cols() + c;
            assert!(!seen[idx], "cell ({r}, {c}) in two strata");
            seen[idx] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));

    // Border flag identical across each stratum
    for stratum in &map.strata {
        let (r0, c0) = stratum.cells[0];
        let flag = mask.get(r0, c0).unwrap();
        for &(r, c) in &stratum.cells {
            assert_eq!(mask.get(r, c).unwrap(), flag);
        }
    }
}

#[test]
fn large_plateau_does_not_overflow() {
    // One 500x500 stratum; a recursive flood fill would blow the stack here
    let grid = Grid::from_rows(vec![vec![3i64; 500]; 500]).unwrap();

    let map = label_strata(&grid).unwrap();
    assert_eq!(map.count(), 1);
    assert_eq!(map.strata[0].len(), 250_000);

    let mask = detect_borders_with(&grid, &map, BorderParams::default()).unwrap();
    assert!(mask.data().iter().all(|&v| v == 1));
}

#[test]
fn serpentine_stratum_is_followed() {
    // A single winding path of 1s through 9s: connectivity must follow the
    // path, not the bounding box
    let grid = Grid::from_rows(vec![
        vec![1, 1, 1, 1, 1],
        vec![9, 9, 9, 9, 1],
        vec![1, 1, 1, 1, 1],
        vec![1, 9, 9, 9, 9],
        vec![1, 1, 1, 1, 1],
    ])
    .unwrap();

    let map = label_strata(&grid).unwrap();
    assert_eq!(map.count(), 3);
    assert_eq!(map.strata[0].elevation, 1);
    assert_eq!(map.strata[0].len(), 17);

    let mask = detect_borders_with(&grid, &map, BorderParams::default()).unwrap();
    for (r, row) in grid.to_rows().iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            assert_eq!(mask.get(r, c).unwrap(), u8::from(v == 1));
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let grid = photograph();
    let first = detect_borders(&grid, BorderParams::default()).unwrap();
    for _ in 0..5 {
        let again = detect_borders(&grid, BorderParams::default()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn negative_elevations_are_ordinary_values() {
    let grid = Grid::from_rows(vec![
        vec![0, -2, 0],
        vec![-2, -5, -2],
        vec![0, -2, 0],
    ])
    .unwrap();

    let mask = detect_borders(&grid, BorderParams::default()).unwrap();
    // Only the -5 pit is a border; each -2 touches it
    assert_eq!(
        mask.to_rows(),
        vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]
    );
}
