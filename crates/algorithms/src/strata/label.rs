//! Stratum labeling (connected-component labeling under value equality)
//!
//! First pass of border detection: partition the grid into strata, the
//! maximal 4-connected groups of equal-elevation cells. Every cell ends up
//! in exactly one stratum; two cells share a stratum iff they are linked by
//! a path of equal-elevation cardinal steps.

use std::collections::VecDeque;

use demarc_core::grid::{Grid, GridElement};
use demarc_core::{Algorithm, Error, Result};
use ndarray::Array2;

/// Label for cells not yet assigned to a stratum
const UNLABELED: u32 = u32::MAX;

/// A maximal 4-connected group of equal-elevation cells
#[derive(Debug, Clone, PartialEq)]
pub struct Stratum<T> {
    /// Stratum id, assigned in row-major discovery order
    pub id: u32,
    /// Elevation shared by every member cell
    pub elevation: T,
    /// Member cell coordinates as (row, col), non-empty
    pub cells: Vec<(usize, usize)>,
}

impl<T> Stratum<T> {
    /// Number of member cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the stratum has no cells (never true for labeled output)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Result of the labeling pass
#[derive(Debug, Clone)]
pub struct StrataMap<T> {
    /// Per-cell stratum id, same shape as the input grid
    pub labels: Grid<u32>,
    /// Strata indexed by id
    pub strata: Vec<Stratum<T>>,
}

impl<T> StrataMap<T> {
    /// Number of strata discovered
    pub fn count(&self) -> usize {
        self.strata.len()
    }

    /// The stratum containing (row, col)
    pub fn stratum_of(&self, row: usize, col: usize) -> Result<&Stratum<T>> {
        let id = self.labels.get(row, col)?;
        Ok(&self.strata[id as usize])
    }
}

/// Stratum labeling algorithm
#[derive(Debug, Clone, Default)]
pub struct LabelStrata;

impl Algorithm for LabelStrata {
    type Input = Grid<i64>;
    type Output = StrataMap<i64>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Label Strata"
    }

    fn description(&self) -> &'static str {
        "Group 4-connected cells of equal elevation into strata"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        label_strata(&input)
    }
}

/// Partition a grid into strata.
///
/// Scans cells in row-major order; each unlabeled cell seeds a new stratum,
/// which is then grown over cardinal neighbors of equal elevation. Ids are
/// assigned in seed order and are opaque beyond distinctness.
///
/// Component growth uses an explicit work-list instead of recursion: a
/// single plateau can span the whole grid, which would overflow the call
/// stack on large inputs.
///
/// # Arguments
/// * `grid` - Input elevation grid
///
/// # Returns
/// A [`StrataMap`] with per-cell labels and the strata themselves
pub fn label_strata<T: GridElement>(grid: &Grid<T>) -> Result<StrataMap<T>> {
    let (rows, cols) = grid.shape();
    let mut labels = Array2::<u32>::from_elem((rows, cols), UNLABELED);
    let mut strata: Vec<Stratum<T>> = Vec::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    for row in 0..rows {
        for col in 0..cols {
            if labels[(row, col)] != UNLABELED {
                continue;
            }

            let id = strata.len() as u32;
            let elevation = unsafe { grid.get_unchecked(row, col) };
            let mut cells = vec![(row, col)];
            labels[(row, col)] = id;
            queue.push_back((row, col));

            while let Some((r, c)) = queue.pop_front() {
                for (nr, nc, nval) in grid.neighbors4(r, c) {
                    if nval != elevation {
                        continue;
                    }
                    if labels[(nr, nc)] != UNLABELED {
                        continue;
                    }
                    labels[(nr, nc)] = id;
                    cells.push((nr, nc));
                    queue.push_back((nr, nc));
                }
            }

            strata.push(Stratum {
                id,
                elevation,
                cells,
            });
        }
    }

    // A cell left unlabeled after the scan is a programming defect,
    // not a runtime condition.
    debug_assert!(labels.iter().all(|&label| label != UNLABELED));

    Ok(StrataMap {
        labels: Grid::from_array(labels),
        strata,
    })
}
