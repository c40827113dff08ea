//! Border classification
//!
//! Second pass of border detection: a stratum is a border iff every member
//! cell is a local minimum, i.e. the stratum has no outward edge to a lower
//! elevation. The verdict is a property of the whole stratum and is
//! broadcast uniformly to every member cell.

use crate::maybe_rayon::*;
use crate::strata::label::{label_strata, StrataMap, Stratum};
use demarc_core::grid::{Grid, GridElement};
use demarc_core::{Algorithm, Error, Result};
use ndarray::Array2;

/// Comparison policy for the per-cell minimum test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinimaPolicy {
    /// A cell is a minimum iff its elevation is `<=` every existing
    /// neighbor's elevation. Tie-tolerant; the standard contract.
    #[default]
    NonStrict,
    /// A cell is a minimum iff its elevation is `<` every existing
    /// neighbor's elevation. An equal-valued neighbor violates strictness,
    /// so only single-cell strata can be borders under this policy; it
    /// identifies isolated pits.
    Strict,
}

/// Parameters for border detection
#[derive(Debug, Clone, Default)]
pub struct BorderParams {
    /// Minimum-test comparison policy
    pub policy: MinimaPolicy,
}

/// Border detection algorithm
#[derive(Debug, Clone, Default)]
pub struct DetectBorders;

impl Algorithm for DetectBorders {
    type Input = Grid<i64>;
    type Output = Grid<u8>;
    type Params = BorderParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Detect Borders"
    }

    fn description(&self) -> &'static str {
        "Classify strata whose members are all local minima"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        detect_borders(&input, params)
    }
}

/// Detect border cells in an elevation grid.
///
/// Runs both passes: stratum labeling, then the per-stratum minimality
/// test. Returns a mask of the same shape where 1 marks a border cell and
/// 0 everything else.
///
/// # Arguments
/// * `grid` - Input elevation grid
/// * `params` - Comparison policy (non-strict by default)
pub fn detect_borders<T: GridElement>(grid: &Grid<T>, params: BorderParams) -> Result<Grid<u8>> {
    let strata_map = label_strata(grid)?;
    detect_borders_with(grid, &strata_map, params)
}

/// Detect border cells using an existing stratum labeling.
///
/// Useful when the caller already ran [`label_strata`] for other reasons.
/// `strata_map` must come from this `grid`; verdicts are computed per
/// stratum (in parallel with the `parallel` feature; results are identical
/// either way since strata are independent) and written back in id order.
pub fn detect_borders_with<T: GridElement>(
    grid: &Grid<T>,
    strata_map: &StrataMap<T>,
    params: BorderParams,
) -> Result<Grid<u8>> {
    let verdicts: Vec<bool> = (&strata_map.strata)
        .into_par_iter()
        .map(|stratum| stratum_is_border(grid, stratum, params.policy))
        .collect();

    let mut mask = Array2::<u8>::zeros(grid.shape());
    for (stratum, &is_border) in strata_map.strata.iter().zip(&verdicts) {
        if is_border {
            for &(row, col) in &stratum.cells {
                mask[(row, col)] = 1;
            }
        }
    }

    Ok(Grid::from_array(mask))
}

fn stratum_is_border<T: GridElement>(
    grid: &Grid<T>,
    stratum: &Stratum<T>,
    policy: MinimaPolicy,
) -> bool {
    stratum
        .cells
        .iter()
        .all(|&(row, col)| is_minimum(grid, row, col, policy))
}

/// A cell is a minimum iff its elevation compares favorably against every
/// existing cardinal neighbor. Absent neighbors impose no constraint, so a
/// 1x1 grid's only cell is vacuously a minimum.
fn is_minimum<T: GridElement>(
    grid: &Grid<T>,
    row: usize,
    col: usize,
    policy: MinimaPolicy,
) -> bool {
    let value = unsafe { grid.get_unchecked(row, col) };
    grid.neighbors4(row, col).all(|(_, _, nval)| match policy {
        MinimaPolicy::NonStrict => value <= nval,
        MinimaPolicy::Strict => value < nval,
    })
}
