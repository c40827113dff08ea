//! Stratum analysis for elevation grids
//!
//! - Label strata: group 4-connected cells of equal elevation
//! - Detect borders: classify strata whose members are all local minima

mod borders;
mod label;

pub use borders::{detect_borders, detect_borders_with, BorderParams, DetectBorders, MinimaPolicy};
pub use label::{label_strata, LabelStrata, StrataMap, Stratum};
