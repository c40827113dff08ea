//! # Demarc Algorithms
//!
//! Border-detection algorithms for elevation grids.
//!
//! A *stratum* is a maximal 4-connected group of equal-elevation cells.
//! A stratum whose members are all local minima is a *border*. Detection
//! runs in two passes:
//!
//! - **strata**: connected-component labeling under value equality
//! - **borders**: per-stratum minimality test and uniform broadcast

pub(crate) mod maybe_rayon;
pub mod strata;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::strata::{
        detect_borders, detect_borders_with, label_strata, BorderParams, DetectBorders,
        LabelStrata, MinimaPolicy, StrataMap, Stratum,
    };
    pub use demarc_core::prelude::*;
}
