//! # Demarc Core
//!
//! Core types and traits for the demarc border-detection library.
//!
//! This crate provides:
//! - `Grid<T>`: Generic rectangular elevation grid
//! - `GridElement`: Trait bounding cell value types
//! - `Neighbors4`: 4-connected neighborhood iteration
//! - Algorithm trait for consistent API

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::{Grid, GridElement, Neighbors4, CARDINAL_OFFSETS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Grid, GridElement, Neighbors4};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in demarc.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
