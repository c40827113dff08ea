//! Grid data structures and operations

mod element;
#[allow(clippy::module_inception)]
mod grid;
mod neighborhood;

pub use element::GridElement;
pub use grid::{Grid, GridStatistics};
pub use neighborhood::{Neighbors4, CARDINAL_OFFSETS};
