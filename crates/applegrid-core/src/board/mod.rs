//! Board domain types: digits, observations and the reconstructed grid

pub mod digit;
pub mod grid;
pub mod observation;

pub use digit::Digit;
pub use grid::{Grid, GridConfig};
pub use observation::DigitObservation;
