//! Applegrid Core Library
//!
//! Domain model for the apple-box digit puzzle: digit values, recognized
//! observations, fixed-size board reconstruction and the digit-balance
//! solvability check. This crate is image-free; everything here is pure
//! data and arithmetic so it can be tested without any vision stack.

pub mod balance;
pub mod board;

// Re-export commonly used types
pub use balance::{BalanceReport, GateDecision, check_balance};
pub use board::digit::{Digit, DigitError};
pub use board::grid::{Grid, GridConfig};
pub use board::observation::DigitObservation;
