//! Digit value type with the [1, 9] range invariant baked in

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error for digit values outside the printable range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("digit value {0} is outside the valid range 1..=9")]
    OutOfRange(u8),
}

/// A digit printed on the board, always in 1..=9.
///
/// `Ord` follows numeric order, so keyed collections such as
/// `BTreeMap<Digit, _>` iterate templates in ascending digit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Digit(u8);

impl Digit {
    /// All valid digits in ascending order
    pub const ALL: [Digit; 9] = [
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Create a digit, rejecting values outside 1..=9
    pub fn new(value: u8) -> Result<Self, DigitError> {
        if (1..=9).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    /// Numeric value of the digit
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-digit tables (digit 1 -> 0, ..., 9 -> 8)
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for value in 1..=9u8 {
            assert_eq!(Digit::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn rejects_zero_and_ten() {
        assert_eq!(Digit::new(0), Err(DigitError::OutOfRange(0)));
        assert_eq!(Digit::new(10), Err(DigitError::OutOfRange(10)));
    }

    #[test]
    fn all_is_ascending() {
        let values: Vec<u8> = Digit::ALL.iter().map(|d| d.value()).collect();
        assert_eq!(values, (1..=9).collect::<Vec<u8>>());
    }
}
