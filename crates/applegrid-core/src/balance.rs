//! Digit-frequency balance check
//!
//! The puzzle clears tiles in groups summing to ten, so complementary
//! digit pairs must not be inverted in frequency: every 9 needs a 1,
//! every 8 a 2, and so on. An unbalanced board is usually unclearable,
//! which is worth flagging before any solving effort is spent.

use crate::board::digit::Digit;
use crate::board::observation::DigitObservation;
use serde::Serialize;

/// Complementary digit pairs checked by the balance heuristic:
/// (1, 9), (2, 8), (3, 7), (4, 6)
const PAIRS: [(Digit, Digit); 4] = [
    (Digit::ALL[0], Digit::ALL[8]),
    (Digit::ALL[1], Digit::ALL[7]),
    (Digit::ALL[2], Digit::ALL[6]),
    (Digit::ALL[3], Digit::ALL[5]),
];

/// Occurrence count per digit value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DigitCounts([usize; 9]);

impl DigitCounts {
    /// Tally observations into per-digit counts
    pub fn tally(observations: &[DigitObservation]) -> Self {
        let mut counts = [0usize; 9];
        for obs in observations {
            counts[obs.digit.index()] += 1;
        }
        Self(counts)
    }

    /// Count for one digit value
    pub fn count(&self, digit: Digit) -> usize {
        self.0[digit.index()]
    }
}

/// One pairing condition: `count(low) >= count(high)`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BalanceCondition {
    pub low: Digit,
    pub high: Digit,
    pub low_count: usize,
    pub high_count: usize,
}

impl BalanceCondition {
    /// Whether the condition holds
    pub fn holds(&self) -> bool {
        self.low_count >= self.high_count
    }
}

/// Result of the balance check: per-digit counts plus the four pairing
/// conditions, each independently reported
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub counts: DigitCounts,
    pub conditions: [BalanceCondition; 4],
}

/// Operator decision after a failed balance check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Abort,
}

impl BalanceReport {
    /// Whether all four pairing conditions hold
    pub fn is_satisfied(&self) -> bool {
        self.conditions.iter().all(BalanceCondition::holds)
    }

    /// The conditions that failed
    pub fn failed_conditions(&self) -> impl Iterator<Item = &BalanceCondition> {
        self.conditions.iter().filter(|c| !c.holds())
    }

    /// Continuation gate. A satisfied report proceeds without consulting
    /// `ask`; otherwise `ask` is invoked exactly once and a trimmed,
    /// case-insensitive answer of `n` aborts, anything else proceeds.
    pub fn gate<F: FnOnce() -> String>(&self, ask: F) -> GateDecision {
        if self.is_satisfied() {
            return GateDecision::Proceed;
        }
        if ask().trim().eq_ignore_ascii_case("n") {
            GateDecision::Abort
        } else {
            GateDecision::Proceed
        }
    }
}

/// Compute digit frequencies and evaluate the four pairing conditions
pub fn check_balance(observations: &[DigitObservation]) -> BalanceReport {
    let counts = DigitCounts::tally(observations);
    let conditions = PAIRS.map(|(low, high)| BalanceCondition {
        low,
        high,
        low_count: counts.count(low),
        high_count: counts.count(high),
    });
    BalanceReport { counts, conditions }
}
