//! Per-mode practice state, independent of rendering.

pub mod balancer;
pub mod builder;
pub mod drill;
pub mod round;

use crate::chem::BalanceReport;

/// Verdict for one submitted equation answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect(BalanceReport),
    /// Balanced, but the coefficients share a common factor.
    NotSimplest,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

pub use balancer::check_coefficients;
pub use builder::{BuilderForm, EntryInput, Field};
pub use drill::{DrillQuestion, DrillSheet};
pub use round::Round;
