//! Operand generators, one module per operator.
//!
//! Every module exposes the same signature:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, tier: &DifficultyTier) -> Drawn
//! ```
//!
//! and must always return a valid [`Drawn`]: no generator may loop, fail or
//! produce a non-finite answer.  The generator dispatches to these via
//! `generator.rs`.

use crate::session_engine::models::PrecisionMode;

pub mod addition;
pub mod division;
pub mod multiplication;
pub mod subtraction;

/// Operands and the exact answer they produce, as a scaled fixed-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawn {
    pub a: i64,
    pub b: i64,
    pub answer_scaled: i64,
    pub precision: PrecisionMode,
}

impl Drawn {
    pub fn integer(a: i64, b: i64, answer: i64) -> Self {
        Drawn { a, b, answer_scaled: answer, precision: PrecisionMode::Integer }
    }
}

/// Upper bound for a draw that must stay within `[1, max_operand]`.
pub(crate) fn operand_ceiling(max_operand: u32) -> i64 {
    i64::from(max_operand.max(1))
}
