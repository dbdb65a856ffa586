use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::session_engine::{
    distractors::synthesize_options,
    helpers::{format_scaled, pick_weighted, scaled_to_f64},
    models::{DifficultyTier, Operator, PrecisionMode, Problem, SessionMode},
    operators::{self, Drawn},
};

/// A one-off generation request, for callers outside a running session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub tier: DifficultyTier,
    pub mode: SessionMode,
    /// `Some(seed)` reproduces the exact same problem (and option order).
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Input-mode request with entropy seeding.
    pub fn new(tier: DifficultyTier) -> Self {
        ProblemRequest { tier, mode: SessionMode::Input, rng_seed: None }
    }
}

fn prompt_for(op: Operator, drawn: &Drawn) -> String {
    match drawn.precision {
        PrecisionMode::Integer    => format!("{} {} {} = ?", drawn.a, op, drawn.b),
        PrecisionMode::OneDecimal => format!("{} {} {} = ? (1 decimal place)", drawn.a, op, drawn.b),
    }
}

/// Generate one problem from `tier` using the caller's RNG stream.
///
/// Total by construction: operator choice always succeeds, every operator
/// module returns a finite answer, and option synthesis is bounded.
pub fn generate_with<R: Rng>(rng: &mut R, tier: &DifficultyTier, mode: SessionMode) -> Problem {
    let op = pick_weighted(rng, &tier.operator_weights);
    let drawn = match op {
        Operator::Add      => operators::addition::generate(rng, tier),
        Operator::Subtract => operators::subtraction::generate(rng, tier),
        Operator::Multiply => operators::multiplication::generate(rng, tier),
        Operator::Divide   => operators::division::generate(rng, tier),
    };

    let explanation = match op {
        Operator::Add      => operators::addition::explain(&drawn),
        Operator::Subtract => operators::subtraction::explain(&drawn),
        Operator::Multiply => operators::multiplication::explain(&drawn),
        Operator::Divide   => operators::division::explain(&drawn),
    };

    let answer_text = format_scaled(drawn.answer_scaled, drawn.precision);
    let options = match mode {
        SessionMode::Input          => Vec::new(),
        SessionMode::MultipleChoice => synthesize_options(rng, &answer_text, drawn.precision),
    };

    Problem {
        prompt_text: prompt_for(op, &drawn),
        operator: op,
        operands: (drawn.a, drawn.b),
        correct_answer: scaled_to_f64(drawn.answer_scaled, drawn.precision),
        answer_text,
        precision: drawn.precision,
        options,
        explanation,
    }
}

/// Core entry point for stand-alone generation.
pub fn generate_problem(request: ProblemRequest) -> Problem {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_with(&mut rng, &request.tier, request.mode)
}
