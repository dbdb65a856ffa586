//! One sample problem per difficulty preset, in both modes.
//!
//! Run with:
//!   cargo run --example tiers
//!
//! Fixed seeds make the output identical on every run.

use arith_drill::{generate_problem, DifficultyLevel, ProblemRequest, SessionMode};

fn main() {
    for (level, seed) in [
        (DifficultyLevel::Easy, 11u64),
        (DifficultyLevel::Medium, 22),
        (DifficultyLevel::Hard, 33),
    ] {
        let tier = level.tier();
        println!("── {level} (max operand {}, decimals: {}) ──", tier.max_operand, tier.allow_decimal);

        for mode in [SessionMode::Input, SessionMode::MultipleChoice] {
            let problem = generate_problem(ProblemRequest {
                tier: tier.clone(),
                mode,
                rng_seed: Some(seed),
            });
            println!("  {:?}: {}  [answer {}]", mode, problem.prompt_text, problem.answer_text);
            if !problem.options.is_empty() {
                println!("      options: {}", problem.options.join(" | "));
            }
        }
        println!();
    }
}
