use rand::Rng;
use crate::session_engine::models::DifficultyTier;
use super::{operand_ceiling, Drawn};

/// The subtrahend is drawn from `[1, a]`, so answers are never negative.
pub fn generate<R: Rng>(rng: &mut R, tier: &DifficultyTier) -> Drawn {
    let hi = operand_ceiling(tier.max_operand);
    let a = rng.gen_range(1..=hi);
    let b = rng.gen_range(1..=a);
    Drawn::integer(a, b, a - b)
}

pub fn explain(d: &Drawn) -> String {
    let (a, b, diff) = (d.a, d.b, d.answer_scaled);
    format!("Start with {a} and take away {b}: {a} - {b} = {diff}. Check: {diff} + {b} = {a}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn difference_is_never_negative() {
        let tier = DifficultyTier::medium();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1_000 {
            let d = generate(&mut rng, &tier);
            assert!(d.answer_scaled >= 0, "{} - {} went negative", d.a, d.b);
        }
    }

    #[test]
    fn explanation_checks_by_adding_back() {
        let text = explain(&Drawn::integer(42, 17, 25));
        assert!(text.ends_with("Check: 25 + 17 = 42."), "{text}");
    }
}
