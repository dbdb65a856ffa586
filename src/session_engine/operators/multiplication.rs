use rand::Rng;
use crate::session_engine::models::DifficultyTier;
use super::{operand_ceiling, Drawn};

/// Second factor ceiling: `ceil(sqrt(max_operand))`, at least 2, at most `max_operand`.
fn factor_ceiling(hi: i64) -> i64 {
    let root = (hi as f64).sqrt().ceil() as i64;
    root.max(2).min(hi)
}

pub fn generate<R: Rng>(rng: &mut R, tier: &DifficultyTier) -> Drawn {
    let hi = operand_ceiling(tier.max_operand);
    let a = rng.gen_range(1..=hi);
    let b = rng.gen_range(1..=factor_ceiling(hi));
    Drawn::integer(a, b, a * b)
}

pub fn explain(d: &Drawn) -> String {
    let (a, b, product) = (d.a, d.b, d.answer_scaled);
    format!("{a} × {b} means {b} groups of {a}. Add {a} to itself {b} times: {a} × {b} = {product}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn factor_ceiling_is_bounded_by_max_operand() {
        assert_eq!(factor_ceiling(1), 1);
        assert_eq!(factor_ceiling(9), 3);
        assert_eq!(factor_ceiling(200), 15);
    }

    #[test]
    fn product_matches_operands() {
        let tier = DifficultyTier::hard();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..1_000 {
            let d = generate(&mut rng, &tier);
            assert_eq!(d.answer_scaled, d.a * d.b);
            assert!(d.b <= 15);
        }
    }

    #[test]
    fn explanation_reads_as_repeated_addition() {
        assert_eq!(
            explain(&Drawn::integer(7, 3, 21)),
            "7 × 3 means 3 groups of 7. Add 7 to itself 3 times: 7 × 3 = 21."
        );
    }
}
