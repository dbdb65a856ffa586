use rand::Rng;
use crate::session_engine::models::DifficultyTier;
use super::{operand_ceiling, Drawn};

pub fn generate<R: Rng>(rng: &mut R, tier: &DifficultyTier) -> Drawn {
    let hi = operand_ceiling(tier.max_operand);
    let a = rng.gen_range(1..=hi);
    let b = rng.gen_range(1..=hi);
    Drawn::integer(a, b, a + b)
}

/// Single digits count on; larger sums split off the ones column first.
pub fn explain(d: &Drawn) -> String {
    let (a, b, sum) = (d.a, d.b, d.answer_scaled);
    if a < 10 && b < 10 {
        return format!("Start at {a} and count on {b} more: {a} + {b} = {sum}.");
    }
    let ones = a % 10 + b % 10;
    let rest = (a - a % 10) + (b - b % 10);
    format!(
        "Add the ones: {} + {} = {ones}. Add the rest: {} + {} = {rest}. Together: {rest} + {ones} = {sum}.",
        a % 10, b % 10, a - a % 10, b - b % 10,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn operands_stay_in_range() {
        let tier = DifficultyTier::easy();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            let d = generate(&mut rng, &tier);
            assert!((1..=9).contains(&d.a) && (1..=9).contains(&d.b));
            assert_eq!(d.answer_scaled, d.a + d.b);
        }
    }

    #[test]
    fn explanation_splits_ones_from_the_rest() {
        assert_eq!(explain(&Drawn::integer(3, 4, 7)), "Start at 3 and count on 4 more: 3 + 4 = 7.");
        assert_eq!(
            explain(&Drawn::integer(123, 48, 171)),
            "Add the ones: 3 + 8 = 11. Add the rest: 120 + 40 = 160. Together: 160 + 11 = 171."
        );
    }
}
