//! Division: the divisor is always drawn first, from a range starting at 1,
//! before anything is divided by it.
//!
//! Exact problems draw divisor then quotient and build the dividend as their
//! product.  When the tier allows decimals, half of the problems instead draw
//! a free dividend and round `a / b` half-up to one decimal, computed in
//! integer tenths so the answer is reproducible from the two operands.

use rand::Rng;
use crate::session_engine::{
    helpers::format_scaled,
    models::{DifficultyTier, PrecisionMode},
};
use super::{operand_ceiling, Drawn};

fn divisor_ceiling(hi: i64) -> i64 {
    (hi / 3).max(1)
}

/// `a / b` rounded half-up to tenths, for `a >= 0` and `b >= 1`.
pub fn rounded_tenths(a: i64, b: i64) -> i64 {
    (20 * a + b) / (2 * b)
}

pub fn generate<R: Rng>(rng: &mut R, tier: &DifficultyTier) -> Drawn {
    let hi = operand_ceiling(tier.max_operand);
    let b_hi = divisor_ceiling(hi);

    if tier.allow_decimal && b_hi >= 2 && rng.gen_bool(0.5) {
        let b = rng.gen_range(2..=b_hi);
        let a = rng.gen_range(1..=hi);
        return Drawn {
            a,
            b,
            answer_scaled: rounded_tenths(a, b),
            precision: PrecisionMode::OneDecimal,
        };
    }

    let b = rng.gen_range(1..=b_hi);
    let quotient = rng.gen_range(1..=b_hi);
    Drawn::integer(b * quotient, b, quotient)
}

/// Exact problems share into equal groups; rounded ones show two decimals
/// before rounding to one.
pub fn explain(d: &Drawn) -> String {
    let (a, b) = (d.a, d.b);
    match d.precision {
        PrecisionMode::Integer => {
            let q = d.answer_scaled;
            format!("Split {a} into {b} equal groups: each group gets {q}. Check: {q} × {b} = {a}.")
        }
        PrecisionMode::OneDecimal => {
            let hundredths = a * 100 / b;
            format!(
                "{a} ÷ {b} = {}.{:02}… Rounded to one decimal place: {}.",
                hundredths / 100,
                hundredths % 100,
                format_scaled(d.answer_scaled, d.precision),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rounds_half_up() {
        assert_eq!(rounded_tenths(7, 3), 23);   // 2.333…
        assert_eq!(rounded_tenths(2, 3), 7);    // 0.666…
        assert_eq!(rounded_tenths(1, 4), 3);    // 0.25
        assert_eq!(rounded_tenths(9, 2), 45);   // 4.5 exactly
    }

    #[test]
    fn exact_division_is_exact() {
        let tier = DifficultyTier::medium();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..2_000 {
            let d = generate(&mut rng, &tier);
            assert!(d.b >= 1);
            assert_eq!(d.precision, PrecisionMode::Integer);
            assert_eq!(d.a % d.b, 0);
            assert_eq!(d.a / d.b, d.answer_scaled);
        }
    }

    #[test]
    fn decimal_tier_yields_both_precisions() {
        let tier = DifficultyTier::hard();
        let mut rng = StdRng::seed_from_u64(4);
        let drawn: Vec<Drawn> = (0..400).map(|_| generate(&mut rng, &tier)).collect();
        assert!(drawn.iter().any(|d| d.precision == PrecisionMode::OneDecimal));
        assert!(drawn.iter().any(|d| d.precision == PrecisionMode::Integer));
        for d in drawn.iter().filter(|d| d.precision == PrecisionMode::OneDecimal) {
            assert_eq!(d.answer_scaled, rounded_tenths(d.a, d.b));
        }
    }

    #[test]
    fn explanations_for_exact_and_rounded_quotients() {
        assert_eq!(
            explain(&Drawn::integer(24, 6, 4)),
            "Split 24 into 6 equal groups: each group gets 4. Check: 4 × 6 = 24."
        );
        let rounded = Drawn { a: 7, b: 3, answer_scaled: 23, precision: PrecisionMode::OneDecimal };
        assert_eq!(explain(&rounded), "7 ÷ 3 = 2.33… Rounded to one decimal place: 2.3.");
    }

    #[test]
    fn tiny_tier_still_terminates() {
        let tier = DifficultyTier::new(1, true, &[]);
        let mut rng = StdRng::seed_from_u64(0);
        let d = generate(&mut rng, &tier);
        assert_eq!((d.a, d.b, d.answer_scaled), (1, 1, 1));
    }
}
