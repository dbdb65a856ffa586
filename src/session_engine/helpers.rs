//! Shared answer-handling helpers used by the generator, the distractor
//! synthesizer and the session engine.
//!
//! ## Fixed-point answers
//!
//! Every answer is carried as an `i64` scaled by [`PrecisionMode::scale`]
//! (`23` for "23", `47` for "4.7").  Formatting, comparison and distractor
//! arithmetic all happen on that integer, so two values are "the same answer"
//! exactly when their formatted strings are equal.

use std::collections::BTreeMap;
use rand::Rng;
use crate::session_engine::models::{Operator, PrecisionMode};

/// Format a scaled answer (e.g. `-47` at `OneDecimal` → `"-4.7"`).
pub fn format_scaled(scaled: i64, precision: PrecisionMode) -> String {
    match precision {
        PrecisionMode::Integer => scaled.to_string(),
        PrecisionMode::OneDecimal => {
            let sign = if scaled < 0 { "-" } else { "" };
            let abs = scaled.unsigned_abs();
            format!("{sign}{}.{}", abs / 10, abs % 10)
        }
    }
}

/// Convert a scaled answer back into its numeric value.
pub fn scaled_to_f64(scaled: i64, precision: PrecisionMode) -> f64 {
    scaled as f64 / precision.scale() as f64
}

/// Parse user text into a scaled answer.
///
/// Returns `None` for anything that is not a finite number.  `Some(Err(text))`
/// means the number carries more precision than `precision` allows; it keeps
/// the trimmed text so it can be recorded but will never equal an answer.
pub fn parse_scaled(raw: &str, precision: PrecisionMode) -> Option<Result<i64, String>> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let scaled = value * precision.scale() as f64;
    let rounded = scaled.round();
    if (scaled - rounded).abs() > 1e-6 || rounded.abs() > i64::MAX as f64 / 2.0 {
        return Some(Err(trimmed.to_string()));
    }
    Some(Ok(rounded as i64))
}

/// Normalise user input to the canonical answer text at `precision`.
///
/// `"4"`, `" 4.0 "` and `"4.00"` all become `"4.0"` in `OneDecimal` mode.
pub fn normalize_answer(raw: &str, precision: PrecisionMode) -> Option<String> {
    parse_scaled(raw, precision).map(|parsed| match parsed {
        Ok(scaled) => format_scaled(scaled, precision),
        Err(text) => text,
    })
}

/// Fisher-Yates shuffle, so option order depends only on the RNG stream.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Pick an operator proportionally to its weight.
///
/// Zero-weight entries are never chosen.  An empty or all-zero map falls back
/// to addition so generation stays total; configuration validation rejects
/// such tiers before a session can start.
pub fn pick_weighted<R: Rng>(rng: &mut R, weights: &BTreeMap<Operator, u32>) -> Operator {
    let total: u64 = weights.values().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return Operator::Add;
    }
    let mut roll = rng.gen_range(0..total);
    for (&op, &weight) in weights {
        let weight = u64::from(weight);
        if roll < weight {
            return op;
        }
        roll -= weight;
    }
    Operator::Add
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn formats_one_decimal_with_sign() {
        assert_eq!(format_scaled(47, PrecisionMode::OneDecimal), "4.7");
        assert_eq!(format_scaled(-5, PrecisionMode::OneDecimal), "-0.5");
        assert_eq!(format_scaled(40, PrecisionMode::OneDecimal), "4.0");
        assert_eq!(format_scaled(-12, PrecisionMode::Integer), "-12");
    }

    #[test]
    fn normalizes_equivalent_spellings() {
        assert_eq!(normalize_answer(" 4 ", PrecisionMode::OneDecimal).as_deref(), Some("4.0"));
        assert_eq!(normalize_answer("4.00", PrecisionMode::OneDecimal).as_deref(), Some("4.0"));
        assert_eq!(normalize_answer("7.0", PrecisionMode::Integer).as_deref(), Some("7"));
    }

    #[test]
    fn extra_precision_is_kept_verbatim() {
        assert_eq!(normalize_answer("7.5", PrecisionMode::Integer).as_deref(), Some("7.5"));
        assert_eq!(normalize_answer("2.33", PrecisionMode::OneDecimal).as_deref(), Some("2.33"));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(normalize_answer("seven", PrecisionMode::Integer), None);
        assert_eq!(normalize_answer("", PrecisionMode::Integer), None);
        assert_eq!(normalize_answer("inf", PrecisionMode::Integer), None);
        assert_eq!(normalize_answer("NaN", PrecisionMode::OneDecimal), None);
    }

    #[test]
    fn weighted_pick_skips_zero_weights() {
        let mut weights = BTreeMap::new();
        weights.insert(Operator::Add, 0);
        weights.insert(Operator::Divide, 5);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            assert_eq!(pick_weighted(&mut rng, &weights), Operator::Divide);
        }
    }

    #[test]
    fn weighted_pick_handles_weights_past_u32_max() {
        let mut weights = BTreeMap::new();
        weights.insert(Operator::Add, u32::MAX);
        weights.insert(Operator::Subtract, u32::MAX);
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(pick_weighted(&mut rng, &weights));
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn weighted_pick_on_empty_map_is_addition() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_weighted(&mut rng, &BTreeMap::new()), Operator::Add);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }
}
