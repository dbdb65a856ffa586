//! Wrong-but-plausible choices for multiple-choice mode.
//!
//! Each attempt picks one of three strategies at random:
//!
//! | Strategy | Candidate |
//! |----------|-----------|
//! | Drift    | correct ± 5–35% of its magnitude (at least 1) |
//! | Reversal | digits of the integer part reversed, sign and decimal kept |
//! | Offset   | correct ± 1..=5 |
//!
//! A candidate is rejected when its formatted text equals the correct answer
//! or an already accepted distractor.  After [`RETRY_BUDGET`] attempts without
//! filling the set, the drift and offset ranges double and the budget resets.
//! If widening still fails [`MAX_WIDENING_ROUNDS`] times, the remaining slots
//! are filled with `correct + 1, correct + 2, …`, which always terminates.

use rand::Rng;
use tracing::warn;
use crate::session_engine::{
    helpers::{format_scaled, parse_scaled, shuffle},
    models::PrecisionMode,
};

pub const DISTRACTOR_COUNT: usize = 3;
pub const RETRY_BUDGET: u32 = 50;
pub const MAX_WIDENING_ROUNDS: u32 = 8;

const OFFSET_BOUND: i64 = 5;

fn drift<R: Rng>(rng: &mut R, base: i64, scale: i64, widen: i64) -> i64 {
    let pct = rng.gen_range(5..=35i64) * widen;
    let delta = (base.abs().saturating_mul(pct) / 100).max(scale);
    if rng.gen_bool(0.5) { base.saturating_add(delta) } else { base.saturating_sub(delta) }
}

fn offset<R: Rng>(rng: &mut R, base: i64, scale: i64, widen: i64) -> i64 {
    let k = rng.gen_range(1..=OFFSET_BOUND * widen) * scale;
    if rng.gen_bool(0.5) { base.saturating_add(k) } else { base.saturating_sub(k) }
}

/// Reverse the digits of the unsigned integer part, keeping sign and tenths.
pub fn reversed(base: i64, scale: i64) -> i64 {
    let abs = base.unsigned_abs();
    let scale_u = scale.unsigned_abs();
    let (whole, frac) = (abs / scale_u, abs % scale_u);
    let flipped: String = whole.to_string().chars().rev().collect();
    let flipped: u64 = flipped.parse().unwrap_or(whole);
    let magnitude = flipped
        .checked_mul(scale_u)
        .and_then(|m| m.checked_add(frac))
        .and_then(|m| i64::try_from(m).ok())
        .unwrap_or(base.saturating_abs());
    if base < 0 { -magnitude } else { magnitude }
}

/// Build the four shuffled options for `correct` at `precision`.
///
/// The result always holds four distinct strings, exactly one of which is the
/// canonical form of `correct`.
pub fn synthesize_options<R: Rng>(rng: &mut R, correct: &str, precision: PrecisionMode) -> Vec<String> {
    let (options, _) = synthesize_with(rng, correct, precision, RETRY_BUDGET, random_candidate);
    options
}

fn random_candidate<R: Rng>(rng: &mut R, base: i64, scale: i64, widen: i64) -> i64 {
    match rng.gen_range(0..3u8) {
        0 => drift(rng, base, scale, widen),
        1 => reversed(base, scale),
        _ => offset(rng, base, scale, widen),
    }
}

/// Option builder with the attempt budget and candidate source supplied by
/// the caller. Also returns how many widening rounds were used.
pub(crate) fn synthesize_with<R, F>(
    rng: &mut R,
    correct: &str,
    precision: PrecisionMode,
    budget: u32,
    mut candidate: F,
) -> (Vec<String>, u32)
where
    R: Rng,
    F: FnMut(&mut R, i64, i64, i64) -> i64,
{
    let scale = precision.scale();
    let (base, correct_text) = match parse_scaled(correct, precision) {
        Some(Ok(scaled)) => (scaled, format_scaled(scaled, precision)),
        _ => (0, correct.trim().to_string()),
    };

    let mut accepted: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT + 1);
    let mut widen = 1i64;
    let mut attempts = 0u32;
    let mut rounds = 0u32;

    while accepted.len() < DISTRACTOR_COUNT {
        if attempts >= budget {
            rounds += 1;
            if rounds > MAX_WIDENING_ROUNDS {
                warn!(correct = %correct_text, "distractor widening exhausted, filling sequentially");
                fill_sequential(&mut accepted, base, scale, precision, &correct_text);
                break;
            }
            attempts = 0;
            widen *= 2;
            warn!(correct = %correct_text, widen, "distractor retry budget spent, widening range");
        }
        attempts += 1;

        let text = format_scaled(candidate(rng, base, scale, widen), precision);
        if text != correct_text && !accepted.contains(&text) {
            accepted.push(text);
        }
    }

    accepted.push(correct_text);
    shuffle(rng, &mut accepted);
    (accepted, rounds)
}

fn fill_sequential(
    accepted: &mut Vec<String>,
    base: i64,
    scale: i64,
    precision: PrecisionMode,
    correct_text: &str,
) {
    let mut k = 1i64;
    while accepted.len() < DISTRACTOR_COUNT {
        let text = format_scaled(base.saturating_add(k.saturating_mul(scale)), precision);
        if text != correct_text && !accepted.contains(&text) {
            accepted.push(text);
        }
        k += 1;
    }
}
