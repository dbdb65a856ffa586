//! Score, streak and star bookkeeping.
//!
//! Stars are always recomputed from `correct_count`, never incremented, so
//! running the recomputation twice on the same inputs changes nothing.

use serde::{Deserialize, Serialize};
use crate::session_engine::models::SessionState;

pub const POINTS_CORRECT: u32 = 10;
pub const POINTS_WRONG: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Stars earned before any blank-answer penalty.
pub fn raw_stars(correct_count: u32, reward_threshold: u32) -> u32 {
    correct_count / reward_threshold.max(1)
}

/// Recompute `stars_earned`; returns the new count if it changed.
pub fn recompute_stars(state: &mut SessionState, reward_threshold: u32) -> Option<u32> {
    let raw = raw_stars(state.correct_count, reward_threshold);
    let shown = raw.saturating_sub(state.star_penalty);
    if shown == state.stars_earned {
        return None;
    }
    state.stars_earned = shown;
    Some(shown)
}

/// Apply a completed (non-blank) submission.
pub fn apply_outcome(state: &mut SessionState, outcome: Outcome, reward_threshold: u32) -> Option<u32> {
    match outcome {
        Outcome::Correct => {
            state.score = state.score.saturating_add(POINTS_CORRECT);
            state.streak += 1;
            state.max_streak = state.max_streak.max(state.streak);
            state.correct_count += 1;
        }
        Outcome::Incorrect => {
            state.score = state.score.saturating_sub(POINTS_WRONG);
            state.streak = 0;
        }
    }
    recompute_stars(state, reward_threshold)
}

/// Withhold one displayed star for a blank submission.
///
/// The penalty never exceeds the raw star count, so the display bottoms out
/// at zero and no penalty is banked against stars not yet earned.
pub fn apply_blank_penalty(state: &mut SessionState, reward_threshold: u32) -> Option<u32> {
    let raw = raw_stars(state.correct_count, reward_threshold);
    state.star_penalty = (state.star_penalty + 1).min(raw);
    recompute_stars(state, reward_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_engine::models::{PrecisionMode, Operator, Problem};

    fn state() -> SessionState {
        let problem = Problem {
            prompt_text: "1 + 1 = ?".into(),
            operator: Operator::Add,
            operands: (1, 1),
            correct_answer: 2.0,
            answer_text: "2".into(),
            precision: PrecisionMode::Integer,
            options: Vec::new(),
            explanation: "Start at 1 and count on 1 more: 1 + 1 = 2.".into(),
        };
        SessionState::begin(problem, 60)
    }

    #[test]
    fn correct_answer_adds_ten_and_extends_streak() {
        let mut s = state();
        apply_outcome(&mut s, Outcome::Correct, 15);
        apply_outcome(&mut s, Outcome::Correct, 15);
        assert_eq!((s.score, s.streak, s.correct_count), (20, 2, 2));
    }

    #[test]
    fn wrong_answer_never_drives_score_negative() {
        let mut s = state();
        apply_outcome(&mut s, Outcome::Correct, 15);
        for _ in 0..5 {
            apply_outcome(&mut s, Outcome::Incorrect, 15);
        }
        assert_eq!(s.score, 0);
        assert_eq!(s.streak, 0);
        assert_eq!(s.max_streak, 1);
    }

    #[test]
    fn stars_cross_threshold_once() {
        let mut s = state();
        let changes: Vec<u32> = (0..6)
            .filter_map(|_| apply_outcome(&mut s, Outcome::Correct, 3))
            .collect();
        assert_eq!(changes, vec![1, 2]);
        assert_eq!(recompute_stars(&mut s, 3), None);
    }

    #[test]
    fn blank_penalty_is_capped_at_earned_stars() {
        let mut s = state();
        assert_eq!(apply_blank_penalty(&mut s, 2), None);
        assert_eq!(s.star_penalty, 0);

        apply_outcome(&mut s, Outcome::Correct, 2);
        apply_outcome(&mut s, Outcome::Correct, 2);
        assert_eq!(s.stars_earned, 1);
        assert_eq!(apply_blank_penalty(&mut s, 2), Some(0));
        assert_eq!(apply_blank_penalty(&mut s, 2), None);
        assert_eq!(s.star_penalty, 1);
        assert_eq!(s.correct_count, 2);
    }
}
