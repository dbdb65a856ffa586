//! The session state machine: `Idle → Configuring → Running → Ended`.
//!
//! ## Event model
//!
//! The engine is single-threaded and processes each inbound call to
//! completion before the next one (`&mut self` on every event).  Two sources
//! drive it: a one-second clock calling [`SessionEngine::tick`], and the user
//! calling [`SessionEngine::submit`] / [`SessionEngine::skip`].
//!
//! Because a submit runs to completion inside its call, a tick that zeroes
//! the clock afterwards cannot undo its history entry or score.  A tick that
//! lands first ends the session, and the later submit is refused with
//! [`SessionError::InvalidTransition`].
//!
//! ## Scheduled advance
//!
//! After an answered question the next one is shown after
//! `feedback_delay_secs` ticks.  That pending advance is a logical timer
//! identified by a [`ScheduleToken`]; ending, skipping, resetting or
//! restarting cancels it, and a cancelled token passed to
//! [`SessionEngine::fire_scheduled`] is ignored.

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult, ValidationError};
use crate::session_engine::{
    events::{NoopObserver, SessionObserver},
    generator::generate_with,
    helpers::normalize_answer,
    history::HistoryLog,
    models::{
        EndReason, HistoryEntry, SessionConfig, SessionMode, SessionState, SessionStatus,
        SessionSummary,
    },
    scoring::{apply_blank_penalty, apply_outcome, Outcome},
};

pub const FEEDBACK_CORRECT: &str = "Correct!";

/// Handle for one pending "show the next problem" timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleToken(u64);

#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    token: ScheduleToken,
    ticks_left: u32,
}

pub struct SessionEngine<O: SessionObserver = NoopObserver> {
    rng: StdRng,
    observer: O,
    config: Option<SessionConfig>,
    state: Option<SessionState>,
    history: HistoryLog,
    pending: Option<PendingAdvance>,
    next_token: u64,
    end_reason: Option<EndReason>,
}

impl SessionEngine<NoopObserver> {
    /// Engine without an observer, seeded from entropy.
    pub fn headless() -> Self {
        Self::new(NoopObserver)
    }
}

impl<O: SessionObserver> SessionEngine<O> {
    pub fn new(observer: O) -> Self {
        Self::from_rng(observer, StdRng::from_entropy())
    }

    /// Same seed and same sequence of calls give the same problems.
    pub fn with_seed(observer: O, seed: u64) -> Self {
        Self::from_rng(observer, StdRng::seed_from_u64(seed))
    }

    fn from_rng(observer: O, rng: StdRng) -> Self {
        SessionEngine {
            rng,
            observer,
            config: None,
            state: None,
            history: HistoryLog::new(),
            pending: None,
            next_token: 0,
            end_reason: None,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn status(&self) -> SessionStatus {
        match (&self.state, &self.config) {
            (Some(state), _) => state.status,
            (None, Some(_))  => SessionStatus::Configuring,
            (None, None)     => SessionStatus::Idle,
        }
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    pub fn config(&self) -> Option<&SessionConfig> {
        self.config.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Token of the pending next-problem timer, if one is armed.
    pub fn pending_advance(&self) -> Option<ScheduleToken> {
        self.pending.map(|p| p.token)
    }

    /// End-of-session summary, available once the session has ended.
    pub fn summary(&self) -> Option<SessionSummary> {
        let state = self.state.as_ref()?;
        let reason = self.end_reason?;
        Some(build_summary(state, &self.history, reason))
    }

    // -----------------------------------------------------------------------
    // Inbound events
    // -----------------------------------------------------------------------

    pub fn configure(&mut self, config: SessionConfig) -> SessionResult<()> {
        self.expect_status("configure", SessionStatus::Idle)?;
        info!(mode = ?config.mode, limit = config.question_limit, "session configured");
        self.config = Some(config);
        Ok(())
    }

    /// Validate the stored configuration and ask the first question.
    ///
    /// On a configuration error the engine stays in `Configuring`.
    pub fn start(&mut self) -> SessionResult<()> {
        self.expect_status("start", SessionStatus::Configuring)?;
        if let Some(config) = &self.config {
            config.validate()?;
        }
        self.begin()
    }

    /// "Play again": a brand-new session state from the same configuration.
    pub fn restart(&mut self) -> SessionResult<()> {
        self.expect_status("restart", SessionStatus::Ended)?;
        self.begin()
    }

    /// Drop configuration and state, cancelling any pending timer.
    pub fn reset(&mut self) {
        self.cancel_pending("reset");
        self.state = None;
        self.config = None;
        self.history = HistoryLog::new();
        self.end_reason = None;
        debug!("session reset to idle");
    }

    /// One second of the session clock.
    pub fn tick(&mut self) -> SessionResult<()> {
        self.expect_status("tick", SessionStatus::Running)?;
        let remaining = match self.state.as_mut() {
            Some(state) => {
                state.time_remaining = state.time_remaining.saturating_sub(1);
                state.time_remaining
            }
            None => return Ok(()),
        };

        if remaining == 0 {
            info!("time expired");
            self.finish(EndReason::TimeExpired);
            return Ok(());
        }

        let due = match self.pending.as_mut() {
            Some(pending) => {
                pending.ticks_left = pending.ticks_left.saturating_sub(1);
                pending.ticks_left == 0
            }
            None => false,
        };
        if due {
            self.advance();
        }
        Ok(())
    }

    /// Fire a pending advance early, e.g. from a host-side timer.
    ///
    /// Returns `false` when the token is stale (cancelled or already fired).
    pub fn fire_scheduled(&mut self, token: ScheduleToken) -> bool {
        let live = self.status() == SessionStatus::Running
            && self.pending.map(|p| p.token) == Some(token);
        if !live {
            debug!(?token, "ignoring stale scheduled advance");
            return false;
        }
        self.advance();
        true
    }

    /// Answer the current problem with typed text or a chosen option.
    pub fn submit(&mut self, value: &str) -> SessionResult<Outcome> {
        self.expect_status("submit", SessionStatus::Running)?;
        if self.pending.is_some() {
            return Err(SessionError::AwaitingNextProblem);
        }
        let config = match &self.config {
            Some(config) => config,
            None => return Err(self.invalid("submit")),
        };
        let (mode, threshold, limit) = (config.mode, config.reward_threshold, config.question_limit);
        let problem = match self.state.as_ref().and_then(|s| s.current_problem.as_ref()) {
            Some(problem) => problem.clone(),
            None => return Err(self.invalid("submit")),
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            if mode == SessionMode::Input {
                if let Some(state) = self.state.as_mut() {
                    if let Some(stars) = apply_blank_penalty(state, threshold) {
                        self.observer.on_stars_changed(stars);
                    }
                }
            }
            return Err(self.reject(ValidationError::Blank));
        }

        let normalized = match mode {
            SessionMode::Input => match normalize_answer(trimmed, problem.precision) {
                Some(n) => n,
                None => {
                    return Err(self.reject(ValidationError::NotANumber { input: trimmed.to_string() }))
                }
            },
            SessionMode::MultipleChoice => {
                if !problem.options.iter().any(|o| o == trimmed) {
                    return Err(self.reject(ValidationError::UnknownOption { option: trimmed.to_string() }));
                }
                trimmed.to_string()
            }
        };

        let was_correct = normalized == problem.answer_text;
        let outcome = if was_correct { Outcome::Correct } else { Outcome::Incorrect };
        self.history.append(
            &problem.prompt_text,
            Some(trimmed.to_string()),
            &problem.answer_text,
            was_correct,
            &problem.explanation,
        );

        let (stars, asked) = match self.state.as_mut() {
            Some(state) => {
                let stars = apply_outcome(state, outcome, threshold);
                state.questions_asked += 1;
                (stars, state.questions_asked)
            }
            None => return Err(self.invalid("submit")),
        };
        info!(prompt = %problem.prompt_text, answer = %trimmed, correct = was_correct, asked, "answer recorded");

        let feedback = if was_correct {
            FEEDBACK_CORRECT.to_string()
        } else {
            format!("Wrong! Correct answer: {}. Let's solve together: {}", problem.answer_text, problem.explanation)
        };
        self.observer.on_feedback(&feedback, was_correct);
        if let Some(stars) = stars {
            self.observer.on_stars_changed(stars);
        }

        if asked >= limit {
            self.finish(EndReason::QuestionLimit);
        } else {
            self.schedule_advance();
        }
        Ok(outcome)
    }

    /// Move on without answering: no score, streak, count or history change.
    pub fn skip(&mut self) -> SessionResult<()> {
        self.expect_status("skip", SessionStatus::Running)?;
        self.cancel_pending("skip");
        debug!("problem skipped");
        self.advance();
        Ok(())
    }

    pub fn end_early(&mut self) -> SessionResult<()> {
        self.expect_status("end_early", SessionStatus::Running)?;
        self.finish(EndReason::EndedEarly);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn invalid(&self, event: &'static str) -> SessionError {
        SessionError::InvalidTransition { event, status: self.status() }
    }

    fn expect_status(&self, event: &'static str, wanted: SessionStatus) -> SessionResult<()> {
        if self.status() == wanted {
            Ok(())
        } else {
            Err(self.invalid(event))
        }
    }

    fn reject(&mut self, error: ValidationError) -> SessionError {
        let message = error.to_string();
        debug!(%message, "submission rejected");
        self.observer.on_validation_failure(&message);
        SessionError::Validation(error)
    }

    fn begin(&mut self) -> SessionResult<()> {
        self.cancel_pending("new session");
        let config = match &self.config {
            Some(config) => config,
            None => return Err(self.invalid("start")),
        };
        let first = generate_with(&mut self.rng, &config.tier, config.mode);
        let state = SessionState::begin(first, config.time_limit_secs);
        info!(time_limit = config.time_limit_secs, "session started");

        self.history = HistoryLog::new();
        self.end_reason = None;
        if let Some(problem) = &state.current_problem {
            self.observer.on_problem_changed(problem);
        }
        self.state = Some(state);
        Ok(())
    }

    fn schedule_advance(&mut self) {
        let delay = self.config.as_ref().map_or(0, |c| c.feedback_delay_secs);
        if delay == 0 {
            self.advance();
            return;
        }
        self.next_token += 1;
        let token = ScheduleToken(self.next_token);
        debug!(?token, delay, "next problem scheduled");
        self.pending = Some(PendingAdvance { token, ticks_left: delay });
    }

    fn cancel_pending(&mut self, why: &str) {
        if let Some(pending) = self.pending.take() {
            debug!(token = ?pending.token, why, "scheduled advance cancelled");
        }
    }

    fn advance(&mut self) {
        self.pending = None;
        let (Some(config), Some(state)) = (&self.config, self.state.as_mut()) else {
            return;
        };
        let problem = generate_with(&mut self.rng, &config.tier, config.mode);
        self.observer.on_problem_changed(&problem);
        state.current_problem = Some(problem);
    }

    fn finish(&mut self, reason: EndReason) {
        self.cancel_pending("session ended");
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.status = SessionStatus::Ended;
        state.current_problem = None;
        self.end_reason = Some(reason);

        let summary = build_summary(state, &self.history, reason);
        info!(?reason, score = summary.score, stars = summary.stars_earned, "session ended");
        self.observer.on_session_ended(&summary);
    }
}

fn build_summary(state: &SessionState, history: &HistoryLog, reason: EndReason) -> SessionSummary {
    let answered = history.len() as u32;
    let accuracy = if answered == 0 {
        0
    } else {
        let answered = u64::from(answered);
        let pct = (u64::from(state.correct_count) * 100 + answered / 2) / answered;
        pct.min(100) as u32
    };
    SessionSummary {
        score: state.score,
        correct_count: state.correct_count,
        stars_earned: state.stars_earned,
        questions_asked: state.questions_asked,
        max_streak: state.max_streak,
        accuracy,
        end_reason: reason,
        history: history.entries().to_vec(),
    }
}
