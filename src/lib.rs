//! # arith_drill
//!
//! An offline, seedable arithmetic practice engine.
//!
//! Given a difficulty tier the engine generates arithmetic problems (and, in
//! multiple-choice mode, three plausible wrong answers), runs a time-boxed
//! sequence of question/answer rounds, tracks score, streak and stars, and
//! keeps an ordered history for the end-of-session review.
//!
//! ## How it works
//!
//! 1. Build a [`SessionConfig`] with a mode and a [`DifficultyTier`].
//! 2. Create a [`SessionEngine`] with a [`SessionObserver`] that forwards
//!    problems, feedback and stars to your UI.
//! 3. Call `configure`, then `start`.  Feed it one `tick()` per second and a
//!    `submit()` / `skip()` per user action.
//! 4. When the question limit or the clock runs out, the observer receives
//!    a [`SessionSummary`]; [`summary_adapter`] turns it into JSON for a
//!    remote score store.
//!
//! Rendering, navigation, authentication, persistence and celebratory effects
//! all live outside this crate.
//!
//! ## Quick start
//!
//! ```rust
//! use arith_drill::{
//!     DifficultyTier, EventLog, SessionConfig, SessionEngine, SessionMode,
//! };
//!
//! let mut config = SessionConfig::new(SessionMode::Input, DifficultyTier::easy());
//! config.question_limit = 3;
//! config.feedback_delay_secs = 0;
//!
//! let mut engine = SessionEngine::with_seed(EventLog::new(), 42);
//! engine.configure(config).unwrap();
//! engine.start().unwrap();
//!
//! while let Some(problem) = engine.state().and_then(|s| s.current_problem.clone()) {
//!     println!("{}", problem.prompt_text);
//!     engine.submit(&problem.answer_text).unwrap();
//! }
//!
//! let summary = engine.summary().unwrap();
//! assert_eq!(summary.score, 30);
//! ```

pub mod error;
pub mod session_engine;
pub mod summary_adapter;

// Convenience re-exports so callers can use `arith_drill::SessionEngine`
// directly without reaching into `session_engine::`.
pub use error::{ConfigError, SessionError, SessionResult, ValidationError};
pub use session_engine::{
    generate_problem, DifficultyLevel, DifficultyTier, EndReason, EventLog, HistoryEntry,
    NoopObserver, Operator, Outcome, PrecisionMode, Problem, ProblemRequest, ScheduleToken,
    SessionConfig, SessionEngine, SessionEvent, SessionMode, SessionObserver, SessionState,
    SessionStatus, SessionSummary,
};
pub use summary_adapter::{score_payload, summary_json};
