//! Core session engine: problem generation, distractors, scoring and the
//! session state machine.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: tiers, problems, config, state, history, summary |
//! | `operators`   | One operand generator per arithmetic operator |
//! | `generator`   | `generate_problem()` / `generate_with()`: weighted operator pick and dispatch |
//! | `distractors` | Three unique wrong options plus the correct one, shuffled |
//! | `helpers`     | Fixed-point answer formatting and parsing, shuffle, weighted pick |
//! | `scoring`     | Score, streak and star rules |
//! | `history`     | Append-only log of answered rounds |
//! | `events`      | Outbound observer contract and an in-memory event log |
//! | `session`     | `SessionEngine`, the `Idle → Configuring → Running → Ended` machine |

pub mod distractors;
pub mod events;
pub mod generator;
pub mod helpers;
pub mod history;
pub mod models;
pub mod operators;
pub mod scoring;
pub mod session;

// Re-export the public API surface so callers can use
// `session_engine::SessionEngine` without reaching into sub-modules.
pub use events::{EventLog, NoopObserver, SessionEvent, SessionObserver};
pub use generator::{generate_problem, generate_with, ProblemRequest};
pub use history::HistoryLog;
pub use models::{
    DifficultyLevel, DifficultyTier, EndReason, HistoryEntry, Operator, PrecisionMode, Problem,
    SessionConfig, SessionMode, SessionState, SessionStatus, SessionSummary,
};
pub use scoring::Outcome;
pub use session::{ScheduleToken, SessionEngine};
