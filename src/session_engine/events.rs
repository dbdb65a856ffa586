//! Outbound notifications from the engine to whatever presents it.
//!
//! The engine calls these synchronously while processing an inbound event.
//! `on_stars_changed` is also where a collaborator pushes score updates to a
//! remote store; delivery and retries are that collaborator's business.

use serde::{Deserialize, Serialize};
use crate::session_engine::models::{Problem, SessionSummary};

pub trait SessionObserver {
    fn on_problem_changed(&mut self, _problem: &Problem) {}
    fn on_feedback(&mut self, _message: &str, _was_correct: bool) {}
    fn on_validation_failure(&mut self, _message: &str) {}
    fn on_stars_changed(&mut self, _stars: u32) {}
    fn on_session_ended(&mut self, _summary: &SessionSummary) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    ProblemChanged(Problem),
    Feedback { message: String, was_correct: bool },
    ValidationFailure(String),
    StarsChanged(u32),
    SessionEnded(SessionSummary),
}

/// Observer that keeps every notification, in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<SessionEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far.
    pub fn take(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn last_summary(&self) -> Option<&SessionSummary> {
        self.events.iter().rev().find_map(|e| match e {
            SessionEvent::SessionEnded(summary) => Some(summary),
            _ => None,
        })
    }
}

impl SessionObserver for EventLog {
    fn on_problem_changed(&mut self, problem: &Problem) {
        self.events.push(SessionEvent::ProblemChanged(problem.clone()));
    }

    fn on_feedback(&mut self, message: &str, was_correct: bool) {
        self.events.push(SessionEvent::Feedback { message: message.to_string(), was_correct });
    }

    fn on_validation_failure(&mut self, message: &str) {
        self.events.push(SessionEvent::ValidationFailure(message.to_string()));
    }

    fn on_stars_changed(&mut self, stars: u32) {
        self.events.push(SessionEvent::StarsChanged(stars));
    }

    fn on_session_ended(&mut self, summary: &SessionSummary) {
        self.events.push(SessionEvent::SessionEnded(summary.clone()));
    }
}
