use serde::{Deserialize, Serialize};
use crate::session_engine::models::HistoryEntry;

/// Append-only record of valid submissions, in the order they were made.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one round. The ordinal is assigned here, starting at 1.
    pub fn append(
        &mut self,
        prompt_text: &str,
        submitted_answer: Option<String>,
        correct_answer: &str,
        was_correct: bool,
        explanation: &str,
    ) -> &HistoryEntry {
        let ordinal = self.entries.len() as u32 + 1;
        self.entries.push(HistoryEntry {
            ordinal,
            prompt_text: prompt_text.to_string(),
            submitted_answer,
            correct_answer: correct_answer.to_string(),
            was_correct,
            explanation: explanation.to_string(),
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
