use serde_json::{json, Value};
use crate::session_engine::models::{EndReason, HistoryEntry, SessionSummary};
use crate::error::SessionResult;

/// Wire name of an end reason, as the score store expects it.
fn end_reason_str(reason: EndReason) -> &'static str {
    match reason {
        EndReason::QuestionLimit => "completed",
        EndReason::TimeExpired   => "time_up",
        EndReason::EndedEarly    => "ended_early",
    }
}

/// One review row; a missing answer serialises as an empty string.
fn history_row(entry: &HistoryEntry) -> Value {
    json!({
        "n": entry.ordinal,
        "question": entry.prompt_text,
        "userAnswer": entry.submitted_answer.as_deref().unwrap_or(""),
        "correctAnswer": entry.correct_answer,
        "isCorrect": entry.was_correct,
        "explanation": entry.explanation
    })
}

/// Body a collaborator posts to the remote score store on a star change.
///
/// `difficulty` and `label` identify the level screen (e.g. `"hard"`,
/// `"Advanced Level"`); `stars` is the new displayed star count.
pub fn score_payload(difficulty: &str, stars: u32, label: &str) -> Value {
    json!({
        "difficulty": difficulty,
        "score": stars,
        "label": label
    })
}

/// Full end-of-session review as JSON.
pub fn summary_json(summary: &SessionSummary) -> Value {
    json!({
        "score": summary.score,
        "correctCount": summary.correct_count,
        "stars": summary.stars_earned,
        "questionsAsked": summary.questions_asked,
        "maxStreak": summary.max_streak,
        "accuracy": summary.accuracy,
        "endReason": end_reason_str(summary.end_reason),
        "history": summary.history.iter().map(history_row).collect::<Vec<_>>()
    })
}

/// `summary_json` rendered to a string.
pub fn summary_to_string(summary: &SessionSummary) -> SessionResult<String> {
    Ok(serde_json::to_string_pretty(&summary_json(summary))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SessionSummary {
        SessionSummary {
            score: 15,
            correct_count: 2,
            stars_earned: 0,
            questions_asked: 3,
            max_streak: 2,
            accuracy: 67,
            end_reason: EndReason::TimeExpired,
            history: vec![HistoryEntry {
                ordinal: 1,
                prompt_text: "3 + 4 = ?".into(),
                submitted_answer: Some("7".into()),
                correct_answer: "7".into(),
                was_correct: true,
                explanation: "Start at 3 and count on 4 more: 3 + 4 = 7.".into(),
            }],
        }
    }

    #[test]
    fn summary_uses_client_field_names() {
        let v = summary_json(&summary());
        assert_eq!(v["endReason"], "time_up");
        assert_eq!(v["history"][0]["userAnswer"], "7");
        assert_eq!(v["history"][0]["isCorrect"], true);
        assert_eq!(v["accuracy"], 67);
        assert_eq!(v["history"][0]["explanation"], "Start at 3 and count on 4 more: 3 + 4 = 7.");
    }

    #[test]
    fn score_payload_shape() {
        let v = score_payload("hard", 3, "Advanced Level");
        assert_eq!(v, json!({ "difficulty": "hard", "score": 3, "label": "Advanced Level" }));
    }

    #[test]
    fn summary_string_round_trips_through_serde_json() {
        let text = summary_to_string(&summary()).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back["score"], 15);
    }
}
