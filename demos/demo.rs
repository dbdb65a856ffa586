//! A full simulated session, start to summary.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=debug` to see engine transitions)
//!
//! The demo plays a multiple-choice session against a scripted "student"
//! that picks the right option about two times in three, occasionally skips
//! or types something that is not an option, sometimes answers again during
//! the feedback delay, and lets the clock tick between answers.  A printing observer shows what
//! a UI would receive.

use arith_drill::{
    score_payload, summary_adapter::summary_to_string, DifficultyLevel, Problem, SessionConfig,
    SessionEngine, SessionMode, SessionObserver, SessionStatus, SessionSummary,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Prints every notification the engine emits.
struct ConsoleObserver;

impl SessionObserver for ConsoleObserver {
    fn on_problem_changed(&mut self, problem: &Problem) {
        println!("\nQ: {}", problem.prompt_text);
        for (i, option) in problem.options.iter().enumerate() {
            println!("   {}) {option}", (b'A' + i as u8) as char);
        }
    }

    fn on_feedback(&mut self, message: &str, was_correct: bool) {
        let mark = if was_correct { "+" } else { "-" };
        println!("[{mark}] {message}");
    }

    fn on_validation_failure(&mut self, message: &str) {
        println!("[!] {message}");
    }

    fn on_stars_changed(&mut self, stars: u32) {
        println!("*** stars: {stars} -> {}", score_payload("medium", stars, "Practice"));
    }

    fn on_session_ended(&mut self, summary: &SessionSummary) {
        println!(
            "\nSession over ({:?}): score {}, {} correct, {} stars, accuracy {}%",
            summary.end_reason, summary.score, summary.correct_count, summary.stars_earned, summary.accuracy
        );
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();

    let mut config = SessionConfig::new(SessionMode::MultipleChoice, DifficultyLevel::Medium.tier());
    config.question_limit = 8;
    config.time_limit_secs = 45;
    config.reward_threshold = 3;
    config.feedback_delay_secs = 1;

    let mut engine = SessionEngine::with_seed(ConsoleObserver, 2024);
    let mut student = StdRng::seed_from_u64(7);

    if let Err(e) = engine.configure(config).and_then(|_| engine.start()) {
        eprintln!("could not start: {e}");
        return;
    }

    while engine.status() == SessionStatus::Running {
        if engine.pending_advance().is_some() {
            // An impatient student answers again before the next problem shows up.
            if student.gen_bool(0.2) {
                if let Err(e) = engine.submit("42") {
                    println!("(rejected: {e})");
                }
            }
        } else {
            let Some(problem) = engine.state().and_then(|s| s.current_problem.clone()) else {
                break;
            };
            let roll: f64 = student.gen();
            if roll < 0.1 {
                println!("(skipped)");
                if let Err(e) = engine.skip() {
                    eprintln!("could not skip: {e}");
                }
                continue;
            }
            let choice = if roll < 0.15 {
                "banana".to_string()
            } else if roll < 0.7 {
                problem.answer_text.clone()
            } else {
                problem.options[student.gen_range(0..problem.options.len())].clone()
            };
            println!("> {choice}");
            if let Err(e) = engine.submit(&choice) {
                println!("(rejected: {e})");
            }
        }
        if let Err(e) = engine.tick() {
            eprintln!("could not tick: {e}");
        }
    }

    if let Some(summary) = engine.summary() {
        match summary_to_string(&summary) {
            Ok(json) => println!("\n{json}"),
            Err(e) => eprintln!("could not render summary: {e}"),
        }
    }
}
