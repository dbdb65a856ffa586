use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SessionResult};

// ---------------------------------------------------------------------------
// Problem primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add      => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide   => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How many decimal places an answer is written and compared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecisionMode {
    Integer,
    OneDecimal,
}

impl PrecisionMode {
    /// Fixed-point scale: answers are stored as `value * scale` integers.
    pub fn scale(self) -> i64 {
        match self {
            PrecisionMode::Integer    => 1,
            PrecisionMode::OneDecimal => 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Operand magnitude, decimal allowance and operator mix for generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTier {
    pub max_operand: u32,
    pub allow_decimal: bool,
    pub operator_weights: BTreeMap<Operator, u32>,
}

impl DifficultyTier {
    pub fn new(max_operand: u32, allow_decimal: bool, weights: &[(Operator, u32)]) -> Self {
        DifficultyTier {
            max_operand,
            allow_decimal,
            operator_weights: weights.iter().copied().collect(),
        }
    }

    /// Single-digit addition only.
    pub fn easy() -> Self {
        Self::new(9, false, &[(Operator::Add, 1)])
    }

    pub fn medium() -> Self {
        Self::new(
            50,
            false,
            &[
                (Operator::Add, 3),
                (Operator::Subtract, 3),
                (Operator::Multiply, 2),
                (Operator::Divide, 2),
            ],
        )
    }

    pub fn hard() -> Self {
        Self::new(
            200,
            true,
            &[
                (Operator::Add, 2),
                (Operator::Subtract, 2),
                (Operator::Multiply, 3),
                (Operator::Divide, 3),
            ],
        )
    }

    /// Sum of all positive weights; zero means nothing can be drawn.
    pub fn total_weight(&self) -> u64 {
        self.operator_weights.values().map(|&w| u64::from(w)).sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_operand == 0 {
            return Err(ConfigError::MaxOperandZero);
        }
        if self.total_weight() == 0 {
            return Err(ConfigError::EmptyOperatorSet);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn tier(self) -> DifficultyTier {
        match self {
            DifficultyLevel::Easy   => DifficultyTier::easy(),
            DifficultyLevel::Medium => DifficultyTier::medium(),
            DifficultyLevel::Hard   => DifficultyTier::hard(),
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Easy   => write!(f, "easy"),
            DifficultyLevel::Medium => write!(f, "medium"),
            DifficultyLevel::Hard   => write!(f, "hard"),
        }
    }
}

// ---------------------------------------------------------------------------
// Problem
// ---------------------------------------------------------------------------

/// One generated question. Never mutated; the next round gets a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub prompt_text: String,
    pub operator: Operator,
    pub operands: (i64, i64),
    pub correct_answer: f64,
    /// `correct_answer` formatted at `precision`; the form answers are compared to.
    pub answer_text: String,
    pub precision: PrecisionMode,
    /// Four unique choices in multiple-choice mode, empty in input mode.
    pub options: Vec<String>,
    /// Worked solution, shown after a wrong answer and in the review.
    pub explanation: String,
}

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    Input,
    MultipleChoice,
}

pub const DEFAULT_QUESTION_LIMIT: u32 = 20;
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 60;
pub const DEFAULT_REWARD_THRESHOLD: u32 = 15;
pub const DEFAULT_FEEDBACK_DELAY_SECS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub mode: SessionMode,
    pub tier: DifficultyTier,
    pub question_limit: u32,
    pub time_limit_secs: u32,
    pub reward_threshold: u32,
    /// Ticks between an answered question and the next one; 0 advances at once.
    #[serde(default = "default_feedback_delay")]
    pub feedback_delay_secs: u32,
}

fn default_feedback_delay() -> u32 {
    DEFAULT_FEEDBACK_DELAY_SECS
}

impl SessionConfig {
    pub fn new(mode: SessionMode, tier: DifficultyTier) -> Self {
        SessionConfig {
            mode,
            tier,
            question_limit: DEFAULT_QUESTION_LIMIT,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            reward_threshold: DEFAULT_REWARD_THRESHOLD,
            feedback_delay_secs: DEFAULT_FEEDBACK_DELAY_SECS,
        }
    }

    pub fn from_json(json: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.question_limit == 0 {
            return Err(ConfigError::QuestionLimitZero);
        }
        if self.time_limit_secs == 0 {
            return Err(ConfigError::TimeLimitZero);
        }
        if self.reward_threshold == 0 {
            return Err(ConfigError::RewardThresholdZero);
        }
        self.tier.validate()
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Idle,
    Configuring,
    Running,
    Ended,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Idle        => write!(f, "Idle"),
            SessionStatus::Configuring => write!(f, "Configuring"),
            SessionStatus::Running     => write!(f, "Running"),
            SessionStatus::Ended       => write!(f, "Ended"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub status: SessionStatus,
    pub questions_asked: u32,
    pub time_remaining: u32,
    pub current_problem: Option<Problem>,
    pub score: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub correct_count: u32,
    pub stars_earned: u32,
    /// Stars withheld for blank submissions; never larger than the raw star count.
    pub star_penalty: u32,
}

impl SessionState {
    /// Fresh running state for a session that is about to ask `first`.
    pub fn begin(first: Problem, time_limit_secs: u32) -> Self {
        SessionState {
            status: SessionStatus::Running,
            questions_asked: 0,
            time_remaining: time_limit_secs,
            current_problem: Some(first),
            score: 0,
            streak: 0,
            max_streak: 0,
            correct_count: 0,
            stars_earned: 0,
            star_penalty: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// History / summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub ordinal: u32,
    pub prompt_text: String,
    pub submitted_answer: Option<String>,
    pub correct_answer: String,
    pub was_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    QuestionLimit,
    TimeExpired,
    EndedEarly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub correct_count: u32,
    pub stars_earned: u32,
    pub questions_asked: u32,
    pub max_streak: u32,
    /// Whole-number percentage of valid submissions that were correct.
    pub accuracy: u32,
    pub end_reason: EndReason,
    pub history: Vec<HistoryEntry>,
}
