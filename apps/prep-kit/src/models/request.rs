//! Typed request values parsed from the job environment.
//!
//! Every value here is total: unparsable or unknown input falls back to a
//! documented default instead of failing the run.

use std::collections::BTreeSet;
use std::fmt;

use tracing::warn;

pub const MIN_QUESTIONS: u8 = 5;
pub const MAX_QUESTIONS: u8 = 10;
pub const DEFAULT_QUESTIONS: u8 = 8;

// ────────────────────────────────────────────────────────────────────────────
// Question count
// ────────────────────────────────────────────────────────────────────────────

/// Number of interview questions to request. Always within `[5, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCount(u8);

impl QuestionCount {
    /// Clamps any integer into the supported range.
    pub fn new(n: i64) -> Self {
        Self(n.clamp(MIN_QUESTIONS as i64, MAX_QUESTIONS as i64) as u8)
    }

    /// Parses a raw environment value. Absent or non-integer input yields the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim).map(str::parse::<i64>) {
            Some(Ok(n)) => Self::new(n),
            Some(Err(_)) => {
                warn!(value = ?raw, "num_questions is not an integer, using {DEFAULT_QUESTIONS}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self(DEFAULT_QUESTIONS)
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience level
// ────────────────────────────────────────────────────────────────────────────

/// Seniority of the target role. Controls prompt phrasing and the document subtitle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    /// Maps an exact lowercase label. Anything else, including a missing value, becomes `Mid`.
    pub fn from_label(raw: Option<&str>) -> Self {
        let Some(label) = raw else {
            return Self::default();
        };
        match label {
            "entry" => Self::Entry,
            "mid" => Self::Mid,
            "senior" => Self::Senior,
            "executive" => Self::Executive,
            other => {
                warn!(level = other, "Unrecognized experience_level, using mid");
                Self::default()
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Executive => "executive",
        }
    }

    /// Long-form description interpolated into the generation prompts.
    pub fn description(self) -> &'static str {
        match self {
            Self::Entry => "entry-level or junior position (0-2 years experience)",
            Self::Mid => "mid-level position (2-5 years experience)",
            Self::Senior => "senior or advanced position (5+ years experience)",
            Self::Executive => "executive or leadership position",
        }
    }

    /// Human-facing name used in the Q&A document subtitle.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Entry => "Entry Level",
            Self::Mid => "Mid Level",
            Self::Senior => "Senior Level",
            Self::Executive => "Executive Level",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output selection
// ────────────────────────────────────────────────────────────────────────────

/// A document the run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputKind {
    InterviewQa,
    SkillGapReport,
}

impl OutputKind {
    pub const ALL: [OutputKind; 2] = [OutputKind::InterviewQa, OutputKind::SkillGapReport];

    /// The checkbox label the job form submits for this output.
    pub fn label(self) -> &'static str {
        match self {
            Self::InterviewQa => "Interview Q&A",
            Self::SkillGapReport => "Skill Gap Report",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label.trim())
    }
}

/// Parses the `output_selection` value.
///
/// The form submits a JSON array of labels; a plain comma-separated list is
/// accepted as a fallback. Unknown labels are logged and ignored.
pub fn parse_selection(raw: &str) -> BTreeSet<OutputKind> {
    let raw = raw.trim();
    if raw.is_empty() {
        return BTreeSet::new();
    }

    let labels: Vec<String> = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Ok(serde_json::Value::String(s)) => split_labels(&s),
        _ => split_labels(raw),
    };

    labels
        .iter()
        .filter_map(|label| {
            let kind = OutputKind::from_label(label);
            if kind.is_none() && !label.trim().is_empty() {
                warn!(label = %label, "Ignoring unknown output selection");
            }
            kind
        })
        .collect()
}

fn split_labels(s: &str) -> Vec<String> {
    s.split(',').map(|item| item.trim().to_string()).collect()
}
