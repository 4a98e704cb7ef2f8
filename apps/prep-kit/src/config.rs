use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;

use crate::models::{parse_selection, ExperienceLevel, OutputKind, QuestionCount};

pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

const JOB_PDF: &str = "job_pdf.pdf";
const CV_PDF: &str = "cv_pdf.pdf";
const OUTPUT_DIR: &str = "output";
const QA_PDF: &str = "interview_questions.pdf";
const SKILL_GAP_PDF: &str = "skill_gap_analysis.pdf";
const ERROR_FILE: &str = "error.txt";

/// Run configuration loaded once from environment variables.
/// Nothing here is required: every field has a default, and a missing API key
/// surfaces later as generated error text rather than a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the uploaded PDFs and the `output/` folder.
    pub work_dir: PathBuf,
    pub outputs: BTreeSet<OutputKind>,
    pub question_count: QuestionCount,
    pub experience_level: ExperienceLevel,
    pub api_key: Option<String>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Builds the config from an arbitrary key lookup. Used by `from_env` and by tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Config {
            work_dir: non_empty("PREP_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            outputs: parse_selection(&lookup("output_selection").unwrap_or_default()),
            question_count: QuestionCount::parse(lookup("num_questions").as_deref()),
            experience_level: ExperienceLevel::from_label(lookup("experience_level").as_deref()),
            api_key: non_empty("OPENAI_API_KEY"),
            llm_base_url: non_empty("LLM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            llm_model: non_empty("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn wants(&self, kind: OutputKind) -> bool {
        self.outputs.contains(&kind)
    }

    pub fn job_pdf(&self) -> PathBuf {
        self.work_dir.join(JOB_PDF)
    }

    pub fn cv_pdf(&self) -> PathBuf {
        self.work_dir.join(CV_PDF)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join(OUTPUT_DIR)
    }

    pub fn qa_output(&self) -> PathBuf {
        self.output_dir().join(QA_PDF)
    }

    pub fn skill_gap_output(&self) -> PathBuf {
        self.output_dir().join(SKILL_GAP_PDF)
    }

    pub fn error_file(&self) -> PathBuf {
        self.output_dir().join(ERROR_FILE)
    }

    /// Test helper: a config rooted at `dir` with the given outputs selected.
    #[cfg(test)]
    pub fn for_dir(dir: &std::path::Path, outputs: &[OutputKind]) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.work_dir = dir.to_path_buf();
        config.outputs = outputs.iter().copied().collect();
        config
    }
}
