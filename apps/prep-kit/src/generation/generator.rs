//! Completion operations: interview Q&A and skill-gap analysis.
//!
//! Neither operation returns an error. Provider failures are converted into
//! `GeneratedText::Failure`, whose text is rendered into the output document
//! exactly like real content, so a run always produces its PDFs.

use tracing::{info, warn};

use crate::generation::prompts::{
    QA_FAILURE_PREFIX, QA_MAX_TOKENS, QA_PROMPT_TEMPLATE, QA_SYSTEM_TEMPLATE, QA_TEMPERATURE,
    SKILL_GAP_FAILURE_PREFIX, SKILL_GAP_MAX_TOKENS, SKILL_GAP_PROMPT_TEMPLATE, SKILL_GAP_SYSTEM,
    SKILL_GAP_TEMPERATURE,
};
use crate::llm_client::{CompletionProvider, CompletionRequest};
use crate::models::{ExperienceLevel, QuestionCount};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of a generation call. Both variants carry renderable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedText {
    /// Text produced by the model.
    Content(String),
    /// Human-readable description of why generation failed.
    Failure(String),
}

impl GeneratedText {
    pub fn as_text(&self) -> &str {
        match self {
            GeneratedText::Content(text) | GeneratedText::Failure(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            GeneratedText::Content(text) | GeneratedText::Failure(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, GeneratedText::Failure(_))
    }
}

/// Inputs for interview Q&A generation.
#[derive(Debug, Clone, Copy)]
pub struct QaRequest<'a> {
    pub job_text: &'a str,
    pub question_count: QuestionCount,
    pub level: ExperienceLevel,
}

/// Inputs for the skill-gap analysis.
#[derive(Debug, Clone, Copy)]
pub struct SkillGapRequest<'a> {
    pub job_text: &'a str,
    pub cv_text: &'a str,
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt construction
// ────────────────────────────────────────────────────────────────────────────

pub fn build_qa_request(request: &QaRequest<'_>) -> CompletionRequest {
    let count = request.question_count.to_string();
    let level = request.level.description();

    CompletionRequest {
        system: QA_SYSTEM_TEMPLATE
            .replace("{num_questions}", &count)
            .replace("{level_description}", level),
        user: QA_PROMPT_TEMPLATE
            .replace("{num_questions}", &count)
            .replace("{level_description}", level)
            .replace("{jd_text}", request.job_text),
        temperature: QA_TEMPERATURE,
        max_tokens: QA_MAX_TOKENS,
    }
}

pub fn build_skill_gap_request(request: &SkillGapRequest<'_>) -> CompletionRequest {
    // Split around the CV slot so job text containing "{cv_text}" is not rewritten.
    let (before_cv, after_cv) = SKILL_GAP_PROMPT_TEMPLATE
        .split_once("{cv_text}")
        .unwrap_or((SKILL_GAP_PROMPT_TEMPLATE, ""));
    let user = format!(
        "{}{}{}",
        before_cv.replace("{jd_text}", request.job_text),
        request.cv_text,
        after_cv
    );

    CompletionRequest {
        system: SKILL_GAP_SYSTEM.to_string(),
        user,
        temperature: SKILL_GAP_TEMPERATURE,
        max_tokens: SKILL_GAP_MAX_TOKENS,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Requests `question_count` Question/Answer pairs for the job description.
pub async fn generate_interview_qa(
    llm: &dyn CompletionProvider,
    request: &QaRequest<'_>,
) -> GeneratedText {
    info!(
        questions = request.question_count.get(),
        level = request.level.as_str(),
        "Generating interview questions"
    );
    complete_or_describe(llm, build_qa_request(request), QA_FAILURE_PREFIX).await
}

/// Requests a Strengths / Gaps / Recommendations / Preparation Tips analysis.
pub async fn generate_skill_gap(
    llm: &dyn CompletionProvider,
    request: &SkillGapRequest<'_>,
) -> GeneratedText {
    info!("Analyzing skill gap");
    complete_or_describe(llm, build_skill_gap_request(request), SKILL_GAP_FAILURE_PREFIX).await
}

async fn complete_or_describe(
    llm: &dyn CompletionProvider,
    request: CompletionRequest,
    failure_prefix: &str,
) -> GeneratedText {
    match llm.complete(&request).await {
        Ok(text) => GeneratedText::Content(text),
        Err(e) => {
            warn!("{failure_prefix}: {e}");
            GeneratedText::Failure(format!("{failure_prefix}: {e}"))
        }
    }
}
