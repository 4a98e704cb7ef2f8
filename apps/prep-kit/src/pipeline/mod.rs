//! One pass from uploaded PDFs to generated documents.
//!
//! # Flow
//!
//! 1. Gate: the job description PDF must exist.
//! 2. Gate: a CV PDF must exist when the skill-gap report is selected.
//! 3. Extract the job text once.
//! 4. Interview Q&A branch, then skill-gap branch, strictly in that order.
//!
//! `run` reports failures as `AppError`. `execute` is the top-level handler:
//! it turns any error into `output/error.txt` and only fails when that file
//! itself cannot be written.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info};

use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::generation::{
    generate_interview_qa, generate_skill_gap, GeneratedText, QaRequest, SkillGapRequest,
};
use crate::layout::{letter_geometry, PageGeometry};
use crate::llm_client::CompletionProvider;
use crate::models::{ExperienceLevel, OutputKind, QuestionCount};
use crate::render::{render_document, RenderJob};

pub const MISSING_JOB_MESSAGE: &str = "Please upload a Job Description PDF file.";
pub const MISSING_CV_MESSAGE: &str = "Skill Gap Analysis requires a CV PDF file.";

const QA_TITLE: &str = "Interview Preparation Guide";
const SKILL_GAP_TITLE: &str = "Skill Gap Analysis Report";
const SKILL_GAP_SUBTITLE: &str = "Candidate vs Job Requirements";

/// A document produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocument {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub pages: usize,
    /// True when the body is a generation failure message rather than model output.
    pub generation_failed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every selected document was written. Empty when nothing was selected.
    Completed(Vec<WrittenDocument>),
    /// The run stopped early; `message` is what was written to `error_file`.
    Failed { message: String, error_file: PathBuf },
}

/// "{n} Questions - {Level Display} Position"
pub fn qa_subtitle(count: QuestionCount, level: ExperienceLevel) -> String {
    format!("{} Questions - {} Position", count, level.display_name())
}

/// Runs the pipeline and converts any failure into the error file.
pub async fn execute(config: &Config, llm: &dyn CompletionProvider) -> anyhow::Result<RunOutcome> {
    match run(config, llm).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            let message = e.user_message().to_string();
            let error_file = config.error_file();
            error!("Run failed: {e}");

            fs::create_dir_all(config.output_dir()).with_context(|| {
                format!("failed to create '{}'", config.output_dir().display())
            })?;
            fs::write(&error_file, &message)
                .with_context(|| format!("failed to write '{}'", error_file.display()))?;
            info!("Wrote {}", error_file.display());

            Ok(RunOutcome::Failed { message, error_file })
        }
    }
}

/// Checks the uploads, then produces each selected document in order.
pub async fn run(config: &Config, llm: &dyn CompletionProvider) -> Result<RunOutcome, AppError> {
    let job_pdf = config.job_pdf();
    if !job_pdf.is_file() {
        return Err(AppError::MissingInput(MISSING_JOB_MESSAGE.to_string()));
    }

    let cv_pdf = config.cv_pdf();
    if config.wants(OutputKind::SkillGapReport) && !cv_pdf.is_file() {
        return Err(AppError::MissingInput(MISSING_CV_MESSAGE.to_string()));
    }

    fs::create_dir_all(config.output_dir())?;

    if config.outputs.is_empty() {
        info!("No outputs selected; nothing to generate");
        return Ok(RunOutcome::Completed(Vec::new()));
    }

    let geometry = letter_geometry();

    info!("Extracting job description from {}", job_pdf.display());
    let job_text = extract_text(&job_pdf)?;

    let mut written = Vec::new();

    if config.wants(OutputKind::InterviewQa) {
        let request = QaRequest {
            job_text: &job_text,
            question_count: config.question_count,
            level: config.experience_level,
        };
        let generated = generate_interview_qa(llm, &request).await;
        let job = RenderJob {
            body: String::new(),
            title: QA_TITLE.to_string(),
            subtitle: Some(qa_subtitle(config.question_count, config.experience_level)),
            output: config.qa_output(),
        };
        written.push(write_document(OutputKind::InterviewQa, job, generated, &geometry)?);
    }

    if config.wants(OutputKind::SkillGapReport) {
        info!("Extracting CV from {}", cv_pdf.display());
        let cv_text = extract_text(&cv_pdf)?;
        let request = SkillGapRequest {
            job_text: &job_text,
            cv_text: &cv_text,
        };
        let generated = generate_skill_gap(llm, &request).await;
        let job = RenderJob {
            body: String::new(),
            title: SKILL_GAP_TITLE.to_string(),
            subtitle: Some(SKILL_GAP_SUBTITLE.to_string()),
            output: config.skill_gap_output(),
        };
        written.push(write_document(OutputKind::SkillGapReport, job, generated, &geometry)?);
    }

    info!("Run complete: {} document(s) written", written.len());
    Ok(RunOutcome::Completed(written))
}

fn write_document(
    kind: OutputKind,
    mut job: RenderJob,
    generated: GeneratedText,
    geometry: &PageGeometry,
) -> Result<WrittenDocument, AppError> {
    let generation_failed = generated.is_failure();
    job.body = generated.into_text();

    let layout = render_document(&job, geometry)?;
    Ok(WrittenDocument {
        kind,
        path: job.output,
        pages: layout.page_count(),
        generation_failed,
    })
}
