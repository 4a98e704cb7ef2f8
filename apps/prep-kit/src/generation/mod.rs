// Generation: prompt templates and the two completion operations.
// All LLM calls go through llm_client::CompletionProvider; no direct HTTP here.

pub mod generator;
pub mod prompts;

pub use generator::{
    generate_interview_qa, generate_skill_gap, GeneratedText, QaRequest, SkillGapRequest,
};
