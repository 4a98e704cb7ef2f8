// All LLM prompt constants for the Generation module.
// Placeholders are replaced with `str::replace` in generator.rs; the
// extracted document text is always substituted last.

/// Sampling settings for interview Q&A generation.
pub const QA_TEMPERATURE: f32 = 0.2;
pub const QA_MAX_TOKENS: u32 = 2500;

/// Sampling settings for skill-gap analysis. Lower temperature: this is an assessment.
pub const SKILL_GAP_TEMPERATURE: f32 = 0.1;
pub const SKILL_GAP_MAX_TOKENS: u32 = 3000;

/// System prompt for interview Q&A.
/// Replace: {num_questions}, {level_description}
pub const QA_SYSTEM_TEMPLATE: &str = r#"You are an expert interviewer and hiring manager. Generate {num_questions} interview questions with detailed, professional answers tailored for a {level_description}.

For each question, provide:
1. The interview question
2. A comprehensive ideal answer that demonstrates expertise
3. Key points the candidate should cover

Format each as:
Question: [question]
Answer: [detailed answer]"#;

/// User prompt for interview Q&A.
/// Replace: {num_questions}, {level_description}, {jd_text}
pub const QA_PROMPT_TEMPLATE: &str = r#"Based on this job description, generate exactly {num_questions} interview questions with ideal candidate answers for a {level_description}:

{jd_text}

Make the questions relevant to the experience level and provide comprehensive answers that would impress interviewers."#;

/// System prompt for the CV vs job description skill-gap analysis. No placeholders.
pub const SKILL_GAP_SYSTEM: &str = r#"You are an expert career coach and recruiter. Analyze the skill gap between a candidate's CV and a job description. Provide a comprehensive skill gap analysis with:

1. STRENGTHS: Skills and experiences that match well
2. GAPS: Missing skills or experience requirements
3. RECOMMENDATIONS: How to bridge the gaps
4. PREPARATION TIPS: Specific areas to focus on for the interview

Format the analysis clearly with sections and bullet points."#;

/// User prompt for the skill-gap analysis.
/// Replace: {jd_text}, {cv_text}
pub const SKILL_GAP_PROMPT_TEMPLATE: &str = r#"JOB DESCRIPTION:
{jd_text}

CANDIDATE CV:
{cv_text}

Please provide a detailed skill gap analysis between the candidate's qualifications and the job requirements."#;

/// Prefixes for failure text that is rendered in place of generated content.
pub const QA_FAILURE_PREFIX: &str = "Error generating questions";
pub const SKILL_GAP_FAILURE_PREFIX: &str = "Error analyzing skill gap";
