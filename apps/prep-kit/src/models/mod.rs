pub mod request;

pub use request::{parse_selection, ExperienceLevel, OutputKind, QuestionCount};
