pub mod answer;
pub mod category;
pub mod disclaimers;
pub mod engine;
pub mod error;
pub mod model;
pub mod questions;
pub mod ranking;
pub mod redflags;
pub mod remedies;
pub mod remedy_table;
pub mod rules;
pub mod ruleset;
pub mod scoring;

pub use answer::{Answer, AnswerSet, AnswerValue};
pub use category::Category;
pub use engine::{run_diagnosis, shipped_engine, DiagnosticEngine};
pub use error::CoreError;
pub use model::{DiagnosisResult, SecondaryCause, Urgency};
