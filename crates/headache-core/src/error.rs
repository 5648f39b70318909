/// Error types for the diagnostic engine.
///
/// Diagnosis itself is total over any answer set and never fails. These errors
/// cover the edges: decoding answers documents and validating hand-authored
/// rule tables against the question catalogue.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid answers document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid rule base: {0}")]
    InvalidRuleBase(String),

    #[error("unknown question referenced by rule {rule}: {question}")]
    UnknownQuestion { rule: String, question: String },

    #[error("rule {rule} references option {value:?} not offered by question {question}")]
    UnknownOption {
        rule: String,
        question: String,
        value: String,
    },
}
