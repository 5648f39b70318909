/// Red-flag screening.
///
/// Runs before any scoring. A positive screen short-circuits diagnosis into the
/// fixed emergency result: no category scoring, no remedies. The screen is a
/// pure function of the answers and may be called with any subset of them.
use tracing::warn;

use crate::answer::{AnswerSet, AnswerValue};
use crate::category::Category;
use crate::disclaimers::RED_FLAG_WARNING;
use crate::model::{DiagnosisResult, Urgency};

pub const SUDDEN_ONSET_QUESTION: &str = "red_flag_sudden";
pub const SUDDEN_ONSET_YES: &str = "yes";
pub const DANGEROUS_SYMPTOMS_QUESTION: &str = "red_flag_symptoms";
pub const NO_SYMPTOMS: &str = "none";

const SUDDEN_ONSET_DESCRIPTION: &str =
    "Sudden severe headache with maximum intensity reached within seconds to minutes";

/// Dangerous-symptom codes and their descriptions, in question order.
pub const SYMPTOM_DESCRIPTIONS: &[(&str, &str)] = &[
    ("fever_stiff_neck", "Fever with stiff neck"),
    ("vision_changes", "Sudden vision changes"),
    ("confusion", "Confusion or difficulty speaking"),
    ("weakness", "Weakness or numbness on one side"),
    ("after_injury", "Headache following head injury"),
];

const EMERGENCY_REASONING: [&str; 2] = [
    "Your symptoms include warning signs that require immediate medical evaluation.",
    "This is not a diagnosis, but these symptoms should be assessed by a healthcare professional promptly.",
];

/// Outcome of a red-flag screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedFlagScreen {
    /// True when sudden onset was reported or any dangerous symptom other than
    /// the "none" sentinel was selected, mapped or not.
    pub triggered: bool,
    /// Descriptions of triggered symptoms: sudden onset first, then symptoms
    /// in selection order. Unmapped symptom codes are dropped.
    pub descriptions: Vec<String>,
    /// Selected symptom codes with no description, in selection order.
    pub unrecognised: Vec<String>,
}

pub fn describe_symptom(code: &str) -> Option<&'static str> {
    SYMPTOM_DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, desc)| *desc)
}

/// Screen the answers for red flags.
pub fn screen(answers: &AnswerSet) -> RedFlagScreen {
    let mut result = RedFlagScreen::default();

    if matches!(
        answers.get(SUDDEN_ONSET_QUESTION),
        Some(AnswerValue::Single(v)) if v == SUDDEN_ONSET_YES
    ) {
        result.triggered = true;
        result.descriptions.push(SUDDEN_ONSET_DESCRIPTION.to_string());
    }

    let selected = answers.selections(DANGEROUS_SYMPTOMS_QUESTION).unwrap_or_default();
    for code in selected.iter().filter(|c| c.as_str() != NO_SYMPTOMS) {
        result.triggered = true;
        match describe_symptom(code) {
            Some(desc) => result.descriptions.push(desc.to_string()),
            None => {
                warn!(code = %code, "unmapped red-flag symptom code, dropping description");
                result.unrecognised.push(code.clone());
            }
        }
    }

    result
}

/// Descriptions of every triggered red flag, in trigger order.
pub fn check_red_flags(answers: &AnswerSet) -> Vec<String> {
    screen(answers).descriptions
}

pub fn has_red_flags(answers: &AnswerSet) -> bool {
    screen(answers).triggered
}

/// The fixed emergency result for a triggered screen. Unrecognised symptom
/// codes get one extra reasoning line so the result never escalates without
/// saying why.
pub fn emergency_result(flags: RedFlagScreen) -> DiagnosisResult {
    let mut reasoning: Vec<String> = EMERGENCY_REASONING.iter().map(|s| s.to_string()).collect();
    if !flags.unrecognised.is_empty() {
        reasoning.push(format!(
            "You also reported an unrecognised warning sign ({}); treat it as urgent.",
            flags.unrecognised.join(", ")
        ));
    }

    DiagnosisResult {
        primary_cause: Category::RedFlag,
        confidence: 100,
        secondary_causes: Vec::new(),
        reasoning,
        remedies: Vec::new(),
        red_flags: flags.descriptions,
        disclaimer: RED_FLAG_WARNING,
        seek_medical_attention: true,
        urgency: Urgency::Immediate,
    }
}
