use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::remedies::Remedy;

/// How quickly the user should act on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    None,
    Soon,
    Today,
    Immediate,
}

/// A contributing cause ranked below the primary one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryCause {
    pub cause: Category,
    /// Rounded percentage, 10..=80.
    pub confidence: u8,
}

/// The outcome of one diagnosis run.
///
/// Two shapes exist: the emergency result (red-flag path) and the normal
/// scored result. Confidence values are rounded here and nowhere earlier.
/// Field names serialize in camelCase like [`crate::Answer`]; enum values
/// stay snake_case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub primary_cause: Category,
    /// Rounded percentage, 0..=100.
    pub confidence: u8,
    pub secondary_causes: Vec<SecondaryCause>,
    pub reasoning: Vec<String>,
    pub remedies: Vec<Remedy>,
    pub red_flags: Vec<String>,
    pub disclaimer: &'static str,
    pub seek_medical_attention: bool,
    pub urgency: Urgency,
}

impl DiagnosisResult {
    pub fn is_emergency(&self) -> bool {
        self.seek_medical_attention
    }
}

/// Round a percentage computed in floating point for presentation.
pub(crate) fn round_confidence(confidence: f64) -> u8 {
    confidence.round().clamp(0.0, 100.0) as u8
}
