/// Diagnosis entry points.
///
/// One pass: red-flag screen, then scoring, ranking and remedy selection.
/// The pass is synchronous, does no I/O and is total over any answer set.
use std::sync::LazyLock;

use tracing::info;

use crate::answer::{Answer, AnswerSet};
use crate::category::Category;
use crate::disclaimers::LEGAL_DISCLAIMER;
use crate::error::CoreError;
use crate::model::{round_confidence, DiagnosisResult, SecondaryCause, Urgency};
use crate::ranking::rank_causes;
use crate::redflags::{emergency_result, screen};
use crate::remedies::select_remedies;
use crate::rules::RuleBase;
use crate::ruleset::shipped_rules;
use crate::scoring::{calculate_scores, CategoryScores};

const MAX_KEY_FACTORS: usize = 3;

/// The default engine, validated once. A rejected rule table is kept as its
/// message so every caller sees the same failure.
static SHIPPED_ENGINE: LazyLock<Result<DiagnosticEngine, String>> =
    LazyLock::new(|| DiagnosticEngine::shipped().map_err(|e| e.to_string()));

#[derive(Debug, Clone)]
pub struct DiagnosticEngine {
    rules: RuleBase,
}

impl DiagnosticEngine {
    pub fn new(rules: RuleBase) -> Self {
        Self { rules }
    }

    /// Engine over the default rule base.
    pub fn shipped() -> Result<Self, CoreError> {
        Ok(Self::new(shipped_rules()?))
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    pub fn diagnose(&self, answers: &AnswerSet) -> DiagnosisResult {
        let flags = screen(answers);
        if flags.triggered {
            info!(red_flags = flags.descriptions.len(), "red flags present, emergency result");
            return emergency_result(flags);
        }

        let scores = calculate_scores(answers, &self.rules);
        let ranking = rank_causes(&scores);
        let remedies = select_remedies(ranking.primary.category, &ranking.secondary_categories());
        let reasoning = build_reasoning(&scores, ranking.primary.category);

        let result = DiagnosisResult {
            primary_cause: ranking.primary.category,
            confidence: round_confidence(ranking.primary.confidence),
            secondary_causes: ranking
                .secondary
                .iter()
                .map(|s| SecondaryCause {
                    cause: s.category,
                    confidence: round_confidence(s.confidence),
                })
                .collect(),
            reasoning,
            remedies,
            red_flags: Vec::new(),
            disclaimer: LEGAL_DISCLAIMER,
            seek_medical_attention: false,
            urgency: Urgency::None,
        };

        info!(
            primary = %result.primary_cause,
            confidence = result.confidence,
            secondary = result.secondary_causes.len(),
            remedies = result.remedies.len(),
            "diagnosis complete"
        );
        result
    }
}

/// The shared engine over the default rule base.
pub fn shipped_engine() -> Result<&'static DiagnosticEngine, CoreError> {
    SHIPPED_ENGINE
        .as_ref()
        .map_err(|msg| CoreError::InvalidRuleBase(msg.clone()))
}

/// Diagnose with the default rule base. Later answers to the same question
/// replace earlier ones.
///
/// Diagnosis is total; the only error is a default rule table that failed
/// validation.
pub fn run_diagnosis<I>(answers: I) -> Result<DiagnosisResult, CoreError>
where
    I: IntoIterator<Item = Answer>,
{
    let engine = shipped_engine()?;
    let answers: AnswerSet = answers.into_iter().collect();
    Ok(engine.diagnose(&answers))
}

fn build_reasoning(scores: &CategoryScores, primary: Category) -> Vec<String> {
    let mut reasoning = vec![format!(
        "Based on your responses, this appears most likely to be a {} headache.",
        primary.label()
    )];

    let reasons = scores
        .get(primary)
        .map(|s| s.reasons.as_slice())
        .unwrap_or_default();
    if !reasons.is_empty() {
        reasoning.push("Key factors:".to_string());
        reasoning.extend(
            reasons
                .iter()
                .take(MAX_KEY_FACTORS)
                .map(|r| format!("\u{2022} {r}")),
        );
    }

    reasoning
}
