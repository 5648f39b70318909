/// Weighted-evidence scoring.
///
/// Every rule whose condition holds adds all of its contributions to the
/// matching category accumulators. Contributions are summed as given, negative
/// ones included; reasons are kept in firing order without de-duplication.
use serde::Serialize;
use tracing::debug;

use crate::answer::AnswerSet;
use crate::category::Category;
use crate::rules::RuleBase;

/// Accumulated evidence for one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryScore {
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Scores for every scored category, dense and in canonical category order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores {
    entries: Vec<(Category, CategoryScore)>,
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self {
            entries: Category::ALL_SCORED
                .iter()
                .map(|c| (*c, CategoryScore::default()))
                .collect(),
        }
    }
}

impl CategoryScores {
    /// Zeroed scores for all scored categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `category`. `None` only for the safety sentinel.
    pub fn get(&self, category: Category) -> Option<&CategoryScore> {
        category.scored_index().map(|i| &self.entries[i].1)
    }

    /// Add one contribution. Returns false (and changes nothing) for
    /// categories that are not scored.
    pub fn add(&mut self, category: Category, weight: f64, reason: &str) -> bool {
        let Some(i) = category.scored_index() else {
            return false;
        };
        let entry = &mut self.entries[i].1;
        entry.score += weight;
        entry.reasons.push(reason.to_string());
        true
    }

    /// All categories in canonical order, zero scores included.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryScore)> {
        self.entries.iter().map(|(c, s)| (*c, s))
    }
}

/// Evaluate every rule against the answers and accumulate category scores.
pub fn calculate_scores(answers: &AnswerSet, rules: &RuleBase) -> CategoryScores {
    let mut scores = CategoryScores::new();

    for rule in rules.rules() {
        if !rule.fires(answers) {
            continue;
        }
        debug!(rule = %rule.id, "rule fired");
        for c in &rule.contributions {
            if !scores.add(c.category, c.weight, &c.reason) {
                debug!(
                    rule = %rule.id,
                    category = %c.category,
                    "ignoring contribution to unscored category"
                );
            }
        }
    }

    scores
}
