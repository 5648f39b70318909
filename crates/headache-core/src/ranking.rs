/// Converts category scores into a primary cause and up to two secondary causes.
///
/// Confidence is relative evidence share plus a baseline, capped so that no
/// result ever reports full certainty:
/// - primary:   min(95, share * 100 + 20)
/// - secondary: min(80, share * 100 + 10)
///
/// where `share` is the category's score over the sum of all positive scores.
/// Values stay in floating point; rounding happens when the result is built.
use crate::category::Category;
use crate::scoring::CategoryScores;

const PRIMARY_BASELINE: f64 = 20.0;
const PRIMARY_CAP: f64 = 95.0;
const SECONDARY_BASELINE: f64 = 10.0;
const SECONDARY_CAP: f64 = 80.0;
/// Secondary causes at or below this raw score are noise.
const SECONDARY_MIN_SCORE: f64 = 0.2;
const MAX_SECONDARY: usize = 2;
const FALLBACK_CONFIDENCE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCause {
    pub category: Category,
    pub score: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub primary: RankedCause,
    pub secondary: Vec<RankedCause>,
}

impl Ranking {
    /// The fallback when no category has positive evidence.
    fn unknown() -> Self {
        Self {
            primary: RankedCause {
                category: Category::Unknown,
                score: 0.0,
                confidence: FALLBACK_CONFIDENCE,
            },
            secondary: Vec::new(),
        }
    }

    pub fn secondary_categories(&self) -> Vec<Category> {
        self.secondary.iter().map(|c| c.category).collect()
    }
}

pub fn rank_causes(scores: &CategoryScores) -> Ranking {
    let mut positive: Vec<(Category, f64)> = scores
        .iter()
        .filter(|(_, s)| s.score > 0.0)
        .map(|(c, s)| (c, s.score))
        .collect();

    if positive.is_empty() {
        return Ranking::unknown();
    }

    // Stable: equal scores keep canonical category order.
    positive.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total: f64 = positive.iter().map(|(_, s)| s).sum();
    let (primary_category, primary_score) = positive[0];

    let primary = RankedCause {
        category: primary_category,
        score: primary_score,
        confidence: (primary_score / total * 100.0 + PRIMARY_BASELINE).min(PRIMARY_CAP),
    };

    let secondary = positive
        .iter()
        .skip(1)
        .take(MAX_SECONDARY)
        .filter(|(_, s)| *s > SECONDARY_MIN_SCORE)
        .map(|&(category, score)| RankedCause {
            category,
            score,
            confidence: (score / total * 100.0 + SECONDARY_BASELINE).min(SECONDARY_CAP),
        })
        .collect();

    Ranking { primary, secondary }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(Category, f64)]) -> CategoryScores {
        let mut s = CategoryScores::new();
        for (c, w) in entries {
            s.add(*c, *w, "r");
        }
        s
    }

    #[test]
    fn test_empty_scores_fall_back_to_unknown() {
        let r = rank_causes(&CategoryScores::new());
        assert_eq!(r.primary.category, Category::Unknown);
        assert_eq!(r.primary.confidence, 50.0);
        assert!(r.secondary.is_empty());
    }

    #[test]
    fn test_single_cause_hits_primary_cap() {
        let r = rank_causes(&scores(&[(Category::Hunger, 0.6)]));
        assert_eq!(r.primary.category, Category::Hunger);
        assert_eq!(r.primary.confidence, 95.0);
        assert!(r.secondary.is_empty());
    }

    #[test]
    fn test_confidence_formula() {
        // total = 1.0 + 0.6 + 0.4 = 2.0
        let r = rank_causes(&scores(&[
            (Category::Dehydration, 1.0),
            (Category::Alcohol, 0.6),
            (Category::Stress, 0.4),
        ]));
        assert_eq!(r.primary.category, Category::Dehydration);
        assert!((r.primary.confidence - 70.0).abs() < 1e-9);
        assert_eq!(r.secondary_categories(), vec![Category::Alcohol, Category::Stress]);
        assert!((r.secondary[0].confidence - 40.0).abs() < 1e-9);
        assert!((r.secondary[1].confidence - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_resolve_in_canonical_order() {
        // Cervicogenic is inserted first but Tension comes first canonically.
        let r = rank_causes(&scores(&[
            (Category::Cervicogenic, 0.5),
            (Category::Tension, 0.5),
        ]));
        assert_eq!(r.primary.category, Category::Tension);
        assert_eq!(r.secondary_categories(), vec![Category::Cervicogenic]);
    }

    #[test]
    fn test_secondary_floor_and_limit() {
        let r = rank_causes(&scores(&[
            (Category::Migraine, 1.0),
            (Category::Weather, 0.2),
            (Category::Sinus, 0.5),
            (Category::Stress, 0.4),
        ]));
        // Rank 2 and 3 are sinus and stress; weather at 0.2 is rank 4 anyway.
        assert_eq!(r.secondary_categories(), vec![Category::Sinus, Category::Stress]);

        let r = rank_causes(&scores(&[(Category::Migraine, 1.0), (Category::Weather, 0.2)]));
        assert!(r.secondary.is_empty());
    }

    #[test]
    fn test_total_uses_all_positive_scores() {
        // Fourth-ranked score still dilutes the primary share.
        let r = rank_causes(&scores(&[
            (Category::Tension, 1.0),
            (Category::Stress, 1.0),
            (Category::Sinus, 1.0),
            (Category::Weather, 1.0),
        ]));
        assert!((r.primary.confidence - 45.0).abs() < 1e-9);
        assert_eq!(r.secondary.len(), 2);
    }

    #[test]
    fn test_negative_net_scores_are_excluded() {
        let r = rank_causes(&scores(&[(Category::Sinus, -0.4), (Category::Weather, 0.3)]));
        assert_eq!(r.primary.category, Category::Weather);
        assert_eq!(r.primary.confidence, 95.0);

        let r = rank_causes(&scores(&[(Category::Sinus, -0.4)]));
        assert_eq!(r.primary.category, Category::Unknown);
    }
}
