/// Declarative diagnostic rules.
///
/// Each rule pairs a [`Condition`] (a small expression tree over the answer
/// set) with the weighted contributions it adds to category scores when the
/// condition holds. One interpreter, [`Condition::evaluate`], handles every
/// rule; there is no per-rule code.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::answer::AnswerSet;
use crate::category::Category;
use crate::error::CoreError;

/// A boolean predicate over an [`AnswerSet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    /// The answer equals `value` (single) or contains it (multi-select).
    Equals { question: String, value: String },
    /// The answer matches any of `values`.
    AnyOf { question: String, values: Vec<String> },
    /// A multi-select answer with at least one selection other than `sentinel`.
    /// Non-list answers never match.
    AnySelectedExcept { question: String, sentinel: String },
    All { conditions: Vec<Condition> },
    AtLeast { count: usize, conditions: Vec<Condition> },
    Not { condition: Box<Condition> },
}

impl Condition {
    pub fn equals(question: &str, value: &str) -> Self {
        Condition::Equals {
            question: question.to_string(),
            value: value.to_string(),
        }
    }

    pub fn any_of(question: &str, values: &[&str]) -> Self {
        Condition::AnyOf {
            question: question.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn any_selected_except(question: &str, sentinel: &str) -> Self {
        Condition::AnySelectedExcept {
            question: question.to_string(),
            sentinel: sentinel.to_string(),
        }
    }

    pub fn all(conditions: Vec<Condition>) -> Self {
        Condition::All { conditions }
    }

    pub fn at_least(count: usize, conditions: Vec<Condition>) -> Self {
        Condition::AtLeast { count, conditions }
    }

    pub fn not(condition: Condition) -> Self {
        Condition::Not {
            condition: Box::new(condition),
        }
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> bool {
        match self {
            Condition::Equals { question, value } => answers.has_value(question, value),
            Condition::AnyOf { question, values } => {
                values.iter().any(|v| answers.has_value(question, v))
            }
            Condition::AnySelectedExcept { question, sentinel } => answers
                .selections(question)
                .is_some_and(|s| s.iter().any(|v| v != sentinel)),
            Condition::All { conditions } => conditions.iter().all(|c| c.evaluate(answers)),
            Condition::AtLeast { count, conditions } => {
                conditions.iter().filter(|c| c.evaluate(answers)).count() >= *count
            }
            Condition::Not { condition } => !condition.evaluate(answers),
        }
    }

    /// Every `(question, option value)` pair this condition tests, in tree order.
    pub fn references(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        match self {
            Condition::Equals { question, value } => out.push((question.as_str(), value.as_str())),
            Condition::AnyOf { question, values } => {
                out.extend(values.iter().map(|v| (question.as_str(), v.as_str())))
            }
            Condition::AnySelectedExcept { question, sentinel } => {
                out.push((question.as_str(), sentinel.as_str()))
            }
            Condition::All { conditions } | Condition::AtLeast { conditions, .. } => {
                for c in conditions {
                    c.collect_references(out);
                }
            }
            Condition::Not { condition } => condition.collect_references(out),
        }
    }
}

/// Evidence a rule adds to one category when it fires.
///
/// Weights are additive. Negative weights are allowed and act as evidence
/// against the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub category: Category,
    pub weight: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub condition: Condition,
    pub contributions: Vec<Contribution>,
}

impl Rule {
    pub fn new(id: &str, condition: Condition) -> Self {
        Self {
            id: id.to_string(),
            condition,
            contributions: Vec::new(),
        }
    }

    pub fn weight(mut self, category: Category, weight: f64, reason: &str) -> Self {
        self.contributions.push(Contribution {
            category,
            weight,
            reason: reason.to_string(),
        });
        self
    }

    pub fn fires(&self, answers: &AnswerSet) -> bool {
        self.condition.evaluate(answers)
    }
}

/// A validated collection of rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Build a rule base, rejecting duplicate ids, rules without
    /// contributions, and weights that are not finite or lie outside [-1, 1].
    pub fn new(rules: Vec<Rule>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(CoreError::InvalidRuleBase(format!(
                    "duplicate rule id {}",
                    rule.id
                )));
            }
            if rule.contributions.is_empty() {
                return Err(CoreError::InvalidRuleBase(format!(
                    "rule {} has no contributions",
                    rule.id
                )));
            }
            for c in &rule.contributions {
                if !c.weight.is_finite() || !(-1.0..=1.0).contains(&c.weight) {
                    return Err(CoreError::InvalidRuleBase(format!(
                        "rule {} has weight {} for {} outside [-1, 1]",
                        rule.id, c.weight, c.category
                    )));
                }
            }
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;

    fn answers(list: Vec<Answer>) -> AnswerSet {
        list.into_iter().collect()
    }

    #[test]
    fn test_any_selected_except() {
        let cond = Condition::any_selected_except("sinus_symptoms", "none");

        assert!(cond.evaluate(&answers(vec![Answer::new(
            "sinus_symptoms",
            vec!["congestion"]
        )])));
        assert!(!cond.evaluate(&answers(vec![Answer::new("sinus_symptoms", vec!["none"])])));
        assert!(!cond.evaluate(&answers(vec![Answer::new("sinus_symptoms", Vec::<&str>::new())])));
        // A single-choice answer is not a selection list.
        assert!(!cond.evaluate(&answers(vec![Answer::new("sinus_symptoms", "congestion")])));
        assert!(!cond.evaluate(&AnswerSet::new()));
    }

    #[test]
    fn test_at_least() {
        let cond = Condition::at_least(
            2,
            vec![
                Condition::equals("pain_quality", "throbbing"),
                Condition::equals("location", "one_side"),
                Condition::any_of("nausea", &["yes_severe", "mild"]),
            ],
        );

        assert!(cond.evaluate(&answers(vec![
            Answer::new("pain_quality", "throbbing"),
            Answer::new("nausea", "mild"),
        ])));
        assert!(!cond.evaluate(&answers(vec![Answer::new("pain_quality", "throbbing")])));
    }

    #[test]
    fn test_all_and_not() {
        let cond = Condition::all(vec![
            Condition::equals("onset", "woke_with"),
            Condition::not(Condition::equals("sleep_last_night", "great")),
        ]);

        assert!(cond.evaluate(&answers(vec![Answer::new("onset", "woke_with")])));
        assert!(!cond.evaluate(&answers(vec![
            Answer::new("onset", "woke_with"),
            Answer::new("sleep_last_night", "great"),
        ])));
    }

    #[test]
    fn test_references_flatten_tree() {
        let cond = Condition::all(vec![
            Condition::any_of("screen_time", &["heavy", "extreme"]),
            Condition::equals("location", "behind_eyes"),
        ]);
        assert_eq!(
            cond.references(),
            vec![
                ("screen_time", "heavy"),
                ("screen_time", "extreme"),
                ("location", "behind_eyes"),
            ]
        );
    }

    #[test]
    fn test_condition_deserializes_from_json() {
        let json = r#"{"op": "any_of", "question": "water_intake", "values": ["none", "little"]}"#;
        let cond: Condition = serde_json::from_str(json).unwrap();
        assert_eq!(cond, Condition::any_of("water_intake", &["none", "little"]));
    }

    #[test]
    fn test_rule_base_rejects_duplicates() {
        let rules = vec![
            Rule::new("a", Condition::equals("q", "v")).weight(Category::Tension, 0.3, "r"),
            Rule::new("a", Condition::equals("q", "w")).weight(Category::Stress, 0.3, "r"),
        ];
        assert!(matches!(
            RuleBase::new(rules),
            Err(CoreError::InvalidRuleBase(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn test_rule_base_rejects_bad_weights_and_empty_rules() {
        let empty = vec![Rule::new("a", Condition::equals("q", "v"))];
        assert!(RuleBase::new(empty).is_err());

        let too_big =
            vec![Rule::new("a", Condition::equals("q", "v")).weight(Category::Tension, 1.5, "r")];
        assert!(RuleBase::new(too_big).is_err());

        let nan = vec![
            Rule::new("a", Condition::equals("q", "v")).weight(Category::Tension, f64::NAN, "r"),
        ];
        assert!(RuleBase::new(nan).is_err());

        let negative = vec![
            Rule::new("a", Condition::equals("q", "v")).weight(Category::Tension, -0.5, "r"),
        ];
        assert!(RuleBase::new(negative).is_ok());
    }
}
