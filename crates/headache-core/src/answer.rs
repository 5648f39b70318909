/// Answers collected by the questionnaire and the predicate helpers rules use
/// to match against them.
///
/// The working set is keyed by question id; inserting an answer for a question
/// that already has one replaces it (latest write wins). Predicate helpers never
/// fail: a missing answer or an unexpected value shape is simply "no match".
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The value of a single answer.
///
/// Single-choice questions produce `Single`, multi-select questions produce
/// `Multiple`, and numeric scales produce `Scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
    Scale(f64),
}

impl AnswerValue {
    /// Equality for single answers, set membership for multi-select answers.
    /// Numeric answers never match a string value.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            AnswerValue::Single(v) => v == value,
            AnswerValue::Multiple(vs) => vs.iter().any(|v| v == value),
            AnswerValue::Scale(_) => false,
        }
    }

    /// The selected values of a multi-select answer, `None` for other shapes.
    pub fn selections(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Multiple(vs) => Some(vs),
            _ => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Single(value.to_string())
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        AnswerValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Scale(value)
    }
}

/// A user's response to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
    /// Milliseconds since the Unix epoch. Informational only; ordering of
    /// writes, not timestamps, decides which answer wins.
    #[serde(default)]
    pub timestamp: u64,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            timestamp: 0,
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Accepted shapes of an answers document: a list of answers, or a plain
/// object mapping question ids to values.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnswersDocument {
    List(Vec<Answer>),
    Map(BTreeMap<String, AnswerValue>),
}

/// The working set of answers, at most one per question id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an answers document (list or object form).
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let doc: AnswersDocument = serde_json::from_str(json)?;
        Ok(match doc {
            AnswersDocument::List(list) => list.into_iter().collect(),
            AnswersDocument::Map(map) => map
                .into_iter()
                .map(|(id, value)| Answer::new(id, value))
                .collect(),
        })
    }

    /// Record an answer, returning the one it replaced.
    pub fn insert(&mut self, answer: Answer) -> Option<Answer> {
        self.answers.insert(answer.question_id.clone(), answer)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        self.answers.remove(question_id)
    }

    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id).map(|a| &a.value)
    }

    /// Does this question's answer equal (or, for multi-select, contain) `value`?
    pub fn has_value(&self, question_id: &str, value: &str) -> bool {
        self.get(question_id).is_some_and(|a| a.matches(value))
    }

    /// Does this question's answer match any of `values`?
    pub fn has_any_value(&self, question_id: &str, values: &[&str]) -> bool {
        values.iter().any(|v| self.has_value(question_id, v))
    }

    /// Selected values of a multi-select question. Missing answers and
    /// non-list shapes yield `None`.
    pub fn selections(&self, question_id: &str) -> Option<&[String]> {
        self.get(question_id).and_then(AnswerValue::selections)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = Answer>>(iter: T) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.insert(answer);
        }
        set
    }
}

impl Extend<Answer> for AnswerSet {
    fn extend<T: IntoIterator<Item = Answer>>(&mut self, iter: T) {
        for answer in iter {
            self.insert(answer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_value_single_and_multiple() {
        let set: AnswerSet = [
            Answer::new("pain_quality", "pressure"),
            Answer::new("location", vec!["neck", "temples"]),
        ]
        .into_iter()
        .collect();

        assert!(set.has_value("pain_quality", "pressure"));
        assert!(!set.has_value("pain_quality", "throbbing"));
        assert!(set.has_value("location", "neck"));
        assert!(set.has_value("location", "temples"));
        assert!(!set.has_value("location", "face"));
    }

    #[test]
    fn test_missing_and_mismatched_shapes_never_match() {
        let set: AnswerSet = [Answer::new("pain_intensity", 7.0)].into_iter().collect();

        assert!(!set.has_value("pain_intensity", "7"));
        assert!(!set.has_value("nausea", "no"));
        assert!(!set.has_any_value("nausea", &["no", "mild"]));
        assert!(set.selections("pain_intensity").is_none());
        assert!(set.selections("location").is_none());
    }

    #[test]
    fn test_latest_write_wins() {
        let set: AnswerSet = [
            Answer::new("nausea", "no"),
            Answer::new("nausea", "mild"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 1);
        assert!(set.has_value("nausea", "mild"));
        assert!(!set.has_value("nausea", "no"));
    }

    #[test]
    fn test_has_any_value() {
        let set: AnswerSet = [Answer::new("water_intake", "little")].into_iter().collect();
        assert!(set.has_any_value("water_intake", &["none", "little"]));
        assert!(!set.has_any_value("water_intake", &["moderate", "plenty"]));
        assert!(!set.has_any_value("water_intake", &[]));
    }

    #[test]
    fn test_from_json_list_form() {
        let json = r#"[
            {"questionId": "location", "value": ["neck"], "timestamp": 1700000000000},
            {"questionId": "pain_intensity", "value": 6},
            {"questionId": "nausea", "value": "no"}
        ]"#;
        let set = AnswerSet::from_json_str(json).unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.has_value("location", "neck"));
        assert_eq!(set.get("pain_intensity"), Some(&AnswerValue::Scale(6.0)));
        assert_eq!(set.answer("location").unwrap().timestamp, 1_700_000_000_000);
        assert_eq!(set.answer("nausea").unwrap().timestamp, 0);
    }

    #[test]
    fn test_from_json_object_form() {
        let json = r#"{"water_intake": "none", "sinus_symptoms": ["congestion", "runny"]}"#;
        let set = AnswerSet::from_json_str(json).unwrap();

        assert!(set.has_value("water_intake", "none"));
        assert_eq!(
            set.selections("sinus_symptoms"),
            Some(&["congestion".to_string(), "runny".to_string()][..])
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = AnswerSet::from_json_str("\"just a string\"").unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }
}
