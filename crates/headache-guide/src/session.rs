use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use headache_core::questions::{questions, Question, QuestionKind};
use headache_core::redflags::{has_red_flags, NO_SYMPTOMS};
use headache_core::{Answer, AnswerSet, AnswerValue, DiagnosisResult, DiagnosticEngine};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::error::AppError;

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Index of the dangerous-symptoms question; the red-flag screen runs once it
/// has been answered.
const RED_FLAG_CHECKPOINT: usize = 1;

/// What the caller should do after an answer is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Ask the question at the new current index.
    Continue,
    /// No more questions; call [`Session::complete`].
    Ready,
}

/// One pass through the questionnaire.
#[derive(Debug)]
pub struct Session {
    id: String,
    started_at: u64,
    questions: &'static [Question],
    answers: AnswerSet,
    index: usize,
    ready: bool,
    result: Option<DiagnosisResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let session = Self {
            id: new_session_id(),
            started_at: now_millis(),
            questions: questions(),
            answers: AnswerSet::new(),
            index: 0,
            ready: false,
            result: None,
        };
        info!(session = %session.id, questions = session.questions.len(), "session started");
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, `None` once the questionnaire is done.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.ready {
            return None;
        }
        self.questions.get(self.index)
    }

    /// The answer already recorded for the current question, if any.
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question().and_then(|q| self.answers.get(q.id))
    }

    /// Record an answer to the current question and advance.
    ///
    /// Re-answering a question replaces the earlier answer. Once the
    /// dangerous-symptoms question is answered, a positive red-flag screen
    /// ends the questionnaire early.
    pub fn answer(&mut self, value: AnswerValue) -> Result<Progress, AppError> {
        let Some(question) = self.current_question() else {
            return Err(AppError::InvalidInput(
                "the questionnaire is already finished".to_string(),
            ));
        };
        validate(question, &value)?;

        debug!(session = %self.id, question = question.id, "answer recorded");
        self.answers
            .insert(Answer::new(question.id, value).with_timestamp(now_millis()));

        if self.index == RED_FLAG_CHECKPOINT && has_red_flags(&self.answers) {
            warn!(session = %self.id, "red flags reported, ending questionnaire early");
            self.ready = true;
            return Ok(Progress::Ready);
        }

        if self.index + 1 < self.questions.len() {
            self.index += 1;
            Ok(Progress::Continue)
        } else {
            self.ready = true;
            Ok(Progress::Ready)
        }
    }

    /// Step back one question. Does nothing on the first question or once
    /// the questionnaire is done.
    pub fn go_back(&mut self) {
        if self.ready || self.index == 0 {
            return;
        }
        self.index -= 1;
    }

    /// Wait out the presentation delay, then diagnose the answers given so far.
    pub async fn complete(
        &mut self,
        engine: &DiagnosticEngine,
        delay: Duration,
    ) -> &DiagnosisResult {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.ready = true;
        let result = engine.diagnose(&self.answers);
        info!(
            session = %self.id,
            answers = self.answers.len(),
            elapsed_ms = now_millis().saturating_sub(self.started_at),
            emergency = result.is_emergency(),
            "session complete"
        );
        self.result.insert(result)
    }
}

/// Apply one multi-select choice to the current selection.
///
/// Picking a selected value unselects it. Picking the "none" sentinel clears
/// everything else, and picking anything else unselects "none".
pub fn toggle_selection(current: &[String], value: &str) -> Vec<String> {
    if current.iter().any(|v| v == value) {
        return current.iter().filter(|v| *v != value).cloned().collect();
    }
    if value == NO_SYMPTOMS {
        return vec![NO_SYMPTOMS.to_string()];
    }
    let mut next: Vec<String> = current
        .iter()
        .filter(|v| *v != NO_SYMPTOMS)
        .cloned()
        .collect();
    next.push(value.to_string());
    next
}

fn validate(question: &Question, value: &AnswerValue) -> Result<(), AppError> {
    let unknown = |v: &str| {
        AppError::InvalidInput(format!("{v:?} is not an option for {}", question.id))
    };

    match (question.kind, value) {
        (QuestionKind::Single, AnswerValue::Single(v)) => {
            question.option(v).map(|_| ()).ok_or_else(|| unknown(v.as_str()))
        }
        (QuestionKind::Multiple, AnswerValue::Multiple(vs)) => {
            if vs.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "select at least one option for {}",
                    question.id
                )));
            }
            match vs.iter().find(|v| question.option(v).is_none()) {
                Some(v) => Err(unknown(v.as_str())),
                None => Ok(()),
            }
        }
        (QuestionKind::Scale { min, max }, AnswerValue::Scale(x)) => {
            if x.is_finite() && (f64::from(min)..=f64::from(max)).contains(x) {
                Ok(())
            } else {
                Err(AppError::InvalidInput(format!(
                    "{x} is outside {min}..={max} for {}",
                    question.id
                )))
            }
        }
        (kind, _) => Err(AppError::InvalidInput(format!(
            "{} expects a {} answer",
            question.id,
            kind_name(kind)
        ))),
    }
}

fn kind_name(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Single => "single-choice",
        QuestionKind::Multiple => "multiple-choice",
        QuestionKind::Scale { .. } => "numeric",
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_millis() as u64
}

fn new_session_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0));
    let counter = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
    let pid = std::process::id();

    let mut h = Sha256::new();
    h.update(now.as_nanos().to_le_bytes());
    h.update(pid.to_le_bytes());
    h.update(counter.to_le_bytes());
    let digest = h.finalize();
    hex_lower(&digest[..16])
}

fn hex_lower(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use headache_core::Category;

    fn multi(values: &[&str]) -> AnswerValue {
        AnswerValue::from(values.to_vec())
    }

    fn engine() -> DiagnosticEngine {
        DiagnosticEngine::shipped().unwrap()
    }

    /// Answer the current question with its first option (or the scale minimum).
    fn answer_first(session: &mut Session) -> Progress {
        let q = session.current_question().unwrap();
        let value = match q.kind {
            QuestionKind::Single => AnswerValue::from(q.options[0].value),
            QuestionKind::Multiple => multi(&[q.options[0].value]),
            QuestionKind::Scale { min, .. } => AnswerValue::from(f64::from(min)),
        };
        session.answer(value).unwrap()
    }

    #[test]
    fn test_session_ids_are_unique_hex() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id().len(), 32);
        assert!(a.id().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(a.started_at > 0);
    }

    #[test]
    fn test_red_flag_stops_after_second_question() {
        let mut s = Session::new();
        assert_eq!(s.answer("no".into()).unwrap(), Progress::Continue);
        assert_eq!(
            s.answer(multi(&["confusion"])).unwrap(),
            Progress::Ready
        );
        assert!(s.current_question().is_none());
        assert!(matches!(
            s.answer("no".into()),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sudden_onset_is_checked_at_second_question() {
        let mut s = Session::new();
        assert_eq!(s.answer("yes".into()).unwrap(), Progress::Continue);
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.answer(multi(&["none"])).unwrap(), Progress::Ready);
    }

    #[test]
    fn test_full_run_reaches_ready() {
        let mut s = Session::new();
        s.answer("no".into()).unwrap();
        s.answer(multi(&["none"])).unwrap();
        let mut steps = 2;
        while answer_first(&mut s) == Progress::Continue {
            steps += 1;
        }
        assert_eq!(steps + 1, s.total_questions());
        assert_eq!(s.answers().len(), s.total_questions());
    }

    #[test]
    fn test_go_back_and_reanswer() {
        let mut s = Session::new();
        s.go_back();
        assert_eq!(s.current_index(), 0);

        s.answer("no".into()).unwrap();
        s.go_back();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.current_answer(), Some(&AnswerValue::from("no")));

        s.answer("yes".into()).unwrap();
        assert_eq!(s.answers().len(), 1);
        assert!(s.answers().has_value("red_flag_sudden", "yes"));
    }

    #[test]
    fn test_validation() {
        let mut s = Session::new();
        assert!(matches!(s.answer("maybe".into()), Err(AppError::InvalidInput(_))));
        assert!(matches!(s.answer(multi(&["yes"])), Err(AppError::InvalidInput(_))));
        s.answer("no".into()).unwrap();

        assert!(matches!(s.answer(multi(&[])), Err(AppError::InvalidInput(_))));
        assert!(matches!(s.answer(multi(&["none", "rash"])), Err(AppError::InvalidInput(_))));
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn test_scale_bounds() {
        let q = headache_core::questions::find_question("pain_intensity").unwrap();
        assert!(validate(q, &AnswerValue::Scale(1.0)).is_ok());
        assert!(validate(q, &AnswerValue::Scale(10.0)).is_ok());
        assert!(validate(q, &AnswerValue::Scale(0.0)).is_err());
        assert!(validate(q, &AnswerValue::Scale(11.0)).is_err());
        assert!(validate(q, &AnswerValue::Scale(f64::NAN)).is_err());
    }

    #[test]
    fn test_toggle_selection() {
        let picked = toggle_selection(&[], "congestion");
        assert_eq!(picked, vec!["congestion"]);

        let picked = toggle_selection(&picked, "none");
        assert_eq!(picked, vec!["none"]);

        let picked = toggle_selection(&picked, "fever_stiff_neck");
        assert_eq!(picked, vec!["fever_stiff_neck"]);

        let picked = toggle_selection(&picked, "confusion");
        let picked = toggle_selection(&picked, "fever_stiff_neck");
        assert_eq!(picked, vec!["confusion"]);
    }

    #[tokio::test]
    async fn test_complete_emergency() {
        let mut s = Session::new();
        s.answer("yes".into()).unwrap();
        s.answer(multi(&["none"])).unwrap();

        let result = s.complete(&engine(), Duration::ZERO).await;
        assert_eq!(result.primary_cause, Category::RedFlag);
        assert!(result.is_emergency());
        assert!(s.result.is_some());
    }

    #[tokio::test]
    async fn test_delay_does_not_change_result() {
        let engine = engine();
        let mut fast = Session::new();
        let mut slow = Session::new();
        for s in [&mut fast, &mut slow] {
            s.answer("no".into()).unwrap();
            s.answer(multi(&["none"])).unwrap();
            while answer_first(s) == Progress::Continue {}
        }

        let a = fast.complete(&engine, Duration::ZERO).await.clone();
        let b = slow.complete(&engine, Duration::from_millis(5)).await.clone();
        assert_eq!(a, b);
    }
}
