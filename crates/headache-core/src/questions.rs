/// The fixed, ordered question catalogue presented by the questionnaire.
///
/// The engine only needs question ids and option values to line up with the
/// rule base; [`verify_rule_base`] checks that they do.
use serde::Serialize;

use crate::error::CoreError;
use crate::redflags::{
    DANGEROUS_SYMPTOMS_QUESTION, NO_SYMPTOMS, SUDDEN_ONSET_QUESTION, SUDDEN_ONSET_YES,
    SYMPTOM_DESCRIPTIONS,
};
use crate::rules::RuleBase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum QuestionKind {
    Single,
    Multiple,
    Scale { min: u8, max: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    RedFlags,
    Onset,
    Location,
    Quality,
    Lifestyle,
    Triggers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub subtext: Option<&'static str>,
    pub kind: QuestionKind,
    pub options: &'static [QuestionOption],
    pub section: Section,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

macro_rules! options {
    ($($value:expr => $label:expr),* $(,)?) => {
        &[$(QuestionOption { value: $value, label: $label }),*]
    };
}

macro_rules! single {
    ($id:expr, $text:expr, $options:expr, $section:expr $(,)?) => {
        Question {
            id: $id,
            text: $text,
            subtext: None,
            kind: QuestionKind::Single,
            options: $options,
            section: $section,
        }
    };
}

const QUESTIONS: &[Question] = &[
    Question {
        id: SUDDEN_ONSET_QUESTION,
        text: "Did this headache reach maximum intensity within seconds to minutes?",
        subtext: Some("Like a \"thunderclap\" - the worst headache of your life, instantly"),
        kind: QuestionKind::Single,
        options: options![
            SUDDEN_ONSET_YES => "Yes, it was sudden and severe",
            "no" => "No, it built up gradually",
        ],
        section: Section::RedFlags,
    },
    Question {
        id: DANGEROUS_SYMPTOMS_QUESTION,
        text: "Are you experiencing any of these right now?",
        subtext: Some("Select all that apply"),
        kind: QuestionKind::Multiple,
        options: options![
            "fever_stiff_neck" => "Fever with stiff neck",
            "vision_changes" => "Sudden vision changes or loss",
            "confusion" => "Confusion or difficulty speaking",
            "weakness" => "Weakness or numbness on one side",
            "after_injury" => "This started after a head injury",
            NO_SYMPTOMS => "None of these",
        ],
        section: Section::RedFlags,
    },
    single!(
        "onset",
        "When did this headache start?",
        options![
            "just_now" => "Just now (within the hour)",
            "few_hours" => "A few hours ago",
            "this_morning" => "This morning",
            "woke_with" => "I woke up with it",
            "yesterday" => "Yesterday or longer",
        ],
        Section::Onset,
    ),
    single!(
        "onset_pattern",
        "How did it develop?",
        options![
            "gradual" => "Slowly built up over time",
            "sudden" => "Came on quickly",
            "constant" => "Been constant since it started",
            "waves" => "Comes and goes in waves",
        ],
        Section::Onset,
    ),
    Question {
        id: "location",
        text: "Where is the pain?",
        subtext: Some("Select all areas that apply"),
        kind: QuestionKind::Multiple,
        options: options![
            "forehead" => "Forehead",
            "temples" => "Temples (sides)",
            "behind_eyes" => "Behind the eyes",
            "top" => "Top of head",
            "back" => "Back of head",
            "neck" => "Base of skull / upper neck",
            "one_side" => "One side only",
            "face" => "Face / cheeks / sinuses",
            "all_over" => "All over",
        ],
        section: Section::Location,
    },
    single!(
        "pain_quality",
        "What does the pain feel like?",
        options![
            "throbbing" => "Throbbing / pulsing",
            "pressure" => "Pressure / squeezing",
            "stabbing" => "Stabbing / sharp",
            "dull" => "Dull ache",
            "burning" => "Burning",
            "tight_band" => "Like a tight band around head",
        ],
        Section::Quality,
    ),
    Question {
        id: "pain_intensity",
        text: "How intense is the pain right now?",
        subtext: None,
        kind: QuestionKind::Scale { min: 1, max: 10 },
        options: options![],
        section: Section::Quality,
    },
    single!(
        "water_intake",
        "How much water have you had today?",
        options![
            "none" => "None or almost none",
            "little" => "A glass or two",
            "moderate" => "Been sipping throughout",
            "plenty" => "Plenty - well hydrated",
        ],
        Section::Lifestyle,
    ),
    single!(
        "last_meal",
        "When did you last eat a real meal?",
        options![
            "within_2h" => "Within the last 2 hours",
            "2_4h" => "2-4 hours ago",
            "4_8h" => "4-8 hours ago",
            "over_8h" => "Over 8 hours ago",
            "cant_remember" => "Can't remember",
        ],
        Section::Lifestyle,
    ),
    single!(
        "caffeine_today",
        "How much caffeine have you had today compared to usual?",
        options![
            "none_unusual" => "None (but I usually have some)",
            "less" => "Less than usual",
            "normal" => "About the same as usual",
            "more" => "More than usual",
            "dont_drink" => "I don't drink caffeine",
        ],
        Section::Lifestyle,
    ),
    single!(
        "sleep_last_night",
        "How was your sleep last night?",
        options![
            "great" => "Great - felt rested",
            "ok" => "Okay - not perfect but fine",
            "poor" => "Poor - woke up tired",
            "very_little" => "Very little (under 5 hours)",
            "none" => "Basically none",
        ],
        Section::Lifestyle,
    ),
    single!(
        "screen_time",
        "How much screen time today before the headache?",
        options![
            "minimal" => "Minimal (under 1 hour)",
            "moderate" => "1-3 hours",
            "heavy" => "3-6 hours",
            "extreme" => "6+ hours",
        ],
        Section::Lifestyle,
    ),
    single!(
        "alcohol_recent",
        "Have you consumed alcohol in the last 24 hours?",
        options![
            "no" => "No",
            "one_two" => "1-2 drinks",
            "several" => "Several drinks",
            "heavy" => "Heavy drinking",
        ],
        Section::Lifestyle,
    ),
    single!(
        "neck_relief",
        "Does stretching or massaging your neck provide any relief?",
        options![
            "yes_helps" => "Yes, it helps temporarily",
            "no_change" => "No change",
            "makes_worse" => "Makes it worse",
            "havent_tried" => "Haven't tried",
        ],
        Section::Triggers,
    ),
    Question {
        id: "posture_activity",
        text: "What were you doing before the headache started?",
        subtext: None,
        kind: QuestionKind::Multiple,
        options: options![
            "desk_work" => "Desk/computer work",
            "phone" => "Looking at phone",
            "driving" => "Driving",
            "reading" => "Reading",
            "physical" => "Physical activity/exercise",
            "nothing_special" => "Nothing particular",
        ],
        section: Section::Triggers,
    },
    Question {
        id: "sinus_symptoms",
        text: "Do you have any of these sinus-related symptoms?",
        subtext: None,
        kind: QuestionKind::Multiple,
        options: options![
            "congestion" => "Nasal congestion",
            "pressure_face" => "Pressure in face/cheeks",
            "runny" => "Runny nose",
            "post_nasal" => "Post-nasal drip",
            "none" => "None of these",
        ],
        section: Section::Triggers,
    },
    single!(
        "light_sound_sensitivity",
        "Are light or sound bothering you more than usual?",
        options![
            "both" => "Yes, both light and sound",
            "light_only" => "Light only",
            "sound_only" => "Sound only",
            "no" => "No more than usual",
        ],
        Section::Triggers,
    ),
    single!(
        "nausea",
        "Are you feeling nauseous?",
        options![
            "yes_severe" => "Yes, significantly",
            "mild" => "Mildly",
            "no" => "No",
        ],
        Section::Triggers,
    ),
    single!(
        "stress_level",
        "How would you rate your stress level lately?",
        options![
            "low" => "Low - feeling relaxed",
            "moderate" => "Moderate - some things on my mind",
            "high" => "High - significant stress",
            "extreme" => "Extreme - overwhelmed",
        ],
        Section::Triggers,
    ),
    single!(
        "weather_change",
        "Has there been a significant weather or pressure change recently?",
        options![
            "yes" => "Yes",
            "no" => "No",
            "unsure" => "Not sure",
        ],
        Section::Triggers,
    ),
    single!(
        "medication_frequency",
        "How often do you take pain medication for headaches?",
        options![
            "rarely" => "Rarely (few times a month or less)",
            "weekly" => "1-2 times per week",
            "frequently" => "3+ times per week",
            "daily" => "Almost daily",
        ],
        Section::Triggers,
    ),
];

/// All questions in presentation order.
pub fn questions() -> &'static [Question] {
    QUESTIONS
}

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Check that every question and option value a rule (or the red-flag
/// screen) tests exists in the catalogue.
pub fn verify_rule_base(rules: &RuleBase) -> Result<(), CoreError> {
    let mut refs: Vec<(&str, &str, &str)> = vec![
        ("red_flags", SUDDEN_ONSET_QUESTION, SUDDEN_ONSET_YES),
        ("red_flags", DANGEROUS_SYMPTOMS_QUESTION, NO_SYMPTOMS),
    ];
    refs.extend(
        SYMPTOM_DESCRIPTIONS
            .iter()
            .map(|(code, _)| ("red_flags", DANGEROUS_SYMPTOMS_QUESTION, *code)),
    );
    for rule in rules.rules() {
        refs.extend(
            rule.condition
                .references()
                .into_iter()
                .map(|(question, value)| (rule.id.as_str(), question, value)),
        );
    }

    for (owner, question_id, value) in refs {
        let Some(question) = find_question(question_id) else {
            return Err(CoreError::UnknownQuestion {
                rule: owner.to_string(),
                question: question_id.to_string(),
            });
        };
        if question.option(value).is_none() {
            return Err(CoreError::UnknownOption {
                rule: owner.to_string(),
                question: question_id.to_string(),
                value: value.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::rules::{Condition, Rule};
    use crate::ruleset::shipped_rules;

    #[test]
    fn test_catalogue_order_starts_with_red_flags() {
        let ids: Vec<&str> = questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 21);
        assert_eq!(&ids[..2], &["red_flag_sudden", "red_flag_symptoms"]);
        assert_eq!(ids.last(), Some(&"medication_frequency"));
    }

    #[test]
    fn test_question_ids_unique() {
        let mut ids: Vec<&str> = questions().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions().len());
    }

    #[test]
    fn test_shipped_rules_match_catalogue() {
        verify_rule_base(&shipped_rules().unwrap()).unwrap();
    }

    #[test]
    fn test_verify_reports_unknown_question_and_option() {
        let rules = RuleBase::new(vec![Rule::new(
            "bad_question",
            Condition::equals("mood", "grumpy"),
        )
        .weight(Category::Stress, 0.2, "r")])
        .unwrap();
        assert!(matches!(
            verify_rule_base(&rules),
            Err(CoreError::UnknownQuestion { question, .. }) if question == "mood"
        ));

        let rules = RuleBase::new(vec![Rule::new(
            "bad_option",
            Condition::equals("nausea", "sometimes"),
        )
        .weight(Category::Migraine, 0.2, "r")])
        .unwrap();
        assert!(matches!(
            verify_rule_base(&rules),
            Err(CoreError::UnknownOption { value, .. }) if value == "sometimes"
        ));
    }

    #[test]
    fn test_scale_question_has_bounds() {
        let q = find_question("pain_intensity").unwrap();
        assert_eq!(q.kind, QuestionKind::Scale { min: 1, max: 10 });
        assert!(q.options.is_empty());
    }
}
