/// The shipped diagnostic rule set.
///
/// All weights are positive. Red-flag screening is not expressed here; it runs
/// before scoring in [`crate::redflags`].
use crate::category::Category;
use crate::error::CoreError;
use crate::rules::{Condition, Rule, RuleBase};

const POOR_SLEEP: &[&str] = &["poor", "very_little", "none"];
const LONG_SCREEN_TIME: &[&str] = &["heavy", "extreme"];

/// The default rule base.
pub fn shipped_rules() -> Result<RuleBase, CoreError> {
    let mut rules = Vec::new();
    rules.extend(tension_rules());
    rules.extend(cervicogenic_rules());
    rules.extend(lifestyle_rules());
    rules.extend(eye_strain_rules());
    rules.extend(migraine_rules());
    rules.extend(sinus_rules());
    rules.extend(other_rules());
    RuleBase::new(rules)
}

fn tension_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "tension_location",
            Condition::any_of("location", &["back", "neck", "temples", "all_over"]),
        )
        .weight(Category::Tension, 0.3, "Location typical of tension headache"),
        Rule::new(
            "tension_quality",
            Condition::any_of("pain_quality", &["pressure", "dull", "tight_band"]),
        )
        .weight(Category::Tension, 0.3, "Pressure/tightness quality suggests tension"),
        Rule::new(
            "tension_neck_relief",
            Condition::equals("neck_relief", "yes_helps"),
        )
        .weight(
            Category::Tension,
            0.4,
            "Relief from neck stretching indicates muscular component",
        ),
        Rule::new(
            "tension_posture",
            Condition::any_of(
                "posture_activity",
                &["desk_work", "phone", "driving", "reading"],
            ),
        )
        .weight(Category::Tension, 0.3, "Activity involves sustained posture"),
        Rule::new(
            "tension_stress",
            Condition::any_of("stress_level", &["high", "extreme"]),
        )
        .weight(Category::Tension, 0.3, "Stress contributes to muscle tension")
        .weight(Category::Stress, 0.4, "High stress is a headache trigger"),
    ]
}

fn cervicogenic_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "cervicogenic_location",
            Condition::any_of("location", &["neck", "back"]),
        )
        .weight(Category::Cervicogenic, 0.4, "Location suggests cervical origin"),
        Rule::new(
            "cervicogenic_relief",
            Condition::equals("neck_relief", "yes_helps"),
        )
        .weight(
            Category::Cervicogenic,
            0.5,
            "Response to neck work suggests cervicogenic",
        ),
        Rule::new(
            "cervicogenic_screen",
            Condition::any_of("screen_time", LONG_SCREEN_TIME),
        )
        .weight(Category::Cervicogenic, 0.3, "Extended screen time strains neck"),
    ]
}

fn lifestyle_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "dehydration_intake",
            Condition::any_of("water_intake", &["none", "little"]),
        )
        .weight(Category::Dehydration, 0.6, "Insufficient fluid intake"),
        Rule::new(
            "dehydration_alcohol",
            Condition::any_of("alcohol_recent", &["several", "heavy"]),
        )
        .weight(Category::Dehydration, 0.4, "Alcohol causes dehydration")
        .weight(Category::Alcohol, 0.6, "Alcohol directly causes headaches"),
        Rule::new(
            "caffeine_withdrawal",
            Condition::any_of("caffeine_today", &["none_unusual", "less"]),
        )
        .weight(
            Category::CaffeineWithdrawal,
            0.7,
            "Reduced caffeine triggers withdrawal headache",
        ),
        Rule::new("caffeine_excess", Condition::equals("caffeine_today", "more")).weight(
            Category::CaffeineExcess,
            0.5,
            "Excess caffeine can cause headaches",
        ),
        Rule::new(
            "hunger_long",
            Condition::any_of("last_meal", &["4_8h", "over_8h", "cant_remember"]),
        )
        .weight(Category::Hunger, 0.6, "Low blood sugar from not eating"),
        Rule::new(
            "sleep_poor",
            Condition::any_of("sleep_last_night", POOR_SLEEP),
        )
        .weight(
            Category::SleepDeprivation,
            0.5,
            "Lack of sleep triggers headaches",
        ),
        Rule::new(
            "sleep_woke_with",
            Condition::all(vec![
                Condition::equals("onset", "woke_with"),
                Condition::any_of("sleep_last_night", POOR_SLEEP),
            ]),
        )
        .weight(
            Category::SleepDeprivation,
            0.7,
            "Waking with headache after poor sleep",
        ),
    ]
}

fn eye_strain_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "eye_strain_location",
            Condition::equals("location", "behind_eyes"),
        )
        .weight(Category::EyeStrain, 0.4, "Location suggests eye strain"),
        Rule::new(
            "eye_strain_screen",
            Condition::all(vec![
                Condition::any_of("screen_time", LONG_SCREEN_TIME),
                Condition::equals("location", "behind_eyes"),
            ]),
        )
        .weight(
            Category::EyeStrain,
            0.6,
            "Screen time with eye pain indicates strain",
        ),
    ]
}

fn migraine_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "migraine_quality",
            Condition::all(vec![
                Condition::equals("pain_quality", "throbbing"),
                Condition::equals("location", "one_side"),
            ]),
        )
        .weight(
            Category::Migraine,
            0.5,
            "Throbbing one-sided pain typical of migraine",
        ),
        Rule::new(
            "migraine_sensitivity",
            Condition::equals("light_sound_sensitivity", "both"),
        )
        .weight(
            Category::Migraine,
            0.5,
            "Photophobia and phonophobia suggest migraine",
        ),
        Rule::new("migraine_nausea", Condition::equals("nausea", "yes_severe")).weight(
            Category::Migraine,
            0.4,
            "Nausea commonly accompanies migraine",
        ),
        Rule::new(
            "migraine_cluster",
            Condition::at_least(
                3,
                vec![
                    Condition::equals("pain_quality", "throbbing"),
                    Condition::equals("location", "one_side"),
                    Condition::any_of("light_sound_sensitivity", &["both", "light_only"]),
                    Condition::any_of("nausea", &["yes_severe", "mild"]),
                ],
            ),
        )
        .weight(Category::Migraine, 0.7, "Multiple migraine criteria met"),
    ]
}

fn sinus_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "sinus_symptoms",
            Condition::any_selected_except("sinus_symptoms", "none"),
        )
        .weight(Category::Sinus, 0.5, "Sinus symptoms present"),
        Rule::new(
            "sinus_location",
            Condition::all(vec![
                Condition::equals("location", "face"),
                Condition::any_selected_except("sinus_symptoms", "none"),
            ]),
        )
        .weight(Category::Sinus, 0.6, "Face pain with sinus symptoms"),
    ]
}

fn other_rules() -> Vec<Rule> {
    vec![
        Rule::new("weather_change", Condition::equals("weather_change", "yes")).weight(
            Category::Weather,
            0.3,
            "Barometric pressure changes trigger headaches",
        ),
        Rule::new(
            "medication_overuse",
            Condition::any_of("medication_frequency", &["frequently", "daily"]),
        )
        .weight(
            Category::MedicationOveruse,
            0.6,
            "Frequent medication use can cause rebound headaches",
        ),
    ]
}
