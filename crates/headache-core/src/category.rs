use std::fmt;

use serde::{Deserialize, Serialize};

/// A candidate cause of a headache.
///
/// `Unknown` is the fallback when no evidence accumulates; `RedFlag` is the
/// safety sentinel and is never scored by ordinary rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tension,
    Dehydration,
    CaffeineWithdrawal,
    CaffeineExcess,
    Hunger,
    EyeStrain,
    SleepDeprivation,
    Sinus,
    Migraine,
    Cervicogenic,
    Stress,
    MedicationOveruse,
    Weather,
    Alcohol,
    Unknown,
    RedFlag,
}

impl Category {
    /// Scored categories in canonical order. Ranking ties resolve in this order.
    pub const ALL_SCORED: [Category; 15] = [
        Category::Tension,
        Category::Dehydration,
        Category::CaffeineWithdrawal,
        Category::CaffeineExcess,
        Category::Hunger,
        Category::EyeStrain,
        Category::SleepDeprivation,
        Category::Sinus,
        Category::Migraine,
        Category::Cervicogenic,
        Category::Stress,
        Category::MedicationOveruse,
        Category::Weather,
        Category::Alcohol,
        Category::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tension => "tension",
            Category::Dehydration => "dehydration",
            Category::CaffeineWithdrawal => "caffeine_withdrawal",
            Category::CaffeineExcess => "caffeine_excess",
            Category::Hunger => "hunger",
            Category::EyeStrain => "eye_strain",
            Category::SleepDeprivation => "sleep_deprivation",
            Category::Sinus => "sinus",
            Category::Migraine => "migraine",
            Category::Cervicogenic => "cervicogenic",
            Category::Stress => "stress",
            Category::MedicationOveruse => "medication_overuse",
            Category::Weather => "weather",
            Category::Alcohol => "alcohol",
            Category::Unknown => "unknown",
            Category::RedFlag => "red_flag",
        }
    }

    /// Position in [`Category::ALL_SCORED`], `None` for the safety sentinel.
    pub fn scored_index(self) -> Option<usize> {
        match self {
            Category::RedFlag => None,
            other => Category::ALL_SCORED.iter().position(|c| *c == other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Tension => "Tension Headache",
            Category::Dehydration => "Dehydration Headache",
            Category::CaffeineWithdrawal => "Caffeine Withdrawal Headache",
            Category::CaffeineExcess => "Caffeine-Induced Headache",
            Category::Hunger => "Hunger/Blood Sugar Headache",
            Category::EyeStrain => "Eye Strain Headache",
            Category::SleepDeprivation => "Sleep Deprivation Headache",
            Category::Sinus => "Sinus Headache",
            Category::Migraine => "Migraine",
            Category::Cervicogenic => "Cervicogenic (Neck-Related) Headache",
            Category::Stress => "Stress Headache",
            Category::MedicationOveruse => "Medication Overuse Headache",
            Category::Weather => "Barometric Pressure Headache",
            Category::Alcohol => "Alcohol-Related Headache",
            Category::Unknown => "Undetermined Cause",
            Category::RedFlag => "Warning - Seek Medical Care",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Tension => {
                "Caused by muscle tension in the head, neck, and shoulders. Often related to stress, poor posture, or prolonged screen use."
            }
            Category::Dehydration => {
                "Occurs when your body lacks sufficient fluids. The brain can temporarily shrink from fluid loss, causing pain."
            }
            Category::CaffeineWithdrawal => {
                "Happens when regular caffeine users miss or reduce their usual intake. Blood vessels dilate, causing a throbbing headache."
            }
            Category::CaffeineExcess => {
                "Too much caffeine can cause headaches through vasoconstriction and nervous system stimulation."
            }
            Category::Hunger => {
                "Low blood sugar from skipped meals triggers headaches. Your brain needs consistent glucose to function properly."
            }
            Category::EyeStrain => {
                "Results from prolonged focus on screens or reading. Eye muscles fatigue and refer pain to the head."
            }
            Category::SleepDeprivation => {
                "Lack of sleep disrupts pain regulation and can trigger inflammatory responses causing headaches."
            }
            Category::Sinus => {
                "Inflammation or congestion in the sinuses creates pressure and pain in the face and head."
            }
            Category::Migraine => {
                "A neurological condition causing moderate to severe throbbing pain, often with nausea and sensitivity to light/sound."
            }
            Category::Cervicogenic => {
                "Originates from the cervical spine (neck). Poor posture and neck strain refer pain to the head."
            }
            Category::Stress => {
                "Emotional and mental stress causes muscle tension and changes in neurotransmitters that trigger headaches."
            }
            Category::MedicationOveruse => {
                "Frequent use of pain medications can paradoxically cause more headaches as the body becomes dependent."
            }
            Category::Weather => {
                "Changes in barometric pressure can affect sinus pressure and blood flow, triggering headaches in sensitive individuals."
            }
            Category::Alcohol => {
                "Alcohol causes dehydration, inflammation, and blood vessel changes that result in headache."
            }
            Category::Unknown => {
                "The cause isn't clear from the available information. Try general relief measures."
            }
            Category::RedFlag => {
                "Symptoms suggest a potentially serious condition requiring medical evaluation."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
