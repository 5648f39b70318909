/// Authored remedy content, keyed by category.
use crate::category::Category;
use crate::remedies::{Remedy, RemedyKind};

const NONE: &[&str] = &[];

const TENSION: &[Remedy] = &[
    Remedy {
        id: "tension_stretches",
        title: "Neck and Shoulder Stretches",
        description: "Release muscle tension with targeted stretches",
        time_to_effect: "5-15 minutes",
        steps: &[
            "Chin tucks: Pull chin straight back, hold 5 seconds, repeat 10x",
            "Neck rolls: Slowly roll head in circles, 5 each direction",
            "Shoulder shrugs: Raise shoulders to ears, hold 5 seconds, release",
            "Upper trap stretch: Tilt ear to shoulder, hold 30 seconds each side",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "tension_heat",
        title: "Apply Heat",
        description: "Relax tense muscles with warmth",
        time_to_effect: "10-20 minutes",
        steps: &[
            "Apply heating pad or warm towel to back of neck",
            "Take a hot shower, letting water hit your neck and shoulders",
            "Use a microwaveable heat wrap",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "tension_suboccipital",
        title: "Suboccipital Release",
        description: "Target the muscles at the base of your skull",
        time_to_effect: "5-10 minutes",
        steps: &[
            "Lie on your back",
            "Place two tennis balls or your fists at the base of your skull",
            "Let your head rest on them with gentle pressure",
            "Stay for 2-3 minutes, breathing deeply",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "tension_break",
        title: "Take a Screen Break",
        description: "Give your eyes and posture a rest",
        time_to_effect: "20-30 minutes",
        steps: &[
            "Step away from all screens for at least 20 minutes",
            "Look at distant objects to relax eye muscles",
            "Walk around to reset your posture",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
];

const CERVICOGENIC: &[Remedy] = &[
    Remedy {
        id: "cervicogenic_stretches",
        title: "Cervical Stretches",
        description: "Mobilize your neck to relieve cervicogenic pain",
        time_to_effect: "10-20 minutes",
        steps: &[
            "Chin tucks: 10 repetitions, hold 5 seconds each",
            "Gentle neck rotations: Look left, hold 10 seconds, then right",
            "Levator scapulae stretch: Look into armpit, gentle pull with hand",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "cervicogenic_posture",
        title: "Posture Correction",
        description: "Address the root cause",
        time_to_effect: "Ongoing",
        steps: &[
            "Adjust monitor to eye level",
            "Keep ears aligned over shoulders",
            "Set hourly reminders to check posture",
        ],
        warnings: NONE,
        kind: RemedyKind::Preventive,
    },
];

const STRESS: &[Remedy] = &[
    Remedy {
        id: "stress_breathing",
        title: "Deep Breathing",
        description: "Activate relaxation response",
        time_to_effect: "5-10 minutes",
        steps: &[
            "Breathe in slowly for 4 counts",
            "Hold for 4 counts",
            "Exhale slowly for 6 counts",
            "Repeat for 5-10 cycles",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "stress_walk",
        title: "Brief Walk",
        description: "Physical reset",
        time_to_effect: "15-20 minutes",
        steps: &[
            "Take a short walk outside if possible",
            "Focus on your surroundings, not your thoughts",
            "Even 10 minutes helps",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
];

const DEHYDRATION: &[Remedy] = &[Remedy {
    id: "dehydration_water",
    title: "Rehydrate",
    description: "Replace lost fluids",
    time_to_effect: "30-60 minutes",
    steps: &[
        "Drink 16-24 oz of water over the next hour",
        "Add electrolytes if you have them (or a pinch of salt)",
        "Continue sipping water throughout the day",
    ],
    warnings: &["Don't chug large amounts at once - sip steadily"],
    kind: RemedyKind::Immediate,
}];

const CAFFEINE_WITHDRAWAL: &[Remedy] = &[
    Remedy {
        id: "caffeine_small_dose",
        title: "Have a Small Amount of Caffeine",
        description: "Ease withdrawal symptoms",
        time_to_effect: "15-30 minutes",
        steps: &[
            "Have half your usual coffee/tea",
            "This should provide relief within 30 minutes",
        ],
        warnings: &["Don't overcompensate with extra caffeine"],
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "caffeine_gradual",
        title: "Gradual Reduction Plan",
        description: "Prevent future withdrawal headaches",
        time_to_effect: "Long-term",
        steps: &[
            "Reduce caffeine by 25% per week",
            "Maintain consistent timing of caffeine intake",
            "Switch to half-caf as an intermediate step",
        ],
        warnings: NONE,
        kind: RemedyKind::Preventive,
    },
];

const CAFFEINE_EXCESS: &[Remedy] = &[Remedy {
    id: "caffeine_water",
    title: "Dilute and Wait",
    description: "Help your body process the excess caffeine",
    time_to_effect: "1-2 hours",
    steps: &[
        "Drink plenty of water",
        "Avoid any more caffeine today",
        "Light physical activity can help metabolize it faster",
    ],
    warnings: NONE,
    kind: RemedyKind::Immediate,
}];

const HUNGER: &[Remedy] = &[Remedy {
    id: "hunger_eat",
    title: "Eat Something",
    description: "Stabilize blood sugar",
    time_to_effect: "20-40 minutes",
    steps: &[
        "Eat a balanced snack or meal",
        "Include protein and complex carbs for sustained energy",
        "Avoid pure sugar which can cause a crash",
    ],
    warnings: NONE,
    kind: RemedyKind::Immediate,
}];

const EYE_STRAIN: &[Remedy] = &[
    Remedy {
        id: "eye_20_20_20",
        title: "20-20-20 Rule",
        description: "Rest your eyes",
        time_to_effect: "10-20 minutes",
        steps: &[
            "Every 20 minutes, look at something 20 feet away for 20 seconds",
            "Close your eyes and rest them for a minute",
            "Reduce screen brightness if possible",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "eye_palming",
        title: "Eye Palming",
        description: "Relax eye muscles",
        time_to_effect: "5 minutes",
        steps: &[
            "Rub palms together to warm them",
            "Cup palms over closed eyes (don't press)",
            "Relax in darkness for 1-2 minutes",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
];

const SLEEP: &[Remedy] = &[
    Remedy {
        id: "sleep_nap",
        title: "Power Nap",
        description: "Give your brain a break",
        time_to_effect: "20-30 minutes",
        steps: &[
            "If possible, take a 20-minute nap",
            "Set an alarm to avoid oversleeping",
            "Even resting with eyes closed helps",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "sleep_tonight",
        title: "Prioritize Sleep Tonight",
        description: "Recover properly",
        time_to_effect: "Tonight",
        steps: &[
            "Go to bed earlier than usual",
            "Avoid screens 1 hour before bed",
            "Keep the room cool and dark",
        ],
        warnings: NONE,
        kind: RemedyKind::ShortTerm,
    },
];

const ALCOHOL: &[Remedy] = &[Remedy {
    id: "alcohol_recovery",
    title: "Hangover Recovery",
    description: "Address alcohol-related headache",
    time_to_effect: "1-2 hours",
    steps: &[
        "Rehydrate with water and electrolytes",
        "Eat easily digestible food",
        "Rest if possible",
        "Avoid \"hair of the dog\" - more alcohol makes it worse",
    ],
    warnings: NONE,
    kind: RemedyKind::Immediate,
}];

const MIGRAINE: &[Remedy] = &[
    Remedy {
        id: "migraine_dark",
        title: "Dark, Quiet Room",
        description: "Reduce sensory input",
        time_to_effect: "Varies",
        steps: &[
            "Go to a dark, quiet room",
            "Lie down if possible",
            "Apply cold compress to forehead or back of neck",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "migraine_cold",
        title: "Cold Therapy",
        description: "Constrict blood vessels",
        time_to_effect: "15-20 minutes",
        steps: &[
            "Apply ice pack or cold compress to forehead",
            "Can also try back of neck",
            "Use for 15-20 minutes at a time",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
];

const SINUS: &[Remedy] = &[
    Remedy {
        id: "sinus_steam",
        title: "Steam Inhalation",
        description: "Open up congested sinuses",
        time_to_effect: "10-15 minutes",
        steps: &[
            "Boil water and pour into a bowl",
            "Drape towel over head, lean over bowl",
            "Breathe steam for 5-10 minutes",
            "Add eucalyptus oil if available",
        ],
        warnings: NONE,
        kind: RemedyKind::Immediate,
    },
    Remedy {
        id: "sinus_rinse",
        title: "Nasal Rinse",
        description: "Clear out sinuses",
        time_to_effect: "5-10 minutes",
        steps: &[
            "Use a neti pot or saline spray",
            "Use distilled or previously boiled water only",
            "Repeat 1-2 times daily as needed",
        ],
        warnings: &["Never use tap water directly - must be sterile"],
        kind: RemedyKind::Immediate,
    },
];

const WEATHER: &[Remedy] = &[Remedy {
    id: "weather_general",
    title: "Weather-Related Relief",
    description: "Manage barometric pressure headaches",
    time_to_effect: "Varies",
    steps: &[
        "Stay well-hydrated during weather changes",
        "Consider OTC pain relief if needed",
        "Rest in a comfortable environment",
    ],
    warnings: NONE,
    kind: RemedyKind::Immediate,
}];

const MEDICATION_OVERUSE: &[Remedy] = &[Remedy {
    id: "moh_awareness",
    title: "Medication Overuse Awareness",
    description: "Understanding rebound headaches",
    time_to_effect: "Long-term",
    steps: &[
        "Track your medication use in a headache diary",
        "Aim to use acute medications fewer than 10 days per month",
        "Consider speaking with a doctor about preventive options",
    ],
    warnings: &["Do not stop medications abruptly without medical guidance"],
    kind: RemedyKind::Preventive,
}];

/// General relief measures, used for `unknown` and as the fallback set.
pub const FALLBACK_REMEDIES: &[Remedy] = &[Remedy {
    id: "unknown_general",
    title: "General Relief Measures",
    description: "Try these common remedies",
    time_to_effect: "Varies",
    steps: &[
        "Drink water",
        "Take a break from screens",
        "Rest in a comfortable position",
        "Consider OTC pain relief if appropriate",
    ],
    warnings: NONE,
    kind: RemedyKind::Immediate,
}];

/// Authored remedies for `category`. The safety category has none.
pub fn remedies_for(category: Category) -> &'static [Remedy] {
    match category {
        Category::Tension => TENSION,
        Category::Cervicogenic => CERVICOGENIC,
        Category::Stress => STRESS,
        Category::Dehydration => DEHYDRATION,
        Category::CaffeineWithdrawal => CAFFEINE_WITHDRAWAL,
        Category::CaffeineExcess => CAFFEINE_EXCESS,
        Category::Hunger => HUNGER,
        Category::EyeStrain => EYE_STRAIN,
        Category::SleepDeprivation => SLEEP,
        Category::Alcohol => ALCOHOL,
        Category::Migraine => MIGRAINE,
        Category::Sinus => SINUS,
        Category::Weather => WEATHER,
        Category::MedicationOveruse => MEDICATION_OVERUSE,
        Category::Unknown => FALLBACK_REMEDIES,
        Category::RedFlag => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_remedy_ids_are_globally_unique() {
        let mut seen = HashSet::new();
        for c in Category::ALL_SCORED {
            for r in remedies_for(c) {
                seen.insert(r.id);
            }
        }
        let total: usize = Category::ALL_SCORED
            .iter()
            .map(|c| remedies_for(*c).len())
            .sum();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_every_scored_category_has_remedies() {
        for c in Category::ALL_SCORED {
            assert!(!remedies_for(c).is_empty(), "{c} has no remedies");
        }
        assert!(remedies_for(Category::RedFlag).is_empty());
    }
}
