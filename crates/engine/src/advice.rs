//! Static safety advice per risk tier.

use serde::Serialize;

use crate::heat_index::RiskTier;

/// One safety recommendation: a short title, the advice text, and the icon
/// key the presentation layer maps to its icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdviceEntry {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

const SAFE_ADVICE: [AdviceEntry; 3] = [
    AdviceEntry {
        title: "Enjoy Outdoors",
        text: "Conditions are safe for outdoor activities.",
        icon: "wb-sunny",
    },
    AdviceEntry {
        title: "Stay Active",
        text: "Great weather for exercise or walking.",
        icon: "directions-run",
    },
    AdviceEntry {
        title: "Open Windows",
        text: "Good time to ventilate your home naturally.",
        icon: "window",
    },
];

const CAUTION_ADVICE: [AdviceEntry; 3] = [
    AdviceEntry {
        title: "Drink More Water",
        text: "Heat is rising. Hydrate before you feel thirsty.",
        icon: "water-drop",
    },
    AdviceEntry {
        title: "Seek Shade",
        text: "Take frequent breaks in shaded areas when outdoors.",
        icon: "park",
    },
    AdviceEntry {
        title: "Dress Light",
        text: "Wear light-colored, loose-fitting clothes to reflect heat.",
        icon: "checkroom",
    },
];

// Danger and Extreme share one list: past the Danger threshold the guidance
// is the same, only the urgency differs.
const HIGH_HEAT_ADVICE: [AdviceEntry; 3] = [
    AdviceEntry {
        title: "Stay Indoors",
        text: "Avoid outdoor activities immediately. Stay in air-conditioning.",
        icon: "home",
    },
    AdviceEntry {
        title: "Check Vulnerable",
        text: "Check on elderly neighbors, children, and pets.",
        icon: "people",
    },
    AdviceEntry {
        title: "Find Cooling",
        text: "If you lack AC, go to a public library or cooling center.",
        icon: "ac-unit",
    },
];

/// Advice list for a risk tier. Always three entries.
pub fn advice_for(tier: RiskTier) -> &'static [AdviceEntry] {
    match tier {
        RiskTier::Safe => &SAFE_ADVICE,
        RiskTier::Caution => &CAUTION_ADVICE,
        RiskTier::Danger | RiskTier::Extreme => &HIGH_HEAT_ADVICE,
    }
}
