//! Practice catalogs
//!
//! Fixed languages, scenarios and voices offered on the practice setup
//! screen, and the user's selection among them.

use crate::error::{TotaError, TotaResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    /// BCP-47 tag understood by the tutor agent
    pub id: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scenario {
    pub id: &'static str,
    pub name: &'static str,
    /// Symbol name for the scenario row
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Voice {
    pub id: &'static str,
    pub name: &'static str,
    pub gender: Gender,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        id: "ml-IN",
        name: "malayalam",
        native_name: "മലയാളം",
    },
    Language {
        id: "kn-IN",
        name: "kannada",
        native_name: "ಕನ್ನಡ",
    },
    Language {
        id: "hi-IN",
        name: "hindi",
        native_name: "हिन्दी",
    },
    Language {
        id: "ta-IN",
        name: "tamil",
        native_name: "தமிழ்",
    },
    Language {
        id: "te-IN",
        name: "telugu",
        native_name: "తెలుగు",
    },
];

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "basics",
        name: "basics",
        icon: "textformat.abc",
        description: "greetings, thank you, please, numbers",
    },
    Scenario {
        id: "free",
        name: "free conversation",
        icon: "bubble.left.and.bubble.right",
        description: "open-ended practice",
    },
    Scenario {
        id: "restaurant",
        name: "at a restaurant",
        icon: "fork.knife",
        description: "ordering food, asking for the menu",
    },
    Scenario {
        id: "directions",
        name: "asking for directions",
        icon: "map",
        description: "getting around a city",
    },
    Scenario {
        id: "shopping",
        name: "shopping at a market",
        icon: "bag",
        description: "bargaining, asking prices",
    },
    Scenario {
        id: "introductions",
        name: "meeting someone new",
        icon: "person.2",
        description: "introductions and small talk",
    },
];

pub const VOICES: &[Voice] = &[
    Voice {
        id: "kavya",
        name: "kavya",
        gender: Gender::Female,
    },
    Voice {
        id: "priya",
        name: "priya",
        gender: Gender::Female,
    },
    Voice {
        id: "rohan",
        name: "rohan",
        gender: Gender::Male,
    },
    Voice {
        id: "aditya",
        name: "aditya",
        gender: Gender::Male,
    },
];

pub fn find_language(id: &str) -> TotaResult<&'static Language> {
    LANGUAGES
        .iter()
        .find(|l| l.id == id)
        .ok_or_else(|| TotaError::UnknownSelection(format!("language '{}'", id)))
}

pub fn find_scenario(id: &str) -> TotaResult<&'static Scenario> {
    SCENARIOS
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| TotaError::UnknownSelection(format!("scenario '{}'", id)))
}

pub fn find_voice(id: &str) -> TotaResult<&'static Voice> {
    VOICES
        .iter()
        .find(|v| v.id == id)
        .ok_or_else(|| TotaError::UnknownSelection(format!("voice '{}'", id)))
}

/// Language, scenario and voice chosen for a practice session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSelection {
    pub language: &'static Language,
    pub scenario: &'static Scenario,
    pub voice: &'static Voice,
}

impl Default for SessionSelection {
    fn default() -> Self {
        Self {
            language: &LANGUAGES[0],
            scenario: &SCENARIOS[0],
            voice: &VOICES[0],
        }
    }
}

impl SessionSelection {
    /// Build a selection from catalog ids
    pub fn from_ids(language: &str, scenario: &str, voice: &str) -> TotaResult<Self> {
        Ok(Self {
            language: find_language(language)?,
            scenario: find_scenario(scenario)?,
            voice: find_voice(voice)?,
        })
    }
}
