use serde::{Deserialize, Serialize};

/// Interface language. Every translation table has an entry for each of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Te,
    Ta,
    Ml,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
            Language::Ta => "ta",
            Language::Ml => "ml",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "te" => Some(Language::Te),
            "ta" => Some(Language::Ta),
            "ml" => Some(Language::Ml),
            _ => None,
        }
    }

    pub fn all() -> Vec<Language> {
        vec![Language::En, Language::Hi, Language::Te, Language::Ta, Language::Ml]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Te => "తెలుగు",
            Language::Ta => "தமிழ்",
            Language::Ml => "മലയാളം",
        }
    }

    /// The next language in picker order, wrapping around.
    pub fn next(&self) -> Language {
        let all = Language::all();
        let i = all.iter().position(|l| l == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }
}

/// Language the voice assistant listens and speaks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceLanguage {
    #[default]
    Hindi,
    English,
    Punjabi,
    Telugu,
    Tamil,
}

impl VoiceLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceLanguage::Hindi => "hindi",
            VoiceLanguage::English => "english",
            VoiceLanguage::Punjabi => "punjabi",
            VoiceLanguage::Telugu => "telugu",
            VoiceLanguage::Tamil => "tamil",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hindi" => Some(VoiceLanguage::Hindi),
            "english" => Some(VoiceLanguage::English),
            "punjabi" => Some(VoiceLanguage::Punjabi),
            "telugu" => Some(VoiceLanguage::Telugu),
            "tamil" => Some(VoiceLanguage::Tamil),
            _ => None,
        }
    }

    pub fn all() -> Vec<VoiceLanguage> {
        vec![
            VoiceLanguage::Hindi,
            VoiceLanguage::English,
            VoiceLanguage::Punjabi,
            VoiceLanguage::Telugu,
            VoiceLanguage::Tamil,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VoiceLanguage::Hindi => "हिन्दी",
            VoiceLanguage::English => "English",
            VoiceLanguage::Punjabi => "ਪੰਜਾਬੀ",
            VoiceLanguage::Telugu => "తెలుగు",
            VoiceLanguage::Tamil => "தமிழ்",
        }
    }

    /// BCP 47 tag used for recognition and synthesis.
    pub fn speech_locale(&self) -> &'static str {
        match self {
            VoiceLanguage::Hindi => "hi-IN",
            _ => "en-IN",
        }
    }
}
