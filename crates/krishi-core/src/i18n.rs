//! Translation tables for header, navigation, and chat strings.
//!
//! Section bodies (scheme tables, climate data) are English-only literals; only the
//! chrome around them is translated.

use crate::language::Language;

/// Every user-visible string that changes with the interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub dashboard: &'static str,
    pub schemes: &'static str,
    pub loans: &'static str,
    pub subsidies: &'static str,
    pub disease_detection: &'static str,
    pub voice_support: &'static str,

    pub chat_title: &'static str,
    pub chat_subtitle: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub typing: &'static str,
    pub welcome_message: &'static str,
    pub minimize: &'static str,
    pub maximize: &'static str,
    pub close: &'static str,
}

const EN: Labels = Labels {
    title: "Krishi Jyoti",
    subtitle: "किसान सहायता केंद्र",
    dashboard: "Dashboard",
    schemes: "Schemes",
    loans: "Loans",
    subsidies: "Subsidies",
    disease_detection: "Disease Detection",
    voice_support: "Voice Support",
    chat_title: "MSP Schemes Assistant",
    chat_subtitle: "Ask me about MSP rates, schemes, and eligibility",
    placeholder: "Ask about MSP schemes, rates, eligibility...",
    send: "Send",
    typing: "Assistant is typing...",
    welcome_message: "Hello! I'm here to help you with MSP schemes and rates. You can ask me about current MSP prices, eligibility criteria, application processes, or any other scheme-related questions.",
    minimize: "Minimize",
    maximize: "Maximize",
    close: "Close",
};

const HI: Labels = Labels {
    title: "Krishi Jyoti",
    subtitle: "किसान सहायता केंद्र",
    dashboard: "डैशबोर्ड",
    schemes: "योजनाएं",
    loans: "ऋण",
    subsidies: "सब्सिडी",
    disease_detection: "रोग पहचान",
    voice_support: "आवाज़ सहायता",
    chat_title: "MSP योजना सहायक",
    chat_subtitle: "MSP दरों, योजनाओं और पात्रता के बारे में पूछें",
    placeholder: "MSP योजनाओं, दरों, पात्रता के बारे में पूछें...",
    send: "भेजें",
    typing: "सहायक टाइप कर रहा है...",
    welcome_message: "नमस्ते! मैं MSP योजनाओं और दरों के साथ आपकी सहायता के लिए यहाँ हूँ। आप मुझसे वर्तमान MSP कीमतों, पात्रता मानदंड, आवेदन प्रक्रियाओं, या किसी अन्य योजना-संबंधी प्रश्नों के बारे में पूछ सकते हैं।",
    minimize: "छोटा करें",
    maximize: "बड़ा करें",
    close: "बंद करें",
};

const TE: Labels = Labels {
    title: "Krishi Jyoti",
    subtitle: "రైతు సహాయ కేంద్రం",
    dashboard: "డాష్‌బోర్డ్",
    schemes: "పథకాలు",
    loans: "రుణాలు",
    subsidies: "సబ్సిడీలు",
    disease_detection: "వ్యాధి గుర్తింపు",
    voice_support: "వాయిస్ సపోర్ట్",
    chat_title: "MSP పథకాల సహాయకుడు",
    chat_subtitle: "MSP రేట్లు, పథకాలు మరియు అర్హత గురించి అడగండి",
    placeholder: "MSP పథకాలు, రేట్లు, అర్హత గురించి అడగండి...",
    send: "పంపండి",
    typing: "సహాయకుడు టైప్ చేస్తున్నాడు...",
    welcome_message: "హలో! MSP పథకాలు మరియు రేట్లతో మీకు సహాయం చేయడానికి నేను ఇక్కడ ఉన్నాను. మీరు ప్రస్తుత MSP ధరలు, అర్హత ప్రమాణాలు, దరఖాస్తు ప్రక్రియలు లేదా ఇతర పథకాల సంబంధిత ప్రశ్నల గురించి నన్ను అడగవచ్చు.",
    minimize: "చిన్నదిగా చేయండి",
    maximize: "పెద్దదిగా చేయండి",
    close: "మూసివేయండి",
};

const TA: Labels = Labels {
    title: "Krishi Jyoti",
    subtitle: "விவசாயி உதவி மையம்",
    dashboard: "கட்டுப்பாட்டு பலகை",
    schemes: "திட்டங்கள்",
    loans: "கடன்கள்",
    subsidies: "மானியங்கள்",
    disease_detection: "நோய் கண்டறிதல்",
    voice_support: "குரல் ஆதரவு",
    chat_title: "MSP திட்ட உதவியாளர்",
    chat_subtitle: "MSP விகிதங்கள், திட்டங்கள் மற்றும் தகுதி பற்றி கேளுங்கள்",
    placeholder: "MSP திட்டங்கள், விகிதங்கள், தகுதி பற்றி கேளுங்கள்...",
    send: "அனுப்பு",
    typing: "உதவியாளர் தட்டச்சு செய்கிறார்...",
    welcome_message: "வணக்கம்! MSP திட்டங்கள் மற்றும் விகிதங்களில் உங்களுக்கு உதவ நான் இங்கே இருக்கிறேன். தற்போதைய MSP விலைகள், தகுதி அளவுகோல்கள், விண்ணப்ப செயல்முறைகள் அல்லது வேறு எந்த திட்ட தொடர்பான கேள்விகளையும் என்னிடம் கேட்கலாம்.",
    minimize: "சிறிதாக்கு",
    maximize: "பெரிதாக்கு",
    close: "மூடு",
};

const ML: Labels = Labels {
    title: "Krishi Jyoti",
    subtitle: "കർഷക സഹായ കേന്ദ്രം",
    dashboard: "ഡാഷ്ബോർഡ്",
    schemes: "പദ്ധതികൾ",
    loans: "വായ്പകൾ",
    subsidies: "സബ്സിഡികൾ",
    disease_detection: "രോഗ കണ്ടെത്തൽ",
    voice_support: "വോയ്സ് സപ്പോർട്ട്",
    chat_title: "MSP പദ്ധതി സഹായി",
    chat_subtitle: "MSP നിരക്കുകൾ, പദ്ധതികൾ, യോഗ്യത എന്നിവയെക്കുറിച്ച് ചോദിക്കുക",
    placeholder: "MSP പദ്ധതികൾ, നിരക്കുകൾ, യോഗ്യത എന്നിവയെക്കുറിച്ച് ചോദിക്കുക...",
    send: "അയയ്ക്കുക",
    typing: "സഹായി ടൈപ്പ് ചെയ്യുന്നു...",
    welcome_message: "ഹലോ! MSP പദ്ധതികളും നിരക്കുകളും സംബന്ധിച്ച് നിങ്ങളെ സഹായിക്കാൻ ഞാൻ ഇവിടെയുണ്ട്. നിലവിലെ MSP വിലകൾ, യോഗ്യതാ മാനദണ്ഡങ്ങൾ, അപേക്ഷാ പ്രക്രിയകൾ അല്ലെങ്കിൽ മറ്റേതെങ്കിലും പദ്ധതി സംബന്ധിയായ ചോദ്യങ്ങൾ എന്നിവയെക്കുറിച്ച് നിങ്ങൾക്ക് എന്നോട് ചോദിക്കാം.",
    minimize: "ചെറുതാക്കുക",
    maximize: "വലുതാക്കുക",
    close: "അടയ്ക്കുക",
};

pub fn labels(lang: Language) -> &'static Labels {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
        Language::Ta => &TA,
        Language::Ml => &ML,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_language_has_distinct_navigation() {
        let schemes: Vec<&str> = Language::all().iter().map(|l| labels(*l).schemes).collect();
        for (i, a) in schemes.iter().enumerate() {
            for b in schemes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_title_is_shared_across_languages() {
        for lang in Language::all() {
            assert_eq!(labels(lang).title, "Krishi Jyoti");
        }
    }
}
