//! Keyword responder behind the chat assistant.
//!
//! Topics are tried in a fixed order and the first one whose keyword appears in the
//! message wins. Nothing is ranked or learned.

use std::time::Duration;

use tracing::debug;

use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Wheat,
    Rice,
    Eligibility,
    Apply,
}

impl Topic {
    /// Match order.
    pub fn all() -> [Topic; 4] {
        [Topic::Wheat, Topic::Rice, Topic::Eligibility, Topic::Apply]
    }

    /// The English keyword first, then one per native script.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Wheat => &["wheat", "गेहूं", "గోధుమ", "கோதுமை", "ഗോതമ്പ്"],
            Topic::Rice => &["rice", "चावल", "వరి", "அரிசி", "അരി"],
            Topic::Eligibility => &["eligibility", "पात्रता", "అర్హత", "தகுதி", "യോഗ്യത"],
            Topic::Apply => &["apply", "आवेदन", "దరఖాస్తు", "விண்ணப்பம்", "അപേക്ഷ"],
        }
    }

    fn response(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Topic::Wheat, Language::En) => "The current MSP for wheat is ₹2,275 per quintal (Rabi 2024-25). This is set by the central government. You can sell your crop at the nearest procurement center.",
            (Topic::Wheat, Language::Hi) => "गेहूं का वर्तमान MSP ₹2,275 प्रति क्विंटल है (रबी 2024-25)। यह केंद्र सरकार द्वारा निर्धारित किया गया है। आप अपने नजदीकी खरीद केंद्र पर अपनी फसल बेच सकते हैं।",
            (Topic::Wheat, Language::Te) => "గోధుమ ప్రస్తుత MSP ₹2,275 ప్రతి క్వింటల్ (రబీ 2024-25). ఇది కేంద్ర ప్రభుత్వంచే నిర్ణయించబడింది. మీరు మీ సమీప కొనుగోలు కేంద్రంలో మీ పంటను అమ్మవచ్చు.",
            (Topic::Wheat, Language::Ta) => "கோதுமையின் தற்போதைய MSP ₹2,275 ஒரு குவிண்டலுக்கு (ரபி 2024-25). இது மத்திய அரசால் நிர்ணயிக்கப்பட்டது. உங்கள் அருகிலுள்ள கொள்முதல் மையத்தில் உங்கள் பயிரை விற்கலாம்.",
            (Topic::Wheat, Language::Ml) => "ഗോതമ്പിന്റെ നിലവിലെ MSP ₹2,275 ഒരു ക്വിന്റലിന് (രബി 2024-25). ഇത് കേന്ദ്ര സർക്കാർ നിശ്ചയിച്ചതാണ്. നിങ്ങളുടെ അടുത്തുള്ള വാങ്ങൽ കേന്ദ്രത്തിൽ നിങ്ങളുടെ വിള വിൽക്കാം.",

            (Topic::Rice, Language::En) => "The current MSP for common rice is ₹2,300 per quintal (Kharif 2024). For Grade A rice, it is ₹2,320 per quintal.",
            (Topic::Rice, Language::Hi) => "सामान्य चावल का वर्तमान MSP ₹2,300 प्रति क्विंटल है (खरीफ 2024)। ग्रेड A चावल के लिए यह ₹2,320 प्रति क्विंटल है।",
            (Topic::Rice, Language::Te) => "సాధారణ వరి ప్రస్తుత MSP ₹2,300 ప్రతి క్వింటల్ (ఖరీఫ్ 2024). గ్రేడ్ A వరికి ఇది ₹2,320 ప్రతి క్వింటల్.",
            (Topic::Rice, Language::Ta) => "பொதுவான அரிசியின் தற்போதைய MSP ₹2,300 ஒரு குவிண்டலுக்கு (கரீப் 2024). கிரேட் A அரிசிக்கு இது ₹2,320 ஒரு குவிண்டலுக்கு.",
            (Topic::Rice, Language::Ml) => "സാധാരണ അരിയുടെ നിലവിലെ MSP ₹2,300 ഒരു ക്വിന്റലിന് (ഖരീഫ് 2024). ഗ്രേഡ് A അരിക്ക് ഇത് ₹2,320 ഒരു ക്വിന്റലിന്.",

            (Topic::Eligibility, Language::En) => "Eligibility for MSP scheme: 1) Landowner farmers 2) Tenant farmers 3) Oral lessees. You must have valid land documents or lease agreement.",
            (Topic::Eligibility, Language::Hi) => "MSP योजना के लिए पात्रता: 1) भूमि स्वामी किसान 2) पट्टेदार किसान 3) मौखिक पट्टेदार। आपके पास वैध भूमि दस्तावेज या पट्टा समझौता होना चाहिए।",
            (Topic::Eligibility, Language::Te) => "MSP పథకానికి అర్హత: 1) భూమి యజమాని రైతులు 2) లీజుదారు రైతులు 3) మౌఖిక లీజుదారులు. మీ వద్ద చెల్లుబాటు అయ్యే భూమి పత్రాలు లేదా లీజు ఒప్పందం ఉండాలి.",
            (Topic::Eligibility, Language::Ta) => "MSP திட்டத்திற்கான தகுதி: 1) நில உரிமையாளர் விவசாயிகள் 2) குத்தகைதார விவசாயிகள் 3) வாய்மொழி குத்தகைதாரர்கள். உங்களிடம் செல்லுபடியாகும் நில ஆவணங்கள் அல்லது குத்தகை ஒப்பந்தம் இருக்க வேண்டும்.",
            (Topic::Eligibility, Language::Ml) => "MSP പദ്ധതിക്കുള്ള യോഗ്യത: 1) ഭൂമി ഉടമസ്ഥ കർഷകർ 2) പാട്ടക്കാർ കർഷകർ 3) വാക്കാലുള്ള പാട്ടക്കാർ. നിങ്ങളുടെ പക്കൽ സാധുവായ ഭൂമി രേഖകൾ അല്ലെങ്കിൽ പാട്ട കരാർ ഉണ്ടായിരിക്കണം.",

            (Topic::Apply, Language::En) => "To sell under MSP: 1) Visit your nearest procurement center 2) Bring Aadhaar card and land documents 3) Get crop quality checked 4) Payment within 72 hours.",
            (Topic::Apply, Language::Hi) => "MSP के तहत बेचने के लिए: 1) अपने नजदीकी खरीद केंद्र पर जाएं 2) आधार कार्ड और भूमि दस्तावेज लेकर जाएं 3) फसल की गुणवत्ता जांच कराएं 4) भुगतान 72 घंटों में मिलेगा।",
            (Topic::Apply, Language::Te) => "MSP కింద అమ్మడానికి: 1) మీ సమీప కొనుగోలు కేంద్రానికి వెళ్లండి 2) ఆధార్ కార్డ్ మరియు భూమి పత్రాలను తీసుకెళ్లండి 3) పంట నాణ్యత తనిఖీ చేయించండి 4) చెల్లింపు 72 గంటల్లో వస్తుంది.",
            (Topic::Apply, Language::Ta) => "MSP கீழ் விற்க: 1) உங்கள் அருகிலுள்ள கொள்முதல் மையத்திற்கு செல்லுங்கள் 2) ஆதார் அட்டை மற்றும் நில ஆவணங்களை எடுத்துச் செல்லுங்கள் 3) பயிர் தர சோதனை செய்யுங்கள் 4) பணம் 72 மணி நேரத்தில் கிடைக்கும்.",
            (Topic::Apply, Language::Ml) => "MSP കീഴിൽ വിൽക്കാൻ: 1) നിങ്ങളുടെ അടുത്തുള്ള വാങ്ങൽ കേന്ദ്രത്തിൽ പോകുക 2) ആധാർ കാർഡും ഭൂമി രേഖകളും കൊണ്ടുപോകുക 3) വിള ഗുണനിലവാര പരിശോധന നടത്തുക 4) പണം 72 മണിക്കൂറിനുള്ളിൽ കിട്ടും.",
        }
    }
}

fn default_response(lang: Language) -> &'static str {
    match lang {
        Language::En => "I can provide information about MSP schemes. You can ask me about MSP rates, eligibility, application process, or procurement centers.",
        Language::Hi => "मैं MSP योजनाओं के बारे में जानकारी प्रदान कर सकता हूं। आप मुझसे MSP दरों, पात्रता, आवेदन प्रक्रिया, या खरीद केंद्रों के बारे में पूछ सकते हैं।",
        Language::Te => "నేను MSP పథకాల గురించి సమాచారం అందించగలను. MSP రేట్లు, అర్హత, దరఖాస్తు ప్రక్రియ లేదా కొనుగోలు కేంద్రాల గురించి మీరు నన్ను అడగవచ్చు.",
        Language::Ta => "நான் MSP திட்டங்கள் பற்றிய தகவல்களை வழங்க முடியும். MSP விகிதங்கள், தகுதி, விண்ணப்ப செயல்முறை அல்லது கொள்முதல் மையங்கள் பற்றி என்னிடம் கேட்கலாம்.",
        Language::Ml => "എനിക്ക് MSP പദ്ധതികളെക്കുറിച്ചുള്ള വിവരങ്ങൾ നൽകാൻ കഴിയും. MSP നിരക്കുകൾ, യോഗ്യത, അപേക്ഷാ പ്രക്രിയ അല്ലെങ്കിൽ വാങ്ങൽ കേന്ദ്രങ്ങളെക്കുറിച്ച് നിങ്ങൾക്ക് എന്നോട് ചോദിക്കാം.",
    }
}

/// First topic with a keyword contained in the message, in [`Topic::all`] order.
/// Keywords match in any language, independent of the reply language.
pub fn classify(message: &str) -> Option<Topic> {
    let message = message.to_lowercase();
    Topic::all()
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|k| message.contains(k)))
}

/// Canned reply for `message` in `lang`.
pub fn respond(message: &str, lang: Language) -> &'static str {
    match classify(message) {
        Some(topic) => topic.response(lang),
        None => default_response(lang),
    }
}

/// Answers after a fixed delay, standing in for network latency.
#[derive(Debug, Clone)]
pub struct Assistant {
    delay: Duration,
}

impl Assistant {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn reply(&self, message: &str, lang: Language) -> String {
        tokio::time::sleep(self.delay).await;
        let topic = classify(message);
        debug!(?topic, lang = lang.as_str(), "assistant replied");
        respond(message, lang).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_keyword_is_case_insensitive() {
        assert_eq!(classify("What is the WHEAT price?"), Some(Topic::Wheat));
        assert_eq!(classify("rice msp"), Some(Topic::Rice));
    }

    #[test]
    fn test_native_script_keywords() {
        assert_eq!(classify("गेहूं का भाव"), Some(Topic::Wheat));
        assert_eq!(classify("అర్హత ఏమిటి"), Some(Topic::Eligibility));
        assert_eq!(classify("விண்ணப்பம் எப்படி"), Some(Topic::Apply));
        assert_eq!(classify("അരി"), Some(Topic::Rice));
    }

    #[test]
    fn test_first_match_wins() {
        // Mentions both rice and wheat; wheat is checked first.
        assert_eq!(classify("rice or wheat?"), Some(Topic::Wheat));
        assert_eq!(classify("how to apply, eligibility?"), Some(Topic::Eligibility));
    }

    #[test]
    fn test_no_match_uses_default() {
        assert_eq!(classify("hello there"), None);
        assert!(respond("hello there", Language::En).starts_with("I can provide information"));
    }

    #[test]
    fn test_reply_language_is_independent_of_query_language() {
        let reply = respond("wheat", Language::Hi);
        assert!(reply.starts_with("गेहूं का वर्तमान MSP"));
        let reply = respond("गेहूं", Language::En);
        assert!(reply.contains("₹2,275"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_delay() {
        let assistant = Assistant::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        let reply = assistant.reply("apply", Language::En).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert!(reply.starts_with("To sell under MSP"));
    }
}
