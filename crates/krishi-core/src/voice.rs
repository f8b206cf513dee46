//! Simulated voice queries.
//!
//! There is no speech recognition or synthesis in a terminal: stopping a recording
//! produces a canned weather query after a processing delay, and playback is a timer.

use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, info};

use crate::language::VoiceLanguage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceCategory {
    Farming,
    Weather,
    Scheme,
    Disease,
    General,
}

impl VoiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceCategory::Farming => "farming",
            VoiceCategory::Weather => "weather",
            VoiceCategory::Scheme => "scheme",
            VoiceCategory::Disease => "disease",
            VoiceCategory::General => "general",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceQuery {
    pub id: String,
    pub query: String,
    pub response: String,
    pub timestamp: DateTime<Local>,
    pub language: VoiceLanguage,
    pub category: VoiceCategory,
}

const PROCESSED_QUERY: &str = "मौसम की जानकारी चाहिए";
const PROCESSED_RESPONSE: &str = "कल से 3 दिन तक हल्की बारिश की संभावना है। खेत में पानी भरने से बचने के लिए जल निकासी की व्यवस्था करें।";

fn seed_queries(now: DateTime<Local>) -> Vec<VoiceQuery> {
    vec![
        VoiceQuery {
            id: "1".to_string(),
            query: "मेरी गेहूं की फसल में पत्ते पीले हो रहे हैं, क्या करूं?".to_string(),
            response: "पत्तों का पीला होना नाइट्रोजन की कमी या अतिरिक्त पानी का संकेत हो सकता है। तुरंत यूरिया का छिड़काव करें और पानी की मात्रा कम करें।".to_string(),
            timestamp: now,
            language: VoiceLanguage::Hindi,
            category: VoiceCategory::Disease,
        },
        VoiceQuery {
            id: "2".to_string(),
            query: "What is the current MSP for rice?".to_string(),
            response: "The current MSP for common rice is ₹2,300 per quintal for Kharif 2024. You can sell your produce at the nearest procurement center.".to_string(),
            timestamp: now - chrono::Duration::hours(1),
            language: VoiceLanguage::English,
            category: VoiceCategory::Scheme,
        },
    ]
}

/// Build the query that "processing" a recording produces.
pub async fn process_recording(delay: Duration, id: String, language: VoiceLanguage) -> VoiceQuery {
    tokio::time::sleep(delay).await;
    VoiceQuery {
        id,
        query: PROCESSED_QUERY.to_string(),
        response: PROCESSED_RESPONSE.to_string(),
        timestamp: Local::now(),
        language,
        category: VoiceCategory::Weather,
    }
}

/// Wait out the simulated playback.
pub async fn play_back(duration: Duration) {
    tokio::time::sleep(duration).await;
}

pub struct VoiceSession {
    history: Vec<VoiceQuery>,
    language: VoiceLanguage,
    current_query: String,
    recording: bool,
    processing: bool,
    playing: Option<String>,
    processing_delay: Duration,
    playback: Duration,
    next_id: u64,
}

impl VoiceSession {
    pub fn new(language: VoiceLanguage, processing_delay: Duration, playback: Duration) -> Self {
        Self {
            history: seed_queries(Local::now()),
            language,
            current_query: String::new(),
            recording: false,
            processing: false,
            playing: None,
            processing_delay,
            playback,
            next_id: 3,
        }
    }

    /// Newest first.
    pub fn history(&self) -> &[VoiceQuery] {
        &self.history
    }

    pub fn language(&self) -> VoiceLanguage {
        self.language
    }

    pub fn set_language(&mut self, language: VoiceLanguage) {
        self.language = language;
    }

    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    pub fn playing_id(&self) -> Option<&str> {
        self.playing.as_deref()
    }

    /// Returns false if a recording is already running or being processed.
    pub fn start_recording(&mut self) -> bool {
        if self.recording || self.processing {
            return false;
        }
        info!(locale = self.language.speech_locale(), "recording started");
        self.recording = true;
        true
    }

    /// Stop recording. Returns the id and delay for the processing task.
    pub fn stop_recording(&mut self) -> Option<(String, Duration)> {
        if !self.recording {
            return None;
        }
        self.recording = false;
        self.processing = true;
        let id = self.next_id.to_string();
        self.next_id += 1;
        debug!(%id, "processing recording");
        Some((id, self.processing_delay))
    }

    pub fn complete(&mut self, query: VoiceQuery) {
        info!(id = %query.id, category = query.category.as_str(), "voice query processed");
        self.current_query = query.query.clone();
        self.history.insert(0, query);
        self.processing = false;
    }

    /// Start playing a response. Only one plays at a time.
    pub fn play(&mut self, id: &str) -> Option<Duration> {
        if self.playing.is_some() {
            return None;
        }
        let query = self.history.iter().find(|q| q.id == id)?;
        info!(%id, language = query.language.as_str(), "playing response");
        self.playing = Some(id.to_string());
        Some(self.playback)
    }

    pub fn finish_playback(&mut self) {
        self.playing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> VoiceSession {
        VoiceSession::new(
            VoiceLanguage::Hindi,
            Duration::from_millis(2000),
            Duration::from_millis(3000),
        )
    }

    #[test]
    fn test_seeded_history() {
        let s = session();
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history()[0].category, VoiceCategory::Disease);
        assert_eq!(s.history()[1].language, VoiceLanguage::English);
        assert!(s.history()[1].timestamp < s.history()[0].timestamp);
    }

    #[test]
    fn test_stop_without_start_does_nothing() {
        let mut s = session();
        assert!(s.stop_recording().is_none());
        assert!(!s.is_processing());
    }

    #[test]
    fn test_cannot_record_while_processing() {
        let mut s = session();
        assert!(s.start_recording());
        assert!(!s.start_recording());
        s.stop_recording().unwrap();
        assert!(!s.start_recording());
    }

    #[tokio::test(start_paused = true)]
    async fn test_recording_prepends_weather_query() {
        let mut s = session();
        s.set_language(VoiceLanguage::Tamil);
        s.start_recording();
        let (id, delay) = s.stop_recording().unwrap();
        assert_eq!(delay, Duration::from_millis(2000));

        let start = tokio::time::Instant::now();
        let query = process_recording(delay, id, s.language()).await;
        assert!(start.elapsed() >= delay);
        s.complete(query);

        assert_eq!(s.history().len(), 3);
        let newest = &s.history()[0];
        assert_eq!(newest.id, "3");
        assert_eq!(newest.category, VoiceCategory::Weather);
        assert_eq!(newest.language, VoiceLanguage::Tamil);
        assert_eq!(s.current_query(), "मौसम की जानकारी चाहिए");
        assert!(!s.is_processing());
    }

    #[test]
    fn test_only_one_playback_at_a_time() {
        let mut s = session();
        assert_eq!(s.play("1"), Some(Duration::from_millis(3000)));
        assert_eq!(s.playing_id(), Some("1"));
        assert_eq!(s.play("2"), None);
        s.finish_playback();
        assert!(s.play("2").is_some());
        s.finish_playback();
        assert!(s.play("missing").is_none());
    }
}
