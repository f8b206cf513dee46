use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{KrishiError, Result};
use crate::language::{Language, VoiceLanguage};

/// Simulated latencies, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
    pub reply_delay_ms: u64,
    pub analysis_delay_ms: u64,
    pub voice_processing_delay_ms: u64,
    pub playback_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            analysis_delay_ms: 3000,
            voice_processing_delay_ms: 2000,
            playback_ms: 3000,
        }
    }
}

impl Timings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn voice_processing_delay(&self) -> Duration {
        Duration::from_millis(self.voice_processing_delay_ms)
    }

    pub fn playback(&self) -> Duration {
        Duration::from_millis(self.playback_ms)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub language: Option<String>,
    pub voice_language: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub timings: Timings,
}

impl Config {
    pub fn new() -> Self {
        Self {
            language: Some(Language::En.as_str().to_string()),
            voice_language: None,
            location: None,
            timings: Timings::default(),
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, config_content)?;
        Ok(())
    }

    pub fn save_language(lang: Language) -> Result<()> {
        Self::save_language_to(&Self::get_config_path()?, lang)
    }

    /// Update only the language in the file at `config_path`. A file that
    /// fails to parse is left untouched and the error is returned.
    pub fn save_language_to(config_path: &Path, lang: Language) -> Result<()> {
        let mut config = Self::load_from(config_path)?;
        config.language = Some(lang.as_str().to_string());
        config.save_to(config_path)
    }

    /// Configured interface language; unknown codes fall back to English.
    pub fn language(&self) -> Language {
        match self.language.as_deref() {
            None => Language::default(),
            Some(code) => Language::from_code(code).unwrap_or_else(|| {
                warn!(code, "unknown language in config, using English");
                Language::default()
            }),
        }
    }

    pub fn voice_language(&self) -> VoiceLanguage {
        self.voice_language
            .as_deref()
            .and_then(VoiceLanguage::from_code)
            .unwrap_or_default()
    }

    pub fn location(&self) -> String {
        self.location
            .clone()
            .unwrap_or_else(|| crate::climate::DEFAULT_LOCATION.to_string())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(KrishiError::NoConfigDir)?;

        Ok(config_dir.join("krishi-jyoti").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.language(), Language::En);
        assert_eq!(config.voice_language(), VoiceLanguage::Hindi);
        assert_eq!(config.location(), "Punjab, India");
        assert_eq!(config.timings, Timings::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::new();
        config.language = Some("ml".to_string());
        config.timings.reply_delay_ms = 0;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.language(), Language::Ml);
        assert_eq!(loaded.timings.reply_delay(), Duration::ZERO);
        assert_eq!(loaded.timings.playback_ms, 3000);
    }

    #[test]
    fn test_partial_timings_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"language":"xx","timings":{"analysis_delay_ms":10}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.language(), Language::En);
        assert_eq!(config.timings.analysis_delay_ms, 10);
        assert_eq!(config.timings.reply_delay_ms, 1500);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(KrishiError::Json(_))));
    }

    #[test]
    fn test_save_language_keeps_other_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"language":"en","location":"Nashik","timings":{"reply_delay_ms":10}}"#,
        )
        .unwrap();

        Config::save_language_to(&path, Language::Ta).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.language(), Language::Ta);
        assert_eq!(config.location(), "Nashik");
        assert_eq!(config.timings.reply_delay_ms, 10);
    }

    #[test]
    fn test_save_language_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("krishi-jyoti").join("config.json");

        Config::save_language_to(&path, Language::Hi).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().language(), Language::Hi);
    }

    #[test]
    fn test_save_language_leaves_malformed_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let original = r#"{"language":"hi","location":"Nashik","timings":{"reply_delay_ms":10},}"#;
        fs::write(&path, original).unwrap();

        let result = Config::save_language_to(&path, Language::Te);

        assert!(matches!(result, Err(KrishiError::Json(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            BufferWriter(Arc::clone(&self.0))
        }
    }

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unknown_language_warns_and_uses_english() {
        let sink = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .with_ansi(false)
            .with_max_level(Level::WARN)
            .finish();

        let mut config = Config::new();
        config.language = Some("xx".to_string());
        let language = tracing::subscriber::with_default(subscriber, || config.language());

        assert_eq!(language, Language::En);
        let text = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"));
        assert!(text.contains("unknown language in config"));
        assert!(text.contains("xx"));
    }

    #[test]
    fn test_known_language_does_not_warn() {
        let sink = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .with_max_level(Level::WARN)
            .finish();

        let mut config = Config::new();
        config.language = Some("Te".to_string());
        let language = tracing::subscriber::with_default(subscriber, || config.language());

        assert_eq!(language, Language::Te);
        assert!(sink.0.lock().unwrap().is_empty());
    }
}
