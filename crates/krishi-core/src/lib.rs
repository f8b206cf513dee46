pub mod assistant;
pub mod chat;
pub mod climate;
pub mod config;
pub mod dashboard;
pub mod disease;
pub mod error;
pub mod format;
pub mod i18n;
pub mod language;
pub mod loans;
pub mod msp;
pub mod subsidies;
pub mod voice;

// Re-export main types for convenience
pub use assistant::{Assistant, Topic};
pub use chat::{ChatMessage, ChatSession, Sender};
pub use climate::WeatherData;
pub use config::{Config, Timings};
pub use dashboard::Section;
pub use disease::{DetectionResult, DiseaseScanner, ScanState, Severity};
pub use error::{KrishiError, Result};
pub use i18n::{labels, Labels};
pub use language::{Language, VoiceLanguage};
pub use voice::{VoiceCategory, VoiceQuery, VoiceSession};
