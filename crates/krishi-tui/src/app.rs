use std::path::{Path, PathBuf};

use krishi_core::assistant::Assistant;
use krishi_core::climate::WeatherData;
use krishi_core::disease::{self, DetectionResult, DiseaseScanner};
use krishi_core::voice::{self, VoiceQuery, VoiceSession};
use krishi_core::{labels, ChatSession, Config, Labels, Language, Section, Timings, VoiceLanguage};
use ratatui::widgets::ListState;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Which text box receives keystrokes while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Chat,
    ImagePath,
    Location,
}

/// Status-line notification, cleared after a few ticks.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub ticks_left: u8,
}

const NOTICE_TICKS: u8 = 12;

/// Single-line text input with a character cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_pos = char_to_byte_index(&self.text, self.cursor);
            self.text.remove(byte_pos);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let byte_pos = char_to_byte_index(&self.text, self.cursor);
            self.text.remove(byte_pos);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub section: Section,
    pub input_mode: InputMode,
    pub edit_target: EditTarget,
    pub language: Language,
    config_path: Option<PathBuf>,

    // Dashboard
    pub card_state: ListState,

    // Section content scrolling
    pub content_scroll: u16,

    // Chat
    pub show_chat: bool,
    pub chat_minimized: bool,
    pub chat: ChatSession,
    pub chat_input: TextInput,
    pub chat_scroll: u16,
    pub chat_height: u16,
    pub chat_width: u16,
    pub chat_task: Option<JoinHandle<String>>,
    assistant: Assistant,

    // Disease detection
    pub scanner: DiseaseScanner,
    pub image_input: TextInput,
    pub analysis_task: Option<JoinHandle<DetectionResult>>,

    // Voice support
    pub voice: VoiceSession,
    pub voice_state: ListState,
    pub voice_task: Option<JoinHandle<VoiceQuery>>,
    pub playback_task: Option<JoinHandle<()>>,

    // Climate
    pub weather: WeatherData,
    pub location_input: TextInput,

    pub notice: Option<Notice>,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    pub timings: Timings,
}

impl App {
    /// `config_path` is where language changes are saved; `None` keeps them in memory.
    pub fn new(config: &Config, language: Language, config_path: Option<PathBuf>) -> Self {
        let timings = config.timings;

        let mut card_state = ListState::default();
        card_state.select(Some(0));

        let mut voice_state = ListState::default();
        voice_state.select(Some(0));

        let weather = WeatherData {
            location: config.location(),
            ..WeatherData::default()
        };

        Self {
            should_quit: false,
            section: Section::Dashboard,
            input_mode: InputMode::Normal,
            edit_target: EditTarget::Chat,
            language,
            config_path,

            card_state,
            content_scroll: 0,

            show_chat: false,
            chat_minimized: false,
            chat: ChatSession::new(language),
            chat_input: TextInput::default(),
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,
            chat_task: None,
            assistant: Assistant::new(timings.reply_delay()),

            scanner: DiseaseScanner::new(timings.analysis_delay()),
            image_input: TextInput::default(),
            analysis_task: None,

            voice: VoiceSession::new(
                config.voice_language(),
                timings.voice_processing_delay(),
                timings.playback(),
            ),
            voice_state,
            voice_task: None,
            playback_task: None,

            weather,
            location_input: TextInput::default(),

            notice: None,
            animation_frame: 0,
            timings,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        labels(self.language)
    }

    // Navigation
    pub fn open_section(&mut self, section: Section) {
        if self.section != section {
            info!(section = section.slug(), "section opened");
        }
        self.section = section;
        self.content_scroll = 0;
    }

    pub fn next_section(&mut self) {
        let all = Section::all();
        let i = all.iter().position(|s| *s == self.section).unwrap_or(0);
        self.open_section(all[(i + 1) % all.len()]);
    }

    pub fn prev_section(&mut self) {
        let all = Section::all();
        let i = all.iter().position(|s| *s == self.section).unwrap_or(0);
        self.open_section(all[(i + all.len() - 1) % all.len()]);
    }

    pub fn card_down(&mut self) {
        let len = krishi_core::dashboard::CARDS.len();
        let i = self.card_state.selected().unwrap_or(0);
        self.card_state.select(Some((i + 1).min(len - 1)));
    }

    pub fn card_up(&mut self) {
        let i = self.card_state.selected().unwrap_or(0);
        self.card_state.select(Some(i.saturating_sub(1)));
    }

    pub fn open_selected_card(&mut self) {
        if let Some(card) = self
            .card_state
            .selected()
            .and_then(|i| krishi_core::dashboard::CARDS.get(i))
        {
            self.open_section(card.target);
        }
    }

    pub fn scroll_down(&mut self) {
        self.content_scroll = self.content_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(1);
    }

    // Language
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.chat.set_language(language);
        info!(language = language.as_str(), "language changed");

        if let Some(path) = &self.config_path {
            if let Err(e) = Config::save_language_to(path, language) {
                warn!(error = %e, path = %path.display(), "could not save language");
            }
        }
    }

    pub fn cycle_language(&mut self) {
        self.set_language(self.language.next());
    }

    // Notices
    pub fn notify(&mut self, title: &str, body: &str) {
        self.notice = Some(Notice {
            title: title.to_string(),
            body: body.to_string(),
            ticks_left: NOTICE_TICKS,
        });
    }

    /// Tick animation frame and age the notice (called by Tick event)
    pub fn tick(&mut self) {
        if self.is_busy() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.chat.is_typing() || self.analysis_task.is_some() || self.voice.is_processing()
    }

    // Chat
    pub fn toggle_chat(&mut self) {
        self.show_chat = !self.show_chat;
        if !self.show_chat && self.input_mode == InputMode::Editing && self.edit_target == EditTarget::Chat {
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn begin_chat_input(&mut self) {
        self.show_chat = true;
        self.chat_minimized = false;
        self.edit_target = EditTarget::Chat;
        self.input_mode = InputMode::Editing;
    }

    pub fn send_chat(&mut self) {
        let input = self.chat_input.text.clone();
        match self.chat.submit(&input) {
            Ok(Some(text)) => {
                self.chat_input.take();
                let assistant = self.assistant.clone();
                let language = self.language;
                self.chat_task = Some(tokio::spawn(async move {
                    assistant.reply(&text, language).await
                }));
                self.scroll_chat_to_bottom();
            }
            Ok(None) => {}
            Err(e) => self.notify("Please wait", &e.to_string()),
        }
    }

    /// Scroll chat to bottom so the typing indicator is visible
    pub fn scroll_chat_to_bottom(&mut self) {
        let width = if self.chat_width > 0 { self.chat_width } else { 40 };
        let visible_height = if self.chat_height > 0 { self.chat_height } else { 20 };

        let total_lines = crate::ui::chat_line_count(self, width);
        self.chat_scroll = u16::try_from(total_lines)
            .unwrap_or(u16::MAX)
            .saturating_sub(visible_height);
    }

    // Disease detection
    pub fn begin_image_input(&mut self) {
        self.edit_target = EditTarget::ImagePath;
        self.input_mode = InputMode::Editing;
    }

    pub fn select_image(&mut self) {
        let raw = self.image_input.text.trim().to_string();
        if raw.is_empty() {
            return;
        }
        let path = expand_home(&raw);
        match self.scanner.select_image(&path) {
            Ok(()) => {
                let name = self
                    .scanner
                    .image()
                    .map(|i| i.name.clone())
                    .unwrap_or_default();
                self.notify("Image selected", &name);
            }
            Err(e) => self.notify("Cannot use that file", &e.to_string()),
        }
    }

    pub fn analyze(&mut self) {
        match self.scanner.begin() {
            Ok(delay) => {
                self.analysis_task = Some(tokio::spawn(disease::run_analysis(delay)));
            }
            Err(e) => self.notify("Cannot analyze", &e.to_string()),
        }
    }

    // Voice support
    pub fn toggle_recording(&mut self) {
        if self.voice.is_recording() {
            if let Some((id, delay)) = self.voice.stop_recording() {
                let language = self.voice.language();
                self.voice_task = Some(tokio::spawn(voice::process_recording(delay, id, language)));
            }
        } else if self.voice.start_recording() {
            self.notify(
                "Recording Started",
                "Speak your question clearly. We support Hindi, English, and regional languages.",
            );
        }
    }

    pub fn cycle_voice_language(&mut self) {
        let all = VoiceLanguage::all();
        let i = all.iter().position(|l| *l == self.voice.language()).unwrap_or(0);
        self.voice.set_language(all[(i + 1) % all.len()]);
    }

    pub fn voice_down(&mut self) {
        let len = self.voice.history().len();
        if len > 0 {
            let i = self.voice_state.selected().unwrap_or(0);
            self.voice_state.select(Some((i + 1).min(len - 1)));
        }
    }

    pub fn voice_up(&mut self) {
        let i = self.voice_state.selected().unwrap_or(0);
        self.voice_state.select(Some(i.saturating_sub(1)));
    }

    pub fn play_selected(&mut self) {
        let Some(query) = self
            .voice_state
            .selected()
            .and_then(|i| self.voice.history().get(i))
            .cloned()
        else {
            return;
        };
        if let Some(duration) = self.voice.play(&query.id) {
            self.playback_task = Some(tokio::spawn(voice::play_back(duration)));
            self.notify(
                "Playing Response",
                &format!("Playing in {}", query.language.as_str()),
            );
        }
    }

    // Climate
    pub fn begin_location_input(&mut self) {
        self.location_input = TextInput::with_text(&self.weather.location);
        self.edit_target = EditTarget::Location;
        self.input_mode = InputMode::Editing;
    }

    pub fn update_location(&mut self) {
        let location = self.location_input.take();
        let location = location.trim();
        if !location.is_empty() {
            self.weather.location = location.to_string();
        }
    }

    pub fn update_weather(&mut self) {
        self.weather.drift(&mut rand::thread_rng());
    }

    /// Collect finished background tasks.
    pub async fn poll_tasks(&mut self) {
        if self.chat_task.as_ref().is_some_and(|t| t.is_finished()) {
            if let Some(task) = self.chat_task.take() {
                match task.await {
                    Ok(reply) => self.chat.receive(reply),
                    Err(e) => warn!(error = %e, "chat reply task failed"),
                }
                self.scroll_chat_to_bottom();
            }
        }

        if self.analysis_task.as_ref().is_some_and(|t| t.is_finished()) {
            if let Some(task) = self.analysis_task.take() {
                match task.await {
                    Ok(result) => {
                        self.scanner.finish(result);
                        self.notify(
                            "Analysis Complete",
                            "Plant disease has been successfully identified",
                        );
                    }
                    Err(e) => warn!(error = %e, "analysis task failed"),
                }
            }
        }

        if self.voice_task.as_ref().is_some_and(|t| t.is_finished()) {
            if let Some(task) = self.voice_task.take() {
                match task.await {
                    Ok(query) => {
                        self.voice.complete(query);
                        self.voice_state.select(Some(0));
                        self.notify("Query Processed", "Voice response is ready to play");
                    }
                    Err(e) => warn!(error = %e, "voice task failed"),
                }
            }
        }

        if self.playback_task.as_ref().is_some_and(|t| t.is_finished()) {
            self.playback_task = None;
            self.voice.finish_playback();
        }
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    Path::new(raw).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_core::{ScanState, Sender};
    use std::time::Duration;
    use tempfile::TempDir;

    fn test_app() -> App {
        App::new(&Config::new(), Language::En, None)
    }

    /// Advance past `wait`, let spawned timers fire, then collect results.
    async fn settle(app: &mut App, wait: Duration) {
        tokio::time::sleep(wait).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        app.poll_tasks().await;
    }

    #[test]
    fn test_text_input_handles_multibyte() {
        let mut input = TextInput::default();
        for c in "गेहूं".chars() {
            input.insert(c);
        }
        let chars = input.text.chars().count();
        input.left();
        input.backspace();
        input.end();
        input.insert('!');
        assert_eq!(input.text.chars().count(), chars);
        assert!(input.text.ends_with('!'));

        let taken = input.take();
        assert!(taken.ends_with('!'));
        assert!(input.text.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_section_cycling_wraps() {
        let mut app = test_app();
        app.prev_section();
        assert_eq!(app.section, Section::Support);
        app.next_section();
        assert_eq!(app.section, Section::Dashboard);
    }

    #[test]
    fn test_dashboard_card_opens_its_section() {
        let mut app = test_app();
        app.card_down();
        app.card_down();
        app.open_selected_card();
        assert_eq!(app.section, Section::Subsidies);
    }

    #[test]
    fn test_language_change_is_saved_to_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut app = App::new(&Config::new(), Language::En, Some(path.clone()));

        app.cycle_language();
        assert_eq!(app.language, Language::Hi);
        assert_eq!(app.labels().schemes, "योजनाएं");
        assert_eq!(Config::load_from(&path).unwrap().language(), Language::Hi);
    }

    #[test]
    fn test_language_change_keeps_unreadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let original = r#"{"language":"hi","location":"Nashik","timings":{"reply_delay_ms":10},}"#;
        std::fs::write(&path, original).unwrap();
        let mut app = App::new(&Config::new(), Language::En, Some(path.clone()));

        app.cycle_language();

        assert_eq!(app.language, Language::Hi);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_reply_arrives_after_delay() {
        let mut app = test_app();
        app.chat_input = TextInput::with_text("wheat price?");
        app.send_chat();

        assert_eq!(app.chat.messages().len(), 2);
        assert!(app.chat.is_typing());
        assert!(app.chat_input.text.is_empty());

        settle(&mut app, Duration::from_millis(1000)).await;
        assert!(app.chat.is_typing());

        settle(&mut app, Duration::from_millis(600)).await;
        assert!(!app.chat.is_typing());
        let last = app.chat.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("₹2,275"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_chat_input_sends_nothing() {
        let mut app = test_app();
        app.chat_input = TextInput::with_text("   ");
        app.send_chat();
        assert!(app.chat_task.is_none());
        assert_eq!(app.chat.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_image_then_analyze_shows_result() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("leaf.png");
        std::fs::write(&path, b"png").unwrap();

        let mut app = test_app();
        app.analyze();
        assert!(app.analysis_task.is_none());
        assert_eq!(app.notice.as_ref().map(|n| n.title.as_str()), Some("Cannot analyze"));

        app.image_input = TextInput::with_text(path.to_str().unwrap());
        app.select_image();
        assert_eq!(app.scanner.state(), ScanState::Ready);

        app.analyze();
        assert_eq!(app.scanner.state(), ScanState::Analyzing);
        settle(&mut app, Duration::from_millis(3100)).await;
        assert_eq!(app.scanner.state(), ScanState::Done);
        assert_eq!(app.scanner.result().unwrap().disease, "Late Blight (Tomato)");
        assert_eq!(app.notice.as_ref().map(|n| n.title.as_str()), Some("Analysis Complete"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_voice_recording_adds_query() {
        let mut app = test_app();
        app.toggle_recording();
        assert!(app.voice.is_recording());
        app.toggle_recording();
        assert!(app.voice.is_processing());

        settle(&mut app, Duration::from_millis(2100)).await;
        assert_eq!(app.voice.history().len(), 3);
        assert_eq!(app.voice.current_query(), "मौसम की जानकारी चाहिए");
        assert_eq!(app.voice_state.selected(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_playback_clears_after_duration() {
        let mut app = test_app();
        app.play_selected();
        assert!(app.voice.is_playing());
        settle(&mut app, Duration::from_millis(3100)).await;
        assert!(!app.voice.is_playing());
    }

    #[test]
    fn test_location_update_ignores_blank() {
        let mut app = test_app();
        app.begin_location_input();
        assert_eq!(app.location_input.text, "Punjab, India");
        app.location_input = TextInput::with_text("  ");
        app.update_location();
        assert_eq!(app.weather.location, "Punjab, India");

        app.location_input = TextInput::with_text("Nashik, Maharashtra");
        app.update_location();
        assert_eq!(app.weather.location, "Nashik, Maharashtra");
    }

    #[test]
    fn test_notice_expires() {
        let mut app = test_app();
        app.notify("Hello", "world");
        for _ in 0..NOTICE_TICKS {
            app.tick();
        }
        assert!(app.notice.is_none());
    }
}
