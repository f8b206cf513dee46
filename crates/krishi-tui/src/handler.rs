use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use krishi_core::Section;
use crate::app::{App, EditTarget, InputMode, TextInput};
use crate::tui::AppEvent;

pub async fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => app.tick(),
        AppEvent::WeatherUpdate => app.update_weather(),
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Keys shared by every section
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_section();
            return;
        }
        KeyCode::BackTab => {
            app.prev_section();
            return;
        }
        KeyCode::Esc | KeyCode::Backspace => {
            app.open_section(Section::Dashboard);
            return;
        }
        KeyCode::Char(c @ '1'..='7') => {
            let idx = c as usize - '1' as usize;
            if let Some(section) = Section::all().get(idx) {
                app.open_section(*section);
            }
            return;
        }
        KeyCode::Char('L') => {
            app.cycle_language();
            return;
        }
        KeyCode::Char('c') => {
            app.toggle_chat();
            return;
        }
        KeyCode::Char('m') if app.show_chat => {
            app.chat_minimized = !app.chat_minimized;
            return;
        }
        KeyCode::Char('i') | KeyCode::Char('/') => {
            app.begin_chat_input();
            return;
        }
        _ => {}
    }

    match app.section {
        Section::Dashboard => handle_dashboard(app, key),
        Section::DiseaseDetection => handle_disease(app, key),
        Section::Support => handle_voice(app, key),
        Section::Climate => handle_climate(app, key),
        Section::Schemes | Section::Loans | Section::Subsidies => handle_scrolling(app, key),
    }
}

fn handle_dashboard(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.card_down(),
        KeyCode::Char('k') | KeyCode::Up => app.card_up(),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.open_selected_card(),
        _ => {}
    }
}

fn handle_scrolling(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('g') => app.content_scroll = 0,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.content_scroll = app.content_scroll.saturating_add(10);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.content_scroll = app.content_scroll.saturating_sub(10);
        }
        _ => {}
    }
}

fn handle_disease(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('o') => app.begin_image_input(),
        KeyCode::Char('a') | KeyCode::Enter => app.analyze(),
        _ => handle_scrolling(app, key),
    }
}

fn handle_voice(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char(' ') => app.toggle_recording(),
        KeyCode::Char('v') => app.cycle_voice_language(),
        KeyCode::Char('p') | KeyCode::Enter => app.play_selected(),
        KeyCode::Char('j') | KeyCode::Down => app.voice_down(),
        KeyCode::Char('k') | KeyCode::Up => app.voice_up(),
        _ => {}
    }
}

fn handle_climate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.begin_location_input()
        }
        _ => handle_scrolling(app, key),
    }
}

fn active_input(app: &mut App) -> &mut TextInput {
    match app.edit_target {
        EditTarget::Chat => &mut app.chat_input,
        EditTarget::ImagePath => &mut app.image_input,
        EditTarget::Location => &mut app.location_input,
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            match app.edit_target {
                EditTarget::Chat => app.send_chat(),
                EditTarget::ImagePath => app.select_image(),
                EditTarget::Location => app.update_location(),
            }
        }
        KeyCode::Backspace => active_input(app).backspace(),
        KeyCode::Delete => active_input(app).delete(),
        KeyCode::Left => active_input(app).left(),
        KeyCode::Right => active_input(app).right(),
        KeyCode::Home => active_input(app).home(),
        KeyCode::End => active_input(app).end(),
        KeyCode::Char(c) => active_input(app).insert(c),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => match app.section {
            Section::Dashboard => app.card_down(),
            Section::Support => app.voice_down(),
            _ => app.scroll_down(),
        },
        MouseEventKind::ScrollUp => match app.section {
            Section::Dashboard => app.card_up(),
            Section::Support => app.voice_up(),
            _ => app.scroll_up(),
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use krishi_core::{Config, Language};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn test_app() -> App {
        App::new(&Config::new(), Language::En, None)
    }

    async fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_event(app, key(KeyCode::Char(c))).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_number_keys_jump_to_sections() {
        let mut app = test_app();
        handle_event(&mut app, key(KeyCode::Char('3'))).await.unwrap();
        assert_eq!(app.section, Section::Loans);
        handle_event(&mut app, key(KeyCode::Char('7'))).await.unwrap();
        assert_eq!(app.section, Section::Support);
        handle_event(&mut app, key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.section, Section::Dashboard);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_while_editing() {
        let mut app = test_app();
        handle_event(&mut app, key(KeyCode::Char('i'))).await.unwrap();
        assert_eq!(app.input_mode, InputMode::Editing);
        let ctrl_c = KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        handle_event(&mut app, AppEvent::Key(ctrl_c)).await.unwrap();
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_typing_q_in_chat_does_not_quit() {
        let mut app = test_app();
        handle_event(&mut app, key(KeyCode::Char('i'))).await.unwrap();
        type_str(&mut app, "quintal").await;
        assert!(!app.should_quit);
        assert_eq!(app.chat_input.text, "quintal");
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_sends_chat_message() {
        let mut app = test_app();
        handle_event(&mut app, key(KeyCode::Char('/'))).await.unwrap();
        type_str(&mut app, "eligibility").await;
        handle_event(&mut app, key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.show_chat);
        assert!(app.chat.is_typing());
        assert!(app.chat_task.is_some());
    }

    #[tokio::test]
    async fn test_shift_l_cycles_language() {
        let mut app = test_app();
        handle_event(&mut app, key(KeyCode::Char('L'))).await.unwrap();
        assert_eq!(app.language, Language::Hi);
    }

    #[tokio::test]
    async fn test_location_edit_escape_keeps_old_location() {
        let mut app = test_app();
        app.open_section(Section::Climate);
        handle_event(&mut app, key(KeyCode::Char('u'))).await.unwrap();
        assert_eq!(app.edit_target, EditTarget::Location);
        type_str(&mut app, "xyz").await;
        handle_event(&mut app, key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.weather.location, "Punjab, India");
    }

    #[tokio::test]
    async fn test_voice_keys_record_and_switch_language() {
        let mut app = test_app();
        app.open_section(Section::Support);
        handle_event(&mut app, key(KeyCode::Char('v'))).await.unwrap();
        assert_eq!(app.voice.language(), krishi_core::VoiceLanguage::English);
        handle_event(&mut app, key(KeyCode::Char('r'))).await.unwrap();
        assert!(app.voice.is_recording());
    }
}
