use std::io::{self, Stderr};
use std::time::Duration;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind, MouseEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Animation tick for the typing/analyzing indicators.
const TICK_INTERVAL: Duration = Duration::from_millis(300);
/// Simulated live weather updates.
const WEATHER_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug)]
#[allow(dead_code)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    WeatherUpdate,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    _tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let _tx = tx.clone();

        let tx_events = tx.clone();
        tokio::spawn(forward_terminal_events(event::EventStream::new(), tx_events));

        let tx_tick = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            loop {
                interval.tick().await;
                if tx_tick.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        let tx_weather = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(WEATHER_INTERVAL);
            // The first tick completes immediately; skip it so the first update
            // lands a full interval after startup.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx_weather.send(AppEvent::WeatherUpdate).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Forward terminal input until the stream ends or the receiver is dropped.
async fn forward_terminal_events<S>(mut events: S, tx: mpsc::UnboundedSender<AppEvent>)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    while let Some(result) = events.next().await {
        let app_event = match result {
            // Key releases are reported on some platforms; only presses act.
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
            Ok(Event::Resize(w, h)) => AppEvent::Resize(w, h),
            Ok(_) => continue,
            Err(e) => {
                warn!(error = %e, "terminal event read failed");
                continue;
            }
        };
        if tx.send(app_event).is_err() {
            break;
        }
    }
    debug!("terminal event stream closed");
}

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stderr(), EnterAlternateScreen)?;

    // Enable mouse capture
    execute!(io::stderr(), crossterm::event::EnableMouseCapture)?;

    let backend = CrosstermBackend::new(io::stderr());
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stderr(), crossterm::event::DisableMouseCapture)?;
    execute!(io::stderr(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Install panic hook to restore terminal on panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use futures_util::stream;

    fn key_event(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[tokio::test]
    async fn test_forwarding_stops_when_stream_ends() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let events = stream::iter(vec![
            Ok(key_event(KeyCode::Char('q'), KeyEventKind::Press)),
            Ok(key_event(KeyCode::Char('q'), KeyEventKind::Release)),
            Err(io::Error::new(io::ErrorKind::Other, "read failed")),
            Ok(Event::Resize(80, 24)),
            Ok(Event::FocusGained),
        ]);

        // Returns once the stream is exhausted instead of polling forever.
        tokio::time::timeout(Duration::from_secs(1), forward_terminal_events(events, tx))
            .await
            .unwrap();

        assert!(matches!(rx.recv().await, Some(AppEvent::Key(k)) if k.code == KeyCode::Char('q')));
        assert!(matches!(rx.recv().await, Some(AppEvent::Resize(80, 24))));
        // The sender was dropped with the finished task.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_forwarding_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let events = stream::iter(vec![Ok(Event::Resize(80, 24))]).chain(stream::pending());

        tokio::time::timeout(Duration::from_secs(1), forward_terminal_events(events, tx))
            .await
            .unwrap();
    }
}
