//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use crate::domain::list_store::ListStore;
use crate::infrastructure::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, OnDelete, StatusBar, SwipeList, SwipeListState,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    RemoveItem(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Paces exit animations and measures the real time between frames.
///
/// Runs only while a row is animating. Each start schedules the first frame
/// one period from now, so ticks missed while idle are never replayed.
struct FrameClock {
    period: Duration,
    running: Option<(Interval, Instant)>,
}

impl FrameClock {
    const fn new(period: Duration) -> Self {
        Self {
            period,
            running: None,
        }
    }

    fn start(&mut self) {
        if self.running.is_none() {
            let now = Instant::now();
            let mut frames = interval_at(now + self.period, self.period);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
            self.running = Some((frames, now));
        }
    }

    fn stop(&mut self) {
        self.running = None;
    }

    /// Waits for the next frame and returns the time since the previous one.
    async fn next_frame(&mut self) -> Duration {
        let Some((frames, last_frame)) = self.running.as_mut() else {
            return std::future::pending().await;
        };
        frames.tick().await;
        let now = Instant::now();
        let delta = now.saturating_duration_since(*last_frame);
        *last_frame = now;
        delta
    }
}

pub struct App {
    state: AppState,
    list: SwipeListState<String, String>,
    theme: Theme,
    row_height: u16,
    mouse: bool,
    status: StatusBar,
    action_rx: mpsc::UnboundedReceiver<Action>,
    frames: FrameClock,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig, items: Vec<String>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let on_delete: OnDelete<String> = Arc::new(move |item: String| {
            if action_tx.send(Action::RemoveItem(item)).is_err() {
                warn!("Action channel closed, removal dropped");
            }
        });

        let store = ListStore::initialize(items, String::clone);
        let list = SwipeListState::new(store, on_delete, config.ui.swipe_config())
            .with_prompt(config.list.prompt.clone())
            .with_keyboard_step(config.ui.keyboard_step);

        Self {
            state: AppState::Running,
            list,
            theme: Theme::new(&config.theme.accent_color, &config.theme.danger_color),
            row_height: config.ui.row_height,
            mouse: config.mouse,
            status: StatusBar::info("Swipe a row to the left to delete it"),
            action_rx,
            frames: FrameClock::new(ANIMATION_TICK_RATE),
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(items = self.list.store().len(), "List seeded");

        self.run_event_loop(terminal).await?;

        info!(
            remaining = self.list.store().len(),
            "Application exiting normally"
        );
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let animating = self.sync_frame_clock();

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                delta = self.frames.next_frame(), if animating => {
                    self.list.tick(delta);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                else => break,
            }
        }

        Ok(())
    }

    /// Starts or stops the frame clock to follow the list. Returns true while
    /// any row is animating.
    fn sync_frame_clock(&mut self) -> bool {
        let animating = self.list.is_animating();
        if animating {
            self.frames.start();
        } else {
            self.frames.stop();
        }
        animating
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            Event::Mouse(mouse) if self.mouse => {
                if self.list.handle_mouse(mouse) {
                    EventResult::Consumed
                } else {
                    EventResult::Continue
                }
            }
            Event::Resize(..) => EventResult::Consumed,
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if self.list.handle_key(key) {
            return EventResult::Consumed;
        }
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }
        EventResult::Continue
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::RemoveItem(item) => {
                if self.list.remove(&item) {
                    info!(item = %item, remaining = self.list.store().len(), "Item removed");
                    self.status = StatusBar::success(format!("Removed {item}"));
                } else {
                    debug!(item = %item, "Item already gone");
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header, body, status, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Line::from(vec![
            Span::styled(
                " Cities ",
                self.theme
                    .selection_style
                    .add_modifier(Modifier::REVERSED),
            ),
            Span::styled(
                format!("  {} items", self.list.store().len()),
                self.theme.dimmed_style,
            ),
        ]);
        frame.render_widget(Paragraph::new(title), header);

        let content = |item: &String| Line::from(item.clone());
        frame.render_stateful_widget(
            SwipeList::new(&content, &self.theme)
                .row_height(self.row_height)
                .empty_text("Every city is gone. Press q to quit."),
            body,
            &mut self.list,
        );

        let status_bar = self
            .status
            .clone()
            .right(format!("{} left ", self.list.store().len()));
        frame.render_widget(&status_bar, status);

        let context = self
            .list
            .selected_key()
            .and_then(|key| self.list.row(&key).map(|row| row.state()));
        frame.render_widget(
            FooterBar::new(context, FooterBarStyle::from_theme(&self.theme)),
            footer,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    fn app(items: &[&str]) -> App {
        App::new(
            &AppConfig::default(),
            items.iter().map(|s| (*s).to_string()).collect(),
        )
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_terminal_event(Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Press,
        )))
    }

    fn reveal_selected(app: &mut App) {
        for _ in 0..5 {
            press(app, KeyCode::Char('h'));
        }
    }

    fn advance(app: &mut App, total: Duration) {
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            app.list.tick(ANIMATION_TICK_RATE);
            elapsed += ANIMATION_TICK_RATE;
        }
        drain_actions(app);
    }

    fn items(app: &App) -> Vec<&str> {
        app.list.store().items().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_confirm_delete_removes_middle_item() {
        let mut app = app(&["A", "B", "C"]);
        press(&mut app, KeyCode::Char('j'));
        reveal_selected(&mut app);
        press(&mut app, KeyCode::Char('d'));

        advance(&mut app, Duration::from_millis(400));
        assert_eq!(items(&app), vec!["A", "B", "C"]);

        advance(&mut app, Duration::from_millis(200));
        assert_eq!(items(&app), vec!["A", "C"]);
        assert_eq!(app.status.message(), "Removed B");
        assert!(app.action_rx.try_recv().is_err());
    }

    fn drain_actions(app: &mut App) {
        while let Ok(action) = app.action_rx.try_recv() {
            app.handle_action(action);
        }
    }

    /// Runs the animation path of the event loop until the list shrinks.
    async fn run_frames_until_removed(app: &mut App) {
        let len = app.list.store().len();
        while app.list.store().len() == len {
            assert!(app.sync_frame_clock());
            let delta = app.frames.next_frame().await;
            app.list.tick(delta);
            drain_actions(app);
        }
        assert!(!app.sync_frame_clock());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_after_idle_waits_full_exit_duration() {
        let mut app = app(&["A", "B"]);
        tokio::time::sleep(Duration::from_secs(2)).await;

        reveal_selected(&mut app);
        press(&mut app, KeyCode::Char('d'));
        let confirmed = Instant::now();

        run_frames_until_removed(&mut app).await;

        let waited = confirmed.elapsed();
        assert!(waited >= Duration::from_millis(500), "removed after {waited:?}");
        assert!(waited < Duration::from_millis(600), "removed after {waited:?}");
        assert_eq!(items(&app), vec!["B"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_delete_restarts_frame_clock() {
        let mut app = app(&["A", "B"]);

        reveal_selected(&mut app);
        press(&mut app, KeyCode::Char('d'));
        run_frames_until_removed(&mut app).await;

        tokio::time::sleep(Duration::from_secs(3)).await;
        reveal_selected(&mut app);
        press(&mut app, KeyCode::Char('d'));
        let confirmed = Instant::now();
        run_frames_until_removed(&mut app).await;

        assert!(confirmed.elapsed() >= Duration::from_millis(500));
        assert!(items(&app).is_empty());
    }

    #[test]
    fn test_cancel_keeps_item() {
        let mut app = app(&["A"]);
        reveal_selected(&mut app);

        assert_eq!(press(&mut app, KeyCode::Esc), EventResult::Consumed);
        advance(&mut app, Duration::from_secs(1));

        assert_eq!(items(&app), vec!["A"]);
        assert_eq!(app.state, AppState::Running);
    }

    #[test]
    fn test_stale_removal_is_ignored() {
        let mut app = app(&["A", "B"]);

        app.handle_action(Action::RemoveItem("A".to_string()));
        app.handle_action(Action::RemoveItem("A".to_string()));

        assert_eq!(items(&app), vec!["B"]);
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let mut app = app(&[]);
        let backend = ratatui::backend::TestBackend::new(60, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();

        terminal.draw(|frame| app.render(frame)).unwrap();

        let buf = terminal.backend().buffer();
        let text: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Every city is gone."));
    }

    #[test]
    fn test_quit_key_exits() {
        let mut app = app(&["A"]);
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);
    }

    #[test]
    fn test_mouse_ignored_when_disabled() {
        let config = AppConfig {
            mouse: false,
            ..AppConfig::default()
        };
        let mut app = App::new(&config, vec!["A".to_string()]);

        let result = app.handle_terminal_event(Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(result, EventResult::Continue);
    }
}
