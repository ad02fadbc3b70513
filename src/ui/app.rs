use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::federation::ToastProps;
use crate::loader::{LoadRequest, LoadState, RemoteLoader};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT};
use crate::ui::toast::{render_remote_toast, ToastOptions};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Host screen that shows one remote toast.
pub struct ToastApp {
    props: ToastProps,
    options: ToastOptions,
    state: LoadState,
    animation_tick: u8,
    shown_at: Option<Instant>,
    should_quit: bool,
}

impl ToastApp {
    pub fn new(props: ToastProps, options: ToastOptions) -> Self {
        Self {
            props,
            options,
            state: LoadState::Loading,
            animation_tick: 0,
            shown_at: None,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply a new load state. The toast duration starts counting once the
    /// remote component is on screen.
    pub fn on_state(&mut self, state: LoadState, now: Instant) {
        if matches!(state, LoadState::Succeeded { .. }) && self.shown_at.is_none() {
            self.shown_at = Some(now);
        }
        self.state = state;
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        if let Some(shown_at) = self.shown_at {
            if now.duration_since(shown_at) >= self.props.duration {
                self.dismiss();
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.dismiss(),
            _ => {}
        }
    }

    fn dismiss(&mut self) {
        if !self.should_quit {
            self.props.close();
            self.should_quit = true;
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let header = Line::from(vec![
            Span::styled(" remote-toast ", Style::default().fg(HEADER_TEXT)),
            Span::styled("│", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(" Esc/q to close", Style::default().fg(HEADER_SEPARATOR)),
        ]);
        let footer = Rect::new(
            area.x,
            area.y + area.height.saturating_sub(1),
            area.width,
            area.height.min(1),
        );
        frame.render_widget(Paragraph::new(header), footer);
        render_remote_toast(
            frame,
            &self.state,
            &self.props,
            &self.options,
            self.animation_tick,
        );
    }
}

/// Load `request` through `loader` and show the result until dismissed.
///
/// Returns the last load state observed.
pub async fn run(
    loader: &RemoteLoader,
    request: LoadRequest,
    props: ToastProps,
    options: ToastOptions,
) -> io::Result<LoadState> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = ToastApp::new(props, options);
    let mut handle = loader.load(request);
    app.on_state(handle.current(), Instant::now());
    let mut events = EventHandler::spawn(TICK_RATE);

    loop {
        terminal.draw(|frame| app.draw(frame))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            state = handle.changed() => match state {
                Some(state) => app.on_state(state, Instant::now()),
                None => break,
            },
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => app.on_key(key),
                Some(AppEvent::Tick) => app.on_tick(Instant::now()),
                Some(AppEvent::Resize(..)) => {}
                None => break,
            },
        }
    }

    drop(guard);
    Ok(app.state().clone())
}
