//! Presentational shell for the remote toast.
//!
//! Maps a [`LoadState`] onto one of three views: an error toast, a loading
//! toast (or nothing, in silent mode), or the loaded component itself.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::config::ToastConfig;
use crate::federation::{ComponentRef, ToastProps};
use crate::loader::LoadState;
use crate::ui::theme::{HEADER_TEXT, LOADING_BORDER, STATUS_ERROR, STATUS_OK};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Width of every toast.
pub const TOAST_WIDTH: u16 = 44;

/// Gap between a toast and the screen edge.
const TOAST_MARGIN: u16 = 1;

/// Loading presentation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    /// Draw a loading indicator while loading; otherwise draw nothing.
    pub show_loading_state: bool,
    pub loading_message: String,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            show_loading_state: false,
            loading_message: "Loading toast...".to_string(),
        }
    }
}

impl From<&ToastConfig> for ToastOptions {
    fn from(config: &ToastConfig) -> Self {
        Self {
            show_loading_state: config.show_loading_state,
            loading_message: config.loading_message.clone(),
        }
    }
}

/// Which view the shell draws for a state.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastView<'a> {
    Error { error: &'a str },
    Loading { message: &'a str },
    /// Silent loading.
    Hidden,
    Remote(&'a ComponentRef),
}

impl<'a> ToastView<'a> {
    pub fn select(state: &'a LoadState, options: &'a ToastOptions) -> Self {
        match state {
            LoadState::Failed { error } => ToastView::Error { error },
            LoadState::Loading if options.show_loading_state => ToastView::Loading {
                message: &options.loading_message,
            },
            LoadState::Loading => ToastView::Hidden,
            LoadState::Succeeded { component } => ToastView::Remote(component),
        }
    }
}

/// Render whichever view `state` calls for.
///
/// The loaded component always receives `is_visible: true` along with the
/// caller's message, kind, duration and close callback.
pub fn render_remote_toast(
    frame: &mut Frame,
    state: &LoadState,
    props: &ToastProps,
    options: &ToastOptions,
    animation_tick: u8,
) {
    match ToastView::select(state, options) {
        ToastView::Error { error } => render_error_toast(frame, props, error),
        ToastView::Loading { message } => render_loading_toast(frame, message, animation_tick),
        ToastView::Hidden => {}
        ToastView::Remote(component) => {
            let props = ToastProps {
                is_visible: true,
                ..props.clone()
            };
            let height = component.height(&props);
            let area = toast_area(TOAST_WIDTH, height, frame.area());
            component.render(&props, area, frame.buffer_mut());
        }
    }
}

/// Error toast shown when the remote component failed to load.
pub fn render_error_toast(frame: &mut Frame, props: &ToastProps, error: &str) {
    let text_width = TOAST_WIDTH.saturating_sub(4) as usize;

    let mut lines = vec![Line::from(Span::styled(
        "Toast Error",
        Style::default()
            .fg(STATUS_ERROR)
            .add_modifier(Modifier::BOLD),
    ))];
    if !props.message.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate(&props.message, text_width),
            Style::default().fg(HEADER_TEXT),
        )));
    }
    lines.push(Line::from(vec![
        Span::styled("Error: ", Style::default().fg(STATUS_ERROR)),
        Span::styled(
            truncate(error, text_width.saturating_sub(7)),
            Style::default().fg(HEADER_TEXT),
        ),
    ]));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    if props.on_close.is_some() {
        block = block
            .title(" × [Esc] ")
            .title_alignment(Alignment::Right);
    }

    let area = toast_area(TOAST_WIDTH, lines.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Loading indicator with a spinner.
pub fn render_loading_toast(frame: &mut Frame, message: &str, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
        Span::styled(
            truncate(message, TOAST_WIDTH.saturating_sub(6) as usize),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(LOADING_BORDER));

    let area = toast_area(TOAST_WIDTH, 3, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Top-right rect of the given size, clamped to `area`.
pub fn toast_area(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(TOAST_MARGIN * 2));
    let height = height.min(area.height.saturating_sub(TOAST_MARGIN));
    let x = area.x + area.width.saturating_sub(width + TOAST_MARGIN);
    let y = area.y + TOAST_MARGIN.min(area.height);
    Rect::new(x, y, width, height)
}

/// Shorten `text` to at most `max_chars` characters.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
