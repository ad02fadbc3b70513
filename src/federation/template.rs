//! Toast component built from a manifest descriptor.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::ui::theme::{kind_color, HEADER_TEXT};

use super::module::RemoteComponent;
use super::props::{ToastKind, ToastProps};

/// A remote toast described declaratively by its manifest.
#[derive(Debug, Clone)]
pub struct TemplateToast {
    title: String,
    accent: Option<Color>,
}

impl TemplateToast {
    pub fn new(title: impl Into<String>, accent: Option<Color>) -> Self {
        Self {
            title: title.into(),
            accent,
        }
    }
}

fn kind_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✗",
        ToastKind::Warning => "!",
        ToastKind::Info => "i",
    }
}

impl RemoteComponent for TemplateToast {
    fn name(&self) -> &str {
        &self.title
    }

    fn height(&self, props: &ToastProps) -> u16 {
        // Borders plus one row per message line.
        let lines = props.message.lines().count().max(1) as u16;
        lines.saturating_add(2)
    }

    fn render(&self, props: &ToastProps, area: Rect, buf: &mut Buffer) {
        if !props.is_visible || area.is_empty() {
            return;
        }

        let accent = self.accent.unwrap_or_else(|| kind_color(props.kind));
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));

        let mut lines = Vec::new();
        for (idx, text) in props.message.lines().enumerate() {
            let prefix = if idx == 0 {
                Span::styled(
                    format!("{} ", kind_icon(props.kind)),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("  ")
            };
            lines.push(Line::from(vec![
                prefix,
                Span::styled(text.to_string(), Style::default().fg(HEADER_TEXT)),
            ]));
        }

        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
