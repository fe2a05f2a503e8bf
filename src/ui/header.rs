use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::cats::{FetchState, FetchStatus};
use crate::ui::theme::{
    CAT_AMBER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_LOADING,
    STATUS_OK,
};

pub struct Header<'a> {
    feed_title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(feed_title: &'a str) -> Self {
        Self { feed_title }
    }

    pub fn widget(&self, state: &FetchState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = match state.status {
            FetchStatus::Idle => STATUS_OK,
            FetchStatus::Loading => STATUS_LOADING,
            FetchStatus::Failed { .. } => STATUS_ERROR,
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("CatBook", Style::default().fg(CAT_AMBER)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.feed_title.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(state.status.label(), Style::default().fg(status_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} cats", state.entities.len()), text_style),
        ];
        if let FetchStatus::Failed { reason } = &state.status {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(reason.clone(), Style::default().fg(STATUS_ERROR)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
