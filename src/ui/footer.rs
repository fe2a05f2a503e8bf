use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{CAT_AMBER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key, label. The refresh label is swapped while a fetch is running.
const KEY_HINTS: [(&str, &str); 4] = [
    ("↑/↓", "Scroll"),
    ("PgUp/PgDn", "Page"),
    ("r", "Refresh"),
    ("q", "Quit"),
];

/// Bottom bar: key hints on the left, list position and version on the right.
pub struct Footer {
    fetching: bool,
    /// 1-based selected row and total rows.
    position: Option<(usize, usize)>,
}

impl Footer {
    pub fn new(fetching: bool, selected: Option<usize>, total: usize) -> Self {
        Self {
            fetching,
            position: selected.filter(|_| total > 0).map(|idx| (idx + 1, total)),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(CAT_AMBER).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let muted = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::raw(" ")];
        for (i, &(key, label)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", muted));
            }
            let label = if key == "r" && self.fetching {
                "Fetching..."
            } else {
                label
            };
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(": {label}"), label_style));
        }

        let right = match self.position {
            Some((row, total)) => format!("{row}/{total}  v{VERSION} "),
            None => format!("v{VERSION} "),
        };

        // Widths in chars: the hints contain multi-byte glyphs.
        let left_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(right.chars().count());

        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(right, label_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(footer: &Footer) -> String {
        let area = Rect::new(0, 0, 100, 3);
        let paragraph = footer.widget(area);
        let mut buf = ratatui::buffer::Buffer::empty(area);
        ratatui::widgets::Widget::render(paragraph, area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_position_and_version() {
        let line = text(&Footer::new(false, Some(2), 12));
        assert!(line.contains("r: Refresh"));
        assert!(line.contains("3/12"));
        assert!(line.contains(&format!("v{VERSION}")));
    }

    #[test]
    fn refresh_hint_changes_while_fetching() {
        let line = text(&Footer::new(true, None, 0));
        assert!(line.contains("r: Fetching..."));
        assert!(!line.contains("0/0"));
    }
}
