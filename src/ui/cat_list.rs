use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
};

use crate::feed::CatImage;
use crate::ui::cats::FetchStatus;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, CAT_AMBER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};

/// Alt text carried by every image node.
pub const IMAGE_ALT: &str = "cat";

/// One rendered image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageNode<'a> {
    pub index: usize,
    pub src: &'a str,
    pub alt: &'static str,
}

/// Maps entities to image nodes, one per entity, in order.
pub fn render_entities(entities: &[CatImage]) -> Vec<ImageNode<'_>> {
    entities
        .iter()
        .enumerate()
        .map(|(index, image)| ImageNode {
            index,
            src: &image.url,
            alt: IMAGE_ALT,
        })
        .collect()
}

/// Scrollable list of cat pictures.
///
/// Stateless apart from the borrowed `ListState`, which the app owns so the
/// selection survives redraws.
pub struct CatList<'a> {
    entities: &'a [CatImage],
    status: &'a FetchStatus,
}

impl<'a> CatList<'a> {
    pub fn new(entities: &'a [CatImage], status: &'a FetchStatus) -> Self {
        Self { entities, status }
    }
}

impl StatefulWidget for CatList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let nodes = render_entities(self.entities);
        let title = Span::styled(
            format!(" Cats ({}) ", nodes.len()),
            Style::default().fg(CAT_AMBER),
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        if nodes.is_empty() {
            let (text, color) = match self.status {
                FetchStatus::Loading => ("Fetching cats...".to_string(), MUTED_TEXT),
                FetchStatus::Idle => ("No cats in this feed.".to_string(), MUTED_TEXT),
                FetchStatus::Failed { reason } => {
                    (format!("Could not load cats: {reason}"), STATUS_ERROR)
                }
            };
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true })
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = nodes.into_iter().map(node_item).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        StatefulWidget::render(list, area, buf, state);
    }
}

fn node_item(node: ImageNode<'_>) -> ListItem<'_> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:>3}. ", node.index + 1),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(format!("[{}] ", node.alt), Style::default().fg(CAT_AMBER)),
        Span::styled(node.src, Style::default().fg(HEADER_TEXT)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_node_per_entity_in_order() {
        let entities = vec![CatImage::new("a"), CatImage::new("b")];
        let nodes = render_entities(&entities);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].src, "a");
        assert_eq!(nodes[1].src, "b");
        assert_eq!(nodes[1].index, 1);
        assert!(nodes.iter().all(|n| n.alt == IMAGE_ALT));
    }

    #[test]
    fn empty_entities_render_nothing() {
        assert!(render_entities(&[]).is_empty());
    }
}
