mod common;

use catbook::feed::CatImage;
use catbook::ui::cat_list::{render_entities, CatList, IMAGE_ALT};
use catbook::ui::cats::FetchStatus;
use common::{buffer_contains, buffer_lines, cats};
use ratatui::backend::TestBackend;
use ratatui::widgets::ListState;
use ratatui::Terminal;

fn draw(entities: &[CatImage], status: &FetchStatus, state: &mut ListState) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal
        .draw(|frame| {
            frame.render_stateful_widget(CatList::new(entities, status), frame.area(), state)
        })
        .unwrap();
    terminal
}

#[test]
fn nodes_match_entities() {
    let entities = cats(&["www.example.com/cat1", "www.example.com/cat2"]);
    let nodes = render_entities(&entities);

    assert_eq!(nodes.len(), entities.len());
    for (node, entity) in nodes.iter().zip(&entities) {
        assert_eq!(node.src, entity.url);
        assert_eq!(node.alt, IMAGE_ALT);
    }
    // Input untouched.
    assert_eq!(entities, cats(&["www.example.com/cat1", "www.example.com/cat2"]));
}

#[test]
fn widget_draws_one_row_per_cat() {
    let entities = cats(&["www.example.com/cat1", "www.example.com/cat2"]);
    let mut state = ListState::default();
    let terminal = draw(&entities, &FetchStatus::Idle, &mut state);
    let buffer = terminal.backend().buffer();

    assert!(buffer_contains(buffer, "Cats (2)"));
    let lines = buffer_lines(buffer);
    let rows: Vec<&String> = lines
        .iter()
        .filter(|l| l.contains("www.example.com/cat"))
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("1. [cat] www.example.com/cat1"));
    assert!(rows[1].contains("2. [cat] www.example.com/cat2"));
}

#[test]
fn selection_is_highlighted() {
    let entities = cats(&["a.png", "b.png"]);
    let mut state = ListState::default();
    state.select(Some(1));
    let terminal = draw(&entities, &FetchStatus::Idle, &mut state);

    let lines = buffer_lines(terminal.backend().buffer());
    let selected = lines.iter().find(|l| l.contains("b.png")).unwrap();
    assert!(selected.contains("> "));
}

#[test]
fn loading_placeholder_when_empty() {
    let mut state = ListState::default();
    let terminal = draw(&[], &FetchStatus::Loading, &mut state);
    let buffer = terminal.backend().buffer();
    assert!(buffer_contains(buffer, "Fetching cats..."));
    assert!(buffer_contains(buffer, "Cats (0)"));
}

#[test]
fn idle_placeholder_when_empty() {
    let mut state = ListState::default();
    let terminal = draw(&[], &FetchStatus::Idle, &mut state);
    assert!(buffer_contains(terminal.backend().buffer(), "No cats in this feed."));
}

#[test]
fn failure_reason_when_empty() {
    let mut state = ListState::default();
    let status = FetchStatus::Failed {
        reason: "HTTP 503".to_string(),
    };
    let terminal = draw(&[], &status, &mut state);
    assert!(buffer_contains(
        terminal.backend().buffer(),
        "Could not load cats: HTTP 503"
    ));
}
