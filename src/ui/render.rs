use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::cat_list::CatList;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.feed_title()).widget(app.state()), header);
    let hints = Footer::new(app.is_fetching(), app.selected(), app.state().entities.len());
    frame.render_widget(hints.widget(footer), footer);

    frame.render_widget(Clear, body);
    let (state, list_state) = app.list_parts();
    frame.render_stateful_widget(CatList::new(&state.entities, &state.status), body, list_state);
}
