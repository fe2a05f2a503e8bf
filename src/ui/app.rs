use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ratatui::widgets::ListState;

use crate::config::Feed;
use crate::ui::cats::{ActionVocabulary, CatStore, CatsIntent, FetchState};

/// Rows moved by PageUp / PageDown.
pub const PAGE_SIZE: usize = 10;

/// Root of the view tree.
///
/// Owns the cat store (the single writer of feed state) and the list
/// selection. Everything else is derived from these on each draw.
pub struct App {
    should_quit: bool,
    feed_title: String,
    vocabulary: ActionVocabulary,
    store: CatStore,
    list_state: ListState,
    /// Set when a fetch task is spawned, cleared when it reports back.
    fetch_in_flight: bool,
    /// Raised by the store subscription and by view-local changes.
    redraw: Arc<AtomicBool>,
}

impl App {
    pub fn new(feed: &Feed) -> Self {
        Self::with_store(feed, CatStore::new())
    }

    pub fn with_store(feed: &Feed, mut store: CatStore) -> Self {
        let redraw = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&redraw);
        store.subscribe(move |_| flag.store(true, Ordering::Release));

        let mut app = Self {
            should_quit: false,
            feed_title: feed.title().to_string(),
            vocabulary: feed.actions,
            store,
            list_state: ListState::default(),
            fetch_in_flight: false,
            redraw,
        };
        app.clamp_selection();
        app
    }

    /// Flags the next loop iteration to draw.
    pub fn mark_dirty(&self) {
        self.redraw.store(true, Ordering::Release);
    }

    /// Returns whether a draw is due and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw.swap(false, Ordering::AcqRel)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn feed_title(&self) -> &str {
        &self.feed_title
    }

    pub fn state(&self) -> &FetchState {
        self.store.state()
    }

    /// Mount-time check: fetch only when nothing has been loaded yet.
    pub fn needs_fetch(&self) -> bool {
        self.store.entities().is_empty() && !self.fetch_in_flight
    }

    /// Claims the right to start a fetch. Returns `false` if one is already
    /// running, so repeated refresh keys do not stack requests.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_in_flight || self.store.status().is_loading() {
            return false;
        }
        self.fetch_in_flight = true;
        true
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    /// Applies an intent delivered by the fetch task.
    pub fn on_cats(&mut self, intent: CatsIntent) {
        tracing::debug!(action = self.vocabulary.tag(&intent), "Dispatch");
        if matches!(
            intent,
            CatsIntent::Loaded { .. } | CatsIntent::Failed { .. }
        ) {
            self.fetch_in_flight = false;
            // The footer shows the in-flight slot even if the state is unchanged.
            self.mark_dirty();
        }
        if self.store.dispatch(intent) {
            self.clamp_selection();
        }
    }

    /// Borrows the state snapshot and the selection together for drawing.
    pub fn list_parts(&mut self) -> (&FetchState, &mut ListState) {
        (self.store.state(), &mut self.list_state)
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn page_down(&mut self) {
        self.move_selection(PAGE_SIZE as isize);
    }

    pub fn page_up(&mut self) {
        self.move_selection(-(PAGE_SIZE as isize));
    }

    pub fn select_first(&mut self) {
        if !self.store.entities().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.store.entities().len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.store.entities().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(next as usize));
    }

    /// Keeps the selection inside the current entity list.
    fn clamp_selection(&mut self) {
        let len = self.store.entities().len();
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(idx)) => Some(idx.min(len - 1)),
        };
        self.list_state.select(selected);
    }
}
