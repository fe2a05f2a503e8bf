use crate::feed::CatImage;
use crate::ui::cats::actions::{ActionVocabulary, TaggedAction};
use crate::ui::cats::intent::CatsIntent;
use crate::ui::cats::reducer::CatsReducer;
use crate::ui::cats::state::{FetchState, FetchStatus};
use crate::ui::mvi::Reducer;

type Listener = Box<dyn FnMut(&FetchState) + Send>;

/// Single owner of the cat feed state.
///
/// All mutation goes through [`CatStore::dispatch`]. Listeners run after a
/// transition that changed the state, in the order they subscribed.
#[derive(Default)]
pub struct CatStore {
    state: FetchState,
    listeners: Vec<Listener>,
}

impl CatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FetchState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn status(&self) -> &FetchStatus {
        &self.state.status
    }

    pub fn entities(&self) -> &[CatImage] {
        &self.state.entities
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&FetchState) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Applies one intent. Returns `true` if the state changed.
    pub fn dispatch(&mut self, intent: CatsIntent) -> bool {
        let next = CatsReducer::reduce(self.state.clone(), intent);
        self.commit(next)
    }

    /// Applies a string-tagged action. Unknown tags leave the state as is.
    pub fn dispatch_action(&mut self, action: &TaggedAction, vocabulary: ActionVocabulary) -> bool {
        let next = CatsReducer::reduce_action(Some(self.state.clone()), action, vocabulary);
        let changed = self.commit(next);
        tracing::debug!(
            action = action.kind(),
            vocabulary = vocabulary.name(),
            changed,
            "Action dispatched"
        );
        changed
    }

    fn commit(&mut self, next: FetchState) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        for listener in &mut self.listeners {
            listener(&self.state);
        }
        true
    }
}
