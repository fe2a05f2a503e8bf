use crate::ui::cats::actions::{ActionVocabulary, TaggedAction};
use crate::ui::cats::intent::CatsIntent;
use crate::ui::cats::state::{FetchState, FetchStatus};
use crate::ui::mvi::Reducer;

pub struct CatsReducer;

impl Reducer for CatsReducer {
    type State = FetchState;
    type Intent = CatsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatsIntent::Loading => FetchState {
                status: FetchStatus::Loading,
                entities: state.entities,
            },
            CatsIntent::Loaded { images } => FetchState {
                status: FetchStatus::Idle,
                entities: images,
            },
            // Keep whatever was shown before; only the status changes.
            CatsIntent::Failed { reason } => FetchState {
                status: FetchStatus::Failed { reason },
                entities: state.entities,
            },
        }
    }
}

impl CatsReducer {
    /// Reduces a string-tagged action. Actions the vocabulary does not know,
    /// including untagged ones, return the prior state (or the default).
    pub fn reduce_action(
        state: Option<FetchState>,
        action: &TaggedAction,
        vocabulary: ActionVocabulary,
    ) -> FetchState {
        match vocabulary.decode(action) {
            Some(intent) => Self::reduce_from(state, intent),
            None => state.unwrap_or_default(),
        }
    }
}
