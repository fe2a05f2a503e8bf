//! Cat feed state container.
//!
//! [`CatsReducer`] is the pure transition function, [`CatStore`] owns the
//! current [`FetchState`] and notifies subscribers, and
//! [`ActionVocabulary`] maps intents to the string-tagged actions used in
//! logs and headless output.

mod actions;
mod intent;
mod reducer;
mod state;
mod store;

pub use actions::{ActionVocabulary, TaggedAction};
pub use intent::CatsIntent;
pub use reducer::CatsReducer;
pub use state::{FetchState, FetchStatus};
pub use store::CatStore;
