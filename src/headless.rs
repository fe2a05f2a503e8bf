//! Non-interactive mode: fetch once and write the list to a stream.

use std::io::Write;

use crate::feed::FeedClient;
use crate::ui::cat_list::render_entities;
use crate::ui::cats::{ActionVocabulary, CatStore, FetchState, TaggedAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// One image URL per line.
    Urls,
    /// One JSON action per line, in dispatch order.
    Actions(ActionVocabulary),
}

/// Runs one fetch cycle through a fresh store and writes the result.
///
/// In `Actions` mode each intent is encoded first and the store applies the
/// tagged action, so the printed lines are exactly what the store consumed.
/// Output is written even when the fetch fails (the `Actions` mode then
/// ends with the failed action); the fetch error is returned afterwards.
pub async fn print_feed<W: Write>(
    client: &FeedClient,
    mode: PrintMode,
    out: &mut W,
) -> anyhow::Result<FetchState> {
    let mut store = CatStore::new();
    let mut dispatched: Vec<TaggedAction> = Vec::new();

    let result = client
        .fetch_cats(|intent| match mode {
            PrintMode::Urls => {
                store.dispatch(intent);
            }
            PrintMode::Actions(vocabulary) => {
                let action = vocabulary.encode(&intent);
                store.dispatch_action(&action, vocabulary);
                dispatched.push(action);
            }
        })
        .await;

    match mode {
        PrintMode::Urls => {
            for node in render_entities(store.entities()) {
                writeln!(out, "{}", node.src)?;
            }
        }
        PrintMode::Actions(_) => {
            for action in &dispatched {
                serde_json::to_writer(&mut *out, action)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;

    result?;
    Ok(store.state().clone())
}
