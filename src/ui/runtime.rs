use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::Feed;
use crate::feed::FeedClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Bootstraps the TUI and runs the event loop until quit.
///
/// The loop thread is the only writer of app state. Fetch tasks run on
/// `runtime` and report back through the event queue.
pub fn run(feed: Feed, tick_rate: Duration, runtime: &Handle) -> anyhow::Result<()> {
    let client = Arc::new(FeedClient::new(&feed)?);
    let mut app = App::new(&feed);
    let events = EventHandler::new(tick_rate);
    tracing::info!(
        feed = app.feed_title(),
        url = client.url(),
        payload_key = client.payload_key(),
        "Mounting cat feed"
    );

    let (mut terminal, guard) = setup_terminal()?;

    if app.needs_fetch() && app.begin_fetch() {
        spawn_fetch(runtime, &client, events.sender());
    }

    loop {
        // Store changes raise the flag through the app's subscription.
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &mut app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::Refresh {
                    spawn_fetch(runtime, &client, events.sender());
                }
                app.mark_dirty();
            }
            Ok(AppEvent::Cats(intent)) => app.on_cats(intent),
            Ok(AppEvent::Resize(..)) => app.mark_dirty(),
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI loop exited");
    Ok(())
}

/// Spawns one fetch cycle. Intents arrive on `tx` in dispatch order.
pub fn spawn_fetch(runtime: &Handle, client: &Arc<FeedClient>, tx: Sender<AppEvent>) {
    let client = Arc::clone(client);
    runtime.spawn(async move {
        let dispatch = move |intent| {
            let _ = tx.send(AppEvent::Cats(intent));
        };
        // Already logged and dispatched as a Failed intent.
        let _ = client.fetch_cats(dispatch).await;
    });
}
