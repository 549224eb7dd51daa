//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use dogdex_api::DogService;
use dogdex_app::message::Message;
use dogdex_app::signals;
use dogdex_app::state::AppState;
use dogdex_app::{process_message, Settings};
use dogdex_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI against a dog service until the user quits
pub async fn run<S>(settings: Settings, service: Arc<S>) -> Result<()>
where
    S: DogService + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::new(settings);
    info!(
        "dogdex starting, page_size={}",
        state.settings.browse.page_size
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, service);

    ratatui::restore();
    info!("dogdex exiting");
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) -> Result<()>
where
    S: DogService + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background requests and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &service);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &service);
        }
    }

    Ok(())
}
