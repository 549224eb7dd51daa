//! Message processing
//!
//! Runs a message through [`update`](crate::handler::update) along with
//! every follow-up message it produces, dispatching actions as they appear.

use std::sync::Arc;

use tokio::sync::mpsc;

use dogdex_api::DogService;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
) where
    S: DogService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(service));
        }

        msg = result.message;
    }
}
