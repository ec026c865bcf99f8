//! Dispatcher for actions produced outside the store's dispatch loop
//!
//! Middleware and the tasks it spawns for books service calls hold a
//! `Dispatcher`. Actions sent through it are queued and processed by the
//! store on its own thread, so every action still runs through the full
//! middleware chain and reducer in order.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the store
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    pub fn dispatch(&self, action: impl Into<Action>) {
        if let Err(e) = self.action_tx.send(action.into()) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
