//! Observable store: owns the game state and notifies subscribers.
//!
//! A view subscribes once and re-renders on each notification. Actions
//! that the reducer ignores produce no notification.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{Action, GameState};
use tracing::{debug, instrument};

/// Receives a notification after every effective state change.
pub trait Subscriber {
    /// Called with the new state.
    fn state_changed(&mut self, state: &GameState);
}

impl<F> Subscriber for F
where
    F: FnMut(&GameState),
{
    fn state_changed(&mut self, state: &GameState) {
        self(state)
    }
}

/// Owner of the single [`GameState`].
pub struct Store {
    state: GameState,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl Store {
    /// Creates a store holding `state`.
    #[instrument(skip(state))]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers a subscriber for future changes.
    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
        debug!(subscribers = self.subscribers.len(), "Subscriber added");
    }

    /// Runs `action` through the reducer.
    ///
    /// Returns `true` and notifies subscribers if the state changed.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.state.reduce(action);
        if next == self.state {
            debug!("Action ignored");
            return false;
        }

        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(&next)
        {
            panic!("Game invariants violated after {}: {:?}", action, violations);
        }

        self.state = next;
        debug!(
            current_move = self.state.current_move(),
            history_len = self.state.history().len(),
            "State changed"
        );
        for subscriber in &mut self.subscribers {
            subscriber.state_changed(&self.state);
        }
        true
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_store() -> (Store, Rc<RefCell<usize>>) {
        let count = Rc::new(RefCell::new(0));
        let mut store = Store::new(GameState::new());
        let seen = Rc::clone(&count);
        store.subscribe(move |_: &GameState| *seen.borrow_mut() += 1);
        (store, count)
    }

    #[test]
    fn test_effective_action_notifies() {
        let (mut store, count) = counting_store();
        assert!(store.dispatch(Action::Click(4)));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_ignored_action_does_not_notify() {
        let (mut store, count) = counting_store();
        store.dispatch(Action::Click(4));
        assert!(!store.dispatch(Action::Click(4)));
        assert!(!store.dispatch(Action::MoveTo(5)));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_subscriber_sees_new_state() {
        let mut store = Store::new(GameState::new());
        let last = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last);
        store.subscribe(move |state: &GameState| *sink.borrow_mut() = Some(state.status()));
        store.dispatch(Action::Click(0));
        assert_eq!(last.borrow().map(|s| s.to_string()), Some("Next player: O".to_string()));
    }
}
