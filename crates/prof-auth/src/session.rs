//! The process-wide session context.
//!
//! A [`Session`] is cheap to clone; every clone shares the same state, the
//! same backing store, and the same change channel. Observers call
//! [`Session::subscribe`] and are woken on every `set`, `update`, or `clear`.

use std::sync::Arc;

use prof_core::enums::Role;
use tokio::sync::watch;

use crate::error::AuthError;
use crate::state::SessionState;
use crate::store::{MemoryStore, SessionStore};

#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

struct Inner {
    store: Box<dyn SessionStore>,
    tx: watch::Sender<SessionState>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.inner.store.name())
            .field("authenticated", &self.get().is_authenticated())
            .finish()
    }
}

impl Session {
    /// Load the persisted state from `store` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the persisted session cannot be read.
    pub fn open(store: Box<dyn SessionStore>) -> Result<Self, AuthError> {
        let initial = store.load()?;
        tracing::debug!(
            store = store.name(),
            authenticated = initial.is_authenticated(),
            "session loaded"
        );
        let (tx, _rx) = watch::channel(initial);
        Ok(Self {
            inner: Arc::new(Inner { store, tx }),
        })
    }

    /// Session backed only by memory.
    #[must_use]
    pub fn in_memory(initial: SessionState) -> Self {
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            inner: Arc::new(Inner {
                store: Box::new(MemoryStore::new(initial)),
                tx,
            }),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn get(&self) -> SessionState {
        self.inner.tx.borrow().clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.tx.borrow().token.clone().filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.inner.tx.borrow().effective_role()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.tx.borrow().is_authenticated()
    }

    #[must_use]
    pub fn store_name(&self) -> &'static str {
        self.inner.store.name()
    }

    /// Replace the state, persist it, and notify observers.
    ///
    /// # Errors
    ///
    /// Returns the store's error; observers are not notified in that case.
    pub fn set(&self, state: SessionState) -> Result<(), AuthError> {
        self.inner.store.save(&state)?;
        self.inner.tx.send_replace(state);
        Ok(())
    }

    /// Apply `f` to a copy of the current state and [`set`](Self::set) the result.
    ///
    /// # Errors
    ///
    /// Same as [`Self::set`].
    pub fn update(&self, f: impl FnOnce(&mut SessionState)) -> Result<(), AuthError> {
        let mut state = self.get();
        f(&mut state);
        self.set(state)
    }

    /// Drop the token, role, and user id everywhere.
    ///
    /// Observers are notified even if the store fails, so a forced logout
    /// always takes effect for the running process.
    ///
    /// # Errors
    ///
    /// Returns the store's error after notifying observers.
    pub fn clear(&self) -> Result<(), AuthError> {
        self.inner.tx.send_replace(SessionState::default());
        self.inner.store.clear()
    }

    /// Receiver that observes every subsequent change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clones_share_state() {
        let session = Session::in_memory(SessionState::default());
        let other = session.clone();
        session
            .set(SessionState::authenticated("tok", Some(Role::User), None))
            .unwrap();
        assert_eq!(other.token().as_deref(), Some("tok"));
        assert_eq!(other.role(), Role::User);
    }

    #[test]
    fn update_keeps_untouched_fields() {
        let session =
            Session::in_memory(SessionState::authenticated("tok", None, Some("7".into())));
        session.update(|s| s.role = Some(Role::Visitor)).unwrap();
        let state = session.get();
        assert_eq!(state.user_id.as_deref(), Some("7"));
        assert_eq!(state.role, Some(Role::Visitor));
    }

    #[test]
    fn clear_logs_out() {
        let session = Session::in_memory(SessionState::authenticated("tok", None, None));
        session.clear().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let session = Session::in_memory(SessionState::default());
        let mut rx = session.subscribe();

        session
            .set(SessionState::authenticated("tok", None, None))
            .unwrap();
        rx.changed().await.expect("sender alive");
        assert!(rx.borrow_and_update().is_authenticated());

        session.clear().unwrap();
        rx.changed().await.expect("sender alive");
        assert!(!rx.borrow_and_update().is_authenticated());
    }
}
