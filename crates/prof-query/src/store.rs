//! Fetch/cache stage: the master list a view derives everything from.

use std::fmt::Display;
use std::future::Future;

/// Owns the master copy of one entity list.
///
/// A failed load keeps whatever was loaded before (stale but available) and
/// records the error for display. Loads are not deduplicated: whichever
/// result is applied last wins.
#[derive(Debug, Clone)]
pub struct ListStore<T> {
    items: Vec<T>,
    error: Option<String>,
    loading: bool,
    loaded: bool,
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            loading: false,
            loaded: false,
        }
    }
}

impl<T> ListStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Master list as last loaded.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Error from the most recent failed load, cleared by the next success.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// At least one load has succeeded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Mark a load as started.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result: success replaces the list verbatim, failure
    /// records the message and keeps the previous list.
    pub fn apply<E: Display>(&mut self, result: Result<Vec<T>, E>) {
        self.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "list loaded");
                self.items = items;
                self.error = None;
                self.loaded = true;
            }
            Err(error) => {
                tracing::warn!(%error, kept = self.items.len(), "list load failed; keeping previous data");
                self.error = Some(error.to_string());
            }
        }
    }

    /// Run one fetch and apply its result.
    ///
    /// Returns `true` when the fetch succeeded.
    pub async fn load_all<E, Fut>(&mut self, fetch: Fut) -> bool
    where
        E: Display,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        self.begin();
        let result = fetch.await;
        let ok = result.is_ok();
        self.apply(result);
        ok
    }

    /// Run a mutation; on success re-fetch the whole list.
    ///
    /// A failed mutation is returned to the caller and the re-fetch is
    /// skipped, leaving the list untouched.
    ///
    /// # Errors
    ///
    /// Returns the mutation's error.
    pub async fn mutate_then_reload<R, ME, FE, M, F, FFut>(
        &mut self,
        mutation: M,
        fetch: F,
    ) -> Result<R, ME>
    where
        M: Future<Output = Result<R, ME>>,
        F: FnOnce() -> FFut,
        FFut: Future<Output = Result<Vec<T>, FE>>,
        FE: Display,
    {
        let outcome = mutation.await?;
        self.load_all(fetch()).await;
        Ok(outcome)
    }

    /// Drop the error banner without touching the data.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
