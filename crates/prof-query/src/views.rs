//! Screen-level state: a master list, the current filters, sort and page.
//!
//! Every derived value is recomputed from the master list on request.
//! Changing a filter or the sort resets the page to 1; any change to the
//! master list pulls the page back inside the new bounds.

use std::fmt::Display;
use std::future::Future;

use chrono::{DateTime, Utc};
use prof_core::entities::{Professor, University};

use crate::follow_up::{self, DEFAULT_FOLLOW_UP_DAYS};
use crate::merge::{inferred_university_names, merge_roster};
use crate::pager::{DEFAULT_PAGE_SIZE, Pager};
use crate::professor_filter::ProfessorFilter;
use crate::store::ListStore;
use crate::university_filter::{SortKey, UniversityFilter, UniversitySort};

// ---------------------------------------------------------------------------
// Shared shapes
// ---------------------------------------------------------------------------

/// What a list screen should show in place of, or alongside, its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No data yet and a load is pending.
    Loading,
    /// Nothing was ever loaded and the last load failed.
    Failed(String),
    /// Data is loaded but no record passes the filters.
    NoResults,
    Ready,
}

fn view_state<T>(store: &ListStore<T>, visible: usize) -> ViewState {
    if !store.is_loaded() {
        return store
            .error()
            .filter(|_| !store.is_loading())
            .map_or(ViewState::Loading, |error| ViewState::Failed(error.to_string()));
    }
    if visible == 0 {
        ViewState::NoResults
    } else {
        ViewState::Ready
    }
}

/// One page of a derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<I> {
    pub items: Vec<I>,
    /// 1-based.
    pub number: usize,
    pub total_pages: usize,
    /// Records that passed the filters, across all pages.
    pub total_items: usize,
}

impl<I> Page<I> {
    fn cut(mut all: Vec<I>, pager: &Pager) -> Self {
        let total_items = all.len();
        let window = pager.window(total_items);
        all.truncate(window.end);
        let items = all.split_off(window.start);
        Self {
            items,
            number: pager.page(),
            total_pages: pager.total_pages(total_items),
            total_items,
        }
    }
}

// ---------------------------------------------------------------------------
// ProfessorView
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ProfessorView {
    store: ListStore<Professor>,
    filter: ProfessorFilter,
    pager: Pager,
    follow_up_days: i64,
}

impl Default for ProfessorView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_FOLLOW_UP_DAYS)
    }
}

impl ProfessorView {
    #[must_use]
    pub fn new(page_size: usize, follow_up_days: i64) -> Self {
        Self {
            store: ListStore::new(),
            filter: ProfessorFilter::default(),
            pager: Pager::new(page_size),
            follow_up_days,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &ListStore<Professor> {
        &self.store
    }

    #[must_use]
    pub const fn filter(&self) -> &ProfessorFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ProfessorFilter) {
        self.filter = filter;
        self.pager.reset();
    }

    /// Edit the filters in place; the page goes back to 1.
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut ProfessorFilter)) {
        edit(&mut self.filter);
        self.pager.reset();
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(ProfessorFilter::default());
    }

    pub fn apply<E: Display>(&mut self, result: Result<Vec<Professor>, E>) {
        self.store.apply(result);
        self.clamp_page();
    }

    /// Fetch the master list. Returns `true` on success.
    pub async fn load<E, Fut>(&mut self, fetch: Fut) -> bool
    where
        E: Display,
        Fut: Future<Output = Result<Vec<Professor>, E>>,
    {
        let ok = self.store.load_all(fetch).await;
        self.clamp_page();
        ok
    }

    /// Run a mutation, then re-fetch the master list if it succeeded.
    ///
    /// # Errors
    ///
    /// Returns the mutation's error; the list is left as it was.
    pub async fn mutate_then_reload<R, ME, FE, M, F, FFut>(
        &mut self,
        mutation: M,
        fetch: F,
    ) -> Result<R, ME>
    where
        M: Future<Output = Result<R, ME>>,
        F: FnOnce() -> FFut,
        FFut: Future<Output = Result<Vec<Professor>, FE>>,
        FE: Display,
    {
        let outcome = self.store.mutate_then_reload(mutation, fetch).await;
        self.clamp_page();
        outcome
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&Professor> {
        self.filter.apply(self.store.items())
    }

    #[must_use]
    pub fn page(&self) -> Page<&Professor> {
        Page::cut(self.filtered(), &self.pager)
    }

    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.pager.page()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered().len())
    }

    pub fn next_page(&mut self) {
        let total = self.filtered().len();
        self.pager.next(total);
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    /// Returns `false` and keeps the current page when `page` is out of range.
    pub fn goto_page(&mut self, page: usize) -> bool {
        let total = self.filtered().len();
        self.pager.goto(page, total)
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        view_state(&self.store, self.filtered().len())
    }

    /// Message from the last failed load, shown over stale data.
    #[must_use]
    pub fn error_banner(&self) -> Option<&str> {
        self.store.error()
    }

    pub fn dismiss_error(&mut self) {
        self.store.dismiss_error();
    }

    #[must_use]
    pub fn needs_follow_up(&self, professor: &Professor, now: DateTime<Utc>) -> bool {
        follow_up::needs_follow_up(professor, now, self.follow_up_days)
    }

    /// Follow-up candidates across the whole master list.
    #[must_use]
    pub fn follow_up_count(&self, now: DateTime<Utc>) -> usize {
        follow_up::follow_up_count(self.store.items(), now, self.follow_up_days)
    }

    fn clamp_page(&mut self) {
        let total = self.filtered().len();
        self.pager.clamp(total);
    }
}

// ---------------------------------------------------------------------------
// UniversityView
// ---------------------------------------------------------------------------

/// Roster screen. Holds both master lists because the roster merges
/// persisted universities with names found on professor records.
#[derive(Debug, Clone)]
pub struct UniversityView {
    universities: ListStore<University>,
    professors: ListStore<Professor>,
    filter: UniversityFilter,
    sort: UniversitySort,
    pager: Pager,
}

impl Default for UniversityView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl UniversityView {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            universities: ListStore::new(),
            professors: ListStore::new(),
            filter: UniversityFilter::default(),
            sort: UniversitySort::default(),
            pager: Pager::new(page_size),
        }
    }

    #[must_use]
    pub const fn universities(&self) -> &ListStore<University> {
        &self.universities
    }

    #[must_use]
    pub const fn professors(&self) -> &ListStore<Professor> {
        &self.professors
    }

    #[must_use]
    pub const fn filter(&self) -> &UniversityFilter {
        &self.filter
    }

    #[must_use]
    pub const fn sort(&self) -> UniversitySort {
        self.sort
    }

    pub fn set_filter(&mut self, filter: UniversityFilter) {
        self.filter = filter;
        self.pager.reset();
    }

    pub fn update_filter(&mut self, edit: impl FnOnce(&mut UniversityFilter)) {
        edit(&mut self.filter);
        self.pager.reset();
    }

    pub fn set_sort(&mut self, sort: UniversitySort) {
        self.sort = sort;
        self.pager.reset();
    }

    /// Column-header behaviour: same key flips direction, new key sorts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.set_sort(self.sort.toggled(key));
    }

    pub fn apply_universities<E: Display>(&mut self, result: Result<Vec<University>, E>) {
        self.universities.apply(result);
        self.clamp_page();
    }

    pub fn apply_professors<E: Display>(&mut self, result: Result<Vec<Professor>, E>) {
        self.professors.apply(result);
        self.clamp_page();
    }

    /// Fetch both master lists concurrently. Returns `true` when both succeed.
    pub async fn load<UE, PE, UF, PF>(&mut self, universities: UF, professors: PF) -> bool
    where
        UE: Display,
        PE: Display,
        UF: Future<Output = Result<Vec<University>, UE>>,
        PF: Future<Output = Result<Vec<Professor>, PE>>,
    {
        self.universities.begin();
        self.professors.begin();
        let (universities, professors) = tokio::join!(universities, professors);
        let ok = universities.is_ok() && professors.is_ok();
        self.universities.apply(universities);
        self.professors.apply(professors);
        self.clamp_page();
        ok
    }

    /// Run a university mutation, then re-fetch the persisted list.
    ///
    /// # Errors
    ///
    /// Returns the mutation's error; the roster is left as it was.
    pub async fn mutate_then_reload<R, ME, FE, M, F, FFut>(
        &mut self,
        mutation: M,
        fetch: F,
    ) -> Result<R, ME>
    where
        M: Future<Output = Result<R, ME>>,
        F: FnOnce() -> FFut,
        FFut: Future<Output = Result<Vec<University>, FE>>,
        FE: Display,
    {
        let outcome = self.universities.mutate_then_reload(mutation, fetch).await;
        self.clamp_page();
        outcome
    }

    /// Persisted universities followed by placeholders for inferred names.
    #[must_use]
    pub fn roster(&self) -> Vec<University> {
        let inferred = inferred_university_names(self.professors.items());
        merge_roster(self.universities.items(), &inferred)
    }

    /// Filtered and sorted roster.
    #[must_use]
    pub fn visible(&self) -> Vec<University> {
        let roster = self.roster();
        let mut visible = self.filter.apply(&roster);
        self.sort.sort(&mut visible);
        visible.into_iter().cloned().collect()
    }

    #[must_use]
    pub fn page(&self) -> Page<University> {
        Page::cut(self.visible(), &self.pager)
    }

    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.pager.page()
    }

    pub fn next_page(&mut self) {
        let total = self.visible().len();
        self.pager.next(total);
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    pub fn goto_page(&mut self, page: usize) -> bool {
        let total = self.visible().len();
        self.pager.goto(page, total)
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        view_state(&self.universities, self.visible().len())
    }

    /// First pending load error of either list.
    #[must_use]
    pub fn error_banner(&self) -> Option<&str> {
        self.universities.error().or_else(|| self.professors.error())
    }

    pub fn dismiss_error(&mut self) {
        self.universities.dismiss_error();
        self.professors.dismiss_error();
    }

    fn clamp_page(&mut self) {
        let total = self.visible().len();
        self.pager.clamp(total);
    }
}
