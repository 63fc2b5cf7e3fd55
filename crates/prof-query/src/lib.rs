//! # prof-query
//!
//! In-memory list engine behind the professor search and university roster
//! screens. Three stages compose, leaves first:
//!
//! 1. **Fetch/Cache** ([`store`]): one master list per screen, stale but
//!    available when a re-fetch fails, re-fetched after every mutation.
//! 2. **Merge** ([`merge`]): persisted universities plus placeholders for
//!    names that only appear on professor records.
//! 3. **Filter/Sort/Paginate** ([`professor_filter`], [`university_filter`],
//!    [`pager`]): pure functions of the master list and the filter state.
//!
//! [`views`] ties the stages together per screen. The remaining modules are
//! small derived helpers (dropdown facets, the follow-up indicator, the
//! priority task list, faculty URL intake, user status tallies).

pub mod facets;
pub mod follow_up;
pub mod intake;
pub mod merge;
pub mod pager;
pub mod professor_filter;
pub mod store;
pub mod tasks;
pub mod university_filter;
pub mod users;
pub mod views;

pub use merge::{inferred_university_names, merge_roster};
pub use pager::Pager;
pub use professor_filter::{MailedFilter, ProfessorFilter, RecruitingFilter, SemesterFilter};
pub use store::ListStore;
pub use university_filter::{SortDirection, SortKey, UniversityFilter, UniversitySort};
pub use views::{Page, ProfessorView, UniversityView, ViewState};
