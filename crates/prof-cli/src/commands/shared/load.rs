use std::fmt::Display;
use std::future::Future;

use prof_client::ApiClient;
use prof_core::entities::Professor;
use prof_query::{ListStore, ProfessorView, UniversityView, ViewState};

use crate::context::AppContext;
use crate::progress::Progress;

/// Fetch the professor master list. Fails only when nothing could be loaded.
pub async fn professors(ctx: &AppContext, client: &ApiClient) -> anyhow::Result<ProfessorView> {
    let mut view = ctx.professor_view();
    let progress = Progress::spinner("Loading professors...");
    view.load(client.list_professors()).await;
    progress.finish_clear();
    fail_if_empty(view.state())?;
    Ok(view)
}

/// Fetch universities and professors together for the merged roster.
pub async fn roster(ctx: &AppContext, client: &ApiClient) -> anyhow::Result<UniversityView> {
    let mut view = ctx.university_view();
    let progress = Progress::spinner("Loading universities...");
    view.load(client.list_universities(), client.list_professors())
        .await;
    progress.finish_clear();
    fail_if_empty(view.state())?;
    if let Some(error) = view.professors().error() {
        tracing::warn!(%error, "professor list unavailable; roster shows saved universities only");
    }
    Ok(view)
}

fn fail_if_empty(state: ViewState) -> anyhow::Result<()> {
    if let ViewState::Failed(message) = state {
        anyhow::bail!("{message}");
    }
    Ok(())
}

/// Fetch a plain list (users, keys, visitor passwords, priority tasks).
pub async fn list<T, E, Fut>(label: &str, fetch: Fut) -> anyhow::Result<ListStore<T>>
where
    E: Display,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let mut store = ListStore::new();
    let progress = Progress::spinner(&format!("Loading {label}..."));
    let ok = store.load_all(fetch).await;
    progress.finish_clear();
    if !ok {
        anyhow::bail!("{}", store.error().unwrap_or("failed to load"));
    }
    Ok(store)
}

/// A reload after a successful mutation failed; the data shown may be stale.
pub fn warn_if_stale(banner: Option<&str>) {
    if let Some(error) = banner {
        tracing::warn!(%error, "saved, but the list could not be refreshed");
    }
}

pub fn find_professor<'a>(professors: &'a [Professor], id: &str) -> anyhow::Result<&'a Professor> {
    professors
        .iter()
        .find(|p| p.id.matches(id))
        .ok_or_else(|| anyhow::anyhow!("professor '{id}' not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_professor_matches_trimmed_ids() {
        let list = vec![Professor::new(7, "Grace Hopper"), Professor::new(8, "Alan Kay")];
        assert_eq!(find_professor(&list, " 8 ").unwrap().display_name(), "Alan Kay");
        let err = find_professor(&list, "9").expect_err("should fail");
        assert!(err.to_string().contains("professor '9' not found"));
    }

    #[test]
    fn failed_state_becomes_error() {
        assert!(fail_if_empty(ViewState::Failed("boom".into())).is_err());
        assert!(fail_if_empty(ViewState::NoResults).is_ok());
    }
}
