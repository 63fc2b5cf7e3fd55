//! Outreach tracking: first mail, follow-up mail, and the follow-up queue.

use chrono::{DateTime, Utc};
use prof_core::ids::RecordId;
use prof_core::updates::{ProfessorUpdate, ProfessorUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::load;
use crate::commands::shared::parse::parse_date;
use crate::commands::shared::rows::ProfessorRow;
use crate::context::AppContext;
use crate::output::{notice, output};

pub async fn mailed(
    id: &str,
    date: Option<&str>,
    undo: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let at = sent_at(date, undo, Utc::now())?;
    let update = ProfessorUpdateBuilder::new().mailed(!undo, at).build();
    apply(id, &update, ctx, flags).await
}

pub async fn follow_up(
    id: &str,
    date: Option<&str>,
    undo: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let at = sent_at(date, undo, Utc::now())?;
    let update = ProfessorUpdateBuilder::new()
        .follow_up_mail_sent(!undo, at)
        .build();
    apply(id, &update, ctx, flags).await
}

/// Mailed professors still waiting on a follow-up past the configured window.
pub async fn due(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let view = load::professors(ctx, &client).await?;
    let now = Utc::now();
    let rows: Vec<ProfessorRow> = view
        .store()
        .items()
        .iter()
        .filter(|p| view.needs_follow_up(p, now))
        .map(|p| ProfessorRow::new(p, true))
        .collect();
    notice(
        &format!(
            "{} professor(s) mailed {}+ days ago without a follow-up",
            rows.len(),
            ctx.config.general.follow_up_days
        ),
        flags,
    );
    output(&rows, flags.format)
}

async fn apply(
    id: &str,
    update: &ProfessorUpdate,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let record = RecordId::parse(id);
    let client = ctx.logged_in_client()?;
    let mut view = ctx.professor_view();
    view.mutate_then_reload(client.update_professor(&record, update), || {
        client.list_professors()
    })
    .await?;
    load::warn_if_stale(view.error_banner());
    output(load::find_professor(view.store().items(), id)?, flags.format)
}

/// Undo clears the date; otherwise `--date` or now.
fn sent_at(
    date: Option<&str>,
    undo: bool,
    now: DateTime<Utc>,
) -> anyhow::Result<Option<DateTime<Utc>>> {
    if undo {
        return Ok(None);
    }
    date.map_or(Ok(Some(now)), |raw| parse_date(raw, "date").map(Some))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 2, 9, 30, 0).unwrap()
    }

    #[test]
    fn sent_at_defaults_to_now() {
        assert_eq!(sent_at(None, false, now()).unwrap(), Some(now()));
    }

    #[test]
    fn sent_at_uses_given_date() {
        assert_eq!(
            sent_at(Some("2025-04-20"), false, now()).unwrap(),
            Some(Utc.with_ymd_and_hms(2025, 4, 20, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn undo_ignores_date() {
        assert_eq!(sent_at(Some("2025-04-20"), true, now()).unwrap(), None);
    }
}
