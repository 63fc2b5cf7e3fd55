use chrono::Utc;
use prof_query::{MailedFilter, ProfessorFilter, RecruitingFilter, SemesterFilter, ViewState};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfessorListArgs;
use crate::commands::shared::load;
use crate::commands::shared::paging::{apply_page_flag, print_page};
use crate::commands::shared::parse::parse_choice;
use crate::commands::shared::rows::ProfessorRow;
use crate::context::AppContext;
use crate::output::{notice, output};

pub async fn run(
    args: &ProfessorListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = filter_from_args(args)?;
    let client = ctx.logged_in_client()?;
    let mut view = load::professors(ctx, &client).await?;
    load::warn_if_stale(view.error_banner());

    view.set_filter(filter);
    apply_page_flag(|page| view.goto_page(page), flags);

    let now = Utc::now();
    if view.state() == ViewState::NoResults {
        notice("No professors match the current filters.", flags);
    }
    print_page(
        &view.page(),
        |p| ProfessorRow::new(p, view.needs_follow_up(p, now)),
        "professors",
        flags,
    )?;

    let due = view.follow_up_count(now);
    if due > 0 {
        notice(
            &format!("{due} professor(s) due for a follow-up (`profs professor due`)"),
            flags,
        );
    }
    Ok(())
}

pub async fn get(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.logged_in_client()?;
    let view = load::professors(ctx, &client).await?;
    let professor = load::find_professor(view.store().items(), id)?;
    output(professor, flags.format)
}

fn filter_from_args(args: &ProfessorListArgs) -> anyhow::Result<ProfessorFilter> {
    Ok(ProfessorFilter {
        name: args.name.clone().unwrap_or_default(),
        university: args.university.clone().filter(|u| !u.trim().is_empty()),
        interests: args
            .interest
            .iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect(),
        recruiting: args
            .recruiting
            .as_deref()
            .map(|raw| parse_choice::<RecruitingFilter>(raw, "recruiting"))
            .transpose()?
            .unwrap_or_default(),
        mailed: args
            .mailed
            .as_deref()
            .map(|raw| parse_choice::<MailedFilter>(raw, "mailed"))
            .transpose()?
            .unwrap_or_default(),
        semester: args
            .semester
            .as_deref()
            .map(|raw| parse_choice::<SemesterFilter>(raw, "semester"))
            .transpose()?
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use prof_core::enums::HiringSemester;

    use super::*;

    fn args() -> ProfessorListArgs {
        ProfessorListArgs {
            name: None,
            university: None,
            interest: Vec::new(),
            recruiting: None,
            mailed: None,
            semester: None,
        }
    }

    #[test]
    fn no_flags_is_the_default_filter() {
        assert!(filter_from_args(&args()).unwrap().is_default());
    }

    #[test]
    fn flags_map_onto_filter_fields() {
        let mut a = args();
        a.university = Some("MIT".into());
        a.interest = vec!["ml".into(), "  ".into()];
        a.recruiting = Some("yes".into());
        a.mailed = Some("not-mailed".into());
        a.semester = Some("fall".into());

        let filter = filter_from_args(&a).unwrap();
        assert_eq!(filter.university.as_deref(), Some("MIT"));
        assert_eq!(filter.interests, vec!["ml".to_string()]);
        assert_eq!(filter.recruiting, RecruitingFilter::Yes);
        assert_eq!(filter.mailed, MailedFilter::NotMailed);
        assert_eq!(filter.semester, SemesterFilter::Only(HiringSemester::Fall));
    }

    #[test]
    fn bad_choice_names_the_flag() {
        let mut a = args();
        a.mailed = Some("sometimes".into());
        let err = filter_from_args(&a).expect_err("should fail");
        assert!(err.to_string().contains("invalid mailed 'sometimes'"));
    }
}
