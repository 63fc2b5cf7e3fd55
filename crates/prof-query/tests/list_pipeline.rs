//! End-to-end checks of the fetch → merge → filter/sort/paginate pipeline.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use prof_core::entities::{Professor, University};
use prof_core::enums::{HiringSemester, TriState};
use prof_core::ids::RecordId;
use prof_core::updates::ProfessorUpdateBuilder;
use prof_query::follow_up::{DEFAULT_FOLLOW_UP_DAYS, needs_follow_up};
use prof_query::{
    MailedFilter, ProfessorFilter, ProfessorView, RecruitingFilter, SemesterFilter, SortKey,
    UniversityFilter, UniversityView, inferred_university_names, merge_roster,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap()
}

/// A varied list: every third recruits, every fourth is mailed, semesters
/// rotate through Fall/Spring/Both/unset, universities through four names.
fn roster(n: i64) -> Vec<Professor> {
    let universities = ["MIT", "Stanford", "stanford", "USF"];
    let semesters = [
        Some(HiringSemester::Fall),
        Some(HiringSemester::Spring),
        Some(HiringSemester::Both),
        None,
    ];
    (0..n)
        .map(|i| {
            let idx = usize::try_from(i).unwrap();
            let mut p = Professor::new(i + 1, format!("Professor {i:03}"));
            p.university_name = Some(universities[idx % 4].to_string());
            p.hiring_semester = semesters[idx % 4];
            p.research_interests = Some(if i % 2 == 0 { "AI, Robotics" } else { "Systems" }.into());
            if i % 3 == 0 {
                p.set_recruiting_phd_students(TriState::Yes);
            } else if i % 5 == 0 {
                p.currently_recruiting = TriState::No;
            }
            if i % 4 == 0 {
                p.set_mailed(true, Some(now() - Duration::days(i % 14)));
            }
            p
        })
        .collect()
}

fn ids(list: &[&Professor]) -> Vec<RecordId> {
    list.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn one_hundred_twenty_records_paginate_in_three_pages() {
    let mut view = ProfessorView::new(50, DEFAULT_FOLLOW_UP_DAYS);
    view.apply(Ok::<_, String>(roster(120)));

    let first = view.page();
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 50);
    assert_eq!(first.items[0].id, RecordId::Int(1));
    assert_eq!(first.items[49].id, RecordId::Int(50));

    assert!(view.goto_page(3));
    let last = view.page();
    assert_eq!(last.items.len(), 20);
    assert_eq!(last.items[0].id, RecordId::Int(101));
    assert_eq!(last.items[19].id, RecordId::Int(120));
}

#[test]
fn page_stays_in_bounds_under_any_sequence() {
    let mut view = ProfessorView::new(50, DEFAULT_FOLLOW_UP_DAYS);
    view.apply(Ok::<_, String>(roster(120)));

    let check = |view: &ProfessorView| {
        let total = view.total_pages();
        assert!(view.page_number() >= 1);
        assert!(view.page_number() <= total.max(1));
    };

    for _ in 0..5 {
        view.next_page();
        check(&view);
    }
    assert_eq!(view.page_number(), 3);
    assert!(!view.goto_page(0));
    assert!(!view.goto_page(4));
    assert_eq!(view.page_number(), 3);

    view.update_filter(|f| f.recruiting = RecruitingFilter::Yes);
    assert_eq!(view.page_number(), 1);
    check(&view);

    for _ in 0..5 {
        view.prev_page();
        check(&view);
    }
    view.update_filter(|f| f.name = "no such professor".into());
    check(&view);
    view.next_page();
    assert_eq!(view.page_number(), 1);
}

#[test]
fn filtering_is_idempotent() {
    let master = roster(120);
    let filters = [
        ProfessorFilter::default(),
        ProfessorFilter {
            name: "professor 01".into(),
            ..Default::default()
        },
        ProfessorFilter {
            university: Some("Stanford".into()),
            interests: vec!["robot".into()],
            recruiting: RecruitingFilter::No,
            ..Default::default()
        },
        ProfessorFilter {
            mailed: MailedFilter::Mailed,
            semester: SemesterFilter::Only(HiringSemester::Spring),
            ..Default::default()
        },
    ];
    for filter in &filters {
        let once = filter.apply(&master);
        let again = filter.apply(&master);
        assert_eq!(ids(&once), ids(&again));

        let owned: Vec<Professor> = once.iter().map(|p| (*p).clone()).collect();
        assert_eq!(ids(&filter.apply(&owned)), ids(&once));
    }
}

#[test]
fn recruiting_yes_and_no_partition_all() {
    let master = roster(120);
    for base in [
        ProfessorFilter::default(),
        ProfessorFilter {
            semester: SemesterFilter::Only(HiringSemester::Fall),
            ..Default::default()
        },
        ProfessorFilter {
            interests: vec!["systems".into()],
            ..Default::default()
        },
    ] {
        let with = |recruiting| ProfessorFilter {
            recruiting,
            ..base.clone()
        };
        let yes = ids(&with(RecruitingFilter::Yes).apply(&master));
        let no = ids(&with(RecruitingFilter::No).apply(&master));
        let all = ids(&with(RecruitingFilter::All).apply(&master));

        assert!(yes.iter().all(|id| !no.contains(id)));
        let mut union: Vec<RecordId> = yes.iter().chain(no.iter()).cloned().collect();
        union.sort_by_key(ToString::to_string);
        let mut expected = all.clone();
        expected.sort_by_key(ToString::to_string);
        assert_eq!(union, expected);
    }
}

#[test]
fn ten_day_old_mail_needs_follow_up_until_sent() {
    let mut p = Professor::new(1, "Grace Hopper");
    p.set_mailed(true, Some(now() - Duration::days(10)));
    assert!(needs_follow_up(&p, now(), DEFAULT_FOLLOW_UP_DAYS));

    p.set_follow_up_sent(true, Some(now()));
    assert!(!needs_follow_up(&p, now(), DEFAULT_FOLLOW_UP_DAYS));
}

#[test]
fn merge_keeps_persisted_mit_and_adds_stanford() {
    let mut mit = University::placeholder("MIT");
    mit.id = Some(RecordId::Int(1));
    mit.status = prof_core::enums::UniversityStatus::Active;
    mit.from_professors = false;

    let mut a = Professor::new(1, "A");
    a.university_name = Some("MIT".into());
    let mut b = Professor::new(2, "B");
    b.university_name = Some("Stanford".into());

    let merged = merge_roster(&[mit.clone()], &inferred_university_names(&[a, b]));
    assert_eq!(merged, vec![mit, University::placeholder("Stanford")]);
}

#[test]
fn merged_roster_never_repeats_a_name() {
    let master = roster(40);
    let mut persisted = University::placeholder("STANFORD");
    persisted.id = Some(RecordId::Int(9));
    let merged = merge_roster(&[persisted], &inferred_university_names(&master));

    let names: Vec<String> = merged.iter().map(University::name_key).collect();
    assert_eq!(names, vec!["stanford", "mit", "usf"]);
    assert_eq!(merged[0].id, Some(RecordId::Int(9)));
}

#[test]
fn recruiting_phd_yes_forces_currently_recruiting() {
    let mut p = Professor::new(1, "A");
    p.currently_recruiting = TriState::No;
    p.set_recruiting_phd_students(TriState::Yes);
    assert_eq!(p.currently_recruiting, TriState::Yes);

    let update = ProfessorUpdateBuilder::new()
        .currently_recruiting(TriState::No)
        .recruiting_phd_students(TriState::Yes)
        .build();
    assert_eq!(update.currently_recruiting, Some(TriState::Yes));
}

#[test]
fn fall_filter_keeps_fall_and_both_only() {
    let master: Vec<Professor> = roster(4);
    let filter = ProfessorFilter {
        semester: SemesterFilter::Only(HiringSemester::Fall),
        ..Default::default()
    };
    let kept: Vec<Option<HiringSemester>> =
        filter.apply(&master).iter().map(|p| p.hiring_semester).collect();
    assert_eq!(
        kept,
        vec![Some(HiringSemester::Fall), Some(HiringSemester::Both)]
    );
}

#[test]
fn university_filters_reset_page_and_narrow_roster() {
    let mut view = UniversityView::new(2);
    let universities: Vec<University> = (1..=5)
        .map(|i| {
            let mut u = University::placeholder(format!("Uni {i}"));
            u.id = Some(RecordId::Int(i));
            u.ranking = (i != 3).then_some(i * 10);
            u
        })
        .collect();
    view.apply_universities(Ok::<_, String>(universities));
    view.apply_professors(Ok::<_, String>(Vec::new()));

    assert!(view.goto_page(3));
    view.set_filter(UniversityFilter {
        max_ranking: Some(40),
        ..Default::default()
    });
    assert_eq!(view.page_number(), 1);
    let names: Vec<String> = view.visible().into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["Uni 1", "Uni 2", "Uni 4"]);

    view.toggle_sort(SortKey::Ranking);
    view.toggle_sort(SortKey::Ranking);
    let names: Vec<String> = view.page().items.into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["Uni 4", "Uni 2"]);
}
