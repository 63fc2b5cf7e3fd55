//! Priority task list ordering.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use prof_core::entities::Professor;

const SECONDS_PER_DAY: i64 = 86_400;

/// Deadline ascending, undated records last, name as the tie-break.
#[must_use]
pub fn compare_tasks(a: &Professor, b: &Professor) -> Ordering {
    let by_deadline = match (a.deadline, b.deadline) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_deadline.then_with(|| a.display_name().cmp(b.display_name()))
}

#[must_use]
pub fn sort_tasks(mut professors: Vec<Professor>) -> Vec<Professor> {
    professors.sort_by(compare_tasks);
    professors
}

/// Whole days until `deadline`, rounded up. Negative when overdue.
#[must_use]
pub fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (deadline - now).num_seconds();
    seconds.div_euclid(SECONDS_PER_DAY) + i64::from(seconds.rem_euclid(SECONDS_PER_DAY) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap()
    }

    fn task(name: &str, deadline: Option<DateTime<Utc>>) -> Professor {
        let mut p = Professor::new(1, name);
        p.priority = true;
        p.deadline = deadline;
        p
    }

    #[test]
    fn dated_first_then_by_name() {
        let soon = now() + Duration::days(2);
        let later = now() + Duration::days(9);
        let sorted = sort_tasks(vec![
            task("Zed", None),
            task("Bo", Some(later)),
            task("Al", None),
            task("Cy", Some(soon)),
            task("Ann", Some(soon)),
        ]);
        let names: Vec<&str> = sorted.iter().map(Professor::display_name).collect();
        assert_eq!(names, vec!["Ann", "Cy", "Bo", "Al", "Zed"]);
    }

    #[test]
    fn days_until_rounds_up() {
        assert_eq!(days_until(now() + Duration::hours(1), now()), 1);
        assert_eq!(days_until(now() + Duration::days(3), now()), 3);
        assert_eq!(days_until(now(), now()), 0);
        assert_eq!(days_until(now() - Duration::hours(30), now()), -1);
    }
}
