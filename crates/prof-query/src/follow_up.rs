//! Needs-follow-up indicator.

use chrono::{DateTime, Duration, Utc};
use prof_core::entities::Professor;

pub const DEFAULT_FOLLOW_UP_DAYS: i64 = 7;

/// Mailed, no follow-up yet, and the first mail is at least `days` old.
///
/// Display hint only; nothing is mutated. A window that does not fit the
/// calendar is never due.
#[must_use]
pub fn needs_follow_up(professor: &Professor, now: DateTime<Utc>, days: i64) -> bool {
    if !professor.mailed || professor.follow_up_mail_sent {
        return false;
    }
    let Some(cutoff) = Duration::try_days(days).and_then(|window| now.checked_sub_signed(window))
    else {
        return false;
    };
    professor
        .mailing_date
        .is_some_and(|mailed_at| mailed_at <= cutoff)
}

#[must_use]
pub fn follow_up_count<'a, I>(professors: I, now: DateTime<Utc>, days: i64) -> usize
where
    I: IntoIterator<Item = &'a Professor>,
{
    professors
        .into_iter()
        .filter(|p| needs_follow_up(p, now, days))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap()
    }

    fn mailed_days_ago(days: i64) -> Professor {
        let mut p = Professor::new(1, "P");
        p.set_mailed(true, Some(now() - Duration::days(days)));
        p
    }

    #[test]
    fn ten_days_without_follow_up_needs_one() {
        let p = mailed_days_ago(10);
        assert!(needs_follow_up(&p, now(), DEFAULT_FOLLOW_UP_DAYS));
    }

    #[test]
    fn follow_up_sent_clears_indicator() {
        let mut p = mailed_days_ago(10);
        p.set_follow_up_sent(true, Some(now()));
        assert!(!needs_follow_up(&p, now(), DEFAULT_FOLLOW_UP_DAYS));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        assert!(needs_follow_up(&mailed_days_ago(7), now(), 7));
        assert!(!needs_follow_up(&mailed_days_ago(6), now(), 7));
    }

    #[test]
    fn out_of_range_window_is_never_due() {
        let p = mailed_days_ago(0);
        assert!(!needs_follow_up(&p, now(), 100_000_000));
        assert!(!needs_follow_up(&p, now(), i64::MAX));
        assert!(!needs_follow_up(&p, now(), i64::MIN));
        assert!(!needs_follow_up(&mailed_days_ago(30), now(), i64::MAX));
        assert_eq!(follow_up_count(&[p], now(), 100_000_000), 0);
    }

    #[test]
    fn mailed_without_date_never_qualifies() {
        let mut p = Professor::new(1, "P");
        p.mailed = true;
        assert!(!needs_follow_up(&p, now(), 7));
        assert!(!needs_follow_up(&Professor::new(2, "Q"), now(), 7));
    }

    #[test]
    fn counts_only_qualifying_records() {
        let list = vec![mailed_days_ago(30), mailed_days_ago(2), mailed_days_ago(8)];
        assert_eq!(follow_up_count(&list, now(), 7), 2);
    }
}
