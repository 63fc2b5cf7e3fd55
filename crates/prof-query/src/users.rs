//! Account status tallies for the user-management screen.

use std::collections::BTreeMap;

use prof_core::entities::User;
use prof_core::enums::UserStatus;

/// Number of users in each status. Every status is present, possibly zero.
#[must_use]
pub fn status_counts(users: &[User]) -> BTreeMap<UserStatus, usize> {
    let mut counts: BTreeMap<UserStatus, usize> =
        UserStatus::ALL.into_iter().map(|status| (status, 0)).collect();
    for status in users.iter().filter_map(|u| u.status) {
        *counts.entry(status).or_default() += 1;
    }
    counts
}

#[must_use]
pub fn with_status(users: &[User], status: UserStatus) -> Vec<&User> {
    users.iter().filter(|u| u.status == Some(status)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn users() -> Vec<User> {
        serde_json::from_value(serde_json::json!([
            {"id": 1, "status": "PENDING"},
            {"id": 2, "status": "ACTIVE"},
            {"id": 3, "status": "ACTIVE"},
            {"id": 4, "status": "HOLD"},
            {"id": 5}
        ]))
        .unwrap()
    }

    #[test]
    fn counts_cover_every_status() {
        let counts = status_counts(&users());
        assert_eq!(counts[&UserStatus::Pending], 1);
        assert_eq!(counts[&UserStatus::Active], 2);
        assert_eq!(counts[&UserStatus::Hold], 1);
        assert_eq!(counts[&UserStatus::Removed], 0);
    }

    #[test]
    fn with_status_filters_exactly() {
        let list = users();
        let active: Vec<String> = with_status(&list, UserStatus::Active)
            .iter()
            .map(|u| u.id.to_string())
            .collect();
        assert_eq!(active, vec!["2", "3"]);
    }
}
