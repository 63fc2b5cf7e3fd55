//! Role to capability mapping.

use prof_core::entities::{Permissions, User};
use prof_core::enums::Role;

/// Capabilities for `role`.
///
/// Admins get everything and visitors are view-only. Regular users get the
/// flags from their profile, or nothing when the profile could not be read.
#[must_use]
pub fn for_role(role: Role, profile: Option<&User>) -> Permissions {
    match role {
        Role::Admin => Permissions::all(),
        Role::Visitor => Permissions::view_only(),
        Role::User => profile.map(User::permissions).unwrap_or_default(),
    }
}

/// Whether the role needs its profile fetched to resolve permissions.
#[must_use]
pub const fn needs_profile(role: Role) -> bool {
    matches!(role, Role::User)
}

/// Visitors may list visitor passwords but never delete them.
#[must_use]
pub const fn can_delete_visitor_passwords(role: Role) -> bool {
    !matches!(role, Role::Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user_with_edit() -> User {
        serde_json::from_value(serde_json::json!({"id": 1, "canEdit": true})).unwrap()
    }

    #[test]
    fn admin_and_visitor_ignore_profile() {
        let user = user_with_edit();
        assert_eq!(for_role(Role::Admin, None), Permissions::all());
        assert_eq!(for_role(Role::Visitor, Some(&user)), Permissions::view_only());
    }

    #[test]
    fn user_reads_profile_flags() {
        let user = user_with_edit();
        let perms = for_role(Role::User, Some(&user));
        assert!(perms.can_edit);
        assert!(!perms.can_view);
    }

    #[test]
    fn user_without_profile_has_nothing() {
        assert_eq!(for_role(Role::User, None), Permissions::default());
    }

    #[test]
    fn visitors_cannot_delete_passwords() {
        assert!(!can_delete_visitor_passwords(Role::Visitor));
        assert!(can_delete_visitor_passwords(Role::Admin));
        assert!(needs_profile(Role::User));
    }
}
