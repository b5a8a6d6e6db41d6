use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Site-wide roles, ordered by increasing privileges.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, IntoStaticStr, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Visitor,
    User,
    Member,
    EliteMember,
    Admin,
}

impl From<String> for UserRole {
    fn from(value: String) -> UserRole {
        UserRole::from_str(&value).unwrap_or(UserRole::Visitor)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub nickname: String,
    pub role: UserRole,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Members, elite members and admins appear on the roster.
    pub fn is_member(&self) -> bool {
        self.role >= UserRole::Member
    }
}

#[cfg(test)]
mod tests {
    use crate::user::{User, UserRole};

    #[test]
    fn test_user_role_ordering() {
        assert!(UserRole::Visitor < UserRole::User);
        assert!(UserRole::User < UserRole::Member);
        assert!(UserRole::Member < UserRole::EliteMember);
        assert!(UserRole::EliteMember < UserRole::Admin);
    }

    #[test]
    fn test_user_role_from_string() {
        assert_eq!(UserRole::from(String::from("admin")), UserRole::Admin);
        assert_eq!(UserRole::from(String::from("elite_member")), UserRole::EliteMember);
        assert_eq!(UserRole::from(String::from("member")), UserRole::Member);
        assert_eq!(UserRole::from(String::from("user")), UserRole::User);
        assert_eq!(UserRole::from(String::from("nonsense")), UserRole::Visitor);
    }

    #[test]
    fn test_user_role_checks() {
        let mut user = User::default();
        assert_eq!(user.is_admin(), false);
        assert_eq!(user.is_member(), false);

        user.role = UserRole::Member;
        assert_eq!(user.is_member(), true);
        assert_eq!(user.is_admin(), false);

        user.role = UserRole::Admin;
        assert_eq!(user.is_member(), true);
        assert_eq!(user.is_admin(), true);
    }

    #[test]
    fn test_user_role_serde_round_trip() {
        let serialized = serde_json::to_string(&UserRole::EliteMember).expect("UserRole should serialize");
        assert_eq!(serialized, "\"elite_member\"");
        let deserialized: UserRole = serde_json::from_str(&serialized).expect("UserRole should deserialize");
        assert_eq!(deserialized, UserRole::EliteMember);
    }
}
