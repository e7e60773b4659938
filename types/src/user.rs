use serde::{Deserialize, Serialize};

pub const FALLBACK_GREETING_NAME: &str = "Admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Admin,
    Agent,
    HotelManager,
}

/// The signed-in user as far as the dashboard cares.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_type: UserType,
}

impl CurrentUser {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            user_type: UserType::Admin,
        }
    }
}

/// First whitespace-separated token of the user's name, or
/// [`FALLBACK_GREETING_NAME`] when there is none.
pub fn greeting_name(user: Option<&CurrentUser>) -> &str {
    user.and_then(|u| u.name.as_deref())
        .and_then(|name| name.split_whitespace().next())
        .unwrap_or(FALLBACK_GREETING_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_of_full_name() {
        let user = CurrentUser::named("Jane Smith");
        assert_eq!(greeting_name(Some(&user)), "Jane");
    }

    #[test]
    fn single_name_is_used_whole() {
        let user = CurrentUser::named("Cher");
        assert_eq!(greeting_name(Some(&user)), "Cher");
    }

    #[test]
    fn stops_at_any_whitespace() {
        let user = CurrentUser::named("Jean\tLuc Picard");
        assert_eq!(greeting_name(Some(&user)), "Jean");
    }

    #[test]
    fn falls_back_without_user() {
        assert_eq!(greeting_name(None), "Admin");
    }

    #[test]
    fn falls_back_without_name() {
        assert_eq!(greeting_name(Some(&CurrentUser::default())), "Admin");
    }

    #[test]
    fn falls_back_on_empty_or_blank_name() {
        assert_eq!(greeting_name(Some(&CurrentUser::named(""))), "Admin");
        assert_eq!(greeting_name(Some(&CurrentUser::named("   "))), "Admin");
    }

    #[test]
    fn deserializes_empty_object() {
        let user: CurrentUser = serde_json::from_str("{}").unwrap();
        assert_eq!(user, CurrentUser::default());
        assert_eq!(greeting_name(Some(&user)), "Admin");
    }

    #[test]
    fn deserializes_user_type() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"name":"Sam","user_type":"hotel_manager"}"#).unwrap();
        assert_eq!(user.user_type, UserType::HotelManager);
    }
}
