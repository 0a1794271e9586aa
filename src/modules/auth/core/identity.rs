/// Shown in the header until the API tells us better.
pub const DEFAULT_DISPLAY_NAME: &str = "Utilisateur";

/// Who just signed in. The login mutation returns nothing but a token, so every
/// field carries the submitted username until `CurrentUser` resolves the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl AuthenticatedUser {
    pub fn from_username(username: &str) -> Self {
        Self {
            id: username.to_string(),
            email: username.to_string(),
            name: username.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub display_name: String,
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self {
            id: None,
            email: None,
            username: None,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}
