use crate::modules::users::core::user::UserRecord;

/// Fields the server confirmed after a mutation. `None` means "not returned":
/// the client keeps its current value. The identifier is never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub locked: Option<bool>,
    pub deleted: Option<bool>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub profile: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, record: &mut UserRecord) {
        if let Some(display_name) = self.display_name {
            record.display_name = display_name;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(locked) = self.locked {
            record.locked = locked;
        }
        if let Some(deleted) = self.deleted {
            record.deleted = deleted;
        }
        if let Some(created_at) = self.created_at {
            record.created_at = created_at;
        }
        if let Some(profile) = self.profile {
            record.profile = profile;
        }
    }
}
