use serde_json::{Value, json};

use crate::modules::users::core::user::UserRecord;

/// Editable fields of an existing user, bound to the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub id: String,
    pub display_name: String,
    pub email: String,
    /// IRI of the profile to assign; left out of the input when unset.
    pub profile: Option<String>,
}

impl UpdateUser {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            display_name: record.display_name.clone(),
            email: record.email.clone(),
            profile: None,
        }
    }

    pub fn to_variables(&self) -> Value {
        let mut input = json!({
            "id": self.id,
            "displayName": self.display_name,
            "email": self.email,
        });
        if let Some(profile) = &self.profile {
            input["profile"] = json!(profile);
        }
        json!({ "input": input })
    }
}
