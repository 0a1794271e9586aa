use serde_json::{Value, json};

use crate::shared::core::errors::{ValidationError, require};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUser {
    pub display_name: String,
    pub email: String,
    /// IRI of the profile to assign.
    pub profile: Option<String>,
    pub plain_password: String,
    pub confirm_password: String,
}

impl CreateUser {
    /// Runs before any request is built. Required fields first, then the confirmation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("nom", &self.display_name)?;
        require("email", &self.email)?;
        require("mot de passe", &self.plain_password)?;
        if self.plain_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn to_variables(&self) -> Value {
        let mut input = json!({
            "displayName": self.display_name,
            "email": self.email,
            "plainPassword": self.plain_password,
        });
        if let Some(profile) = &self.profile {
            input["profile"] = json!(profile);
        }
        json!({ "input": input })
    }
}
