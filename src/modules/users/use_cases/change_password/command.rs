use serde_json::{Value, json};

use crate::shared::core::errors::{ValidationError, require};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePassword {
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePassword {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("mot de passe", &self.new_password)?;
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn to_variables(&self, id: &str) -> Value {
        json!({ "input": { "id": id, "plainPassword": self.new_password } })
    }
}
