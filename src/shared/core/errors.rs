use thiserror::Error;

use crate::shared::infrastructure::graphql_client::ClientError;
use crate::shared::infrastructure::session::SessionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Le champ {0} est requis")]
    Required(&'static str),

    #[error("Les mots de passe ne correspondent pas")]
    PasswordMismatch,
}

/// Raised when a late result arrives for a view that has been torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Opération annulée")]
pub struct Cancelled;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("{0} introuvable")]
    NotFound(&'static str),

    #[error("Une opération est déjà en cours")]
    Busy,

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

/// Non-empty check shared by the form commands.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}
