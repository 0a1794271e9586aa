use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::modules::auth::core::identity::AuthenticatedUser;
use crate::modules::auth::use_cases::login::command::Credentials;
use crate::modules::auth::use_cases::login::graphql::{LOGIN_MUTATION, LoginData};
use crate::shared::core::errors::{Cancelled, ValidationError};
use crate::shared::core::form_state::{FormState, ensure_live};
use crate::shared::infrastructure::graphql_client::{ClientError, GraphqlClient, TransportError};
use crate::shared::infrastructure::session::SessionError;

pub const LOGIN_FAILED: &str = "Erreur de connexion";

#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API's own message, shown as-is.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Erreur de connexion")]
    MissingToken,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Une connexion est déjà en cours")]
    Busy,

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl From<ClientError> for LoginError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Transport(error) => LoginError::Transport(error),
            ClientError::Unauthenticated { message } | ClientError::Graphql { message, .. } => {
                if message.trim().is_empty() {
                    LoginError::Rejected(LOGIN_FAILED.to_string())
                } else {
                    LoginError::Rejected(message)
                }
            }
            ClientError::MissingData | ClientError::Decode(_) => LoginError::MissingToken,
        }
    }
}

/// Exchanges credentials for a bearer token and stores it in the client's session.
pub struct LoginController {
    client: GraphqlClient,
    state: FormState,
}

impl LoginController {
    pub fn new(client: GraphqlClient) -> Self {
        Self {
            client,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[tracing::instrument(name = "auth.login", skip_all, fields(username = %credentials.username))]
    pub async fn submit(
        &mut self,
        credentials: &Credentials,
        cancel: &CancellationToken,
    ) -> Result<AuthenticatedUser, LoginError> {
        ensure_live(cancel)?;
        if self.state.is_in_flight() {
            return Err(LoginError::Busy);
        }
        if let Err(error) = credentials.validate() {
            return Err(self.fail(error.into()));
        }
        let previous = self.state.begin(FormState::Submitting);

        let result = self
            .client
            .mutate::<LoginData>(LOGIN_MUTATION, credentials.to_variables())
            .await;
        self.state.settle(previous, cancel)?;

        let token = match result {
            Ok(data) => data.into_token().ok_or(LoginError::MissingToken),
            Err(error) => Err(error.into()),
        };
        let token = match token {
            Ok(token) => token,
            Err(error) => return Err(self.fail(error)),
        };

        if let Err(error) = self.client.session().sign_in(&token).await {
            return Err(self.fail(error.into()));
        }
        tracing::info!("signed in");
        self.state = FormState::Idle;
        Ok(AuthenticatedUser::from_username(&credentials.username))
    }

    fn fail(&mut self, error: LoginError) -> LoginError {
        tracing::warn!(%error, "login failed");
        self.state = FormState::Error(error.to_string());
        error
    }
}
