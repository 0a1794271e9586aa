use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::modules::users::use_cases::change_password::command::ChangePassword;
use crate::modules::users::use_cases::change_password::graphql::{
    CHANGE_PASSWORD_USER_MUTATION, ChangePasswordUserData,
};
use crate::shared::core::errors::ControllerError;
use crate::shared::core::form_state::{FormState, ensure_live};
use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::notifications::Notifier;

pub const PASSWORD_CHANGED: &str = "Mot de passe modifié";

/// Password reset for one user. Produces no list change.
pub struct ChangePasswordController {
    client: GraphqlClient,
    notifier: Arc<dyn Notifier>,
    state: FormState,
    user_id: String,
    form: ChangePassword,
}

impl ChangePasswordController {
    pub fn new(client: GraphqlClient, notifier: Arc<dyn Notifier>, user_id: impl Into<String>) -> Self {
        Self {
            client,
            notifier,
            state: FormState::Idle,
            user_id: user_id.into(),
            form: ChangePassword::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn form(&self) -> &ChangePassword {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ChangePassword {
        &mut self.form
    }

    pub async fn submit(&mut self, cancel: &CancellationToken) -> Result<(), ControllerError> {
        ensure_live(cancel)?;
        if self.state.is_in_flight() {
            return Err(ControllerError::Busy);
        }
        if let Err(error) = self.form.validate() {
            return Err(self.state.fail(self.notifier.as_ref(), error.into()));
        }
        let previous = self.state.begin(FormState::Submitting);

        let result = self
            .client
            .mutate::<ChangePasswordUserData>(
                CHANGE_PASSWORD_USER_MUTATION,
                self.form.to_variables(&self.user_id),
            )
            .await;
        self.state.settle(previous, cancel)?;

        match result {
            Ok(_) => {
                tracing::debug!(id = %self.user_id, "password changed");
                self.form = ChangePassword::default();
                self.state = FormState::Idle;
                self.notifier.success(PASSWORD_CHANGED);
                Ok(())
            }
            Err(error) => Err(self.state.fail(self.notifier.as_ref(), error.into())),
        }
    }
}
