use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::modules::users::core::change::UserChange;
use crate::modules::users::core::user::UserRecord;
use crate::modules::users::use_cases::edit_user::command::UpdateUser;
use crate::modules::users::use_cases::edit_user::graphql::{UPDATE_USER_MUTATION, UpdateUserData};
use crate::modules::users::use_cases::view_user::handler::fetch_user;
use crate::shared::core::errors::ControllerError;
use crate::shared::core::form_state::{FormState, ensure_live};
use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::notifications::Notifier;

pub const UPDATED: &str = "Utilisateur mis à jour";

/// Edit surface for one user, opened from a row the list already holds.
pub struct EditUserController {
    client: GraphqlClient,
    notifier: Arc<dyn Notifier>,
    state: FormState,
    form: UpdateUser,
    open: bool,
}

impl EditUserController {
    pub fn open(client: GraphqlClient, notifier: Arc<dyn Notifier>, record: &UserRecord) -> Self {
        Self {
            client,
            notifier,
            state: FormState::Idle,
            form: UpdateUser::from_record(record),
            open: true,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn form(&self) -> &UpdateUser {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UpdateUser {
        &mut self.form
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Reload the full detail into the form, replacing what the list row provided.
    pub async fn refresh(&mut self, cancel: &CancellationToken) -> Result<(), ControllerError> {
        ensure_live(cancel)?;
        if self.state.is_in_flight() {
            return Err(ControllerError::Busy);
        }
        let previous = self.state.begin(FormState::Loading);

        let result = fetch_user(&self.client, &self.form.id).await;
        self.state.settle(previous, cancel)?;

        match result {
            Ok(user) => {
                self.form.display_name = user.display_name;
                self.form.email = user.email;
                self.state = FormState::Idle;
                Ok(())
            }
            Err(error) => Err(self.state.fail(self.notifier.as_ref(), error)),
        }
    }

    /// On success the form closes and the change carries only server-confirmed fields.
    /// On failure the form stays open with the user's input intact.
    pub async fn submit(&mut self, cancel: &CancellationToken) -> Result<UserChange, ControllerError> {
        ensure_live(cancel)?;
        if self.state.is_in_flight() {
            return Err(ControllerError::Busy);
        }
        let previous = self.state.begin(FormState::Submitting);

        let result = self
            .client
            .mutate::<UpdateUserData>(UPDATE_USER_MUTATION, self.form.to_variables())
            .await;
        self.state.settle(previous, cancel)?;

        match result {
            Ok(data) => {
                let patch = data
                    .update_user
                    .and_then(|payload| payload.user)
                    .map(|node| node.into_patch())
                    .unwrap_or_default();
                self.state = FormState::Idle;
                self.open = false;
                self.notifier.success(UPDATED);
                tracing::debug!(id = %self.form.id, "user updated");
                Ok(UserChange::Patched {
                    id: self.form.id.clone(),
                    patch,
                })
            }
            Err(error) => Err(self.state.fail(self.notifier.as_ref(), error.into())),
        }
    }
}
