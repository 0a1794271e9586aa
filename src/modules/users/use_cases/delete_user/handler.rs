use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::modules::users::core::change::UserChange;
use crate::modules::users::use_cases::delete_user::graphql::{DELETE_USER_MUTATION, DeleteUserData};
use crate::shared::core::errors::ControllerError;
use crate::shared::core::form_state::{FormState, ensure_live};
use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::notifications::Notifier;

pub const DELETED: &str = "Utilisateur supprimé";

/// Confirmation dialog behind the row's delete action.
pub struct DeleteUserController {
    client: GraphqlClient,
    notifier: Arc<dyn Notifier>,
    state: FormState,
}

impl DeleteUserController {
    pub fn new(client: GraphqlClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The list keeps the row and raises its soft-delete flag.
    pub async fn submit(&mut self, id: &str, cancel: &CancellationToken) -> Result<UserChange, ControllerError> {
        ensure_live(cancel)?;
        if self.state.is_in_flight() {
            return Err(ControllerError::Busy);
        }
        let previous = self.state.begin(FormState::Submitting);

        let result = self
            .client
            .mutate::<DeleteUserData>(DELETE_USER_MUTATION, json!({ "input": { "id": id } }))
            .await;
        self.state.settle(previous, cancel)?;

        match result {
            Ok(_) => {
                tracing::debug!(id, "user deleted");
                self.state = FormState::Idle;
                self.notifier.success(DELETED);
                Ok(UserChange::SoftDeleted { id: id.to_string() })
            }
            Err(error) => Err(self.state.fail(self.notifier.as_ref(), error.into())),
        }
    }
}
