use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::modules::users::core::change::UserChange;
use crate::modules::users::core::patch::UserPatch;
use crate::modules::users::core::user::UserRecord;
use crate::modules::users::use_cases::toggle_lock::graphql::{TOGGLE_LOCK_USER_MUTATION, ToggleLockUserData};
use crate::shared::core::errors::ControllerError;
use crate::shared::core::form_state::{FormState, ensure_live};
use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::notifications::Notifier;

pub const LOCKED: &str = "Utilisateur verrouillé";
pub const UNLOCKED: &str = "Utilisateur déverrouillé";

pub struct ToggleLockController {
    client: GraphqlClient,
    notifier: Arc<dyn Notifier>,
    state: FormState,
}

impl ToggleLockController {
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

    /// The returned `locked` value wins; without one the previous value is flipped.
    pub async fn submit(
        &mut self,
        record: &UserRecord,
        cancel: &CancellationToken,
    ) -> Result<UserChange, ControllerError> {
        ensure_live(cancel)?;
        if self.state.is_in_flight() {
            return Err(ControllerError::Busy);
        }
        let previous = self.state.begin(FormState::Submitting);

        let result = self
            .client
            .mutate::<ToggleLockUserData>(TOGGLE_LOCK_USER_MUTATION, json!({ "input": { "id": record.id } }))
            .await;
        self.state.settle(previous, cancel)?;

        match result {
            Ok(data) => {
                let locked = data
                    .toggle_lock_user
                    .and_then(|payload| payload.user)
                    .and_then(|node| node.locked)
                    .unwrap_or(!record.locked);
                tracing::debug!(id = %record.id, locked, "lock toggled");
                self.state = FormState::Idle;
                self.notifier.success(if locked { LOCKED } else { UNLOCKED });
                Ok(UserChange::Patched {
                    id: record.id.clone(),
                    patch: UserPatch {
                        locked: Some(locked),
                        ..UserPatch::default()
                    },
                })
            }
            Err(error) => Err(self.state.fail(self.notifier.as_ref(), error.into())),
        }
    }
}
