use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::modules::users::core::user::UserRecord;
use crate::modules::users::use_cases::view_user::graphql::{USER_QUERY, UserData};
use crate::shared::core::errors::ControllerError;
use crate::shared::core::form_state::{FormState, ensure_live};
use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::notifications::Notifier;

/// Fetch the full detail of one user.
pub async fn fetch_user(client: &GraphqlClient, id: &str) -> Result<UserRecord, ControllerError> {
    let data: UserData = client.query(USER_QUERY, json!({ "id": id })).await?;
    data.user
        .map(|node| node.into_record())
        .ok_or(ControllerError::NotFound("Utilisateur"))
}

pub struct ViewUserController {
    client: GraphqlClient,
    notifier: Arc<dyn Notifier>,
    state: FormState,
    user: Option<UserRecord>,
}

impl ViewUserController {
    pub fn new(client: GraphqlClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            state: FormState::Idle,
            user: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub async fn load(
        &mut self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<&UserRecord, ControllerError> {
        ensure_live(cancel)?;
        if self.state.is_in_flight() {
            return Err(ControllerError::Busy);
        }
        let previous = self.state.begin(FormState::Loading);

        let result = fetch_user(&self.client, id).await;
        self.state.settle(previous, cancel)?;

        match result {
            Ok(user) => {
                self.state = FormState::Idle;
                Ok(&*self.user.insert(user))
            }
            Err(error) => Err(self.state.fail(self.notifier.as_ref(), error)),
        }
    }
}
