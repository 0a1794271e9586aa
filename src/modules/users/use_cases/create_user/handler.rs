use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::modules::users::adapters::outbound::user_node::UserNode;
use crate::modules::users::core::change::UserChange;
use crate::modules::users::core::user::UserRecord;
use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::modules::users::use_cases::create_user::graphql::{CREATE_USER_MUTATION, CreateUserData};
use crate::shared::core::errors::ControllerError;
use crate::shared::core::form_state::{FormState, ensure_live};
use crate::shared::infrastructure::graphql_client::{ClientError, GraphqlClient};
use crate::shared::infrastructure::notifications::Notifier;

pub const CREATED: &str = "Utilisateur créé";

pub struct CreateUserController {
    client: GraphqlClient,
    notifier: Arc<dyn Notifier>,
    state: FormState,
    form: CreateUser,
}

impl CreateUserController {
    pub fn new(client: GraphqlClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            state: FormState::Idle,
            form: CreateUser::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn form(&self) -> &CreateUser {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CreateUser {
        &mut self.form
    }

    /// Validation failures never reach the network.
    pub async fn submit(&mut self, cancel: &CancellationToken) -> Result<UserChange, ControllerError> {
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
            .mutate::<CreateUserData>(CREATE_USER_MUTATION, self.form.to_variables())
            .await;
        self.state.settle(previous, cancel)?;

        let node = result.and_then(|data| {
            data.create_user
                .and_then(|payload| payload.user)
                .ok_or(ClientError::MissingData)
        });

        match node {
            Ok(node) => {
                let record = self.record_from(node);
                tracing::debug!(id = %record.id, "user created");
                self.state = FormState::Idle;
                self.form = CreateUser::default();
                self.notifier.success(CREATED);
                Ok(UserChange::Appended(record))
            }
            Err(error) => Err(self.state.fail(self.notifier.as_ref(), error.into())),
        }
    }

    /// Fields the server leaves out are taken from what was typed.
    fn record_from(&self, node: UserNode) -> UserRecord {
        let mut record = UserRecord::blank(node.id.clone());
        record.display_name = self.form.display_name.clone();
        record.email = self.form.email.clone();
        node.into_patch().apply_to(&mut record);
        record
    }
}
