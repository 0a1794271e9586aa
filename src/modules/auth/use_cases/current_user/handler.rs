use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::modules::auth::core::identity::{CurrentUser, DEFAULT_DISPLAY_NAME};
use crate::modules::auth::use_cases::current_user::graphql::{
    GET_CURRENT_USER_QUERY, MeData, USER_BY_EMAIL_QUERY, UserByEmailData,
};
use crate::shared::core::errors::Cancelled;
use crate::shared::core::form_state::ensure_live;
use crate::shared::infrastructure::graphql_client::GraphqlClient;

/// Header identity: who `me` says we are, and the display name behind that email.
///
/// Failures are logged and leave the defaults in place. Nothing reaches the notifier.
pub struct CurrentUserController {
    client: GraphqlClient,
    user: CurrentUser,
}

impl CurrentUserController {
    pub fn new(client: GraphqlClient) -> Self {
        Self {
            client,
            user: CurrentUser::default(),
        }
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    /// `known_email` is what the caller already knows from sign-in; `me` takes precedence.
    pub async fn load(
        &mut self,
        known_email: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<&CurrentUser, Cancelled> {
        ensure_live(cancel)?;
        let me = self.client.query::<MeData>(GET_CURRENT_USER_QUERY, json!({})).await;
        ensure_live(cancel)?;

        match me {
            Ok(MeData { me: Some(me) }) => {
                self.user.id = me.id;
                self.user.email = me.email;
                self.user.username = me.username;
            }
            Ok(MeData { me: None }) => tracing::debug!("no current user"),
            Err(error) => tracing::warn!(%error, "current user could not be loaded"),
        }

        let email = self
            .user
            .email
            .clone()
            .or_else(|| known_email.map(str::to_string))
            .filter(|email| !email.is_empty());
        let Some(email) = email else {
            self.user.display_name = DEFAULT_DISPLAY_NAME.to_string();
            return Ok(&self.user);
        };

        let by_email = self
            .client
            .query::<UserByEmailData>(USER_BY_EMAIL_QUERY, json!({ "email": email }))
            .await;
        ensure_live(cancel)?;

        match by_email {
            Ok(data) => {
                let display_name = data
                    .users
                    .and_then(|connection| connection.into_nodes().into_iter().next())
                    .and_then(|node| node.display_name)
                    .filter(|name| !name.is_empty());
                self.user.display_name = display_name.unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());
            }
            Err(error) => tracing::warn!(%error, "display name could not be resolved"),
        }
        Ok(&self.user)
    }
}
