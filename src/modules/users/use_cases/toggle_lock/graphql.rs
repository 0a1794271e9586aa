use serde::Deserialize;

use crate::modules::users::adapters::outbound::user_node::UserPayload;
use crate::shared::infrastructure::graphql_client::Operation;

pub const TOGGLE_LOCK_USER_MUTATION: Operation = Operation::mutation(
    "ToggleLockUser",
    r#"
    mutation ToggleLockUser($input: toggleLockUserInput!) {
        toggleLockUser(input: $input) {
            user {
                id
                locked
            }
        }
    }
"#,
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLockUserData {
    pub toggle_lock_user: Option<UserPayload>,
}
