use serde::Deserialize;

use crate::modules::users::adapters::outbound::user_node::UserPayload;
use crate::shared::infrastructure::graphql_client::Operation;

pub const UPDATE_USER_MUTATION: Operation = Operation::mutation(
    "UpdateUser",
    r#"
    mutation UpdateUser($input: updateUserInput!) {
        updateUser(input: $input) {
            user {
                id
                email
                displayName
                locked
                deleted
                profile {
                    label
                }
            }
        }
    }
"#,
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserData {
    pub update_user: Option<UserPayload>,
}
