use serde::Deserialize;

use crate::modules::users::adapters::outbound::user_node::UserPayload;
use crate::shared::infrastructure::graphql_client::Operation;

pub const CREATE_USER_MUTATION: Operation = Operation::mutation(
    "CreateUser",
    r#"
    mutation CreateUser($input: createUserInput!) {
        createUser(input: $input) {
            user {
                id
                email
                displayName
                locked
                deleted
                createdAt
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
pub struct CreateUserData {
    pub create_user: Option<UserPayload>,
}
