use serde::Deserialize;

use crate::modules::users::adapters::outbound::user_node::UserPayload;
use crate::shared::infrastructure::graphql_client::Operation;

pub const DELETE_USER_MUTATION: Operation = Operation::mutation(
    "DeleteUser",
    r#"
    mutation DeleteUser($input: deleteUserInput!) {
        deleteUser(input: $input) {
            user {
                id
            }
        }
    }
"#,
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserData {
    pub delete_user: Option<UserPayload>,
}
