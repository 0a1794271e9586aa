use serde::Deserialize;

use crate::modules::users::adapters::outbound::user_node::UserPayload;
use crate::shared::infrastructure::graphql_client::Operation;

pub const CHANGE_PASSWORD_USER_MUTATION: Operation = Operation::mutation(
    "ChangePasswordUser",
    r#"
    mutation ChangePasswordUser($input: changePasswordUserInput!) {
        changePasswordUser(input: $input) {
            user {
                id
            }
        }
    }
"#,
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordUserData {
    pub change_password_user: Option<UserPayload>,
}
