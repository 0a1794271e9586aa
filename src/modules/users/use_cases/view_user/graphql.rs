use serde::Deserialize;

use crate::modules::users::adapters::outbound::user_node::UserNode;
use crate::shared::infrastructure::graphql_client::Operation;

pub const USER_QUERY: Operation = Operation::query(
    "User",
    r#"
    query User($id: ID!) {
        user(id: $id) {
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
"#,
);

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user: Option<UserNode>,
}
