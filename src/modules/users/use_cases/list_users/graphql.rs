use serde::Deserialize;

use crate::modules::users::adapters::outbound::user_node::UserConnection;
use crate::shared::infrastructure::graphql_client::Operation;

pub const USERS_QUERY: Operation = Operation::query(
    "Users",
    r#"
    query Users($first: Int, $after: String) {
        users(first: $first, after: $after) {
            edges {
                node {
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
                cursor
            }
            pageInfo {
                hasNextPage
                endCursor
            }
            totalCount
        }
    }
"#,
);

#[derive(Debug, Deserialize)]
pub struct UsersData {
    pub users: Option<UserConnection>,
}
