use serde::Deserialize;

use crate::modules::users::adapters::outbound::user_node::UserConnection;
use crate::shared::infrastructure::graphql_client::Operation;

pub const GET_CURRENT_USER_QUERY: Operation = Operation::query(
    "GetCurrentUser",
    r#"
    query GetCurrentUser {
        me {
            id
            email
            username
        }
    }
"#,
);

pub const USER_BY_EMAIL_QUERY: Operation = Operation::query(
    "UserByEmail",
    r#"
    query UserByEmail($email: String) {
        users(first: 1, email: $email) {
            edges {
                node {
                    id
                    email
                    displayName
                }
            }
            totalCount
        }
    }
"#,
);

#[derive(Debug, Deserialize)]
pub struct MeData {
    pub me: Option<MeNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeNode {
    pub id: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserByEmailData {
    pub users: Option<UserConnection>,
}
