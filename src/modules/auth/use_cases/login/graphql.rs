use serde::Deserialize;

use crate::shared::infrastructure::graphql_client::Operation;

pub const LOGIN_MUTATION: Operation = Operation::mutation(
    "Login",
    r#"
    mutation Login($input: loginAuthTokenInput!) {
        loginAuthToken(input: $input) {
            authToken {
                token
            }
        }
    }
"#,
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub login_auth_token: Option<LoginPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub auth_token: Option<AuthToken>,
}

#[derive(Debug, Deserialize)]
pub struct AuthToken {
    pub token: Option<String>,
}

impl LoginData {
    pub fn into_token(self) -> Option<String> {
        self.login_auth_token?
            .auth_token?
            .token
            .filter(|token| !token.is_empty())
    }
}
