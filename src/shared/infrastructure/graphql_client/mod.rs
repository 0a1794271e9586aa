// Authenticated GraphQL client over the Forseti API.
//
// Purpose
// - The single place where the bearer token meets an outgoing operation.
//
// Responsibilities
// - Read the token from the session before every send and attach it when present.
// - Classify GraphQL errors, marking UNAUTHENTICATED ones, without acting on them.
// - Decode `data` into the caller's response type.
//
// Boundaries
// - No retry, no token refresh, no forced sign-out.
// - The wire is behind the GraphqlTransport port: reqwest in `http`, a scripted
//   double in `in_memory`.

pub mod http;
pub mod in_memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::shared::infrastructure::session::Session;

pub const UNAUTHENTICATED_CODE: &str = "UNAUTHENTICATED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

/// A named GraphQL document, declared next to the use case that sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub kind: OperationKind,
    pub document: &'static str,
}

impl Operation {
    pub const fn query(name: &'static str, document: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Query,
            document,
        }
    }

    pub const fn mutation(name: &'static str, document: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Mutation,
            document,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub operation_name: String,
    pub query: String,
    pub variables: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn error(error: GraphqlError) -> Self {
        Self {
            data: None,
            errors: vec![error],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

impl GraphqlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extensions: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.extensions
            .get_or_insert_with(Map::new)
            .insert("code".into(), Value::String(code.into()));
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.get("code")?.as_str()
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.code() == Some(UNAUTHENTICATED_CODE)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("response unreadable: {0}")]
    Read(String),

    #[error("http {status}: {body}")]
    Http { status: u16, body: String },

    #[error("response is not a GraphQL document: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("{message}")]
    Unauthenticated { message: String },

    #[error("{message}")]
    Graphql { message: String, code: Option<String> },

    #[error("la réponse ne contient aucune donnée")]
    MissingData,

    #[error("réponse inattendue: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Unauthenticated { .. })
    }

    /// Only the first GraphQL error is surfaced, message untouched.
    fn from_graphql(error: GraphqlError) -> Self {
        if error.is_unauthenticated() {
            return ClientError::Unauthenticated {
                message: error.message,
            };
        }
        let code = error.code().map(str::to_string);
        ClientError::Graphql {
            message: error.message,
            code,
        }
    }
}

#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn send(
        &self,
        request: GraphqlRequest,
        bearer: Option<&str>,
    ) -> Result<GraphqlResponse, TransportError>;
}

#[derive(Clone)]
pub struct GraphqlClient {
    transport: Arc<dyn GraphqlTransport>,
    session: Session,
}

impl GraphqlClient {
    pub fn new(transport: Arc<dyn GraphqlTransport>, session: Session) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[tracing::instrument(
        name = "graphql.execute",
        skip(self, operation, variables),
        fields(operation = operation.name, kind = operation.kind.as_str())
    )]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: Value,
    ) -> Result<T, ClientError> {
        let bearer = self.session.bearer().await;
        let request = GraphqlRequest {
            operation_name: operation.name.to_string(),
            query: operation.document.to_string(),
            variables,
        };

        let response = self
            .transport
            .send(request, bearer.as_deref())
            .await
            .inspect_err(|error| tracing::warn!(%error, "transport failure"))?;

        if let Some(error) = response.errors.into_iter().next() {
            let error = ClientError::from_graphql(error);
            if error.is_auth_failure() {
                tracing::warn!(authenticated = bearer.is_some(), "api rejected credentials");
            } else {
                tracing::debug!(%error, "graphql error");
            }
            return Err(error);
        }

        let data = response
            .data
            .filter(|data| !data.is_null())
            .ok_or(ClientError::MissingData)?;
        serde_json::from_value(data).map_err(|error| ClientError::Decode(error.to_string()))
    }

    pub async fn query<T: DeserializeOwned>(&self, operation: Operation, variables: Value) -> Result<T, ClientError> {
        debug_assert_eq!(operation.kind, OperationKind::Query, "{} is not a query", operation.name);
        self.execute(operation, variables).await
    }

    pub async fn mutate<T: DeserializeOwned>(&self, operation: Operation, variables: Value) -> Result<T, ClientError> {
        debug_assert_eq!(operation.kind, OperationKind::Mutation, "{} is not a mutation", operation.name);
        self.execute(operation, variables).await
    }
}
