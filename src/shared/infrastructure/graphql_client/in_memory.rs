// Scripted transport for controller tests.
//
// Responses are queued per operation name and consumed in order. Every request
// is recorded together with the bearer it carried. A token handed to
// `cancel_during_send` is cancelled while the request is on the wire, so the
// scripted response arrives late.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::shared::infrastructure::graphql_client::{
    GraphqlRequest, GraphqlResponse, GraphqlTransport, TransportError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub request: GraphqlRequest,
    pub bearer: Option<String>,
}

#[derive(Default)]
pub struct InMemoryTransport {
    scripted: Mutex<HashMap<String, VecDeque<Result<GraphqlResponse, TransportError>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    offline: AtomicBool,
    cancel_on_send: Mutex<Option<CancellationToken>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn respond(&self, operation_name: &str, response: GraphqlResponse) {
        self.enqueue(operation_name, Ok(response)).await;
    }

    pub async fn fail(&self, operation_name: &str, error: TransportError) {
        self.enqueue(operation_name, Err(error)).await;
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn cancel_during_send(&self, cancel: CancellationToken) {
        *self.cancel_on_send.lock().await = Some(cancel);
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn requests_for(&self, operation_name: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|recorded| recorded.request.operation_name == operation_name)
            .cloned()
            .collect()
    }

    async fn enqueue(&self, operation_name: &str, outcome: Result<GraphqlResponse, TransportError>) {
        self.scripted
            .lock()
            .await
            .entry(operation_name.to_string())
            .or_default()
            .push_back(outcome);
    }
}

#[async_trait]
impl GraphqlTransport for InMemoryTransport {
    async fn send(
        &self,
        request: GraphqlRequest,
        bearer: Option<&str>,
    ) -> Result<GraphqlResponse, TransportError> {
        let operation_name = request.operation_name.clone();
        self.requests.lock().await.push(RecordedRequest {
            request,
            bearer: bearer.map(str::to_string),
        });
        if let Some(cancel) = self.cancel_on_send.lock().await.as_ref() {
            cancel.cancel();
        }

        if self.offline.load(Ordering::SeqCst) {
            return Err(TransportError::Request("network unreachable".into()));
        }

        self.scripted
            .lock()
            .await
            .get_mut(&operation_name)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(TransportError::Request(format!(
                    "no scripted response for {operation_name}"
                )))
            })
    }
}
