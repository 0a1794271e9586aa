use std::sync::Arc;

use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::graphql_client::http::{HttpTransport, HttpTransportOptions};
use crate::shared::infrastructure::notifications::Notifier;
use crate::shared::infrastructure::notifications::tracing_notifier::TracingNotifier;
use crate::shared::infrastructure::session::Session;
use crate::shared::infrastructure::session::file::FileTokenStore;
use crate::shell::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub client: GraphqlClient,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Real adapters: reqwest over HTTPS, token on disk, notices into the log.
    pub fn build(config: AppConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(
            config.graphql_api_url.clone(),
            HttpTransportOptions {
                timeout: config.request_timeout,
                accept_invalid_certs: config.accept_invalid_certs,
            },
        )?;
        let session = Session::new(Arc::new(FileTokenStore::new(config.token_path.clone())));
        let client = GraphqlClient::new(Arc::new(transport), session.clone());
        tracing::debug!(endpoint = %config.graphql_api_url, "client ready");

        Ok(Self {
            config,
            session,
            client,
            notifier: Arc::new(TracingNotifier),
        })
    }
}
