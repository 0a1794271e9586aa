// Wiring shared by controller tests: a scripted transport, a signed-in session
// and a notifier that remembers what it was told.

use std::sync::Arc;

use rstest::fixture;

use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::graphql_client::in_memory::InMemoryTransport;
use crate::shared::infrastructure::notifications::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::session::Session;
use crate::shared::infrastructure::session::in_memory::InMemoryTokenStore;

pub const FIXED_TOKEN: &str = "token-fixed-0001";

pub struct TestHarness {
    pub transport: Arc<InMemoryTransport>,
    pub session: Session,
    pub client: GraphqlClient,
    pub notifier: Arc<InMemoryNotifier>,
}

#[fixture]
pub fn harness() -> TestHarness {
    let transport = Arc::new(InMemoryTransport::new());
    let session = Session::new(Arc::new(InMemoryTokenStore::with_token(FIXED_TOKEN)));
    let client = GraphqlClient::new(transport.clone(), session.clone());
    TestHarness {
        transport,
        session,
        client,
        notifier: Arc::new(InMemoryNotifier::new()),
    }
}
