use std::sync::Arc;

use axum_test::TestServer;
use fake::faker::internet::en::SafeEmail;
use fake::Fake;

use expertbook_api::{router, ApiState};
use expertbook_client::mock::gateways::{MockDirectory, MockGateway};
use expertbook_core::schedule::hours::BusinessHours;

/// Mocked collaborators plus everything needed to stand up the real
/// router around them.
pub struct TestContext {
    pub directory: MockDirectory,
    pub bookings: MockGateway,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            directory: MockDirectory::new(),
            bookings: MockGateway::new(),
        }
    }

    /// Consumes the context and builds an in-process server over the real
    /// router with the default slot universe.
    pub fn server(self) -> TestServer {
        let state = Arc::new(ApiState::new(
            Arc::new(self.directory),
            Arc::new(self.bookings),
            BusinessHours::default(),
        ));
        TestServer::new(router(state)).expect("failed to build test server")
    }

    /// Consumes the context and builds two servers over one shared state.
    ///
    /// Each `TestServer` serializes its own requests behind an internal
    /// transport lock held for the whole `send().await`, so genuinely
    /// concurrent requests against the same state must come from distinct
    /// servers sharing the same `ApiState`.
    pub fn server_pair(self) -> (TestServer, TestServer) {
        let state = Arc::new(ApiState::new(
            Arc::new(self.directory),
            Arc::new(self.bookings),
            BusinessHours::default(),
        ));
        let app = router(state);
        let first = TestServer::new(app.clone()).expect("failed to build test server");
        let second = TestServer::new(app).expect("failed to build test server");
        (first, second)
    }
}

/// A plausible expert address; the handlers treat it as opaque.
pub fn expert_email() -> String {
    SafeEmail().fake()
}
