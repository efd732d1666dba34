//! Shared fixtures for the LATOKEN connector tests

use latoken::core::kernel::ReqwestRest;
use latoken::{LatokenBuilder, LatokenConnector, Logger};
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test_api_key";
pub const TEST_SECRET_KEY: &str = "test_secret_key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
}

/// Logger that keeps every entry for later assertions
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

#[allow(dead_code)]
impl RecordingLogger {
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.entries().iter().filter(|(l, _)| *l == level).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((Level::Log, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((Level::Warn, message.to_string()));
    }
}

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Connector with test credentials pointing at the mock server
pub fn signed_connector(
    server: &MockServer,
    logger: Arc<RecordingLogger>,
) -> LatokenConnector<ReqwestRest> {
    LatokenBuilder::new()
        .with_base_url(server.uri())
        .with_credentials(TEST_API_KEY.to_string(), TEST_SECRET_KEY.to_string())
        .with_logger(logger)
        .build()
        .expect("connector should build")
}

/// Connector without credentials pointing at the mock server
#[allow(dead_code)]
pub fn public_connector(
    server: &MockServer,
    logger: Arc<RecordingLogger>,
) -> LatokenConnector<ReqwestRest> {
    LatokenBuilder::new()
        .with_base_url(server.uri())
        .with_logger(logger)
        .build()
        .expect("connector should build")
}

/// Header value as string, `None` when absent
pub fn header(request: &wiremock::Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
