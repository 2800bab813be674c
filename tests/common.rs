//! Common test utilities and helpers

use std::io;
use std::sync::{Arc, Mutex};
use zdk_core::ToolContext;
use zdk_scraperapi::ScraperApiClient;
use zdk_tool::DefaultToolContext;

pub const TEST_KEY: &str = "integration-secret-key";

/// Client pointed at a local mock server
pub fn mock_client(server: &mockito::ServerGuard) -> Arc<ScraperApiClient> {
    let client = ScraperApiClient::new(TEST_KEY)
        .expect("valid key")
        .with_base_url(&server.url())
        .expect("valid mock URL");
    Arc::new(client)
}

pub fn tool_context(call_id: &str) -> Arc<dyn ToolContext> {
    Arc::new(DefaultToolContext::new(call_id, "integration-invocation"))
}

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
