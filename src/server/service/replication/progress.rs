use serenity::async_trait;

use crate::server::service::replication::remote::ProgressSink;

/// Progress sink writing every message to the log.
///
/// For runs without an interactive requester to report back to.
#[derive(Debug, Clone, Default)]
pub struct LogProgress {
    /// Label prefixed to each message to tell concurrent runs apart.
    label: String,
}

impl LogProgress {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

#[async_trait]
impl ProgressSink for LogProgress {
    async fn notify(&self, message: &str) {
        if self.label.is_empty() {
            tracing::info!("{}", message);
        } else {
            tracing::info!("[{}] {}", self.label, message);
        }
    }
}
