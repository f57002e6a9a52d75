use async_trait::async_trait;
use tracing::info;

use crate::connect::envelope::NotificationRecord;
use crate::error::Result;

/// Where accepted notifications go once the response has been decided.
#[async_trait]
pub trait EnvelopeSink: Send + Sync {
    async fn publish(&self, record: NotificationRecord) -> Result<()>;
}

/// Default sink: records the status change as a structured log event.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

#[async_trait]
impl EnvelopeSink for TracingSink {
    async fn publish(&self, record: NotificationRecord) -> Result<()> {
        info!(
            envelope_id = %record.envelope_id,
            status = %record.status,
            status_changed_at = %record.status_changed_date_time,
            recipient_statuses = %record.recipient_statuses,
            "envelope status changed"
        );
        Ok(())
    }
}
