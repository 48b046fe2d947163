use std::collections::BTreeMap;

use crate::error::CommonError;
use crate::error::Result;

/// Finalized event payload: a flat string-keyed mapping handed over to the
/// envelope framework for queueing and transmission. Ordered so repeated
/// serialization of the same payload is byte-identical.
pub type EventData = BTreeMap<String, String>;

/// Contract between a payload producer and the event envelope that wraps it.
/// The envelope owns ids, timestamps and session correlation; producers only
/// supply the category tag and the payload itself.
pub trait Event: Send + Sync {
    /// Event category understood by the backend pipeline.
    fn event_type(&self) -> &str;

    fn data(&self) -> &EventData;

    fn serialize(&self) -> Result<String> {
        if self.data().is_empty() {
            return Err(CommonError::BadRequest("empty event payload".to_string()));
        }
        Ok(serde_json::to_string(self.data())?)
    }
}
