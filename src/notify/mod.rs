mod events;
mod sinks;

#[cfg(test)]
mod tests;

pub use events::{
    ImagePreview, InvertPreview, PaletteUpdate, PreviewData, INVERT_PREVIEW_EVENT,
    PALETTE_UPDATE_EVENT,
};
pub use sinks::{JsonLinesNotifier, Notification, NullNotifier, RecordingNotifier};

use serde::Serialize;
use serde_json::Value;

/// Out-of-band channel from a node to the host UI
///
/// Delivery is fire-and-forget: implementations never report failures back
/// to the node.
pub trait Notifier: Send + Sync {
    /// Send a named event with a structured payload
    fn notify(&self, event: &str, payload: Value);
}

/// Serialize a typed event and hand it to the notifier
pub fn send<T: Serialize>(notifier: &dyn Notifier, event: &str, payload: &T) {
    match serde_json::to_value(payload) {
        Ok(value) => notifier.notify(event, value),
        Err(e) => tracing::warn!(event, error = %e, "Failed to serialize notification payload"),
    }
}
