use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::sync::Mutex;

use super::Notifier;

/// A delivered event, as captured by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub event: String,
    #[serde(rename = "data")]
    pub payload: Value,
}

/// Discards every event
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: &str, _payload: Value) {}
}

/// Keeps every event in memory, in delivery order
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events matching a name
    pub fn named(&self, event: &str) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter(|n| n.event == event)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &str, payload: Value) {
        if let Ok(mut events) = self.events.lock() {
            events.push(Notification {
                event: event.to_string(),
                payload,
            });
        }
    }
}

/// Writes `{"event": ..., "data": ...}` objects, one per line
pub struct JsonLinesNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Notifier for JsonLinesNotifier<W> {
    fn notify(&self, event: &str, payload: Value) {
        let line = Notification {
            event: event.to_string(),
            payload,
        };

        let Ok(mut out) = self.out.lock() else {
            tracing::warn!(event, "Notifier output lock poisoned, dropping event");
            return;
        };

        let written = write_line(&mut *out, &line);

        if let Err(e) = written {
            tracing::warn!(event, error = %e, "Failed to deliver notification");
        }
    }
}

fn write_line<W: Write>(out: &mut W, line: &Notification) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, line)?;
    writeln!(out)?;
    out.flush()
}
