//! In-memory event capture for logging assertions
//!
//! Installs a layer that records every event with its fields rendered as
//! text, so tests can assert on the boundary events an operation emitted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use curvecat_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP};

/// One recorded event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Field value by key; strings are unquoted, other values use `Debug`
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    /// Lifecycle marker (`start`, `end`, `end_error`)
    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }
}

struct TextFields<'a>(&'a mut HashMap<String, String>);

impl Visit for TextFields<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    // Numbers and bools route here by default and render without quotes
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    log: EventLog,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut TextFields(&mut fields));

        if let Ok(mut log) = self.log.lock() {
            log.push(CapturedEvent {
                level: *event.metadata().level(),
                fields,
            });
        }
    }
}

/// Shared handle onto the captured events
#[derive(Clone)]
pub struct TestCapture {
    log: EventLog,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Events of one operation, in emission order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    /// # Panics
    ///
    /// Panics when no event of `op` carries the lifecycle marker `event`
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events_for_op(op);
        assert!(
            events.iter().any(|e| e.event() == Some(event)),
            "no {} event for op {} among {} events of that op",
            event,
            op,
            events.len()
        );
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (first call only) and
/// return the shared handle
///
/// Every test in the process shares the log, so filter on a unique op name
/// or entity field.
///
/// ```
/// use curvecat_core::logging_facility::test_capture::init_test_capture;
/// use curvecat_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_event_exists("doc_capture_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let log = EventLog::default();
            tracing_subscriber::registry()
                .with(CaptureLayer { log: log.clone() })
                .init();
            TestCapture { log }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_accessors_read_canonical_fields() {
        let fields = HashMap::from([
            (FIELD_OP.to_string(), "create_curve".to_string()),
            (FIELD_EVENT.to_string(), "end".to_string()),
            ("curve_id".to_string(), "7".to_string()),
        ]);
        let event = CapturedEvent {
            level: Level::INFO,
            fields,
        };

        assert_eq!(event.op(), Some("create_curve"));
        assert_eq!(event.event(), Some("end"));
        assert_eq!(event.component(), None);
        assert_eq!(event.field("curve_id"), Some("7"));
    }
}
