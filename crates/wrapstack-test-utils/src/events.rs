//! Tracing event capture

use crate::record::CallLog;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One event emitted while a closure ran under [`capture_events`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
}

struct Recorder {
    events: CallLog<CapturedEvent>,
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageVisitor(String::new());
        event.record(&mut message);
        self.events.record(CapturedEvent {
            level: *event.metadata().level(),
            message: message.0,
        });
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

/// Run `f` with a thread-local subscriber that records every event
///
/// All levels are captured regardless of `RUST_LOG`.
pub fn capture_events<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let events = CallLog::new();
    let subscriber = tracing_subscriber::registry().with(Recorder {
        events: events.clone(),
    });
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, events.calls())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_level_and_message() {
        let ((), events) = capture_events(|| {
            tracing::debug!("composed {} wrappers", 2);
            tracing::trace!("merged");
        });

        assert_eq!(
            events,
            vec![
                CapturedEvent {
                    level: Level::DEBUG,
                    message: "composed 2 wrappers".to_string(),
                },
                CapturedEvent {
                    level: Level::TRACE,
                    message: "merged".to_string(),
                },
            ]
        );
    }
}
