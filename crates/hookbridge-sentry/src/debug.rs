use sentry::{protocol::Event, Hub, Level};

/// Send a test event, returning its identifier.
pub fn send_test_event(message: Option<String>) -> sentry::types::Uuid {
    let event = Event {
        message: Some(message.unwrap_or_else(|| "This is a test".into())),
        level: Level::Info,
        ..Default::default()
    };

    Hub::with_active(|hub| hub.capture_event(event))
}
