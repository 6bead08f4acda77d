use hookbridge_event::Event;
use hookbridge_feed_interface::Attributes;

/// Build the message attributes of an event.
///
/// Empty values are omitted, so an event without repository information only
/// carries its `type`.
pub fn extract_attributes(event: &Event) -> Attributes {
    let mut attributes = Attributes::new();
    let mut insert = |key: &str, value: &str| {
        if !value.is_empty() {
            attributes.insert(key.into(), value.into());
        }
    };

    insert("type", &event.event_type);
    if let Some(info) = &event.repo_info {
        insert("owner", &info.owner_name);
        insert("repository", &info.name);
        insert("organization", &info.organization_name);
    }

    attributes
}
