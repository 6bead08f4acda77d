//! Webhook constants.

/// GitHub event header.
pub const GITHUB_EVENT_HEADER: &str = "X-GitHub-Event";
/// GitHub SHA-256 signature header.
pub const GITHUB_SIGNATURE_256_HEADER: &str = "X-Hub-Signature-256";
/// GitHub SHA-1 signature header.
pub const GITHUB_SIGNATURE_HEADER: &str = "X-Hub-Signature";
/// Maximum payload length shown when displaying an event.
pub const DISPLAY_PAYLOAD_MAX_CHARS: usize = 1000;
