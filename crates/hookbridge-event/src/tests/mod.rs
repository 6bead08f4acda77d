//! Parser tests


use hookbridge_crypto::{Signature, SignatureAlgorithm};
use pretty_assertions::assert_eq;
use time::{macros::datetime, OffsetDateTime};

use crate::{
    constants::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_256_HEADER, GITHUB_SIGNATURE_HEADER},
    AuthenticationError, DecodeError, EventError, EventParser, RepoInfo, WebhookRequest,
};

const SECRET: &str = "iAmAsEcReTkEy";
const RECEIVED: OffsetDateTime = datetime!(2024-03-01 12:30:00 UTC);

fn sign(algorithm: SignatureAlgorithm, body: &str) -> String {
    Signature::compute_header(algorithm, body.as_bytes(), SECRET).unwrap()
}

fn signed_request(event_type: &str, body: &str) -> WebhookRequest {
    WebhookRequest::new(body)
        .with_header("Content-Type", "application/json")
        .with_header(GITHUB_EVENT_HEADER, event_type)
        .with_header(
            GITHUB_SIGNATURE_256_HEADER,
            &sign(SignatureAlgorithm::Sha256, body),
        )
}

fn parser() -> EventParser {
    EventParser::new(SECRET)
}

fn auth_error(result: crate::Result<crate::Event>) -> AuthenticationError {
    match result {
        Err(EventError::Authentication { source }) => source,
        other => panic!("expected authentication error, got {other:?}"),
    }
}

fn decode_error(result: crate::Result<crate::Event>) -> DecodeError {
    match result {
        Err(EventError::Decode { source }) => source,
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_push_public() {
    let request = signed_request("push", fixtures::PUSH_PUBLIC_DATA);
    let header = request.header(GITHUB_SIGNATURE_256_HEADER).unwrap().to_string();

    let event = parser().parse(request, RECEIVED).unwrap();

    assert_eq!(event.signature, header.split_once('=').unwrap().1);
    assert_eq!(event.event_type, "push");
    assert_eq!(event.received, RECEIVED);
    assert_eq!(event.payload, fixtures::PUSH_PUBLIC_DATA.as_bytes());
    assert_eq!(
        event.repo_info,
        Some(RepoInfo {
            is_private: false,
            name: "widgets".into(),
            owner_name: "alice".into(),
            organization_name: "".into(),
        })
    );
}

#[test]
fn test_push_private_with_organization() {
    let event = parser()
        .parse(
            signed_request("push", fixtures::PUSH_PRIVATE_ORG_DATA),
            RECEIVED,
        )
        .unwrap();

    assert_eq!(
        event.repo_info,
        Some(RepoInfo {
            is_private: true,
            name: "secret-sauce".into(),
            owner_name: "acme".into(),
            organization_name: "acme".into(),
        })
    );
}

#[test]
fn test_membership() {
    let event = parser()
        .parse(signed_request("membership", fixtures::MEMBERSHIP_DATA), RECEIVED)
        .unwrap();

    assert_eq!(
        event.repo_info,
        Some(RepoInfo {
            is_private: true,
            name: "".into(),
            owner_name: "".into(),
            organization_name: "acme".into(),
        })
    );
}

#[test]
fn test_membership_ignores_repository_visibility() {
    let body = r#"{"action": "added", "organization": {"login": "acme"}, "repository": {"name": "public", "private": false}}"#;
    let event = parser()
        .parse(signed_request("membership", body), RECEIVED)
        .unwrap();

    let repo_info = event.repo_info.unwrap();
    assert!(repo_info.is_private);
    assert_eq!(repo_info.name, "");
}

#[test]
fn test_organization() {
    let event = parser()
        .parse(
            signed_request("organization", fixtures::ORGANIZATION_DATA),
            RECEIVED,
        )
        .unwrap();

    assert_eq!(
        event.repo_info,
        Some(RepoInfo {
            is_private: false,
            name: "".into(),
            owner_name: "".into(),
            organization_name: "acme".into(),
        })
    );
}

#[test]
fn test_missing_identity_fields_default_to_empty() {
    let cases = [
        (
            "push",
            r#"{"ref": "refs/heads/main"}"#,
            RepoInfo {
                is_private: false,
                name: "".into(),
                owner_name: "".into(),
                organization_name: "".into(),
            },
        ),
        (
            "push",
            r#"{"organization": {"login": "acme"}}"#,
            RepoInfo {
                is_private: false,
                name: "".into(),
                owner_name: "".into(),
                organization_name: "acme".into(),
            },
        ),
        (
            "push",
            r#"{"repository": {"name": null, "private": null, "owner": null}}"#,
            RepoInfo {
                is_private: false,
                name: "".into(),
                owner_name: "".into(),
                organization_name: "".into(),
            },
        ),
        (
            "membership",
            r#"{"action": "added"}"#,
            RepoInfo {
                is_private: true,
                name: "".into(),
                owner_name: "".into(),
                organization_name: "".into(),
            },
        ),
        (
            "membership",
            r#"{"organization": {"login": null}}"#,
            RepoInfo {
                is_private: true,
                name: "".into(),
                owner_name: "".into(),
                organization_name: "".into(),
            },
        ),
        (
            "organization",
            r#"{"action": "renamed"}"#,
            RepoInfo {
                is_private: false,
                name: "".into(),
                owner_name: "".into(),
                organization_name: "".into(),
            },
        ),
        (
            "organization",
            r#"{"organization": null}"#,
            RepoInfo {
                is_private: false,
                name: "".into(),
                owner_name: "".into(),
                organization_name: "".into(),
            },
        ),
    ];

    for (event_type, body, expected) in cases {
        let event = parser()
            .parse(signed_request(event_type, body), RECEIVED)
            .unwrap();

        assert_eq!(event.repo_info, Some(expected), "{event_type}: {body}");
    }
}

#[test]
fn test_pull_request_with_organization() {
    let event = parser()
        .parse(
            signed_request("pull_request", fixtures::PULL_REQUEST_OPENED_DATA),
            RECEIVED,
        )
        .unwrap();

    assert_eq!(
        event.repo_info,
        Some(RepoInfo {
            is_private: false,
            name: "gears".into(),
            owner_name: "acme".into(),
            organization_name: "acme".into(),
        })
    );
}

#[test]
fn test_issues_repository_only() {
    let event = parser()
        .parse(signed_request("issues", fixtures::ISSUES_OPENED_DATA), RECEIVED)
        .unwrap();

    assert_eq!(
        event.repo_info,
        Some(RepoInfo {
            is_private: true,
            name: "widgets".into(),
            owner_name: "alice".into(),
            organization_name: "".into(),
        })
    );
}

#[test]
fn test_unrecognized_shape() {
    let event = parser()
        .parse(
            signed_request("ping", fixtures::PING_ORGANIZATION_DATA),
            RECEIVED,
        )
        .unwrap();

    assert_eq!(event.event_type, "ping");
    assert_eq!(event.repo_info, None);
}

#[test]
fn test_classification_is_idempotent() {
    let first = parser()
        .parse(signed_request("push", fixtures::PUSH_PUBLIC_DATA), RECEIVED)
        .unwrap();
    let second = parser()
        .parse(signed_request("push", fixtures::PUSH_PUBLIC_DATA), RECEIVED)
        .unwrap();

    assert_eq!(first.repo_info, second.repo_info);
    assert_eq!(first, second);
}

#[test]
fn test_sha1_signature() {
    let body = fixtures::PUSH_PUBLIC_DATA;
    let header = sign(SignatureAlgorithm::Sha1, body);
    let request = WebhookRequest::new(body)
        .with_header(GITHUB_EVENT_HEADER, "push")
        .with_header(GITHUB_SIGNATURE_HEADER, &header);

    let event = parser().parse(request, RECEIVED).unwrap();

    assert_eq!(event.signature, header.trim_start_matches("sha1="));
}

#[test]
fn test_sha256_signature_takes_precedence() {
    let body = fixtures::PUSH_PUBLIC_DATA;
    let request = signed_request("push", body)
        .with_header(GITHUB_SIGNATURE_HEADER, "sha1=0000000000000000000000000000000000000000");

    let event = parser().parse(request, RECEIVED).unwrap();

    assert_eq!(
        event.signature,
        sign(SignatureAlgorithm::Sha256, body).trim_start_matches("sha256=")
    );
}

#[test]
fn test_missing_signature() {
    let request = WebhookRequest::new(fixtures::PUSH_PUBLIC_DATA)
        .with_header(GITHUB_EVENT_HEADER, "push");

    assert_eq!(
        auth_error(parser().parse(request, RECEIVED)),
        AuthenticationError::MissingSignature
    );
}

#[test]
fn test_signature_without_separator_is_rejected_before_decoding() {
    let request = WebhookRequest::new("definitely not json")
        .with_header(GITHUB_EVENT_HEADER, "push")
        .with_header(GITHUB_SIGNATURE_256_HEADER, "sha256abcdef");

    assert_eq!(
        auth_error(parser().parse(request, RECEIVED)),
        AuthenticationError::InvalidSignatureFormat {
            header: GITHUB_SIGNATURE_256_HEADER
        }
    );
}

#[test]
fn test_unsupported_algorithm() {
    let request = WebhookRequest::new("{}")
        .with_header(GITHUB_EVENT_HEADER, "push")
        .with_header(GITHUB_SIGNATURE_256_HEADER, "md5=abcdef");

    assert_eq!(
        auth_error(parser().parse(request, RECEIVED)),
        AuthenticationError::UnsupportedAlgorithm {
            algorithm: "md5".into()
        }
    );
}

#[test]
fn test_wrong_secret() {
    let request = signed_request("push", fixtures::PUSH_PUBLIC_DATA);

    let error = auth_error(EventParser::new("another secret").parse(request, RECEIVED));

    assert_eq!(error, AuthenticationError::SignatureMismatch);
    assert!(!error.to_string().contains(SECRET));
}

#[test]
fn test_tampered_body() {
    let header = sign(SignatureAlgorithm::Sha256, fixtures::PUSH_PUBLIC_DATA);
    let tampered = fixtures::PUSH_PUBLIC_DATA.replace("\"private\": false", "\"private\": true");
    let request = WebhookRequest::new(tampered)
        .with_header(GITHUB_EVENT_HEADER, "push")
        .with_header(GITHUB_SIGNATURE_256_HEADER, &header);

    let error = auth_error(parser().parse(request, RECEIVED));

    assert_eq!(error, AuthenticationError::SignatureMismatch);
    assert!(!error.to_string().contains(header.trim_start_matches("sha256=")));
}

#[test]
fn test_missing_event_type() {
    let body = fixtures::PUSH_PUBLIC_DATA;
    let request = WebhookRequest::new(body)
        .with_header(GITHUB_SIGNATURE_256_HEADER, &sign(SignatureAlgorithm::Sha256, body));

    assert!(matches!(
        decode_error(parser().parse(request, RECEIVED)),
        DecodeError::MissingEventType
    ));
}

#[test]
fn test_invalid_payload_for_type() {
    let error = decode_error(parser().parse(signed_request("push", "[1, 2, 3]"), RECEIVED));

    assert!(matches!(
        error,
        DecodeError::InvalidPayload { ref event_type, .. } if event_type == "push"
    ));
}

#[test]
fn test_invalid_payload_message_hides_parser_details() {
    let body = r#"{"repository": {"name": "widgets", "private": "yes"}}"#;
    let error = parser()
        .parse(signed_request("push", body), RECEIVED)
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Error parsing payload: Invalid payload for event type push."
    );
    assert!(matches!(
        error,
        EventError::Decode {
            source: DecodeError::InvalidPayload { .. }
        }
    ));
}

#[test]
fn test_not_json() {
    let error = decode_error(parser().parse(signed_request("issues", "<html>"), RECEIVED));

    assert!(matches!(error, DecodeError::InvalidPayload { .. }));
}

#[test]
fn test_debug_does_not_leak_secret() {
    assert!(!format!("{:?}", parser()).contains(SECRET));
}
