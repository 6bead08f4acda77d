//! Server tests


use actix_http::StatusCode;
use actix_web::{test, web::Data};
use hookbridge_config::Config;
use hookbridge_crypto::{Signature, SignatureAlgorithm};
use hookbridge_event::constants::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_256_HEADER};
use hookbridge_feed_interface::{FeedError, MockFeed};
use pretty_assertions::assert_eq;

use crate::{metrics::build_metrics_handler, server::build_actix_app, AppContext};

const SECRET: &str = "iAmAsEcReTkEy";

fn config(vars: &[(&'static str, &'static str)]) -> Config {
    let vars = vars.to_vec();
    Config::from_lookup("1.0.0".into(), move |name| {
        if name == "WEBHOOK_SECRET" {
            return Some(SECRET.into());
        }

        vars.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.to_string())
    })
    .unwrap()
}

fn context(feed: MockFeed, public_feed: MockFeed) -> Data<AppContext> {
    Data::new(AppContext::new_with_feeds(
        config(&[]),
        Box::new(feed),
        Box::new(public_feed),
    ))
}

fn signed_request(event_type: &str, body: &'static str) -> test::TestRequest {
    let signature =
        Signature::compute_header(SignatureAlgorithm::Sha256, body.as_bytes(), SECRET).unwrap();

    test::TestRequest::post()
        .uri("/")
        .insert_header(("Content-Type", "application/json"))
        .insert_header((GITHUB_EVENT_HEADER, event_type))
        .insert_header((GITHUB_SIGNATURE_256_HEADER, signature))
        .set_payload(body)
}

#[actix_rt::test]
async fn test_health_check() {
    let app = test::init_service(build_actix_app(
        context(MockFeed::new(), MockFeed::new()),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/healthz").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "OK");
}

#[actix_rt::test]
async fn test_public_push_is_published_twice() {
    let mut feed = MockFeed::new();
    feed.expect_publish()
        .withf(|m| m.attributes.get("repository").map(String::as_str) == Some("widgets"))
        .times(1)
        .returning(|_| Ok(()));
    let mut public_feed = MockFeed::new();
    public_feed
        .expect_publish()
        .withf(|m| m.attributes.get("owner").map(String::as_str) == Some("alice"))
        .times(1)
        .returning(|_| Ok(()));

    let app = test::init_service(build_actix_app(
        context(feed, public_feed),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let resp = test::call_service(
        &app,
        signed_request("push", fixtures::PUSH_PUBLIC_DATA).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_private_push_is_published_once() {
    let mut feed = MockFeed::new();
    feed.expect_publish()
        .withf(|m| m.attributes.get("organization").map(String::as_str) == Some("acme"))
        .times(1)
        .returning(|_| Ok(()));
    let mut public_feed = MockFeed::new();
    public_feed.expect_publish().never();

    let app = test::init_service(build_actix_app(
        context(feed, public_feed),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let resp = test::call_service(
        &app,
        signed_request("push", fixtures::PUSH_PRIVATE_ORG_DATA).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_invalid_signature() {
    let mut feed = MockFeed::new();
    feed.expect_publish().never();
    let mut public_feed = MockFeed::new();
    public_feed.expect_publish().never();

    let app = test::init_service(build_actix_app(
        context(feed, public_feed),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let req = signed_request("push", fixtures::PUSH_PUBLIC_DATA)
        .insert_header((GITHUB_SIGNATURE_256_HEADER, "sha256=0000"))
        .to_request();
    let resp: serde_json::Value = {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        test::read_body_json(resp).await
    };

    assert_eq!(resp, serde_json::json!({"error": "Error validating payload: Invalid webhook signature."}));
    assert!(!resp.to_string().contains(SECRET));
}

#[actix_rt::test]
async fn test_missing_signature() {
    let app = test::init_service(build_actix_app(
        context(MockFeed::new(), MockFeed::new()),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/")
        .insert_header((GITHUB_EVENT_HEADER, "push"))
        .set_payload(fixtures::PUSH_PUBLIC_DATA)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_invalid_payload() {
    let app = test::init_service(build_actix_app(
        context(MockFeed::new(), MockFeed::new()),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let resp = test::call_service(&app, signed_request("push", "[]").to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_invalid_payload_response_hides_parser_details() {
    let mut feed = MockFeed::new();
    feed.expect_publish().never();
    let mut public_feed = MockFeed::new();
    public_feed.expect_publish().never();

    let app = test::init_service(build_actix_app(
        context(feed, public_feed),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let req = signed_request("push", r#"{"repository": {"name": "widgets", "private": "yes"}}"#)
        .to_request();
    let resp: serde_json::Value = {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        test::read_body_json(resp).await
    };

    assert_eq!(
        resp,
        serde_json::json!({"error": "Error parsing payload: Invalid payload for event type push."})
    );
    assert!(!resp.to_string().contains("yes"));
    assert!(!resp.to_string().contains("line"));
}

#[actix_rt::test]
async fn test_push_without_repository_is_published_publicly() {
    let mut feed = MockFeed::new();
    feed.expect_publish().times(1).returning(|_| Ok(()));
    let mut public_feed = MockFeed::new();
    public_feed.expect_publish().times(1).returning(|_| Ok(()));

    let app = test::init_service(build_actix_app(
        context(feed, public_feed),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let resp = test::call_service(
        &app,
        signed_request("push", r#"{"ref": "refs/heads/main"}"#).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_primary_feed_failure() {
    let mut feed = MockFeed::new();
    feed.expect_publish().times(1).returning(|_| {
        Err(FeedError::Rejected {
            feed: "githubevent".into(),
            status: 503,
            body: "unavailable".into(),
        })
    });
    let mut public_feed = MockFeed::new();
    public_feed.expect_publish().never();

    let app = test::init_service(build_actix_app(
        context(feed, public_feed),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let resp = test::call_service(
        &app,
        signed_request("push", fixtures::PUSH_PUBLIC_DATA).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_rt::test]
async fn test_public_feed_failure() {
    let mut feed = MockFeed::new();
    feed.expect_publish().times(1).returning(|_| Ok(()));
    let mut public_feed = MockFeed::new();
    public_feed.expect_publish().times(1).returning(|_| {
        Err(FeedError::Rejected {
            feed: "githubevent-public".into(),
            status: 503,
            body: "unavailable".into(),
        })
    });

    let app = test::init_service(build_actix_app(
        context(feed, public_feed),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let resp = test::call_service(
        &app,
        signed_request("push", fixtures::PUSH_PUBLIC_DATA).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_rt::test]
async fn test_payload_too_large() {
    let ctx = Data::new(AppContext::new_with_feeds(
        config(&[("MAX_PAYLOAD_SIZE", "16")]),
        Box::new(MockFeed::new()),
        Box::new(MockFeed::new()),
    ));
    let app = test::init_service(build_actix_app(ctx, build_metrics_handler().unwrap())).await;

    let resp = test::call_service(
        &app,
        signed_request("push", fixtures::PUSH_PUBLIC_DATA).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_rt::test]
async fn test_metrics() {
    let mut feed = MockFeed::new();
    feed.expect_publish().times(1).returning(|_| Ok(()));
    let mut public_feed = MockFeed::new();
    public_feed.expect_publish().never();

    let app = test::init_service(build_actix_app(
        context(feed, public_feed),
        build_metrics_handler().unwrap(),
    ))
    .await;

    test::call_service(
        &app,
        signed_request("push", fixtures::PUSH_PRIVATE_ORG_DATA).to_request(),
    )
    .await;
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains("hookbridge_feed_publish_total"));
    assert!(body.contains("hookbridge_http_requests_total"));
}
