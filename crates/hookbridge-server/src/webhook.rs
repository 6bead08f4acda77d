//! Webhook handler.

use actix_web::{web, HttpRequest, HttpResponse};
use hookbridge_event::{constants::GITHUB_EVENT_HEADER, WebhookRequest};
use time::OffsetDateTime;
use tracing::warn;

use crate::{server::AppContext, Result};

/// Full cause chain, for logs only.
fn error_chain(error: &dyn std::error::Error) -> String {
    std::iter::successors(Some(error), |e| e.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",\n  caused by: ")
}

fn convert_request(req: &HttpRequest, body: web::Bytes) -> WebhookRequest {
    req.headers()
        .iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|value| (name.as_str(), value)))
        .fold(WebhookRequest::new(body.to_vec()), |request, (name, value)| {
            request.with_header(name, value)
        })
}

#[tracing::instrument(
    skip_all,
    fields(
        event_type = req
            .headers()
            .get(GITHUB_EVENT_HEADER)
            .and_then(|v| v.to_str().ok())
    )
)]
pub(crate) async fn event_handler(
    req: HttpRequest,
    body: web::Bytes,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    let request = convert_request(&req, body);
    let event = ctx
        .parser
        .parse(request, OffsetDateTime::now_utc())
        .map_err(|e| {
            warn!(error = %error_chain(&e), message = "Rejected webhook request");
            e
        })?;

    ctx.publisher.publish(&event).await?;

    Ok(HttpResponse::Ok().finish())
}
