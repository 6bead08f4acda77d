//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use hookbridge_config::Config;
use hookbridge_core::FanoutPublisher;
use hookbridge_event::EventParser;
use hookbridge_feed_interface::Feed;
use sentry_actix::Sentry;
use tracing::info;

use crate::{
    health::health_check_route, metrics::build_metrics_handler, webhook::event_handler,
    MetricsFeed, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Webhook parser.
    pub parser: EventParser,
    /// Event publisher.
    pub publisher: FanoutPublisher,
}

impl AppContext {
    /// Create new app context from the primary and public-only feeds.
    pub fn new_with_feeds(config: Config, feed: Box<dyn Feed>, public_feed: Box<dyn Feed>) -> Self {
        let feed = MetricsFeed::new(config.feed.topic.clone(), feed);
        let public_feed = MetricsFeed::new(config.feed.public_topic.clone(), public_feed);

        Self {
            parser: EventParser::new(config.server.webhook_secret.clone()),
            publisher: FanoutPublisher::new(Box::new(feed), Box::new(public_feed)),
            config,
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let payload_config = web::PayloadConfig::new(context.config.server.max_payload_size);

    App::new()
        .app_data(context)
        .app_data(payload_config)
        .wrap(prometheus)
        .wrap(Sentry::new())
        .wrap(Logger::default())
        .route("/", web::post().to(event_handler))
        .route("/healthz", web::get().to(health_check_route))
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        topic = context.config.feed.topic,
        public_topic = context.config.feed.public_topic,
        message = "Starting webhook bridge",
    );

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let workers_count = context.config.server.workers_count;
    let prometheus = build_metrics_handler()?;

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));

    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}

