use std::sync::Arc;

use clap::Parser;
use hookbridge_config::{Config, FeedDriver};
use hookbridge_feed_interface::Feed;
use hookbridge_feed_null::NullFeed;
use hookbridge_feed_pubsub::PubSubClient;
use hookbridge_sentry::with_sentry_configuration;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(version, about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let (feed, public_feed) = Self::build_feeds(&config)?;

            let ctx = CommandContext {
                config: config.clone(),
                feed,
                public_feed,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            with_sentry_configuration(&config, || async {
                Self::parse_args_async(args, ctx).await
            })
            .await
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        actix_rt::System::with_tokio_rt(|| runtime).block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }

    fn build_feeds(config: &Config) -> Result<(Box<dyn Feed>, Box<dyn Feed>)> {
        let (topic, public_topic) = (&config.feed.topic, &config.feed.public_topic);
        let feed: Box<dyn Feed>;
        let public_feed: Box<dyn Feed>;

        match config.feed.driver {
            FeedDriver::PubSub => {
                info!(
                    project = config.feed.pubsub.project,
                    root_url = config.feed.pubsub.effective_root_url(),
                    message = "Using PubSubFeed feed driver"
                );

                let client = PubSubClient::new(config)?;
                feed = Box::new(client.topic(topic));
                public_feed = Box::new(client.topic(public_topic));
            }
            FeedDriver::Null => {
                info!("Using NullFeed feed driver");
                feed = Box::new(NullFeed::new(topic));
                public_feed = Box::new(NullFeed::new(public_topic));
            }
        }

        Ok((feed, public_feed))
    }
}
