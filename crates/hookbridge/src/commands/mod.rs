//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use hookbridge_config::Config;
use hookbridge_feed_interface::Feed;
use tokio::sync::RwLock;

use self::{debug::DebugCommand, server::ServerCommand, utils::UtilsCommand};
use crate::Result;

mod debug;
mod server;
mod utils;

pub(crate) struct CommandContext {
    pub config: Config,
    pub feed: Box<dyn Feed>,
    pub public_feed: Box<dyn Feed>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Utils(UtilsCommand),
    Debug(DebugCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Utils(sub) => sub.execute(ctx).await,
            Self::Debug(sub) => sub.execute(ctx).await,
        }
    }
}
