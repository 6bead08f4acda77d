use std::{io::Write, path::PathBuf};

use async_trait::async_trait;
use clap::Parser;
use hookbridge_crypto::{Signature, SignatureAlgorithm};

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Compute the signature header of a payload file, using the webhook secret
#[derive(Parser)]
pub(crate) struct SignPayloadCommand {
    /// Payload file
    payload_file: PathBuf,

    /// Signature algorithm
    #[clap(short, long, default_value = "sha256")]
    algorithm: SignatureAlgorithm,
}

#[async_trait]
impl Command for SignPayloadCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let body = tokio::fs::read(self.payload_file).await?;
        let header =
            Signature::compute_header(self.algorithm, &body, &ctx.config.server.webhook_secret)?;
        writeln!(ctx.writer.write().await, "{header}")?;

        Ok(())
    }
}
