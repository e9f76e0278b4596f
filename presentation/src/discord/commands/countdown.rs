use crate::application_ports::Locator;
use crate::discord::{response, Context, Error};
use tracing::{error, info, instrument};

/// Shows how long until the release, or that it is out.
#[poise::command(slash_command, rename = "countdown")]
#[instrument(level = "info", skip(ctx))]
pub async fn command<D: Sync + Locator>(ctx: Context<'_, D>) -> Result<(), Error> {
    info!(
        guild_id = ctx.guild_id().map(|id| id.get()),
        channel_id = ctx.channel_id().get(),
        user_id = ctx.author().id.get(),
        "Release status requested",
    );

    // Checking the store and drawing the image may exceed the interaction deadline.
    if let Err(err) = ctx.defer().await {
        error!(error = %err, "Failed to defer the countdown reply");
        ctx.send(response::unavailable::temporary_unavailable()).await?;
        return Ok(());
    }

    let status = ctx.data().get_release_status_port().get_release_status().await;

    if let Err(err) = ctx.send(response::release_status::release_status(status)).await {
        error!(error = %err, "Failed to send the countdown reply");
        ctx.send(response::unavailable::temporary_unavailable()).await?;
    }

    Ok(())
}
