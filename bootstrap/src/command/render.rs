use crate::args::CountdownArgs;
use chrono::Utc;
use clap::Args;
use domain::ports::countdown_image::CountdownImagePort;
use infrastructure::countdown_image::CountdownImageRenderer;
use std::path::PathBuf;
use tracing::{info, instrument};

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub countdown: CountdownArgs,
    /// Where to write the PNG
    #[arg(long, short, default_value = "countdown.png")]
    pub output: PathBuf,
    /// Draw the "Released!" card instead of the countdown
    #[arg(long)]
    pub released: bool,
}

#[instrument(level = "trace", skip(args))]
pub async fn run(args: RenderArgs) -> anyhow::Result<()> {
    let RenderArgs {
        countdown,
        output,
        released,
    } = args;
    let target = countdown.countdown_target()?;
    let renderer = CountdownImageRenderer::new(countdown.image_config());

    let image = renderer.render(released, &target, Utc::now()).await?;
    tokio::fs::write(&output, &image.content).await?;

    info!(
        path = %output.display(),
        released,
        bytes = image.content.len(),
        "Countdown image written",
    );

    Ok(())
}
