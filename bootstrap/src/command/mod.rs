pub mod render;
pub mod serve;

use crate::command::render::RenderArgs;
use crate::command::serve::ServeArgs;
use clap::Subcommand;
use tracing::instrument;

#[derive(Subcommand)]
pub enum Command {
    /// Runs the bot until it is stopped
    #[command(name = "serve")]
    Serve(#[arg(flatten)] ServeArgs),
    /// Writes the status image to a file
    #[command(name = "render")]
    Render(#[arg(flatten)] RenderArgs),
}

impl Command {
    #[instrument(level = "trace", skip(self))]
    pub async fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Serve(args) => serve::run(args).await,
            Command::Render(args) => render::run(args).await,
        }
    }
}
