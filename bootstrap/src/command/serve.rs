use crate::args::CountdownArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use application::countdown_channel::SharedCountdownChannel;
use application::notification_state::SharedNotificationState;
use application::release_status::ReleaseStatusService;
use clap::Args;
use domain::countdown::CountdownChannel;
use domain_shared::discord::ChannelId;
use infrastructure::clock::SystemClock;
use infrastructure::countdown_image::CountdownImageRenderer;
use infrastructure::discord::DiscordAdapter;
use infrastructure::notification_state::JsonFileNotificationStateRepository;
use infrastructure::store_front::SteamStoreAdapter;
use presentation::discord::run_bot;
use presentation::worker::{run_worker, WorkerIntervals};
use serenity::all::{ClientBuilder, GatewayIntents, GuildId};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

const STORE_FRONT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub countdown: CountdownArgs,
    /// The token for the Discord bot
    #[arg(long, env = "DISCORD_BOT_TOKEN")]
    pub discord_bot_token: String,
    /// The ID of the Discord guild (server) for the bot to serve in
    #[arg(long, env = "DISCORD_GUILD_ID")]
    pub guild: u64,
    /// The channel whose name shows the countdown and receives announcements
    #[arg(long, env = "COUNTDOWN_CHANNEL_ID")]
    pub countdown_channel_id: u64,
    #[arg(long, env = "CHANNEL_NAME_PREFIX", default_value = "")]
    pub channel_name_prefix: String,
    #[arg(long, env = "STATE_FILE", default_value = "bot_state.json")]
    pub state_file: PathBuf,
    #[arg(long, env = "COUNTDOWN_INTERVAL_SECS", default_value_t = 300)]
    pub countdown_interval_secs: u64,
    #[arg(long, env = "RELEASE_CHECK_INTERVAL_SECS", default_value_t = 60)]
    pub release_check_interval_secs: u64,
    #[arg(long, env = "RELEASE_CHECK_OVERDUE_INTERVAL_SECS", default_value_t = 3600)]
    pub release_check_overdue_interval_secs: u64,
}

#[instrument(level = "trace", skip(args))]
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let ServeArgs {
        countdown,
        discord_bot_token,
        guild,
        countdown_channel_id,
        channel_name_prefix,
        state_file,
        countdown_interval_secs,
        release_check_interval_secs,
        release_check_overdue_interval_secs,
    } = args;
    let guild = GuildId::new(guild);
    let target = countdown.countdown_target()?;
    let product = countdown.product();
    let channel = CountdownChannel::new(ChannelId(countdown_channel_id), channel_name_prefix);
    let intervals = WorkerIntervals {
        countdown: Duration::from_secs(countdown_interval_secs),
        release_check: Duration::from_secs(release_check_interval_secs),
        release_check_overdue: Duration::from_secs(release_check_overdue_interval_secs),
    };

    let intents = GatewayIntents::non_privileged();

    let serenity_client = ClientBuilder::new(&discord_bot_token, intents).await?.http;

    let discord_adapter = Arc::new(DiscordAdapter::new(serenity_client));
    let store_front_adapter = Arc::new(SteamStoreAdapter::new(
        countdown.steam_store_url.clone(),
        STORE_FRONT_TIMEOUT,
    )?);
    let clock = Arc::new(SystemClock);
    let countdown_image_adapter = Arc::new(CountdownImageRenderer::new(countdown.image_config()));
    let notification_state_repository =
        Arc::new(JsonFileNotificationStateRepository::new(state_file));

    let notification_state =
        Arc::new(SharedNotificationState::load(notification_state_repository).await);
    let countdown_channel = Arc::new(SharedCountdownChannel::new(discord_adapter, channel));
    let release_status_adapter = Arc::new(ReleaseStatusService::new(
        store_front_adapter.clone(),
        countdown_image_adapter,
        clock.clone(),
        notification_state.clone(),
        product.clone(),
        target,
    ));

    info!(
        product = %product.name,
        app_id = product.app_id.0,
        target = %target.instant(),
        timezone = %target.timezone(),
        display_date = %target.display_date_text(),
        channel_id = countdown_channel_id,
        "Starting release countdown",
    );

    let locator = ApplicationPortLocator {
        product,
        target,
        countdown_channel,
        store_front_adapter,
        clock,
        notification_state,
        release_status_adapter,
    };

    let worker = tokio::spawn(run_worker(locator.clone(), intervals));
    let mut bot = tokio::spawn(run_bot(locator, discord_bot_token, intents, guild));

    // The worker finishes once the release is announced, the bot keeps serving.
    tokio::select! {
        result = &mut bot => return result?.map_err(|e| anyhow!(e)),
        result = worker => result?.map_err(|e| anyhow!(e))?,
    }
    bot.await?.map_err(|e| anyhow!(e))?;

    Ok(())
}
