use domain::ports::discord::ChannelId;
use tracing::instrument;

#[instrument(level = "trace", skip(channel_id))]
pub fn domain_to_serenity_channel_id(channel_id: ChannelId) -> serenity::all::ChannelId {
    serenity::all::ChannelId::new(channel_id.0)
}
