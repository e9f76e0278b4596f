use poise::CreateReply;
use tracing::instrument;

#[instrument(level = "debug", skip_all)]
pub fn temporary_unavailable() -> CreateReply {
    let response = "Sorry, the countdown is unavailable right now. Please try again later.";

    CreateReply::default()
        .content(response)
        .ephemeral(true)
        .reply(true)
}
