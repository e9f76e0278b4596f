use domain::ports::discord::CreateMessage;
use tracing::instrument;

#[instrument(level = "trace", skip(message))]
pub fn domain_to_serenity_create_message(message: CreateMessage) -> serenity::all::CreateMessage {
    let CreateMessage { content } = message;

    let mut message = serenity::all::CreateMessage::new();

    if let Some(content) = content {
        message = message.content(content);
    }

    message
}
