use application_ports::release_status::{CountdownImageDto, ReleaseStatusDto};
use poise::serenity_prelude::CreateAttachment;
use poise::CreateReply;
use tracing::instrument;

const IMAGE_APOLOGY: &str = "(Sorry, the countdown image could not be generated.)";

#[instrument(level = "debug", skip_all)]
pub fn release_status(status: ReleaseStatusDto) -> CreateReply {
    let ReleaseStatusDto {
        released: _,
        status_text,
        image,
    } = status;

    match image {
        Some(CountdownImageDto { content, filename }) => CreateReply::default()
            .content(status_text)
            .attachment(CreateAttachment::bytes(content, filename)),
        None => CreateReply::default().content(format!("{status_text}\n{IMAGE_APOLOGY}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(image: Option<CountdownImageDto>) -> ReleaseStatusDto {
        ReleaseStatusDto {
            released: false,
            status_text: "**Deltarune** releases in 3 days (June 05, 2025).".to_string(),
            image,
        }
    }

    #[test]
    fn attaches_the_image() {
        let reply = release_status(status(Some(CountdownImageDto {
            content: vec![1, 2, 3],
            filename: "countdown.png".to_string(),
        })));

        assert_eq!(
            reply.content.as_deref(),
            Some("**Deltarune** releases in 3 days (June 05, 2025).")
        );
        assert_eq!(reply.attachments.len(), 1);
        assert_eq!(reply.attachments[0].filename, "countdown.png");
    }

    #[test]
    fn apologises_without_an_image() {
        let reply = release_status(status(None));

        assert!(reply.attachments.is_empty());
        assert!(reply
            .content
            .as_deref()
            .is_some_and(|content| content.ends_with(IMAGE_APOLOGY)));
    }
}
