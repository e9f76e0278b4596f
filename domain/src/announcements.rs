use crate::countdown::{CountdownBucket, CountdownTarget};
use crate::ports::discord::CreateMessage;
use crate::product::Product;
use tracing::instrument;

#[instrument(level = "trace", skip_all)]
pub fn tomorrow_announcement(product: &Product, target: &CountdownTarget) -> CreateMessage {
    CreateMessage::default().content(format!(
        "Only one day left! **{}** releases tomorrow, {}.",
        product.name,
        target.display_date_text(),
    ))
}

#[instrument(level = "trace", skip_all)]
pub fn release_announcement(product: &Product) -> CreateMessage {
    CreateMessage::default().content(format!(
        "**{}** is out now! Get it here: {}",
        product.name,
        product.store_url(),
    ))
}

/// Human readable status for the on-demand status command. Uses the same
/// buckets as the channel name.
#[instrument(level = "trace", skip(product, target))]
pub fn release_status_text(
    product: &Product,
    target: &CountdownTarget,
    released: bool,
    bucket: CountdownBucket,
) -> String {
    if released {
        return format!("**{}** is out now! {}", product.name, product.store_url());
    }

    match bucket {
        CountdownBucket::Days(days) => format!(
            "**{}** releases in {} days ({}).",
            product.name,
            days,
            target.display_date_text(),
        ),
        CountdownBucket::Tomorrow => format!(
            "**{}** releases tomorrow ({})!",
            product.name,
            target.display_date_text(),
        ),
        CountdownBucket::Hours(hours) => {
            format!("**{}** releases today, in {} hours!", product.name, hours)
        }
        CountdownBucket::Passed => format!(
            "The release time of **{}** has passed, waiting for the store page to confirm it.",
            product.name,
        ),
    }
}
