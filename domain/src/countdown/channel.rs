use domain_shared::discord::ChannelId;

/// The channel whose name shows the countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownChannel {
    pub channel_id: ChannelId,
    pub name_prefix: String,
}

impl CountdownChannel {
    pub fn new(channel_id: ChannelId, name_prefix: impl Into<String>) -> Self {
        Self {
            channel_id,
            name_prefix: name_prefix.into(),
        }
    }

    pub fn channel_name(&self, label: &str) -> String {
        format!("{}{}", self.name_prefix, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_name_prepends_prefix() {
        let channel = CountdownChannel::new(ChannelId(1), "deltarune-");

        assert_eq!(channel.channel_name("tomorrow"), "deltarune-tomorrow");
    }

    #[test]
    fn empty_prefix_keeps_label() {
        let channel = CountdownChannel::new(ChannelId(1), "");

        assert_eq!(channel.channel_name("in-3-days"), "in-3-days");
    }
}
