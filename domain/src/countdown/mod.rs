mod bucket;
mod channel;
mod readout;
mod target;

pub use bucket::{CountdownBucket, RELEASED_CHANNEL_LABEL};
pub use channel::CountdownChannel;
pub use readout::format_readout;
pub use target::{CountdownTarget, CountdownTargetError};
