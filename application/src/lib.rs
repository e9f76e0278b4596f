pub mod countdown_channel;
pub mod countdown_tick_handler;
pub mod notification_state;
pub mod release_check_tick_handler;
pub mod release_status;

#[cfg(test)]
mod test_support;
