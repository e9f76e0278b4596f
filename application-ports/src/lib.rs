pub mod countdown_tick_handler;
pub mod release_check_tick_handler;
pub mod release_status;
