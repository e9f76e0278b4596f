pub mod announcements;
pub mod countdown;
pub mod notification_state;
pub mod ports;
pub mod product;
