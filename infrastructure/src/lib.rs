pub mod clock;
pub mod countdown_image;
pub mod discord;
pub mod notification_state;
pub mod store_front;
