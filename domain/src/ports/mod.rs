pub mod clock;
pub mod countdown_image;
pub mod discord;
pub mod store_front;
