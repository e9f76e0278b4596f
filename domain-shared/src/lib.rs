pub mod discord;
pub mod store_front;
