pub mod release_status;
pub mod unavailable;
