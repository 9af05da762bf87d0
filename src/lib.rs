pub mod avatar;
pub mod client;
pub mod executor;
pub mod picture;
