pub mod client;
pub mod job;
pub mod shift;
