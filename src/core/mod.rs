pub mod add;
pub mod clock;
pub mod del;
pub mod manual;
pub mod registry;
pub mod time_source;
pub mod validate;
