pub mod fetch;
pub mod setup;
