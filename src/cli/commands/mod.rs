pub mod allocation;
pub mod migrate;
pub mod user;
