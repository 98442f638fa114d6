pub mod config;
pub mod detect;
