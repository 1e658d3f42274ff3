pub mod calc;
pub mod config;
