pub mod calc;
pub mod config;
pub mod demo;
pub mod error;
pub mod output;
