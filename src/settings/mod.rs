//! Gate configuration

mod config;

pub use config::*;
