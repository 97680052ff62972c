// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod detector;
pub mod error;
pub mod query;
pub mod runner;
pub mod scrape;
pub mod sink;
pub mod specs;

pub use error::{Result, ScrapeError};
