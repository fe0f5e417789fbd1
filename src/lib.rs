// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod error;
pub mod model;
pub mod frame;
pub mod archive;
pub mod csv;
pub mod file;
pub mod store;
pub mod progress;
pub mod runner;
pub mod analysis;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, ExtractError, Result};
