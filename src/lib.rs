pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod gui;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
