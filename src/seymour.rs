//! Main module for seymour library functionality

pub mod config;
pub mod emitter;
pub mod error;
pub mod lexing;
pub mod loader;
pub mod nesting;
pub mod output;
pub mod processor;
pub mod selectors;
pub mod token;
