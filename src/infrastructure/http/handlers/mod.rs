//! HTTP Handlers

mod ping;
mod questions;

pub use ping::*;
pub use questions::*;
