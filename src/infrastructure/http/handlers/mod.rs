//! HTTP Handlers

mod ping;

pub use ping::*;
