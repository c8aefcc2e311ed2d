//! HTTP Handlers

mod health;
mod pages;
mod ping;

pub use health::*;
pub use pages::*;
pub use ping::*;
