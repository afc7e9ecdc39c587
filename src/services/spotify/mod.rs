pub mod client;
pub mod error;

pub use client::{RefreshedToken, SpotifyClient};
pub use error::ExchangeError;
