use std::sync::Arc;

use crate::services::spotify::SpotifyClient;

#[derive(Clone)]
pub struct AppState {
    pub spotify: Arc<SpotifyClient>,
}

impl AppState {
    pub fn new(spotify: Arc<SpotifyClient>) -> Self {
        Self { spotify }
    }
}
