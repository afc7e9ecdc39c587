use spotify_token_relay::{app, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    app::run().await
}
