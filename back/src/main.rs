use std::sync::Arc;

use advisor::{AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Create shared state and serve
    let state = Arc::new(AppState::new(config));
    advisor::serve(state).await;
}
