use std::env;

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo-0613";
pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup and carried in the router
/// state. Handlers never touch the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Box<str>,
    pub api_url: Box<str>,
    pub model: Box<str>,
    pub port: u16,
    pub static_dir: Box<str>,
}

impl Config {
    pub fn from_env() -> Self {
        let api_key: Box<str> = env::var("OPENROUTER_API_KEY").unwrap_or_default().into();
        if api_key.is_empty() {
            // Not fatal: the upstream rejects the calls instead, and the
            // relay surfaces that as its 500 error contract.
            tracing::warn!("OPENROUTER_API_KEY is not set; every /chat call will fail upstream");
        }

        let api_url = env::var("OPENROUTER_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.into())
            .into();
        let model = env::var("MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.into())
            .into();
        let port = env::var("PORT")
            .map(|port| port.parse::<u16>().expect("Invalid PORT"))
            .unwrap_or(DEFAULT_PORT);
        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".into())
            .into();

        Self {
            api_key,
            api_url,
            model,
            port,
            static_dir,
        }
    }
}
